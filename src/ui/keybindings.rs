use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Hints for the current mode
fn hints_for(mode: UiMode) -> Vec<&'static str> {
    match mode {
        UiMode::Normal => vec![
            " ↑/↓ select   ",
            "Space toggle   ",
            "f focus   ",
            "a add   ",
            "1/2/3 filter   ",
            "s settings   ",
            "q quit",
        ],
        UiMode::AddingTodo => vec![
            " Tab next field   ",
            "←/→ change   ",
            "Enter add   ",
            "Esc back to list",
        ],
        UiMode::Focus => vec![" Esc/x cancel session   ", "q quit"],
        UiMode::Settings => vec![
            " Tab next field   ",
            "←/→ priority   ",
            "Enter save   ",
            "Esc cancel",
        ],
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, mode: UiMode, area: Rect) {
    let hints = Line::from(hints_for(mode).into_iter().map(Span::raw).collect::<Vec<_>>());

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints_for_each_mode() {
        assert!(hints_for(UiMode::Normal).iter().any(|h| h.contains("focus")));
        assert!(hints_for(UiMode::Focus).iter().any(|h| h.contains("cancel")));
        assert!(hints_for(UiMode::Settings).iter().any(|h| h.contains("save")));
    }
}
