use crate::app::AppState;
use crate::domain::UiMode;
use crate::forms::{DraftField, TodoDraft};
use crate::ui::styles::{
    active_border_style, border_style, dim_style, modal_title_style, priority_style, title_style,
};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the new-todo form pane
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    let editing = app.ui_mode == UiMode::AddingTodo;
    let draft = &app.draft;

    let title_line = draft_title_line(draft, editing);
    let fields_line = draft_fields_line(draft, editing);

    let paragraph = Paragraph::new(vec![title_line, fields_line]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(if editing {
                active_border_style()
            } else {
                border_style()
            })
            .title(Span::styled(" Add Task ", title_style())),
    );

    f.render_widget(paragraph, area);
}

fn draft_title_line(draft: &TodoDraft, editing: bool) -> Line<'static> {
    let focused = editing && draft.editing_field == DraftField::Title;
    let mut spans = vec![Span::raw("> ")];

    if draft.title.is_empty() && !focused {
        spans.push(Span::styled("Add a new task...", dim_style()));
    } else {
        spans.push(Span::styled(draft.title.clone(), modal_title_style()));
    }
    if focused {
        spans.push(Span::styled("█", modal_title_style())); // Cursor
    }

    Line::from(spans)
}

fn draft_fields_line(draft: &TodoDraft, editing: bool) -> Line<'static> {
    let field = |which: DraftField, label: &str, value: String, style: Style| {
        let marker = if editing && draft.editing_field == which { "◂ ▸" } else { "" };
        vec![
            Span::styled(format!("  {}: ", label), dim_style()),
            Span::styled(value, style),
            Span::styled(marker.to_string(), modal_title_style()),
        ]
    };

    let mut spans = Vec::new();
    spans.extend(field(
        DraftField::Priority,
        "Priority",
        draft.priority.label().to_string(),
        priority_style(draft.priority),
    ));
    spans.extend(field(
        DraftField::DueDate,
        "Due",
        draft.due_date.format("%Y-%m-%d").to_string(),
        Style::default(),
    ));
    spans.extend(field(
        DraftField::Category,
        "Category",
        draft.category.clone(),
        Style::default(),
    ));

    Line::from(spans)
}
