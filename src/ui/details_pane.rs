use crate::app::AppState;
use crate::domain::Priority;
use crate::ui::styles::{border_style, default_style, done_style, focus_style, priority_style, title_style};
use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the details pane for the selected todo
pub fn render_details_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Details ", title_style()));

    let visible = app.visible_todos();
    let Some(todo) = visible.get(app.selected_index) else {
        let empty = Paragraph::new("No task selected").block(block);
        f.render_widget(empty, area);
        return;
    };

    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Title: ", title_style()),
        Span::raw(todo.title.clone()),
    ]));
    lines.push(Line::raw(""));

    lines.push(Line::from(vec![
        Span::styled("Priority: ", title_style()),
        Span::styled(todo.priority.label(), priority_style(todo.priority)),
    ]));

    // Due date, flagged when past due and still open
    let today = Local::now().date_naive();
    let overdue = !todo.completed && todo.due_date < today;
    lines.push(Line::from(vec![
        Span::styled("Due:      ", title_style()),
        Span::raw(todo.due_date.format("%a %b %d, %Y").to_string()),
        if overdue {
            Span::styled("  (overdue)", priority_style(Priority::High))
        } else {
            Span::raw("")
        },
    ]));

    lines.push(Line::from(vec![
        Span::styled("Category: ", title_style()),
        Span::raw(todo.category.clone()),
    ]));

    let status = if todo.completed {
        Span::styled("Completed", done_style())
    } else {
        Span::styled("Active", default_style())
    };
    lines.push(Line::from(vec![Span::styled("Status:   ", title_style()), status]));
    lines.push(Line::raw(""));

    // Focus session info
    match &app.focus {
        Some(focus) if focus.session.todo_id == todo.id => {
            lines.push(Line::from(vec![
                Span::styled("Focus: ", title_style()),
                Span::styled(format!("{} left", focus.timer.display()), focus_style()),
            ]));
            lines.push(Line::raw(format!(
                "  started {} · ends {}",
                focus.session.started_at.format("%H:%M"),
                focus.session.ends_at().format("%H:%M")
            )));
        }
        _ => {
            lines.push(Line::from(Span::styled(
                format!("Focus: press f for {} min", app.settings.default_focus_duration),
                default_style(),
            )));
        }
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
