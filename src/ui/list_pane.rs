use crate::app::AppState;
use crate::domain::{Filter, Todo};
use crate::ui::styles::{
    border_style, category_style, completed_style, default_style, dim_style, done_style,
    focus_style, priority_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs},
    Frame,
};
use uuid::Uuid;

/// Render the all/active/completed filter tabs
pub fn render_filter_tabs(f: &mut Frame, app: &AppState, area: Rect) {
    let counts = app.todos.counts();
    let titles: Vec<Line> = Filter::all()
        .iter()
        .enumerate()
        .map(|(idx, filter)| {
            Line::from(format!(
                "{} {} ({})",
                idx + 1,
                filter.label(),
                counts.for_filter(*filter)
            ))
        })
        .collect();
    let selected = Filter::all()
        .iter()
        .position(|filter| *filter == app.filter)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(dim_style())
        .highlight_style(selected_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style()),
        );

    f.render_widget(tabs, area);
}

/// Render the todo list for the current filter
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let visible = app.visible_todos();
    let focus_id = app.focus.as_ref().map(|focus| focus.session.todo_id);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(
            format!(" Todo List ({}) ", app.filter.label()),
            title_style(),
        ));

    if visible.is_empty() {
        let message = if app.todos.is_empty() {
            "No tasks yet. Press 'a' to add one."
        } else {
            empty_message(app.filter)
        };
        let empty = Paragraph::new(message)
            .style(dim_style())
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(idx, todo)| {
            let line = create_todo_line(todo, focus_id);
            let style = if idx == app.selected_index {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

fn empty_message(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "No tasks.",
        Filter::Active => "Nothing left to do.",
        Filter::Completed => "No completed tasks.",
    }
}

/// Create a single line for a todo
/// Format: [✓] Buy milk  ! medium  📅 2024-03-01  [Shopping]  ⏱
fn create_todo_line(todo: &Todo, focus_id: Option<Uuid>) -> Line<'static> {
    let mut spans = Vec::new();

    if todo.completed {
        spans.push(Span::styled("[✓] ".to_string(), done_style()));
        spans.push(Span::styled(todo.title.clone(), completed_style()));
    } else {
        spans.push(Span::raw("[ ] ".to_string()));
        spans.push(Span::raw(todo.title.clone()));
    }

    spans.push(Span::raw("  ".to_string()));
    spans.push(Span::styled(
        format!("! {}", todo.priority.to_tag()),
        priority_style(todo.priority),
    ));

    spans.push(Span::styled(
        format!("  📅 {}  ", todo.due_date.format("%Y-%m-%d")),
        dim_style(),
    ));

    if !todo.category.is_empty() {
        spans.push(Span::styled(format!(" {} ", todo.category), category_style()));
    }

    if focus_id == Some(todo.id) {
        spans.push(Span::styled("  ⏱ focusing".to_string(), focus_style()));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;
    use chrono::NaiveDate;

    fn todo(completed: bool) -> Todo {
        Todo {
            id: Uuid::new_v4(),
            title: "Buy milk".to_string(),
            completed,
            priority: Priority::High,
            due_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            category: "Shopping".to_string(),
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_create_todo_line() {
        let todo = todo(false);
        let text = line_text(&create_todo_line(&todo, None));

        assert!(text.starts_with("[ ] Buy milk"));
        assert!(text.contains("! high"));
        assert!(text.contains("2024-03-01"));
        assert!(text.contains("Shopping"));
        assert!(!text.contains("focusing"));
    }

    #[test]
    fn test_completed_and_focused_line() {
        let todo = todo(true);
        let line = create_todo_line(&todo, Some(todo.id));
        let text = line_text(&line);

        assert!(text.starts_with("[✓] Buy milk"));
        assert!(text.contains("focusing"));
        assert_eq!(line.spans[1].style, completed_style());
    }
}
