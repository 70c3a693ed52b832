use crate::app::AppState;
use crate::domain::{Filter, UiMode};
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTodo => handle_add_todo_mode(app, key),
        UiMode::Focus => handle_focus_mode(app, key),
        UiMode::Settings => handle_settings_mode(app, key),
    }
}

/// Handle keys in normal mode (list navigation)
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),

        // Toggle completion
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),

        // Start a focus session
        KeyCode::Char('f') | KeyCode::Char('F') => app.start_focus_on_selected(),

        // Edit the new-todo form
        KeyCode::Char('a') | KeyCode::Char('i') => app.start_add_todo(),

        // Filters
        KeyCode::Char('1') => app.set_filter(Filter::All),
        KeyCode::Char('2') => app.set_filter(Filter::Active),
        KeyCode::Char('3') => app.set_filter(Filter::Completed),
        KeyCode::Tab => app.cycle_filter(),

        // Settings
        KeyCode::Char('s') | KeyCode::Char('S') => app.open_settings(),

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,

        _ => {}
    }
    false
}

/// Handle keys while the new-todo form has focus
fn handle_add_todo_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => {
            app.submit_draft();
        }
        KeyCode::Esc => app.leave_add_todo(),
        KeyCode::Tab => app.draft.next_field(),
        KeyCode::Left => app.draft.cycle(false, &app.settings.categories),
        KeyCode::Right => app.draft.cycle(true, &app.settings.categories),
        KeyCode::Backspace => app.draft.backspace(),
        KeyCode::Char(c) => app.draft.add_char(c),
        _ => {}
    }
    false
}

/// Handle keys while a focus session is on screen
fn handle_focus_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('x') | KeyCode::Char('X') => app.cancel_focus(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

/// Handle keys in the settings modal
fn handle_settings_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => app.submit_settings(),
        KeyCode::Esc => app.close_settings(),
        _ => {
            if let Some(form) = &mut app.settings_form {
                match key.code {
                    KeyCode::Tab => form.next_field(),
                    KeyCode::Left => form.cycle(false),
                    KeyCode::Right => form.cycle(true),
                    KeyCode::Backspace => form.backspace(),
                    KeyCode::Char(c) => form.add_char(c),
                    _ => {}
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Priority, Settings};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn create_test_app() -> AppState {
        AppState::new(Settings::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    fn add_todo(app: &mut AppState, title: &str) {
        handle_key(app, key(KeyCode::Char('a')));
        type_text(app, title);
        handle_key(app, key(KeyCode::Enter));
        handle_key(app, key(KeyCode::Esc));
    }

    #[test]
    fn test_handle_quit() {
        let mut app = create_test_app();
        assert!(handle_key(&mut app, key(KeyCode::Char('q'))));
    }

    #[test]
    fn test_handle_add_todo() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Char('a')));
        assert_eq!(app.ui_mode, UiMode::AddingTodo);

        // 'q' is text while the form has focus
        type_text(&mut app, "Buy milk q");
        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, key(KeyCode::Right));
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.todos.len(), 1);
        let todo = app.todos.filtered(Filter::All)[0];
        assert_eq!(todo.title, "Buy milk q");
        assert_eq!(todo.priority, Priority::High);
        assert_eq!(app.draft.title, "");

        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_handle_navigation_and_toggle() {
        let mut app = create_test_app();
        add_todo(&mut app, "one");
        add_todo(&mut app, "two");

        handle_key(&mut app, key(KeyCode::Down));
        assert_eq!(app.selected_index, 1);
        handle_key(&mut app, key(KeyCode::Char(' ')));
        handle_key(&mut app, key(KeyCode::Up));
        assert_eq!(app.selected_index, 0);

        handle_key(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.filter, Filter::Completed);
        assert_eq!(app.visible_todos()[0].title, "two");

        handle_key(&mut app, key(KeyCode::Char('2')));
        assert_eq!(app.visible_todos()[0].title, "one");
    }

    #[test]
    fn test_handle_focus_start_and_cancel() {
        let mut app = create_test_app();
        add_todo(&mut app, "Deep work");

        handle_key(&mut app, key(KeyCode::Char('f')));
        assert_eq!(app.ui_mode, UiMode::Focus);
        assert!(app.focus.is_some());

        // List keys are inert during a session
        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert!(!app.todos.filtered(Filter::All)[0].completed);

        handle_key(&mut app, key(KeyCode::Esc));
        assert!(app.focus.is_none());
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_handle_focus_without_todos_does_nothing() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('f')));
        assert!(app.focus.is_none());
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_handle_settings_form() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Char('s')));
        assert_eq!(app.ui_mode, UiMode::Settings);

        handle_key(&mut app, key(KeyCode::Backspace));
        handle_key(&mut app, key(KeyCode::Backspace));
        type_text(&mut app, "50");
        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, key(KeyCode::Left));
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.settings.default_focus_duration, 50);
        assert_eq!(app.settings.default_priority, Priority::Low);
    }

    #[test]
    fn test_handle_settings_escape() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('s')));
        type_text(&mut app, "0");
        handle_key(&mut app, key(KeyCode::Esc));

        assert_eq!(app.settings.default_focus_duration, 25);
        assert!(app.settings_form.is_none());
    }
}
