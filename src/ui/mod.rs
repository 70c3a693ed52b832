pub mod details_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod styles;

use crate::app::AppState;
use crate::domain::UiMode;
use details_pane::render_details_pane;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::{render_filter_tabs, render_list_pane};
use modal::{render_focus_modal, render_settings_modal};
use ratatui::Frame;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, app.ui_mode, layout.keybindings_area);

    render_input_form(f, app, layout.form_area);
    render_filter_tabs(f, app, layout.filter_area);
    render_list_pane(f, app, layout.list_area);
    render_details_pane(f, app, layout.details_area);

    // At most one modal is up: the focus session takes precedence
    if let Some(focus) = &app.focus {
        render_focus_modal(f, app, focus, size);
        return;
    }

    if app.ui_mode == UiMode::Settings {
        if let Some(form) = &app.settings_form {
            render_settings_modal(f, form, size);
        }
    }
}
