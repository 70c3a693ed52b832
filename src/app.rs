use crate::domain::{Filter, FocusSession, Settings, Todo, TodoError, TodoStore, UiMode};
use crate::forms::{SettingsDraft, TodoDraft};
use crate::notifications;
use crate::ticker::{TickSource, WallClock};
use crate::timer::{FocusTimer, TimerOutcome};
use uuid::Uuid;

/// The focus session currently on screen and its countdown
#[derive(Debug)]
pub struct ActiveFocus {
    pub session: FocusSession,
    pub timer: FocusTimer,
}

/// Main application state
pub struct AppState {
    pub todos: TodoStore,
    pub settings: Settings,
    pub filter: Filter,
    pub selected_index: usize, // Index into the filtered rows
    pub ui_mode: UiMode,
    pub draft: TodoDraft,
    pub settings_form: Option<SettingsDraft>,
    pub focus: Option<ActiveFocus>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let draft = TodoDraft::seeded(&settings);
        Self {
            todos: TodoStore::new(),
            settings,
            filter: Filter::All,
            selected_index: 0,
            ui_mode: UiMode::Normal,
            draft,
            settings_form: None,
            focus: None,
        }
    }

    /// Todos visible under the current filter
    pub fn visible_todos(&self) -> Vec<&Todo> {
        self.todos.filtered(self.filter)
    }

    /// ID of the selected visible todo
    pub fn selected_todo_id(&self) -> Option<Uuid> {
        self.visible_todos().get(self.selected_index).map(|todo| todo.id)
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.visible_todos().len() {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside the visible rows
    fn clamp_selection(&mut self) {
        let visible = self.visible_todos().len();
        if self.selected_index >= visible {
            self.selected_index = visible.saturating_sub(1);
        }
    }

    pub fn set_filter(&mut self, filter: Filter) {
        if self.filter != filter {
            self.filter = filter;
            self.selected_index = 0;
        }
    }

    pub fn cycle_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    /// Toggle completion of the todo with `id`
    pub fn toggle_todo(&mut self, id: Uuid) {
        if self.todos.toggle(id) {
            let completed = self.todos.get(id).map(|todo| todo.completed);
            tracing::info!(todo_id = %id, ?completed, "todo toggled");
            self.clamp_selection();
        }
    }

    /// Toggle completion of the selected todo
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_todo_id() {
            self.toggle_todo(id);
        }
    }

    /// Start editing the new-todo form
    pub fn start_add_todo(&mut self) {
        self.ui_mode = UiMode::AddingTodo;
    }

    /// Leave the new-todo form, keeping the draft
    pub fn leave_add_todo(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    /// Submit the new-todo form.
    ///
    /// A blank title is ignored and the draft is kept. Otherwise the todo is
    /// appended and the draft reset to the current defaults.
    pub fn submit_draft(&mut self) -> Option<Uuid> {
        match self.todos.append(self.draft.to_new_todo()) {
            Ok(id) => {
                tracing::info!(
                    todo_id = %id,
                    priority = %self.draft.priority,
                    category = self.draft.category.as_str(),
                    "todo added"
                );
                self.draft = TodoDraft::seeded(&self.settings);
                Some(id)
            }
            Err(TodoError::EmptyTitle) => {
                tracing::debug!("ignored new todo with empty title");
                None
            }
        }
    }

    /// Start a focus session on the selected todo
    pub fn start_focus_on_selected(&mut self) {
        if let Some(id) = self.selected_todo_id() {
            self.start_focus(id);
        }
    }

    /// Start a focus session on `todo_id` using the default duration
    pub fn start_focus(&mut self, todo_id: Uuid) {
        self.start_focus_with(todo_id, Box::new(WallClock::new()));
    }

    /// Start a focus session driven by `source`, replacing any running one
    pub fn start_focus_with(&mut self, todo_id: Uuid, source: Box<dyn TickSource>) {
        let duration = self.settings.default_focus_duration;
        let session = FocusSession::new(todo_id, duration);
        let timer = FocusTimer::start(duration, source);

        if let Some(previous) = self.focus.replace(ActiveFocus { session, timer }) {
            tracing::info!(todo_id = %previous.session.todo_id, "focus session replaced");
        }
        tracing::info!(todo_id = %todo_id, duration_minutes = duration, "focus session started");
        self.ui_mode = UiMode::Focus;
    }

    /// Cancel the running focus session
    pub fn cancel_focus(&mut self) {
        let outcome = self.focus.as_mut().and_then(|focus| focus.timer.cancel());
        if let Some(outcome) = outcome {
            self.finish_focus(outcome);
        }
    }

    /// Advance the focus countdown (called on every UI tick)
    pub fn tick(&mut self) {
        let outcome = self.focus.as_mut().and_then(|focus| focus.timer.tick());
        if let Some(outcome) = outcome {
            self.finish_focus(outcome);
        }
    }

    /// Clear the session once its timer reports a terminal outcome
    fn finish_focus(&mut self, outcome: TimerOutcome) {
        let Some(focus) = self.focus.take() else {
            return;
        };
        debug_assert!(!focus.timer.holds_tick_source());
        let title = self.focus_title(focus.session.todo_id);

        match outcome {
            TimerOutcome::Completed => {
                tracing::info!(todo_id = %focus.session.todo_id, "focus session completed");
                notifications::notify_focus_complete(&title);
            }
            TimerOutcome::Cancelled => {
                tracing::info!(
                    todo_id = %focus.session.todo_id,
                    remaining_secs = focus.timer.seconds_remaining(),
                    "focus session cancelled"
                );
            }
        }

        if self.ui_mode == UiMode::Focus {
            self.ui_mode = UiMode::Normal;
        }
    }

    /// Title shown for a focus session's todo
    pub fn focus_title(&self, todo_id: Uuid) -> String {
        self.todos
            .get(todo_id)
            .map(|todo| todo.title.clone())
            .unwrap_or_else(|| "Focus session".to_string())
    }

    /// Open the settings modal with a copy of the current settings
    pub fn open_settings(&mut self) {
        if self.focus.is_some() {
            return;
        }
        self.settings_form = Some(SettingsDraft::from_settings(&self.settings));
        self.ui_mode = UiMode::Settings;
    }

    /// Close the settings modal without applying changes
    pub fn close_settings(&mut self) {
        self.settings_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Replace the settings with the form's values and close the modal
    pub fn submit_settings(&mut self) {
        if let Some(form) = self.settings_form.take() {
            self.replace_settings(form.to_settings());
            self.ui_mode = UiMode::Normal;
        }
    }

    /// Replace the settings wholesale
    pub fn replace_settings(&mut self, settings: Settings) {
        tracing::info!(
            focus_minutes = settings.default_focus_duration,
            priority = %settings.default_priority,
            categories = ?settings.categories,
            "settings replaced"
        );
        self.settings = settings;
    }
}
