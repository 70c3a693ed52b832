use crate::domain::{parse_categories, NewTodo, Priority, Settings};
use chrono::{Duration, Local, NaiveDate};

/// Field focus in the new-todo form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Priority,
    DueDate,
    Category,
}

impl DraftField {
    pub fn next(&self) -> Self {
        match self {
            Self::Title => Self::Priority,
            Self::Priority => Self::DueDate,
            Self::DueDate => Self::Category,
            Self::Category => Self::Title,
        }
    }
}

/// Draft state of the new-todo form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: String,
    pub priority: Priority,
    pub due_date: NaiveDate,
    pub category: String,
    pub editing_field: DraftField,
}

impl TodoDraft {
    /// Fresh draft seeded from settings defaults, due today
    pub fn seeded(settings: &Settings) -> Self {
        Self::seeded_on(settings, Local::now().date_naive())
    }

    pub fn seeded_on(settings: &Settings, today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            priority: settings.default_priority,
            due_date: today,
            category: settings.first_category().to_string(),
            editing_field: DraftField::Title,
        }
    }

    pub fn next_field(&mut self) {
        self.editing_field = self.editing_field.next();
    }

    /// Type a character (only the title is free text)
    pub fn add_char(&mut self, c: char) {
        if self.editing_field == DraftField::Title {
            self.title.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.editing_field == DraftField::Title {
            self.title.pop();
        }
    }

    /// Step the selected field forward (→) or back (←)
    pub fn cycle(&mut self, forward: bool, categories: &[String]) {
        match self.editing_field {
            DraftField::Title => {}
            DraftField::Priority => {
                self.priority = if forward {
                    self.priority.next()
                } else {
                    self.priority.prev()
                };
            }
            DraftField::DueDate => {
                let step = if forward { Duration::days(1) } else { Duration::days(-1) };
                self.due_date = self.due_date.checked_add_signed(step).unwrap_or(self.due_date);
            }
            DraftField::Category => {
                self.category = cycle_category(&self.category, categories, forward);
            }
        }
    }

    pub fn to_new_todo(&self) -> NewTodo {
        NewTodo {
            title: self.title.clone(),
            priority: self.priority,
            due_date: self.due_date,
            category: self.category.clone(),
        }
    }
}

/// Neighbour of `current` in `categories`; unknown values restart at the ends
fn cycle_category(current: &str, categories: &[String], forward: bool) -> String {
    if categories.is_empty() {
        return current.to_string();
    }

    let len = categories.len();
    let next_idx = match categories.iter().position(|c| c == current) {
        Some(idx) if forward => (idx + 1) % len,
        Some(idx) => (idx + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };
    categories[next_idx].clone()
}

/// Field focus in the settings form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    FocusDuration,
    DefaultPriority,
    Categories,
}

impl SettingsField {
    pub fn next(&self) -> Self {
        match self {
            Self::FocusDuration => Self::DefaultPriority,
            Self::DefaultPriority => Self::Categories,
            Self::Categories => Self::FocusDuration,
        }
    }
}

/// Editable copy of the settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsDraft {
    pub focus_duration: String,
    pub default_priority: Priority,
    pub categories: String,
    pub editing_field: SettingsField,
}

impl SettingsDraft {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            focus_duration: settings.default_focus_duration.to_string(),
            default_priority: settings.default_priority,
            categories: settings.categories_line(),
            editing_field: SettingsField::FocusDuration,
        }
    }

    pub fn next_field(&mut self) {
        self.editing_field = self.editing_field.next();
    }

    /// Type a character; the duration field takes digits only
    pub fn add_char(&mut self, c: char) {
        match self.editing_field {
            SettingsField::FocusDuration => {
                if c.is_ascii_digit() {
                    self.focus_duration.push(c);
                }
            }
            SettingsField::DefaultPriority => {}
            SettingsField::Categories => self.categories.push(c),
        }
    }

    pub fn backspace(&mut self) {
        match self.editing_field {
            SettingsField::FocusDuration => {
                self.focus_duration.pop();
            }
            SettingsField::DefaultPriority => {}
            SettingsField::Categories => {
                self.categories.pop();
            }
        }
    }

    pub fn cycle(&mut self, forward: bool) {
        if self.editing_field == SettingsField::DefaultPriority {
            self.default_priority = if forward {
                self.default_priority.next()
            } else {
                self.default_priority.prev()
            };
        }
    }

    /// Build the complete settings value this draft describes.
    ///
    /// An empty duration reads as 0; values past `u32::MAX` saturate.
    pub fn to_settings(&self) -> Settings {
        let default_focus_duration = if self.focus_duration.is_empty() {
            0
        } else {
            self.focus_duration.parse().unwrap_or(u32::MAX)
        };

        Settings {
            default_focus_duration,
            default_priority: self.default_priority,
            categories: parse_categories(&self.categories),
        }
    }
}
