use super::enums::Priority;
use serde::Deserialize;

/// Categories seeded at startup
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Work", "Personal", "Shopping", "Health"];

/// Default focus session length in minutes
pub const DEFAULT_FOCUS_MINUTES: u32 = 25;

/// Global defaults applied when creating todos and focus sessions
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Focus session length in minutes
    pub default_focus_duration: u32,
    pub default_priority: Priority,
    /// Ordered, unique, non-empty category names
    pub categories: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_focus_duration: DEFAULT_FOCUS_MINUTES,
            default_priority: Priority::Medium,
            categories: default_categories(),
        }
    }
}

impl Settings {
    /// First category, used to seed new todo drafts
    pub fn first_category(&self) -> &str {
        self.categories.first().map(String::as_str).unwrap_or("")
    }

    /// Categories joined for the settings form text field
    pub fn categories_line(&self) -> String {
        self.categories.join(", ")
    }

    /// Re-establish the category invariants on a loaded value
    pub fn normalized(mut self) -> Self {
        self.categories = normalize_categories(self.categories);
        self
    }
}

pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

/// Split a comma-separated category line into the category list.
///
/// Each piece is trimmed; blank pieces and repeats are dropped. If nothing
/// is left the default categories are used, so the list is never empty.
pub fn parse_categories(line: &str) -> Vec<String> {
    normalize_categories(line.split(',').map(|piece| piece.to_string()))
}

fn normalize_categories<I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut categories: Vec<String> = Vec::new();
    for category in raw {
        let category = category.trim();
        if category.is_empty() || categories.iter().any(|c| c == category) {
            continue;
        }
        categories.push(category.to_string());
    }

    if categories.is_empty() {
        return default_categories();
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_focus_duration, 25);
        assert_eq!(settings.default_priority, Priority::Medium);
        assert_eq!(settings.categories, vec!["Work", "Personal", "Shopping", "Health"]);
        assert_eq!(settings.first_category(), "Work");
    }

    #[test]
    fn test_parse_categories_trims() {
        assert_eq!(
            parse_categories("Work,  Errands , Reading"),
            vec!["Work", "Errands", "Reading"]
        );
    }

    #[test]
    fn test_parse_categories_drops_blanks_and_duplicates() {
        assert_eq!(parse_categories("Work,, Home,"), vec!["Work", "Home"]);
        assert_eq!(parse_categories("Home, Work, Home"), vec!["Home", "Work"]);
    }

    #[test]
    fn test_parse_categories_empty_falls_back_to_defaults() {
        assert_eq!(parse_categories(""), default_categories());
        assert_eq!(parse_categories(" , ,"), default_categories());
    }

    #[test]
    fn test_categories_line_round_trips_through_form() {
        let settings = Settings::default();
        assert_eq!(settings.categories_line(), "Work, Personal, Shopping, Health");
        assert_eq!(parse_categories(&settings.categories_line()), settings.categories);
    }

    #[test]
    fn test_normalized_fixes_loaded_categories() {
        let settings = Settings {
            categories: vec![" Deep work ".to_string(), String::new()],
            ..Settings::default()
        }
        .normalized();
        assert_eq!(settings.categories, vec!["Deep work"]);
    }

    #[test]
    fn test_deserialize_partial_json_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"default_priority":"high"}"#).unwrap();
        assert_eq!(settings.default_priority, Priority::High);
        assert_eq!(settings.default_focus_duration, 25);
        assert_eq!(settings.categories, default_categories());
    }
}
