pub mod enums;
pub mod focus;
pub mod settings;
pub mod todo;

pub use enums::{Filter, Priority, UiMode};
pub use focus::FocusSession;
pub use settings::{parse_categories, Settings};
pub use todo::{NewTodo, Todo, TodoError, TodoStore};
