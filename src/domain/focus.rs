use chrono::{DateTime, Local};
use uuid::Uuid;

/// A running focus session on a todo.
///
/// Holds the todo's ID only; the todo itself stays in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusSession {
    pub todo_id: Uuid,
    pub started_at: DateTime<Local>,
    /// Fixed when the session starts
    pub duration_minutes: u32,
}

impl FocusSession {
    pub fn new(todo_id: Uuid, duration_minutes: u32) -> Self {
        Self {
            todo_id,
            started_at: Local::now(),
            duration_minutes,
        }
    }

    /// Wall-clock time the countdown is due to reach zero
    pub fn ends_at(&self) -> DateTime<Local> {
        self.started_at + chrono::Duration::minutes(i64::from(self.duration_minutes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_session_new() {
        let id = Uuid::new_v4();
        let session = FocusSession::new(id, 25);
        assert_eq!(session.todo_id, id);
        assert_eq!(session.duration_minutes, 25);
        assert_eq!(session.ends_at() - session.started_at, chrono::Duration::minutes(25));
    }
}
