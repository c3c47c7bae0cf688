//! Task list JSON as returned by the backend's `GET /tasks/`.
//!
//! Extra fields (`user_id`, `grade`, timestamps, ...) are ignored.

use anyhow::{Context, Result};

use crate::types::TaskRecord;

pub fn parse_tasks_json(s: &str) -> Result<Vec<TaskRecord>> {
    serde_json::from_str(s).context("expected a JSON array of tasks")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_backend_tasks() {
        let json = r#"[
            {
                "id": 7,
                "title": "Midterm",
                "subject": "Physics",
                "description": "Chapters 1-5",
                "due_date": "2026-03-10T09:00:00",
                "assignment_type": "Exam",
                "priority": "High",
                "status": "pending",
                "user_id": 3,
                "created_at": "2026-02-01T10:00:00",
                "updated_at": "2026-02-01T10:00:00"
            },
            {
                "id": "665f1c2ab3",
                "title": "Reading log",
                "subject": "English",
                "assignment_type": "Other",
                "status": "completed"
            }
        ]"#;

        let tasks = parse_tasks_json(json).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id.as_deref(), Some("7"));
        assert_eq!(tasks[0].due_date.as_deref(), Some("2026-03-10T09:00:00"));
        assert_eq!(tasks[1].id.as_deref(), Some("665f1c2ab3"));
        assert_eq!(tasks[1].description, "");
        assert!(!tasks[1].is_open());
    }

    #[test]
    fn test_untitled_task_does_not_fail_the_list() {
        let json = r#"[
            {
                "id": 4,
                "subject": "Physics",
                "description": "Kinematics set",
                "due_date": "2026-03-02T17:00:00",
                "assignment_type": "Homework",
                "priority": "Medium",
                "status": "pending",
                "user_id": 1,
                "estimated_hours": null,
                "grade": null,
                "created_at": "2026-02-01T10:00:00",
                "updated_at": "2026-02-01T10:00:00"
            },
            {"id": 5, "title": "Quiz 2", "subject": "Physics", "assignment_type": "Quiz"}
        ]"#;

        let tasks = parse_tasks_json(json).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id.as_deref(), Some("4"));
        assert_eq!(tasks[0].title, "");
        let err = tasks[0].to_descriptor("UTC").unwrap_err();
        assert_eq!(err.field(), Some("title"));
        assert!(tasks[1].to_descriptor("UTC").is_ok());
    }

    #[test]
    fn test_rejects_non_array() {
        assert!(parse_tasks_json(r#"{"title": "x"}"#).is_err());
    }
}
