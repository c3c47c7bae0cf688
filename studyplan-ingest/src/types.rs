use serde::{Deserialize, Deserializer, Serialize};
use studyplan_core::{PlanError, TaskDescriptor};

/// A task as exported by the task backend (`GET /tasks/`) or read from a
/// CSV sheet. Fields are raw strings; validation happens in
/// [`TaskRecord::to_descriptor`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Backend id. Older backends send numbers, newer ones strings.
    #[serde(
        default,
        deserialize_with = "id_from_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Some backends omit the title; such records fail `to_descriptor`.
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default)]
    pub assignment_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// `pending`, `in_progress` or `completed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl TaskRecord {
    pub fn new(title: impl Into<String>, subject: impl Into<String>, assignment_type: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subject: subject.into(),
            assignment_type: assignment_type.into(),
            ..Default::default()
        }
    }

    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Completed tasks do not need a plan.
    pub fn is_open(&self) -> bool {
        self.status.as_deref().map(str::trim) != Some("completed")
    }

    /// Validate and convert, interpreting local due dates in `tz`.
    pub fn to_descriptor(&self, tz: &str) -> Result<TaskDescriptor, PlanError> {
        TaskDescriptor::parse(
            &self.title,
            &self.subject,
            &self.assignment_type,
            self.due_date.as_deref(),
            tz,
        )
    }
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|id| match id {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    }))
}
