//! Task descriptor: the immutable input to plan generation.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::time::parse_due_date;

/// Kind of academic work. Display names are the exact keys used by every
/// lookup table; anything else is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssignmentType {
    Exam,
    Essay,
    Project,
    LabReport,
    Homework,
    Presentation,
    Quiz,
    Other(String),
}

impl AssignmentType {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Exam" => AssignmentType::Exam,
            "Essay" => AssignmentType::Essay,
            "Project" => AssignmentType::Project,
            "Lab Report" => AssignmentType::LabReport,
            "Homework" => AssignmentType::Homework,
            "Presentation" => AssignmentType::Presentation,
            "Quiz" => AssignmentType::Quiz,
            other => AssignmentType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AssignmentType::Exam => "Exam",
            AssignmentType::Essay => "Essay",
            AssignmentType::Project => "Project",
            AssignmentType::LabReport => "Lab Report",
            AssignmentType::Homework => "Homework",
            AssignmentType::Presentation => "Presentation",
            AssignmentType::Quiz => "Quiz",
            AssignmentType::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, AssignmentType::Other(_))
    }
}

impl FromStr for AssignmentType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AssignmentType::parse(s))
    }
}

impl From<String> for AssignmentType {
    fn from(s: String) -> Self {
        AssignmentType::parse(&s)
    }
}

impl From<AssignmentType> for String {
    fn from(t: AssignmentType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for AssignmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the caller knows about a task when asking for a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDescriptor {
    pub title: String,
    pub subject: String,
    pub assignment_type: AssignmentType,
    /// Absolute due instant (UTC); `None` when the task has no due date.
    pub due_date: Option<DateTime<Utc>>,
}

impl TaskDescriptor {
    pub fn new(
        title: impl Into<String>,
        subject: impl Into<String>,
        assignment_type: AssignmentType,
    ) -> Self {
        Self {
            title: title.into(),
            subject: subject.into(),
            assignment_type,
            due_date: None,
        }
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Build a descriptor from raw form fields.
    ///
    /// Local due dates are interpreted in the IANA zone `tz`. Fails on an
    /// empty title/subject or an unparseable due date; unknown subjects and
    /// assignment types are accepted and resolved by the lookup defaults.
    pub fn parse(
        title: &str,
        subject: &str,
        assignment_type: &str,
        due_date: Option<&str>,
        tz: &str,
    ) -> Result<Self, PlanError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(PlanError::invalid("title", title, "must not be empty"));
        }
        let subject = subject.trim();
        if subject.is_empty() {
            return Err(PlanError::invalid("subject", subject, "must not be empty"));
        }

        let due_date = match due_date {
            Some(raw) => parse_due_date(raw, tz)?,
            None => None,
        };

        Ok(Self {
            title: title.to_string(),
            subject: subject.to_string(),
            assignment_type: AssignmentType::parse(assignment_type.trim()),
            due_date,
        })
    }
}
