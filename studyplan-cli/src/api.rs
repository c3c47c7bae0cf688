//! Client for the task backend's `/tasks/` REST endpoints.

use anyhow::{Context, Result, bail};
use chrono::SecondsFormat;
use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use studyplan_core::StudyPlan;
use studyplan_ingest::TaskRecord;

use crate::config::Config;

/// Priority sent with applied plans; plans carry no priority of their own.
const DEFAULT_PRIORITY: &str = "Medium";

/// Body of `POST /tasks/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub subject: String,
    pub description: String,
    pub due_date: String,
    pub assignment_type: String,
    pub priority: String,
}

/// Body of `PUT /tasks/{id}`. Unset fields are left alone by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

fn due_string(plan: &StudyPlan) -> Option<String> {
    plan.due_date
        .map(|d| d.to_rfc3339_opts(SecondsFormat::Secs, true))
}

impl NewTask {
    /// The backend rejects tasks without a due date.
    pub fn from_plan(plan: &StudyPlan, description: String) -> Result<Self> {
        let Some(due_date) = due_string(plan) else {
            bail!("cannot create '{}' without a due date (pass --due)", plan.title);
        };
        Ok(Self {
            title: plan.title.clone(),
            subject: plan.subject.clone(),
            description,
            due_date,
            assignment_type: plan.assignment_type.to_string(),
            priority: DEFAULT_PRIORITY.to_string(),
        })
    }
}

impl TaskUpdate {
    pub fn from_plan(plan: &StudyPlan, description: String) -> Self {
        Self {
            subject: Some(plan.subject.clone()),
            description: Some(description),
            due_date: due_string(plan),
            assignment_type: Some(plan.assignment_type.to_string()),
            priority: Some(DEFAULT_PRIORITY.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TaskApi {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl TaskApi {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.api.base_url.clone(), cfg.token())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let req = self.client.request(method, self.url(path));
        match &self.token {
            Some(t) => req.header(AUTHORIZATION, format!("Bearer {t}")),
            None => req,
        }
    }

    async fn send(req: reqwest::RequestBuilder, what: &str) -> Result<reqwest::Response> {
        let resp = req.send().await.with_context(|| format!("{what} request"))?;
        let status = resp.status();
        if !status.is_success() {
            let txt = resp.text().await.unwrap_or_default();
            bail!("{what} failed: {status} {txt}");
        }
        Ok(resp)
    }

    pub async fn list_tasks(&self) -> Result<Vec<TaskRecord>> {
        let resp = Self::send(self.request(reqwest::Method::GET, "/tasks/"), "list tasks").await?;
        resp.json().await.context("parse task list")
    }

    pub async fn create_task(&self, task: &NewTask) -> Result<TaskRecord> {
        tracing::info!(title = %task.title, "creating task");
        let req = self.request(reqwest::Method::POST, "/tasks/").json(task);
        let resp = Self::send(req, "create task").await?;
        resp.json().await.context("parse created task")
    }

    pub async fn update_task(&self, id: &str, update: &TaskUpdate) -> Result<TaskRecord> {
        tracing::info!(id, "updating task");
        let req = self
            .request(reqwest::Method::PUT, &format!("/tasks/{id}"))
            .json(update);
        let resp = Self::send(req, "update task").await?;
        resp.json().await.context("parse updated task")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use studyplan_core::{AssignmentType, TaskDescriptor, generate};

    fn plan(with_due: bool) -> StudyPlan {
        let now = Utc.with_ymd_and_hms(2026, 2, 19, 12, 0, 0).unwrap();
        let mut t = TaskDescriptor::new("Essay 1", "English", AssignmentType::Essay);
        if with_due {
            t = t.with_due_date(now + Duration::days(6));
        }
        generate(&t, now)
    }

    #[test]
    fn test_url_joining() {
        let api = TaskApi::new("http://localhost:8000/", None);
        assert_eq!(api.url("/tasks/"), "http://localhost:8000/tasks/");
    }

    #[test]
    fn test_new_task_payload() {
        let body = NewTask::from_plan(&plan(true), "desc".to_string()).unwrap();
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["due_date"], "2026-02-25T12:00:00Z");
        assert_eq!(v["assignment_type"], "Essay");
        assert_eq!(v["priority"], "Medium");
    }

    #[test]
    fn test_new_task_needs_due_date() {
        assert!(NewTask::from_plan(&plan(false), String::new()).is_err());
    }

    #[test]
    fn test_update_skips_missing_due() {
        let v = serde_json::to_value(TaskUpdate::from_plan(&plan(false), "d".into())).unwrap();
        assert!(v.get("due_date").is_none());
        assert_eq!(v["description"], "d");
    }
}
