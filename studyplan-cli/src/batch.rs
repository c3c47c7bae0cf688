use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use studyplan_core::{StudyPlan, TaskDescriptor, generate};
use studyplan_ingest::TaskRecord;
use tokio::task::JoinSet;

/// Plan every open task in `records`, in input order, all against the same
/// `now`. Tasks that fail validation are logged and skipped.
pub async fn plan_records(
    records: &[TaskRecord],
    tz: &str,
    now: DateTime<Utc>,
) -> Result<Vec<StudyPlan>> {
    let mut descriptors: Vec<(usize, TaskDescriptor)> = Vec::new();
    for (idx, record) in records.iter().enumerate() {
        if !record.is_open() {
            tracing::debug!(title = %record.title, "skipping completed task");
            continue;
        }
        match record.to_descriptor(tz) {
            Ok(d) => descriptors.push((idx, d)),
            Err(e) => tracing::warn!(title = %record.title, error = %e, "skipping invalid task"),
        }
    }

    let mut set = JoinSet::new();
    for (idx, task) in descriptors {
        set.spawn_blocking(move || (idx, generate(&task, now)));
    }

    let mut plans = Vec::with_capacity(set.len());
    while let Some(joined) = set.join_next().await {
        plans.push(joined.context("plan worker panicked")?);
    }
    plans.sort_by_key(|(idx, _)| *idx);

    Ok(plans.into_iter().map(|(_, plan)| plan).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 19, 12, 0, 0).unwrap()
    }

    fn records() -> Vec<TaskRecord> {
        (0..20)
            .map(|i| {
                TaskRecord::new(format!("Task {i}"), "Physics", "Homework")
                    .with_due_date(format!("2026-03-{:02}", i + 1))
            })
            .collect()
    }

    #[tokio::test]
    async fn test_order_follows_input() {
        let plans = plan_records(&records(), "UTC", now()).await.unwrap();
        let titles: Vec<String> = plans.iter().map(|p| p.title.clone()).collect();
        let expected: Vec<String> = (0..20).map(|i| format!("Task {i}")).collect();
        assert_eq!(titles, expected);
    }

    #[tokio::test]
    async fn test_matches_sequential_generation() {
        let recs = records();
        let plans = plan_records(&recs, "UTC", now()).await.unwrap();
        for (rec, plan) in recs.iter().zip(&plans) {
            assert_eq!(*plan, generate(&rec.to_descriptor("UTC").unwrap(), now()));
        }
    }

    #[tokio::test]
    async fn test_skips_completed_and_invalid() {
        let recs = vec![
            TaskRecord::new("Done", "Physics", "Quiz").with_status("completed"),
            TaskRecord::new("Bad date", "Physics", "Quiz").with_due_date("next tuesday"),
            TaskRecord::new("No subject", "", "Quiz"),
            serde_json::from_str(r#"{"id": 9, "subject": "Physics", "assignment_type": "Quiz"}"#)
                .unwrap(),
            TaskRecord::new("Good", "Physics", "Quiz"),
        ];
        let plans = plan_records(&recs, "UTC", now()).await.unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].title, "Good");
    }
}
