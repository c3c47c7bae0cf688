//! Study planner: turns a task descriptor into a complete, templated plan.
//!
//! Deterministic for a given descriptor and `now`. Callers capture `now`
//! once and pass it in; nothing here reads the clock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::advice::advice_for;
use crate::resources::{Resource, resources_for};
use crate::schedule::{StudySchedule, synthesize};
use crate::steps::{PlanStep, select_steps, total_hours};
use crate::task::{AssignmentType, TaskDescriptor};
use crate::tips::tips_for;
use crate::urgency::{UrgencyLevel, classify};

/// A generated study plan. Built fresh on every call and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyPlan {
    pub title: String,
    pub subject: String,
    pub assignment_type: AssignmentType,
    pub due_date: Option<DateTime<Utc>>,
    pub urgency_level: UrgencyLevel,
    pub days_until_due: Option<i64>,
    pub total_estimated_hours: f64,
    pub steps: Vec<PlanStep>,
    pub schedule: StudySchedule,
    pub resources: Vec<Resource>,
    pub tips: Vec<String>,
    pub subject_specific_advice: String,
}

/// Generate a plan for `task` as of `now`.
pub fn generate(task: &TaskDescriptor, now: DateTime<Utc>) -> StudyPlan {
    let urgency = classify(task.due_date, now);
    let steps = select_steps(&task.assignment_type, urgency);
    let schedule = synthesize(&steps, urgency);
    let resources = resources_for(&task.subject);
    let advice = advice_for(&task.subject, &task.assignment_type);
    let tips = tips_for(urgency, &task.assignment_type);
    let total_estimated_hours = total_hours(&steps);

    tracing::debug!(
        title = %task.title,
        subject = %task.subject,
        assignment_type = %task.assignment_type,
        urgency = %urgency.level,
        days_until_due = ?urgency.days_until_due,
        steps = steps.len(),
        total_hours = total_estimated_hours,
        "generated study plan"
    );

    StudyPlan {
        title: task.title.clone(),
        subject: task.subject.clone(),
        assignment_type: task.assignment_type.clone(),
        due_date: task.due_date,
        urgency_level: urgency.level,
        days_until_due: urgency.days_until_due,
        total_estimated_hours,
        steps,
        schedule,
        resources,
        tips,
        subject_specific_advice: advice.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 19, 12, 0, 0).unwrap()
    }

    fn task(subject: &str, kind: &str) -> TaskDescriptor {
        TaskDescriptor::new("Test task", subject, AssignmentType::parse(kind))
    }

    #[test]
    fn test_deterministic() {
        let t = task("Physics", "Exam").with_due_date(now() + Duration::days(5));
        assert_eq!(generate(&t, now()), generate(&t, now()));
    }

    #[test]
    fn test_total_matches_steps() {
        for kind in ["Exam", "Essay", "Project", "Lab Report", "Homework", "Presentation", "Quiz"] {
            for days in [0, 1, 2, 3, 5, 10] {
                let t = task("Biology", kind).with_due_date(now() + Duration::days(days));
                let plan = generate(&t, now());
                let sum: f64 = plan.steps.iter().map(|s| s.estimated_hours).sum();
                assert!(
                    (plan.total_estimated_hours - sum).abs() < 1e-9,
                    "{kind} at {days} days: {} vs {sum}",
                    plan.total_estimated_hours
                );
            }
        }
    }

    #[test]
    fn test_no_due_date_is_medium_and_unscaled() {
        let plan = generate(&task("History", "Essay"), now());
        assert_eq!(plan.urgency_level, UrgencyLevel::Medium);
        assert_eq!(plan.days_until_due, None);
        assert_eq!(plan.total_estimated_hours, 15.0);
    }

    #[test]
    fn test_exam_emergency_scaling() {
        let t = task("Mathematics", "Exam").with_due_date(now() + Duration::days(1));
        let plan = generate(&t, now());
        assert_eq!(plan.urgency_level, UrgencyLevel::Critical);
        assert_eq!(plan.steps[0].estimated_hours, 1.5);
        assert_eq!(plan.total_estimated_hours, 4.5);
    }

    #[test]
    fn test_plan_echoes_descriptor() {
        let due = now() + Duration::days(9);
        let t = TaskDescriptor::new("Lab 4", "Chemistry", AssignmentType::LabReport).with_due_date(due);
        let plan = generate(&t, now());
        assert_eq!(plan.title, "Lab 4");
        assert_eq!(plan.subject, "Chemistry");
        assert_eq!(plan.assignment_type, AssignmentType::LabReport);
        assert_eq!(plan.due_date, Some(due));
        assert_eq!(plan.urgency_level, UrgencyLevel::Low);
    }

    #[test]
    fn test_serializes_to_json() {
        let t = task("English", "Quiz").with_due_date(now() + Duration::days(2));
        let plan = generate(&t, now());
        let v = serde_json::to_value(&plan).unwrap();
        assert_eq!(v["urgency_level"], "HIGH");
        assert_eq!(v["assignment_type"], "Quiz");
        assert_eq!(v["steps"][0]["priority"], "high");
        assert!(v["steps"][0].get("dependencies").is_none());

        let back: StudyPlan = serde_json::from_value(v).unwrap();
        assert_eq!(back, plan);
    }
}
