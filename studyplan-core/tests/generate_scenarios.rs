use chrono::{DateTime, Duration, TimeZone, Utc};
use studyplan_core::{
    AssignmentType, StepPriority, TaskDescriptor, UrgencyLevel, advice_for, generate,
    resources_for,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 19, 12, 0, 0).unwrap()
}

/// Computer Science project due in two days: HIGH urgency, 0.7x steps,
/// hours per day over the two remaining days, CS/Project advice verbatim.
#[test]
fn test_cs_project_due_in_two_days() {
    let task = TaskDescriptor::new("Compiler project", "Computer Science", AssignmentType::Project)
        .with_due_date(now() + Duration::days(2));
    let plan = generate(&task, now());

    assert_eq!(plan.urgency_level, UrgencyLevel::High);
    assert_eq!(plan.days_until_due, Some(2));

    let hours: Vec<f64> = plan.steps.iter().map(|s| s.estimated_hours).collect();
    assert_eq!(hours, vec![2.1, 3.5, 5.6, 2.8]);
    assert_eq!(plan.total_estimated_hours, 14.0);

    let per_day = (plan.total_estimated_hours / 2.0).ceil() as i64;
    assert_eq!(
        plan.schedule.daily_goals[0],
        format!("Complete {per_day} hours of work daily")
    );

    assert_eq!(
        plan.subject_specific_advice,
        advice_for("Computer Science", &AssignmentType::Project)
    );
    assert!(plan
        .subject_specific_advice
        .starts_with("🚀 COMPUTER SCIENCE PROJECT DEVELOPMENT:"));
}

#[test]
fn test_urgency_boundaries_through_generate() {
    let cases = [
        (Some(1), UrgencyLevel::Critical),
        (Some(3), UrgencyLevel::High),
        (Some(7), UrgencyLevel::Medium),
        (Some(8), UrgencyLevel::Low),
        (None, UrgencyLevel::Medium),
    ];
    for (days, expected) in cases {
        let mut task = TaskDescriptor::new("Reading", "Literature", AssignmentType::Essay);
        if let Some(d) = days {
            task = task.with_due_date(now() + Duration::days(d));
        }
        assert_eq!(generate(&task, now()).urgency_level, expected, "days = {days:?}");
    }
}

#[test]
fn test_unknown_type_and_subject_fall_back() {
    let task = TaskDescriptor::new("Mystery", "Astrology", AssignmentType::parse("Nonexistent"));
    let plan = generate(&task, now());

    let project = generate(
        &TaskDescriptor::new("Mystery", "Astrology", AssignmentType::Project),
        now(),
    );
    assert!(!plan.steps.is_empty());
    assert_eq!(plan.steps, project.steps);
    assert_eq!(
        plan.subject_specific_advice,
        advice_for("Astrology", &AssignmentType::Other("Other".to_string()))
    );
    assert!(plan.subject_specific_advice.starts_with("🎯 GENERAL ACADEMIC EXCELLENCE:"));
    // No subject resources, only the general tail.
    assert_eq!(plan.resources.len(), 4);
}

#[test]
fn test_mathematics_resources_order() {
    let r = resources_for("Mathematics");
    let titles: Vec<&str> = r.iter().map(|x| x.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Khan Academy - Mathematics",
            "Professor Leonard - Calculus",
            "MIT OpenCourseWare - Math",
            "Wolfram Alpha",
            "Coursera",
            "edX",
            "Study.com",
            "Quizlet",
        ]
    );
}

#[test]
fn test_empty_strings_still_produce_a_plan() {
    let task = TaskDescriptor::new("", "", AssignmentType::parse(""));
    let plan = generate(&task, now());
    assert_eq!(plan.steps.len(), 4);
    assert!(!plan.subject_specific_advice.is_empty());
    assert!(plan.steps.iter().all(|s| s.priority != StepPriority::Critical));
}

#[test]
fn test_past_due_lab_report_is_emergency() {
    let task = TaskDescriptor::new("Titration lab", "Chemistry", AssignmentType::LabReport)
        .with_due_date(now() - Duration::hours(30));
    let plan = generate(&task, now());

    assert_eq!(plan.urgency_level, UrgencyLevel::Critical);
    assert_eq!(plan.days_until_due, Some(-1));
    // 2, 4, 3, 5, 2 halved with a one-hour floor
    let hours: Vec<f64> = plan.steps.iter().map(|s| s.estimated_hours).collect();
    assert_eq!(hours, vec![1.0, 2.0, 1.5, 2.5, 1.0]);
    assert!(plan.schedule.time_management.starts_with("Emergency mode"));
    assert!(plan.subject_specific_advice.starts_with("🧪 CHEMISTRY LAB REPORT EXCELLENCE:"));
}

#[test]
fn test_generation_is_thread_safe() {
    let task = TaskDescriptor::new("Problem set 3", "Physics", AssignmentType::Homework)
        .with_due_date(now() + Duration::days(4));
    let expected = generate(&task, now());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let task = task.clone();
            std::thread::spawn(move || generate(&task, now()))
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}
