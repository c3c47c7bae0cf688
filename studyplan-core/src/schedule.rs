//! Daily/weekly pacing derived from total step hours and urgency.

use serde::{Deserialize, Serialize};

use crate::steps::{PlanStep, total_hours};
use crate::urgency::Urgency;

/// Hours per day never drop below this on a relaxed schedule.
const MIN_HOURS_PER_DAY: i64 = 2;
const RELAXED_SPAN_DAYS: f64 = 7.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySchedule {
    pub daily_goals: Vec<String>,
    pub weekly_milestones: Vec<String>,
    pub time_management: String,
}

/// Build the schedule. Exactly one of three branches applies:
/// single-day emergency, compressed (HIGH, <= 3 days), or a relaxed week.
pub fn synthesize(steps: &[PlanStep], urgency: Urgency) -> StudySchedule {
    let total = total_hours(steps);

    if urgency.is_emergency() {
        return StudySchedule {
            daily_goals: strings(&[
                "Complete all essential steps today",
                "Focus on core requirements only",
                "Prepare for immediate submission",
            ]),
            weekly_milestones: strings(&[
                "Complete entire project in one day",
                "Submit before deadline",
            ]),
            time_management:
                "Emergency mode: Allocate all available time today. Consider requesting extension."
                    .to_string(),
        };
    }

    if urgency.is_compressed() {
        // is_compressed guarantees a day count; HIGH means it is 2 or 3.
        let days = urgency.days_until_due.unwrap_or(1).max(1);
        let hours_per_day = (total / days as f64).ceil() as i64;
        return StudySchedule {
            daily_goals: vec![
                format!("Complete {hours_per_day} hours of work daily"),
                "Focus on highest priority steps first".to_string(),
                "Set specific daily milestones".to_string(),
            ],
            weekly_milestones: strings(&[
                "Complete research and planning phase",
                "Finish main implementation",
                "Submit on time",
            ]),
            time_management: format!(
                "Allocate {hours_per_day} hours daily. Start immediately and work consistently."
            ),
        };
    }

    let hours_per_day = relaxed_hours_per_day(total);
    let days = (total / hours_per_day as f64).ceil() as i64;
    StudySchedule {
        daily_goals: vec![
            format!("Study {hours_per_day} hours daily"),
            "Work on one major step per day".to_string(),
            "Review and revise regularly".to_string(),
        ],
        weekly_milestones: strings(&[
            "Complete research phase",
            "Finish first draft",
            "Complete revisions",
            "Submit final version",
        ]),
        time_management: format!(
            "Spread work over {days} days with {hours_per_day} hours daily."
        ),
    }
}

/// `max(2, ceil(total / 7))`.
pub fn relaxed_hours_per_day(total_hours: f64) -> i64 {
    ((total_hours / RELAXED_SPAN_DAYS).ceil() as i64).max(MIN_HOURS_PER_DAY)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::select_steps;
    use crate::task::AssignmentType;
    use crate::urgency::UrgencyLevel;

    fn urgency(level: UrgencyLevel, days: Option<i64>) -> Urgency {
        Urgency {
            level,
            days_until_due: days,
        }
    }

    #[test]
    fn test_emergency_schedule_recommends_extension() {
        let u = urgency(UrgencyLevel::Critical, Some(0));
        let steps = select_steps(&AssignmentType::Essay, u);
        let s = synthesize(&steps, u);
        assert_eq!(s.daily_goals.len(), 3);
        assert_eq!(s.weekly_milestones.len(), 2);
        assert!(s.time_management.contains("Consider requesting extension"));
    }

    #[test]
    fn test_compressed_schedule_divides_by_days_left() {
        let u = urgency(UrgencyLevel::High, Some(2));
        let steps = select_steps(&AssignmentType::Project, u);
        // 14.0 hours over 2 days
        let s = synthesize(&steps, u);
        assert_eq!(s.daily_goals[0], "Complete 7 hours of work daily");
        assert_eq!(
            s.time_management,
            "Allocate 7 hours daily. Start immediately and work consistently."
        );
    }

    #[test]
    fn test_compressed_schedule_at_three_days() {
        let u = urgency(UrgencyLevel::High, Some(3));
        let steps = select_steps(&AssignmentType::Essay, u);
        // 10.5 hours over 3 days rounds up to 4
        assert_eq!(total_hours(&steps), 10.5);
        let s = synthesize(&steps, u);
        assert_eq!(s.daily_goals[0], "Complete 4 hours of work daily");
        assert_eq!(s.weekly_milestones.len(), 3);
    }

    #[test]
    fn test_relaxed_schedule_spreads_over_week() {
        let u = urgency(UrgencyLevel::Low, Some(12));
        let steps = select_steps(&AssignmentType::Project, u);
        // 20 hours: ceil(20 / 7) = 3 per day, ceil(20 / 3) = 7 days
        let s = synthesize(&steps, u);
        assert_eq!(s.daily_goals[0], "Study 3 hours daily");
        assert_eq!(s.weekly_milestones.len(), 4);
        assert_eq!(s.time_management, "Spread work over 7 days with 3 hours daily.");
    }

    #[test]
    fn test_relaxed_minimum_two_hours() {
        let u = urgency(UrgencyLevel::Medium, None);
        let steps = select_steps(&AssignmentType::Homework, u);
        // 5 hours: max(2, ceil(5 / 7)) = 2, ceil(5 / 2) = 3 days
        let s = synthesize(&steps, u);
        assert_eq!(s.time_management, "Spread work over 3 days with 2 hours daily.");
        assert_eq!(relaxed_hours_per_day(0.0), 2);
    }
}
