//! Text renderings of a plan: full Markdown, the flattened task
//! description stored with an applied plan, and a short terminal summary.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::planner::StudyPlan;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// `2` for whole hours, `1.5` otherwise.
pub fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{hours:.0}")
    } else {
        format!("{hours:.1}")
    }
}

fn format_due(due: Option<DateTime<Utc>>, tz: Tz) -> String {
    match due {
        Some(d) => d.with_timezone(&tz).format("%b %-d, %Y").to_string(),
        None => "Not set".to_string(),
    }
}

/// Full plan as Markdown.
pub fn plan_markdown(plan: &StudyPlan, tz: Tz) -> String {
    let mut out = String::new();

    out.push_str(&format!("# Study plan: {}\n\n", plan.title));
    out.push_str(&format!("- **Subject:** {}\n", plan.subject));
    out.push_str(&format!("- **Assignment type:** {}\n", plan.assignment_type));
    out.push_str(&format!("- **Due:** {}\n", format_due(plan.due_date, tz)));
    out.push_str(&format!("- **Urgency:** {}\n", plan.urgency_level));
    out.push_str(&format!(
        "- **Estimated time:** {} hours\n\n",
        format_hours(plan.total_estimated_hours)
    ));

    out.push_str("## Steps\n\n");
    for (i, step) in plan.steps.iter().enumerate() {
        out.push_str(&format!(
            "### {}. {} ({} h, {:?} priority)\n\n",
            i + 1,
            step.title,
            format_hours(step.estimated_hours),
            step.priority
        ));
        out.push_str(&format!("{}\n\n", step.description));
        if !step.resources.is_empty() {
            out.push_str(&format!("Resources: {}\n\n", step.resources.join(", ")));
        }
        for tip in &step.tips {
            out.push_str(&format!("- {tip}\n"));
        }
        out.push('\n');
    }

    out.push_str("## Schedule\n\n");
    out.push_str(&format!("{}\n\n", plan.schedule.time_management));
    out.push_str("Daily goals:\n\n");
    push_bullets(&mut out, &plan.schedule.daily_goals);
    out.push_str("\nMilestones:\n\n");
    push_bullets(&mut out, &plan.schedule.weekly_milestones);

    out.push_str("\n## Resources\n\n");
    for r in &plan.resources {
        match &r.url {
            Some(url) => out.push_str(&format!("- [{}]({}): {}\n", r.title, url, r.description)),
            None => out.push_str(&format!("- {}: {}\n", r.title, r.description)),
        }
    }

    out.push_str("\n## Tips\n\n");
    push_bullets(&mut out, &plan.tips);

    out.push_str("\n## Advice\n\n");
    out.push_str(&format!("{}\n", plan.subject_specific_advice));

    out
}

fn push_bullets(out: &mut String, items: &[String]) {
    for item in items {
        out.push_str(&format!("- {item}\n"));
    }
}

/// Description text saved on a task when a plan is applied: the user's own
/// description followed by the plan's numbered steps.
pub fn task_description(original: &str, plan: &StudyPlan, tz: Tz) -> String {
    let steps = plan
        .steps
        .iter()
        .enumerate()
        .map(|(i, s)| format!("📋 **Step {}: {}**\n{}", i + 1, s.title, s.description))
        .collect::<Vec<_>>()
        .join("\n\n");

    let mut out = String::new();
    let original = original.trim_end();
    if !original.is_empty() {
        out.push_str(original);
        out.push_str("\n\n");
    }
    out.push_str(&format!(
        "{RULE}\n\n\
         🎯 **AI TASK PLANNING WIZARD RESULTS**\n\n\
         📚 **Subject:** {}\n\
         📅 **Due Date:** {}\n\
         📝 **Assignment Type:** {}\n\n\
         📋 **DETAILED ACTION PLAN:**\n\n\
         {steps}\n\n\
         💡 **Study Tips:**\n\
         • Break down each step into smaller 30-minute sessions\n\
         • Set specific deadlines for each step\n\
         • Review your progress daily\n\
         • Don't hesitate to ask for help if you get stuck\n\n\
         🎯 **Success Metrics:**\n\
         • Complete each step before moving to the next\n\
         • Review your work before submission\n\
         • Submit on time with confidence\n\n\
         {RULE}",
        plan.subject,
        format_due(plan.due_date, tz),
        plan.assignment_type,
    ));
    out
}

/// A few lines for the terminal.
pub fn plan_summary(plan: &StudyPlan, tz: Tz) -> String {
    let mut out = format!(
        "{} [{} / {}] due {} | urgency {} | {} h\n",
        plan.title,
        plan.subject,
        plan.assignment_type,
        format_due(plan.due_date, tz),
        plan.urgency_level,
        format_hours(plan.total_estimated_hours)
    );
    for (i, s) in plan.steps.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {} ({} h)\n",
            i + 1,
            s.title,
            format_hours(s.estimated_hours)
        ));
    }
    out.push_str(&format!("  -> {}\n", plan.schedule.time_management));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::generate;
    use crate::task::{AssignmentType, TaskDescriptor};
    use chrono::{Duration, TimeZone};

    fn plan_advice() -> String {
        sample().subject_specific_advice
    }

    fn sample() -> StudyPlan {
        let now = Utc.with_ymd_and_hms(2026, 2, 19, 12, 0, 0).unwrap();
        let t = TaskDescriptor::new("Final project", "Computer Science", AssignmentType::Project)
            .with_due_date(now + Duration::days(2));
        generate(&t, now)
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(2.0), "2");
        assert_eq!(format_hours(1.5), "1.5");
        assert_eq!(format_hours(14.0), "14");
    }

    #[test]
    fn test_task_description_layout() {
        let d = task_description("Build a web app.\n", &sample(), Tz::UTC);
        assert!(d.starts_with("Build a web app.\n\n━"));
        assert!(d.contains("📅 **Due Date:** Feb 21, 2026\n"));
        assert!(d.contains("📋 **Step 1: Project Planning**\nDefine scope, requirements, and timeline\n\n📋 **Step 2:"));
        assert!(d.contains("📝 **Assignment Type:** Project\n"));
        assert!(d.ends_with(RULE));
    }

    #[test]
    fn test_task_description_without_original_or_due() {
        let mut plan = sample();
        plan.due_date = None;
        let d = task_description("  ", &plan, Tz::UTC);
        assert!(d.starts_with(RULE));
        assert!(d.contains("📅 **Due Date:** Not set"));
    }

    #[test]
    fn test_due_date_shown_in_local_zone() {
        let plan = sample();
        // 2026-02-21 12:00 UTC is still Feb 21 in Chicago, but Feb 22 in Auckland.
        assert!(plan_summary(&plan, chrono_tz::America::Chicago).contains("due Feb 21, 2026"));
        assert!(plan_summary(&plan, chrono_tz::Pacific::Auckland).contains("due Feb 22, 2026"));
    }

    #[test]
    fn test_summary_one_line_per_step() {
        let plan = sample();
        let s = plan_summary(&plan, Tz::UTC);
        assert_eq!(s.lines().count(), plan.steps.len() + 2);
        assert!(s.starts_with("Final project [Computer Science / Project] due Feb 21, 2026 | urgency HIGH | 14 h\n"));
        assert!(s.contains("  1. Project Planning (2.1 h)\n"));
        assert!(s.ends_with("  -> Allocate 7 hours daily. Start immediately and work consistently.\n"));
    }

    #[test]
    fn test_markdown_sections() {
        let md = plan_markdown(&sample(), Tz::UTC);
        for heading in ["# Study plan: Final project", "## Steps", "## Schedule", "## Resources", "## Tips", "## Advice"] {
            assert!(md.contains(heading), "missing {heading}");
        }
        assert!(md.contains("### 1. Project Planning (2.1 h, High priority)"));
        assert!(md.contains("- [CS50x - Harvard](https://cs50.harvard.edu/x/)"));
        assert!(md.contains("Allocate 7 hours daily."));
        assert!(md.contains("Daily goals:\n\n- Complete 7 hours of work daily\n"));
        assert!(md.ends_with(&format!("## Advice\n\n{}\n", plan_advice())));
    }
}
