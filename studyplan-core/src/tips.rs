//! Study tips: base, then urgency tier, then assignment type.

use crate::task::AssignmentType;
use crate::urgency::{Urgency, UrgencyLevel};

const BASE_TIPS: &[&str] = &[
    "Break work into 25-minute focused sessions",
    "Take regular breaks to maintain focus",
    "Eliminate distractions during study time",
    "Use active learning techniques",
];

const CRITICAL_TIPS: &[&str] = &[
    "⚠️ CRITICAL: Due in less than 24 hours!",
    "Focus on essential requirements only",
    "Use existing resources and templates",
    "Consider requesting extension if possible",
];

const STEADY_TIPS: &[&str] = &[
    "📅 Good time management - stay on schedule",
    "Start early to allow for thorough work",
    "Break work into daily manageable chunks",
    "Schedule regular review sessions",
];

fn type_tips(assignment_type: &AssignmentType) -> &'static [&'static str] {
    match assignment_type {
        AssignmentType::Exam => &[
            "Practice with past exams if available",
            "Create study guides and flashcards",
            "Review key concepts and formulas",
            "Get adequate sleep before the exam",
        ],
        AssignmentType::Essay => &[
            "Develop a clear thesis statement",
            "Use credible academic sources",
            "Follow proper citation format",
            "Proofread carefully before submitting",
        ],
        AssignmentType::Project => &[
            "Plan your approach before starting",
            "Set intermediate deadlines",
            "Document your process thoroughly",
            "Test your work regularly",
        ],
        AssignmentType::LabReport => &[
            "Review safety protocols thoroughly",
            "Record all observations immediately",
            "Include error analysis in calculations",
            "Follow standard lab report format",
            "Double-check all measurements and units",
        ],
        AssignmentType::Homework => &[
            "Read problems carefully before starting",
            "Show all work step-by-step",
            "Check your answers for reasonableness",
            "Review class notes for relevant concepts",
        ],
        AssignmentType::Presentation => &[
            "Practice your delivery multiple times",
            "Prepare visual aids that enhance understanding",
            "Know your audience and adapt accordingly",
            "Have a backup plan for technical issues",
        ],
        AssignmentType::Quiz => &[
            "Review recent material thoroughly",
            "Practice with sample questions",
            "Focus on key concepts and formulas",
            "Get adequate rest before the quiz",
        ],
        AssignmentType::Other(_) => &[],
    }
}

fn urgency_tips(urgency: Urgency) -> Vec<String> {
    match urgency.level {
        UrgencyLevel::Critical => CRITICAL_TIPS.iter().map(|s| s.to_string()).collect(),
        UrgencyLevel::High => {
            let days = urgency
                .days_until_due
                .map(|d| d.to_string())
                .unwrap_or_else(|| "a few".to_string());
            vec![
                format!("⏰ Due in {days} days - prioritize this task"),
                "Start immediately to avoid last-minute stress".to_string(),
                "Set daily milestones to track progress".to_string(),
                "Allow buffer time for unexpected issues".to_string(),
            ]
        }
        UrgencyLevel::Medium | UrgencyLevel::Low => {
            STEADY_TIPS.iter().map(|s| s.to_string()).collect()
        }
    }
}

/// Concatenated tips. No de-duplication across groups.
pub fn tips_for(urgency: Urgency, assignment_type: &AssignmentType) -> Vec<String> {
    let mut tips: Vec<String> = BASE_TIPS.iter().map(|s| s.to_string()).collect();
    tips.extend(urgency_tips(urgency));
    tips.extend(type_tips(assignment_type).iter().map(|s| s.to_string()));
    tips
}
