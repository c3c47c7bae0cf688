//! Step templates per assignment type, scaled by urgency.

use serde::{Deserialize, Serialize};

use crate::task::AssignmentType;
use crate::urgency::Urgency;

/// Unknown assignment types get this template.
pub const FALLBACK_TEMPLATE: AssignmentType = AssignmentType::Project;

const EMERGENCY_FACTOR: f64 = 0.5;
const COMPRESSED_FACTOR: f64 = 0.7;
const MIN_STEP_HOURS: f64 = 1.0;

const EMERGENCY_TIPS: [&str; 2] = [
    "⚠️ CRITICAL: Focus on essential requirements only",
    "Consider requesting extension if possible",
];
const COMPRESSED_TIPS: [&str; 2] = ["⏰ High priority - start immediately", "Set daily milestones"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepPriority {
    Low,
    Medium,
    High,
    Critical,
}

/// One actionable unit of work in a study plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanStep {
    pub id: String,
    pub title: String,
    pub description: String,
    pub estimated_hours: f64,
    pub priority: StepPriority,
    pub resources: Vec<String>,
    pub tips: Vec<String>,
    /// Ids of steps expected to come first. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,
}

/// Compiled-in step definition.
#[derive(Debug, Clone, Copy)]
pub struct StepTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub hours: f64,
    pub priority: StepPriority,
    pub resources: &'static [&'static str],
    pub tips: &'static [&'static str],
}

impl StepTemplate {
    fn instantiate(&self) -> PlanStep {
        PlanStep {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            estimated_hours: self.hours,
            priority: self.priority,
            resources: self.resources.iter().map(|s| s.to_string()).collect(),
            tips: self.tips.iter().map(|s| s.to_string()).collect(),
            dependencies: None,
        }
    }
}

const EXAM: &[StepTemplate] = &[
    StepTemplate {
        id: "review-materials",
        title: "Review Course Materials",
        description: "Go through lecture notes, textbooks, and past assignments",
        hours: 3.0,
        priority: StepPriority::High,
        resources: &["Course notes", "Textbook", "Past assignments"],
        tips: &["Create summary sheets", "Identify key concepts", "Review practice problems"],
    },
    StepTemplate {
        id: "practice-problems",
        title: "Practice Problems",
        description: "Work through sample problems and past exam questions",
        hours: 4.0,
        priority: StepPriority::High,
        resources: &["Practice exams", "Sample problems", "Study guides"],
        tips: &["Time yourself", "Review mistakes", "Focus on weak areas"],
    },
    StepTemplate {
        id: "final-review",
        title: "Final Review",
        description: "Quick review of key concepts and formulas",
        hours: 2.0,
        priority: StepPriority::Medium,
        resources: &["Summary sheets", "Key formulas", "Important concepts"],
        tips: &["Get good sleep", "Eat well", "Arrive early"],
    },
];

const ESSAY: &[StepTemplate] = &[
    StepTemplate {
        id: "research",
        title: "Research and Planning",
        description: "Gather sources and develop thesis statement",
        hours: 4.0,
        priority: StepPriority::High,
        resources: &["Academic databases", "Library resources", "Citation tools"],
        tips: &[
            "Take detailed notes",
            "Evaluate source credibility",
            "Start bibliography early",
        ],
    },
    StepTemplate {
        id: "outline",
        title: "Create Outline",
        description: "Organize ideas and create detailed structure",
        hours: 2.0,
        priority: StepPriority::High,
        resources: &["Outline templates", "Writing guidelines"],
        tips: &[
            "Start with main points",
            "Include evidence for each point",
            "Check logical flow",
        ],
    },
    StepTemplate {
        id: "draft",
        title: "Write First Draft",
        description: "Write complete first version of essay",
        hours: 6.0,
        priority: StepPriority::High,
        resources: &["Outline", "Research notes", "Writing guidelines"],
        tips: &[
            "Don't worry about perfection",
            "Focus on content first",
            "Use clear topic sentences",
        ],
    },
    StepTemplate {
        id: "revise",
        title: "Revise and Edit",
        description: "Improve content, structure, and clarity",
        hours: 3.0,
        priority: StepPriority::Medium,
        resources: &["Writing center", "Peer review", "Grammar checkers"],
        tips: &["Read aloud", "Check for logical flow", "Verify citations"],
    },
];

const PROJECT: &[StepTemplate] = &[
    StepTemplate {
        id: "planning",
        title: "Project Planning",
        description: "Define scope, requirements, and timeline",
        hours: 3.0,
        priority: StepPriority::High,
        resources: &["Project templates", "Requirements documents"],
        tips: &["Break into phases", "Set milestones", "Identify risks early"],
    },
    StepTemplate {
        id: "research",
        title: "Research and Design",
        description: "Gather information and design solution",
        hours: 5.0,
        priority: StepPriority::High,
        resources: &["Research databases", "Design tools", "Industry standards"],
        tips: &[
            "Document your process",
            "Consider alternatives",
            "Get feedback early",
        ],
    },
    StepTemplate {
        id: "implementation",
        title: "Implementation",
        description: "Build and develop the project",
        hours: 8.0,
        priority: StepPriority::High,
        resources: &["Development tools", "Testing frameworks", "Documentation"],
        tips: &["Test frequently", "Version control", "Document as you go"],
    },
    StepTemplate {
        id: "testing",
        title: "Testing and Refinement",
        description: "Test thoroughly and make improvements",
        hours: 4.0,
        priority: StepPriority::Medium,
        resources: &["Testing tools", "User feedback", "Quality metrics"],
        tips: &["Test edge cases", "Get user feedback", "Document issues"],
    },
];

const LAB_REPORT: &[StepTemplate] = &[
    StepTemplate {
        id: "experiment-planning",
        title: "Experiment Planning & Safety Review",
        description: "Review lab procedures, safety protocols, and prepare materials list",
        hours: 2.0,
        priority: StepPriority::High,
        resources: &["Lab manual", "Safety guidelines", "Equipment checklist"],
        tips: &[
            "Review safety protocols thoroughly",
            "Prepare all materials in advance",
            "Understand the experimental procedure",
        ],
    },
    StepTemplate {
        id: "data-collection",
        title: "Data Collection & Experimentation",
        description: "Conduct the experiment, record observations, and collect data",
        hours: 4.0,
        priority: StepPriority::High,
        resources: &["Lab equipment", "Data sheets", "Measurement tools"],
        tips: &[
            "Record everything immediately",
            "Take photos of setup and results",
            "Note any unexpected observations",
        ],
    },
    StepTemplate {
        id: "data-analysis",
        title: "Data Analysis & Calculations",
        description: "Process data, perform calculations, and create graphs/charts",
        hours: 3.0,
        priority: StepPriority::High,
        resources: &["Excel/Google Sheets", "Graphing software", "Statistical tools"],
        tips: &[
            "Double-check all calculations",
            "Include error analysis",
            "Create clear, labeled graphs",
        ],
    },
    StepTemplate {
        id: "report-writing",
        title: "Report Writing",
        description: "Write the complete lab report with proper scientific format",
        hours: 5.0,
        priority: StepPriority::High,
        resources: &[
            "Lab report template",
            "Scientific writing guides",
            "Citation tools",
        ],
        tips: &[
            "Follow the standard lab report format",
            "Include all required sections",
            "Use clear, scientific language",
        ],
    },
    StepTemplate {
        id: "review-revision",
        title: "Review & Revision",
        description: "Proofread, check calculations, and ensure all requirements are met",
        hours: 2.0,
        priority: StepPriority::Medium,
        resources: &["Lab report checklist", "Peer review", "Instructor guidelines"],
        tips: &[
            "Verify all calculations",
            "Check formatting requirements",
            "Ensure all sections are complete",
        ],
    },
];

const HOMEWORK: &[StepTemplate] = &[
    StepTemplate {
        id: "problem-analysis",
        title: "Problem Analysis",
        description: "Read through problems carefully and identify what is being asked",
        hours: 1.0,
        priority: StepPriority::High,
        resources: &["Textbook", "Class notes", "Problem-solving guides"],
        tips: &[
            "Underline key information",
            "Identify given and unknown variables",
            "Understand the problem type",
        ],
    },
    StepTemplate {
        id: "solution-development",
        title: "Solution Development",
        description: "Work through problems step-by-step with clear methodology",
        hours: 3.0,
        priority: StepPriority::High,
        resources: &["Practice problems", "Solution examples", "Study guides"],
        tips: &[
            "Show all work clearly",
            "Check units and calculations",
            "Use appropriate formulas",
        ],
    },
    StepTemplate {
        id: "verification",
        title: "Solution Verification",
        description: "Check answers, verify calculations, and ensure completeness",
        hours: 1.0,
        priority: StepPriority::Medium,
        resources: &["Answer keys", "Verification methods", "Peer review"],
        tips: &[
            "Double-check all calculations",
            "Verify units are correct",
            "Ensure all problems are attempted",
        ],
    },
];

const PRESENTATION: &[StepTemplate] = &[
    StepTemplate {
        id: "content-research",
        title: "Content Research & Organization",
        description: "Research topic thoroughly and organize key points",
        hours: 4.0,
        priority: StepPriority::High,
        resources: &["Research databases", "Topic guides", "Organizational tools"],
        tips: &[
            "Focus on main points only",
            "Create clear structure",
            "Gather supporting evidence",
        ],
    },
    StepTemplate {
        id: "visual-design",
        title: "Visual Design & Slides",
        description: "Create engaging slides with clear visuals and minimal text",
        hours: 3.0,
        priority: StepPriority::High,
        resources: &["Presentation software", "Design templates", "Image resources"],
        tips: &[
            "Use bullet points, not paragraphs",
            "Include relevant images",
            "Keep slides simple and clear",
        ],
    },
    StepTemplate {
        id: "rehearsal",
        title: "Rehearsal & Timing",
        description: "Practice delivery multiple times and time your presentation",
        hours: 2.0,
        priority: StepPriority::Medium,
        resources: &["Timer", "Recording device", "Practice audience"],
        tips: &[
            "Practice with timing",
            "Record yourself speaking",
            "Prepare for questions",
        ],
    },
];

const QUIZ: &[StepTemplate] = &[
    StepTemplate {
        id: "topic-review",
        title: "Topic Review",
        description: "Review key concepts, formulas, and important details",
        hours: 2.0,
        priority: StepPriority::High,
        resources: &["Class notes", "Textbook", "Study guides"],
        tips: &[
            "Focus on main concepts",
            "Create quick reference sheets",
            "Review recent material",
        ],
    },
    StepTemplate {
        id: "practice-questions",
        title: "Practice Questions",
        description: "Work through sample questions and past quiz problems",
        hours: 3.0,
        priority: StepPriority::High,
        resources: &["Practice quizzes", "Sample problems", "Flashcards"],
        tips: &[
            "Time yourself on practice questions",
            "Review incorrect answers",
            "Focus on weak areas",
        ],
    },
    StepTemplate {
        id: "final-prep",
        title: "Final Preparation",
        description: "Quick review of key points and mental preparation",
        hours: 1.0,
        priority: StepPriority::Medium,
        resources: &["Summary notes", "Key formulas", "Mental preparation"],
        tips: &[
            "Get adequate sleep",
            "Eat a good meal",
            "Arrive early and relaxed",
        ],
    },
];

/// Template for an assignment type, falling back to [`FALLBACK_TEMPLATE`].
pub fn template_for(assignment_type: &AssignmentType) -> &'static [StepTemplate] {
    match assignment_type {
        AssignmentType::Exam => EXAM,
        AssignmentType::Essay => ESSAY,
        AssignmentType::Project => PROJECT,
        AssignmentType::LabReport => LAB_REPORT,
        AssignmentType::Homework => HOMEWORK,
        AssignmentType::Presentation => PRESENTATION,
        AssignmentType::Quiz => QUIZ,
        AssignmentType::Other(_) => template_for(&FALLBACK_TEMPLATE),
    }
}

/// Instantiate the template for `assignment_type` and scale it for `urgency`.
pub fn select_steps(assignment_type: &AssignmentType, urgency: Urgency) -> Vec<PlanStep> {
    let (factor, extra_tips): (f64, &[&str]) = if urgency.is_emergency() {
        (EMERGENCY_FACTOR, &EMERGENCY_TIPS[..])
    } else if urgency.is_compressed() {
        (COMPRESSED_FACTOR, &COMPRESSED_TIPS[..])
    } else {
        (1.0, &[])
    };

    template_for(assignment_type)
        .iter()
        .map(|t| {
            let mut step = t.instantiate();
            if !extra_tips.is_empty() {
                step.estimated_hours = scale_hours(t.hours, factor);
                step.tips.extend(extra_tips.iter().map(|s| s.to_string()));
            }
            step
        })
        .collect()
}

/// `hours * factor`, floored at one hour, kept to a tenth of an hour.
fn scale_hours(hours: f64, factor: f64) -> f64 {
    let scaled = (hours * factor).max(MIN_STEP_HOURS);
    (scaled * 10.0).round() / 10.0
}

/// Sum of step hours. Accumulates in tenths so one-decimal values add up exactly.
pub fn total_hours(steps: &[PlanStep]) -> f64 {
    let tenths: i64 = steps
        .iter()
        .map(|s| (s.estimated_hours * 10.0).round() as i64)
        .sum();
    tenths as f64 / 10.0
}
