//! studyplan-core: deterministic study-plan generation for academic tasks.
//!
//! `generate` maps a task (subject, assignment type, due date) plus an
//! explicit "now" into urgency, time-boxed steps, a schedule, resources,
//! tips and subject advice, all from compiled-in tables.

pub mod advice;
pub mod error;
pub mod planner;
pub mod render;
pub mod resources;
pub mod schedule;
pub mod steps;
pub mod task;
pub mod time;
pub mod tips;
pub mod urgency;

pub use advice::advice_for;
pub use error::PlanError;
pub use planner::{StudyPlan, generate};
pub use render::{plan_markdown, plan_summary, task_description};
pub use resources::{Resource, resources_for};
pub use schedule::{StudySchedule, synthesize};
pub use steps::{FALLBACK_TEMPLATE, PlanStep, StepPriority, select_steps, total_hours};
pub use task::{AssignmentType, TaskDescriptor};
pub use time::{parse_due_date, parse_timezone};
pub use tips::tips_for;
pub use urgency::{Urgency, UrgencyLevel, classify};
