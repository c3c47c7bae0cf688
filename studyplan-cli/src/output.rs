use anyhow::{Context, Result};
use chrono_tz::Tz;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use studyplan_core::{StudyPlan, plan_markdown, plan_summary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Markdown,
    Json,
}

pub fn render_plan(plan: &StudyPlan, format: OutputFormat, tz: Tz) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => plan_summary(plan, tz),
        OutputFormat::Markdown => plan_markdown(plan, tz),
        OutputFormat::Json => {
            let mut s = serde_json::to_string_pretty(plan).context("serialize plan")?;
            s.push('\n');
            s
        }
    })
}

/// Several plans: a JSON array, or documents separated by blank lines
/// (`---` between Markdown plans).
pub fn render_plans(plans: &[StudyPlan], format: OutputFormat, tz: Tz) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut s = serde_json::to_string_pretty(plans).context("serialize plans")?;
            s.push('\n');
            Ok(s)
        }
        OutputFormat::Markdown => Ok(plans
            .iter()
            .map(|p| plan_markdown(p, tz))
            .collect::<Vec<_>>()
            .join("\n---\n\n")),
        OutputFormat::Text => Ok(plans
            .iter()
            .map(|p| plan_summary(p, tz))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
