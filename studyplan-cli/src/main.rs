use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use studyplan_core::{TaskDescriptor, generate, parse_timezone, task_description};
use studyplan_ingest::load_tasks;

mod api;
mod batch;
mod config;
mod output;
mod state;

use api::{NewTask, TaskApi, TaskUpdate};
use config::{Config, load_config};
use output::OutputFormat;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("STUDYPLAN_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(
    name = "studyplan",
    version,
    long_version = LONG_VERSION,
    about = "Study plans for assignments, exams and projects"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a plan for one task
    Generate {
        #[arg(long)]
        title: String,

        #[arg(long)]
        subject: String,

        /// Assignment type, e.g. Exam, Essay, Project, "Lab Report"
        #[arg(long = "type")]
        assignment_type: String,

        /// Due date: RFC 3339, YYYY-MM-DD[ HH:MM[:SS]] or MM/DD/YYYY
        #[arg(long)]
        due: Option<String>,

        /// Your own notes, kept ahead of the plan when pushing
        #[arg(long, default_value = "")]
        description: String,

        #[command(flatten)]
        common: CommonArgs,

        /// Save the plan to the task backend
        #[arg(long)]
        push: bool,

        /// Update this backend task instead of creating one
        #[arg(long, requires = "push")]
        task_id: Option<String>,
    },

    /// Generate plans for many tasks at once
    Batch {
        /// CSV or JSON task file
        #[arg(long, required_unless_present = "from_api", conflicts_with = "from_api")]
        file: Option<PathBuf>,

        /// Fetch tasks from the backend (GET /tasks/)
        #[arg(long)]
        from_api: bool,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Manage ~/.studyplan/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(clap::Args, Debug)]
struct CommonArgs {
    /// IANA timezone for due dates without an offset (default from config)
    #[arg(long)]
    tz: Option<String>,

    /// Plan as of this RFC 3339 instant instead of the current time
    #[arg(long)]
    now: Option<String>,

    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

impl CommonArgs {
    fn timezone(&self, cfg: &Config) -> String {
        self.tz.clone().unwrap_or_else(|| cfg.planner.timezone.clone())
    }

    fn format(&self, cfg: &Config) -> OutputFormat {
        self.format.unwrap_or(cfg.planner.format)
    }
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config if none exists
    Init,
    /// Print the effective config
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            title,
            subject,
            assignment_type,
            due,
            description,
            common,
            push,
            task_id,
        } => {
            let cfg = load_config()?;
            let tz_name = common.timezone(&cfg);
            let tz = parse_timezone(&tz_name)?;
            let now = parse_now(common.now.as_deref())?;

            let task = TaskDescriptor::parse(&title, &subject, &assignment_type, due.as_deref(), &tz_name)?;
            let plan = generate(&task, now);
            print!("{}", output::render_plan(&plan, common.format(&cfg), tz)?);

            if push {
                let api = TaskApi::from_config(&cfg);
                let text = task_description(&description, &plan, tz);
                let saved = match task_id {
                    Some(id) => api.update_task(&id, &TaskUpdate::from_plan(&plan, text)).await?,
                    None => api.create_task(&NewTask::from_plan(&plan, text)?).await?,
                };
                eprintln!(
                    "Saved plan to task {}",
                    saved.id.as_deref().unwrap_or("(no id returned)")
                );
            }
        }

        Command::Batch {
            file,
            from_api,
            common,
        } => {
            let cfg = load_config()?;
            let tz_name = common.timezone(&cfg);
            let tz = parse_timezone(&tz_name)?;
            let now = parse_now(common.now.as_deref())?;

            let records = match (file, from_api) {
                (Some(path), _) => load_tasks(&path)?,
                (None, true) => TaskApi::from_config(&cfg).list_tasks().await?,
                (None, false) => bail!("pass --file <path> or --from-api"),
            };

            let plans = batch::plan_records(&records, &tz_name, now).await?;
            tracing::info!(tasks = records.len(), plans = plans.len(), "batch planned");
            print!("{}", output::render_plans(&plans, common.format(&cfg), tz)?);
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                println!("# {}", config::config_path()?.display());
                print!("{}", config::show_config(&load_config()?)?);
            }
        },
    }

    Ok(())
}

/// Captured once per invocation.
fn parse_now(raw: Option<&str>) -> Result<DateTime<Utc>> {
    match raw {
        Some(s) => Ok(DateTime::parse_from_rfc3339(s.trim())
            .with_context(|| format!("--now must be RFC 3339, got '{s}'"))?
            .with_timezone(&Utc)),
        None => Ok(Utc::now()),
    }
}
