//! Listing output for projects, users, and tasks

use std::io::Write;

use chrono::{DateTime, Local, Utc};
use taskdesk_core::config::DisplayConfig;
use taskdesk_core::domain::projects::Project;
use taskdesk_core::domain::tasks::Task;
use taskdesk_core::domain::users::User;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn timestamp(at: &DateTime<Utc>, display: &DisplayConfig) -> String {
    at.with_timezone(&Local)
        .format(&display.timestamp_format)
        .to_string()
}

pub fn write_projects(
    out: &mut impl Write,
    projects: &[Project],
    display: &DisplayConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(projects)?)?;
        return Ok(());
    }

    if projects.is_empty() {
        writeln!(out, "\nNo projects found.")?;
        return Ok(());
    }

    writeln!(out, "\n=== All Projects ===")?;
    for (index, project) in projects.iter().enumerate() {
        writeln!(out, "\n{}. {} (ID: {})", index + 1, project.name, project.id)?;
        writeln!(out, "   Description: {}", project.description)?;
        writeln!(
            out,
            "   Start Date: {}",
            project.start_date.format(&display.date_format)
        )?;
        writeln!(out, "   Created: {}", timestamp(&project.created_at, display))?;
    }
    Ok(())
}

pub fn write_users(
    out: &mut impl Write,
    users: &[User],
    display: &DisplayConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(users)?)?;
        return Ok(());
    }

    if users.is_empty() {
        writeln!(out, "\nNo users found.")?;
        return Ok(());
    }

    writeln!(out, "\n=== All Users ===")?;
    for (index, user) in users.iter().enumerate() {
        writeln!(out, "\n{}. {} (ID: {})", index + 1, user.username, user.id)?;
        writeln!(out, "   Email: {}", user.email)?;
        writeln!(out, "   Project ID: {}", user.project_id)?;
        writeln!(out, "   Created: {}", timestamp(&user.created_at, display))?;
    }
    Ok(())
}

pub fn write_tasks(
    out: &mut impl Write,
    tasks: &[Task],
    display: &DisplayConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(tasks)?)?;
        return Ok(());
    }

    if tasks.is_empty() {
        writeln!(out, "\nNo tasks found.")?;
        return Ok(());
    }

    writeln!(out, "\n=== All Tasks ===")?;
    for (index, task) in tasks.iter().enumerate() {
        writeln!(out, "\n{}. {} (ID: {})", index + 1, task.name, task.id)?;
        writeln!(out, "   Description: {}", task.description)?;
        writeln!(out, "   Status: {}", task.status)?;
        writeln!(out, "   Project ID: {}", task.project_id)?;
        writeln!(out, "   User ID: {}", task.user_id)?;
        writeln!(out, "   Created: {}", timestamp(&task.created_at, display))?;
    }
    Ok(())
}
