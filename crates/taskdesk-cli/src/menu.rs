//! Interactive menu
//!
//! Guides the operator through creating projects, users, and tasks. Each
//! flow re-prompts until the basic field rules pass, then hands the values
//! to the [`TaskManager`], which applies the full validation.

use std::io::Write;

use taskdesk_core::TaskManager;
use taskdesk_core::application::validators::{
    ProjectValidator, TaskValidator, UserValidator, validate_date, validate_email,
};
use taskdesk_core::config::DisplayConfig;
use taskdesk_core::domain::EntityId;
use tracing::debug;

use crate::prompt::Prompt;
use crate::render::{self, OutputFormat};

const EXIT_CHOICE: u32 = 7;

/// Whether the menu loop keeps going after a flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

/// Outcome of picking an entry from a numbered list
enum Selection {
    Picked(usize),
    Invalid,
    Quit,
}

/// Outcome of a project or user picker inside a creation flow
enum Pick {
    Chosen(EntityId),
    Abandoned(Step),
}

pub struct Menu<P, W> {
    manager: TaskManager,
    prompt: P,
    out: W,
    display: DisplayConfig,
    format: OutputFormat,
    quiet: bool,
}

fn meets_min(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

impl<P: Prompt, W: Write> Menu<P, W> {
    pub fn new(manager: TaskManager, prompt: P, out: W, display: DisplayConfig) -> Self {
        Self {
            manager,
            prompt,
            out,
            display,
            format: OutputFormat::Text,
            quiet: false,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    #[cfg(test)]
    pub fn manager(&self) -> &TaskManager {
        &self.manager
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (P, W) {
        (self.prompt, self.out)
    }

    /// Show the menu and handle choices until Exit or end of input
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.show_menu()?;
            let Some(answer) = self.prompt.ask("\nEnter your choice: ")? else {
                writeln!(self.out, "Exiting...")?;
                return Ok(());
            };

            let choice = answer.trim().parse::<u32>().ok();
            debug!(?choice, "Menu choice");
            if self.handle_choice(choice)? == Step::Quit {
                return Ok(());
            }
        }
    }

    fn show_menu(&mut self) -> anyhow::Result<()> {
        writeln!(self.out, "\n=== Task Management System ===")?;
        writeln!(self.out, "1. Create Task")?;
        writeln!(self.out, "2. Create User")?;
        writeln!(self.out, "3. Create Project")?;
        writeln!(self.out, "4. Show All Tasks")?;
        writeln!(self.out, "5. Show All Projects")?;
        writeln!(self.out, "6. Show All Users")?;
        writeln!(self.out, "{}. Exit", EXIT_CHOICE)?;
        Ok(())
    }

    fn handle_choice(&mut self, choice: Option<u32>) -> anyhow::Result<Step> {
        match choice {
            Some(1) => self.create_task(),
            Some(2) => self.create_user(),
            Some(3) => self.create_project(),
            Some(4) => {
                render::write_tasks(&mut self.out, self.manager.tasks(), &self.display, self.format)?;
                Ok(Step::Continue)
            }
            Some(5) => {
                render::write_projects(
                    &mut self.out,
                    self.manager.projects(),
                    &self.display,
                    self.format,
                )?;
                Ok(Step::Continue)
            }
            Some(6) => {
                render::write_users(&mut self.out, self.manager.users(), &self.display, self.format)?;
                Ok(Step::Continue)
            }
            Some(EXIT_CHOICE) => {
                writeln!(self.out, "Exiting...")?;
                Ok(Step::Quit)
            }
            _ => {
                writeln!(self.out, "Invalid option. Please try again.")?;
                Ok(Step::Continue)
            }
        }
    }

    /// Ask until `accept` passes; `None` when input ends first
    fn ask_until(
        &mut self,
        prompt: &str,
        accept: impl Fn(&str) -> bool,
        retry_message: &str,
    ) -> anyhow::Result<Option<String>> {
        loop {
            let Some(answer) = self.prompt.ask(prompt)? else {
                return Ok(None);
            };
            if accept(&answer) {
                return Ok(Some(answer));
            }
            writeln!(self.out, "{}", retry_message)?;
        }
    }

    /// Ask for a 1-based position in a list of `len` entries
    fn select(&mut self, prompt: &str, len: usize) -> anyhow::Result<Selection> {
        let Some(answer) = self.prompt.ask(prompt)? else {
            return Ok(Selection::Quit);
        };
        match answer.trim().parse::<usize>() {
            Ok(n) if (1..=len).contains(&n) => Ok(Selection::Picked(n - 1)),
            _ => Ok(Selection::Invalid),
        }
    }

    /// List projects and let the operator pick one
    fn select_project(&mut self, heading: &str) -> anyhow::Result<Pick> {
        writeln!(self.out, "\n{}", heading)?;
        for (index, project) in self.manager.projects().iter().enumerate() {
            writeln!(self.out, "{}. {} (ID: {})", index + 1, project.name, project.id)?;
        }

        let count = self.manager.projects().len();
        match self.select("\nEnter project number: ", count)? {
            Selection::Picked(index) => {
                let project = &self.manager.projects()[index];
                writeln!(self.out, "Selected Project: {}", project.name)?;
                Ok(Pick::Chosen(project.id))
            }
            Selection::Invalid => {
                writeln!(self.out, "Invalid project selection.")?;
                Ok(Pick::Abandoned(Step::Continue))
            }
            Selection::Quit => Ok(Pick::Abandoned(Step::Quit)),
        }
    }

    /// List a project's users and let the operator pick one
    fn select_user(&mut self, candidates: &[(EntityId, String)]) -> anyhow::Result<Pick> {
        writeln!(self.out, "\nSelect a user for this task:")?;
        for (index, (id, username)) in candidates.iter().enumerate() {
            writeln!(self.out, "{}. {} (ID: {})", index + 1, username, id)?;
        }

        match self.select("\nEnter user number: ", candidates.len())? {
            Selection::Picked(index) => {
                let (id, username) = &candidates[index];
                writeln!(self.out, "Assigned User: {}", username)?;
                Ok(Pick::Chosen(*id))
            }
            Selection::Invalid => {
                writeln!(self.out, "Invalid user selection.")?;
                Ok(Pick::Abandoned(Step::Continue))
            }
            Selection::Quit => Ok(Pick::Abandoned(Step::Quit)),
        }
    }

    fn create_project(&mut self) -> anyhow::Result<Step> {
        writeln!(self.out, "\n--- Creating New Project ---")?;

        let Some(name) = self.ask_until(
            "Enter project name: ",
            |v| meets_min(v, ProjectValidator::NAME_MIN),
            "Project name must be at least 2 characters",
        )?
        else {
            return Ok(Step::Quit);
        };
        let Some(description) = self.ask_until(
            "Enter project description: ",
            |v| meets_min(v, ProjectValidator::DESCRIPTION_MIN),
            "Description must be at least 5 characters",
        )?
        else {
            return Ok(Step::Quit);
        };
        let Some(start_date) = self.ask_until(
            "Enter start date (YYYY-MM-DD): ",
            |v| validate_date(v.trim()).is_ok(),
            "Invalid date; use format YYYY-MM-DD",
        )?
        else {
            return Ok(Step::Quit);
        };

        match self
            .manager
            .create_project(&name, &description, start_date.trim())
        {
            Ok(project) => {
                if !self.quiet {
                    writeln!(self.out, "\nProject created successfully!")?;
                    writeln!(self.out, "  ID: {}", project.id)?;
                    writeln!(self.out, "  Name: {}", project.name)?;
                }
            }
            Err(e) => self.report("project", &e)?,
        }
        Ok(Step::Continue)
    }

    fn create_user(&mut self) -> anyhow::Result<Step> {
        writeln!(self.out, "\n--- Creating New User ---")?;

        if self.manager.projects().is_empty() {
            writeln!(self.out, "No projects exist. Create a project first.")?;
            return Ok(Step::Continue);
        }

        let project_id = match self.select_project("Select a project for this user:")? {
            Pick::Chosen(id) => id,
            Pick::Abandoned(step) => return Ok(step),
        };

        let Some(username) = self.ask_until(
            "Enter username: ",
            |v| meets_min(v, UserValidator::USERNAME_MIN),
            "Username must be at least 3 characters",
        )?
        else {
            return Ok(Step::Quit);
        };
        let Some(email) = self.ask_until(
            "Enter email: ",
            |v| validate_email(v.trim()).is_ok(),
            "Invalid email format",
        )?
        else {
            return Ok(Step::Quit);
        };

        match self.manager.create_user(&username, &email, project_id) {
            Ok(user) => {
                if !self.quiet {
                    writeln!(self.out, "\nUser created successfully!")?;
                    writeln!(self.out, "  ID: {}", user.id)?;
                    writeln!(self.out, "  Username: {}", user.username)?;
                }
            }
            Err(e) => self.report("user", &e)?,
        }
        Ok(Step::Continue)
    }

    fn create_task(&mut self) -> anyhow::Result<Step> {
        writeln!(self.out, "\n--- Creating New Task ---")?;

        if self.manager.projects().is_empty() {
            writeln!(
                self.out,
                "No projects found. You must create a project before creating a task."
            )?;
            return Ok(Step::Continue);
        }

        let project_id = match self.select_project("Select a project for this task:")? {
            Pick::Chosen(id) => id,
            Pick::Abandoned(step) => return Ok(step),
        };

        let candidates: Vec<(EntityId, String)> = self
            .manager
            .users_in_project(project_id)
            .into_iter()
            .map(|user| (user.id, user.username.clone()))
            .collect();
        if candidates.is_empty() {
            writeln!(
                self.out,
                "No users for this project. Create a user assigned to this project first."
            )?;
            return Ok(Step::Continue);
        }

        let user_id = match self.select_user(&candidates)? {
            Pick::Chosen(id) => id,
            Pick::Abandoned(step) => return Ok(step),
        };

        let Some(name) = self.ask_until(
            "Enter task name: ",
            |v| meets_min(v, TaskValidator::NAME_MIN),
            "Task name must be at least 2 characters",
        )?
        else {
            return Ok(Step::Quit);
        };
        let Some(description) = self.ask_until(
            "Enter task description: ",
            |v| meets_min(v, TaskValidator::DESCRIPTION_MIN),
            "Task description must be at least 5 characters",
        )?
        else {
            return Ok(Step::Quit);
        };

        match self
            .manager
            .create_task(&name, &description, project_id, user_id)
        {
            Ok(task) => {
                if !self.quiet {
                    writeln!(self.out, "\nTask created successfully!")?;
                    writeln!(self.out, "  ID: {}", task.id)?;
                    writeln!(self.out, "  Status: {}", task.status)?;
                }
            }
            Err(e) => self.report("task", &e)?,
        }
        Ok(Step::Continue)
    }

    fn report(&mut self, entity: &str, error: &taskdesk_core::Error) -> anyhow::Result<()> {
        writeln!(self.out, "Error creating {}: {}", entity, error)?;
        if !self.quiet {
            if let Some(hint) = error.suggestion() {
                writeln!(self.out, "  Hint: {}", hint)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompt;
    use taskdesk_core::domain::tasks::TaskStatus;

    fn run_script(manager: TaskManager, answers: &[&str]) -> (TaskManager, String, Vec<String>) {
        let prompt = ScriptedPrompt::new(answers.iter().copied());
        let mut menu = Menu::new(manager, prompt, Vec::new(), DisplayConfig::default());
        menu.run().unwrap();

        let Menu {
            manager,
            prompt,
            out,
            ..
        } = menu;
        (manager, String::from_utf8(out).unwrap(), prompt.asked)
    }

    fn seeded() -> TaskManager {
        let mut manager = TaskManager::new();
        let p = manager
            .create_project("Website Revamp", "Redesign the marketing site", "2024-01-15")
            .unwrap();
        manager.create_user("alice", "alice@example.com", p.id).unwrap();
        manager
    }

    #[test]
    fn test_exit_choice() {
        let (_, out, asked) = run_script(TaskManager::new(), &["7"]);
        assert!(out.contains("=== Task Management System ==="));
        assert!(out.ends_with("Exiting...\n"));
        assert_eq!(asked.len(), 1);
    }

    #[test]
    fn test_end_of_input_exits() {
        let (_, out, _) = run_script(TaskManager::new(), &[]);
        assert!(out.contains("Exiting..."));
    }

    #[test]
    fn test_invalid_choice() {
        let (_, out, _) = run_script(TaskManager::new(), &["abc", "42", "7"]);
        assert_eq!(out.matches("Invalid option. Please try again.").count(), 2);
    }

    #[test]
    fn test_create_project_reprompts() {
        let (manager, out, _) = run_script(
            TaskManager::new(),
            &[
                "3",
                "W",
                "Website Revamp",
                "tiny",
                "Redesign the marketing site",
                "2024/01/15",
                "2024-02-30",
                "2024-01-15",
                "7",
            ],
        );

        assert!(out.contains("Project name must be at least 2 characters"));
        assert!(out.contains("Description must be at least 5 characters"));
        assert_eq!(out.matches("Invalid date; use format YYYY-MM-DD").count(), 2);
        assert!(out.contains("Project created successfully!"));
        assert_eq!(manager.projects().len(), 1);
        assert_eq!(manager.projects()[0].name, "Website Revamp");
    }

    #[test]
    fn test_create_project_core_rejection_is_reported() {
        let long_name = "n".repeat(61);
        let (manager, out, _) = run_script(
            TaskManager::new(),
            &["3", &long_name, "Long name project", "2024-01-15", "7"],
        );

        assert!(out.contains("Error creating project: Project name must be at most 60 characters"));
        assert!(manager.projects().is_empty());
    }

    #[test]
    fn test_create_user_without_projects() {
        let (manager, out, _) = run_script(TaskManager::new(), &["2", "7"]);
        assert!(out.contains("No projects exist. Create a project first."));
        assert!(manager.users().is_empty());
    }

    #[test]
    fn test_create_user_flow() {
        let mut manager = TaskManager::new();
        manager
            .create_project("Website Revamp", "Redesign the marketing site", "2024-01-15")
            .unwrap();

        let (manager, out, _) = run_script(
            manager,
            &["2", "1", "al", "alice", "alice-at-example", "alice@example.com", "7"],
        );

        assert!(out.contains("1. Website Revamp (ID: 1)"));
        assert!(out.contains("Username must be at least 3 characters"));
        assert!(out.contains("Invalid email format"));
        assert!(out.contains("User created successfully!"));
        assert_eq!(manager.users()[0].project_id, EntityId::new(1));
    }

    #[test]
    fn test_invalid_project_selection_aborts_flow() {
        let (manager, out, _) = run_script(seeded(), &["2", "9", "7"]);
        assert!(out.contains("Invalid project selection."));
        assert_eq!(manager.users().len(), 1);
    }

    #[test]
    fn test_create_task_flow() {
        let (manager, out, _) = run_script(
            seeded(),
            &["1", "1", "1", "Draft wireframes", "Initial wireframe draft", "4", "7"],
        );

        assert!(out.contains("Selected Project: Website Revamp"));
        assert!(out.contains("Assigned User: alice"));
        assert!(out.contains("Task created successfully!"));
        assert!(out.contains("=== All Tasks ==="));
        assert!(out.contains("Status: pending"));
        assert_eq!(manager.tasks().len(), 1);
        assert_eq!(manager.tasks()[0].status, TaskStatus::Pending);
    }

    #[test]
    fn test_create_task_requires_users_in_project() {
        let mut manager = seeded();
        manager
            .create_project("Mobile App", "Ship the mobile client", "2024-02-01")
            .unwrap();

        let (manager, out, _) = run_script(manager, &["1", "2", "7"]);
        assert!(out.contains("No users for this project."));
        assert!(manager.tasks().is_empty());
    }

    #[test]
    fn test_create_task_invalid_user_selection() {
        let (manager, out, _) = run_script(seeded(), &["1", "1", "0", "7"]);
        assert!(out.contains("Invalid user selection."));
        assert!(manager.tasks().is_empty());
    }

    #[test]
    fn test_input_ending_mid_flow_quits() {
        let (manager, out, _) = run_script(TaskManager::new(), &["3", "Website"]);
        assert!(manager.projects().is_empty());
        assert!(!out.contains("Exiting..."));
    }

    #[test]
    fn test_listings() {
        let (_, out, _) = run_script(seeded(), &["5", "6", "4", "7"]);
        assert!(out.contains("=== All Projects ==="));
        assert!(out.contains("=== All Users ==="));
        assert!(out.contains("Email: alice@example.com"));
        assert!(out.contains("No tasks found."));
    }

    #[test]
    fn test_quiet_suppresses_confirmations() {
        let mut manager = seeded();
        manager
            .create_project("Mobile App", "Ship the mobile client", "2024-02-01")
            .unwrap();
        let prompt = ScriptedPrompt::new([
            "3",
            "Docs Site",
            "Publish the user guide",
            "2024-03-01",
            "1",
            "1",
            "1",
            "Draft wireframes",
            "Initial wireframe draft",
            "7",
        ]);
        let mut menu = Menu::new(manager, prompt, Vec::new(), DisplayConfig::default())
            .with_quiet(true);
        menu.run().unwrap();

        assert_eq!(menu.manager().projects().len(), 3);
        assert_eq!(menu.manager().tasks().len(), 1);
        let (_, out) = menu.into_parts();
        let out = String::from_utf8(out).unwrap();
        assert!(!out.contains("created successfully"));
        assert!(!out.contains("  ID: "));
        assert!(!out.contains("Hint:"));
    }

    #[test]
    fn test_json_listing() {
        let prompt = ScriptedPrompt::new(["6", "7"]);
        let mut menu = Menu::new(seeded(), prompt, Vec::new(), DisplayConfig::default())
            .with_format(OutputFormat::Json);
        menu.run().unwrap();

        assert_eq!(menu.manager().users().len(), 1);
        let (_, out) = menu.into_parts();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("\"username\": \"alice\""));
    }
}
