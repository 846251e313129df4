//! Task manager facade
//!
//! Owns one service per entity type. The process entry point builds a
//! single `TaskManager` and hands it to the front-end; tests build their
//! own, so no state is shared between them.

use tracing::debug;

use crate::config::Config;
use crate::domain::EntityId;
use crate::domain::projects::{Project, ProjectService};
use crate::domain::tasks::{Task, TaskService};
use crate::domain::users::{User, UserService};
use crate::error::Result;

#[derive(Debug, Default)]
pub struct TaskManager {
    projects: ProjectService,
    users: UserService,
    tasks: TaskService,
}

impl TaskManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a manager honouring the `tasks.verify_references` setting
    pub fn from_config(config: &Config) -> Self {
        debug!(
            verify_references = config.tasks.verify_references,
            "Initializing task manager"
        );
        Self {
            projects: ProjectService::new(),
            users: UserService::new(),
            tasks: TaskService::new().with_reference_checks(config.tasks.verify_references),
        }
    }

    pub fn create_project(
        &mut self,
        name: &str,
        description: &str,
        start_date: &str,
    ) -> Result<Project> {
        self.projects.create_project(name, description, start_date)
    }

    pub fn create_user(&mut self, username: &str, email: &str, project_id: EntityId) -> Result<User> {
        self.users
            .create_user(&self.projects, username, email, project_id)
    }

    pub fn create_task(
        &mut self,
        name: &str,
        description: &str,
        project_id: EntityId,
        user_id: EntityId,
    ) -> Result<Task> {
        self.tasks.create_task(
            &self.projects,
            &self.users,
            name,
            description,
            project_id,
            user_id,
        )
    }

    pub fn projects(&self) -> &[Project] {
        self.projects.get_all_projects()
    }

    pub fn users(&self) -> &[User] {
        self.users.get_all_users()
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.get_all_tasks()
    }

    pub fn users_in_project(&self, project_id: EntityId) -> Vec<&User> {
        self.users.users_in_project(project_id).collect()
    }

    pub fn project_service(&self) -> &ProjectService {
        &self.projects
    }

    pub fn user_service(&self) -> &UserService {
        &self.users
    }

    pub fn task_service(&self) -> &TaskService {
        &self.tasks
    }

    pub fn task_service_mut(&mut self) -> &mut TaskService {
        &mut self.tasks
    }
}
