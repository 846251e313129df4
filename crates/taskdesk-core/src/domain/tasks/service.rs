//! Task service
//!
//! Owns the task repository. Besides field validation, the service checks
//! by default that the project and user exist and that the user belongs to
//! the project. Turning the checks off leaves referential integrity to the
//! caller, which must then resolve both ids itself before creating a task.

use tracing::{info, warn};

use super::entity::{NewTask, Task};
use crate::application::validators::TaskValidator;
use crate::domain::projects::ProjectService;
use crate::domain::users::UserService;
use crate::domain::{EntityId, Repository};
use crate::error::{Error, Result};

/// Creates and looks up tasks
#[derive(Debug)]
pub struct TaskService {
    repo: Repository<Task>,
    verify_references: bool,
}

impl Default for TaskService {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskService {
    /// Create a task service with reference checks enabled
    pub fn new() -> Self {
        Self {
            repo: Repository::new(),
            verify_references: true,
        }
    }

    /// Enable or disable project/user existence checks on creation
    pub fn with_reference_checks(mut self, enabled: bool) -> Self {
        self.verify_references = enabled;
        self
    }

    pub fn verifies_references(&self) -> bool {
        self.verify_references
    }

    /// Validate and store a new pending task
    pub fn create_task(
        &mut self,
        projects: &ProjectService,
        users: &UserService,
        name: &str,
        description: &str,
        project_id: EntityId,
        user_id: EntityId,
    ) -> Result<Task> {
        TaskValidator::validate_create(name, description, project_id, user_id)?;

        if self.verify_references {
            Self::check_references(projects, users, project_id, user_id)?;
        }

        let task = self
            .repo
            .create(NewTask {
                name: name.trim().to_string(),
                description: description.trim().to_string(),
                project_id,
                user_id,
            })
            .clone();

        info!(
            task_id = %task.id,
            project_id = %project_id,
            user_id = %user_id,
            "Task created"
        );
        Ok(task)
    }

    fn check_references(
        projects: &ProjectService,
        users: &UserService,
        project_id: EntityId,
        user_id: EntityId,
    ) -> Result<()> {
        if !projects.project_exists(project_id) {
            warn!(project_id = %project_id, "Rejected task for unknown project");
            return Err(Error::ProjectNotFound(project_id));
        }

        let user = users.get_user(user_id).ok_or_else(|| {
            warn!(user_id = %user_id, "Rejected task for unknown user");
            Error::UserNotFound(user_id)
        })?;

        if user.project_id != project_id {
            warn!(
                user_id = %user_id,
                project_id = %project_id,
                "Rejected task for user outside project"
            );
            return Err(Error::UserNotInProject {
                user: user_id,
                project: project_id,
            });
        }

        Ok(())
    }

    /// All tasks in creation order
    pub fn get_all_tasks(&self) -> &[Task] {
        self.repo.get_all()
    }

    pub fn get_task(&self, id: EntityId) -> Option<&Task> {
        self.repo.get_by_id(id)
    }

    pub fn repository(&self) -> &Repository<Task> {
        &self.repo
    }

    pub fn repository_mut(&mut self) -> &mut Repository<Task> {
        &mut self.repo
    }
}
