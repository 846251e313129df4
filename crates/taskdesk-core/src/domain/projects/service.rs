//! Project service
//!
//! Owns the project repository and validates input before storing.

use tracing::info;

use super::entity::{NewProject, Project};
use crate::application::validators::ProjectValidator;
use crate::domain::{EntityId, Repository};
use crate::error::Result;

/// Creates and looks up projects
#[derive(Debug, Default)]
pub struct ProjectService {
    repo: Repository<Project>,
}

impl ProjectService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate, normalise, and store a new project
    ///
    /// Reports the first failing field; nothing is stored on failure.
    pub fn create_project(
        &mut self,
        name: &str,
        description: &str,
        start_date: &str,
    ) -> Result<Project> {
        let start_date = ProjectValidator::validate_create(name, description, start_date)?;

        let project = self
            .repo
            .create(NewProject {
                name: name.trim().to_string(),
                description: description.trim().to_string(),
                start_date,
            })
            .clone();

        info!(project_id = %project.id, name = %project.name, "Project created");
        Ok(project)
    }

    /// All projects in creation order
    pub fn get_all_projects(&self) -> &[Project] {
        self.repo.get_all()
    }

    pub fn get_project(&self, id: EntityId) -> Option<&Project> {
        self.repo.get_by_id(id)
    }

    pub fn project_exists(&self, id: EntityId) -> bool {
        self.repo.exists(id)
    }

    /// Direct access to the underlying repository
    pub fn repository(&self) -> &Repository<Project> {
        &self.repo
    }

    pub fn repository_mut(&mut self) -> &mut Repository<Project> {
        &mut self.repo
    }
}
