//! User service
//!
//! Owns the user repository. Every new user must reference a project known
//! to the [`ProjectService`].

use tracing::{info, warn};

use super::entity::{NewUser, User};
use crate::application::validators::UserValidator;
use crate::domain::projects::ProjectService;
use crate::domain::{EntityId, Repository};
use crate::error::{Error, Result};

/// Creates and looks up users
#[derive(Debug, Default)]
pub struct UserService {
    repo: Repository<User>,
}

impl UserService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store a new user assigned to `project_id`
    ///
    /// Username and email are trimmed before the field checks run, then the
    /// project reference is resolved against `projects`.
    pub fn create_user(
        &mut self,
        projects: &ProjectService,
        username: &str,
        email: &str,
        project_id: EntityId,
    ) -> Result<User> {
        let username = username.trim();
        let email = email.trim();
        UserValidator::validate_create(username, email, project_id)?;

        if !projects.project_exists(project_id) {
            warn!(project_id = %project_id, "Rejected user for unknown project");
            return Err(Error::ProjectNotFound(project_id));
        }

        let user = self
            .repo
            .create(NewUser {
                username: username.to_string(),
                email: email.to_string(),
                project_id,
            })
            .clone();

        info!(user_id = %user.id, project_id = %project_id, "User created");
        Ok(user)
    }

    /// All users in creation order
    pub fn get_all_users(&self) -> &[User] {
        self.repo.get_all()
    }

    pub fn get_user(&self, id: EntityId) -> Option<&User> {
        self.repo.get_by_id(id)
    }

    /// Users assigned to the given project, in creation order
    pub fn users_in_project(&self, project_id: EntityId) -> impl Iterator<Item = &User> + '_ {
        self.repo
            .get_all()
            .iter()
            .filter(move |user| user.project_id == project_id)
    }

    pub fn repository(&self) -> &Repository<User> {
        &self.repo
    }

    pub fn repository_mut(&mut self) -> &mut Repository<User> {
        &mut self.repo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn projects_with_one() -> (ProjectService, EntityId) {
        let mut projects = ProjectService::new();
        let id = projects
            .create_project("Website Revamp", "Redesign the marketing site", "2024-01-15")
            .unwrap()
            .id;
        (projects, id)
    }

    #[test]
    fn test_create_user() {
        let (projects, project_id) = projects_with_one();
        let mut users = UserService::new();

        let user = users
            .create_user(&projects, " alice ", " alice@example.com", project_id)
            .unwrap();

        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.project_id, project_id);
        assert_eq!(users.get_user(user.id), Some(&user));
    }

    #[test]
    fn test_unknown_project_is_reference_error() {
        let (projects, _) = projects_with_one();
        let mut users = UserService::new();

        let err = users
            .create_user(&projects, "alice", "alice@example.com", EntityId::new(999_999))
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Reference);
        assert_eq!(err, Error::ProjectNotFound(EntityId::new(999_999)));
        assert!(err.to_string().contains("does not exist"));
        assert!(users.get_all_users().is_empty());
    }

    #[test]
    fn test_short_username_is_validation_error() {
        let (projects, project_id) = projects_with_one();
        let mut users = UserService::new();

        let err = users
            .create_user(&projects, "ab", "a@b.com", project_id)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_bad_email_is_validation_error() {
        let (projects, project_id) = projects_with_one();
        let mut users = UserService::new();

        let err = users
            .create_user(&projects, "validname", "not-an-email", project_id)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.to_string(), "Invalid email format");
    }

    #[test]
    fn test_unset_project_id() {
        let (projects, _) = projects_with_one();
        let mut users = UserService::new();

        let err = users
            .create_user(&projects, "alice", "alice@example.com", EntityId::UNSET)
            .unwrap_err();
        assert_eq!(err.to_string(), "Project ID required for user");
    }

    #[test]
    fn test_users_in_project() {
        let mut projects = ProjectService::new();
        let a = projects.create_project("Alpha", "Alpha project", "2024-01-01").unwrap().id;
        let b = projects.create_project("Beta", "Beta project", "2024-01-01").unwrap().id;

        let mut users = UserService::new();
        users.create_user(&projects, "ann", "ann@example.com", a).unwrap();
        users.create_user(&projects, "bob", "bob@example.com", b).unwrap();
        users.create_user(&projects, "cat", "cat@example.com", a).unwrap();

        let names: Vec<&str> = users
            .users_in_project(a)
            .map(|u| u.username.as_str())
            .collect();
        assert_eq!(names, vec!["ann", "cat"]);
        assert_eq!(users.users_in_project(EntityId::new(77)).count(), 0);
    }
}
