//! Profile management for the signed-in user

use std::sync::Arc;
use tracing::{info, warn};

use weatherapp_security::PasswordService;
use weatherapp_shared::UserId;

use crate::domain::UserProfile;
use crate::error::DomainError;
use crate::repositories::UserRepository;

pub struct ProfileService {
    user_repo: Arc<dyn UserRepository>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProfileCommand {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
}

impl ProfileService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn get_profile(&self, user_id: UserId) -> Result<UserProfile, DomainError> {
        let user = self.user_repo.find_by_id(user_id).await?
            .ok_or(DomainError::UserNotFound)?;
        Ok(UserProfile::from(&user))
    }

    pub async fn update_profile(
        &self,
        user_id: UserId,
        cmd: UpdateProfileCommand,
    ) -> Result<UserProfile, DomainError> {
        let mut user = self.user_repo.find_by_id(user_id).await?
            .ok_or(DomainError::UserNotFound)?;

        user.update_profile(cmd.first_name, cmd.last_name, cmd.avatar);
        let updated = self.user_repo.update(&user).await?;

        info!("Profile updated for user {}", user_id);
        Ok(UserProfile::from(&updated))
    }

    /// `InvalidCredentials` when `current_password` does not match.
    pub async fn change_password(
        &self,
        user_id: UserId,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), DomainError> {
        let mut user = self.user_repo.find_by_id(user_id).await?
            .ok_or(DomainError::UserNotFound)?;

        if !PasswordService::verify(current_password, &user.password_hash)? {
            warn!("Password change rejected for user {}: wrong current password", user_id);
            return Err(DomainError::InvalidCredentials);
        }

        PasswordService::check_policy(new_password)?;
        user.set_password_hash(PasswordService::hash(new_password)?);
        self.user_repo.update(&user).await?;

        info!("Password changed for user {}", user_id);
        Ok(())
    }

    /// Soft delete
    pub async fn delete_profile(&self, user_id: UserId) -> Result<(), DomainError> {
        if !self.user_repo.delete(user_id).await? {
            return Err(DomainError::UserNotFound);
        }
        info!("User {} deactivated", user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewUser, User};
    use crate::repositories::MockUserRepository;

    fn stored_alice(password: &str) -> User {
        NewUser::new(
            "alice",
            "alice@example.com",
            PasswordService::hash(password).unwrap(),
            None,
            None,
        )
        .unwrap()
        .into_user(1)
    }

    #[tokio::test]
    async fn test_get_missing_profile() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));

        let svc = ProfileService::new(Arc::new(users));
        assert!(matches!(svc.get_profile(1).await, Err(DomainError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_update_profile() {
        let alice = stored_alice("Secr3t!");
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(move |_| Ok(Some(alice.clone())));
        users
            .expect_update()
            .withf(|user: &User| user.first_name.as_deref() == Some("Alice"))
            .times(1)
            .returning(|user: &User| Ok(user.clone()));

        let svc = ProfileService::new(Arc::new(users));
        let profile = svc
            .update_profile(
                1,
                UpdateProfileCommand {
                    first_name: Some("Alice".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(profile.first_name.as_deref(), Some("Alice"));
    }

    #[tokio::test]
    async fn test_change_password_wrong_current() {
        let alice = stored_alice("Secr3t!");
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(move |_| Ok(Some(alice.clone())));
        users.expect_update().never();

        let svc = ProfileService::new(Arc::new(users));
        let err = svc.change_password(1, "nope", "N3wPassword").await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_change_password_rehashes() {
        let alice = stored_alice("Secr3t!");
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(move |_| Ok(Some(alice.clone())));
        users
            .expect_update()
            .withf(|user: &User| PasswordService::verify("N3wPassword", &user.password_hash).unwrap())
            .times(1)
            .returning(|user: &User| Ok(user.clone()));

        let svc = ProfileService::new(Arc::new(users));
        svc.change_password(1, "Secr3t!", "N3wPassword").await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_missing_profile() {
        let mut users = MockUserRepository::new();
        users.expect_delete().returning(|_| Ok(false));

        let svc = ProfileService::new(Arc::new(users));
        assert!(matches!(svc.delete_profile(3).await, Err(DomainError::UserNotFound)));
    }
}
