use anyhow::anyhow;
use tracing::info;

use provisioning_core::patch::{self, PatchOperation};

use crate::domain::repository::UserRepository;
use crate::domain::types::{NewUser, User};
use crate::error::ProvisioningError;

// ── GetUserByEmployeeId ──────────────────────────────────────────────────────

pub struct GetUserByEmployeeIdUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserByEmployeeIdUseCase<R> {
    /// The internal id is unknown to the HR source before the first create,
    /// so existence is checked by employee id instead.
    pub async fn execute(&self, employee_id: &str) -> Result<User, ProvisioningError> {
        let mut users = self.repo.find_by_employee_id(employee_id).await?;
        match users.len() {
            0 => Err(ProvisioningError::UserNotFound),
            1 => Ok(users.remove(0)),
            n => Err(ProvisioningError::Internal(anyhow!(
                "{n} users share employee id {employee_id}"
            ))),
        }
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, user_id: i32) -> Result<User, ProvisioningError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(ProvisioningError::UserNotFound)
    }
}

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    pub async fn execute(&self, input: NewUser) -> Result<User, ProvisioningError> {
        let user = self.repo.create(&input).await?;
        info!(user_id = user.id, employee_id = %user.employee_id, "user created");
        Ok(user)
    }
}

// ── PatchUser ────────────────────────────────────────────────────────────────

pub struct PatchUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> PatchUserUseCase<R> {
    pub async fn execute(
        &self,
        user_id: i32,
        operations: &[PatchOperation],
    ) -> Result<User, ProvisioningError> {
        let user = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or(ProvisioningError::UserNotFound)?;
        let patched = patch::apply(&user, operations)?;
        let saved = self.repo.update(&patched).await?;
        info!(user_id, operations = operations.len(), "user patched");
        Ok(saved)
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> DeleteUserUseCase<R> {
    /// Authorizations and assignments of the user are left in place.
    pub async fn execute(&self, user_id: i32) -> Result<(), ProvisioningError> {
        if !self.repo.delete(user_id).await? {
            return Err(ProvisioningError::UserNotFound);
        }
        info!(user_id, "user deleted");
        Ok(())
    }
}
