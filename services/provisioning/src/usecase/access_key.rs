use tracing::{debug, info};

use provisioning_core::patch::{self, PatchOperation};

use crate::domain::repository::{
    AccessKeyAssignmentRepository, AccessKeyRepository, UserRepository,
};
use crate::domain::types::{AccessKey, AccessKeyAssignment, NewAccessKey, NewAccessKeyAssignment};
use crate::error::ProvisioningError;

// ── GetAccessKey ─────────────────────────────────────────────────────────────

pub struct GetAccessKeyUseCase<K: AccessKeyRepository> {
    pub access_keys: K,
}

impl<K: AccessKeyRepository> GetAccessKeyUseCase<K> {
    pub async fn execute(&self, id: i32) -> Result<AccessKey, ProvisioningError> {
        self.access_keys
            .find_by_id(id)
            .await?
            .ok_or(ProvisioningError::AccessKeyNotFound)
    }
}

// ── CreateAccessKey ──────────────────────────────────────────────────────────

pub struct CreateAccessKeyUseCase<K: AccessKeyRepository> {
    pub access_keys: K,
}

impl<K: AccessKeyRepository> CreateAccessKeyUseCase<K> {
    pub async fn execute(&self, input: NewAccessKey) -> Result<AccessKey, ProvisioningError> {
        let key = self.access_keys.create(&input).await?;
        info!(access_key_id = key.id, display_name = %key.display_name, "access key created");
        Ok(key)
    }
}

// ── PatchAccessKey ───────────────────────────────────────────────────────────

pub struct PatchAccessKeyUseCase<K: AccessKeyRepository> {
    pub access_keys: K,
}

impl<K: AccessKeyRepository> PatchAccessKeyUseCase<K> {
    pub async fn execute(
        &self,
        id: i32,
        operations: &[PatchOperation],
    ) -> Result<AccessKey, ProvisioningError> {
        let key = self
            .access_keys
            .find_by_id(id)
            .await?
            .ok_or(ProvisioningError::AccessKeyNotFound)?;
        let patched = patch::apply(&key, operations)?;
        let saved = self.access_keys.update(&patched).await?;
        info!(access_key_id = id, operations = operations.len(), "access key patched");
        Ok(saved)
    }
}

// ── ListAssignedAccessKeys ───────────────────────────────────────────────────

pub struct ListAssignedAccessKeysUseCase<
    U: UserRepository,
    S: AccessKeyAssignmentRepository,
    K: AccessKeyRepository,
> {
    pub users: U,
    pub assignments: S,
    pub access_keys: K,
}

impl<U, S, K> ListAssignedAccessKeysUseCase<U, S, K>
where
    U: UserRepository,
    S: AccessKeyAssignmentRepository,
    K: AccessKeyRepository,
{
    /// Access keys currently assigned to the user, each listed once.
    pub async fn execute(&self, user_id: i32) -> Result<Vec<AccessKey>, ProvisioningError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(ProvisioningError::UserNotFound)?;
        let assignments = self.assignments.list_by_user(user.id).await?;
        let key_ids: Vec<i32> = assignments.iter().map(|a| a.access_key_id).collect();
        self.access_keys.list_by_ids(&key_ids).await
    }
}

// ── AssignAccessKey ──────────────────────────────────────────────────────────

pub struct AssignAccessKeyUseCase<S: AccessKeyAssignmentRepository> {
    pub assignments: S,
}

impl<S: AccessKeyAssignmentRepository> AssignAccessKeyUseCase<S> {
    /// Same contract as granting an authorization: stored as given, duplicates allowed.
    pub async fn execute(
        &self,
        input: NewAccessKeyAssignment,
    ) -> Result<AccessKeyAssignment, ProvisioningError> {
        let assignment = self.assignments.create(&input).await?;
        info!(
            user_id = assignment.user_id,
            access_key_id = assignment.access_key_id,
            "access key assigned"
        );
        Ok(assignment)
    }
}

// ── RevokeAccessKey ──────────────────────────────────────────────────────────

pub struct RevokeAccessKeyUseCase<U: UserRepository, S: AccessKeyAssignmentRepository> {
    pub users: U,
    pub assignments: S,
}

impl<U: UserRepository, S: AccessKeyAssignmentRepository> RevokeAccessKeyUseCase<U, S> {
    /// Revoking a key the user does not hold succeeds without touching the store.
    pub async fn execute(&self, user_id: i32, access_key_id: i32) -> Result<(), ProvisioningError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(ProvisioningError::UserNotFound)?;

        let assigned = self.assignments.list_by_user(user.id).await?;
        let Some(assignment) = assigned
            .into_iter()
            .find(|a| a.access_key_id == access_key_id)
        else {
            debug!(user_id, access_key_id, "no access key assignment to revoke");
            return Ok(());
        };

        self.assignments.delete(assignment.id).await?;
        info!(user_id, access_key_id, "access key revoked");
        Ok(())
    }
}
