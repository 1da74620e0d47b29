#![allow(async_fn_in_trait)]

use crate::domain::types::{
    AccessKey, AccessKeyAssignment, NewAccessKey, NewAccessKeyAssignment, NewRole,
    NewRoleAuthorization, NewUser, Role, RoleAuthorization, User,
};
use crate::error::ProvisioningError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ProvisioningError>;

    /// Every user carrying `employee_id`. Uniqueness is not enforced by the store.
    async fn find_by_employee_id(&self, employee_id: &str)
    -> Result<Vec<User>, ProvisioningError>;

    async fn create(&self, user: &NewUser) -> Result<User, ProvisioningError>;

    /// Overwrite every column of an existing user.
    async fn update(&self, user: &User) -> Result<User, ProvisioningError>;

    /// Delete a user. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, ProvisioningError>;
}

/// Repository for the role catalog.
pub trait RoleRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Role>, ProvisioningError>;
    async fn create(&self, role: &NewRole) -> Result<Role, ProvisioningError>;
}

/// Repository for the access key catalog.
pub trait AccessKeyRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<AccessKey>, ProvisioningError>;
    async fn list_by_ids(&self, ids: &[i32]) -> Result<Vec<AccessKey>, ProvisioningError>;
    async fn create(&self, key: &NewAccessKey) -> Result<AccessKey, ProvisioningError>;
    async fn update(&self, key: &AccessKey) -> Result<AccessKey, ProvisioningError>;
}

/// Repository for user↔role authorizations.
pub trait AuthorizationRepository: Send + Sync {
    async fn create(
        &self,
        authorization: &NewRoleAuthorization,
    ) -> Result<RoleAuthorization, ProvisioningError>;

    /// Authorizations of a user, oldest first.
    async fn list_by_user(&self, user_id: i32)
    -> Result<Vec<RoleAuthorization>, ProvisioningError>;

    /// Delete one authorization row. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, ProvisioningError>;
}

/// Repository for user↔access-key assignments.
pub trait AccessKeyAssignmentRepository: Send + Sync {
    async fn create(
        &self,
        assignment: &NewAccessKeyAssignment,
    ) -> Result<AccessKeyAssignment, ProvisioningError>;

    /// Assignments of a user, oldest first.
    async fn list_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<AccessKeyAssignment>, ProvisioningError>;

    /// Delete one assignment row. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, ProvisioningError>;
}
