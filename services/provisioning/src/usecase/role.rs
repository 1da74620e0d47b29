use tracing::info;

use crate::domain::repository::RoleRepository;
use crate::domain::types::{NewRole, Role};
use crate::error::ProvisioningError;

// ── ListRoles ────────────────────────────────────────────────────────────────

pub struct ListRolesUseCase<R: RoleRepository> {
    pub repo: R,
}

impl<R: RoleRepository> ListRolesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Role>, ProvisioningError> {
        self.repo.list_all().await
    }
}

// ── CreateRole ───────────────────────────────────────────────────────────────

pub struct CreateRoleUseCase<R: RoleRepository> {
    pub repo: R,
}

impl<R: RoleRepository> CreateRoleUseCase<R> {
    pub async fn execute(&self, input: NewRole) -> Result<Role, ProvisioningError> {
        let role = self.repo.create(&input).await?;
        info!(role_id = role.id, display_name = %role.display_name, "role created");
        Ok(role)
    }
}
