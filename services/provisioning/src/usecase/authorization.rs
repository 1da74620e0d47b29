use tracing::{debug, info, warn};

use crate::domain::repository::{AuthorizationRepository, UserRepository};
use crate::domain::types::{NewRoleAuthorization, RoleAuthorization};
use crate::error::ProvisioningError;

// ── GrantAuthorization ───────────────────────────────────────────────────────

pub struct GrantAuthorizationUseCase<A: AuthorizationRepository> {
    pub authorizations: A,
}

impl<A: AuthorizationRepository> GrantAuthorizationUseCase<A> {
    /// Stores the grant as given. Neither the user nor the role is looked up
    /// and granting the same pair twice stores two rows.
    pub async fn execute(
        &self,
        input: NewRoleAuthorization,
    ) -> Result<RoleAuthorization, ProvisioningError> {
        let authorization = self.authorizations.create(&input).await?;
        info!(
            user_id = authorization.user_id,
            role_id = authorization.role_id,
            "authorization granted"
        );
        Ok(authorization)
    }
}

// ── RevokeAuthorization ──────────────────────────────────────────────────────

pub struct RevokeAuthorizationUseCase<U: UserRepository, A: AuthorizationRepository> {
    pub users: U,
    pub authorizations: A,
}

impl<U: UserRepository, A: AuthorizationRepository> RevokeAuthorizationUseCase<U, A> {
    /// Revoking a role the user never had succeeds without touching the store.
    pub async fn execute(&self, user_id: i32, role_id: i32) -> Result<(), ProvisioningError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(ProvisioningError::UserNotFound)?;

        let granted = self.authorizations.list_by_user(user.id).await?;
        let mut matching = granted.into_iter().filter(|a| a.role_id == role_id);
        let Some(authorization) = matching.next() else {
            debug!(user_id, role_id, "no authorization to revoke");
            return Ok(());
        };
        if matching.next().is_some() {
            warn!(user_id, role_id, "duplicate authorizations, revoking the oldest");
        }

        self.authorizations.delete(authorization.id).await?;
        info!(user_id, role_id, "authorization revoked");
        Ok(())
    }
}
