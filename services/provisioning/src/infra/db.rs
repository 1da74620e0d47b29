use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder,
};

use provisioning_schema::{access_key, access_key_assignment, authorization, role, user};

use crate::domain::repository::{
    AccessKeyAssignmentRepository, AccessKeyRepository, AuthorizationRepository, RoleRepository,
    UserRepository,
};
use crate::domain::types::{
    AccessKey, AccessKeyAssignment, NewAccessKey, NewAccessKeyAssignment, NewRole,
    NewRoleAuthorization, NewUser, Role, RoleAuthorization, User,
};
use crate::error::ProvisioningError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ProvisioningError> {
        let model = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_employee_id(
        &self,
        employee_id: &str,
    ) -> Result<Vec<User>, ProvisioningError> {
        let models = user::Entity::find()
            .filter(user::Column::EmployeeId.eq(employee_id))
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .context("find users by employee id")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn create(&self, new_user: &NewUser) -> Result<User, ProvisioningError> {
        let model = user::ActiveModel {
            id: NotSet,
            employee_id: Set(new_user.employee_id.clone()),
            first_name: Set(new_user.first_name.clone()),
            last_name: Set(new_user.last_name.clone()),
            email: Set(new_user.email.clone()),
            active: Set(new_user.active),
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(user_from_model(model))
    }

    async fn update(&self, existing: &User) -> Result<User, ProvisioningError> {
        let model = user::ActiveModel {
            id: Set(existing.id),
            employee_id: Set(existing.employee_id.clone()),
            first_name: Set(existing.first_name.clone()),
            last_name: Set(existing.last_name.clone()),
            email: Set(existing.email.clone()),
            active: Set(existing.active),
        }
        .update(&self.db)
        .await
        .context("update user")?;
        Ok(user_from_model(model))
    }

    async fn delete(&self, id: i32) -> Result<bool, ProvisioningError> {
        let result = user::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete user")?;
        Ok(result.rows_affected > 0)
    }
}

fn user_from_model(model: user::Model) -> User {
    User {
        id: model.id,
        employee_id: model.employee_id,
        first_name: model.first_name,
        last_name: model.last_name,
        email: model.email,
        active: model.active,
    }
}

// ── Role repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRoleRepository {
    pub db: DatabaseConnection,
}

impl RoleRepository for DbRoleRepository {
    async fn list_all(&self) -> Result<Vec<Role>, ProvisioningError> {
        let models = role::Entity::find()
            .order_by_asc(role::Column::Id)
            .all(&self.db)
            .await
            .context("list roles")?;
        Ok(models.into_iter().map(role_from_model).collect())
    }

    async fn create(&self, new_role: &NewRole) -> Result<Role, ProvisioningError> {
        let model = role::ActiveModel {
            id: NotSet,
            display_name: Set(new_role.display_name.clone()),
        }
        .insert(&self.db)
        .await
        .context("create role")?;
        Ok(role_from_model(model))
    }
}

fn role_from_model(model: role::Model) -> Role {
    Role {
        id: model.id,
        display_name: model.display_name,
    }
}

// ── Access key repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAccessKeyRepository {
    pub db: DatabaseConnection,
}

impl AccessKeyRepository for DbAccessKeyRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<AccessKey>, ProvisioningError> {
        let model = access_key::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find access key by id")?;
        Ok(model.map(access_key_from_model))
    }

    async fn list_by_ids(&self, ids: &[i32]) -> Result<Vec<AccessKey>, ProvisioningError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let models = access_key::Entity::find()
            .filter(access_key::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(access_key::Column::Id)
            .all(&self.db)
            .await
            .context("list access keys by ids")?;
        Ok(models.into_iter().map(access_key_from_model).collect())
    }

    async fn create(&self, new_key: &NewAccessKey) -> Result<AccessKey, ProvisioningError> {
        let model = access_key::ActiveModel {
            id: NotSet,
            display_name: Set(new_key.display_name.clone()),
            r#type: Set(new_key.kind.clone()),
            is_active: Set(new_key.is_active),
        }
        .insert(&self.db)
        .await
        .context("create access key")?;
        Ok(access_key_from_model(model))
    }

    async fn update(&self, key: &AccessKey) -> Result<AccessKey, ProvisioningError> {
        let model = access_key::ActiveModel {
            id: Set(key.id),
            display_name: Set(key.display_name.clone()),
            r#type: Set(key.kind.clone()),
            is_active: Set(key.is_active),
        }
        .update(&self.db)
        .await
        .context("update access key")?;
        Ok(access_key_from_model(model))
    }
}

fn access_key_from_model(model: access_key::Model) -> AccessKey {
    AccessKey {
        id: model.id,
        display_name: model.display_name,
        kind: model.r#type,
        is_active: model.is_active,
    }
}

// ── Authorization repository ─────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAuthorizationRepository {
    pub db: DatabaseConnection,
}

impl AuthorizationRepository for DbAuthorizationRepository {
    async fn create(
        &self,
        grant: &NewRoleAuthorization,
    ) -> Result<RoleAuthorization, ProvisioningError> {
        let model = authorization::ActiveModel {
            id: NotSet,
            role_id: Set(grant.role_id),
            user_id: Set(grant.user_id),
        }
        .insert(&self.db)
        .await
        .context("create authorization")?;
        Ok(authorization_from_model(model))
    }

    async fn list_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<RoleAuthorization>, ProvisioningError> {
        let models = authorization::Entity::find()
            .filter(authorization::Column::UserId.eq(user_id))
            .order_by_asc(authorization::Column::Id)
            .all(&self.db)
            .await
            .context("list authorizations by user")?;
        Ok(models.into_iter().map(authorization_from_model).collect())
    }

    async fn delete(&self, id: i32) -> Result<bool, ProvisioningError> {
        let result = authorization::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete authorization")?;
        Ok(result.rows_affected > 0)
    }
}

fn authorization_from_model(model: authorization::Model) -> RoleAuthorization {
    RoleAuthorization {
        id: model.id,
        role_id: model.role_id,
        user_id: model.user_id,
    }
}

// ── Access key assignment repository ─────────────────────────────────────────

#[derive(Clone)]
pub struct DbAccessKeyAssignmentRepository {
    pub db: DatabaseConnection,
}

impl AccessKeyAssignmentRepository for DbAccessKeyAssignmentRepository {
    async fn create(
        &self,
        assignment: &NewAccessKeyAssignment,
    ) -> Result<AccessKeyAssignment, ProvisioningError> {
        let model = access_key_assignment::ActiveModel {
            id: NotSet,
            access_key_id: Set(assignment.access_key_id),
            user_id: Set(assignment.user_id),
        }
        .insert(&self.db)
        .await
        .context("create access key assignment")?;
        Ok(assignment_from_model(model))
    }

    async fn list_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<AccessKeyAssignment>, ProvisioningError> {
        let models = access_key_assignment::Entity::find()
            .filter(access_key_assignment::Column::UserId.eq(user_id))
            .order_by_asc(access_key_assignment::Column::Id)
            .all(&self.db)
            .await
            .context("list access key assignments by user")?;
        Ok(models.into_iter().map(assignment_from_model).collect())
    }

    async fn delete(&self, id: i32) -> Result<bool, ProvisioningError> {
        let result = access_key_assignment::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete access key assignment")?;
        Ok(result.rows_affected > 0)
    }
}

fn assignment_from_model(model: access_key_assignment::Model) -> AccessKeyAssignment {
    AccessKeyAssignment {
        id: model.id,
        access_key_id: model.access_key_id,
        user_id: model.user_id,
    }
}
