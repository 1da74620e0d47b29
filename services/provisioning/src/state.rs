use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbAccessKeyAssignmentRepository, DbAccessKeyRepository, DbAuthorizationRepository,
    DbRoleRepository, DbUserRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn role_repo(&self) -> DbRoleRepository {
        DbRoleRepository {
            db: self.db.clone(),
        }
    }

    pub fn access_key_repo(&self) -> DbAccessKeyRepository {
        DbAccessKeyRepository {
            db: self.db.clone(),
        }
    }

    pub fn authorization_repo(&self) -> DbAuthorizationRepository {
        DbAuthorizationRepository {
            db: self.db.clone(),
        }
    }

    pub fn assignment_repo(&self) -> DbAccessKeyAssignmentRepository {
        DbAccessKeyAssignmentRepository {
            db: self.db.clone(),
        }
    }
}
