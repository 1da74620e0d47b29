//! In-memory repositories for use-case tests.

use std::sync::{Arc, Mutex};

use crate::domain::repository::{
    AccessKeyAssignmentRepository, AccessKeyRepository, AuthorizationRepository, RoleRepository,
    UserRepository,
};
use crate::domain::types::{
    AccessKey, AccessKeyAssignment, NewAccessKey, NewAccessKeyAssignment, NewRole,
    NewRoleAuthorization, NewUser, Role, RoleAuthorization, User,
};
use crate::error::ProvisioningError;

/// Rows shared by every clone of one [`MemoryStore`]. Generated ids start
/// above the ones fixtures use.
#[derive(Default)]
struct Tables {
    next_id: i32,
    users: Vec<User>,
    roles: Vec<Role>,
    access_keys: Vec<AccessKey>,
    authorizations: Vec<RoleAuthorization>,
    assignments: Vec<AccessKeyAssignment>,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        1000 + self.next_id
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, user: User) -> Self {
        self.tables.lock().unwrap().users.push(user);
        self
    }

    pub fn with_access_key(self, key: AccessKey) -> Self {
        self.tables.lock().unwrap().access_keys.push(key);
        self
    }

    pub fn with_authorization(self, id: i32, user_id: i32, role_id: i32) -> Self {
        self.tables
            .lock()
            .unwrap()
            .authorizations
            .push(RoleAuthorization {
                id,
                role_id,
                user_id,
            });
        self
    }

    pub fn with_assignment(self, id: i32, user_id: i32, access_key_id: i32) -> Self {
        self.tables
            .lock()
            .unwrap()
            .assignments
            .push(AccessKeyAssignment {
                id,
                access_key_id,
                user_id,
            });
        self
    }

    pub fn users(&self) -> Vec<User> {
        self.tables.lock().unwrap().users.clone()
    }

    pub fn authorizations(&self) -> Vec<RoleAuthorization> {
        self.tables.lock().unwrap().authorizations.clone()
    }

    pub fn assignments(&self) -> Vec<AccessKeyAssignment> {
        self.tables.lock().unwrap().assignments.clone()
    }
}

impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ProvisioningError> {
        Ok(self.users().into_iter().find(|u| u.id == id))
    }

    async fn find_by_employee_id(
        &self,
        employee_id: &str,
    ) -> Result<Vec<User>, ProvisioningError> {
        Ok(self
            .users()
            .into_iter()
            .filter(|u| u.employee_id == employee_id)
            .collect())
    }

    async fn create(&self, new_user: &NewUser) -> Result<User, ProvisioningError> {
        let mut tables = self.tables.lock().unwrap();
        let user = User {
            id: tables.next_id(),
            employee_id: new_user.employee_id.clone(),
            first_name: new_user.first_name.clone(),
            last_name: new_user.last_name.clone(),
            email: new_user.email.clone(),
            active: new_user.active,
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<User, ProvisioningError> {
        let mut tables = self.tables.lock().unwrap();
        let row = tables
            .users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| anyhow::anyhow!("record not updated"))?;
        *row = user.clone();
        Ok(user.clone())
    }

    async fn delete(&self, id: i32) -> Result<bool, ProvisioningError> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.users.len();
        tables.users.retain(|u| u.id != id);
        Ok(tables.users.len() < before)
    }
}

impl RoleRepository for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Role>, ProvisioningError> {
        Ok(self.tables.lock().unwrap().roles.clone())
    }

    async fn create(&self, new_role: &NewRole) -> Result<Role, ProvisioningError> {
        let mut tables = self.tables.lock().unwrap();
        let role = Role {
            id: tables.next_id(),
            display_name: new_role.display_name.clone(),
        };
        tables.roles.push(role.clone());
        Ok(role)
    }
}

impl AccessKeyRepository for MemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<AccessKey>, ProvisioningError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.access_keys.iter().find(|k| k.id == id).cloned())
    }

    async fn list_by_ids(&self, ids: &[i32]) -> Result<Vec<AccessKey>, ProvisioningError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .access_keys
            .iter()
            .filter(|k| ids.contains(&k.id))
            .cloned()
            .collect())
    }

    async fn create(&self, new_key: &NewAccessKey) -> Result<AccessKey, ProvisioningError> {
        let mut tables = self.tables.lock().unwrap();
        let key = AccessKey {
            id: tables.next_id(),
            display_name: new_key.display_name.clone(),
            kind: new_key.kind.clone(),
            is_active: new_key.is_active,
        };
        tables.access_keys.push(key.clone());
        Ok(key)
    }

    async fn update(&self, key: &AccessKey) -> Result<AccessKey, ProvisioningError> {
        let mut tables = self.tables.lock().unwrap();
        let row = tables
            .access_keys
            .iter_mut()
            .find(|k| k.id == key.id)
            .ok_or_else(|| anyhow::anyhow!("record not updated"))?;
        *row = key.clone();
        Ok(key.clone())
    }
}

impl AuthorizationRepository for MemoryStore {
    async fn create(
        &self,
        grant: &NewRoleAuthorization,
    ) -> Result<RoleAuthorization, ProvisioningError> {
        let mut tables = self.tables.lock().unwrap();
        let authorization = RoleAuthorization {
            id: tables.next_id(),
            role_id: grant.role_id,
            user_id: grant.user_id,
        };
        tables.authorizations.push(authorization.clone());
        Ok(authorization)
    }

    async fn list_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<RoleAuthorization>, ProvisioningError> {
        Ok(self
            .authorizations()
            .into_iter()
            .filter(|a| a.user_id == user_id)
            .collect())
    }

    async fn delete(&self, id: i32) -> Result<bool, ProvisioningError> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.authorizations.len();
        tables.authorizations.retain(|a| a.id != id);
        Ok(tables.authorizations.len() < before)
    }
}

impl AccessKeyAssignmentRepository for MemoryStore {
    async fn create(
        &self,
        assignment: &NewAccessKeyAssignment,
    ) -> Result<AccessKeyAssignment, ProvisioningError> {
        let mut tables = self.tables.lock().unwrap();
        let row = AccessKeyAssignment {
            id: tables.next_id(),
            access_key_id: assignment.access_key_id,
            user_id: assignment.user_id,
        };
        tables.assignments.push(row.clone());
        Ok(row)
    }

    async fn list_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<AccessKeyAssignment>, ProvisioningError> {
        Ok(self
            .assignments()
            .into_iter()
            .filter(|a| a.user_id == user_id)
            .collect())
    }

    async fn delete(&self, id: i32) -> Result<bool, ProvisioningError> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.assignments.len();
        tables.assignments.retain(|a| a.id != id);
        Ok(tables.assignments.len() < before)
    }
}

pub fn test_user(id: i32) -> User {
    User {
        id,
        employee_id: format!("{}", 1_000_000 + id),
        first_name: "John".to_owned(),
        last_name: "Doe".to_owned(),
        email: "JDoe@enyoi".to_owned(),
        active: false,
    }
}

pub fn test_access_key(id: i32) -> AccessKey {
    AccessKey {
        id,
        display_name: format!("Card{id:03}"),
        kind: Some("Employee".to_owned()),
        is_active: Some(true),
    }
}
