use serde::{Deserialize, Serialize};

use provisioning_core::patch::{Document, Field, FieldKind};

/// User account in the access-control system.
///
/// `employee_id` is the correlation key towards the HR source; `id` is the
/// store-assigned key every later request uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Accounts are usually created disabled and enabled when the contract starts.
    pub active: bool,
}

impl Document for User {
    const FIELDS: &'static [Field] = &[
        Field::read_only("id", FieldKind::Integer),
        Field::required("employeeId", FieldKind::String),
        Field::required("firstName", FieldKind::String),
        Field::required("lastName", FieldKind::String),
        Field::required("email", FieldKind::String),
        Field::required("active", FieldKind::Boolean),
    ];
}

/// Create payload for [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub active: bool,
}

impl Document for NewUser {
    const FIELDS: &'static [Field] = &[
        Field::required("employeeId", FieldKind::String),
        Field::required("firstName", FieldKind::String),
        Field::required("lastName", FieldKind::String),
        Field::required("email", FieldKind::String),
        Field::required("active", FieldKind::Boolean),
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: i32,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRole {
    pub display_name: String,
}

impl Document for NewRole {
    const FIELDS: &'static [Field] = &[Field::required("displayName", FieldKind::String)];
}

/// Credential such as `Card001` or `LicensePlate001`.
///
/// Permissions are not stored on the key: they follow from the roles of the
/// user the key is assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessKey {
    pub id: i32,
    pub display_name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub is_active: Option<bool>,
}

impl Document for AccessKey {
    const FIELDS: &'static [Field] = &[
        Field::read_only("id", FieldKind::Integer),
        Field::required("displayName", FieldKind::String),
        Field::optional("type", FieldKind::String),
        Field::optional("isActive", FieldKind::Boolean),
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccessKey {
    pub display_name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub is_active: Option<bool>,
}

impl Document for NewAccessKey {
    const FIELDS: &'static [Field] = &[
        Field::required("displayName", FieldKind::String),
        Field::optional("type", FieldKind::String),
        Field::optional("isActive", FieldKind::Boolean),
    ];
}

/// Role granted to a user. The row id never leaves the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAuthorization {
    #[serde(skip)]
    pub id: i32,
    pub role_id: i32,
    pub user_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoleAuthorization {
    pub role_id: i32,
    pub user_id: i32,
}

impl Document for NewRoleAuthorization {
    const FIELDS: &'static [Field] = &[
        Field::required("roleId", FieldKind::Integer),
        Field::required("userId", FieldKind::Integer),
    ];
}

/// Access key handed to a user. The row id never leaves the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessKeyAssignment {
    #[serde(skip)]
    pub id: i32,
    pub access_key_id: i32,
    pub user_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccessKeyAssignment {
    pub access_key_id: i32,
    pub user_id: i32,
}

impl Document for NewAccessKeyAssignment {
    const FIELDS: &'static [Field] = &[
        Field::required("accessKeyId", FieldKind::Integer),
        Field::required("userId", FieldKind::Integer),
    ];
}
