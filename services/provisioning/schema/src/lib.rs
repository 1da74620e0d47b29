//! sea-orm entities for the provisioning store.
//!
//! Table and column names are PascalCase (`User.EmployeeId`,
//! `AccessKeyAssignment.AccessKeyId`, ...) so existing database files open as-is.

pub mod access_key;
pub mod access_key_assignment;
pub mod authorization;
pub mod role;
pub mod user;
