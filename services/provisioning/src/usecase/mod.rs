pub mod access_key;
pub mod authorization;
pub mod role;
pub mod user;

#[cfg(test)]
pub(crate) mod mock;
