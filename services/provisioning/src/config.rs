use std::path::PathBuf;

/// Provisioning service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ProvisioningConfig {
    /// SQLite connection URL. Env var: `DATABASE_URL`.
    /// Defaults to `access_control.db` beside the executable, created on first start.
    pub database_url: String,
    /// TCP port for the HTTP server (default 5000). Env var: `PROVISIONING_PORT`.
    pub port: u16,
    /// Apply pending migrations before serving (default true). Env var: `RUN_MIGRATIONS`.
    pub run_migrations: bool,
}

const DATABASE_FILE: &str = "access_control.db";

/// `sqlite://` URL for the database file in the executable's directory, or in
/// the working directory when the executable path is unavailable.
fn default_database_url() -> String {
    let path = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DATABASE_FILE)))
        .unwrap_or_else(|| PathBuf::from(DATABASE_FILE));
    format!("sqlite://{}?mode=rwc", path.display())
}

impl ProvisioningConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(default_database_url),
            port: lookup("PROVISIONING_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            run_migrations: lookup("RUN_MIGRATIONS")
                .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no"))
                .unwrap_or(true),
        }
    }
}
