// Service identity, baked in from Cargo.toml

pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// `name/version`, as logged at startup.
pub fn banner() -> String {
    format!("{}/{}", NAME, VERSION)
}
