//! Application Configuration
//!
//! Configuration for the User application layer.

use platform::password::DEFAULT_BCRYPT_COST;

/// User application configuration
#[derive(Debug, Clone)]
pub struct UserConfig {
    /// bcrypt work factor for new password hashes
    pub password_cost: u32,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            password_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl UserConfig {
    /// Cheapest cost bcrypt accepts. Tests only.
    pub fn fast_hashing() -> Self {
        Self { password_cost: 4 }
    }
}
