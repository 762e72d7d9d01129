//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use user::SafeUser;

// ============================================================================
// Register / Login
// ============================================================================

/// Register request
///
/// Fields are optional so that an incomplete body is answered with the
/// usual 400 instead of a JSON rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// `{ "user": ... }` body for register, login and profile
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub user: SafeUser,
}

// ============================================================================
// Refresh / Logout
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
