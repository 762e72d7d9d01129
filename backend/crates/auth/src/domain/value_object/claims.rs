//! JWT Claims
//!
//! Wire shape of the two token types. Both are HS256-signed with
//! separate secrets; `iat`/`exp` are Unix seconds.

use kernel::id::UserId;
use serde::{Deserialize, Serialize};
use user::UserRole;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessClaims {
    pub user_id: UserId,
    pub email: String,
    pub role: UserRole,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshClaims {
    pub user_id: UserId,
    /// Random per token so that two tokens minted in the same second
    /// never share a storage hash
    pub jti: Uuid,
    pub iat: i64,
    pub exp: i64,
}
