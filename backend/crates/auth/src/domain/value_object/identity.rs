//! Verified token identities
//!
//! What a successfully verified token tells the rest of the service.

use kernel::id::UserId;
use user::UserRole;

use crate::domain::value_object::claims::{AccessClaims, RefreshClaims};

/// Authenticated caller, placed in request extensions by
/// `require_access_token`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessIdentity {
    pub user_id: UserId,
    pub email: String,
    pub role: UserRole,
}

impl From<AccessClaims> for AccessIdentity {
    fn from(claims: AccessClaims) -> Self {
        Self {
            user_id: claims.user_id,
            email: claims.email,
            role: claims.role,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshIdentity {
    pub user_id: UserId,
}

impl From<RefreshClaims> for RefreshIdentity {
    fn from(claims: RefreshClaims) -> Self {
        Self {
            user_id: claims.user_id,
        }
    }
}
