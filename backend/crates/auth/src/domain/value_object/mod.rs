//! Value Object Module

pub mod claims;
pub mod identity;
