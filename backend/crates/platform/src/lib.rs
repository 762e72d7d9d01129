//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256 digests, random secrets)
//! - Password hashing (bcrypt, zeroized clear text)
//! - Cookie management

pub mod cookie;
pub mod crypto;
pub mod password;
