//! Entity Module

pub mod refresh_token;
