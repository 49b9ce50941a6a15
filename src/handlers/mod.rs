//! HTTP handlers for the remedy service.

pub mod health;
pub mod remedy;
