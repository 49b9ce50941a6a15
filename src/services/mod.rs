//! Business services: prompt construction and completion providers.

pub mod prompt;
pub mod providers;
