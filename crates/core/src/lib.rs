//! `eticket-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod config;
pub mod error;
pub mod id;

pub use config::AppConfig;
pub use error::{DomainError, DomainResult};
pub use id::UserId;
