//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Turn falsy repository results into typed errors for callers.

pub mod todo_service;
