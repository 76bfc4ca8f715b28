//! # Personal API Core
//!
//! Core business logic and domain layer for the Personal API backend.
//! This crate contains domain entities, business services, repository
//! interfaces, and error types. It performs no I/O of its own.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
