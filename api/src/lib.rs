//! HTTP API layer for the Personal API backend
//!
//! Exposes the login endpoint under `/jwt` and the user-management glue
//! under `/users`, mapping domain errors onto the wire contract.

pub mod dto;
pub mod handlers;
pub mod routes;
