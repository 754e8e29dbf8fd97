//! Shared types for the Q&A client: wire DTOs of the `/api/*` endpoints
//! and pure helpers used by both the UI and its tests.

pub mod shared;
pub mod usecases;
