//! HTTP API: the action-group endpoint the planning agent calls.

pub mod app;
pub mod middleware;
