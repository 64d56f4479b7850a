//! Trip-planner service client: sign-in state and trip submission.

mod client;
mod error;

pub use client::{AuthStatus, PlannerClient};
pub use error::ApiError;
