//! TUI: App state, event loop, screens, widgets, background jobs.

pub mod action;
pub mod app;
pub mod error;
pub mod jobs;
pub mod screens;
pub mod widgets;

pub use app::{App, Screen};
pub use error::AppError;
pub use jobs::{Fetched, Job, JobRunner};
