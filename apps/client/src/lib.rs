//! StudySync client library.
//!
//! Talks to the StudySync backend REST API and drives the client-side
//! review flow. All business logic (AI note processing, spaced
//! repetition scheduling, calendar sync) is server-side; this crate
//! holds read-only snapshots and forwards user decisions.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use controller::{GradeReport, ReviewController, StudyBackend};
pub use error::ClientError;
