//! Testing infrastructure for cyberpet integration tests.
//!
//! - `TestWorld`: an isolated directory with course images, a save path and
//!   stages that record instead of printing
//! - `assertions`: checks over recorded fragments and lines
//! - `fixtures`: sample records, logs and image bytes

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{RecordedStage, TestWorld};
