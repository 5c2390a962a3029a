// ABOUTME: Library root for deploy-status - deployment lifecycle status model.
// ABOUTME: The status enumeration lives under types.

pub mod types;

pub use types::{DeploymentStatus, InvalidStatusLabel};
