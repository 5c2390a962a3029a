// ABOUTME: Validated domain types for deployment status values.
// ABOUTME: Closed enumerations with string labels for serialization/display.

mod status;

pub use status::{DeploymentStatus, InvalidStatusLabel};
