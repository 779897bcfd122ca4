//! Core domain types and pure helpers

pub mod artifacts;
pub mod ipv4;
pub mod types;

pub use artifacts::{list_artifacts, timestamped_name, ArtifactFilter, ArtifactKind};
pub use ipv4::is_ipv4_format;
pub use types::{Device, DeviceIndex, ExitReason};
