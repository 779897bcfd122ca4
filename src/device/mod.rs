//! Device access: the address registry and the remote command surface

pub mod action;
pub mod executor;
pub mod registry;

pub use action::{Method, RemoteAction, RequestBody};
pub use executor::{CommandExecutor, CommandOutput, HttpExecutor, RemoteError, RemoteResult};
pub use registry::DeviceRegistry;
