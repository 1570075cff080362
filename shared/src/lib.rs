//! Local IPC endpoint paths for dhub processes

pub mod endpoint;
pub mod paths;
pub mod platform;

pub use endpoint::{
    resolve_endpoint_path, resolve_endpoint_path_for, EndpointName, EndpointPath,
    DEFAULT_ENDPOINT_NAME,
};
pub use platform::{ParsePlatformError, Platform};
