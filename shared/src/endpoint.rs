//! Local IPC endpoint naming
//!
//! Maps a logical endpoint name to the address a dhub server binds and a
//! client connects to:
//! - Unix: `/tmp/{name}.sock`
//! - Windows: `\\.\pipe\{name}`
//!
//! Names are used verbatim. Nothing here touches the filesystem.

use interprocess::local_socket::{GenericFilePath, Name, ToFsName};
use std::fmt;
use std::io;
use std::path::Path;

use crate::platform::Platform;

/// Name used when the caller gives none (or an empty one).
pub const DEFAULT_ENDPOINT_NAME: &str = "dhub";

const UNIX_SOCKET_DIR: &str = "/tmp/";
const UNIX_SOCKET_SUFFIX: &str = ".sock";
const WINDOWS_PIPE_PREFIX: &str = r"\\.\pipe\";

/// Logical endpoint name, already normalized to the default when absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndpointName(String);

impl EndpointName {
    pub fn new(name: Option<&str>) -> Self {
        match name {
            Some(name) if !name.is_empty() => Self(name.to_string()),
            _ => Self::default(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// False when the name could escape its directory or truncate the path:
    /// it holds a `/`, a `\` or a NUL byte. The resolver ignores this.
    pub fn is_path_safe(&self) -> bool {
        !self.0.contains(['/', '\\', '\0'])
    }
}

impl Default for EndpointName {
    fn default() -> Self {
        Self(DEFAULT_ENDPOINT_NAME.to_string())
    }
}

impl From<Option<&str>> for EndpointName {
    fn from(name: Option<&str>) -> Self {
        Self::new(name)
    }
}

impl From<&str> for EndpointName {
    fn from(name: &str) -> Self {
        Self::new(Some(name))
    }
}

impl fmt::Display for EndpointName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolved endpoint address: a socket file path or a named-pipe path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndpointPath(String);

impl EndpointPath {
    /// Build the address for `name` under `platform`'s addressing scheme.
    pub fn new(platform: Platform, name: &EndpointName) -> Self {
        let path = match platform {
            Platform::Unix => format!("{UNIX_SOCKET_DIR}{name}{UNIX_SOCKET_SUFFIX}"),
            Platform::Windows => format!("{WINDOWS_PIPE_PREFIX}{name}"),
        };
        Self(path)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Convert to an `interprocess` socket name usable with
    /// `ListenerOptions::name` or `Stream::connect`.
    ///
    /// Fails if the path contains a NUL byte. A pipe path on Unix is accepted
    /// as a relative file name.
    pub fn to_local_socket_name(&self) -> io::Result<Name<'_>> {
        Path::new(&self.0).to_fs_name::<GenericFilePath>()
    }
}

impl fmt::Display for EndpointPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EndpointPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<EndpointPath> for String {
    fn from(path: EndpointPath) -> Self {
        path.0
    }
}

/// Resolve the endpoint path for `name` on an explicit platform.
pub fn resolve_endpoint_path_for(platform: Platform, name: Option<&str>) -> EndpointPath {
    EndpointPath::new(platform, &EndpointName::new(name))
}

/// Resolve the endpoint path for `name` on the host platform.
pub fn resolve_endpoint_path(name: Option<&str>) -> EndpointPath {
    resolve_endpoint_path_for(Platform::current(), name)
}
