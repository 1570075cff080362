//! Host platform family used to pick the local endpoint addressing scheme

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Coarse OS classification: Windows, or everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Any non-Windows target. Endpoints are Unix domain socket files.
    Unix,
    /// Windows family. Endpoints live in the named-pipe namespace.
    Windows,
}

impl Platform {
    /// The platform this process was built for.
    pub const fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    pub const fn is_windows(self) -> bool {
        matches!(self, Platform::Windows)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Platform::Unix => "unix",
            Platform::Windows => "windows",
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown platform `{0}` (expected `unix` or `windows`)")]
pub struct ParsePlatformError(pub String);

impl FromStr for Platform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unix" | "linux" | "macos" | "darwin" | "posix" => Ok(Platform::Unix),
            "windows" | "win32" => Ok(Platform::Windows),
            _ => Err(ParsePlatformError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_matches_target() {
        assert_eq!(Platform::current().is_windows(), cfg!(windows));
        assert_eq!(Platform::default(), Platform::current());
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("unix".parse::<Platform>(), Ok(Platform::Unix));
        assert_eq!("Linux".parse::<Platform>(), Ok(Platform::Unix));
        assert_eq!("darwin".parse::<Platform>(), Ok(Platform::Unix));
        assert_eq!(" WINDOWS ".parse::<Platform>(), Ok(Platform::Windows));
        assert_eq!("win32".parse::<Platform>(), Ok(Platform::Windows));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "plan9".parse::<Platform>().unwrap_err();
        assert_eq!(err, ParsePlatformError("plan9".to_string()));
        assert!(err.to_string().contains("plan9"));
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for platform in [Platform::Unix, Platform::Windows] {
            assert_eq!(platform.to_string().parse::<Platform>(), Ok(platform));
        }
    }
}
