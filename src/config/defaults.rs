//! Default values and configuration structs with default implementations.

use serde::{Deserialize, Serialize};

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

default_fn!(default_recent_count, usize, 3);
default_fn!(default_true, bool, true);
default_fn!(default_false, bool, false);

/// How record listings are shown
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Number of most recent records shown by the listing options (default: 3)
    #[serde(default = "default_recent_count")]
    pub recent_count: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            recent_count: default_recent_count(),
        }
    }
}

/// How console input is normalized and checked
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct InputConfig {
    /// Upper-case names and free text as they are read (default: true)
    #[serde(default = "default_true")]
    pub uppercase: bool,
    /// Also verify the RUT modulo-11 check digit (default: false)
    #[serde(default = "default_false")]
    pub verify_rut_check_digit: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            uppercase: default_true(),
            verify_rut_check_digit: default_false(),
        }
    }
}

/// Records loaded at startup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SeedConfig {
    /// Register the demonstration employees (default: true)
    #[serde(default = "default_true")]
    pub demo_employees: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            demo_employees: default_true(),
        }
    }
}
