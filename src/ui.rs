//! Centralized color and formatting helpers for console output.

/// Check if quiet mode is enabled via the `SALMONTT_QUIET` environment variable
pub fn is_quiet() -> bool {
    std::env::var("SALMONTT_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Color scheme for console text
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Yellow for warnings and rejected input
    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Red for errors
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Bold for headings
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }
}

/// Common text formatting patterns
pub mod format {
    /// Format a monetary amount in pesos, e.g. `$750000 pesos`
    pub fn pesos(amount: f64) -> String {
        format!("${} pesos", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[serial_test::serial]
    fn test_is_quiet_reads_env() {
        std::env::set_var("SALMONTT_QUIET", "true");
        assert!(is_quiet());
        std::env::set_var("SALMONTT_QUIET", "0");
        assert!(!is_quiet());
        std::env::remove_var("SALMONTT_QUIET");
        assert!(!is_quiet());
    }

    #[test]
    fn test_pesos() {
        assert_eq!(format::pesos(950000.0), "$950000 pesos");
        assert_eq!(format::pesos(1234.5), "$1234.5 pesos");
    }
}
