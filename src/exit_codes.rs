/// Exit codes, following Ruff's convention
///
/// These exit codes let users and CI systems distinguish between
/// different kinds of failures.
/// Success - No issues found
pub const SUCCESS: i32 = 0;

/// Issues found - One or more style file problems detected
pub const ISSUES_FOUND: i32 = 1;

/// Tool error - Bad invocation, file access error, or internal error
pub const TOOL_ERROR: i32 = 2;

/// Helper functions for consistent exit behavior
pub mod exit {
    use super::{ISSUES_FOUND, SUCCESS, TOOL_ERROR};

    /// Exit with success code (0)
    pub fn success() -> ! {
        std::process::exit(SUCCESS);
    }

    /// Exit with issues found code (1)
    pub fn issues_found() -> ! {
        std::process::exit(ISSUES_FOUND);
    }

    /// Exit with tool error code (2)
    pub fn tool_error() -> ! {
        std::process::exit(TOOL_ERROR);
    }
}
