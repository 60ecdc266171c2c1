/// Numeric codes attached to every [`CheckerError`](super::CheckerError)
///
/// - 1000-1999: configuration document
/// - 2000-2999: CI step output
/// - 6000-6999: git
pub struct ErrorCode;

impl ErrorCode {
    pub const CONFIG_UNREADABLE: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_INVALID_TOML: u16 = 1002;
    pub const CONFIG_INVALID_STRUCTURE: u16 = 1003;
    pub const CONFIG_INVALID_GROUP: u16 = 1004;
    pub const CONFIG_INVALID_PATTERN: u16 = 1005;
    pub const CONFIG_EXAMPLE_MISMATCH: u16 = 1006;
    pub const CONFIG_UNKNOWN_GROUP: u16 = 1007;
    pub const CONFIG_UNUSED_GROUP: u16 = 1008;

    pub const OUTPUT_NOT_CONFIGURED: u16 = 2001;
    pub const OUTPUT_WRITE_FAILED: u16 = 2002;

    pub const GIT_SPAWN_FAILED: u16 = 6000;
    pub const GIT_REPO_NOT_FOUND: u16 = 6001;
    pub const GIT_INVALID_REF: u16 = 6002;
    pub const GIT_COMMAND_FAILED: u16 = 6003;
}

/// Human-readable description of `code`
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        ErrorCode::CONFIG_UNREADABLE => "Configuration file could not be read",
        ErrorCode::CONFIG_NOT_FOUND => "Configuration file not found",
        ErrorCode::CONFIG_INVALID_TOML => "Invalid TOML syntax in configuration",
        ErrorCode::CONFIG_INVALID_STRUCTURE => "Unexpected configuration structure",
        ErrorCode::CONFIG_INVALID_GROUP => "Invalid group definition",
        ErrorCode::CONFIG_INVALID_PATTERN => "Invalid regular expression in group",
        ErrorCode::CONFIG_EXAMPLE_MISMATCH => "Group example does not match its patterns",
        ErrorCode::CONFIG_UNKNOWN_GROUP => "Workflow references an unknown group",
        ErrorCode::CONFIG_UNUSED_GROUP => "Group is not used by any workflow",

        ErrorCode::OUTPUT_NOT_CONFIGURED => "CI output file is not configured",
        ErrorCode::OUTPUT_WRITE_FAILED => "CI output file could not be written",

        ErrorCode::GIT_SPAWN_FAILED => "Git could not be started",
        ErrorCode::GIT_REPO_NOT_FOUND => "Git repository not found",
        ErrorCode::GIT_INVALID_REF => "Invalid git reference",
        ErrorCode::GIT_COMMAND_FAILED => "Git command failed",

        _ => "Unknown error code",
    }
}
