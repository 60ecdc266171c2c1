//! Error handling utilities
//!
//! This module provides centralized error handling for the application.

use tracing::error;

/// Handle fatal errors and exit with appropriate status code
///
/// - For `CheckerError`: shows the user message, and the source chain in verbose mode
/// - For other errors: shows the error message and exits with the general error code
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    use crate::error::CheckerError;

    error!("Fatal error: {}", error);

    let exit_code = if let Some(checker_err) = error.downcast_ref::<CheckerError>() {
        eprintln!("{}", checker_err.user_message());

        if verbose >= 1 {
            eprintln!("\nContext Chain:\n{}", checker_err.developer_message());
        }

        checker_err.exit_code()
    } else {
        eprintln!("Error: {error}");

        if verbose >= 1 {
            eprintln!("\nError chain:");
            for (i, cause) in error.chain().enumerate() {
                eprintln!("  {}: {}", i, cause);
            }
        }

        crate::error::GENERAL_ERROR_EXIT_CODE
    };

    std::process::exit(exit_code)
}
