//! Exit code constants for the promptpack CLI.
//!
//! - 0: Success: every input parsed and every check held
//! - 1: Failure: an input failed validation, or the run aborted

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Validation failure, bad arguments, or an unrecoverable I/O error.
pub const FAILURE: i32 = 1;
