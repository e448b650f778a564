//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`StrideError`] covers:
//! - Configuration defects in animation group tables (fatal, never swallowed)
//! - Settings loading and parsing failures
//!
//! Missing animation clips are *not* errors: they are logged and the
//! requesting operation degrades to a no-op.
//!
//! # Usage
//!
//! ```rust,ignore
//! use stride::errors::{StrideError, Result};
//!
//! fn tick() -> Result<()> {
//!     // Operations that may fail return Result
//!     Ok(())
//! }
//! ```

use thiserror::Error;

use crate::character::LocomotionState;

/// The main error type for the controller crate.
#[derive(Error, Debug)]
pub enum StrideError {
    // ========================================================================
    // Data Table Errors
    // ========================================================================
    /// A locomotion state has no base group name in the animation group table.
    ///
    /// This is a build-time data bug; the controller cannot resolve a clip for
    /// the state and refuses to continue.
    #[error("Failed to find animation group for character state {0:?}")]
    MissingGroupName(LocomotionState),

    // ========================================================================
    // Settings Errors
    // ========================================================================
    /// Controller settings could not be parsed.
    #[error("Settings parse error: {0}")]
    Settings(#[from] serde_json::Error),

    /// File I/O error while reading settings.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, StrideError>`.
pub type Result<T> = std::result::Result<T, StrideError>;
