//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`RtsError`] covers every way an RTS document can be
//! rejected: a bad frame-rate line, a malformed channel header, and per-frame
//! sample problems. Malformed input always surfaces as one of these variants;
//! the decoder never panics on bad data.
//!
//! # Usage
//!
//! All public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, RtsError>`.
//!
//! ```rust,ignore
//! use rts_anim::errors::{RtsError, Result};
//!
//! fn load_clip(text: &str) -> Result<()> {
//!     // Operations that may fail return Result
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for RTS document decoding.
///
/// Line and column numbers are 1-based positions in the source text, so they
/// can be surfaced to a user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RtsError {
    // ========================================================================
    // Document-Level Errors
    // ========================================================================
    /// The document has fewer than the two mandatory lines
    /// (frame rate + channel header).
    #[error("Empty document: expected at least a frame-rate line and a channel header")]
    EmptyDocument,

    /// The document exceeds the caller-supplied line budget.
    #[error("Document too large: {lines} lines (limit: {limit})")]
    DocumentTooLarge {
        /// Number of lines in the document
        lines: usize,
        /// The configured limit
        limit: usize,
    },

    // ========================================================================
    // Header Errors
    // ========================================================================
    /// Line 1 did not parse as a finite, strictly positive decimal number.
    #[error("Invalid frame rate: {0:?}")]
    InvalidFrameRate(String),

    /// Line 2 is not a well-formed sequence of 9-token bone channel groups.
    #[error("Malformed channel header: {reason}")]
    MalformedHeader {
        /// What was wrong with the header
        reason: String,
    },

    // ========================================================================
    // Frame Errors
    // ========================================================================
    /// A frame line carries a different number of fields than the header.
    #[error("Frame field count mismatch at line {line}: expected {expected} fields, found {found}")]
    FrameFieldCountMismatch {
        /// 1-based line number of the offending frame
        line: usize,
        /// Field count declared by the header
        expected: usize,
        /// Field count actually found on the line
        found: usize,
    },

    /// A frame field did not parse as a decimal number.
    #[error("Invalid sample value at line {line}, column {column}")]
    InvalidSample {
        /// 1-based line number of the offending frame
        line: usize,
        /// 1-based field index within the line
        column: usize,
    },
}

/// Convenience alias used by all fallible APIs in this crate.
pub type Result<T> = std::result::Result<T, RtsError>;
