//! Core types for proompt
//!
//! This module holds the error taxonomy that every other module reports
//! through. See [`error`] for the variants and the user-facing
//! [`ErrorContext`] conversion used by the binary.

pub mod error;

pub use error::{ErrorContext, ProomptError, Result, user_friendly_error};
