//! Error types for Visitant.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`VisitantError`] - Top-level error type for all Visitant operations
//! - [`DispatchError`] - Errors surfaced while dispatching or printing
//! - [`RegistryError`] - Errors from building a handler registry
//!
//! A failed acyclic probe is not an error: `try_accept` reports it as `false`.
//! [`DispatchError::Unhandled`] only appears when a caller explicitly asks for
//! a checked dispatch.

use std::{fmt, io};
use thiserror::Error;

/// Top-level error type for all Visitant operations.
#[derive(Error, Debug)]
pub enum VisitantError {
    /// An error occurred during dispatch.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// An error occurred while building a registry.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Errors that can occur during dispatch.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A checked acyclic dispatch found no entry point for the visited type.
    #[error("visitor has no entry point for `{type_name}`")]
    Unhandled {
        /// The concrete type that was offered to the visitor.
        type_name: &'static str,
    },

    /// Writing a value into a formatting sink failed.
    #[error("failed to format value into sink")]
    Format(#[from] fmt::Error),

    /// Writing a value into an I/O sink failed.
    #[error("failed to write value into sink: {0}")]
    Io(#[from] io::Error),
}

/// Errors that can occur while building a registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A handler is already registered for this type and flavor.
    #[error("handler already registered for `{type_name}`")]
    DuplicateHandler {
        /// The type the handler was registered for.
        type_name: &'static str,
    },
}
