//! # visitant-std
//!
//! Standard implementations for the Visitant dispatch library.
//!
//! This crate provides:
//! - **Operations**: polymorphic [`clone`](ops::clone()) and
//!   [`print`](ops::print()) built on the functor adapters
//! - **Runtime registration**: [`Registry`](acyclic::Registry)
//! - **Instrumentation**: [`Traced`](trace::Traced)
//! - **Testing**: recording and rejecting helpers in [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use visitant_core;

// Modules
pub mod acyclic;
pub mod ops;
pub mod testing;
pub mod trace;

#[cfg(all(test, feature = "tracing"))]
mod capture;
