//! # visitant-core
//!
//! Core traits for the Visitant dispatch library.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! libraries that declare variant types or visitors but don't need the
//! standard operations of `visitant-std`.
//!
//! # Two Dispatch Strategies
//!
//! ## Closed Hierarchy ([`Visitable`])
//!
//! The full list of variant types is fixed where the visitor set is declared
//! with [`visitor_set!`]. Every visitor of the set provides one entry point per
//! member, and [`Visitable::accept`] reaches the right one with a single
//! statically checked call.
//!
//! - **Static**: attaching a type outside the set fails to compile
//! - **Total**: a dispatch always reaches exactly one entry point
//!
//! ## Open Hierarchy ([`AcyclicVisitable`])
//!
//! No list of siblings is needed. [`AcyclicVisitable::try_accept`] asks the
//! visitor at runtime whether it handles exactly the visited type.
//!
//! - **Extensible**: new variant types can be added anywhere
//! - **Partial**: a dispatch may fail, which is reported as `false`
//!
//! # Functor Adaptation
//!
//! Instead of one visitor type per operation, write one [`Functor`] and adapt
//! it with [`FnVisitor`] (closed) or [`AcyclicFnVisitor`] /
//! [`AcyclicFnVisitorMut`] (open).
//!
//! # Error Types
//!
//! - [`VisitantError`] - Top-level error type
//! - [`DispatchError`] - Checked dispatch and sink errors
//! - [`RegistryError`] - Registry construction errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod acyclic;
mod error;
mod functor;
mod list;
mod set;
mod upcast;
mod visit;

// Re-exports
pub use acyclic::{AcyclicVisitable, AcyclicVisitor, AsAny};
pub use error::{DispatchError, RegistryError, VisitantError};
pub use functor::{AcyclicFnVisitor, AcyclicFnVisitorMut, FnVisitor};
pub use list::{Dispatch, DispatchMut, HCons, HNil, TypeList};
pub use set::{Erase, EraseMut, Visitable, VisitorSet};
pub use upcast::Upcast;
pub use visit::{Functor, FunctorMut, Visit, VisitMut};
