//! # visitant - Generic Visitor Dispatch
//!
//! `visitant` removes the double-dispatch boilerplate of the visitor pattern.
//! Operations are written once as functors and plugged into either of two
//! dispatch strategies:
//!
//! - **Closed hierarchy**: the variant types are listed once with
//!   [`visitor_set!`]; dispatch is a single statically checked call.
//! - **Open hierarchy**: types implement [`AcyclicVisitable`] without naming
//!   their siblings; dispatch is probed at runtime and may report `false`.
//!
//! ## Quick Start (Closed Hierarchy)
//!
//! ```rust,ignore
//! use visitant::{FnVisitor, Functor, Visitable, visitable, visitor_set};
//!
//! visitor_set! {
//!     pub Shapes: ShapeVisitor, ShapeVisitorMut { Circle, Square }
//! }
//! visitable!(Shapes => Circle, Square);
//!
//! struct TotalArea(f64);
//!
//! impl<T: Area> Functor<T> for TotalArea {
//!     fn call(&mut self, shape: &T) {
//!         self.0 += shape.area();
//!     }
//! }
//!
//! let shapes: Vec<Box<dyn Visitable<Shapes>>> = vec![/* ... */];
//! let mut visitor = FnVisitor::new(TotalArea(0.0));
//! for shape in &shapes {
//!     shape.accept(&mut visitor);
//! }
//! ```
//!
//! ## Standard Operations
//!
//! [`clone`] / [`clone_acyclic`] make a deep copy as the base type, and
//! [`print`] / [`print_acyclic`] stream a value through its `Display` impl.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use visitant_core::{
    // Acyclic
    AcyclicFnVisitor,
    AcyclicFnVisitorMut,
    AcyclicVisitable,
    AcyclicVisitor,
    AsAny,
    // Type lists
    Dispatch,
    DispatchError,
    DispatchMut,
    // Visitor sets
    Erase,
    EraseMut,
    // Functors
    FnVisitor,
    Functor,
    FunctorMut,
    HCons,
    HNil,
    RegistryError,
    TypeList,
    // Upcasting
    Upcast,
    // Entry points
    Visit,
    VisitMut,
    // Error types
    VisitantError,
    Visitable,
    VisitorSet,
};

pub use visitant_core::{type_list, upcast, visitable, visitor_set};

// Standard Operations
pub use visitant_std::ops::{
    Cloner, IoAdapter, Streamer, clone, clone_acyclic, clone_as, print, print_acyclic,
    print_acyclic_io, print_io,
};

// Runtime Registration
pub use visitant_std::acyclic::{Registry, RegistryBuilder};

/// Dispatch instrumentation.
pub mod trace {
    pub use visitant_std::trace::Traced;
}

/// Testing utilities.
pub mod testing {
    pub use visitant_std::testing::{RecordedCall, RecordingFunctor, RejectingVisitor};
}

/// Prelude module - common imports for Visitant.
///
/// # Usage
///
/// ```rust,ignore
/// use visitant::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Acyclic
        AcyclicFnVisitor,
        AcyclicFnVisitorMut,
        AcyclicVisitable,
        AcyclicVisitor,
        // Errors
        DispatchError,
        // Closed sets
        Erase,
        EraseMut,
        FnVisitor,
        // Functors
        Functor,
        FunctorMut,
        // Entry points
        Visit,
        VisitMut,
        Visitable,
        VisitorSet,
    };
    pub use crate::{type_list, visitable, visitor_set};
}

#[cfg(feature = "macros")]
pub use visitant_macros::{AcyclicVisitable, Visitable};
