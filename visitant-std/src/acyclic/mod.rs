//! Open-hierarchy visitors registered at runtime.
//!
//! Use when the handled types are decided while the program runs rather than
//! spelled out as a type list.

pub mod registry;

pub use registry::{Registry, RegistryBuilder};
