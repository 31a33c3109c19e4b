//! Standard operations built as functors.
//!
//! Neither operation contains dispatch logic of its own: each is a functor
//! that works on any concrete type, plugged into a closed visitor set or an
//! acyclic type list by the functions below.

pub mod clone;
pub mod print;

pub use clone::{Cloner, clone, clone_acyclic, clone_as};
pub use print::{IoAdapter, Streamer, print, print_acyclic, print_acyclic_io, print_io};
