#![allow(dead_code)]

use std::{f64::consts::PI, fmt};
use visitant::{AcyclicVisitable, Functor, FunctorMut, Visitable, upcast, visitable, visitor_set};

// ============================================================================
// Test Variant Types
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Square {
    pub side: f64,
}

/// Acyclic-visitable, but a member of no set or list used below.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    pub base: f64,
    pub height: f64,
}

pub trait Area {
    fn area(&self) -> f64;
}

impl Area for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

impl Area for Square {
    fn area(&self) -> f64 {
        self.side * self.side
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle(r={})", self.radius)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square(s={})", self.side)
    }
}

impl AcyclicVisitable for Circle {}
impl AcyclicVisitable for Square {}
impl AcyclicVisitable for Triangle {}

// ============================================================================
// Closed Visitor Set
// ============================================================================

visitor_set! {
    /// Visitors over every shape.
    pub Shapes: ShapeVisitor, ShapeVisitorMut { Circle, Square }
}

visitable!(Shapes => Circle, Square);

/// The user-facing base of the closed hierarchy.
pub trait Shape: Visitable<Shapes> + Area + fmt::Debug {
    fn as_circle(&self) -> Option<&Circle> {
        None
    }
}

impl Shape for Circle {
    fn as_circle(&self) -> Option<&Circle> {
        Some(self)
    }
}

impl Shape for Square {}

upcast!(dyn Shape => Circle, Square);

pub fn sample_shapes() -> Vec<Box<dyn Visitable<Shapes>>> {
    vec![
        Box::new(Circle { radius: 2.0 }),
        Box::new(Square { side: 3.0 }),
    ]
}

// ============================================================================
// Test Functors
// ============================================================================

/// Sums the area of every shape it is called with.
#[derive(Clone, Debug, Default)]
pub struct TotalArea(pub f64);

impl<T: Area> Functor<T> for TotalArea {
    fn call(&mut self, shape: &T) {
        self.0 += shape.area();
    }
}

/// Scales every shape it is called with.
pub struct Scale(pub f64);

impl FunctorMut<Circle> for Scale {
    fn call_mut(&mut self, circle: &mut Circle) {
        circle.radius *= self.0;
    }
}

impl FunctorMut<Square> for Scale {
    fn call_mut(&mut self, square: &mut Square) {
        square.side *= self.0;
    }
}
