//! The scalar node handle and everything hanging off it.
//!
//! A [`Value`] is a cheap, clonable handle to one node of the computation graph.
//! Cloning a handle never copies the node: all clones observe the same value and
//! the same gradient accumulator.

use crate::scalar_data::ScalarData;
use std::cell::RefCell;
use std::rc::Rc;

pub mod accessors;
pub mod autograd_methods;
pub mod create;
pub mod debug;
pub mod math_methods;
pub mod operators;

pub use create::Operand;

/// A scalar node in the computation graph.
#[derive(Clone)]
pub struct Value {
    pub(crate) data: Rc<RefCell<ScalarData>>,
}

#[cfg(test)]
#[path = "scalar_test.rs"]
mod tests;
