//! Reverse-mode differentiation: operator tags with their derivative rules,
//! graph ordering, and a finite-difference checker.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::Op;
pub use grad_check::{check_grad, GradCheckError};
