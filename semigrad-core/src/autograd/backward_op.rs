use std::fmt;

/// Identifies how a node was produced and carries the forward-time quantities
/// its derivative rule needs.
///
/// Rules read only what was captured here, never the operands' current values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// Inputs, parameters and wrapped constants.
    Leaf,
    Add,
    Sub,
    Mul { lhs: f64, rhs: f64 },
    Div { lhs: f64, rhs: f64 },
    /// `base ^ exponent`; the exponent is a plain number, not a node.
    Pow { base: f64, exponent: f64 },
    Neg,
    Exp { output: f64 },
    Tanh { output: f64 },
    /// `active` is `base > 0`; at exactly 0 the subgradient is 0.
    Relu { active: bool },
    Sigmoid { output: f64 },
}

impl Op {
    /// Number of operands a node with this op must have.
    pub fn arity(&self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Add | Op::Sub | Op::Mul { .. } | Op::Div { .. } => 2,
            Op::Pow { .. }
            | Op::Neg
            | Op::Exp { .. }
            | Op::Tanh { .. }
            | Op::Relu { .. }
            | Op::Sigmoid { .. } => 1,
        }
    }

    /// Chain rule for one node.
    ///
    /// Given dL/dOutput, returns the contribution to dL/dOperand for each
    /// operand, in operand order. Entries past [`Op::arity`] are 0.
    pub fn backward(&self, grad_output: f64) -> [f64; 2] {
        let g = grad_output;
        match *self {
            Op::Leaf => [0.0, 0.0],
            Op::Add => [g, g],
            Op::Sub => [g, -g],
            Op::Mul { lhs, rhs } => [rhs * g, lhs * g],
            Op::Div { lhs, rhs } => [g / rhs, -(lhs / (rhs * rhs)) * g],
            Op::Pow { base, exponent } => [exponent * base.powf(exponent - 1.0) * g, 0.0],
            Op::Neg => [-g, 0.0],
            Op::Exp { output } => [output * g, 0.0],
            Op::Tanh { output } => [(1.0 - output * output) * g, 0.0],
            Op::Relu { active } => [if active { g } else { 0.0 }, 0.0],
            Op::Sigmoid { output } => [output * (1.0 - output) * g, 0.0],
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Op::Leaf => "",
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul { .. } => "*",
            Op::Div { .. } => "/",
            Op::Pow { .. } => "pow",
            Op::Neg => "neg",
            Op::Exp { .. } => "exp",
            Op::Tanh { .. } => "tanh",
            Op::Relu { .. } => "relu",
            Op::Sigmoid { .. } => "sigmoid",
        };
        f.write_str(tag)
    }
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;
