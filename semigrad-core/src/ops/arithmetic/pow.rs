use crate::autograd::Op;
use crate::scalar::Value;

/// `base ^ exponent` for a fixed numeric exponent.
///
/// Non-integer exponents of negative bases give `NaN`, and `0 ^ p` with `p < 1`
/// gives an infinite derivative, as `f64::powf` does.
pub fn pow_op(base: &Value, exponent: f64) -> Value {
    let b = base.data();
    Value::from_op(
        b.powf(exponent),
        vec![base.clone()],
        Op::Pow { base: b, exponent },
    )
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
