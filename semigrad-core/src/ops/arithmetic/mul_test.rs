use crate::autograd::{check_grad, GradCheckError, Op};
use crate::ops::arithmetic::mul_op;
use crate::scalar::Value;

#[test]
fn test_mul_forward_and_backward() {
    let a = Value::new(2.0);
    let b = Value::new(-3.0);
    let c = mul_op(&a, &b);
    assert_eq!(c.data(), -6.0);
    assert_eq!(c.op(), Op::Mul { lhs: 2.0, rhs: -3.0 });

    c.backward();
    assert_eq!(a.grad(), -3.0);
    assert_eq!(b.grad(), 2.0);
}

#[test]
fn test_mul_square_uses_both_paths() {
    // y = x * x  =>  dy/dx = 2x
    let x = Value::new(3.0);
    let y = &x * &x;
    assert_eq!(y.data(), 9.0);
    y.backward();
    assert_eq!(x.grad(), 6.0);
}

#[test]
fn test_mul_by_constant() {
    let x = Value::new(1.5);
    let y = 4.0 * &x;
    let z = &x * 4;
    assert_eq!(y.data(), 6.0);
    assert_eq!(z.data(), 6.0);
    y.backward();
    assert_eq!(x.grad(), 4.0);
}

#[test]
fn test_mul_uses_forward_time_values() {
    let a = Value::new(2.0);
    let b = Value::new(5.0);
    let c = &a * &b;
    // Mutating a leaf after the graph is built does not change the recorded rule.
    a.set_data(100.0);
    c.backward();
    assert_eq!(b.grad(), 2.0);
}

#[test]
fn test_mul_grad_check() -> Result<(), GradCheckError> {
    let inputs = Value::from_slice(&[1.7, -0.4]);
    check_grad(|v| Ok(mul_op(&v[0], &v[1])), &inputs, 1e-4, 1e-3)
}
