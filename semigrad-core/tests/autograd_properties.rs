use approx::assert_relative_eq;
use semigrad_core::autograd::check_grad;
use semigrad_core::ops::{div_op, exp_op, mul_op, neg_op, pow_op, relu_op, sigmoid_op, tanh_op};
use semigrad_core::utils::testing::check_grads_near;
use semigrad_core::{SemigradError, Value};

const EPS: f64 = 1e-6;
const TOL: f64 = 1e-5;

fn square(a: &Value) -> Value {
    pow_op(a, 2.0)
}

fn cube(a: &Value) -> Value {
    pow_op(a, 3.0)
}

fn leaves(data: &[f64]) -> Vec<Value> {
    Value::from_slice(data)
}

#[test]
fn test_classic_composition_matches_finite_differences() {
    let inputs = leaves(&[2.0, -3.0, 10.0, -2.0]);
    let func = |x: &[Value]| -> Result<Value, SemigradError> {
        Ok((&x[0] * &x[1] + &x[2]) * &x[3])
    };
    check_grad(func, &inputs, EPS, TOL).unwrap();

    // Analytical values after the check's own reverse pass.
    check_grads_near(&inputs, &[6.0, -4.0, -2.0, 4.0], 1e-12);
    // Inputs are restored after perturbation.
    assert_eq!(inputs[0].data(), 2.0);
}

#[test]
fn test_unary_ops_match_finite_differences() {
    let unary: [(&str, fn(&Value) -> Value); 7] = [
        ("exp", exp_op),
        ("tanh", tanh_op),
        ("sigmoid", sigmoid_op),
        ("relu", relu_op),
        ("square", square),
        ("cube", cube),
        ("neg", neg_op),
    ];
    for (name, op) in unary {
        for &x in &[-1.3, -0.2, 0.7, 1.9] {
            let inputs = leaves(&[x]);
            let result = check_grad(|v: &[Value]| Ok(op(&v[0])), &inputs, EPS, TOL);
            assert!(result.is_ok(), "{} at {}: {:?}", name, x, result);
        }
    }
}

#[test]
fn test_binary_ops_match_finite_differences() {
    let inputs = leaves(&[1.5, -0.75]);
    check_grad(|v: &[Value]| Ok(&v[0] + &v[1]), &inputs, EPS, TOL).unwrap();
    check_grad(|v: &[Value]| Ok(&v[0] - &v[1]), &inputs, EPS, TOL).unwrap();
    check_grad(|v: &[Value]| Ok(mul_op(&v[0], &v[1])), &inputs, EPS, TOL).unwrap();
    check_grad(|v: &[Value]| Ok(div_op(&v[0], &v[1])), &inputs, EPS, TOL).unwrap();
}

#[test]
fn test_constant_operands_match_finite_differences() {
    let inputs = leaves(&[0.4]);
    let func = |v: &[Value]| -> Result<Value, SemigradError> {
        Ok((&v[0] * 3.0 + 1.0) / 2.0 - 0.5)
    };
    check_grad(func, &inputs, EPS, TOL).unwrap();
    assert_relative_eq!(inputs[0].grad(), 1.5, epsilon = 1e-12);

    let reversed = |v: &[Value]| -> Result<Value, SemigradError> { Ok(1.0 / &v[0]) };
    check_grad(reversed, &inputs, EPS, TOL).unwrap();
}

#[test]
fn test_shared_node_accumulates() {
    let x = Value::new(3.0);
    let y = &x * &x;
    y.backward();
    assert_eq!(x.grad(), 6.0);
}

#[test]
fn test_diamond_matches_finite_differences() {
    // a feeds b and c, both feed d.
    let inputs = leaves(&[0.8]);
    let func = |v: &[Value]| -> Result<Value, SemigradError> {
        let a = &v[0];
        let b = a.tanh();
        let c = a * 2.0 + 0.3;
        Ok(b.sigmoid() * c.exp() + &b * &c)
    };
    check_grad(func, &inputs, EPS, TOL).unwrap();
}

#[test]
fn test_relu_gradient_is_zero_at_origin() {
    let x = Value::new(0.0);
    let y = x.relu();
    y.backward();
    assert_eq!(y.data(), 0.0);
    assert_eq!(x.grad(), 0.0);
}

#[test]
fn test_division_by_zero_propagates() {
    let a = Value::new(1.0);
    let b = Value::new(0.0);
    let c = &a / &b;
    c.backward();
    assert!(c.data().is_infinite());
    assert!(a.grad().is_infinite());
}

#[test]
fn test_neuron_like_expression() {
    let inputs = leaves(&[0.5, -1.2, 0.3, 0.9, -0.4]);
    let func = |v: &[Value]| -> Result<Value, SemigradError> {
        let (w0, w1, b, x0, x1) = (&v[0], &v[1], &v[2], &v[3], &v[4]);
        let pre = b + w0 * x0 + w1 * x1;
        Ok((pre.tanh() - 0.25).pow(2.0))
    };
    check_grad(func, &inputs, EPS, TOL).unwrap();
}
