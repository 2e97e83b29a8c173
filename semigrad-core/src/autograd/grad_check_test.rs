use crate::autograd::grad_check::{check_grad, GradCheckError};
use crate::error::SemigradError;
use crate::ops::div_op;
use crate::scalar::Value;

#[test]
fn test_grad_check_composition_passes() -> Result<(), GradCheckError> {
    let inputs = Value::from_slice(&[0.4, -1.1, 2.0, 0.3]);
    check_grad(
        |v| Ok((&v[0] * &v[1]).tanh() + &v[2] / v[3].exp() - v[0].sigmoid().pow(2.0)),
        &inputs,
        1e-4,
        1e-3,
    )
}

#[test]
fn test_grad_check_detects_missing_gradient() {
    // The second use of v[0] is detached from the graph, so the analytical
    // gradient misses its contribution.
    let inputs = Value::from_slice(&[1.5]);
    let result = check_grad(
        |v| Ok(&v[0] * Value::new(v[0].data())),
        &inputs,
        1e-4,
        1e-3,
    );
    assert!(matches!(
        result,
        Err(GradCheckError::GradientMismatch { input_index: 0, .. })
    ));
}

#[test]
fn test_grad_check_restores_inputs() -> Result<(), GradCheckError> {
    let inputs = Value::from_slice(&[0.25, 4.0]);
    check_grad(|v| Ok(&v[0] * &v[1]), &inputs, 1e-3, 1e-3)?;
    assert_eq!(inputs[0].data(), 0.25);
    assert_eq!(inputs[1].data(), 4.0);
    Ok(())
}

#[test]
fn test_grad_check_rejects_non_leaf_input() {
    let x = Value::new(1.0);
    let y = &x + 1.0;
    let result = check_grad(|v| Ok(v[0].clone()), &[y], 1e-4, 1e-3);
    assert_eq!(result, Err(GradCheckError::InputNotLeaf { input_index: 0 }));
}

#[test]
fn test_grad_check_reports_non_finite_analytical_gradient() {
    let inputs = Value::from_slice(&[0.0]);
    let result = check_grad(|v| Ok(div_op(&Value::new(1.0), &v[0])), &inputs, 1e-4, 1e-3);
    assert!(matches!(
        result,
        Err(GradCheckError::AnalyticalGradNonFinite { input_index: 0, .. })
    ));
}

#[test]
fn test_grad_check_forwards_function_errors() {
    let inputs = Value::from_slice(&[1.0]);
    let err = SemigradError::EmptyInput {
        operation: "test".to_string(),
    };
    let result = check_grad(|_| Err(err.clone()), &inputs, 1e-4, 1e-3);
    assert_eq!(result, Err(GradCheckError::ForwardPassError(err.clone())));
}
