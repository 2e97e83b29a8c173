use crate::autograd::Op;
use crate::scalar::Value;
use std::rc::Rc;

/// Internal storage behind a [`Value`] handle.
///
/// `operands` is fixed at construction; only `data` (by an optimizer) and
/// `grad` (by the reverse pass or a reset) change afterwards.
pub struct ScalarData {
    pub(crate) data: f64,
    pub(crate) grad: f64,
    pub(crate) operands: Vec<Value>,
    pub(crate) op: Op,
}

impl ScalarData {
    pub(crate) fn new(data: f64, operands: Vec<Value>, op: Op) -> Self {
        ScalarData {
            data,
            grad: 0.0,
            operands,
            op,
        }
    }
}

impl Drop for ScalarData {
    // Unlinks uniquely owned operands onto a worklist so freeing a deep graph
    // does not recurse once per level.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.operands);
        while let Some(handle) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(handle.data) {
                let mut node = cell.into_inner();
                pending.append(&mut node.operands);
            }
        }
    }
}
