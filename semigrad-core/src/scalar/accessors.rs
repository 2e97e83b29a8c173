use crate::autograd::Op;
use crate::scalar::Value;
use crate::scalar_data::ScalarData;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// Identity of a node, independent of the value it carries.
pub(crate) type NodeId = *const RefCell<ScalarData>;

impl Value {
    pub(crate) fn read_data(&self) -> Ref<'_, ScalarData> {
        self.data.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, ScalarData> {
        self.data.borrow_mut()
    }

    pub(crate) fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// Forward value of this node.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Accumulated gradient of the last root `backward` was called on.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Overwrites the forward value. Used by optimizers on parameter leaves;
    /// nodes already built on top of this one keep their old values.
    pub fn set_data(&self, data: f64) {
        self.write_data().data = data;
    }

    pub(crate) fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Adds `delta` to the gradient accumulator.
    pub fn acc_grad(&self, delta: f64) {
        self.write_data().grad += delta;
    }

    /// Resets the gradient accumulator to exactly 0.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    /// The operation that produced this node.
    pub fn op(&self) -> Op {
        self.read_data().op
    }

    /// Handles to the operands, in the order the operation received them.
    pub fn operands(&self) -> Vec<Value> {
        self.read_data().operands.clone()
    }

    pub fn is_leaf(&self) -> bool {
        self.read_data().operands.is_empty()
    }

    /// `true` if both handles point at the same node.
    pub fn ptr_eq(a: &Value, b: &Value) -> bool {
        Rc::ptr_eq(&a.data, &b.data)
    }
}
