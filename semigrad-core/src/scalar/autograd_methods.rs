use crate::autograd::graph::topological_sort;
use crate::scalar::Value;
use log::debug;

impl Value {
    /// Runs the reverse pass from this node.
    ///
    /// Seeds this node's gradient with 1.0, then visits every reachable node
    /// consumers-first and adds its contribution to each operand's gradient.
    /// Gradients accumulate: reset the leaves you care about (see
    /// [`Value::zero_grad`]) before calling this again on a new graph.
    /// Calling it on a leaf only sets the leaf's own gradient to 1.0.
    pub fn backward(&self) {
        let sorted_nodes = topological_sort(self);
        debug!("backward: {} nodes reachable from root", sorted_nodes.len());

        self.set_grad(1.0);

        for node in sorted_nodes.iter().rev() {
            let guard = node.read_data();
            if guard.operands.is_empty() {
                continue;
            }
            let operand_grads = guard.op.backward(guard.grad);
            for (operand, delta) in guard.operands.iter().zip(operand_grads) {
                operand.acc_grad(delta);
            }
        }
    }
}
