use crate::scalar::accessors::NodeId;
use crate::scalar::Value;
use std::collections::HashSet;

/// Orders every node reachable from `root` so that each node comes after all
/// of its operands (`root` is last).
///
/// Depth-first post-order with an explicit stack. Nodes are deduplicated by
/// identity, not by value: two distinct nodes holding the same number are both
/// kept, and a node reachable along several paths appears once.
pub(crate) fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list = Vec::new();
    // (node, operands already pushed)
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }
        let operands = node.operands();
        stack.push((node, true));
        // Reversed so the first operand is finished first.
        for operand in operands.into_iter().rev() {
            if !visited.contains(&operand.node_id()) {
                stack.push((operand, false));
            }
        }
    }

    sorted_list
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
