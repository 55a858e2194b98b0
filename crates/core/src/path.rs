use tracing::trace;

/// Default upper bound on predecessor hops walked while rebuilding a path.
pub const MAX_PATH_STEPS: usize = 100;

/// Rebuilds the node sequence ending at `dst` from a predecessor array.
///
/// Walks `predecessors` backwards from `dst` until a node with no predecessor is
/// reached, then returns the visited indices source first. At most `step_cap` hops
/// are taken, so a cyclic chain yields a truncated path of `step_cap + 1` nodes
/// instead of looping forever.
///
/// When the chain is broken (the destination was never reached) the result starts at
/// whatever node ends the chain, which is `dst` itself for an unreached node.
pub fn build_path(dst: usize, predecessors: &[Option<usize>], step_cap: usize) -> Vec<usize> {
    let mut path = vec![dst];
    let mut current = dst;
    let mut steps = 0;

    while let Some(prev) = predecessors[current] {
        if steps == step_cap {
            trace!(dst, step_cap, "predecessor chain truncated at step cap");
            break;
        }
        path.push(prev);
        current = prev;
        steps += 1;
    }

    path.reverse();
    path
}
