/// Integer weight carried by every edge. May be positive, negative or zero.
pub type Weight = i32;

/// Type alias for a single edge: (from, to, weight)
///
/// `from` and `to` are dense node indices inside the owning graph.
pub type Edge = (usize, usize, Weight);

/// Distance reported for a node the source cannot reach.
pub const UNREACHABLE: f64 = f64::INFINITY;
