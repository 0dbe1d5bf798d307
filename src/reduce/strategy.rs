//! Endpoint-inclusion strategies for splitting a vertex ring.
//!
//! When a polygon is cut at two off-square vertices, the kept arc may keep
//! neither, one, or both of the cut vertices. The strategies are tried in a
//! fixed order and the first one producing a validated quadrilateral wins.

/// How the two cut vertices participate in the kept arc.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InclusionStrategy {
    /// Open interval: the arc alone.
    ExcludeBoth,
    /// Left-closed: keep the forward-scan vertex.
    KeepFirst,
    /// Right-closed: keep the backward-scan vertex.
    KeepSecond,
    /// Closed: keep both cut vertices.
    KeepBoth,
}

impl InclusionStrategy {
    /// Trial order. Dropping both cut vertices is preferred; keeping both is
    /// the last resort.
    pub const ALL: [InclusionStrategy; 4] = [
        InclusionStrategy::ExcludeBoth,
        InclusionStrategy::KeepFirst,
        InclusionStrategy::KeepSecond,
        InclusionStrategy::KeepBoth,
    ];

    /// Builds the candidate vertex set as original-ring indices. Sorting
    /// restores ring order regardless of whether the kept arc wraps past the
    /// end of the vertex list.
    pub fn apply(self, arc: &[usize], a: usize, b: usize) -> Vec<usize> {
        let mut indices = arc.to_vec();
        match self {
            InclusionStrategy::ExcludeBoth => {}
            InclusionStrategy::KeepFirst => indices.push(a),
            InclusionStrategy::KeepSecond => indices.push(b),
            InclusionStrategy::KeepBoth => {
                indices.push(a);
                indices.push(b);
            }
        }
        indices.sort_unstable();
        indices
    }
}
