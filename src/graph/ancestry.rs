//! Earliest-ancestor lookup over `(parent, child)` pairs.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use super::digraph::Vertex;

/// Ancestor farthest from `start`, measured along the longest parent chain.
///
/// Ties between equally distant ancestors go to the lowest id. Returns
/// `None` when `start` has no parents. Cycles in the input are ignored.
///
/// ```
/// use marga::graph::earliest_ancestor;
///
/// let pairs = [(1, 3), (2, 3), (3, 6), (5, 6), (5, 7), (4, 5), (4, 8), (8, 9), (11, 8), (10, 1)];
/// assert_eq!(earliest_ancestor(&pairs, 6), Some(10));
/// assert_eq!(earliest_ancestor(&pairs, 10), None);
/// ```
pub fn earliest_ancestor<V: Vertex>(pairs: &[(V, V)], start: V) -> Option<V> {
    let mut parents: BTreeMap<V, BTreeSet<V>> = BTreeMap::new();
    for &(parent, child) in pairs {
        parents.entry(child).or_default().insert(parent);
    }

    let mut memo = HashMap::new();
    let mut in_progress = HashSet::new();
    let (depth, ancestor) = deepest(&parents, start, &mut memo, &mut in_progress);
    (depth > 0).then_some(ancestor)
}

/// Longest chain above `vertex`: its length and the root it ends at.
fn deepest<V: Vertex>(
    parents: &BTreeMap<V, BTreeSet<V>>,
    vertex: V,
    memo: &mut HashMap<V, (usize, V)>,
    in_progress: &mut HashSet<V>,
) -> (usize, V) {
    if let Some(&found) = memo.get(&vertex) {
        return found;
    }
    in_progress.insert(vertex);

    let mut best = (0, vertex);
    if let Some(above) = parents.get(&vertex) {
        for &parent in above {
            if in_progress.contains(&parent) {
                continue;
            }
            let (depth, ancestor) = deepest(parents, parent, memo, in_progress);
            let candidate = (depth + 1, ancestor);
            if candidate.0 > best.0 || (candidate.0 == best.0 && candidate.1 < best.1) {
                best = candidate;
            }
        }
    }

    in_progress.remove(&vertex);
    memo.insert(vertex, best);
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAMILY: [(u32, u32); 10] = [
        (1, 3),
        (2, 3),
        (3, 6),
        (5, 6),
        (5, 7),
        (4, 5),
        (4, 8),
        (8, 9),
        (11, 8),
        (10, 1),
    ];

    #[test]
    fn test_earliest_ancestor() {
        assert_eq!(earliest_ancestor(&FAMILY, 1), Some(10));
        assert_eq!(earliest_ancestor(&FAMILY, 2), None);
        assert_eq!(earliest_ancestor(&FAMILY, 3), Some(10));
        assert_eq!(earliest_ancestor(&FAMILY, 5), Some(4));
        assert_eq!(earliest_ancestor(&FAMILY, 7), Some(4));
        assert_eq!(earliest_ancestor(&FAMILY, 9), Some(4));
        assert_eq!(earliest_ancestor(&FAMILY, 11), None);
    }

    #[test]
    fn test_tie_goes_to_lowest_id() {
        // 8 has parents 4 and 11, both roots
        assert_eq!(earliest_ancestor(&FAMILY, 8), Some(4));
    }

    #[test]
    fn test_longest_chain_wins_over_nearest_root() {
        // 4 -> 3 directly, and 1 -> 2 -> 3
        let pairs = [(4, 3), (1, 2), (2, 3)];
        assert_eq!(earliest_ancestor(&pairs, 3), Some(1));
    }

    #[test]
    fn test_unknown_start() {
        assert_eq!(earliest_ancestor(&FAMILY, 42), None);
    }

    #[test]
    fn test_cycle_terminates() {
        let pairs = [(1, 2), (2, 1), (3, 1)];
        assert_eq!(earliest_ancestor(&pairs, 2), Some(3));
    }
}
