//! Directed graph with breadth- and depth-first traversals.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use log::warn;

use super::GraphError;

/// Bound for vertex labels.
pub trait Vertex: Copy + Ord + Hash + Debug {}

impl<T: Copy + Ord + Hash + Debug> Vertex for T {}

/// Directed graph stored as an adjacency map.
///
/// Neighbors are kept sorted, so every traversal visits them in ascending
/// order and results are reproducible.
#[derive(Clone, Debug)]
pub struct Digraph<V: Vertex> {
    vertices: BTreeMap<V, BTreeSet<V>>,
}

impl<V: Vertex> Default for Digraph<V> {
    fn default() -> Self {
        Self {
            vertices: BTreeMap::new(),
        }
    }
}

impl<V: Vertex> Digraph<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex. Returns `false` if it already existed.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.vertices.contains_key(&vertex) {
            warn!("Vertex {:?} already exists", vertex);
            return false;
        }
        self.vertices.insert(vertex, BTreeSet::new());
        true
    }

    /// Add a directed edge `from -> to`.
    pub fn add_edge(&mut self, from: V, to: V) -> Result<(), GraphError> {
        self.require(to)?;
        self.vertices
            .get_mut(&from)
            .ok_or_else(|| GraphError::missing(from))?
            .insert(to);
        Ok(())
    }

    /// Add edges in both directions.
    pub fn add_undirected_edge(&mut self, a: V, b: V) -> Result<(), GraphError> {
        self.require(a)?;
        self.require(b)?;
        self.add_edge(a, b)?;
        self.add_edge(b, a)
    }

    /// Does the graph hold this vertex?
    pub fn contains(&self, vertex: V) -> bool {
        self.vertices.contains_key(&vertex)
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Outgoing neighbors of a vertex, ascending.
    pub fn neighbors(&self, vertex: V) -> Result<&BTreeSet<V>, GraphError> {
        self.vertices
            .get(&vertex)
            .ok_or_else(|| GraphError::missing(vertex))
    }

    /// Vertices reachable from `start`, in breadth-first order.
    pub fn bft(&self, start: V) -> Result<Vec<V>, GraphError> {
        self.require(start)?;
        let mut order = Vec::new();
        let mut visited = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);

        while let Some(vertex) = queue.pop_front() {
            order.push(vertex);
            for &next in self.neighbors(vertex)? {
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        Ok(order)
    }

    /// Vertices reachable from `start`, in depth-first order (stack based).
    pub fn dft(&self, start: V) -> Result<Vec<V>, GraphError> {
        self.require(start)?;
        let mut order = Vec::new();
        let mut visited = HashSet::new();
        let mut stack = vec![start];

        while let Some(vertex) = stack.pop() {
            if !visited.insert(vertex) {
                continue;
            }
            order.push(vertex);
            // Reversed so the smallest neighbor is popped first
            for &next in self.neighbors(vertex)?.iter().rev() {
                if !visited.contains(&next) {
                    stack.push(next);
                }
            }
        }
        Ok(order)
    }

    /// Same order as [`dft`](Self::dft), computed recursively.
    pub fn dft_recursive(&self, start: V) -> Result<Vec<V>, GraphError> {
        self.require(start)?;
        let mut order = Vec::new();
        let mut visited = HashSet::new();
        self.dft_visit(start, &mut visited, &mut order);
        Ok(order)
    }

    fn dft_visit(&self, vertex: V, visited: &mut HashSet<V>, order: &mut Vec<V>) {
        if !visited.insert(vertex) {
            return;
        }
        order.push(vertex);
        if let Some(neighbors) = self.vertices.get(&vertex) {
            for &next in neighbors {
                self.dft_visit(next, visited, order);
            }
        }
    }

    /// Shortest path from `start` to `dest`, both ends included.
    pub fn bfs(&self, start: V, dest: V) -> Option<Vec<V>> {
        if !self.contains(start) || !self.contains(dest) {
            return None;
        }
        let mut parents: HashMap<V, V> = HashMap::new();
        let mut visited = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);

        while let Some(vertex) = queue.pop_front() {
            if vertex == dest {
                return Some(rebuild(&parents, start, dest));
            }
            for &next in self.vertices.get(&vertex)? {
                if visited.insert(next) {
                    parents.insert(next, vertex);
                    queue.push_back(next);
                }
            }
        }
        None
    }

    /// Some path from `start` to `dest`, found depth-first. Not necessarily
    /// the shortest.
    pub fn dfs(&self, start: V, dest: V) -> Option<Vec<V>> {
        if !self.contains(start) || !self.contains(dest) {
            return None;
        }
        let mut visited = HashSet::new();
        let mut stack = vec![vec![start]];

        while let Some(path) = stack.pop() {
            let vertex = *path.last()?;
            if vertex == dest {
                return Some(path);
            }
            if !visited.insert(vertex) {
                continue;
            }
            for &next in self.vertices.get(&vertex)?.iter().rev() {
                if !visited.contains(&next) {
                    let mut extended = path.clone();
                    extended.push(next);
                    stack.push(extended);
                }
            }
        }
        None
    }

    /// Recursive depth-first path search.
    pub fn dfs_recursive(&self, start: V, dest: V) -> Option<Vec<V>> {
        if !self.contains(start) || !self.contains(dest) {
            return None;
        }
        let mut visited = HashSet::new();
        let mut path = Vec::new();
        self.dfs_visit(start, dest, &mut visited, &mut path)
            .then_some(path)
    }

    fn dfs_visit(&self, vertex: V, dest: V, visited: &mut HashSet<V>, path: &mut Vec<V>) -> bool {
        if !visited.insert(vertex) {
            return false;
        }
        path.push(vertex);
        if vertex == dest {
            return true;
        }
        if let Some(neighbors) = self.vertices.get(&vertex) {
            for &next in neighbors {
                if self.dfs_visit(next, dest, visited, path) {
                    return true;
                }
            }
        }
        path.pop();
        false
    }

    fn require(&self, vertex: V) -> Result<(), GraphError> {
        if self.contains(vertex) {
            Ok(())
        } else {
            Err(GraphError::missing(vertex))
        }
    }
}

fn rebuild<V: Vertex>(parents: &HashMap<V, V>, start: V, dest: V) -> Vec<V> {
    let mut path = vec![dest];
    let mut vertex = dest;
    while vertex != start {
        match parents.get(&vertex) {
            Some(&parent) => {
                path.push(parent);
                vertex = parent;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
