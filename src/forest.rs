//! Disjoint-set forest used while carving the maze

/// Union-find over chamber indices `0..len`
///
/// Uses path compression on lookup and union by rank.
#[derive(Debug, Clone)]
pub struct DisjointForest {
    parent: Vec<usize>,
    rank: Vec<u8>,
    trees: usize,
}

impl DisjointForest {
    /// Forest of `len` singleton trees
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            trees: len,
        }
    }

    /// Number of separate trees left
    pub fn tree_count(&self) -> usize {
        self.trees
    }

    /// Root of the tree that `node` belongs to
    pub fn find(&mut self, node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Compress: point everything on the way directly at the root
        let mut current = node;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merge the trees of `a` and `b`
    ///
    /// Returns `false` if they already were in the same tree.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (root_a, root_b) = (self.find(a), self.find(b));
        if root_a == root_b {
            return false;
        }

        let (high, low) = if self.rank[root_a] >= self.rank[root_b] {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        self.parent[low] = high;
        if self.rank[high] == self.rank[low] {
            self.rank[high] += 1;
        }
        self.trees -= 1;
        true
    }
}
