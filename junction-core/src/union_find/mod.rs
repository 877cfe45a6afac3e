//! Union-find (disjoint set union) over point indices.
//!
//! Connecting junction boxes merges their circuits. This module tracks which
//! circuit every point belongs to, how large each circuit is, and how many
//! circuits remain. `find` compresses paths iteratively and `union` attaches
//! the lower-rank root beneath the higher-rank one.

/// Partition of `0..len` into disjoint components.
///
/// Indices outside `0..len` are caller bugs: every method taking an index
/// panics when given one.
///
/// # Examples
/// ```
/// use junction_core::DisjointSet;
///
/// let mut set = DisjointSet::new(4);
/// assert!(set.union(0, 1));
/// assert!(set.union(2, 1));
/// assert!(!set.union(0, 2));
///
/// let root = set.find(2);
/// assert_eq!(set.component_size(root), 3);
/// assert_eq!(set.component_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    size: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// Creates `len` singleton components.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            size: vec![1; len],
            components: len,
        }
    }

    /// Returns the number of tracked indices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when no indices are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of components currently in the partition.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the root of `node`, re-pointing every node on the path
    /// directly at it.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != root {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// Returns `false` without mutating anything when both already share a
    /// component. On equal ranks the root of `right` is attached beneath the
    /// root of `left`.
    ///
    /// # Panics
    /// Panics when either index is `>= self.len()`.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let mut survivor = self.find(left);
        let mut absorbed = self.find(right);
        if survivor == absorbed {
            return false;
        }

        let survivor_rank = self.rank[survivor];
        let absorbed_rank = self.rank[absorbed];
        if survivor_rank < absorbed_rank {
            std::mem::swap(&mut survivor, &mut absorbed);
        }

        self.parent[absorbed] = survivor;
        self.size[survivor] += self.size[absorbed];
        if survivor_rank == absorbed_rank {
            self.rank[survivor] = survivor_rank.saturating_add(1);
        }
        self.components -= 1;
        true
    }

    /// Returns the size recorded at `node`.
    ///
    /// Only roots carry an up-to-date size; call [`Self::find`] first when
    /// `node` may not be a root.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
    #[must_use]
    pub fn component_size(&self, node: usize) -> usize {
        self.size[node]
    }

    /// Returns `true` when `node` is the root of its component.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
    #[must_use]
    pub fn is_root(&self, node: usize) -> bool {
        self.parent[node] == node
    }

    /// Iterates the current roots in ascending index order.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.parent
            .iter()
            .enumerate()
            .filter_map(|(node, &parent)| (node == parent).then_some(node))
    }

    /// Returns the size of every current component in root index order.
    #[must_use]
    pub fn component_sizes(&self) -> Vec<usize> {
        self.roots().map(|root| self.size[root]).collect()
    }

    #[cfg(test)]
    pub(crate) fn rank_of(&self, node: usize) -> u8 {
        self.rank[node]
    }

    #[cfg(test)]
    pub(crate) fn parent_of(&self, node: usize) -> usize {
        self.parent[node]
    }
}
