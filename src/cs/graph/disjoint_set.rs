use std::collections::HashMap;

/// Disjoint-set (union-find) over vertex labels, used by Kruskal for cycle detection.
///
/// Uses path compression and union by rank. Each call to [`find`](Self::find),
/// [`connected`](Self::connected) and [`union`](Self::union) adds to an operation
/// counter that is only used for reporting.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    labels: Vec<String>,
    index: HashMap<String, usize>,
    parent: Vec<usize>,
    rank: Vec<usize>,
    operations: u64,
}

impl DisjointSet {
    /// Creates one singleton set of rank 0 per label. Repeated labels are ignored.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self {
            labels: Vec::new(),
            index: HashMap::new(),
            parent: Vec::new(),
            rank: Vec::new(),
            operations: 0,
        };
        for label in labels {
            let label = label.into();
            if set.index.contains_key(&label) {
                continue;
            }
            let i = set.labels.len();
            set.index.insert(label.clone(), i);
            set.labels.push(label);
            set.parent.push(i);
            set.rank.push(0);
        }
        set
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Operations counted so far.
    pub fn operations(&self) -> u64 {
        self.operations
    }

    /// Rank of the tree rooted at `v`'s slot, or `None` if `v` is unknown.
    pub fn rank(&self, v: &str) -> Option<usize> {
        self.index.get(v).map(|&i| self.rank[i])
    }

    /// Finds the representative of the set containing `v`, compressing the path.
    ///
    /// Returns `None` if `v` was never added.
    pub fn find(&mut self, v: &str) -> Option<&str> {
        let i = *self.index.get(v)?;
        let root = self.find_root(i);
        Some(&self.labels[root])
    }

    /// Returns true if `u` and `v` are known and belong to the same set.
    pub fn connected(&mut self, u: &str, v: &str) -> bool {
        self.operations += 1;
        match (self.index.get(u).copied(), self.index.get(v).copied()) {
            (Some(a), Some(b)) => self.find_root(a) == self.find_root(b),
            _ => false,
        }
    }

    /// Unites the sets containing `u` and `v`.
    ///
    /// The lower-rank root is attached below the higher-rank one. On a tie the root of
    /// `v` goes below the root of `u` and `u`'s rank grows by one.
    /// Returns `true` if a union actually occurred (i.e., they were disjoint).
    pub fn union(&mut self, u: &str, v: &str) -> bool {
        let (a, b) = match (self.index.get(u).copied(), self.index.get(v).copied()) {
            (Some(a), Some(b)) => (a, b),
            _ => return false,
        };
        let ra = self.find_root(a);
        let rb = self.find_root(b);
        self.operations += 1;

        if ra == rb {
            return false;
        }

        self.operations += 1;
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        self.operations += 1;
        true
    }

    // Two passes instead of recursion so long chains cannot overflow the stack. Counts
    // one operation per node visited and one per node re-pointed at the root.
    fn find_root(&mut self, x: usize) -> usize {
        let mut root = x;
        self.operations += 1;
        while self.parent[root] != root {
            root = self.parent[root];
            self.operations += 1;
        }

        let mut node = x;
        while self.parent[node] != node {
            let next = self.parent[node];
            self.parent[node] = root;
            self.operations += 1;
            node = next;
        }
        root
    }
}
