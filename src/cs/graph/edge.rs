use std::fmt;
use std::hash::{Hash, Hasher};

/// Integer edge weight. Negative weights are allowed.
pub type Weight = i64;

/// Represents an undirected, weighted edge between two labelled vertices.
///
/// `from` and `to` only record the orientation the edge was viewed from; equality and
/// hashing go through [`Edge::key`], so `A -- B [3]` and `B -- A [3]` are the same edge.
/// Edges that share endpoints but differ in weight stay distinct.
#[derive(Debug, Clone)]
pub struct Edge {
    from: String,
    to: String,
    weight: Weight,
}

impl Edge {
    pub fn new<A, B>(from: A, to: B, weight: Weight) -> Self
    where
        A: Into<String>,
        B: Into<String>,
    {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// The same edge viewed from the other endpoint.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
            weight: self.weight,
        }
    }

    /// Canonical identity: endpoints in lexicographic order, then the weight.
    pub fn key(&self) -> (&str, &str, Weight) {
        if self.from <= self.to {
            (self.from.as_str(), self.to.as_str(), self.weight)
        } else {
            (self.to.as_str(), self.from.as_str(), self.weight)
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {} [{}]", self.from, self.to, self.weight)
    }
}
