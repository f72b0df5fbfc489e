//! Character trie with per-node hit lists for prefix and substring search.
//!
//! Every inserted text is walked from the root, one folded character per
//! edge, and the caller-supplied id is appended to the hit list of every node
//! on that walk. A node reached after `k` characters therefore lists each
//! text whose first `k` folded characters spell the node's path.
//!
//! Substring queries re-run a prefix descent from every node in breadth-first
//! order (see [`Trie::substring_hits`]), so no suffix structure is needed.
//!
//! ## Complexity
//! - [`Trie::build`] is `O(c)` time and space for `c` folded characters in
//!   the input.
//! - [`Trie::descend`] is `O(m)` for a query of `m` folded characters.
//! - [`Trie::substring_hits`] is lazy; each visited node costs `O(m)` for the
//!   descent attempt plus the hits it yields.
//!
//! ## Case folding
//! Characters are folded with [`char::to_lowercase`], which may expand one
//! scalar value into several. Insertion and lookup apply the same fold, so
//! matching is consistent even for expanding characters.
//!
//! ## Thread Safety
//! The trie has no interior mutability and is never mutated after
//! [`Trie::build`]; share it freely behind an `Arc`.

use std::collections::{BTreeMap, VecDeque};

/// Index of a node inside a [`Trie`].
pub type NodeId = usize;

/// Identifier of the root node.
pub const ROOT: NodeId = 0;

/// Folds `text` into the character sequence used for trie edges.
pub fn fold(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().flat_map(char::to_lowercase)
}

/// Returns the folded form of `text` as an owned string.
pub fn fold_string(text: &str) -> String {
    fold(text).collect()
}

/// A character trie whose nodes record the ids of the texts passing through
/// them.
///
/// Nodes live in a `Vec<Node>` and reference children by index. Children are
/// kept in a `BTreeMap`, so traversal order is ascending by character and
/// fully deterministic.
///
/// # Examples
///
/// ```
/// use suggest_common::collections::Trie;
///
/// let trie = Trie::build(["Bamako", "Addis_Ababa"]);
///
/// assert_eq!(trie.prefix_hits("BA"), &[0]);
/// assert_eq!(trie.substring_hits("aba").next(), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    len: usize,
}

#[derive(Debug, Clone, Default)]
struct Node {
    children: BTreeMap<char, NodeId>,
    hits: Vec<usize>,
}

impl Trie {
    /// Builds a trie over `texts`, using each text's position as its id.
    pub fn build<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::default();
        for (id, text) in texts.into_iter().enumerate() {
            trie.insert(text.as_ref(), id);
        }
        trie
    }

    fn insert(&mut self, text: &str, id: usize) {
        let mut current = ROOT;

        for ch in fold(text) {
            let next = match self.nodes[current].children.get(&ch) {
                Some(&idx) => idx,
                None => {
                    self.nodes.push(Node::default());
                    let idx = self.nodes.len() - 1;
                    self.nodes[current].children.insert(ch, idx);
                    idx
                }
            };
            self.nodes[next].hits.push(id);
            current = next;
        }

        self.len += 1;
    }

    /// Number of texts the trie was built from.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the trie was built from no texts.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Hit list of `node`, in insertion order.
    ///
    /// Returns an empty slice for an unknown node.
    pub fn hits(&self, node: NodeId) -> &[usize] {
        self.nodes.get(node).map(|n| n.hits.as_slice()).unwrap_or_default()
    }

    /// Follows the folded characters of `query` starting at `from`.
    ///
    /// Returns the node reached after consuming every character, or `None`
    /// as soon as an edge is missing.
    pub fn descend(&self, from: NodeId, query: &str) -> Option<NodeId> {
        let mut current = from;
        for ch in fold(query) {
            current = *self.nodes.get(current)?.children.get(&ch)?;
        }
        Some(current)
    }

    fn descend_folded(&self, from: NodeId, query: &[char]) -> Option<NodeId> {
        let mut current = from;
        for ch in query {
            current = *self.nodes[current].children.get(ch)?;
        }
        Some(current)
    }

    /// Ids of the texts that start with `prefix` (case-insensitive).
    pub fn prefix_hits(&self, prefix: &str) -> &[usize] {
        self.descend(ROOT, prefix).map(|node| self.hits(node)).unwrap_or_default()
    }

    /// Lazily yields the ids of texts containing `query` anywhere.
    ///
    /// Nodes are taken from a FIFO queue seeded with the root. For each
    /// dequeued node the query is descended from it; on success the target's
    /// hits are yielded in order. The node's children are then queued, which
    /// makes every node a candidate start offset, shallowest first.
    ///
    /// Ids may repeat across different start nodes; callers deduplicate.
    /// Stop consuming the iterator to cut the traversal short.
    pub fn substring_hits(&self, query: &str) -> SubstringHits<'_> {
        SubstringHits {
            trie: self,
            query: fold(query).collect(),
            queue: VecDeque::from([ROOT]),
            pending: &[],
        }
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self { nodes: vec![Node::default()], len: 0 }
    }
}

/// Iterator returned by [`Trie::substring_hits`].
#[derive(Debug)]
pub struct SubstringHits<'a> {
    trie: &'a Trie,
    query: Vec<char>,
    queue: VecDeque<NodeId>,
    pending: &'a [usize],
}

impl Iterator for SubstringHits<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let trie = self.trie;
        loop {
            if let Some((&id, rest)) = self.pending.split_first() {
                self.pending = rest;
                return Some(id);
            }

            let node = self.queue.pop_front()?;
            if let Some(target) = trie.descend_folded(node, &self.query) {
                self.pending = &trie.nodes[target].hits;
            }
            self.queue.extend(trie.nodes[node].children.values().copied());
        }
    }
}
