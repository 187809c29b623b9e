//! Huffman tree construction.
//!
//! The tree is built by repeatedly merging the two minimum nodes of an
//! [`OrderedList`]. Ties on frequency are broken by the representative
//! symbol (the minimum byte value among a node's descendants), which makes
//! the build deterministic: the decoder rebuilds the exact tree from the
//! frequency header alone, with no tree structure persisted.

use std::cmp::Ordering;

use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::ordered_list::OrderedList;

/// A node in the Huffman tree.
#[derive(Debug, Clone)]
pub enum HuffmanNode {
    /// A leaf holds one byte value and its frequency.
    Leaf { symbol: u8, freq: u64 },
    /// An internal node combines two subtrees. `symbol` is the minimum
    /// symbol among its descendants and only serves as the tie-break key.
    Internal {
        symbol: u8,
        freq: u64,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Returns the frequency of the node
    pub fn freq(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { freq, .. } => *freq,
            HuffmanNode::Internal { freq, .. } => *freq,
        }
    }

    /// Returns the representative symbol of the node
    pub fn symbol(&self) -> u8 {
        match self {
            HuffmanNode::Leaf { symbol, .. } => *symbol,
            HuffmanNode::Internal { symbol, .. } => *symbol,
        }
    }

    /// Returns true for leaf nodes
    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    fn key(&self) -> (u64, u8) {
        (self.freq(), self.symbol())
    }
}

impl PartialEq for HuffmanNode {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for HuffmanNode {}

impl Ord for HuffmanNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for HuffmanNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Builds the Huffman tree for all symbols with non-zero frequency.
///
/// Returns `Ok(None)` if the table is all-zero (empty source). A source
/// with a single distinct symbol yields a bare leaf as the root.
///
/// The merge loop pops the two minima `a` and `b` (so `a <= b` under the
/// `(freq, symbol)` order), attaches `a` on the left and `b` on the right,
/// and reinserts the combined node until one node remains.
pub fn build_huffman_tree(freqs: &FrequencyTable) -> Result<Option<Box<HuffmanNode>>> {
    let mut list = OrderedList::new();
    for (symbol, freq) in freqs.iter_nonzero() {
        list.add(Box::new(HuffmanNode::Leaf { symbol, freq }));
    }
    if list.is_empty() {
        return Ok(None);
    }
    loop {
        let first = list.pop_min()?;
        if list.is_empty() {
            return Ok(Some(first));
        }
        let second = list.pop_min()?;
        let merged = Box::new(HuffmanNode::Internal {
            symbol: first.symbol().min(second.symbol()),
            freq: first.freq() + second.freq(),
            left: first,
            right: second,
        });
        list.add(merged);
    }
}
