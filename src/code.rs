//! Code table generation.
//!
//! A depth-first walk of the Huffman tree assigns each leaf the bit path
//! taken to reach it: `0` for a left edge, `1` for a right edge. Because
//! every symbol sits at a leaf, no code can be a prefix of another.
//!
//! A tree consisting of a single leaf has an empty path; that symbol is
//! assigned the code `"0"` by convention, so the encoder still emits one
//! bit per occurrence and the decoder consumes one bit per symbol.

use crate::frequency::SYMBOL_COUNT;
use crate::tree::HuffmanNode;

/// Per-symbol Huffman codes as strings of `'0'` and `'1'`.
///
/// Symbols absent from the tree keep an empty code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<String>,
}

impl CodeTable {
    /// Returns the code for a symbol; empty if the symbol is unused
    pub fn code(&self, symbol: u8) -> &str {
        &self.codes[symbol as usize]
    }

    /// Iterates over `(symbol, code)` pairs with non-empty codes
    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter(|(_, code)| !code.is_empty())
            .map(|(symbol, code)| (symbol as u8, code.as_str()))
    }
}

/// Builds the code table for a tree by walking it depth-first
pub fn build_code_table(root: &HuffmanNode) -> CodeTable {
    let mut codes = vec![String::new(); SYMBOL_COUNT];
    assign_codes(root, String::new(), &mut codes);
    CodeTable { codes }
}

fn assign_codes(node: &HuffmanNode, path: String, codes: &mut [String]) {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            codes[*symbol as usize] = if path.is_empty() {
                "0".to_string()
            } else {
                path
            };
        }
        HuffmanNode::Internal { left, right, .. } => {
            let mut left_path = path.clone();
            left_path.push('0');
            assign_codes(left, left_path, codes);
            let mut right_path = path;
            right_path.push('1');
            assign_codes(right, right_path, codes);
        }
    }
}
