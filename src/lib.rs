pub mod bitio;
pub mod code;
pub mod codec;
pub mod error;
pub mod frequency;
pub mod header;
pub mod ordered_list;
pub mod tree;

pub use codec::{compressed_output_path, huffman_decode, huffman_encode};
pub use error::{Error, Result};
