//! Text and binary codecs for [`Matrix`](crate::math::Matrix).
//!
//! Both formats losslessly round-trip shape and element values and
//! operate on caller-supplied streams.
pub mod binary;
pub mod text;

pub use binary::{encode_binary, read_binary, write_binary};
pub use text::{decode_text, encode_text, read_text, write_text};
