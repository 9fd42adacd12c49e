//! # LZW with a fixed dictionary and packed 12-bit codes
//!
//! This crate provides an `Encoder` and a `Decoder` for a fixed-capacity flavour of LZW. The
//! dictionary never grows past 4096 codes and stores all of its sequences in one statically
//! sized arena, so neither side allocates. Codes are always 12 bits wide and every two codes
//! are packed into three bytes:
//!
//! ```text
//!  byte0: A[11..4]
//!  byte1: A[3..0] << 4 | B[11..8]
//!  byte2: B[7..0]
//! ```
//!
//! There is no clear code or end code. A stream with an odd number of codes ends after the
//! first byte of its last group, followed by one extra byte holding the low nibble of the last
//! code only if that nibble is nonzero.
//!
//! Both sides start from the same seeded dictionary (codes `0..=255` are the single bytes)
//! and must be reset before every session, otherwise their code assignments drift apart.
//!
//! Exemplary use:
//!
//! ```
//! use lzw12::{decode::Decoder, encode::Encoder};
//!
//! let data = b"TOBEORNOTTOBEORTOBEORNOT";
//! let mut compressed = [0u8; 64];
//! let mut decompressed = [0u8; 64];
//!
//! let mut enc = Encoder::new();
//! let packed = enc.encode(data, &mut compressed).unwrap();
//!
//! let mut dec = Decoder::new();
//! let len = dec.decode(&compressed[..packed], &mut decompressed).unwrap();
//! assert_eq!(&decompressed[..len], &data[..]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

/// The width of every code in the packed stream.
pub const MAX_CODESIZE: u8 = 12;
/// The number of codes the dictionary can hold.
pub const MAX_ENTRIES: usize = 1 << MAX_CODESIZE as usize;
/// The longest sequence a single dictionary entry may hold.
pub const MAX_SEQ: usize = 50;
/// The capacity of the arena backing all learned sequences.
pub const MAX_SEQ_BUFF: usize = 4000;
/// The first code assigned during a session, all lower codes are single bytes.
pub const FIRST_FREE_CODE: Code = 256;

/// Alias for a LZW code point
pub type Code = u16;

pub mod arena;
pub mod decode;
pub mod dict;
pub mod encode;
mod error;
mod pack;
mod prefix;

pub use crate::error::LzwError;

/// The largest packed size `encode` can produce for an input of `len` bytes.
///
/// Every input byte yields at most one code and an odd trailing code occupies two bytes.
pub const fn max_encoded_len(len: usize) -> usize {
    (3 * len + 1) / 2
}

/// The largest output `decode` can produce from `len` packed bytes.
pub const fn max_decoded_len(len: usize) -> usize {
    let codes = 2 * (len / 3) + if len % 3 == 0 { 0 } else { 1 };
    codes * MAX_SEQ
}

#[cfg(test)]
mod tests {
    use super::{max_decoded_len, max_encoded_len, MAX_SEQ};

    #[test]
    fn encoded_bound() {
        assert_eq!(max_encoded_len(0), 0);
        assert_eq!(max_encoded_len(1), 2);
        assert_eq!(max_encoded_len(2), 3);
        assert_eq!(max_encoded_len(3), 5);
        assert_eq!(max_encoded_len(4), 6);
    }

    #[test]
    fn decoded_bound() {
        assert_eq!(max_decoded_len(0), 0);
        assert_eq!(max_decoded_len(1), MAX_SEQ);
        assert_eq!(max_decoded_len(2), MAX_SEQ);
        assert_eq!(max_decoded_len(3), 2 * MAX_SEQ);
        assert_eq!(max_decoded_len(4), 3 * MAX_SEQ);
    }
}
