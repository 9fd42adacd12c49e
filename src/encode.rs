//! A module for all encoding needs.
use crate::dict::{Dictionary, Stats};
use crate::pack::PackWriter;
use crate::prefix::Prefix;
use crate::{Code, LzwError};

#[cfg(feature = "alloc")]
use crate::alloc::vec::Vec;

/// An encoding session.
///
/// The encoder owns its dictionary. Consecutive calls to `encode` continue with the dictionary
/// the previous call left behind, call `reset` in between to start independent streams.
pub struct Encoder {
    /// The dictionary learned from the input so far.
    dict: Dictionary,
}

impl Encoder {
    /// Create an encoder with a freshly seeded dictionary.
    pub fn new() -> Self {
        Encoder {
            dict: Dictionary::new(),
        }
    }

    /// Return to the seeded dictionary.
    pub fn reset(&mut self) {
        self.dict.reset();
    }

    /// Encode all of `inp` into `out`, returning the number of packed bytes.
    ///
    /// On error the content of `out` is unspecified and the dictionary has learned part of the
    /// input, so the session should be reset before retrying with a larger buffer.
    /// [`max_encoded_len`] gives a buffer size that always suffices.
    ///
    /// [`max_encoded_len`]: crate::max_encoded_len
    pub fn encode(&mut self, inp: &[u8], out: &mut [u8]) -> Result<usize, LzwError> {
        let result = self.encode_packed(inp, out);
        match &result {
            Ok(len) => tracing::trace!(consumed = inp.len(), written = len, "encoded"),
            Err(err) => tracing::debug!(%err, "encoding aborted"),
        }
        result
    }

    /// Encode all of `inp` into a newly allocated buffer.
    #[cfg(feature = "alloc")]
    pub fn encode_to_vec(&mut self, inp: &[u8]) -> Result<Vec<u8>, LzwError> {
        let mut out = alloc::vec![0; crate::max_encoded_len(inp.len())];
        let len = self.encode(inp, &mut out)?;
        out.truncate(len);
        Ok(out)
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    pub fn stats(&self) -> Stats {
        self.dict.stats()
    }

    fn encode_packed(&mut self, inp: &[u8], out: &mut [u8]) -> Result<usize, LzwError> {
        let mut writer = PackWriter::new(out);
        // The input bytes matched since the last emitted code.
        let mut prefix = Prefix::new();
        // The code of the bytes in `prefix`.
        let mut current: Option<Code> = None;

        for &byte in inp {
            let extended = prefix.push(byte);
            if extended {
                if let Some(code) = self.dict.lookup_code(prefix.as_slice()) {
                    current = Some(code);
                    continue;
                }
            }

            // Any single byte is known, so `current` is set after the first byte.
            if let Some(code) = current {
                writer.write_code(code)?;
            }

            // A prefix at the length limit can not be learned with its successor.
            if extended {
                self.dict.grow(prefix.as_slice());
            }

            prefix.clear();
            prefix.push(byte);
            current = Some(Code::from(byte));
        }

        if let Some(code) = current {
            writer.write_code(code)?;
        }

        writer.finish()
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Encoder::new()
    }
}
