//! A module for all decoding needs.
use crate::dict::{Dictionary, Stats};
use crate::pack::{claim, PackReader};
use crate::prefix::Prefix;
use crate::{Code, LzwError};

#[cfg(feature = "alloc")]
use crate::alloc::vec::Vec;

/// A decoding session.
///
/// The decoder rebuilds the dictionary of the encoder from the codes alone. It must start from
/// the same seeded state the encoder started from, so `reset` it before each stream.
pub struct Decoder {
    dict: Dictionary,
}

impl Decoder {
    /// Create a decoder with a freshly seeded dictionary.
    pub fn new() -> Self {
        Decoder {
            dict: Dictionary::new(),
        }
    }

    /// Return to the seeded dictionary.
    pub fn reset(&mut self) {
        self.dict.reset();
    }

    /// Decode the packed stream `inp` into `out`, returning the number of bytes recovered.
    ///
    /// On error the content of `out` is unspecified. [`max_decoded_len`] gives a buffer size
    /// that always suffices.
    ///
    /// [`max_decoded_len`]: crate::max_decoded_len
    pub fn decode(&mut self, inp: &[u8], out: &mut [u8]) -> Result<usize, LzwError> {
        let result = self.decode_packed(inp, out);
        match &result {
            Ok(len) => tracing::trace!(consumed = inp.len(), written = len, "decoded"),
            Err(err) => tracing::debug!(%err, "decoding aborted"),
        }
        result
    }

    /// Decode the packed stream `inp` into a newly allocated buffer.
    #[cfg(feature = "alloc")]
    pub fn decode_to_vec(&mut self, inp: &[u8]) -> Result<Vec<u8>, LzwError> {
        let mut out = alloc::vec![0; crate::max_decoded_len(inp.len())];
        let len = self.decode(inp, &mut out)?;
        out.truncate(len);
        Ok(out)
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    pub fn stats(&self) -> Stats {
        self.dict.stats()
    }

    fn decode_packed(&mut self, inp: &[u8], mut out: &mut [u8]) -> Result<usize, LzwError> {
        let total = out.len();
        let mut reader = PackReader::new(inp);
        // The entry about to be learned, the previous sequence plus one byte.
        let mut candidate = Prefix::new();

        let mut prev = match reader.read_code() {
            Some(code) => code,
            None => return Ok(0),
        };

        if !self.dict.is_in_use(prev) {
            return Err(self.invalid(prev));
        }
        emit(&mut out, self.dict.entry_sequence(prev))?;

        while let Some(code) = reader.read_code() {
            candidate.assign(self.dict.entry_sequence(prev));

            if self.dict.is_in_use(code) {
                let seq = self.dict.entry_sequence(code);
                emit(&mut out, seq)?;
                let first = seq.first().copied().unwrap_or_default();

                // The encoder does not learn successors of a prefix at the length limit.
                if candidate.push(first) {
                    self.dict.grow(candidate.as_slice());
                }
            } else {
                // The encoder used the code it learned while emitting `prev`, so the sequence is
                // `prev` followed by its own first byte.
                let first = candidate.as_slice().first().copied().unwrap_or_default();
                if code != self.dict.next_code() || !candidate.push(first) {
                    return Err(self.invalid(code));
                }

                if self.dict.grow(candidate.as_slice()) != Some(code) {
                    return Err(self.invalid(code));
                }

                emit(&mut out, self.dict.entry_sequence(code))?;
            }

            prev = code;
        }

        if let Some(code) = reader.truncated_code() {
            return Err(self.invalid(code));
        }

        Ok(total - out.len())
    }

    fn invalid(&self, code: Code) -> LzwError {
        LzwError::InvalidCode {
            code,
            next: self.dict.next_code(),
        }
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Decoder::new()
    }
}

fn emit(out: &mut &mut [u8], seq: &[u8]) -> Result<(), LzwError> {
    claim(out, seq.len())?.copy_from_slice(seq);
    Ok(())
}
