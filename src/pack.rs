//! Packing of 12-bit codes, two codes to three bytes.
use crate::{Code, LzwError, MAX_CODESIZE};

/// Split `len` bytes off the front of `out`.
pub(crate) fn claim<'o>(out: &mut &'o mut [u8], len: usize) -> Result<&'o mut [u8], LzwError> {
    if out.len() < len {
        return Err(LzwError::CapacityExceeded {
            required: len,
            remaining: out.len(),
        });
    }

    let (head, tail) = core::mem::take(out).split_at_mut(len);
    *out = tail;
    Ok(head)
}

/// Writes codes into a caller provided buffer.
pub(crate) struct PackWriter<'o> {
    out: &'o mut [u8],
    written: usize,
    /// The low nibble of the first code of an unfinished pair, already in the high position.
    carry: Option<u8>,
}

/// Reads codes back from a packed byte stream.
pub(crate) struct PackReader<'i> {
    inp: &'i [u8],
    /// The low nibble of the middle byte, once the first code of a pair has been read.
    carry: Option<u8>,
}

impl<'o> PackWriter<'o> {
    pub(crate) fn new(out: &'o mut [u8]) -> Self {
        PackWriter {
            out,
            written: 0,
            carry: None,
        }
    }

    /// Append one code.
    ///
    /// The first code of a pair produces one byte, the second produces the remaining two.
    pub(crate) fn write_code(&mut self, code: Code) -> Result<(), LzwError> {
        debug_assert!(code < 1 << MAX_CODESIZE);

        match self.carry {
            None => {
                let bytes = claim(&mut self.out, 1)?;
                bytes[0] = (code >> 4) as u8;
                self.carry = Some(((code & 0xf) << 4) as u8);
                self.written += 1;
            }
            Some(carry) => {
                let bytes = claim(&mut self.out, 2)?;
                bytes[0] = carry | (code >> 8) as u8;
                bytes[1] = (code & 0xff) as u8;
                self.carry = None;
                self.written += 2;
            }
        }

        Ok(())
    }

    /// Terminate the stream and return the number of bytes written.
    ///
    /// A pending nibble is only materialized, as the first byte a code 0 would produce, when it
    /// is nonzero. The reader substitutes a missing byte with zero.
    pub(crate) fn finish(mut self) -> Result<usize, LzwError> {
        if let Some(carry) = self.carry.take() {
            if carry != 0 {
                let bytes = claim(&mut self.out, 1)?;
                bytes[0] = carry;
                self.written += 1;
            }
        }

        Ok(self.written)
    }
}

impl<'i> PackReader<'i> {
    pub(crate) fn new(inp: &'i [u8]) -> Self {
        PackReader { inp, carry: None }
    }

    /// The next code, or `None` once the stream is exhausted.
    pub(crate) fn read_code(&mut self) -> Option<Code> {
        match self.carry {
            Some(carry) => {
                let (&low, rest) = self.inp.split_first()?;
                self.inp = rest;
                self.carry = None;
                Some(Code::from(carry) << 8 | Code::from(low))
            }
            None => {
                let (&high, rest) = self.inp.split_first()?;
                let (mid, rest) = match rest.split_first() {
                    Some((&mid, rest)) => (mid, rest),
                    None => (0, rest),
                };
                self.inp = rest;
                self.carry = Some(mid & 0xf);
                Some(Code::from(high) << 4 | Code::from(mid >> 4))
            }
        }
    }

    /// The start of a code cut off by the end of the stream.
    ///
    /// The writer never leaves a nonzero nibble without the byte completing its code, so a
    /// stream for which this returns `Some` is malformed.
    pub(crate) fn truncated_code(&self) -> Option<Code> {
        match self.carry {
            Some(carry) if carry != 0 && self.inp.is_empty() => Some(Code::from(carry) << 8),
            _ => None,
        }
    }
}
