use crate::MAX_SEQ;

/// The scratch sequence matched so far, bounded by the longest possible entry.
pub(crate) struct Prefix {
    bytes: [u8; MAX_SEQ],
    len: usize,
}

impl Prefix {
    pub(crate) const fn new() -> Self {
        Prefix {
            bytes: [0; MAX_SEQ],
            len: 0,
        }
    }

    /// Append a byte, returns `false` if the prefix is already at `MAX_SEQ`.
    pub(crate) fn push(&mut self, byte: u8) -> bool {
        if self.is_full() {
            return false;
        }

        self.bytes[self.len] = byte;
        self.len += 1;
        true
    }

    /// Replace the contents with a copy of `seq`.
    ///
    /// Sequences handed out by the dictionary are never longer than `MAX_SEQ`.
    pub(crate) fn assign(&mut self, seq: &[u8]) {
        debug_assert!(seq.len() <= MAX_SEQ);
        self.bytes[..seq.len()].copy_from_slice(seq);
        self.len = seq.len();
    }

    pub(crate) fn clear(&mut self) {
        self.len = 0;
    }

    pub(crate) fn is_full(&self) -> bool {
        self.len == MAX_SEQ
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}
