//! The append-only backing store for dictionary sequences.
use crate::MAX_SEQ_BUFF;

/// A fixed region from which dictionary entries carve out their byte sequences.
///
/// Allocation bumps a cursor and nothing is ever freed individually. Only `reset` reclaims
/// space, which invalidates every span handed out before.
pub struct SequenceArena {
    buffer: [u8; MAX_SEQ_BUFF],
    cursor: usize,
}

/// The location of one sequence inside a `SequenceArena`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    offset: u16,
    len: u8,
}

impl SequenceArena {
    pub const fn new() -> Self {
        SequenceArena {
            buffer: [0; MAX_SEQ_BUFF],
            cursor: 0,
        }
    }

    /// Copy `seq` into the arena.
    ///
    /// Returns `None` without touching the arena when fewer than `seq.len()` bytes remain or the
    /// sequence is longer than a span can describe.
    pub fn alloc(&mut self, seq: &[u8]) -> Option<Span> {
        if seq.len() > self.remaining() || seq.len() > usize::from(u8::MAX) {
            return None;
        }

        let start = self.cursor;
        self.buffer[start..start + seq.len()].copy_from_slice(seq);
        self.cursor += seq.len();

        Some(Span {
            offset: start as u16,
            len: seq.len() as u8,
        })
    }

    /// The bytes of a previously allocated span.
    pub fn get(&self, span: Span) -> &[u8] {
        let start = usize::from(span.offset);
        &self.buffer[start..start + usize::from(span.len)]
    }

    /// Bytes consumed since the last reset.
    pub fn used(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> usize {
        MAX_SEQ_BUFF - self.cursor
    }

    pub fn capacity(&self) -> usize {
        MAX_SEQ_BUFF
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

impl Default for SequenceArena {
    fn default() -> Self {
        SequenceArena::new()
    }
}

#[cfg(test)]
mod tests {
    use super::SequenceArena;
    use crate::MAX_SEQ_BUFF;

    #[test]
    fn spans_are_stable() {
        let mut arena = SequenceArena::new();
        let first = arena.alloc(b"abc").unwrap();
        let second = arena.alloc(b"de").unwrap();

        assert_eq!(arena.get(first), b"abc");
        assert_eq!(arena.get(second), b"de");
        assert_eq!(arena.used(), 5);
        assert_eq!(arena.remaining(), MAX_SEQ_BUFF - 5);
    }

    #[test]
    fn exhausted_arena_refuses() {
        let mut arena = SequenceArena::new();
        let chunk = [7u8; 200];
        for _ in 0..MAX_SEQ_BUFF / chunk.len() {
            assert!(arena.alloc(&chunk).is_some());
        }

        assert_eq!(arena.remaining(), 0);
        assert!(arena.alloc(b"x").is_none());
        assert_eq!(arena.used(), MAX_SEQ_BUFF);
    }

    #[test]
    fn reset_reclaims_everything() {
        let mut arena = SequenceArena::new();
        arena.alloc(b"hello").unwrap();
        arena.reset();
        assert_eq!(arena.used(), 0);

        let span = arena.alloc(b"xy").unwrap();
        assert_eq!(arena.get(span), b"xy");
    }
}
