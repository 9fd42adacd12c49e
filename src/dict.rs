//! The code table shared in structure, but never in state, by encoder and decoder.
use core::fmt;

use crate::arena::{SequenceArena, Span};
use crate::{Code, FIRST_FREE_CODE, MAX_ENTRIES, MAX_SEQ};

/// The single byte sequences backing the seeded codes.
static IDENTITY: [u8; 256] = {
    let mut table = [0; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = i as u8;
        i += 1;
    }
    table
};

/// The length of the shortest sequence the codec ever learns, a known prefix plus one byte.
const MIN_LEARNED: usize = 2;

/// Whether a dictionary still accepts new entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Growth {
    /// New sequences are assigned the next free code.
    Growing,
    /// Code space ran out or the arena can not hold even the shortest sequence. Existing codes
    /// stay usable until the next reset.
    Frozen,
}

/// A fixed-capacity table from codes to byte sequences.
///
/// Codes `0..=255` always map to the byte of the same value. Learned sequences are assigned
/// ascending codes from 256 on and are never changed or removed before `reset`. All learned
/// bytes live in an embedded `SequenceArena`, so the dictionary never allocates.
///
/// Lookups of learned sequences scan linearly over the assigned codes.
pub struct Dictionary {
    entries: [Entry; MAX_ENTRIES],
    next_code: Code,
    arena: SequenceArena,
    growth: Growth,
}

#[derive(Clone, Copy, Default)]
struct Entry {
    span: Span,
    in_use: bool,
}

/// A snapshot of how much of a dictionary is in use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stats {
    /// Assigned codes, including the 256 seeded ones.
    pub entries: usize,
    /// Arena bytes occupied by learned sequences.
    pub arena_used: usize,
    /// Total arena bytes available to learned sequences.
    pub arena_capacity: usize,
    /// Whether the dictionary stopped learning, see [`Growth::Frozen`].
    pub frozen: bool,
    /// Size in bytes of the statically sized dictionary state.
    pub footprint: usize,
}

impl Dictionary {
    /// Create a dictionary in its seeded state.
    pub fn new() -> Self {
        let mut dict = Dictionary {
            entries: [Entry::default(); MAX_ENTRIES],
            next_code: 0,
            arena: SequenceArena::new(),
            growth: Growth::Growing,
        };
        dict.reset();
        dict
    }

    /// Restore the seeded state: codes `0..=255`, an empty arena and next code 256.
    pub fn reset(&mut self) {
        let (seeded, learned) = self.entries.split_at_mut(usize::from(FIRST_FREE_CODE));
        for entry in seeded {
            *entry = Entry {
                span: Span::default(),
                in_use: true,
            };
        }
        for entry in learned {
            *entry = Entry::default();
        }

        self.next_code = FIRST_FREE_CODE;
        self.arena.reset();
        self.growth = Growth::Growing;
        tracing::trace!("dictionary reset");
    }

    /// Find the code of an exact sequence.
    pub fn lookup_code(&self, seq: &[u8]) -> Option<Code> {
        match seq {
            [] => None,
            [byte] => Some(Code::from(*byte)),
            _ => (FIRST_FREE_CODE..self.next_code).find(|&code| self.entry_sequence(code) == seq),
        }
    }

    pub fn contains(&self, seq: &[u8]) -> bool {
        self.lookup_code(seq).is_some()
    }

    /// Assign the next free code to `seq`.
    ///
    /// Returns `None` and changes nothing if the sequence is empty, longer than `MAX_SEQ` or
    /// does not fit, see `is_full`. This does not freeze the dictionary, use `grow` for that.
    pub fn insert(&mut self, seq: &[u8]) -> Option<Code> {
        if seq.is_empty() || seq.len() > MAX_SEQ || self.is_full(seq.len()) {
            return None;
        }

        let span = self.arena.alloc(seq)?;
        let code = self.next_code;
        self.entries[usize::from(code)] = Entry { span, in_use: true };
        self.next_code += 1;
        Some(code)
    }

    /// Insert a sequence unless the dictionary is frozen.
    ///
    /// A sequence that does not fit is skipped, shorter ones may still be learned afterwards.
    /// The dictionary freezes once not even a sequence of `MIN_LEARNED` bytes fits, so encoder
    /// and decoder stop growing at the same point. Sequences longer than `MAX_SEQ` are skipped.
    pub fn grow(&mut self, seq: &[u8]) -> Option<Code> {
        if self.growth == Growth::Frozen || seq.len() > MAX_SEQ {
            return None;
        }

        let code = self.insert(seq);
        if self.is_full(MIN_LEARNED) {
            self.growth = Growth::Frozen;
            tracing::debug!(
                entries = self.next_code,
                arena_used = self.arena.used(),
                "dictionary frozen"
            );
        } else if code.is_none() {
            tracing::trace!(
                len = seq.len(),
                remaining = self.arena.remaining(),
                "sequence skipped"
            );
        }

        code
    }

    /// The sequence of an assigned code.
    ///
    /// Unassigned codes yield an empty sequence.
    pub fn entry_sequence(&self, code: Code) -> &[u8] {
        let idx = usize::from(code);
        if code < FIRST_FREE_CODE {
            return &IDENTITY[idx..=idx];
        }

        match self.entries.get(idx) {
            Some(entry) if entry.in_use => self.arena.get(entry.span),
            _ => &[],
        }
    }

    pub fn is_in_use(&self, code: Code) -> bool {
        self.entries
            .get(usize::from(code))
            .map_or(false, |entry| entry.in_use)
    }

    /// Check if another sequence of `additional` bytes can not be stored.
    pub fn is_full(&self, additional: usize) -> bool {
        usize::from(self.next_code) >= MAX_ENTRIES || self.arena.remaining() < additional
    }

    /// The code the next inserted sequence would receive.
    pub fn next_code(&self) -> Code {
        self.next_code
    }

    pub fn growth(&self) -> Growth {
        self.growth
    }

    pub fn stats(&self) -> Stats {
        Stats {
            entries: usize::from(self.next_code),
            arena_used: self.arena.used(),
            arena_capacity: self.arena.capacity(),
            frozen: self.growth == Growth::Frozen,
            footprint: core::mem::size_of::<Dictionary>(),
        }
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Dictionary::new()
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==================================")?;
        writeln!(f, "Entries in dictionary: {}", self.entries)?;
        writeln!(
            f,
            "Characters in seq buffer: {} of {}",
            self.arena_used, self.arena_capacity
        )?;
        if self.frozen {
            writeln!(f, "Dictionary is frozen")?;
        }
        writeln!(f, "Total of static allocated data: {} Kb", self.footprint / 1000)?;
        write!(f, "==================================")
    }
}
