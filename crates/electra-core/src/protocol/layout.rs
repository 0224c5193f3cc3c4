//! Named bit fields over packed integers and byte buffers.
//!
//! Both protocols describe their payload as a list of fields, each one a
//! `(name, offset, width)` triple.  The same constants are used to *insert*
//! values while encoding and to *extract* them again when a code is inspected,
//! so the layout is written down exactly once.
//!
//! Offsets count from the least significant bit (bit 0).

/// A field of `width` bits starting at bit `offset` of an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    pub name: &'static str,
    pub offset: u32,
    pub width: u32,
}

impl BitField {
    pub const fn new(name: &'static str, offset: u32, width: u32) -> Self {
        Self {
            name,
            offset,
            width,
        }
    }

    /// Right-aligned mask covering `width` bits.
    pub const fn mask(&self) -> u64 {
        if self.width >= u64::BITS {
            u64::MAX
        } else {
            (1u64 << self.width) - 1
        }
    }

    /// Returns `word` with this field replaced by `value`.
    ///
    /// Bits of `value` above the field width are discarded, so an out-of-range
    /// value wraps instead of leaking into neighbouring fields.
    pub const fn insert(&self, word: u64, value: u64) -> u64 {
        let mask = self.mask();
        (word & !(mask << self.offset)) | ((value & mask) << self.offset)
    }

    /// Reads this field out of `word`.
    pub const fn extract(&self, word: u64) -> u64 {
        (word >> self.offset) & self.mask()
    }
}

/// A [`BitField`] located inside one byte of a byte buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteField {
    pub byte: usize,
    pub bits: BitField,
}

impl ByteField {
    pub const fn new(name: &'static str, byte: usize, offset: u32, width: u32) -> Self {
        Self {
            byte,
            bits: BitField::new(name, offset, width),
        }
    }

    pub const fn name(&self) -> &'static str {
        self.bits.name
    }

    /// Writes `value` into the field.  Does nothing if the buffer is too short.
    pub fn insert(&self, buffer: &mut [u8], value: u64) {
        if let Some(byte) = buffer.get_mut(self.byte) {
            // The field lives inside one byte, so the truncation is lossless.
            *byte = self.bits.insert(u64::from(*byte), value) as u8;
        }
    }

    /// Reads the field, or `None` if the buffer is too short.
    pub fn extract(&self, buffer: &[u8]) -> Option<u64> {
        buffer
            .get(self.byte)
            .map(|&byte| self.bits.extract(u64::from(byte)))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
