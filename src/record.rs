//! Packed strand record codec.
//!
//! Each strand is described by one 32-bit word: the low 24 bits hold the
//! index of the strand's first control point, the high 8 bits the number of
//! segments between its control points. The layout is a wire contract
//! shared with the host-side encoder, so the mask and shift below must not
//! change. Decoding performs no validation; a malformed word silently
//! yields out-of-range fields.

/// Mask selecting the 24-bit point offset in a packed strand word.
pub const OFFSET_MASK: u32 = 0x00FF_FFFF;

/// Bit position of the 8-bit segment count in a packed strand word.
pub const SEGMENT_SHIFT: u32 = 24;

/// Decoded per-strand metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrandRecord {
    /// Index of the strand's first control point in the point buffer.
    pub offset: u32,
    /// Number of sub-intervals between the strand's control points.
    pub segment_count: u32,
}

impl StrandRecord {
    /// Decode a packed 32-bit strand word.
    #[must_use]
    pub const fn unpack(word: u32) -> Self {
        Self {
            offset: word & OFFSET_MASK,
            segment_count: word >> SEGMENT_SHIFT,
        }
    }

    /// Encode into a packed 32-bit strand word.
    ///
    /// `offset` must fit in 24 bits and `segment_count` in 8; excess bits
    /// are dropped.
    #[must_use]
    pub const fn pack(self) -> u32 {
        (self.offset & OFFSET_MASK) | (self.segment_count << SEGMENT_SHIFT)
    }

    /// Number of control points on the strand (`segment_count + 1`).
    #[must_use]
    pub const fn point_count(self) -> u32 {
        self.segment_count + 1
    }
}
