//! Read-only views over the host-owned strand buffers.
//!
//! The host uploads three buffers before either stage runs: control points
//! (contiguous per strand), packed strand records, and an index map from
//! output vertices to strand-record indices. The core never mutates them;
//! every accessor is a pure lookup. In-range indices are a caller-upheld
//! precondition, so an out-of-range vertex index panics instead of reading
//! neighboring memory.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3, Vec4};

use crate::record::StrandRecord;

/// One control point: world position plus normalized time along the owning
/// strand (0 at the root, 1 at the tip).
///
/// Layout-compatible with a packed `vec4` stream (RGBA32F), so a host can
/// upload a `&[ControlPoint]` slice byte-for-byte.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ControlPoint {
    /// World-space position.
    pub position: [f32; 3],
    /// Normalized parametric time along the owning strand.
    pub time: f32,
}

impl ControlPoint {
    /// Construct from a glam position and a time.
    #[must_use]
    pub fn new(position: Vec3, time: f32) -> Self {
        Self {
            position: position.into(),
            time,
        }
    }

    /// Position as a glam vector.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::from(self.position)
    }

    /// The full `(x, y, z, time)` record, as interpolation operates on all
    /// four components at once.
    #[must_use]
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(self.position[0], self.position[1], self.position[2], self.time)
    }

    /// Rebuild a control point from a blended `(x, y, z, time)` record.
    #[must_use]
    pub fn from_vec4(v: Vec4) -> Self {
        Self {
            position: [v.x, v.y, v.z],
            time: v.w,
        }
    }
}

/// The three host buffers a pass consumes, borrowed immutably.
#[derive(Debug, Clone, Copy)]
pub struct StrandBuffers<'a> {
    /// Control points, contiguous per strand.
    pub points: &'a [ControlPoint],
    /// Packed per-strand records (24-bit point offset, 8-bit segment count).
    pub records: &'a [u32],
    /// Maps an output vertex's flat index to its strand-record index.
    pub index_map: &'a [u32],
}

impl StrandBuffers<'_> {
    /// Index of the strand record owning `vertex_index`.
    #[must_use]
    pub fn strand_of(&self, vertex_index: u32) -> u32 {
        self.index_map[vertex_index as usize]
    }

    /// Decoded record at `strand_id`.
    #[must_use]
    pub fn record(&self, strand_id: u32) -> StrandRecord {
        StrandRecord::unpack(self.records[strand_id as usize])
    }

    /// Decoded record of the strand owning `vertex_index`.
    ///
    /// Every stage starts with this resolver + codec pair.
    #[must_use]
    pub fn record_of(&self, vertex_index: u32) -> StrandRecord {
        self.record(self.strand_of(vertex_index))
    }

    /// Per-strand 2-component auxiliary record (e.g. a surface UV) for the
    /// strand owning `vertex_index`. Pure lookup, no interpolation.
    #[must_use]
    pub fn custom_vec2(&self, values: &[[f32; 2]], vertex_index: u32) -> Vec2 {
        Vec2::from(values[self.strand_of(vertex_index) as usize])
    }

    /// Per-strand 3-component auxiliary record (e.g. a color).
    #[must_use]
    pub fn custom_vec3(&self, values: &[[f32; 3]], vertex_index: u32) -> Vec3 {
        Vec3::from(values[self.strand_of(vertex_index) as usize])
    }

    /// Per-strand 4-component auxiliary record.
    #[must_use]
    pub fn custom_vec4(&self, values: &[[f32; 4]], vertex_index: u32) -> Vec4 {
        Vec4::from(values[self.strand_of(vertex_index) as usize])
    }
}
