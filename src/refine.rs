//! Catmull-Rom subdivision of sparse control points.
//!
//! The subdivision pass densifies each strand's control polygon into a
//! smooth curve. One invocation produces one interpolated point from the
//! four control points bracketing its parametric position; strand roots
//! and tips mirror-extrapolate the missing outer neighbor so the curve
//! still passes through both end points. Position and time are blended
//! together as a single 4-component record.

use glam::Vec4;
use rayon::prelude::*;

use crate::buffers::{ControlPoint, StrandBuffers};
use crate::record::StrandRecord;

/// Uniform Catmull-Rom blend of four samples over the `p1`→`p2` span.
///
/// Reduces to `p1` at `t == 0` and `p2` at `t == 1`, so consecutive spans
/// join exactly at the shared control point.
#[must_use]
pub fn catmull_rom(p0: Vec4, p1: Vec4, p2: Vec4, p3: Vec4, t: f32) -> Vec4 {
    let t2 = t * t;
    let t3 = t2 * t;

    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Fetch the four-point neighborhood of `local_time` on one strand.
///
/// Returns the samples bracketing the containing segment together with the
/// fractional interpolation parameter within it. The first segment
/// synthesizes its missing predecessor as `2*p[0] - p[1]` and the last its
/// missing successor as `2*p[1] - p[0]` instead of reading out of range.
/// A `local_time` of exactly 1 folds into the last segment at parameter 1,
/// which blends to the same tip point.
///
/// `record.segment_count` must be non-zero and the strand's point range in
/// bounds; violations panic or produce NaN rather than report errors.
#[must_use]
pub fn segment_samples(
    points: &[ControlPoint],
    record: StrandRecord,
    local_time: f32,
) -> ([Vec4; 4], f32) {
    let ratio = local_time * record.segment_count as f32;
    let interp_segment = (ratio as u32).min(record.segment_count - 1);
    let interp_time = ratio - interp_segment as f32;

    let interp_point = (record.offset + interp_segment) as usize;
    let p1 = points[interp_point].to_vec4();
    let p2 = points[interp_point + 1].to_vec4();
    let p0 = if interp_segment == 0 {
        p1 * 2.0 - p2
    } else {
        points[interp_point - 1].to_vec4()
    };
    let p3 = if interp_segment + 1 >= record.segment_count {
        p2 * 2.0 - p1
    } else {
        points[interp_point + 2].to_vec4()
    };

    ([p0, p1, p2, p3], interp_time)
}

/// Interpolated control point at `local_time` (normalized over the whole
/// strand) using the Catmull-Rom blend.
#[must_use]
pub fn refine_at(
    points: &[ControlPoint],
    record: StrandRecord,
    local_time: f32,
) -> ControlPoint {
    let ([p0, p1, p2, p3], t) = segment_samples(points, record, local_time);
    ControlPoint::from_vec4(catmull_rom(p0, p1, p2, p3, t))
}

/// One subdivision invocation addressed by flat vertex index.
///
/// In this stage the flat index addresses control-point space directly:
/// the owning strand comes from the index map and the local time from the
/// index's position inside the strand's point range.
#[must_use]
pub fn refine_vertex(
    buffers: &StrandBuffers<'_>,
    vertex_index: u32,
) -> ControlPoint {
    let record = buffers.record_of(vertex_index);
    let local_time =
        (vertex_index - record.offset) as f32 / record.segment_count as f32;
    refine_at(buffers.points, record, local_time)
}

/// Output of a subdivision pass: a densified point buffer plus re-encoded
/// records and an index map addressing it, so the expanded set is itself a
/// valid drawing-stage and custom-data input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefinedStrands {
    /// Densified control points, contiguous per strand.
    pub points: Vec<ControlPoint>,
    /// Packed records describing the densified strands.
    pub records: Vec<u32>,
    /// Per-point map back to the owning record index.
    pub index_map: Vec<u32>,
}

impl RefinedStrands {
    /// Borrow the expanded buffers as input for the next pass.
    #[must_use]
    pub fn as_buffers(&self) -> StrandBuffers<'_> {
        StrandBuffers {
            points: &self.points,
            records: &self.records,
            index_map: &self.index_map,
        }
    }
}

/// Densify every strand into `segment_count * subdivisions + 1` points.
///
/// The output is rebuilt from scratch on every call and must be fully
/// materialized before the drawing stage reads it; the two passes never
/// run against each other's output within one invocation. Densified
/// segment counts must still fit the 8-bit record field, i.e.
/// `segment_count * subdivisions` must stay below 256.
#[must_use]
pub fn refine_pass(
    buffers: &StrandBuffers<'_>,
    subdivisions: u32,
) -> RefinedStrands {
    let refined: Vec<Vec<ControlPoint>> = buffers
        .records
        .iter()
        .map(|&word| {
            refine_strand(buffers.points, StrandRecord::unpack(word), subdivisions)
        })
        .collect();
    assemble(refined)
}

/// Parallel [`refine_pass`]. Strands refine independently (each point is a
/// pure function of its index), so the output is identical to the serial
/// form.
#[must_use]
pub fn par_refine_pass(
    buffers: &StrandBuffers<'_>,
    subdivisions: u32,
) -> RefinedStrands {
    let refined: Vec<Vec<ControlPoint>> = buffers
        .records
        .par_iter()
        .map(|&word| {
            refine_strand(buffers.points, StrandRecord::unpack(word), subdivisions)
        })
        .collect();
    assemble(refined)
}

fn refine_strand(
    points: &[ControlPoint],
    record: StrandRecord,
    subdivisions: u32,
) -> Vec<ControlPoint> {
    let out_segments = record.segment_count * subdivisions;
    (0..=out_segments)
        .map(|i| refine_at(points, record, i as f32 / out_segments as f32))
        .collect()
}

fn assemble(strands: Vec<Vec<ControlPoint>>) -> RefinedStrands {
    let total: usize = strands.iter().map(Vec::len).sum();
    let mut out = RefinedStrands {
        points: Vec::with_capacity(total),
        records: Vec::with_capacity(strands.len()),
        index_map: Vec::with_capacity(total),
    };
    for (strand_id, strand) in strands.into_iter().enumerate() {
        let record = StrandRecord {
            offset: out.points.len() as u32,
            segment_count: strand.len() as u32 - 1,
        };
        debug_assert!(
            record.segment_count <= 0xFF,
            "densified segment count {} overflows the 8-bit record field",
            record.segment_count,
        );
        out.records.push(record.pack());
        out.index_map
            .extend(std::iter::repeat(strand_id as u32).take(strand.len()));
        out.points.extend(strand);
    }
    log::debug!(
        "subdivision pass produced {} points across {} strands",
        out.points.len(),
        out.records.len(),
    );
    out
}
