//! Per-vertex drawing attribute synthesis.
//!
//! The drawing stage turns each centerline point into renderable geometry:
//! world position, a finite-difference tangent, a camera-facing binormal,
//! the taper thickness, and a cross-section offset that fans
//! `thickness_subdivisions` vertices out across the strand's width. Every
//! vertex is computed independently from the point buffer and the
//! immutable draw state; nothing is carried between invocations.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use rayon::prelude::*;

use crate::buffers::ControlPoint;
use crate::camera::ViewParams;
use crate::options::ShapeOptions;
use crate::shape::strand_radius;

/// Full attribute set of one output vertex.
///
/// Packed as three `vec4` lanes (position+time, tangent+thickness,
/// binormal+cross) so a host can upload a `&[StrandVertex]` slice
/// byte-for-byte as an interleaved vertex stream.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct StrandVertex {
    /// World-space position, cross-section offset applied.
    pub position: [f32; 3],
    /// Normalized time along the owning strand.
    pub time: f32,
    /// Strand direction at this point (finite difference, not normalized).
    pub tangent: [f32; 3],
    /// Taper thickness at `time`.
    pub thickness: f32,
    /// Unit view-facing lateral axis.
    pub binormal: [f32; 3],
    /// Position across the cross-section in `[-1, 1]`; `0` when the strand
    /// renders as a single-pixel line.
    pub cross: f32,
}

impl StrandVertex {
    /// Position as a glam vector.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::from(self.position)
    }

    /// Tangent as a glam vector.
    #[must_use]
    pub fn tangent(&self) -> Vec3 {
        Vec3::from(self.tangent)
    }

    /// Binormal as a glam vector.
    #[must_use]
    pub fn binormal(&self) -> Vec3 {
        Vec3::from(self.binormal)
    }
}

/// Synthesize the attributes of one output vertex.
///
/// `vertex_index` counts `thickness_subdivisions` vertices per centerline
/// point; integer division recovers the point, the remainder selects the
/// position across the cross-section. The tangent is the backward
/// difference to the previous point, except at a strand root (`time == 0`)
/// where no predecessor exists and the forward difference is used — this
/// also keeps the difference from crossing into the preceding strand. The
/// binormal is recomputed against the camera per vertex so ribbons face
/// the view from every angle.
///
/// Indices reaching outside `points` are a caller contract violation and
/// panic; a zero tangent (coincident points) yields a NaN binormal rather
/// than an error.
#[must_use]
pub fn synthesize_vertex(
    points: &[ControlPoint],
    options: &ShapeOptions,
    view: &ViewParams,
    vertex_index: u32,
) -> StrandVertex {
    let subdivisions = options.thickness_subdivisions;
    let base_id = (vertex_index / subdivisions) as usize;
    let point = points[base_id];
    let mut position = point.position();
    let time = point.time;

    let tangent = if time == 0.0 {
        points[base_id + 1].position() - position
    } else {
        position - points[base_id - 1].position()
    };

    let binormal = view.camera_vector(position).cross(tangent).normalize();
    let thickness = strand_radius(options, time);

    let mut cross = 0.0;
    if subdivisions > 1 {
        let thick_time =
            (vertex_index % subdivisions) as f32 / (subdivisions - 1) as f32;
        cross = thick_time * 2.0 - 1.0;
        position += binormal * (thickness * cross);
    }

    StrandVertex {
        position: position.into(),
        time,
        tangent: tangent.into(),
        thickness,
        binormal: binormal.into(),
        cross,
    }
}

/// Synthesize the full vertex set for a point buffer:
/// `points.len() * thickness_subdivisions` vertices in index order.
///
/// Composes directly with a subdivision pass — its densified point buffer
/// is this pass's input; the two never run against each other's output
/// within one invocation.
#[must_use]
pub fn draw_pass(
    points: &[ControlPoint],
    options: &ShapeOptions,
    view: &ViewParams,
) -> Vec<StrandVertex> {
    let count = points.len() as u32 * options.thickness_subdivisions;
    let vertices: Vec<StrandVertex> = (0..count)
        .map(|i| synthesize_vertex(points, options, view, i))
        .collect();
    log::debug!(
        "drawing pass produced {} vertices from {} points",
        vertices.len(),
        points.len(),
    );
    vertices
}

/// Parallel [`draw_pass`]. Vertices are pure functions of their index, so
/// the output is identical to the serial form.
#[must_use]
pub fn par_draw_pass(
    points: &[ControlPoint],
    options: &ShapeOptions,
    view: &ViewParams,
) -> Vec<StrandVertex> {
    let count = points.len() as u32 * options.thickness_subdivisions;
    (0..count)
        .into_par_iter()
        .map(|i| synthesize_vertex(points, options, view, i))
        .collect()
}
