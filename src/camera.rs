//! View parameters for camera-facing strand expansion.
//!
//! Ribbons stay visible from every angle because their lateral offset axis
//! is recomputed per vertex against the camera; the drawing stage only
//! needs the camera position, its forward axis, and the projection mode.

use glam::Vec3;

/// Camera projection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Perspective projection: cross-sections face the eye point.
    Perspective,
    /// Orthographic projection: cross-sections face the view axis.
    Orthographic,
}

/// Per-draw view state read by the drawing stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewParams {
    /// Camera world-space position.
    pub position: Vec3,
    /// Camera forward axis (normalized).
    pub forward: Vec3,
    /// Projection mode.
    pub projection: Projection,
}

impl ViewParams {
    /// The vector used to orient a cross-section at `world_pos` toward the
    /// camera: eye-to-vertex under perspective, the reversed view axis
    /// (identical for every vertex) under orthographic.
    #[must_use]
    pub fn camera_vector(&self, world_pos: Vec3) -> Vec3 {
        match self.projection {
            Projection::Perspective => world_pos - self.position,
            Projection::Orthographic => -self.forward,
        }
    }
}
