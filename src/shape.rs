//! Strand taper shaping.
//!
//! Maps normalized time along a strand to a thickness: a power curve bends
//! the taper, the result is remapped to the `[radius_tip, radius_root]`
//! range, and `close_tip` forces a hard zero over the last 1% of the
//! strand.

use crate::options::ShapeOptions;

/// Thickness of a strand at normalized `time`.
///
/// Returns `radius_root` at `time == 0` and `radius_tip` at `time == 1`,
/// continuous in between. `radius_shape` must lie in (-1, 1); values at
/// the bounds degenerate the exponent. With `close_tip` set, any
/// `time > 0.99` returns exactly `0.0`.
#[must_use]
pub fn strand_radius(options: &ShapeOptions, time: f32) -> f32 {
    let mut radius = 1.0 - time;
    if options.radius_shape < 0.0 {
        radius = radius.powf(1.0 + options.radius_shape);
    } else {
        radius = radius.powf(1.0 / (1.0 - options.radius_shape));
    }
    if options.close_tip && time > 0.99 {
        return 0.0;
    }
    radius * (options.radius_root - options.radius_tip) + options.radius_tip
}
