// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Geometry math casts between index and parameter space are intentional
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Strand roots are tagged with an exact time of 0.0
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]

//! Per-vertex hair strand geometry synthesis for ribbon and tube rendering.
//!
//! Wisp expands sparse strand control points into renderable geometry one
//! vertex at a time: every output vertex is a pure function of its flat
//! index, the shape options, and the read-only host buffers, so the host
//! never precomputes or transfers per-vertex data and every invocation is
//! trivially parallel.
//!
//! # Key entry points
//!
//! - [`buffers::StrandBuffers`] - read-only views over the host buffers
//! - [`refine::refine_pass`] - Catmull-Rom densification of control points
//! - [`draw::draw_pass`] - position/tangent/binormal/thickness synthesis
//! - [`options::ShapeOptions`] - thickness and taper configuration
//!
//! # Architecture
//!
//! Rendering is two passes over immutable buffers. An optional subdivision
//! pass densifies each strand's control polygon into a smooth curve that
//! still passes through every control point; a drawing pass then expands
//! each centerline point into `thickness_subdivisions` camera-facing
//! vertices (1 = line, 2 = ribbon, 3+ = tube). The subdivision output must
//! be fully materialized before the drawing pass reads it — the passes
//! never run against each other's output within one invocation.

pub mod buffers;
pub mod camera;
pub mod draw;
pub mod error;
pub mod options;
pub mod record;
pub mod refine;
pub mod shape;
