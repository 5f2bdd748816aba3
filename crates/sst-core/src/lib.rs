//! Two small geometric/numeric solvers.
//!
//! - Plus-sign counting over an orthogonal brush path: coordinate
//!   compression, then either unit-segment sets or a Fenwick-tree sweep
//!   over merged intervals.
//! - Disc-stack stabilization: minimum inflate/deflate cost to make radii
//!   strictly increasing, as a prefix-minimum DP over a compressed
//!   candidate axis.
//!
//! Pure math, zero I/O.

pub mod compress;
pub mod error;
pub mod fenwick;
pub mod generate;
pub mod plus;
pub mod samples;
pub mod stack;
pub mod stroke;

pub use compress::CompressedAxis;
pub use error::{CostKind, Error, Result};
pub use fenwick::FenwickTree;
pub use generate::{random_radii, random_strokes};
pub use plus::{PaintedGrid, PlusSignCounter, PlusStrategy, count_plus_signs};
pub use samples::{PLUS_SAMPLES, PlusSample, STACK_SAMPLES, StackSample};
pub use stack::{Cost, CostModel, StackPlan, minimum_stabilization_cost, stabilization_plan};
pub use stroke::{
    Direction, Stroke, UnknownDirection, Vertex, format_strokes, parse_strokes,
    strokes_from_parts, walk,
};
