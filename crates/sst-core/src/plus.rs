//! Plus-sign detection over an orthogonal brush path.
//!
//! The path is walked from the origin, every visited coordinate is
//! compressed to a dense rank, and painted segments are recorded in
//! compressed space. A grid point is a plus sign when all four unit arms
//! around it are painted. Every crossing of a horizontal and a vertical
//! stroke lies on a vertex row and a vertex column, so compression never
//! hides a center.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::compress::CompressedAxis;
use crate::error::{Error, Result};
use crate::fenwick::FenwickTree;
use crate::stroke::{Stroke, strokes_from_parts, walk};

/// How painted segments are stored and intersected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlusStrategy {
    /// Hash sets of unit segments; cost grows with the compressed length
    /// of every stroke.
    #[default]
    Unit,
    /// Merged intervals swept with a Fenwick tree; O(N log N) regardless
    /// of stroke lengths.
    Sweep,
}

impl PlusStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Sweep => "sweep",
        }
    }
}

impl fmt::Display for PlusStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlusStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "unit" => Ok(Self::Unit),
            "sweep" => Ok(Self::Sweep),
            other => Err(format!("unknown strategy {other:?} (expected unit or sweep)")),
        }
    }
}

/// A painted run in compressed space: on line `fixed`, from rank `lo` to
/// rank `hi` (`lo < hi`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Span {
    fixed: usize,
    lo: usize,
    hi: usize,
}

/// The path's painted segments in compressed coordinates.
#[derive(Clone, Debug)]
pub struct PaintedGrid {
    xs: CompressedAxis,
    ys: CompressedAxis,
    horizontal: Vec<Span>,
    vertical: Vec<Span>,
}

impl PaintedGrid {
    pub fn from_strokes(strokes: &[Stroke]) -> Result<Self> {
        let vertices = walk(strokes)?;
        let xs = CompressedAxis::new(vertices.iter().map(|v| v.0));
        let ys = CompressedAxis::new(vertices.iter().map(|v| v.1));

        let mut horizontal = Vec::new();
        let mut vertical = Vec::new();
        for pair in vertices.windows(2) {
            let (ax, ay) = compressed(&xs, &ys, pair[0]);
            let (bx, by) = compressed(&xs, &ys, pair[1]);
            if ay == by {
                horizontal.push(Span {
                    fixed: ay,
                    lo: ax.min(bx),
                    hi: ax.max(bx),
                });
            } else {
                vertical.push(Span {
                    fixed: ax,
                    lo: ay.min(by),
                    hi: ay.max(by),
                });
            }
        }

        Ok(Self {
            xs,
            ys,
            horizontal,
            vertical,
        })
    }

    pub fn x_axis(&self) -> &CompressedAxis {
        &self.xs
    }

    pub fn y_axis(&self) -> &CompressedAxis {
        &self.ys
    }

    pub fn width(&self) -> usize {
        self.xs.len()
    }

    pub fn height(&self) -> usize {
        self.ys.len()
    }

    /// A plus center needs a neighbour on each side, so fewer than three
    /// distinct values on either axis means no plus sign can exist.
    pub fn is_degenerate(&self) -> bool {
        self.width() < 3 || self.height() < 3
    }

    pub fn count(&self, strategy: PlusStrategy) -> u64 {
        if self.is_degenerate() {
            return 0;
        }
        match strategy {
            PlusStrategy::Unit => self.count_unit_segments(),
            PlusStrategy::Sweep => self.count_sweep(),
        }
    }

    /// Each plus sign is keyed by its right arm, so it is seen exactly once.
    fn count_unit_segments(&self) -> u64 {
        let mut horizontal: HashSet<(usize, usize)> = HashSet::new();
        let mut vertical: HashSet<(usize, usize)> = HashSet::new();
        for span in &self.horizontal {
            horizontal.extend((span.lo..span.hi).map(|cx| (cx, span.fixed)));
        }
        for span in &self.vertical {
            vertical.extend((span.lo..span.hi).map(|cy| (span.fixed, cy)));
        }

        let height = self.height();
        horizontal
            .iter()
            .filter(|&&(cx, cy)| {
                cx > 0
                    && cy > 0
                    && cy + 1 < height
                    && horizontal.contains(&(cx - 1, cy))
                    && vertical.contains(&(cx, cy - 1))
                    && vertical.contains(&(cx, cy))
            })
            .count() as u64
    }

    /// Interior points of merged vertical runs are switched on in a
    /// Fenwick tree over x while sweeping y; each merged horizontal run
    /// counts the active columns strictly inside it.
    fn count_sweep(&self) -> u64 {
        let mut events: Vec<(usize, SweepEvent)> = Vec::new();

        for (x, runs) in merged_runs(&self.vertical) {
            for (lo, hi) in runs {
                if lo + 1 < hi {
                    events.push((lo + 1, SweepEvent::Toggle { x, delta: 1 }));
                    events.push((hi, SweepEvent::Toggle { x, delta: -1 }));
                }
            }
        }
        for (y, runs) in merged_runs(&self.horizontal) {
            for (lo, hi) in runs {
                if lo + 1 < hi {
                    events.push((
                        y,
                        SweepEvent::Query {
                            lo: lo + 1,
                            hi: hi - 1,
                        },
                    ));
                }
            }
        }
        events.sort_by_key(|&(y, event)| (y, event.phase()));

        let mut active = FenwickTree::new(self.width());
        let mut total = 0i64;
        for (_, event) in events {
            match event {
                SweepEvent::Toggle { x, delta } => active.update(x, delta),
                SweepEvent::Query { lo, hi } => total += active.range_sum(lo, hi),
            }
        }
        total as u64
    }
}

#[derive(Clone, Copy, Debug)]
enum SweepEvent {
    Toggle { x: usize, delta: i64 },
    Query { lo: usize, hi: usize },
}

impl SweepEvent {
    /// Toggles at a row apply before that row's queries.
    fn phase(self) -> u8 {
        match self {
            Self::Toggle { .. } => 0,
            Self::Query { .. } => 1,
        }
    }
}

/// Group spans by line and merge overlapping or touching runs.
fn merged_runs(spans: &[Span]) -> BTreeMap<usize, Vec<(usize, usize)>> {
    let mut lines: BTreeMap<usize, Vec<(usize, usize)>> = BTreeMap::new();
    for span in spans {
        lines.entry(span.fixed).or_default().push((span.lo, span.hi));
    }
    for runs in lines.values_mut() {
        runs.sort_unstable();
        let mut merged: Vec<(usize, usize)> = Vec::with_capacity(runs.len());
        for &(lo, hi) in runs.iter() {
            match merged.last_mut() {
                Some(last) if lo <= last.1 => last.1 = last.1.max(hi),
                _ => merged.push((lo, hi)),
            }
        }
        *runs = merged;
    }
    lines
}

fn compressed(xs: &CompressedAxis, ys: &CompressedAxis, (x, y): (i64, i64)) -> (usize, usize) {
    // Both axes were built from the same vertex list.
    let cx = xs.rank_of(x).unwrap_or_default();
    let cy = ys.rank_of(y).unwrap_or_default();
    (cx, cy)
}

/// Counts plus signs for a stroke sequence with a chosen strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlusSignCounter {
    pub strategy: PlusStrategy,
}

impl PlusSignCounter {
    pub fn new(strategy: PlusStrategy) -> Self {
        Self { strategy }
    }

    pub fn count(&self, strokes: &[Stroke]) -> Result<u64> {
        if strokes.len() < 2 {
            return Err(Error::TooFewStrokes(strokes.len()));
        }
        let grid = PaintedGrid::from_strokes(strokes)?;
        Ok(grid.count(self.strategy))
    }
}

/// Count plus signs painted by `stroke_count` strokes given as parallel
/// length and direction-code (`U`, `D`, `L`, `R`) inputs.
pub fn count_plus_signs(stroke_count: usize, lengths: &[i64], directions: &str) -> Result<u64> {
    if lengths.len() != stroke_count {
        return Err(Error::LengthMismatch {
            what: "stroke lengths",
            expected: stroke_count,
            actual: lengths.len(),
        });
    }
    let strokes = strokes_from_parts(lengths, directions)?;
    PlusSignCounter::default().count(&strokes)
}
