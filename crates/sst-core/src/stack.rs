//! Minimum-cost stabilization of a disc stack.
//!
//! Disc 0 is the top. A stack is stable when radii strictly increase from
//! top to bottom. Each disc can be inflated or deflated at a per-unit cost
//! but never below radius 1.
//!
//! With the shift `S[i] = R[i] - i`, "strictly increasing" becomes
//! "non-decreasing", and the cost of every disc is a convex piecewise
//! linear function of its shifted value. An optimum therefore only uses
//! shifted values drawn from the observed `S[i]`, clamped into the legal
//! range: the top disc's final radius equals its shifted value, so none
//! may fall below 1, and the bottom disc's final radius must still fit in
//! `i64`, so none may exceed `i64::MAX - (N - 1)`.

use serde::{Deserialize, Serialize};

use crate::compress::CompressedAxis;
use crate::error::{CostKind, Error, Result};

/// Widened cost type. A single disc costs less than 2^127; only sums of
/// several discs can leave the range.
pub type Cost = u128;

/// Per-unit inflate and deflate prices, validated non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CostModel {
    inflate: Cost,
    deflate: Cost,
}

impl CostModel {
    pub fn new(inflate: i64, deflate: i64) -> Result<Self> {
        let check = |which, value: i64| {
            u64::try_from(value)
                .map(Cost::from)
                .map_err(|_| Error::NegativeCost { which, value })
        };
        Ok(Self {
            inflate: check(CostKind::Inflate, inflate)?,
            deflate: check(CostKind::Deflate, deflate)?,
        })
    }

    /// Cost of moving one disc from `initial` to `target`.
    ///
    /// `None` is an infinite cost: radii below 1 are illegal, which also
    /// means a radius-1 disc can never deflate.
    pub fn change_cost(&self, initial: i64, target: i64) -> Option<Cost> {
        if target < 1 {
            return None;
        }
        // |delta| < 2^64 and unit prices < 2^63, so the product fits.
        let delta = (i128::from(target) - i128::from(initial)).unsigned_abs();
        Some(match target.cmp(&initial) {
            std::cmp::Ordering::Equal => 0,
            std::cmp::Ordering::Greater => delta * self.inflate,
            std::cmp::Ordering::Less => delta * self.deflate,
        })
    }
}

/// One optimal arrangement of the stack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackPlan {
    pub cost: Cost,
    /// Final radii, top to bottom.
    pub radii: Vec<i64>,
    /// Discs whose radius grew.
    pub inflated: usize,
    /// Discs whose radius shrank.
    pub deflated: usize,
}

/// Minimum total cost to make `disc_count` radii strictly increasing from
/// top to bottom.
///
/// Keeps only two DP rows. O(N log N) for the candidate axis plus O(N·M)
/// for the rows, M being the number of distinct candidates.
///
/// Returns [`Error::CostOverflow`] when the minimum does not fit in
/// [`Cost`]. That needs several discs near the `i64` limits moved at
/// near-maximal unit prices.
pub fn minimum_stabilization_cost(
    disc_count: usize,
    radii: &[i64],
    inflate: i64,
    deflate: i64,
) -> Result<Cost> {
    let model = validate(disc_count, radii, inflate, deflate)?;
    if radii.len() <= 1 {
        return Ok(0);
    }
    let table = solve(radii, &model, false);
    table.best().map(|(cost, _)| cost)
}

/// Like [`minimum_stabilization_cost`], but also reconstructs one optimal
/// final radius sequence.
///
/// Keeps one back-pointer row per disc, so memory grows as N·M pointers:
/// about 8 bytes times N² for N distinct radii. Prefer the cost-only entry
/// point for stacks of many thousands of discs.
pub fn stabilization_plan(
    disc_count: usize,
    radii: &[i64],
    inflate: i64,
    deflate: i64,
) -> Result<StackPlan> {
    let model = validate(disc_count, radii, inflate, deflate)?;
    if radii.len() <= 1 {
        return Ok(StackPlan {
            cost: 0,
            radii: radii.to_vec(),
            inflated: 0,
            deflated: 0,
        });
    }

    let table = solve(radii, &model, true);
    let (cost, mut k) = table.best()?;

    let n = radii.len();
    let mut shifted = vec![0i64; n];
    for i in (0..n).rev() {
        shifted[i] = table.candidates.value(k).unwrap_or(1);
        if i > 0 {
            k = table.back[i - 1][k];
        }
    }

    // Candidates never exceed i64::MAX - (N - 1), so every target fits.
    let final_radii: Vec<i64> = shifted
        .iter()
        .enumerate()
        .map(|(i, &s)| s + i as i64)
        .collect();
    let inflated = final_radii.iter().zip(radii).filter(|(f, r)| f > r).count();
    let deflated = final_radii.iter().zip(radii).filter(|(f, r)| f < r).count();

    Ok(StackPlan {
        cost,
        radii: final_radii,
        inflated,
        deflated,
    })
}

fn validate(disc_count: usize, radii: &[i64], inflate: i64, deflate: i64) -> Result<CostModel> {
    if radii.len() != disc_count {
        return Err(Error::LengthMismatch {
            what: "radii",
            expected: disc_count,
            actual: radii.len(),
        });
    }
    if let Some((index, &radius)) = radii.iter().enumerate().find(|(_, r)| **r < 1) {
        return Err(Error::NonPositiveRadius { index, radius });
    }
    CostModel::new(inflate, deflate)
}

/// The shifted-value candidates, clamped into `[1, i64::MAX - (N - 1)]`.
fn candidate_axis(radii: &[i64]) -> CompressedAxis {
    let ceiling = i64::MAX - (radii.len() as i64 - 1);
    CompressedAxis::new(
        radii
            .iter()
            .enumerate()
            .map(|(i, &r)| (r - i as i64).clamp(1, ceiling)),
    )
}

/// One DP cell. Variant order is cost order, so `min` picks the cheapest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Cell {
    Finite(Cost),
    /// Reachable, but the running sum left the `Cost` range.
    Overflow,
    /// The target radius is illegal or unrepresentable.
    Unreachable,
}

impl Cell {
    fn plus(self, other: Cell) -> Cell {
        match (self, other) {
            (Cell::Unreachable, _) | (_, Cell::Unreachable) => Cell::Unreachable,
            (Cell::Finite(a), Cell::Finite(b)) => {
                a.checked_add(b).map_or(Cell::Overflow, Cell::Finite)
            }
            _ => Cell::Overflow,
        }
    }
}

struct Table {
    candidates: CompressedAxis,
    last_row: Vec<Cell>,
    /// `back[i - 1][k]`: best predecessor candidate for disc `i` at `k`.
    back: Vec<Vec<usize>>,
}

impl Table {
    /// Cheapest cell of the last row and its candidate index.
    fn best(&self) -> Result<(Cost, usize)> {
        let (k, cell) = self
            .last_row
            .iter()
            .copied()
            .enumerate()
            .min_by_key(|&(_, cell)| cell)
            .ok_or(Error::Infeasible)?;
        match cell {
            Cell::Finite(cost) => Ok((cost, k)),
            Cell::Overflow => Err(Error::CostOverflow),
            Cell::Unreachable => Err(Error::Infeasible),
        }
    }
}

fn solve(radii: &[i64], model: &CostModel, track_back: bool) -> Table {
    let candidates = candidate_axis(radii);
    let values = candidates.values();
    let cell = |i: usize, v: i64| -> Cell {
        v.checked_add(i as i64)
            .and_then(|target| model.change_cost(radii[i], target))
            .map_or(Cell::Unreachable, Cell::Finite)
    };

    let mut prev: Vec<Cell> = values.iter().map(|&v| cell(0, v)).collect();
    let mut cur: Vec<Cell> = vec![Cell::Unreachable; values.len()];
    let mut back = Vec::new();

    for i in 1..radii.len() {
        let mut pointers = if track_back {
            Vec::with_capacity(values.len())
        } else {
            Vec::new()
        };
        // Running prefix minimum over the previous row.
        let mut best_prev = Cell::Unreachable;
        let mut best_k = 0;
        for (k, &v) in values.iter().enumerate() {
            if prev[k] < best_prev {
                best_prev = prev[k];
                best_k = k;
            }
            if track_back {
                pointers.push(best_k);
            }
            cur[k] = cell(i, v).plus(best_prev);
        }
        if track_back {
            back.push(pointers);
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    Table {
        candidates,
        last_row: prev,
        back,
    }
}
