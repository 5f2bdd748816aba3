//! Reference vectors with known answers.

/// A plus-sign instance: parallel lengths and direction codes.
#[derive(Clone, Copy, Debug)]
pub struct PlusSample {
    pub name: &'static str,
    pub lengths: &'static [i64],
    pub directions: &'static str,
    pub expected: u64,
}

/// A disc-stack instance.
#[derive(Clone, Copy, Debug)]
pub struct StackSample {
    pub name: &'static str,
    pub radii: &'static [i64],
    pub inflate: i64,
    pub deflate: i64,
    pub expected: u128,
}

pub const PLUS_SAMPLES: &[PlusSample] = &[
    PlusSample {
        name: "four-centers",
        lengths: &[6, 3, 4, 5, 1, 6, 3, 3, 4],
        directions: "ULDRULURD",
        expected: 4,
    },
    PlusSample {
        name: "unit-loops",
        lengths: &[1, 1, 1, 1, 1, 1, 1, 1],
        directions: "RDLUULDR",
        expected: 1,
    },
    PlusSample {
        name: "back-and-forth",
        lengths: &[1, 2, 2, 1, 1, 2, 2, 1],
        directions: "UDUDLRLR",
        expected: 1,
    },
    PlusSample {
        name: "closed-rectangle",
        lengths: &[5, 2, 5, 2],
        directions: "RDLU",
        expected: 0,
    },
    PlusSample {
        name: "retraced-cross",
        lengths: &[1, 2, 1, 1, 2, 1, 1, 2, 1, 1, 2],
        directions: "RLRUDURLRUD",
        expected: 1,
    },
];

pub const STACK_SAMPLES: &[StackSample] = &[
    StackSample {
        name: "mixed",
        radii: &[2, 5, 3, 6, 5],
        inflate: 1,
        deflate: 1,
        expected: 5,
    },
    StackSample {
        name: "equal-cheap-inflate",
        radii: &[100, 100, 100],
        inflate: 2,
        deflate: 3,
        expected: 5,
    },
    StackSample {
        name: "equal-dear-inflate",
        radii: &[100, 100, 100],
        inflate: 7,
        deflate: 3,
        expected: 9,
    },
    StackSample {
        name: "descending",
        radii: &[6, 5, 4, 3],
        inflate: 10,
        deflate: 1,
        expected: 19,
    },
];
