//! Case files for `sst-core`: batches of plus-sign and disc-stack
//! instances stored as TOML or JSON, with optional expected answers.

pub mod case;
pub mod error;
pub mod runner;

pub use case::{CASES_ENV, CaseFile, PlusCase, StackCase, default_case_path, load_case_file};
pub use error::{CaseError, Result};
pub use runner::{CaseKind, CaseOutcome, RunOptions, RunReport, Status, Summary, run_cases};
