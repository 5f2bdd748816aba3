use serde::Serialize;
use sst_core::{PlusSignCounter, PlusStrategy, minimum_stabilization_cost};

use crate::case::{CaseFile, PlusCase, StackCase};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseKind {
    Plus,
    Stack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Answer matched the expectation.
    Pass,
    /// Answer differed from the expectation.
    Fail,
    /// Solved, but no expectation was given.
    Unchecked,
    /// The solver rejected the input.
    Error,
}

#[derive(Clone, Debug, Serialize)]
pub struct CaseOutcome {
    pub name: String,
    pub kind: CaseKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<u128>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<u128>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub status: Status,
}

impl CaseOutcome {
    fn new(
        name: &str,
        kind: CaseKind,
        result: sst_core::Result<u128>,
        expected: Option<u128>,
    ) -> Self {
        let (answer, error, status) = match result {
            Ok(answer) => {
                let status = match expected {
                    None => Status::Unchecked,
                    Some(e) if e == answer => Status::Pass,
                    Some(_) => Status::Fail,
                };
                (Some(answer), None, status)
            }
            Err(e) => (None, Some(e.to_string()), Status::Error),
        };
        Self {
            name: name.to_string(),
            kind,
            answer,
            expected,
            error,
            status,
        }
    }
}

/// Knobs for a batch run.
#[derive(Clone, Copy, Debug, Default)]
pub struct RunOptions {
    /// Overrides every plus case's own strategy.
    pub strategy: Option<PlusStrategy>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub pass: usize,
    pub fail: usize,
    pub unchecked: usize,
    pub error: usize,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct RunReport {
    pub outcomes: Vec<CaseOutcome>,
}

impl RunReport {
    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        for outcome in &self.outcomes {
            match outcome.status {
                Status::Pass => summary.pass += 1,
                Status::Fail => summary.fail += 1,
                Status::Unchecked => summary.unchecked += 1,
                Status::Error => summary.error += 1,
            }
        }
        summary
    }

    /// No case failed or errored.
    pub fn all_passed(&self) -> bool {
        let s = self.summary();
        s.fail == 0 && s.error == 0
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        #[derive(Serialize)]
        struct Wire<'a> {
            summary: Summary,
            outcomes: &'a [CaseOutcome],
        }
        serde_json::to_string_pretty(&Wire {
            summary: self.summary(),
            outcomes: &self.outcomes,
        })
    }
}

fn run_plus(case: &PlusCase, options: &RunOptions) -> CaseOutcome {
    let strategy = options.strategy.or(case.strategy).unwrap_or_default();
    let result = case
        .strokes()
        .and_then(|strokes| PlusSignCounter::new(strategy).count(&strokes))
        .map(u128::from);
    tracing::debug!("plus case '{}' ({strategy}): {result:?}", case.name);
    CaseOutcome::new(&case.name, CaseKind::Plus, result, case.expect.map(u128::from))
}

fn run_stack(case: &StackCase) -> CaseOutcome {
    let result =
        minimum_stabilization_cost(case.radii.len(), &case.radii, case.inflate, case.deflate);
    tracing::debug!("stack case '{}': {result:?}", case.name);
    CaseOutcome::new(&case.name, CaseKind::Stack, result, case.expect.map(u128::from))
}

/// Solve every case in the file, plus cases first.
pub fn run_cases(file: &CaseFile, options: &RunOptions) -> RunReport {
    let outcomes: Vec<CaseOutcome> = file
        .plus
        .iter()
        .map(|case| run_plus(case, options))
        .chain(file.stack.iter().map(run_stack))
        .collect();

    for outcome in &outcomes {
        match outcome.status {
            Status::Fail => tracing::warn!(
                "case '{}' answered {:?}, expected {:?}",
                outcome.name,
                outcome.answer,
                outcome.expected
            ),
            Status::Error => tracing::warn!(
                "case '{}' rejected: {}",
                outcome.name,
                outcome.error.as_deref().unwrap_or("unknown error")
            ),
            Status::Pass | Status::Unchecked => {}
        }
    }

    RunReport { outcomes }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_all_pass() {
        let report = run_cases(&CaseFile::builtin(), &RunOptions::default());
        assert!(report.all_passed());
        let summary = report.summary();
        assert_eq!(summary.pass, report.outcomes.len());
        assert_eq!(summary.fail + summary.error + summary.unchecked, 0);
    }

    #[test]
    fn test_builtin_passes_with_sweep_override() {
        let options = RunOptions {
            strategy: Some(PlusStrategy::Sweep),
        };
        assert!(run_cases(&CaseFile::builtin(), &options).all_passed());
    }

    #[test]
    fn test_mismatch_and_error_statuses() {
        let file = CaseFile::from_toml_str(
            r#"
[[plus]]
name = "wrong"
path = "R5 D2 L5 U2"
expect = 3

[[plus]]
name = "unchecked"
path = "R1 U1 D2 U1 R1"

[[stack]]
name = "bad-radius"
radii = [3, 0]
inflate = 1
deflate = 1
"#,
        )
        .unwrap();

        let report = run_cases(&file, &RunOptions::default());
        let statuses: Vec<Status> = report.outcomes.iter().map(|o| o.status).collect();
        assert_eq!(statuses, vec![Status::Fail, Status::Unchecked, Status::Error]);
        assert_eq!(report.outcomes[0].answer, Some(0));
        assert_eq!(report.outcomes[1].answer, Some(1));
        assert!(report.outcomes[2].error.as_deref().unwrap().contains("radius 0"));
        assert!(!report.all_passed());
    }

    #[test]
    fn test_report_json() {
        let file = CaseFile::from_toml_str(
            "[[stack]]\nname = \"s\"\nradii = [100, 100, 100]\ninflate = 2\ndeflate = 3\nexpect = 5\n",
        )
        .unwrap();
        let json = run_cases(&file, &RunOptions::default()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"]["pass"], 1);
        assert_eq!(value["outcomes"][0]["status"], "pass");
        assert_eq!(value["outcomes"][0]["kind"], "stack");
        assert_eq!(value["outcomes"][0]["answer"], 5);
    }
}
