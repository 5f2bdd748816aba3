use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sst_core::{
    PLUS_SAMPLES, PlusStrategy, STACK_SAMPLES, Stroke, parse_strokes, strokes_from_parts,
};

use crate::error::{CaseError, Result};

/// Environment variable naming the default case file.
pub const CASES_ENV: &str = "SST_CASES";

/// A plus-sign instance. The path is given either as parallel
/// `lengths`/`directions` or as compact `path` notation, never both.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlusCase {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lengths: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<PlusStrategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expect: Option<u64>,
}

impl PlusCase {
    /// Resolve the case's strokes. Input errors surface from `sst-core`.
    pub fn strokes(&self) -> sst_core::Result<Vec<Stroke>> {
        match (&self.path, &self.lengths, &self.directions) {
            (Some(path), _, _) => parse_strokes(path),
            (None, Some(lengths), Some(directions)) => strokes_from_parts(lengths, directions),
            (None, lengths, directions) => strokes_from_parts(
                lengths.as_deref().unwrap_or_default(),
                directions.as_deref().unwrap_or_default(),
            ),
        }
    }

    fn check_shape(&self) -> Result<()> {
        let parts = self.lengths.is_some() || self.directions.is_some();
        match (self.path.is_some(), parts) {
            (true, true) => Err(CaseError::InvalidData(format!(
                "plus case '{}' sets both path and lengths/directions",
                self.name
            ))),
            (false, false) => Err(CaseError::InvalidData(format!(
                "plus case '{}' has no path",
                self.name
            ))),
            _ => Ok(()),
        }
    }
}

/// A disc-stack instance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StackCase {
    #[serde(default)]
    pub name: String,
    pub radii: Vec<i64>,
    pub inflate: i64,
    pub deflate: i64,
    /// Expected cost. Case files are limited to `u64` expectations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expect: Option<u64>,
}

/// A batch of instances, as stored in a `.toml` or `.json` file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseFile {
    #[serde(default)]
    pub plus: Vec<PlusCase>,
    #[serde(default)]
    pub stack: Vec<StackCase>,
}

impl CaseFile {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CaseFile = toml::from_str(content)?;
        file.normalized()
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: CaseFile = serde_json::from_str(content)?;
        file.normalized()
    }

    /// The built-in reference vectors with their expected answers.
    pub fn builtin() -> Self {
        let plus = PLUS_SAMPLES
            .iter()
            .map(|s| PlusCase {
                name: s.name.to_string(),
                lengths: Some(s.lengths.to_vec()),
                directions: Some(s.directions.to_string()),
                expect: Some(s.expected),
                ..PlusCase::default()
            })
            .collect();
        let stack = STACK_SAMPLES
            .iter()
            .map(|s| StackCase {
                name: s.name.to_string(),
                radii: s.radii.to_vec(),
                inflate: s.inflate,
                deflate: s.deflate,
                expect: u64::try_from(s.expected).ok(),
            })
            .collect();
        Self { plus, stack }
    }

    pub fn len(&self) -> usize {
        self.plus.len() + self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plus.is_empty() && self.stack.is_empty()
    }

    /// Fill missing names and reject malformed plus cases.
    fn normalized(mut self) -> Result<Self> {
        for (i, case) in self.plus.iter_mut().enumerate() {
            if case.name.is_empty() {
                case.name = format!("plus-{i}");
            }
            case.check_shape()?;
        }
        for (i, case) in self.stack.iter_mut().enumerate() {
            if case.name.is_empty() {
                case.name = format!("stack-{i}");
            }
        }
        Ok(self)
    }
}

/// Load a case file, choosing the format by extension.
pub fn load_case_file(path: &Path) -> Result<CaseFile> {
    let format = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let parse: fn(&str) -> Result<CaseFile> = match format.as_deref() {
        Some("toml") => CaseFile::from_toml_str,
        Some("json") => CaseFile::from_json_str,
        _ => return Err(CaseError::UnsupportedFormat(path.to_path_buf())),
    };

    let content = fs::read_to_string(path).map_err(|source| CaseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file = parse(&content)?;
    tracing::info!(
        "loaded {} plus and {} stack cases from {}",
        file.plus.len(),
        file.stack.len(),
        path.display()
    );
    Ok(file)
}

/// Case file named by `SST_CASES`, if set and non-empty.
pub fn default_case_path() -> Option<PathBuf> {
    env::var_os(CASES_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TOML_CASES: &str = r#"
[[plus]]
name = "square"
lengths = [5, 2, 5, 2]
directions = "RDLU"
expect = 0

[[plus]]
path = "R1 U1 D2 U1 R1"
strategy = "sweep"

[[stack]]
radii = [6, 5, 4, 3]
inflate = 10
deflate = 1
expect = 19
"#;

    #[test]
    fn test_parse_toml() {
        let file = CaseFile::from_toml_str(TOML_CASES).unwrap();
        assert_eq!(file.len(), 3);
        assert_eq!(file.plus[0].name, "square");
        assert_eq!(file.plus[1].name, "plus-1");
        assert_eq!(file.plus[1].strategy, Some(PlusStrategy::Sweep));
        assert_eq!(file.stack[0].name, "stack-0");
        assert_eq!(file.stack[0].expect, Some(19));
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{"plus": [{"path": "U6 L3 D4", "expect": 0}], "stack": []}"#;
        let file = CaseFile::from_json_str(json).unwrap();
        assert_eq!(file.plus.len(), 1);
        assert_eq!(file.plus[0].strokes().unwrap().len(), 3);
    }

    #[test]
    fn test_rejects_ambiguous_plus_case() {
        let toml = r#"
[[plus]]
path = "R1 U1"
lengths = [1, 1]
directions = "RU"
"#;
        let err = CaseFile::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, CaseError::InvalidData(_)));
    }

    #[test]
    fn test_rejects_pathless_plus_case() {
        let err = CaseFile::from_toml_str("[[plus]]\nname = \"empty\"\n").unwrap_err();
        assert!(err.to_string().contains("has no path"));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let toml = "[[stack]]\nradii = [1]\ninflate = 1\ndeflate = 1\ncolour = \"red\"\n";
        assert!(matches!(
            CaseFile::from_toml_str(toml),
            Err(CaseError::Toml(_))
        ));
    }

    #[test]
    fn test_half_specified_parts_fail_at_solve_time() {
        let case = PlusCase {
            lengths: Some(vec![1, 2]),
            ..PlusCase::default()
        };
        assert!(case.strokes().is_err());
    }

    #[test]
    fn test_builtin_matches_samples() {
        let file = CaseFile::builtin();
        assert_eq!(file.plus.len(), PLUS_SAMPLES.len());
        assert_eq!(file.stack.len(), STACK_SAMPLES.len());
        assert!(file.plus.iter().all(|c| c.expect.is_some()));
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cases.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(TOML_CASES.as_bytes()).unwrap();

        let file = load_case_file(&path).unwrap();
        assert_eq!(file.len(), 3);
    }

    #[test]
    fn test_load_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cases.yaml");
        std::fs::write(&path, "plus: []").unwrap();
        assert!(matches!(
            load_case_file(&path),
            Err(CaseError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_case_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CaseError::Io { .. }));
    }
}
