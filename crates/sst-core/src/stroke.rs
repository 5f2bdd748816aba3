use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

static STROKE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([UDLRudlr])(\d+)$").unwrap());

/// A vertex of the walk in raw (uncompressed) coordinates.
pub type Vertex = (i64, i64);

/// Direction character that is not one of `U`, `D`, `L`, `R`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownDirection(pub char);

impl fmt::Display for UnknownDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown direction {:?}", self.0)
    }
}

impl std::error::Error for UnknownDirection {}

/// Axis-aligned brush direction. Up is +y, Right is +x.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step `(dx, dy)`.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Self::Up => (0, 1),
            Self::Down => (0, -1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    pub fn code(self) -> char {
        match self {
            Self::Up => 'U',
            Self::Down => 'D',
            Self::Left => 'L',
            Self::Right => 'R',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = UnknownDirection;

    fn try_from(c: char) -> std::result::Result<Self, Self::Error> {
        match c {
            'U' => Ok(Self::Up),
            'D' => Ok(Self::Down),
            'L' => Ok(Self::Left),
            'R' => Ok(Self::Right),
            other => Err(UnknownDirection(other)),
        }
    }
}

impl From<Direction> for char {
    fn from(d: Direction) -> char {
        d.code()
    }
}

/// One brush stroke. Zero-length strokes are legal and paint nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stroke {
    pub direction: Direction,
    pub length: u64,
}

impl Stroke {
    pub fn new(direction: Direction, length: u64) -> Self {
        Self { direction, length }
    }
}

impl fmt::Display for Stroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.direction.code(), self.length)
    }
}

/// Build strokes from parallel length and direction-code inputs.
pub fn strokes_from_parts(lengths: &[i64], directions: &str) -> Result<Vec<Stroke>> {
    let codes: Vec<char> = directions.chars().collect();
    if codes.len() != lengths.len() {
        return Err(Error::LengthMismatch {
            what: "direction codes",
            expected: lengths.len(),
            actual: codes.len(),
        });
    }

    lengths
        .iter()
        .zip(codes)
        .enumerate()
        .map(|(index, (&length, code))| {
            let direction = Direction::try_from(code)
                .map_err(|e| Error::InvalidDirection { index, found: e.0 })?;
            let length =
                u64::try_from(length).map_err(|_| Error::NegativeLength { index, length })?;
            Ok(Stroke::new(direction, length))
        })
        .collect()
}

/// Parse compact stroke notation such as `"U6 L3 D4"` or `"r1,d1,l1"`.
pub fn parse_strokes(text: &str) -> Result<Vec<Stroke>> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(|token| {
            let malformed = || Error::MalformedStroke {
                token: token.to_string(),
            };
            let caps = STROKE_TOKEN.captures(token).ok_or_else(malformed)?;
            let code = caps[1].chars().next().ok_or_else(malformed)?;
            let direction = Direction::try_from(code.to_ascii_uppercase())
                .map_err(|_| malformed())?;
            let length = caps[2].parse::<u64>().map_err(|_| malformed())?;
            Ok(Stroke::new(direction, length))
        })
        .collect()
}

/// Render strokes back into compact notation.
pub fn format_strokes(strokes: &[Stroke]) -> String {
    strokes
        .iter()
        .map(Stroke::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Walk the path from the origin and return every vertex in order.
///
/// Zero-length strokes add no vertex, so consecutive vertices always
/// differ in exactly one axis.
pub fn walk(strokes: &[Stroke]) -> Result<Vec<Vertex>> {
    let mut vertices = Vec::with_capacity(strokes.len() + 1);
    let (mut x, mut y) = (0i64, 0i64);
    vertices.push((x, y));

    for (index, stroke) in strokes.iter().enumerate() {
        if stroke.length == 0 {
            continue;
        }
        let overflow = || Error::CoordinateOverflow { index };
        let length = i64::try_from(stroke.length).map_err(|_| overflow())?;
        let (dx, dy) = stroke.direction.delta();
        x = x.checked_add(dx * length).ok_or_else(overflow)?;
        y = y.checked_add(dy * length).ok_or_else(overflow)?;
        vertices.push((x, y));
    }

    Ok(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_codes() {
        for c in ['U', 'D', 'L', 'R'] {
            let d = Direction::try_from(c).unwrap();
            assert_eq!(d.code(), c);
        }
        assert_eq!(Direction::try_from('x'), Err(UnknownDirection('x')));
        assert_eq!(Direction::try_from('u'), Err(UnknownDirection('u')));
    }

    #[test]
    fn test_from_parts() {
        let strokes = strokes_from_parts(&[1, 0, 3], "RUL").unwrap();
        assert_eq!(
            strokes,
            vec![
                Stroke::new(Direction::Right, 1),
                Stroke::new(Direction::Up, 0),
                Stroke::new(Direction::Left, 3),
            ]
        );
    }

    #[test]
    fn test_from_parts_mismatch() {
        let err = strokes_from_parts(&[1, 2], "R").unwrap_err();
        assert_eq!(
            err,
            Error::LengthMismatch {
                what: "direction codes",
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_from_parts_bad_direction() {
        let err = strokes_from_parts(&[1, 2, 3], "RXU").unwrap_err();
        assert_eq!(err, Error::InvalidDirection { index: 1, found: 'X' });
    }

    #[test]
    fn test_from_parts_negative_length() {
        let err = strokes_from_parts(&[1, -2], "RU").unwrap_err();
        assert_eq!(err, Error::NegativeLength { index: 1, length: -2 });
    }

    #[test]
    fn test_parse_notation() {
        let strokes = parse_strokes("U6 l3,\tD4").unwrap();
        assert_eq!(format_strokes(&strokes), "U6 L3 D4");
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_strokes("  ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed() {
        let err = parse_strokes("U6 Q3").unwrap_err();
        assert_eq!(
            err,
            Error::MalformedStroke {
                token: "Q3".to_string()
            }
        );
        assert!(parse_strokes("U").is_err());
        assert!(parse_strokes("U99999999999999999999999").is_err());
    }

    #[test]
    fn test_walk_skips_zero_length() {
        let strokes = strokes_from_parts(&[2, 0, 1], "RUD").unwrap();
        assert_eq!(walk(&strokes).unwrap(), vec![(0, 0), (2, 0), (2, -1)]);
    }

    #[test]
    fn test_walk_overflow() {
        let strokes = vec![
            Stroke::new(Direction::Right, i64::MAX as u64),
            Stroke::new(Direction::Right, 1),
        ];
        assert_eq!(walk(&strokes), Err(Error::CoordinateOverflow { index: 1 }));

        let huge = vec![Stroke::new(Direction::Up, u64::MAX)];
        assert_eq!(walk(&huge), Err(Error::CoordinateOverflow { index: 0 }));
    }

    #[test]
    fn test_serde_single_letter() {
        let s = Stroke::new(Direction::Left, 4);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"direction":"L","length":4}"#);
        let back: Stroke = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
        assert!(serde_json::from_str::<Direction>(r#""Z""#).is_err());
    }
}
