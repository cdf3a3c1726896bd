use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A backend movie identifier. Always positive.
///
/// The backend hands ids out as JSON integers, floats or strings depending on
/// the endpoint. Zero counts as "no id", so a movie whose real id is 0 can
/// never be shown or opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(u64);

impl MovieId {
    pub fn new(value: u64) -> Option<Self> {
        if value == 0 {
            None
        } else {
            Some(MovieId(value))
        }
    }

    /// Parse an id from user-supplied text such as a query parameter.
    pub fn parse(s: &str) -> Option<Self> {
        let value = s.trim().parse::<i64>().ok()?;
        if value <= 0 {
            return None;
        }
        Self::new(value as u64)
    }

    /// Coerce a loosely typed JSON field into an id.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => {
                if let Some(v) = n.as_u64() {
                    Self::new(v)
                } else if n.is_i64() {
                    // negative
                    None
                } else {
                    let f = n.as_f64()?;
                    if f >= 1.0 && f.fract() == 0.0 && f <= u64::MAX as f64 {
                        Self::new(f as u64)
                    } else {
                        None
                    }
                }
            }
            Value::String(s) => Self::parse(s),
            _ => None,
        }
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
