//! The invocation payload and the reserve percentage it carries.

use std::fmt;

use serde::Deserialize;
use serde_json::{Number, Value};

use crate::error::{Error, Result};

/// A backup reserve percentage, guaranteed to be within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReservePercent(u8);

impl ReservePercent {
    pub const MAX: u8 = 100;

    pub fn new(value: i64) -> Result<Self> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= Self::MAX)
            .map(Self)
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "reservePercent must be between 0 and {}, got {value}",
                    Self::MAX
                ))
            })
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for ReservePercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// The payload handed over by the trigger.
///
/// Only `reservePercent` is read; any other field is ignored. The value is
/// kept raw until [`validate`](Self::validate) so that "absent" and the
/// literal `0` stay distinguishable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvocationRequest {
    #[serde(rename = "reservePercent", default)]
    reserve_percent: Option<Value>,
}

impl InvocationRequest {
    pub fn with_percent(percent: i64) -> Self {
        Self {
            reserve_percent: Some(Value::from(percent)),
        }
    }

    /// A request with no `reservePercent` at all.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json(payload: &str) -> Result<Self> {
        serde_json::from_str(payload)
            .map_err(|e| Error::InvalidInput(format!("invocation payload is not valid JSON: {e}")))
    }

    /// Extract the target percentage.
    ///
    /// Rejects a missing (or `null`) value but accepts `0`. Integral floats
    /// such as `20.0` count as integers.
    pub fn validate(&self) -> Result<ReservePercent> {
        match &self.reserve_percent {
            None | Some(Value::Null) => Err(Error::InvalidInput(
                "reservePercent not provided in event".into(),
            )),
            Some(Value::Number(n)) => match integral(n) {
                Some(v) => ReservePercent::new(v),
                None => Err(Error::InvalidInput(format!(
                    "reservePercent must be an integer, got {n}"
                ))),
            },
            Some(other) => Err(Error::InvalidInput(format!(
                "reservePercent must be an integer, got {other}"
            ))),
        }
    }
}

/// `n` as an integer when it has no fractional part.
fn integral(n: &Number) -> Option<i64> {
    n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
            .map(|f| f as i64)
    })
}
