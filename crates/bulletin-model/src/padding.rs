//! Free-form padding overrides.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Side names in CSS shorthand order.
const SIDES: [&str; 4] = ["top", "right", "bottom", "left"];

/// A padding override as authored in the document: an object that may set
/// any subset of `top`, `right`, `bottom` and `left`.
///
/// Values are kept as raw JSON so that a later layer can replace a side
/// before coercion happens. Use [`coerce_int`] to read a side as a number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaddingOverride(pub Map<String, Value>);

impl PaddingOverride {
    /// Override with all four sides set.
    #[must_use]
    pub fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        let map = SIDES
            .iter()
            .zip([top, right, bottom, left])
            .map(|(side, value)| ((*side).to_owned(), Value::from(value)))
            .collect();
        Self(map)
    }

    /// Raw value of one side, if the override sets it.
    #[must_use]
    pub fn get(&self, side: &str) -> Option<&Value> {
        self.0.get(side)
    }

    /// True when no side is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Coerce a JSON value to an integer pixel amount.
///
/// Integers pass through, floats truncate toward zero, booleans become 1/0 and
/// strings holding a decimal integer are parsed. Anything else becomes 0.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn coerce_int(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
        }),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::String(s) => s.trim().parse().ok(),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
    .unwrap_or(0)
}
