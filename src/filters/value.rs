use serde::{Deserialize, Serialize};

/// A value as handed over by a form control, before normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawValue {
    /// `null` / `undefined` / cleared control
    #[default]
    Empty,
    Flag(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl RawValue {
    /// Text rendering used by free-text fields.
    pub fn to_text(&self) -> String {
        match self {
            RawValue::Empty => String::new(),
            RawValue::Flag(flag) => flag.to_string(),
            RawValue::Number(n) if n.is_finite() => n.to_string(),
            RawValue::Number(_) => String::new(),
            RawValue::Text(text) => text.clone(),
            RawValue::List(items) => items.join(","),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Flag(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<u32> for RawValue {
    fn from(value: u32) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<Vec<String>> for RawValue {
    fn from(value: Vec<String>) -> Self {
        RawValue::List(value)
    }
}

impl From<&[&str]> for RawValue {
    fn from(value: &[&str]) -> Self {
        RawValue::List(value.iter().map(|s| s.to_string()).collect())
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Empty, Into::into)
    }
}

/// Normalizes any raw input for a numeric field.
///
/// Blank, missing, non-numeric and non-finite input all become `None`, so a
/// numeric filter is either a real number or no constraint at all.
pub fn parse_number(raw: &RawValue) -> Option<f64> {
    let number = match raw {
        RawValue::Number(n) => *n,
        RawValue::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            text.parse::<f64>().ok()?
        }
        RawValue::List(items) if items.len() == 1 => {
            return parse_number(&RawValue::Text(items[0].clone()));
        }
        RawValue::Empty | RawValue::Flag(_) | RawValue::List(_) => return None,
    };
    number.is_finite().then_some(number)
}

/// Checkbox-style normalization: anything not clearly "on" is off.
pub fn parse_flag(raw: &RawValue) -> bool {
    match raw {
        RawValue::Flag(flag) => *flag,
        RawValue::Number(n) => *n != 0.0 && !n.is_nan(),
        RawValue::Text(text) => matches!(
            text.trim().to_ascii_lowercase().as_str(),
            "true" | "1" | "on" | "yes"
        ),
        RawValue::List(items) => items.iter().any(|item| parse_flag(&RawValue::Text(item.clone()))),
        RawValue::Empty => false,
    }
}

/// Page numbers are positive integers; anything else lands on page 1.
pub fn parse_page(raw: &RawValue) -> u32 {
    match parse_number(raw) {
        Some(n) if n >= 1.0 => n.floor().min(u32::MAX as f64) as u32,
        _ => 1,
    }
}
