//! Numeric preference fields and their validation.

use serde::{Deserialize, Serialize};

/// Parse the longest leading run of `raw` that forms a float.
///
/// Leading and trailing whitespace is ignored and anything after the number
/// is dropped, so `"1500kcal"` reads as `1500`. Returns `None` when no
/// prefix is numeric.
pub fn parse_leading_float(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    trimmed
        .char_indices()
        .map(|(start, c)| start + c.len_utf8())
        .rev()
        .find_map(|end| trimmed[..end].parse::<f64>().ok())
}

/// Check whether raw input is an acceptable positive number.
///
/// Empty input, input with no leading number, non-finite values and values
/// `<= 0` are rejected.
pub fn validate_numeric_field(raw: &str) -> bool {
    match parse_leading_float(raw) {
        Some(value) => value.is_finite() && value > 0.0,
        None => false,
    }
}

/// Where a field sits in its edit lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldState {
    /// Never edited, no value
    Empty,
    /// Filled from saved preferences, not yet edited
    Loaded,
    /// Edited, current value rejected
    TouchedInvalid,
    /// Edited, current value accepted
    TouchedValid,
}

/// A user-editable numeric input with its validation result.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PreferenceField {
    /// Text exactly as entered
    pub raw_value: String,
    /// Result of [`validate_numeric_field`] on `raw_value`
    pub is_valid: bool,
    /// Set once the user has edited the field
    pub touched: bool,
}

impl PreferenceField {
    /// Create an empty, untouched field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill a field from a stored value without marking it touched.
    pub fn loaded(value: f64) -> Self {
        let raw_value = value.to_string();
        Self {
            is_valid: validate_numeric_field(&raw_value),
            raw_value,
            touched: false,
        }
    }

    /// Apply an edit. Always re-validates and marks the field touched.
    pub fn update(&self, raw_value: &str) -> Self {
        Self {
            raw_value: raw_value.to_string(),
            is_valid: validate_numeric_field(raw_value),
            touched: true,
        }
    }

    /// Return to the empty, untouched state.
    pub fn reset(&self) -> Self {
        Self::new()
    }

    /// Parsed value, if the field currently holds a valid number.
    pub fn value(&self) -> Option<f64> {
        if self.is_valid {
            parse_leading_float(&self.raw_value)
        } else {
            None
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> FieldState {
        match (self.touched, self.is_valid) {
            (true, true) => FieldState::TouchedValid,
            (true, false) => FieldState::TouchedInvalid,
            (false, _) if self.raw_value.is_empty() => FieldState::Empty,
            (false, _) => FieldState::Loaded,
        }
    }

    /// Whether the UI should flag this field as an error.
    ///
    /// Untouched fields are never flagged, even though they are invalid.
    pub fn shows_error(&self) -> bool {
        self.touched && !self.is_valid
    }
}

/// Apply an edit to a field.
pub fn update_field(field: &PreferenceField, raw_value: &str) -> PreferenceField {
    field.update(raw_value)
}
