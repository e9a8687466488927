//! Settings reader: turns raw field values into validated [`Settings`].
//!
//! Rules are checked in a fixed order and the first violation is returned:
//!
//! 1. at least one operation enabled
//! 2. both bounds are finite numbers
//! 3. both bounds are integers
//! 4. both bounds are non-negative
//! 5. `min <= max`
//! 6. both bounds fit under [`MAX_OPERAND`]
//!
//! Problem and worksheet counts are clamped rather than rejected.

use std::ops::RangeInclusive;

use tracing::debug;
use worksheet_model::{
    DEFAULT_TITLE, MAX_OPERAND, Operation, PROBLEM_COUNT_RANGE, RawSettings, Settings,
    ValidationError, WORKSHEET_COUNT_RANGE,
};

/// Validates raw input and produces an immutable [`Settings`] record.
pub fn read_settings(raw: &RawSettings) -> Result<Settings, ValidationError> {
    let operations = raw.operations();
    if operations.is_empty() {
        return Err(ValidationError::NoOperation);
    }
    if !raw.min.is_finite() || !raw.max.is_finite() {
        return Err(ValidationError::NotANumber);
    }
    if raw.min.fract() != 0.0 || raw.max.fract() != 0.0 {
        return Err(ValidationError::NotAnInteger);
    }
    if raw.min < 0.0 || raw.max < 0.0 {
        return Err(ValidationError::Negative);
    }
    if raw.min > raw.max {
        return Err(ValidationError::MinAboveMax);
    }
    if raw.max > MAX_OPERAND as f64 {
        return Err(ValidationError::TooLarge { limit: MAX_OPERAND });
    }

    // Whole, non-negative and below MAX_OPERAND, so the casts are exact.
    let min = raw.min as u64;
    let max = raw.max as u64;

    let problem_count = clamp_count(raw.problem_count, &PROBLEM_COUNT_RANGE);
    let worksheet_count = clamp_count(raw.worksheet_count, &WORKSHEET_COUNT_RANGE);
    if problem_count as i64 != raw.problem_count || worksheet_count as i64 != raw.worksheet_count
    {
        debug!(
            requested_problems = raw.problem_count,
            requested_worksheets = raw.worksheet_count,
            problem_count,
            worksheet_count,
            "counts clamped"
        );
    }

    Ok(Settings {
        min,
        max,
        allow_carry: raw.carry && operations.contains(Operation::Addition),
        allow_borrow: raw.borrow && operations.contains(Operation::Subtraction),
        operations,
        problem_count,
        worksheet_count,
        title: normalize_title(&raw.title),
    })
}

/// Clamps a requested count into `range`.
pub fn clamp_count(value: i64, range: &RangeInclusive<usize>) -> usize {
    let lo = *range.start() as i64;
    let hi = *range.end() as i64;
    value.clamp(lo, hi) as usize
}

/// Trims the title and substitutes the default when it is blank.
pub fn normalize_title(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        trimmed.to_string()
    }
}
