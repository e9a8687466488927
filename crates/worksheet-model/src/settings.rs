//! Raw and validated worksheet settings.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::operation::{Operation, OperationSet};

/// Title used when the user leaves the title blank.
pub const DEFAULT_TITLE: &str = "Math Worksheet";

/// Problems per worksheet; values outside are clamped.
pub const PROBLEM_COUNT_RANGE: RangeInclusive<usize> = 1..=18;

/// Worksheets per export; values outside are clamped.
pub const WORKSHEET_COUNT_RANGE: RangeInclusive<usize> = 1..=50;

/// Largest accepted operand bound. Keeps every product inside `u64`.
pub const MAX_OPERAND: u64 = 999_999_999;

/// Unvalidated field values, as a form or command line supplies them.
///
/// Bounds are floating point so that "not a number" and fractional input can
/// be represented and rejected by the reader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSettings {
    pub min: f64,
    pub max: f64,
    pub addition: bool,
    pub subtraction: bool,
    pub multiplication: bool,
    pub division: bool,
    /// Allow carrying in addition problems.
    pub carry: bool,
    /// Allow borrowing in subtraction problems.
    pub borrow: bool,
    pub problem_count: i64,
    pub worksheet_count: i64,
    pub title: String,
}

impl Default for RawSettings {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10.0,
            addition: true,
            subtraction: false,
            multiplication: false,
            division: false,
            carry: false,
            borrow: false,
            problem_count: 10,
            worksheet_count: 1,
            title: String::new(),
        }
    }
}

impl RawSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Enables exactly the given operations.
    pub fn with_operations(mut self, operations: &[Operation]) -> Self {
        self.addition = operations.contains(&Operation::Addition);
        self.subtraction = operations.contains(&Operation::Subtraction);
        self.multiplication = operations.contains(&Operation::Multiplication);
        self.division = operations.contains(&Operation::Division);
        self
    }

    pub fn with_carry(mut self, enable: bool) -> Self {
        self.carry = enable;
        self
    }

    pub fn with_borrow(mut self, enable: bool) -> Self {
        self.borrow = enable;
        self
    }

    pub fn with_problem_count(mut self, count: i64) -> Self {
        self.problem_count = count;
        self
    }

    pub fn with_worksheet_count(mut self, count: i64) -> Self {
        self.worksheet_count = count;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Operations whose toggle is on.
    pub fn operations(&self) -> OperationSet {
        OperationSet::from_flags(
            self.addition,
            self.subtraction,
            self.multiplication,
            self.division,
        )
    }
}

/// Validated configuration. Produced by the settings reader; immutable after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Lower operand bound (inclusive).
    pub min: u64,
    /// Upper operand bound (inclusive), never below `min`.
    pub max: u64,
    /// Never empty once validated.
    pub operations: OperationSet,
    /// Only meaningful when addition is enabled; false otherwise.
    pub allow_carry: bool,
    /// Only meaningful when subtraction is enabled; false otherwise.
    pub allow_borrow: bool,
    pub problem_count: usize,
    pub worksheet_count: usize,
    pub title: String,
}

impl Settings {
    /// True when more than one worksheet will be exported.
    pub fn is_multi_sheet(&self) -> bool {
        self.worksheet_count > 1
    }
}
