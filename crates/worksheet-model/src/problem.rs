use serde::{Deserialize, Serialize};

use crate::operation::Operation;

/// One arithmetic problem: `operand_a <operation> operand_b = answer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub operand_a: u64,
    pub operand_b: u64,
    pub operation: Operation,
    pub answer: u64,
}

impl Problem {
    /// Builds a problem whose answer is computed from the operands.
    ///
    /// Returns `None` when the operation has no exact non-negative result.
    pub fn new(operation: Operation, operand_a: u64, operand_b: u64) -> Option<Self> {
        let answer = operation.apply(operand_a, operand_b)?;
        Some(Self {
            operand_a,
            operand_b,
            operation,
            answer,
        })
    }

    /// True when `answer` is the exact result of the operation.
    pub fn is_consistent(&self) -> bool {
        self.operation.apply(self.operand_a, self.operand_b) == Some(self.answer)
    }
}

/// One page of output: a title and its problems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worksheet {
    pub title: String,
    pub problems: Vec<Problem>,
}

impl Worksheet {
    pub fn new(title: impl Into<String>, problems: Vec<Problem>) -> Self {
        Self {
            title: title.into(),
            problems,
        }
    }

    /// Denominator of the score field.
    pub fn problem_count(&self) -> usize {
        self.problems.len()
    }
}
