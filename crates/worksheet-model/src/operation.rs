//! Arithmetic operations and the set of operations enabled for a worksheet.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// An arithmetic operation a worksheet problem can use.
///
/// Declaration order is the canonical order: Addition, Subtraction,
/// Multiplication, Division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    /// All operations in canonical order.
    pub const ALL: [Operation; 4] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
    ];

    /// Symbol printed between the operands.
    pub fn symbol(&self) -> char {
        match self {
            Operation::Addition => '+',
            Operation::Subtraction => '-',
            Operation::Multiplication => '×',
            Operation::Division => '÷',
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
            Operation::Division => "division",
        }
    }

    /// Applies the operation, returning `None` on overflow, underflow, or an
    /// inexact division.
    pub fn apply(&self, a: u64, b: u64) -> Option<u64> {
        match self {
            Operation::Addition => a.checked_add(b),
            Operation::Subtraction => a.checked_sub(b),
            Operation::Multiplication => a.checked_mul(b),
            Operation::Division => {
                if b == 0 || a % b != 0 {
                    None
                } else {
                    Some(a / b)
                }
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Operation {
    type Err = String;

    /// Parses names (`addition`), short names (`add`) and symbols (`+`),
    /// ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "addition" | "add" | "+" => Ok(Operation::Addition),
            "subtraction" | "sub" | "-" => Ok(Operation::Subtraction),
            "multiplication" | "mul" | "×" | "x" | "*" => Ok(Operation::Multiplication),
            "division" | "div" | "÷" | "/" => Ok(Operation::Division),
            _ => Err(format!("unknown operation: {s}")),
        }
    }
}

/// Ordered set of enabled operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationSet(BTreeSet<Operation>);

impl OperationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from the four form toggles.
    pub fn from_flags(addition: bool, subtraction: bool, multiplication: bool, division: bool) -> Self {
        let flags = [addition, subtraction, multiplication, division];
        Operation::ALL
            .iter()
            .zip(flags)
            .filter(|(_, enabled)| *enabled)
            .map(|(operation, _)| *operation)
            .collect()
    }

    pub fn insert(&mut self, operation: Operation) -> bool {
        self.0.insert(operation)
    }

    pub fn contains(&self, operation: Operation) -> bool {
        self.0.contains(&operation)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Enabled operations in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Operation> + '_ {
        self.0.iter().copied()
    }

    /// Enabled operations as an indexable list.
    pub fn to_vec(&self) -> Vec<Operation> {
        self.iter().collect()
    }
}

impl FromIterator<Operation> for OperationSet {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for OperationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|op| op.as_str()).collect();
        write!(f, "{}", names.join(", "))
    }
}
