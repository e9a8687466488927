pub mod error;
pub mod operation;
pub mod problem;
pub mod settings;

pub use error::{GenerateError, Result, ValidationError, WorksheetError};
pub use operation::{Operation, OperationSet};
pub use problem::{Problem, Worksheet};
pub use settings::{
    DEFAULT_TITLE, MAX_OPERAND, PROBLEM_COUNT_RANGE, RawSettings, Settings, WORKSHEET_COUNT_RANGE,
};
