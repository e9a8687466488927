//! Worksheet generation core.
//!
//! - [`reader`]: raw settings to validated [`Settings`](worksheet_model::Settings)
//! - [`generator`]: per-operation problem generators and the dispatcher
//! - [`session`]: preview/export planning with an explicit preview cache
//! - [`schedule`]: debounce and minimum-loading timers for preview refresh

pub mod digits;
pub mod generator;
pub mod reader;
pub mod schedule;
pub mod session;
pub mod source;

pub use digits::{has_borrow, has_carry};
pub use generator::{
    ADDITION_ATTEMPTS, DIVISION_ATTEMPTS, SUBTRACTION_ATTEMPTS, generate_addition,
    generate_division, generate_list, generate_multiplication, generate_one,
    generate_subtraction,
};
pub use reader::{clamp_count, normalize_title, read_settings};
pub use schedule::{
    Debouncer, LoadingHold, MIN_LOADING_VISIBLE, PREVIEW_DEBOUNCE, SettingField,
};
pub use session::{
    ExportPlan, Preview, SINGLE_SHEET_FILE_NAME, multi_sheet_file_name, plan_export, preview,
    preview_description, sheet_title,
};
pub use source::UniformSource;
