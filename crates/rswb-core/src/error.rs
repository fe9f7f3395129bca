//! Error types for cell configuration and input validation.
//!
//! The daily state transition itself is infallible: every failure mode is
//! either rejected here at construction time or handled by a documented
//! numeric clamp inside the process functions.

use thiserror::Error;

pub type SwbResult<T> = Result<T, SwbError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SwbError {
    #[error("unknown calculation method '{0}' (expected one of: exponential, table, closed-form, fao56-two-stage)")]
    UnknownMethod(String),

    #[error("calculation method 'table' requires a soil-moisture retention table")]
    MissingRetentionTable,

    #[error("calculation method 'fao56-two-stage' requires crop parameters")]
    MissingCropParameters,

    #[error("soil storage maximum must be positive, got {0} mm (rooting_depth x available_water_capacity)")]
    NonPositiveStorageMax(f64),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("invalid forcing series: {0}")]
    InvalidForcing(String),

    #[error("invalid retention table: {0}")]
    InvalidRetentionTable(String),
}
