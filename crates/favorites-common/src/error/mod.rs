//! Error types

mod app_error;

pub use app_error::{status_for_kind, AppError, AppResult, ErrorResponse};
