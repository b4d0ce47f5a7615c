//! Reusable UI components.

pub mod field_error;
pub mod toast;
