//! Cross-cutting helpers: route guard and form validation.

pub mod guard;
pub mod validate;
