//! Общие типы и утилиты для SimpleSQL

pub mod error;

pub use error::{Error, Result};
