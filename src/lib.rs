//! simplesql - Лексический анализ SQL команд и AST для CREATE выражений
//!
//! Этот модуль предоставляет лексический анализатор, преобразующий текст SQL
//! команды в последовательность типизированных токенов, и модель узлов
//! абстрактного синтаксического дерева для семейства CREATE выражений с
//! построителями и обходом через посетителя.

pub mod ast;
pub mod cli;
pub mod common;
pub mod lexer;

pub use common::error::{Error, Result};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
