//! Лексический анализ SQL команд для SimpleSQL

pub mod keywords;
pub mod lexer;
pub mod token;

#[cfg(test)]
pub mod tests;

// Переэкспортируем основные типы
pub use keywords::KEYWORDS;
pub use lexer::{tokenize_command, Lexer};
pub use token::{Token, TokenKind, TokenValue};
