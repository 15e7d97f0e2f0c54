//! Токены для SQL лексера SimpleSQL
//!
//! Определяет все типы токенов, которые может распознать лексический анализатор,
//! включая ключевые слова SQL, идентификаторы, литералы и символы.

use crate::common::{Error, Result};
use crate::lexer::keywords;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Типы токенов SQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // === Ключевые слова SQL ===
    // Типы выражений
    Select,
    Update,
    Delete,
    Insert,
    Into,
    Create,
    Alter,
    Drop,
    Index,

    // Database/Table (для create и drop)
    Database,
    Table,

    Group,
    By,
    Procedure,
    Exec,
    Values,
    From,
    Distinct,
    Count,
    Where,
    Having,
    Between,
    Exists,
    Any,
    All,
    As,
    Like,
    In,

    // Булевы операторы
    And,
    Or,
    Not,

    // Ключевые слова сортировки
    Order,
    Asc,
    Desc,
    Is,
    Null,
    Min,
    Max,
    Avg,
    Sum,

    // Ключевые слова соединений
    Inner,
    Join,
    Left,
    Right,
    Full,
    Outer,
    Union,
    Coalesce,

    // Коллекционные типы
    Set,
    Enum,

    Top,
    Limit,
    Percent,

    // Ключевые слова типов данных
    Int,
    Double,
    Unsigned,
    Char,
    Varchar,
    String,
    Binary,

    // === Символы ===
    Star,
    Quote,
    Semicolon,
    Equal,
    Nequal,
    Gthan,
    Lthan,
    Geq,
    Leq,
    LParen,
    RParen,
    Comma,
    Underscore,
    PercentSign,
    Plus,

    // === Литералы ===
    StringLit,
    IntLit,
    UintLit,
    DoubleLit,
    CharLit,

    // === Идентификаторы и ошибки ===
    Identifier,
    Error,
}

impl TokenKind {
    /// Проверяет, является ли токен ключевым словом.
    /// Явная классификация по множеству, без сравнения порядковых значений.
    pub fn is_keyword(&self) -> bool {
        match self {
            TokenKind::Select | TokenKind::Update | TokenKind::Delete | TokenKind::Insert |
            TokenKind::Into | TokenKind::Create | TokenKind::Alter | TokenKind::Drop |
            TokenKind::Index | TokenKind::Database | TokenKind::Table | TokenKind::Group |
            TokenKind::By | TokenKind::Procedure | TokenKind::Exec | TokenKind::Values |
            TokenKind::From | TokenKind::Distinct | TokenKind::Count | TokenKind::Where |
            TokenKind::Having | TokenKind::Between | TokenKind::Exists | TokenKind::Any |
            TokenKind::All | TokenKind::As | TokenKind::Like | TokenKind::In |
            TokenKind::And | TokenKind::Or | TokenKind::Not | TokenKind::Order |
            TokenKind::Asc | TokenKind::Desc | TokenKind::Is | TokenKind::Null |
            TokenKind::Min | TokenKind::Max | TokenKind::Avg | TokenKind::Sum |
            TokenKind::Inner | TokenKind::Join | TokenKind::Left | TokenKind::Right |
            TokenKind::Full | TokenKind::Outer | TokenKind::Union | TokenKind::Coalesce |
            TokenKind::Set | TokenKind::Enum | TokenKind::Top | TokenKind::Limit |
            TokenKind::Percent | TokenKind::Int | TokenKind::Double | TokenKind::Unsigned |
            TokenKind::Char | TokenKind::Varchar | TokenKind::String | TokenKind::Binary => true,
            _ => false,
        }
    }

    /// Проверяет, является ли токен символом
    pub fn is_symbol(&self) -> bool {
        match self {
            TokenKind::Star | TokenKind::Quote | TokenKind::Semicolon | TokenKind::Equal |
            TokenKind::Nequal | TokenKind::Gthan | TokenKind::Lthan | TokenKind::Geq |
            TokenKind::Leq | TokenKind::LParen | TokenKind::RParen | TokenKind::Comma |
            TokenKind::Underscore | TokenKind::PercentSign | TokenKind::Plus => true,
            _ => false,
        }
    }

    /// Проверяет, является ли токен литералом
    pub fn is_literal(&self) -> bool {
        match self {
            TokenKind::StringLit | TokenKind::IntLit | TokenKind::UintLit |
            TokenKind::DoubleLit | TokenKind::CharLit => true,
            _ => false,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Select => "SELECT",
            TokenKind::Update => "UPDATE",
            TokenKind::Delete => "DELETE",
            TokenKind::Insert => "INSERT",
            TokenKind::Into => "INTO",
            TokenKind::Create => "CREATE",
            TokenKind::Alter => "ALTER",
            TokenKind::Drop => "DROP",
            TokenKind::Index => "INDEX",
            TokenKind::Database => "DATABASE",
            TokenKind::Table => "TABLE",
            TokenKind::Group => "GROUP",
            TokenKind::By => "BY",
            TokenKind::Procedure => "PROCEDURE",
            TokenKind::Exec => "EXEC",
            TokenKind::Values => "VALUES",
            TokenKind::From => "FROM",
            TokenKind::Distinct => "DISTINCT",
            TokenKind::Count => "COUNT",
            TokenKind::Where => "WHERE",
            TokenKind::Having => "HAVING",
            TokenKind::Between => "BETWEEN",
            TokenKind::Exists => "EXISTS",
            TokenKind::Any => "ANY",
            TokenKind::All => "ALL",
            TokenKind::As => "AS",
            TokenKind::Like => "LIKE",
            TokenKind::In => "IN",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::Order => "ORDER",
            TokenKind::Asc => "ASC",
            TokenKind::Desc => "DESC",
            TokenKind::Is => "IS",
            TokenKind::Null => "NULL",
            TokenKind::Min => "MIN",
            TokenKind::Max => "MAX",
            TokenKind::Avg => "AVG",
            TokenKind::Sum => "SUM",
            TokenKind::Inner => "INNER",
            TokenKind::Join => "JOIN",
            TokenKind::Left => "LEFT",
            TokenKind::Right => "RIGHT",
            TokenKind::Full => "FULL",
            TokenKind::Outer => "OUTER",
            TokenKind::Union => "UNION",
            TokenKind::Coalesce => "COALESCE",
            TokenKind::Set => "SET",
            TokenKind::Enum => "ENUM",
            TokenKind::Top => "TOP",
            TokenKind::Limit => "LIMIT",
            TokenKind::Percent => "PERCENT",
            TokenKind::Int => "INT",
            TokenKind::Double => "DOUBLE",
            TokenKind::Unsigned => "UNSIGNED",
            TokenKind::Char => "CHAR",
            TokenKind::Varchar => "VARCHAR",
            TokenKind::String => "STRING",
            TokenKind::Binary => "BINARY",
            TokenKind::Star => "STAR",
            TokenKind::Quote => "QUOTE",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Equal => "EQUAL",
            TokenKind::Nequal => "NEQUAL",
            TokenKind::Gthan => "GTHAN",
            TokenKind::Lthan => "LTHAN",
            TokenKind::Geq => "GEQ",
            TokenKind::Leq => "LEQ",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Comma => "COMMA",
            TokenKind::Underscore => "UNDERSCORE",
            TokenKind::PercentSign => "PERCENT_SIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::StringLit => "STRINGLIT",
            TokenKind::IntLit => "INTLIT",
            TokenKind::UintLit => "UINTLIT",
            TokenKind::DoubleLit => "DOUBLELIT",
            TokenKind::CharLit => "CHARLIT",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Error => "ERROR",
        };
        write!(f, "{}", name)
    }
}

/// Полезная нагрузка токена
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TokenValue {
    /// Токен без полезной нагрузки
    None,
    /// Текст идентификатора или сообщение об ошибке
    Text(String),
    /// Целочисленный литерал
    Int(i64),
    /// Беззнаковый целочисленный литерал
    UInt(u64),
    /// Литерал с плавающей точкой
    Double(f64),
    /// Символьный литерал
    Char(char),
}

/// Токен с типом и полезной нагрузкой.
/// Неизменяем после конструирования.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    kind: TokenKind,
    value: TokenValue,
}

impl Token {
    /// Создает простой токен заданного типа без полезной нагрузки
    pub fn new(kind: TokenKind) -> Self {
        Self {
            kind,
            value: TokenValue::None,
        }
    }

    /// Создает токен заданного типа с полезной нагрузкой.
    /// Инварианты согласованности типа и нагрузки обеспечивает вызывающий код.
    pub(crate) fn with_value(kind: TokenKind, value: TokenValue) -> Self {
        Self { kind, value }
    }

    /// Создает токен идентификатора с заданным именем.
    ///
    /// Имя идентификатора не может совпадать с зарезервированным ключевым словом
    /// (без учета регистра); такое совпадение является нарушением контракта.
    pub fn identifier(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if keywords::is_keyword(&name) {
            return Err(Error::contract(format!(
                "identifier '{}' collides with a reserved keyword",
                name
            )));
        }
        Ok(Self::with_value(TokenKind::Identifier, TokenValue::Text(name)))
    }

    /// Создает токен ошибки с заданным сообщением
    pub fn error(message: impl Into<String>) -> Self {
        Self::with_value(TokenKind::Error, TokenValue::Text(message.into()))
    }

    /// Создает токен строкового литерала
    pub fn string_lit(literal: impl Into<String>) -> Self {
        Self::with_value(TokenKind::StringLit, TokenValue::Text(literal.into()))
    }

    /// Создает токен целочисленного литерала
    pub fn int_lit(literal: i64) -> Self {
        Self::with_value(TokenKind::IntLit, TokenValue::Int(literal))
    }

    /// Создает токен беззнакового целочисленного литерала
    pub fn uint_lit(literal: u64) -> Self {
        Self::with_value(TokenKind::UintLit, TokenValue::UInt(literal))
    }

    /// Создает токен литерала с плавающей точкой
    pub fn double_lit(literal: f64) -> Self {
        Self::with_value(TokenKind::DoubleLit, TokenValue::Double(literal))
    }

    /// Создает токен символьного литерала
    pub fn char_lit(literal: char) -> Self {
        Self::with_value(TokenKind::CharLit, TokenValue::Char(literal))
    }

    /// Возвращает тип токена
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Возвращает полезную нагрузку токена
    pub fn value(&self) -> &TokenValue {
        &self.value
    }

    /// Возвращает текстовую нагрузку токена (имя идентификатора,
    /// сообщение об ошибке или строковый литерал)
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, &self.value) {
            (TokenKind::Identifier, TokenValue::Text(name)) => write!(f, "Identifier({})", name),
            (TokenKind::Error, TokenValue::Text(message)) => write!(f, "Error({})", message),
            (TokenKind::StringLit, TokenValue::Text(literal)) => write!(f, "StringLit({})", literal),
            (TokenKind::IntLit, TokenValue::Int(literal)) => write!(f, "IntLit({})", literal),
            (TokenKind::UintLit, TokenValue::UInt(literal)) => write!(f, "UintLit({})", literal),
            (TokenKind::DoubleLit, TokenValue::Double(literal)) => {
                write!(f, "DoubleLit({})", literal)
            }
            (TokenKind::CharLit, TokenValue::Char(literal)) => write!(f, "CharLit({})", literal),
            _ => write!(f, "{}", self.kind),
        }
    }
}
