//! Абстрактное синтаксическое дерево CREATE выражений для SimpleSQL

pub mod builder;
pub mod create;
pub mod visitor;

#[cfg(test)]
pub mod tests;

// Переэкспортируем основные типы
pub use builder::{ColumnDeclBuilder, CreateBuilder};
pub use create::{
    AstTarget, ColumnDecl, CreateDatabase, CreateElement, CreateStatement, CreateTable, Datatype,
    ForeignKeyDecl, PrimaryKeyDecl,
};
pub use visitor::Visitor;
