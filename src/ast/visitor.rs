//! Посетитель для обхода AST узлов CREATE выражений
//!
//! Двойная диспетчеризация: каждый конкретный узел в `accept` вызывает
//! операцию посетителя, соответствующую своему типу. Реализации по умолчанию
//! ничего не делают, поэтому потребитель переопределяет только нужные ему
//! типы узлов. Добавление потребителя не требует изменений в узлах.

use crate::ast::create::{ColumnDecl, CreateDatabase, CreateTable, ForeignKeyDecl, PrimaryKeyDecl};

/// Посетитель AST узлов CREATE выражений
pub trait Visitor {
    /// Посещает узел CREATE DATABASE
    fn visit_create_database(&mut self, _node: &CreateDatabase) {}

    /// Посещает узел CREATE TABLE
    fn visit_create_table(&mut self, _node: &CreateTable) {}

    /// Посещает объявление колонки
    fn visit_column_decl(&mut self, _node: &ColumnDecl) {}

    /// Посещает объявление первичного ключа
    fn visit_primary_key_decl(&mut self, _node: &PrimaryKeyDecl) {}

    /// Посещает объявление внешнего ключа
    fn visit_foreign_key_decl(&mut self, _node: &ForeignKeyDecl) {}
}
