//! Узлы абстрактного синтаксического дерева для CREATE выражений
//!
//! Все узлы неизменяемы после конструирования: поля закрыты, доступ только
//! через методы чтения. Проверяемый путь конструирования — построители из
//! модуля `builder`.

use crate::ast::visitor::Visitor;
use serde::{Deserialize, Serialize};

/// Цель create или drop выражения: база данных или таблица
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AstTarget {
    #[default]
    Database,
    Table,
}

/// Типы данных, допустимые для колонок
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Datatype {
    #[default]
    Int,
    Double,
    Uint,
    Udouble,
    Char,
    Varchar,
    String,
    Binary,
    Enum,
    Set,
}

/// CREATE выражение
///
/// create_statement ::= <create_table> | <create_database>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CreateStatement {
    /// CREATE DATABASE выражение
    Database(CreateDatabase),
    /// CREATE TABLE выражение
    Table(CreateTable),
}

impl CreateStatement {
    /// Возвращает имя создаваемой таблицы или базы данных
    pub fn name(&self) -> &str {
        match self {
            CreateStatement::Database(node) => node.name(),
            CreateStatement::Table(node) => node.name(),
        }
    }

    /// Передает посетителя конкретному узлу выражения
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            CreateStatement::Database(node) => node.accept(visitor),
            CreateStatement::Table(node) => node.accept(visitor),
        }
    }
}

/// CREATE DATABASE выражение
///
/// create_database ::= CREATE DATABASE <identifier>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDatabase {
    name: String,
}

impl CreateDatabase {
    /// Создает новый узел CREATE DATABASE с заданным именем
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Возвращает имя создаваемой базы данных
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Диспетчеризация посетителя для узлов CREATE DATABASE
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_create_database(self);
    }
}

/// CREATE TABLE выражение
///
/// create_table ::= CREATE TABLE <identifier> (<element> {, <element>}*)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTable {
    name: String,
    elements: Vec<CreateElement>,
}

impl CreateTable {
    /// Создает новый узел CREATE TABLE с заданным именем и элементами.
    /// Непустоту списка элементов гарантирует `CreateBuilder::build`.
    pub fn new(name: impl Into<String>, elements: Vec<CreateElement>) -> Self {
        Self {
            name: name.into(),
            elements,
        }
    }

    /// Возвращает имя создаваемой таблицы
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Возвращает упорядоченный список элементов выражения
    pub fn elements(&self) -> &[CreateElement] {
        &self.elements
    }

    /// Диспетчеризация посетителя для узлов CREATE TABLE.
    /// В элементы не спускается: обход элементов определяет посетитель.
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_create_table(self);
    }
}

/// Элемент CREATE TABLE выражения
///
/// create_element ::= <column_decl> | <primary_key_decl> | <foreign_key_decl>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CreateElement {
    /// Объявление колонки
    Column(ColumnDecl),
    /// Объявление первичного ключа
    PrimaryKey(PrimaryKeyDecl),
    /// Объявление внешнего ключа
    ForeignKey(ForeignKeyDecl),
}

impl CreateElement {
    /// Передает посетителя конкретному узлу элемента
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            CreateElement::Column(node) => node.accept(visitor),
            CreateElement::PrimaryKey(node) => node.accept(visitor),
            CreateElement::ForeignKey(node) => node.accept(visitor),
        }
    }
}

/// Объявление колонки в CREATE TABLE выражении
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDecl {
    name: String,
    nullable: bool,
    datatype: Datatype,
    length: u32,
}

impl ColumnDecl {
    /// Создает новое объявление колонки с заданным именем, допустимостью
    /// NULL значений, типом данных и длиной
    pub fn new(name: impl Into<String>, nullable: bool, datatype: Datatype, length: u32) -> Self {
        Self {
            name: name.into(),
            nullable,
            datatype,
            length,
        }
    }

    /// Возвращает имя объявленной колонки
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Возвращает true, если в колонке допустимы NULL значения
    pub fn nullable(&self) -> bool {
        self.nullable
    }

    /// Возвращает тип данных колонки
    pub fn datatype(&self) -> Datatype {
        self.datatype
    }

    /// Возвращает ограничение длины колонки.
    /// Значение осмысленно только для типов с ограниченной длиной.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Диспетчеризация посетителя для объявлений колонок
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_column_decl(self);
    }
}

/// Объявление первичного ключа в CREATE TABLE выражении
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryKeyDecl {
    keys: Vec<String>,
}

impl PrimaryKeyDecl {
    /// Создает новое объявление первичного ключа по заданным колонкам.
    /// Порядок колонок сохраняется, дубликаты не отбрасываются.
    pub fn new(keys: Vec<String>) -> Self {
        Self { keys }
    }

    /// Возвращает колонки, объявленные первичным ключом
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Диспетчеризация посетителя для объявлений первичного ключа
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_primary_key_decl(self);
    }
}

/// Объявление внешнего ключа в CREATE TABLE выражении
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForeignKeyDecl {
    foreign_table: String,
    keys: Vec<String>,
}

impl ForeignKeyDecl {
    /// Создает новое объявление внешнего ключа, связывающее заданные колонки
    /// с таблицей по имени
    pub fn new(foreign_table: impl Into<String>, keys: Vec<String>) -> Self {
        Self {
            foreign_table: foreign_table.into(),
            keys,
        }
    }

    /// Возвращает имя таблицы, на которую ссылается ключ
    pub fn foreign_table(&self) -> &str {
        &self.foreign_table
    }

    /// Возвращает колонки, объявленные внешним ключом
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Диспетчеризация посетителя для объявлений внешнего ключа
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_foreign_key_decl(self);
    }
}
