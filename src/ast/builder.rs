//! Построители AST узлов CREATE выражений
//!
//! Построитель накапливает изменяемое промежуточное состояние и по `build()`
//! выдает неизменяемый узел. Промежуточное состояние забирается по значению
//! через `std::mem::take`, поэтому после каждого `build()` построитель
//! возвращается к значениям по умолчанию и готов к повторному использованию.

use crate::ast::create::{
    AstTarget, ColumnDecl, CreateDatabase, CreateElement, CreateStatement, CreateTable, Datatype,
};
use crate::common::{Error, Result};

/// Построитель CREATE выражений
#[derive(Debug, Default)]
pub struct CreateBuilder {
    target: AstTarget,
    name: String,
    elements: Vec<CreateElement>,
}

impl CreateBuilder {
    /// Создает новый построитель с настройками по умолчанию
    pub fn new() -> Self {
        Self::default()
    }

    /// Устанавливает цель выражения: база данных или таблица
    pub fn target(&mut self, target: AstTarget) -> &mut Self {
        self.target = target;
        self
    }

    /// Устанавливает имя создаваемой таблицы или базы данных
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// Устанавливает список элементов CREATE TABLE выражения.
    /// Допустимо только при построении CREATE TABLE
    pub fn elements(&mut self, elements: Vec<CreateElement>) -> &mut Self {
        self.elements = elements;
        self
    }

    /// Строит неизменяемый узел CREATE выражения по накопленному состоянию.
    ///
    /// Контракт: для базы данных список элементов обязан быть пуст, для
    /// таблицы — непуст. Нарушение возвращается как ошибка контракта и
    /// указывает на дефект вызывающего кода, а не на ошибку пользовательского
    /// ввода. Состояние построителя сбрасывается в любом случае.
    pub fn build(&mut self) -> Result<CreateStatement> {
        let staged = std::mem::take(self);

        match staged.target {
            AstTarget::Database => {
                if !staged.elements.is_empty() {
                    return Err(Error::contract(
                        "CREATE DATABASE must not carry create elements",
                    ));
                }
                Ok(CreateStatement::Database(CreateDatabase::new(staged.name)))
            }
            AstTarget::Table => {
                if staged.elements.is_empty() {
                    return Err(Error::contract(
                        "CREATE TABLE requires a non-empty element list",
                    ));
                }
                Ok(CreateStatement::Table(CreateTable::new(
                    staged.name,
                    staged.elements,
                )))
            }
        }
    }
}

/// Построитель объявлений колонок
#[derive(Debug, Default)]
pub struct ColumnDeclBuilder {
    name: String,
    nullable: bool,
    datatype: Datatype,
    length: u32,
}

impl ColumnDeclBuilder {
    /// Создает новый построитель с настройками по умолчанию
    pub fn new() -> Self {
        Self::default()
    }

    /// Устанавливает имя колонки
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// Устанавливает допустимость NULL значений в колонке
    pub fn nullable(&mut self, nullable: bool) -> &mut Self {
        self.nullable = nullable;
        self
    }

    /// Устанавливает тип данных колонки
    pub fn datatype(&mut self, datatype: Datatype) -> &mut Self {
        self.datatype = datatype;
        self
    }

    /// Устанавливает ограничение длины колонки
    pub fn length(&mut self, length: u32) -> &mut Self {
        self.length = length;
        self
    }

    /// Строит объявление колонки по накопленному состоянию и сбрасывает
    /// построитель. Перекрестной валидации полей нет: построение всегда
    /// успешно при любом накопленном состоянии.
    pub fn build(&mut self) -> ColumnDecl {
        let staged = std::mem::take(self);
        ColumnDecl::new(staged.name, staged.nullable, staged.datatype, staged.length)
    }
}
