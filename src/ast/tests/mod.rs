//! Тесты для AST модуля SimpleSQL
