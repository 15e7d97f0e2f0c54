//! Тесты для лексического анализа SimpleSQL

pub mod lexer_tests;
