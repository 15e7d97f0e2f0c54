//! CLI интерфейс для SimpleSQL
//!
//! Предоставляет командную строку для лексического анализа одной SQL команды

use clap::Parser;

/// SimpleSQL - лексический анализатор SQL команд
#[derive(Parser)]
#[command(name = "simplesql")]
#[command(about = "SimpleSQL - SQL lexical analysis in Rust")]
#[command(version)]
pub struct Cli {
    /// SQL команда для анализа; если не задана, читается одна строка из stdin
    pub command: Option<String>,

    /// Вывести последовательность токенов в формате JSON
    #[arg(long)]
    pub json: bool,
}
