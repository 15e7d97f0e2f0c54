//! Главный исполняемый файл SimpleSQL

use clap::Parser;
use simplesql::cli::Cli;
use simplesql::lexer::tokenize_command;
use simplesql::Result;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let command = match cli.command {
        Some(command) => command,
        None => {
            let mut line = String::new();
            std::io::stdin().read_line(&mut line)?;
            line
        }
    };

    log::debug!("Tokenizing command: {}", command.trim_end());
    let tokens = tokenize_command(&command);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
    } else {
        println!("Lexical analysis:");
        let rendered: Vec<String> = tokens.iter().map(|token| token.to_string()).collect();
        println!("{}", rendered.join(" "));
    }

    Ok(())
}
