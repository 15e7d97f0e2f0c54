//! Тесты для лексического анализатора SimpleSQL

use crate::lexer::{tokenize_command, Lexer, Token, TokenKind};

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind()).collect()
}

#[test]
fn test_empty_input() {
    assert!(tokenize_command("").is_empty());
}

#[test]
fn test_whitespace_only_input() {
    // Пробельные символы не порождают токенов
    assert!(tokenize_command("  \t\r\n  ").is_empty());
}

#[test]
fn test_keywords() {
    let tokens = tokenize_command("SELECT UPDATE DELETE INSERT CREATE DROP");
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Select,
            TokenKind::Update,
            TokenKind::Delete,
            TokenKind::Insert,
            TokenKind::Create,
            TokenKind::Drop,
        ]
    );
}

#[test]
fn test_case_insensitive_keywords() {
    let tokens = tokenize_command("select SELECT Select sElEcT");
    assert_eq!(tokens.len(), 4);
    for token in &tokens {
        assert_eq!(token.kind(), TokenKind::Select);
    }
}

#[test]
fn test_identifiers_preserve_case() {
    let tokens = tokenize_command("Users order_items x9");
    assert_eq!(tokens.len(), 3);
    for token in &tokens {
        assert_eq!(token.kind(), TokenKind::Identifier);
    }
    assert_eq!(tokens[0].text(), Some("Users"));
    assert_eq!(tokens[1].text(), Some("order_items"));
    assert_eq!(tokens[2].text(), Some("x9"));
}

#[test]
fn test_no_identifier_equals_reserved_word() {
    // Любое написание зарезервированного слова классифицируется как
    // ключевое слово, никогда как идентификатор
    let tokens = tokenize_command("from FROM From fRoM");
    for token in &tokens {
        assert_eq!(token.kind(), TokenKind::From);
    }
}

#[test]
fn test_select_star_from() {
    let tokens = tokenize_command("SELECT * FROM foo;");
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Select,
            TokenKind::Star,
            TokenKind::From,
            TokenKind::Identifier,
            TokenKind::Semicolon,
        ]
    );
    assert_eq!(tokens[3].text(), Some("foo"));
}

#[test]
fn test_single_char_symbols() {
    let tokens = tokenize_command("* \" ; = ( ) % , + _");
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Star,
            TokenKind::Quote,
            TokenKind::Semicolon,
            TokenKind::Equal,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::PercentSign,
            TokenKind::Comma,
            TokenKind::Plus,
            TokenKind::Underscore,
        ]
    );
}

#[test]
fn test_not_equal_lookahead() {
    let tokens = tokenize_command("a <> b");
    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Identifier, TokenKind::Nequal, TokenKind::Identifier]
    );
    assert_eq!(tokens[0].text(), Some("a"));
    assert_eq!(tokens[2].text(), Some("b"));
}

#[test]
fn test_comparison_lookahead() {
    let tokens = tokenize_command("a <= b >= c < d > e");
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::Leq,
            TokenKind::Identifier,
            TokenKind::Geq,
            TokenKind::Identifier,
            TokenKind::Lthan,
            TokenKind::Identifier,
            TokenKind::Gthan,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn test_lookahead_does_not_read_past_end() {
    // Одиночный < или > в самом конце текста берет односимвольный тип
    let tokens = tokenize_command("a <");
    assert_eq!(kinds(&tokens), vec![TokenKind::Identifier, TokenKind::Lthan]);

    let tokens = tokenize_command("a >");
    assert_eq!(kinds(&tokens), vec![TokenKind::Identifier, TokenKind::Gthan]);

    let tokens = tokenize_command("<");
    assert_eq!(kinds(&tokens), vec![TokenKind::Lthan]);

    let tokens = tokenize_command(">");
    assert_eq!(kinds(&tokens), vec![TokenKind::Gthan]);
}

#[test]
fn test_adjacent_comparison_symbols() {
    let tokens = tokenize_command("<><=>=");
    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Nequal, TokenKind::Leq, TokenKind::Geq]
    );
}

#[test]
fn test_unrecognized_symbol_is_not_fatal() {
    // Нераспознанный символ порождает ровно один токен ошибки,
    // сканирование продолжается со следующего символа
    let tokens = tokenize_command("a & b");
    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Identifier, TokenKind::Error, TokenKind::Identifier]
    );
    assert_eq!(tokens[1].text(), Some("Unrecognized Symbol: &"));
    assert_eq!(tokens[2].text(), Some("b"));
}

#[test]
fn test_digit_outside_word_is_unrecognized() {
    // Правила числовых литералов нет: цифра вне идентификатора дает ошибку
    let tokens = tokenize_command("x <= 5");
    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Identifier, TokenKind::Leq, TokenKind::Error]
    );
    assert_eq!(tokens[2].text(), Some("Unrecognized Symbol: 5"));
}

#[test]
fn test_digits_inside_word_are_identifier_legal() {
    let tokens = tokenize_command("table123 a1b2");
    assert_eq!(kinds(&tokens), vec![TokenKind::Identifier, TokenKind::Identifier]);
    assert_eq!(tokens[0].text(), Some("table123"));
    assert_eq!(tokens[1].text(), Some("a1b2"));
}

#[test]
fn test_leading_underscore_is_a_symbol_token() {
    // Подчеркивание допустимо внутри слова, но не начинает его
    let tokens = tokenize_command("_private");
    assert_eq!(kinds(&tokens), vec![TokenKind::Underscore, TokenKind::Identifier]);
    assert_eq!(tokens[1].text(), Some("private"));
}

#[test]
fn test_symbols_split_words() {
    let tokens = tokenize_command("count(price),sum(total)");
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Count,
            TokenKind::LParen,
            TokenKind::Identifier,
            TokenKind::RParen,
            TokenKind::Comma,
            TokenKind::Sum,
            TokenKind::LParen,
            TokenKind::Identifier,
            TokenKind::RParen,
        ]
    );
}

#[test]
fn test_determinism() {
    let command = "SELECT * FROM foo WHERE a <> b AND c <= d; @";
    let first = tokenize_command(command);
    let second = tokenize_command(command);
    assert_eq!(first, second);
}

#[test]
fn test_next_token_iteration() {
    let mut lexer = Lexer::new("CREATE TABLE t");

    let token = lexer.next_token().unwrap();
    assert_eq!(token.kind(), TokenKind::Create);

    let token = lexer.next_token().unwrap();
    assert_eq!(token.kind(), TokenKind::Table);

    let token = lexer.next_token().unwrap();
    assert_eq!(token.kind(), TokenKind::Identifier);

    assert!(lexer.next_token().is_none());
    // Повторный вызов в конце текста также возвращает None
    assert!(lexer.next_token().is_none());
}

#[test]
fn test_create_table_command() {
    let tokens = tokenize_command("CREATE TABLE users (id INT, name VARCHAR (32));");
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Create,
            TokenKind::Table,
            TokenKind::Identifier,
            TokenKind::LParen,
            TokenKind::Identifier,
            TokenKind::Int,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::Varchar,
            TokenKind::LParen,
            TokenKind::Error,
            TokenKind::Error,
            TokenKind::RParen,
            TokenKind::RParen,
            TokenKind::Semicolon,
        ]
    );
    // Цифры длины вне слова порождают токены ошибок: числовых литералов нет
    assert_eq!(tokens[10].text(), Some("Unrecognized Symbol: 3"));
    assert_eq!(tokens[11].text(), Some("Unrecognized Symbol: 2"));
}

#[test]
fn test_display_of_token_sequence() {
    let tokens = tokenize_command("SELECT * FROM foo;");
    let rendered: Vec<String> = tokens.iter().map(|token| token.to_string()).collect();
    assert_eq!(
        rendered.join(" "),
        "SELECT STAR FROM Identifier(foo) SEMICOLON"
    );
}
