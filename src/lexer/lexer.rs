//! Лексический анализатор SQL для SimpleSQL
//!
//! Преобразует входной текст команды в последовательность токенов за один
//! проход слева направо с опережающим просмотром не более чем на один символ.
//! Нераспознанный символ порождает токен ошибки, после чего сканирование
//! продолжается со следующего символа.

use crate::lexer::keywords;
use crate::lexer::token::{Token, TokenKind};

/// Лексический анализатор SQL
pub struct Lexer {
    /// Исходный текст
    input: Vec<char>,
    /// Текущая позиция в тексте
    position: usize,
}

impl Lexer {
    /// Создает новый лексический анализатор
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Возвращает все токены из входного текста
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(token) = self.next_token() {
            tokens.push(token);
        }

        tokens
    }

    /// Возвращает следующий токен или None в конце текста
    pub fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();

        let ch = *self.input.get(self.position)?;
        if ch.is_alphabetic() {
            Some(self.read_word())
        } else {
            Some(self.read_symbol())
        }
    }

    /// Пропускает пробельные символы без порождения токенов
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.input.get(self.position) {
            if ch.is_whitespace() {
                self.position += 1;
            } else {
                break;
            }
        }
    }

    /// Возвращает следующий символ без продвижения позиции.
    /// Не читает за концом текста.
    fn peek_next(&self) -> Option<char> {
        self.input.get(self.position + 1).copied()
    }

    /// Жадно читает максимальную последовательность символов, допустимых в
    /// идентификаторе, и классифицирует слово через таблицу ключевых слов
    fn read_word(&mut self) -> Token {
        let start = self.position;
        while let Some(&ch) = self.input.get(self.position) {
            if is_legal_in_identifier(ch) {
                self.position += 1;
            } else {
                break;
            }
        }

        let word: String = self.input[start..self.position].iter().collect();
        keywords::classify_word(&word)
    }

    /// Читает символьный токен. Символы `<` и `>` требуют опережающего
    /// просмотра на один символ для различения `<>`, `<=`, `>=`.
    fn read_symbol(&mut self) -> Token {
        let ch = self.input[self.position];
        let token = match ch {
            '<' => match self.peek_next() {
                Some('>') => {
                    self.position += 1;
                    Token::new(TokenKind::Nequal)
                }
                Some('=') => {
                    self.position += 1;
                    Token::new(TokenKind::Leq)
                }
                _ => Token::new(TokenKind::Lthan),
            },
            '>' => match self.peek_next() {
                Some('=') => {
                    self.position += 1;
                    Token::new(TokenKind::Geq)
                }
                _ => Token::new(TokenKind::Gthan),
            },
            '*' => Token::new(TokenKind::Star),
            '"' => Token::new(TokenKind::Quote),
            ';' => Token::new(TokenKind::Semicolon),
            '=' => Token::new(TokenKind::Equal),
            '(' => Token::new(TokenKind::LParen),
            ')' => Token::new(TokenKind::RParen),
            '%' => Token::new(TokenKind::PercentSign),
            ',' => Token::new(TokenKind::Comma),
            '+' => Token::new(TokenKind::Plus),
            '_' => Token::new(TokenKind::Underscore),
            _ => Token::error(format!("Unrecognized Symbol: {}", ch)),
        };
        self.position += 1;
        token
    }
}

/// Возвращает true, если символ допустим в SQL идентификаторе
pub fn is_legal_in_identifier(ch: char) -> bool {
    ch.is_alphabetic() || ch.is_numeric() || ch == '_'
}

/// Токенизирует команду в последовательность токенов
pub fn tokenize_command(command: &str) -> Vec<Token> {
    Lexer::new(command).tokenize()
}
