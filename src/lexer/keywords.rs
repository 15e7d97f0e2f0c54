//! Таблица ключевых слов SQL для SimpleSQL
//!
//! Статическое отображение зарезервированных слов (в нижнем регистре) в типы
//! токенов. Таблица строится один раз при первом обращении и далее доступна
//! только для чтения на все время жизни процесса.

use crate::lexer::token::{Token, TokenKind, TokenValue};
use std::collections::HashMap;

lazy_static::lazy_static! {
    /// Глобальная таблица ключевых слов
    pub static ref KEYWORDS: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();

        // Типы выражений
        map.insert("select", TokenKind::Select);
        map.insert("update", TokenKind::Update);
        map.insert("delete", TokenKind::Delete);
        map.insert("insert", TokenKind::Insert);
        map.insert("into", TokenKind::Into);
        map.insert("create", TokenKind::Create);
        map.insert("alter", TokenKind::Alter);
        map.insert("drop", TokenKind::Drop);
        map.insert("index", TokenKind::Index);
        map.insert("database", TokenKind::Database);
        map.insert("table", TokenKind::Table);

        map.insert("group", TokenKind::Group);
        map.insert("by", TokenKind::By);
        map.insert("procedure", TokenKind::Procedure);
        map.insert("exec", TokenKind::Exec);
        map.insert("values", TokenKind::Values);
        map.insert("from", TokenKind::From);
        map.insert("distinct", TokenKind::Distinct);
        map.insert("count", TokenKind::Count);
        map.insert("where", TokenKind::Where);
        map.insert("having", TokenKind::Having);
        map.insert("between", TokenKind::Between);
        map.insert("exists", TokenKind::Exists);
        map.insert("any", TokenKind::Any);
        map.insert("all", TokenKind::All);
        map.insert("as", TokenKind::As);
        map.insert("like", TokenKind::Like);
        map.insert("in", TokenKind::In);

        // Булевы операторы
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map.insert("not", TokenKind::Not);

        // Сортировка и агрегаты
        map.insert("order", TokenKind::Order);
        map.insert("asc", TokenKind::Asc);
        map.insert("desc", TokenKind::Desc);
        map.insert("is", TokenKind::Is);
        map.insert("null", TokenKind::Null);
        map.insert("min", TokenKind::Min);
        map.insert("max", TokenKind::Max);
        map.insert("avg", TokenKind::Avg);
        map.insert("sum", TokenKind::Sum);

        // Соединения
        map.insert("inner", TokenKind::Inner);
        map.insert("join", TokenKind::Join);
        map.insert("left", TokenKind::Left);
        map.insert("right", TokenKind::Right);
        map.insert("full", TokenKind::Full);
        map.insert("outer", TokenKind::Outer);
        map.insert("union", TokenKind::Union);
        map.insert("coalesce", TokenKind::Coalesce);

        // Коллекционные типы
        map.insert("set", TokenKind::Set);
        map.insert("enum", TokenKind::Enum);

        map.insert("top", TokenKind::Top);
        map.insert("limit", TokenKind::Limit);
        map.insert("percent", TokenKind::Percent);

        // Типы данных
        map.insert("int", TokenKind::Int);
        map.insert("double", TokenKind::Double);
        map.insert("unsigned", TokenKind::Unsigned);
        map.insert("char", TokenKind::Char);
        map.insert("varchar", TokenKind::Varchar);
        map.insert("string", TokenKind::String);
        map.insert("binary", TokenKind::Binary);

        map
    };
}

/// Ищет тип токена для заданного слова без учета регистра
pub fn lookup(word: &str) -> Option<TokenKind> {
    KEYWORDS.get(word.to_lowercase().as_str()).copied()
}

/// Возвращает true, если слово является зарезервированным ключевым словом SQL
pub fn is_keyword(word: &str) -> bool {
    lookup(word).is_some()
}

/// Классифицирует слово: токен ключевого слова, если слово зарезервировано,
/// иначе токен идентификатора с текстом в исходном регистре
pub fn classify_word(word: &str) -> Token {
    match lookup(word) {
        Some(kind) => Token::new(kind),
        None => Token::with_value(TokenKind::Identifier, TokenValue::Text(word.to_string())),
    }
}
