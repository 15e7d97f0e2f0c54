//! Обработка ошибок для SimpleSQL

use thiserror::Error;

/// Основной тип ошибки для SimpleSQL
#[derive(Error, Debug)]
pub enum Error {
    /// Ошибка I/O операций
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации/десериализации
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Нарушение контракта вызывающей стороной. Сигнализирует дефект в коде,
    /// использующем ядро, а не ошибку во входных данных пользователя.
    #[error("Contract violation: {message}")]
    Contract { message: String },

    /// Внутренняя ошибка
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Тип результата для SimpleSQL
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает ошибку нарушения контракта
    pub fn contract(message: impl Into<String>) -> Self {
        Self::Contract {
            message: message.into(),
        }
    }

    /// Создает внутреннюю ошибку
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Возвращает true, если ошибка является нарушением контракта
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::Contract { .. })
    }
}
