use thiserror::Error;

/// Ошибки на границах крейта: загрузка конфигурации и восстановление поля из снимка.
///
/// Сама генерация ошибок не возвращает.
#[derive(Debug, Error)]
pub enum MapgenError {
    #[error("ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("некорректный TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("некорректный JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Параметры генерации вне допустимых границ
    #[error("недопустимые параметры: {0}")]
    InvalidConfig(String),

    /// Снимок не совпадает по форме с шестиугольником заданного радиуса
    #[error("неверная форма поля: {0}")]
    GridShape(String),
}
