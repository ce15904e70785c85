//! Storage module - the JSON store file, CSV export and JSON import

pub mod export;
pub mod store;

use thiserror::Error;

/// I/O and data errors surfaced to the View. All are recoverable: the View
/// reports the message and the operation is aborted with state unchanged.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Ошибка при чтении файла: {0}")]
    FileRead(#[source] std::io::Error),
    #[error("Ошибка при записи файла: {0}")]
    FileWrite(#[source] std::io::Error),
    #[error("Ошибка при разборе данных: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("Файл не содержит данных о студентах")]
    EmptyImport,
}
