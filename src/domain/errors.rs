//! # Directory Errors
//!
//! 支店ディレクトリのエラー分類

use thiserror::Error;

/// 支店ディレクトリ操作のエラー
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// id または businessCode に該当する支店が存在しない
    #[error("Branch not found: {0}")]
    NotFound(String),

    /// businessCode が既に存在する（create のみが返す）
    #[error("businessCode already exists: {0}")]
    DuplicateKey(String),

    /// リクエストの検証に失敗した
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// ストアの失敗（そのまま呼び出し元へ伝播）
    #[error("Store error: {0:#}")]
    Store(anyhow::Error),
}

impl From<anyhow::Error> for DirectoryError {
    fn from(error: anyhow::Error) -> Self {
        DirectoryError::Store(error)
    }
}

/// Alias for Result with `DirectoryError`
pub type DirectoryResult<T> = std::result::Result<T, DirectoryError>;
