//! # Branch Repository Trait
//!
//! 支店レコードの永続化を抽象化

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::branch::Branch;

/// 一意インデックス違反
///
/// ストアが businessCode の一意性を保証する場合に `save` が返す
#[derive(Debug, Clone, Error)]
#[error("unique index violation on businessCode: {0}")]
pub struct UniqueViolation(pub String);

/// 支店リポジトリ
///
/// キーバリューストア＋二次検索としての支店の保存先
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BranchRepository: Send + Sync {
    /// id で検索する
    async fn find_by_id(&self, id: &str) -> Result<Option<Branch>>;

    /// businessCode で検索する
    async fn find_by_business_code(&self, code: &str) -> Result<Option<Branch>>;

    /// province 名の完全一致で検索する
    async fn find_by_province_name(&self, name: &str) -> Result<Vec<Branch>>;

    /// canton 名の完全一致で検索する
    async fn find_by_canton_name(&self, name: &str) -> Result<Vec<Branch>>;

    /// parish 名の完全一致で検索する
    async fn find_by_parish_name(&self, name: &str) -> Result<Vec<Branch>>;

    /// 全件を取得する（順序はストア依存）
    async fn find_all(&self) -> Result<Vec<Branch>>;

    /// 保存する
    ///
    /// # Returns
    ///
    /// 保存されたレコード（`id` が未設定なら採番済み）
    ///
    /// # Errors
    ///
    /// 書き込みに失敗した場合、または一意インデックスを持つストアで
    /// 別レコードと businessCode が衝突した場合（[`UniqueViolation`]）にエラーを返す
    async fn save(&self, branch: Branch) -> Result<Branch>;

    /// 削除する
    async fn delete(&self, branch: &Branch) -> Result<()>;
}
