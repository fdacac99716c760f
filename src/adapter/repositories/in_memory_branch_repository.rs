//! In-Memory Branch Repository Implementation
//!
//! BranchRepositoryのインメモリ実装（プロセス内でのみ保持）

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use tokio::sync::RwLock;

use super::branch_table::BranchTable;
use crate::domain::entities::branch::Branch;
use crate::domain::repositories::branch_repository::BranchRepository;

/// インメモリの支店リポジトリ
///
/// 一意性チェックと書き込みを同じ書き込みロック内で行う
#[derive(Default)]
pub struct InMemoryBranchRepository {
    table: RwLock<BranchTable>,
}

impl InMemoryBranchRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存の行で初期化したリポジトリを作成
    pub fn with_branches(branches: Vec<Branch>) -> Self {
        Self {
            table: RwLock::new(BranchTable::from_rows(branches)),
        }
    }

    /// 保持している件数
    pub async fn len(&self) -> usize {
        self.table.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.table.read().await.is_empty()
    }
}

#[async_trait]
impl BranchRepository for InMemoryBranchRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Branch>> {
        Ok(self.table.read().await.get(id))
    }

    async fn find_by_business_code(&self, code: &str) -> Result<Option<Branch>> {
        Ok(self.table.read().await.get_by_business_code(code))
    }

    async fn find_by_province_name(&self, name: &str) -> Result<Vec<Branch>> {
        Ok(self
            .table
            .read()
            .await
            .filter(|branch| branch.province_name() == Some(name)))
    }

    async fn find_by_canton_name(&self, name: &str) -> Result<Vec<Branch>> {
        Ok(self
            .table
            .read()
            .await
            .filter(|branch| branch.canton_name() == Some(name)))
    }

    async fn find_by_parish_name(&self, name: &str) -> Result<Vec<Branch>> {
        Ok(self
            .table
            .read()
            .await
            .filter(|branch| branch.parish_name() == Some(name)))
    }

    async fn find_all(&self) -> Result<Vec<Branch>> {
        Ok(self.table.read().await.rows())
    }

    async fn save(&self, branch: Branch) -> Result<Branch> {
        let saved = self.table.write().await.upsert(branch)?;
        debug!("Saved branch {:?} ({})", saved.id, saved.business_code);
        Ok(saved)
    }

    async fn delete(&self, branch: &Branch) -> Result<()> {
        if let Some(id) = &branch.id {
            self.table.write().await.remove(id);
            debug!("Deleted branch {}", id);
        }
        Ok(())
    }
}
