//! JSON File Branch Repository Implementation
//!
//! BranchRepositoryのJSON実装（支店テーブル全体を1つのJSONファイルで永続化）

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use super::branch_table::BranchTable;
use crate::domain::entities::branch::Branch;
use crate::domain::repositories::branch_repository::BranchRepository;

/// JSONファイルベースの支店リポジトリ
///
/// 読み込みは共有ロック、読み込み→変更→保存は排他ロックの中で行う。
/// 保存は一時ファイルに書いてから置き換えるため、読み手が書きかけのファイルを見ることはない
pub struct JsonFileBranchRepository {
    path: PathBuf,
    lock: RwLock<()>,
}

impl JsonFileBranchRepository {
    /// 新しいリポジトリを作成
    ///
    /// # Arguments
    ///
    /// * `path` - JSONファイルのパス（`~` は展開される）
    pub fn new(path: &str) -> Self {
        let expanded = shellexpand::tilde(path).to_string();
        Self {
            path: PathBuf::from(expanded),
            lock: RwLock::new(()),
        }
    }

    /// ファイルからテーブルを読み込む（同期処理）
    fn load_sync(path: &Path) -> Result<BranchTable> {
        if !path.exists() {
            info!("No branch store found at {}, starting empty", path.display());
            return Ok(BranchTable::new());
        }

        let content = fs::read_to_string(path).context("Failed to read branch store file")?;

        let rows: Vec<Branch> =
            serde_json::from_str(&content).context("Failed to parse branch store JSON")?;

        info!("Loaded {} branches from {}", rows.len(), path.display());

        Ok(BranchTable::from_rows(rows))
    }

    /// ファイルにテーブルを保存する（同期処理）
    fn save_sync(path: &Path, table: &BranchTable) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create branch store directory")?;
        }

        let json = serde_json::to_string_pretty(&table.rows())
            .context("Failed to serialize branch store")?;

        // 同じディレクトリに書いてから rename で置き換える
        let temp_path = Self::temp_path(path);
        fs::write(&temp_path, json).context("Failed to write branch store temp file")?;
        fs::rename(&temp_path, path).context("Failed to replace branch store file")?;

        info!("Saved {} branches to {}", table.len(), path.display());

        Ok(())
    }

    fn temp_path(path: &Path) -> PathBuf {
        let mut name = path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        path.with_file_name(name)
    }

    async fn load(&self) -> Result<BranchTable> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || Self::load_sync(&path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn store(&self, table: BranchTable) -> Result<()> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || Self::save_sync(&path, &table))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    /// 読み込み用にテーブルを取得する
    ///
    /// id のない行が含まれていた場合は、採番した id を排他ロックの中で書き戻す
    async fn read_table(&self) -> Result<BranchTable> {
        {
            let _guard = self.lock.read().await;
            let table = self.load().await?;
            if !table.has_generated_ids() {
                return Ok(table);
            }
        }

        let _guard = self.lock.write().await;
        let table = self.load().await?;
        if table.has_generated_ids() {
            info!("Persisting generated ids for rows without id");
            self.store(table.clone()).await?;
        }
        Ok(table)
    }
}

#[async_trait]
impl BranchRepository for JsonFileBranchRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Branch>> {
        Ok(self.read_table().await?.get(id))
    }

    async fn find_by_business_code(&self, code: &str) -> Result<Option<Branch>> {
        Ok(self.read_table().await?.get_by_business_code(code))
    }

    async fn find_by_province_name(&self, name: &str) -> Result<Vec<Branch>> {
        Ok(self
            .read_table()
            .await?
            .filter(|branch| branch.province_name() == Some(name)))
    }

    async fn find_by_canton_name(&self, name: &str) -> Result<Vec<Branch>> {
        Ok(self
            .read_table()
            .await?
            .filter(|branch| branch.canton_name() == Some(name)))
    }

    async fn find_by_parish_name(&self, name: &str) -> Result<Vec<Branch>> {
        Ok(self
            .read_table()
            .await?
            .filter(|branch| branch.parish_name() == Some(name)))
    }

    async fn find_all(&self) -> Result<Vec<Branch>> {
        Ok(self.read_table().await?.rows())
    }

    async fn save(&self, branch: Branch) -> Result<Branch> {
        let _guard = self.lock.write().await;

        let mut table = self.load().await?;
        let saved = table.upsert(branch)?;
        self.store(table).await?;

        Ok(saved)
    }

    async fn delete(&self, branch: &Branch) -> Result<()> {
        let Some(id) = &branch.id else {
            return Ok(());
        };
        let _guard = self.lock.write().await;

        let mut table = self.load().await?;
        let removed = table.remove(id).is_some();
        if removed || table.has_generated_ids() {
            self.store(table).await?;
        }

        Ok(())
    }
}
