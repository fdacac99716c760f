//! Branch Table
//!
//! ストア実装が共有するインメモリのテーブル（一意インデックス付き）

use anyhow::Result;
use std::collections::HashMap;

use crate::domain::entities::branch::Branch;
use crate::domain::repositories::branch_repository::UniqueViolation;

/// id をキーとした支店テーブル
#[derive(Debug, Default, Clone)]
pub struct BranchTable {
    rows: HashMap<String, Branch>,
    generated_ids: usize,
}

impl BranchTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 行のリストからテーブルを作成（id のない行には採番する）
    pub fn from_rows(rows: Vec<Branch>) -> Self {
        let mut generated_ids = 0;
        let rows = rows
            .into_iter()
            .map(|mut branch| {
                if branch.id.is_none() {
                    generated_ids += 1;
                }
                let id = branch.id.get_or_insert_with(new_id).clone();
                (id, branch)
            })
            .collect();
        Self {
            rows,
            generated_ids,
        }
    }

    /// 読み込み時に採番した行があるか（永続化されるまで id は安定しない）
    pub fn has_generated_ids(&self) -> bool {
        self.generated_ids > 0
    }

    /// 全行（id 順）
    pub fn rows(&self) -> Vec<Branch> {
        let mut rows: Vec<Branch> = self.rows.values().cloned().collect();
        rows.sort_by(|a, b| a.id.cmp(&b.id));
        rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<Branch> {
        self.rows.get(id).cloned()
    }

    pub fn get_by_business_code(&self, code: &str) -> Option<Branch> {
        self.rows
            .values()
            .find(|branch| branch.business_code == code)
            .cloned()
    }

    pub fn filter<F>(&self, predicate: F) -> Vec<Branch>
    where
        F: Fn(&Branch) -> bool,
    {
        self.rows()
            .into_iter()
            .filter(|branch| predicate(branch))
            .collect()
    }

    /// 保存（id がなければ採番、あれば上書き）
    ///
    /// # Errors
    ///
    /// 別の行が同じ businessCode を持つ場合に [`UniqueViolation`] を返す
    pub fn upsert(&mut self, mut branch: Branch) -> Result<Branch> {
        let conflict = self.rows.values().any(|existing| {
            existing.business_code == branch.business_code && existing.id != branch.id
        });
        if conflict {
            return Err(UniqueViolation(branch.business_code).into());
        }

        let id = branch.id.get_or_insert_with(new_id).clone();
        self.rows.insert(id, branch.clone());
        Ok(branch)
    }

    /// 削除（存在しない場合は何もしない）
    pub fn remove(&mut self, id: &str) -> Option<Branch> {
        self.rows.remove(id)
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
