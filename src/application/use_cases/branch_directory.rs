//! # Branch Directory Use Case
//!
//! 支店の一意性の保証とライフサイクル操作

use log::{info, warn};
use std::sync::Arc;

use crate::application::dto::branch_request::BranchRequest;
use crate::application::services::branch_builder::BranchBuilder;
use crate::domain::entities::branch::Branch;
use crate::domain::entities::branch_view::{BranchView, HolidayView};
use crate::domain::errors::{DirectoryError, DirectoryResult};
use crate::domain::repositories::branch_repository::{BranchRepository, UniqueViolation};
use crate::domain::services::holiday_projection::HolidayProjection;

/// 支店ディレクトリ
///
/// 全ての読み取り結果は [`HolidayProjection`] を通してビューとして返す
pub struct BranchDirectory<R: BranchRepository> {
    branch_repository: Arc<R>,
}

impl<R: BranchRepository> BranchDirectory<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `branch_repository` - 支店リポジトリ
    pub fn new(branch_repository: Arc<R>) -> Self {
        Self { branch_repository }
    }

    /// 支店を作成する
    ///
    /// # Errors
    ///
    /// - リクエストが不正な場合は `InvalidRequest`
    /// - businessCode が既に存在する場合は `DuplicateKey`（書き込みは行わない）
    /// - ストアの失敗は `Store`
    pub async fn create(&self, request: &BranchRequest) -> DirectoryResult<BranchView> {
        info!("Creating branch with code {}", request.business_code);

        request
            .validate_for_create()
            .map_err(DirectoryError::InvalidRequest)?;

        if self
            .branch_repository
            .find_by_business_code(&request.business_code)
            .await?
            .is_some()
        {
            warn!("Rejected duplicate businessCode {}", request.business_code);
            return Err(DirectoryError::DuplicateKey(request.business_code.clone()));
        }

        let branch = BranchBuilder::build(request);
        let saved = self
            .branch_repository
            .save(branch)
            .await
            .map_err(Self::create_conflict)?;

        Ok(HolidayProjection::project(&saved))
    }

    /// 支店を更新する
    ///
    /// name / address / phone / latitude / longitude のみを上書きし、それ以外は保持する
    ///
    /// # Errors
    ///
    /// id が存在しない場合は `NotFound`
    pub async fn update(&self, id: &str, request: &BranchRequest) -> DirectoryResult<BranchView> {
        info!("Updating branch {}", id);

        request
            .validate_for_update()
            .map_err(DirectoryError::InvalidRequest)?;

        let mut existing = self.require_by_id(id).await?;

        existing.name = request.name.clone();
        existing.address = request.address.clone();
        existing.phone = request.phone.clone();
        existing.latitude = request.latitude;
        existing.longitude = request.longitude;

        let saved = self.branch_repository.save(existing).await?;
        Ok(HolidayProjection::project(&saved))
    }

    /// 支店を削除する
    ///
    /// 冪等ではない（2回目の呼び出しは `NotFound`）
    pub async fn delete(&self, id: &str) -> DirectoryResult<()> {
        info!("Deleting branch {}", id);

        let branch = self.require_by_id(id).await?;
        self.branch_repository.delete(&branch).await?;
        Ok(())
    }

    /// id で支店を取得する
    pub async fn get_by_id(&self, id: &str) -> DirectoryResult<BranchView> {
        info!("Finding branch by id {}", id);

        let branch = self.require_by_id(id).await?;
        Ok(HolidayProjection::project(&branch))
    }

    /// businessCode で支店を取得する
    pub async fn get_by_code(&self, business_code: &str) -> DirectoryResult<BranchView> {
        info!("Finding branch by code {}", business_code);

        let branch = self.require_by_code(business_code).await?;
        Ok(HolidayProjection::project(&branch))
    }

    /// 全支店を取得する（順序はストア依存）
    pub async fn list_all(&self) -> DirectoryResult<Vec<BranchView>> {
        info!("Listing all branches");

        let branches = self.branch_repository.find_all().await?;
        Ok(HolidayProjection::project_all(&branches))
    }

    /// province 名で支店を検索する（該当なしは空）
    pub async fn list_by_province(&self, name: &str) -> DirectoryResult<Vec<BranchView>> {
        info!("Finding branches by province {}", name);

        let branches = self.branch_repository.find_by_province_name(name).await?;
        Ok(HolidayProjection::project_all(&branches))
    }

    /// canton 名で支店を検索する（該当なしは空）
    pub async fn list_by_canton(&self, name: &str) -> DirectoryResult<Vec<BranchView>> {
        info!("Finding branches by canton {}", name);

        let branches = self.branch_repository.find_by_canton_name(name).await?;
        Ok(HolidayProjection::project_all(&branches))
    }

    /// parish 名で支店を検索する（該当なしは空）
    pub async fn list_by_parish(&self, name: &str) -> DirectoryResult<Vec<BranchView>> {
        info!("Finding branches by parish {}", name);

        let branches = self.branch_repository.find_by_parish_name(name).await?;
        Ok(HolidayProjection::project_all(&branches))
    }

    /// 支店に適用される祝日を province → canton → parish の順で取得する
    ///
    /// 所在地または祝日データがない場合は空を返す
    ///
    /// # Errors
    ///
    /// businessCode が存在しない場合は `NotFound`
    pub async fn get_holidays(&self, business_code: &str) -> DirectoryResult<Vec<HolidayView>> {
        info!("Fetching holidays for branch {}", business_code);

        let branch = self.require_by_code(business_code).await?;
        let view = HolidayProjection::project(&branch);

        Ok(view.holidays().to_vec())
    }

    // ストアの一意インデックス違反は create の場合のみ DuplicateKey として扱う
    fn create_conflict(error: anyhow::Error) -> DirectoryError {
        match error.downcast::<UniqueViolation>() {
            Ok(violation) => {
                warn!("Store rejected duplicate businessCode {}", violation.0);
                DirectoryError::DuplicateKey(violation.0)
            }
            Err(error) => DirectoryError::Store(error),
        }
    }

    async fn require_by_id(&self, id: &str) -> DirectoryResult<Branch> {
        self.branch_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                warn!("Branch not found: {}", id);
                DirectoryError::NotFound(id.to_string())
            })
    }

    async fn require_by_code(&self, business_code: &str) -> DirectoryResult<Branch> {
        self.branch_repository
            .find_by_business_code(business_code)
            .await?
            .ok_or_else(|| {
                warn!("Branch not found: {}", business_code);
                DirectoryError::NotFound(business_code.to_string())
            })
    }
}
