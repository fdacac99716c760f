//! # Branch Builder
//!
//! リクエストから未保存の支店レコードを組み立てる

use chrono::{Local, NaiveDate};

use crate::domain::entities::branch::{BankEntity, Branch, Location, STATUS_ACTIVE};
use crate::application::dto::branch_request::BranchRequest;

/// 支店ビルダー
///
/// 入力の検証は行わない純粋な変換
pub struct BranchBuilder;

impl BranchBuilder {
    /// 本日の日付を開設日として支店を組み立てる
    pub fn build(request: &BranchRequest) -> Branch {
        Self::build_on(request, Local::now().date_naive())
    }

    /// 指定した開設日で支店を組み立てる
    ///
    /// # Arguments
    ///
    /// * `request` - 作成リクエスト
    /// * `opened_date` - 開設日
    ///
    /// # Returns
    ///
    /// `id` 未設定、ステータス ACTIVE、祝日なしの支店
    pub fn build_on(request: &BranchRequest, opened_date: NaiveDate) -> Branch {
        Branch {
            id: None,
            business_code: request.business_code.clone(),
            name: request.name.clone(),
            address: request.address.clone(),
            phone: request.phone.clone(),
            latitude: request.latitude,
            longitude: request.longitude,
            status: STATUS_ACTIVE.to_string(),
            opened_date,
            bank_entity: Some(Self::bank_entity(request)),
            location: Some(Self::location(request)),
        }
    }

    // リクエスト側のステータスは無視する
    fn bank_entity(request: &BranchRequest) -> BankEntity {
        BankEntity {
            name: request.entity_name.clone(),
            tax_id: request.entity_tax_id.clone(),
            status: STATUS_ACTIVE.to_string(),
        }
    }

    fn location(request: &BranchRequest) -> Location {
        Location::from_names(
            request.province.clone(),
            request.canton.clone(),
            request.parish.clone(),
        )
    }
}
