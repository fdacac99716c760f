//! # Branch View
//!
//! クライアントに返す支店のフラットな読み取り専用表現

use chrono::NaiveDate;
use serde::Serialize;

/// 銀行エンティティのビュー
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankEntityView {
    pub name: String,
    pub tax_id: String,
    pub status: String,
}

/// 祝日のビュー（`active` は常に確定値）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayView {
    pub date: NaiveDate,
    pub description: String,
    pub holiday_type: String,
    pub active: bool,
}

/// 所在地のビュー
///
/// 各階層は名前のみ、祝日は province → canton → parish の順に連結済み
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationView {
    pub province_name: Option<String>,
    pub canton_name: Option<String>,
    pub parish_name: Option<String>,
    #[serde(rename = "feriados")]
    pub holidays: Vec<HolidayView>,
}

/// 支店のビュー
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchView {
    pub id: Option<String>,
    pub business_code: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: String,
    pub opened_date: NaiveDate,
    pub bank_entity: Option<BankEntityView>,
    pub location: Option<LocationView>,
}

impl BranchView {
    /// 連結済みの祝日一覧（所在地がない場合は空）
    pub fn holidays(&self) -> &[HolidayView] {
        self.location
            .as_ref()
            .map(|location| location.holidays.as_slice())
            .unwrap_or(&[])
    }
}
