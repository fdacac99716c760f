//! # Branch Request
//!
//! 支店の作成・更新リクエスト（外部入力）

use serde::Deserialize;

/// 支店リクエスト
///
/// 作成時は全フィールドを使用し、更新時は name / address / phone / 座標のみを使用する
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchRequest {
    #[serde(default)]
    pub business_code: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub entity_name: String,
    #[serde(default)]
    pub entity_tax_id: String,
    /// 受け付けるが使用しない（エンティティは常に ACTIVE で作成される）
    #[serde(default)]
    pub entity_status: Option<String>,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub canton: String,
    #[serde(default)]
    pub parish: String,
}

impl BranchRequest {
    /// 作成リクエストとして検証する
    ///
    /// # Errors
    ///
    /// 必須項目が空、または座標が範囲外の場合に理由を返す
    pub fn validate_for_create(&self) -> Result<(), String> {
        require("businessCode", &self.business_code)?;
        require("province", &self.province)?;
        require("canton", &self.canton)?;
        require("parish", &self.parish)?;
        self.validate_for_update()
    }

    /// 更新リクエストとして検証する（更新で反映される項目のみ）
    ///
    /// # Errors
    ///
    /// name が空、または座標が範囲外の場合に理由を返す
    pub fn validate_for_update(&self) -> Result<(), String> {
        require("name", &self.name)?;

        if let Some(latitude) = self.latitude {
            if !(-90.0..=90.0).contains(&latitude) {
                return Err(format!("latitude out of range: {}", latitude));
            }
        }
        if let Some(longitude) = self.longitude {
            if !(-180.0..=180.0).contains(&longitude) {
                return Err(format!("longitude out of range: {}", longitude));
            }
        }

        Ok(())
    }
}

fn require(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} must not be blank", field));
    }
    Ok(())
}
