//! # Branch Entity
//!
//! 支店レコードと、その中に値として埋め込まれるエンティティ群

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 作成時に設定されるステータス
pub const STATUS_ACTIVE: &str = "ACTIVE";

/// 銀行エンティティ
///
/// 支店作成時点の値をコピーして保持する（参照ではない）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankEntity {
    pub name: String,
    pub tax_id: String,
    pub status: String,
}

/// 地理階層の1段（province / canton / parish のいずれか）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationLevel {
    pub name: String,
}

impl LocationLevel {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// 祝日
///
/// `active` は外部の祝日データソースが設定しない場合がある
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub date: NaiveDate,
    pub description: String,
    pub holiday_type: String,
    #[serde(default)]
    pub active: Option<bool>,
}

/// 階層ごとの祝日カレンダー
///
/// どのリストも欠けていてよく、欠けている場合は空として扱う
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HolidaysByLevel {
    #[serde(default)]
    pub province: Option<Vec<Holiday>>,
    #[serde(default)]
    pub canton: Option<Vec<Holiday>>,
    #[serde(default)]
    pub parish: Option<Vec<Holiday>>,
}

/// 3階層の所在地
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub province: Option<LocationLevel>,
    #[serde(default)]
    pub canton: Option<LocationLevel>,
    #[serde(default)]
    pub parish: Option<LocationLevel>,
    #[serde(default)]
    pub holidays: Option<HolidaysByLevel>,
}

impl Location {
    /// 各階層の名前から所在地を作成（祝日なし）
    pub fn from_names(
        province: impl Into<String>,
        canton: impl Into<String>,
        parish: impl Into<String>,
    ) -> Self {
        Self {
            province: Some(LocationLevel::new(province)),
            canton: Some(LocationLevel::new(canton)),
            parish: Some(LocationLevel::new(parish)),
            holidays: None,
        }
    }

    pub fn province_name(&self) -> Option<&str> {
        self.province.as_ref().map(|level| level.name.as_str())
    }

    pub fn canton_name(&self) -> Option<&str> {
        self.canton.as_ref().map(|level| level.name.as_str())
    }

    pub fn parish_name(&self) -> Option<&str> {
        self.parish.as_ref().map(|level| level.name.as_str())
    }
}

/// 支店のドメインエンティティ
///
/// `id` はストアが採番し、`business_code` は作成後に変更されない
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    #[serde(default)]
    pub id: Option<String>,
    pub business_code: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: String,
    pub opened_date: NaiveDate,
    #[serde(default)]
    pub bank_entity: Option<BankEntity>,
    #[serde(default)]
    pub location: Option<Location>,
}

impl Branch {
    pub fn province_name(&self) -> Option<&str> {
        self.location.as_ref().and_then(Location::province_name)
    }

    pub fn canton_name(&self) -> Option<&str> {
        self.location.as_ref().and_then(Location::canton_name)
    }

    pub fn parish_name(&self) -> Option<&str> {
        self.location.as_ref().and_then(Location::parish_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_branch() -> Branch {
        Branch {
            id: Some("id-1".to_string()),
            business_code: "BR-001".to_string(),
            name: "Matriz".to_string(),
            address: "Av. Amazonas N34".to_string(),
            phone: "022000000".to_string(),
            latitude: Some(-0.18),
            longitude: Some(-78.48),
            status: STATUS_ACTIVE.to_string(),
            opened_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            bank_entity: Some(BankEntity {
                name: "Banco Arc".to_string(),
                tax_id: "1790000000001".to_string(),
                status: STATUS_ACTIVE.to_string(),
            }),
            location: Some(Location::from_names("Pichincha", "Quito", "Iñaquito")),
        }
    }

    #[test]
    fn test_level_names() {
        let branch = create_test_branch();

        assert_eq!(branch.province_name(), Some("Pichincha"));
        assert_eq!(branch.canton_name(), Some("Quito"));
        assert_eq!(branch.parish_name(), Some("Iñaquito"));
    }

    #[test]
    fn test_level_names_without_location() {
        let mut branch = create_test_branch();
        branch.location = None;

        assert!(branch.province_name().is_none());
        assert!(branch.canton_name().is_none());
        assert!(branch.parish_name().is_none());
    }

    #[test]
    fn test_branch_serialization() {
        let branch = create_test_branch();
        let json_str = serde_json::to_string(&branch).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json_str).unwrap();

        assert_eq!(parsed["businessCode"], "BR-001");
        assert_eq!(parsed["openedDate"], "2024-01-15");
        assert_eq!(parsed["bankEntity"]["taxId"], "1790000000001");
        assert_eq!(parsed["location"]["province"]["name"], "Pichincha");
    }

    #[test]
    fn test_holiday_deserialization_without_active() {
        let json_str = r#"{
            "date": "2024-05-24",
            "description": "Batalla de Pichincha",
            "holidayType": "NATIONAL"
        }"#;

        let holiday: Holiday = serde_json::from_str(json_str).unwrap();

        assert_eq!(holiday.description, "Batalla de Pichincha");
        assert!(holiday.active.is_none());
    }

    #[test]
    fn test_location_deserialization_minimal() {
        let json_str = r#"{ "province": { "name": "Guayas" } }"#;

        let location: Location = serde_json::from_str(json_str).unwrap();

        assert_eq!(location.province_name(), Some("Guayas"));
        assert!(location.canton.is_none());
        assert!(location.holidays.is_none());
    }
}
