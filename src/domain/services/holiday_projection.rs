//! # Holiday Projection
//!
//! 保存された支店をクライアント向けビューに変換する
//!
//! ストアにはアクセスしない純粋な変換

use crate::domain::entities::branch::{BankEntity, Branch, Holiday, Location};
use crate::domain::entities::branch_view::{
    BankEntityView, BranchView, HolidayView, LocationView,
};

/// 祝日プロジェクション
pub struct HolidayProjection;

impl HolidayProjection {
    /// 支店をビューに変換
    pub fn project(branch: &Branch) -> BranchView {
        BranchView {
            id: branch.id.clone(),
            business_code: branch.business_code.clone(),
            name: branch.name.clone(),
            address: branch.address.clone(),
            phone: branch.phone.clone(),
            latitude: branch.latitude,
            longitude: branch.longitude,
            status: branch.status.clone(),
            opened_date: branch.opened_date,
            bank_entity: branch.bank_entity.as_ref().map(Self::project_entity),
            location: branch.location.as_ref().map(Self::project_location),
        }
    }

    /// 複数の支店をまとめて変換
    pub fn project_all(branches: &[Branch]) -> Vec<BranchView> {
        branches.iter().map(Self::project).collect()
    }

    fn project_entity(entity: &BankEntity) -> BankEntityView {
        BankEntityView {
            name: entity.name.clone(),
            tax_id: entity.tax_id.clone(),
            status: entity.status.clone(),
        }
    }

    fn project_location(location: &Location) -> LocationView {
        LocationView {
            province_name: location.province_name().map(str::to_string),
            canton_name: location.canton_name().map(str::to_string),
            parish_name: location.parish_name().map(str::to_string),
            holidays: Self::flatten_holidays(location),
        }
    }

    /// province → canton → parish の順に祝日を連結する
    ///
    /// 欠けているリストは0件として扱い、祝日データ自体がない場合は空を返す
    pub fn flatten_holidays(location: &Location) -> Vec<HolidayView> {
        let Some(by_level) = &location.holidays else {
            return Vec::new();
        };

        [&by_level.province, &by_level.canton, &by_level.parish]
            .into_iter()
            .flatten()
            .flatten()
            .map(Self::project_holiday)
            .collect()
    }

    fn project_holiday(holiday: &Holiday) -> HolidayView {
        HolidayView {
            date: holiday.date,
            description: holiday.description.clone(),
            holiday_type: holiday.holiday_type.clone(),
            active: holiday.active.unwrap_or(false),
        }
    }
}
