//! # Domain Services
//!
//! エンティティ間の純粋な変換
//!
//! - **HolidayProjection**: 支店レコード → クライアント向けビュー

pub mod holiday_projection;
