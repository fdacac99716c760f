//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - ストレージや通信について何も知らない
//! - フレームワークに依存しない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（Branch, BranchViewなど）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（HolidayProjection）
//! - **errors**: エラー分類

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
