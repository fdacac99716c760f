//! # Branch Directory
//!
//! 銀行支店レコードのディレクトリサービス
//!
//! 支店は3階層の所在地（province / canton / parish）と銀行エンティティを値として保持し、
//! 読み取り時には所在地名と3階層分の祝日カレンダーを連結したフラットなビューとして返す。
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: エンティティ、Repository trait、ビュー変換（HolidayProjection）
//! - **Application層**: DTO、BranchBuilder、ユースケース（BranchDirectory）
//! - **Adapter層**: ストア実装（インメモリ, JSONファイル）と設定
//! - **Driver層**: CLI、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
