//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **BranchDirectory**: 支店の作成・更新・削除・検索と祝日の取得

pub mod branch_directory;
