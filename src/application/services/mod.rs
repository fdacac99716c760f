//! # Application Services
//!
//! DTO からドメインエンティティへの純粋な変換
//!
//! - **BranchBuilder**: リクエスト → 支店レコード

pub mod branch_builder;
