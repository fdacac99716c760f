//! # Application Layer
//!
//! アプリケーション固有のビジネスフロー（ユースケース）
//!
//! ## 特徴
//!
//! - Domain層のエンティティとサービスを組み合わせてビジネスフローを実現
//! - Repository traitに依存（実装には依存しない）
//! - ストアの詳細は知らない
//!
//! ## 構成要素
//!
//! - **dto**: Data Transfer Object（BranchRequest）
//! - **services**: DTO からエンティティへの変換（BranchBuilder）
//! - **use_cases**: ユースケース（BranchDirectory）

pub mod dto;
pub mod services;
pub mod use_cases;
