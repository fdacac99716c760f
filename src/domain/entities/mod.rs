//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **Branch**: 支店（BankEntity と Location を値として埋め込む）
//! - **BranchView**: クライアント向けのフラットな支店表現

pub mod branch;
pub mod branch_view;
