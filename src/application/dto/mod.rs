//! # Data Transfer Objects
//!
//! 外部から受け取るリクエスト

pub mod branch_request;
