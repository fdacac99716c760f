//! Adapter Layer
//!
//! 外部システム（ファイルシステム上のストア、設定ファイル）との統合

pub mod config;
pub mod repositories;
