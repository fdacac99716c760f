//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod branch_table;
pub mod in_memory_branch_repository;
pub mod json_file_branch_repository;
