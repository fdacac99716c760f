//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::{Args as ClapArgs, Parser, Subcommand};

/// 支店ディレクトリを操作するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "branch-directory")]
#[command(about = "Manage bank branch records and their holiday calendars", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, default_value = "./.branch-directory/config.json")]
    pub config: String,

    /// Branch store path (overrides the config file)
    #[arg(long)]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// サブコマンド
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Create a branch from a JSON request file
    Create {
        /// Path to the request JSON
        #[arg(short, long)]
        request: String,
    },
    /// Update name, address, phone and coordinates of a branch
    Update {
        id: String,
        /// Path to the request JSON
        #[arg(short, long)]
        request: String,
    },
    /// Delete a branch by id
    Delete { id: String },
    /// Get a branch by id
    Get { id: String },
    /// Get a branch by business code
    GetByCode { code: String },
    /// List branches, optionally filtered by one hierarchy level
    List(ListFilter),
    /// List the holidays that apply to a branch
    Holidays { code: String },
}

/// 一覧の絞り込み条件（いずれか1つ）
#[derive(ClapArgs, Debug, Clone, PartialEq, Default)]
#[group(multiple = false)]
pub struct ListFilter {
    #[arg(long)]
    pub province: Option<String>,
    #[arg(long)]
    pub canton: Option<String>,
    #[arg(long)]
    pub parish: Option<String>,
}
