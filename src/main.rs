//! Branch Directory CLI
//!
//! 支店レコードの作成・更新・削除・検索と祝日の取得

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use branch_directory::adapter::config::Config;
use branch_directory::driver::{Args, DirectoryWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let mut config = Config::load_or_default(&args.config)?;
    if let Some(store) = args.store {
        config.store_path = store;
    }

    // Create workflow with injected dependencies
    let workflow = DirectoryWorkflow::new(&config);

    let output = workflow.execute(args.command).await?;
    println!("{}", output);

    Ok(())
}
