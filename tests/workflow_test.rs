//! Workflow Integration Tests
//!
//! DirectoryWorkflow の統合テスト

use branch_directory::adapter::config::Config;
use branch_directory::driver::cli::{Command, ListFilter};
use branch_directory::driver::workflow::DirectoryWorkflow;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// テスト用のConfigファイルを作成
fn create_test_config(dir: &Path) -> String {
    let config_path = dir.join("config.json");
    let store_path = dir.join("data/branches.json");
    let config_content = format!(
        r#"{{ "store_path": "{}", "pretty_output": false }}"#,
        store_path.to_string_lossy()
    );
    fs::write(&config_path, config_content).unwrap();
    config_path.to_string_lossy().to_string()
}

/// テスト用のリクエストファイルを作成
fn create_test_request(dir: &Path, code: &str) -> String {
    let request_path = dir.join(format!("{}.json", code));
    let request_content = format!(
        r#"{{
  "businessCode": "{}",
  "name": "Matriz",
  "address": "Av. Amazonas N34",
  "phone": "022000000",
  "latitude": -0.18,
  "longitude": -78.48,
  "entityName": "Banco Arc",
  "entityTaxId": "1790000000001",
  "province": "Pichincha",
  "canton": "Quito",
  "parish": "Iñaquito"
}}"#,
        code
    );
    fs::write(&request_path, request_content).unwrap();
    request_path.to_string_lossy().to_string()
}

#[tokio::test]
async fn test_workflow_create_persists_to_store() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(temp_dir.path());
    let request_path = create_test_request(temp_dir.path(), "BR-001");

    let config = Config::load(&config_path).unwrap();
    let workflow = DirectoryWorkflow::new(&config);

    let output = workflow
        .execute(Command::Create {
            request: request_path,
        })
        .await
        .unwrap();

    let created: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(created["businessCode"], "BR-001");
    assert!(temp_dir.path().join("data/branches.json").exists());

    // 別インスタンスから読み戻せること
    let workflow = DirectoryWorkflow::new(&config);
    let output = workflow
        .execute(Command::Get {
            id: created["id"].as_str().unwrap().to_string(),
        })
        .await
        .unwrap();
    let fetched: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(fetched["location"]["parishName"], "Iñaquito");
    assert_eq!(fetched["bankEntity"]["status"], "ACTIVE");
}

#[tokio::test]
async fn test_workflow_holidays_and_list_on_empty_store() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(temp_dir.path());
    let config = Config::load(&config_path).unwrap();
    let workflow = DirectoryWorkflow::new(&config);

    let output = workflow
        .execute(Command::List(ListFilter {
            canton: Some("Quito".to_string()),
            ..Default::default()
        }))
        .await
        .unwrap();
    assert_eq!(output, "[]");

    let result = workflow
        .execute(Command::Holidays {
            code: "BR-001".to_string(),
        })
        .await;
    assert!(result.is_err(), "Unknown code should fail, got: {:?}", result);
}
