//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::fs;
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::repositories::json_file_branch_repository::JsonFileBranchRepository;
use crate::application::use_cases::branch_directory::BranchDirectory;
use crate::application::dto::branch_request::BranchRequest;
use crate::domain::entities::branch_view::BranchView;
use crate::domain::repositories::branch_repository::BranchRepository;

use super::cli::{Command, ListFilter};

/// Read a branch request from a JSON file
pub fn read_request(path: &str) -> Result<BranchRequest> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read request file: {}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse request file: {}", path))
}

/// Directory Workflow
pub struct DirectoryWorkflow<R: BranchRepository = JsonFileBranchRepository> {
    directory: BranchDirectory<R>,
    pretty_output: bool,
}

impl DirectoryWorkflow<JsonFileBranchRepository> {
    /// Create a workflow backed by the JSON file store named in the config
    pub fn new(config: &Config) -> Self {
        info!("Using branch store {}", config.store_path);
        let repository = Arc::new(JsonFileBranchRepository::new(&config.store_path));
        Self::with_repository(repository, config.pretty_output)
    }
}

impl<R: BranchRepository> DirectoryWorkflow<R> {
    /// Create a workflow with an injected repository
    pub fn with_repository(repository: Arc<R>, pretty_output: bool) -> Self {
        Self {
            directory: BranchDirectory::new(repository),
            pretty_output,
        }
    }

    /// Execute one command and render its result as JSON
    pub async fn execute(&self, command: Command) -> Result<String> {
        match command {
            Command::Create { request } => {
                let request = read_request(&request)?;
                self.render(&self.directory.create(&request).await?)
            }
            Command::Update { id, request } => {
                let request = read_request(&request)?;
                self.render(&self.directory.update(&id, &request).await?)
            }
            Command::Delete { id } => {
                self.directory.delete(&id).await?;
                self.render(&serde_json::json!({ "deleted": id }))
            }
            Command::Get { id } => self.render(&self.directory.get_by_id(&id).await?),
            Command::GetByCode { code } => self.render(&self.directory.get_by_code(&code).await?),
            Command::List(filter) => self.render(&self.list(filter).await?),
            Command::Holidays { code } => self.render(&self.directory.get_holidays(&code).await?),
        }
    }

    async fn list(&self, filter: ListFilter) -> Result<Vec<BranchView>> {
        let views = match filter {
            ListFilter {
                province: Some(name),
                ..
            } => self.directory.list_by_province(&name).await?,
            ListFilter {
                canton: Some(name), ..
            } => self.directory.list_by_canton(&name).await?,
            ListFilter {
                parish: Some(name), ..
            } => self.directory.list_by_parish(&name).await?,
            _ => self.directory.list_all().await?,
        };
        Ok(views)
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let output = if self.pretty_output {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        output.context("Failed to serialize output")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::repositories::in_memory_branch_repository::InMemoryBranchRepository;
    use crate::domain::errors::DirectoryError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_request(code: &str, province: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        let json = format!(
            r#"{{
                "businessCode": "{}",
                "name": "Matriz",
                "address": "Av. Amazonas",
                "phone": "022000000",
                "entityName": "Banco Arc",
                "entityTaxId": "1790000000001",
                "province": "{}",
                "canton": "Quito",
                "parish": "Iñaquito"
            }}"#,
            code, province
        );
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    fn create_workflow() -> DirectoryWorkflow<InMemoryBranchRepository> {
        DirectoryWorkflow::with_repository(Arc::new(InMemoryBranchRepository::new()), false)
    }

    #[tokio::test]
    async fn test_create_then_get_by_code() {
        let workflow = create_workflow();
        let request = write_request("BR-001", "Pichincha");

        workflow
            .execute(Command::Create {
                request: request.path().to_string_lossy().to_string(),
            })
            .await
            .unwrap();
        let output = workflow
            .execute(Command::GetByCode {
                code: "BR-001".to_string(),
            })
            .await
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["businessCode"], "BR-001");
        assert_eq!(parsed["status"], "ACTIVE");
        assert_eq!(parsed["location"]["provinceName"], "Pichincha");
        assert_eq!(parsed["location"]["feriados"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_duplicate_create_surfaces_error() {
        let workflow = create_workflow();
        let request = write_request("BR-001", "Pichincha");
        let path = request.path().to_string_lossy().to_string();

        workflow
            .execute(Command::Create {
                request: path.clone(),
            })
            .await
            .unwrap();
        let err = workflow
            .execute(Command::Create { request: path })
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<DirectoryError>(),
            Some(DirectoryError::DuplicateKey(_))
        ));
    }

    #[tokio::test]
    async fn test_list_with_filter() {
        let workflow = create_workflow();
        for (code, province) in [("BR-001", "Pichincha"), ("BR-002", "Guayas")] {
            let request = write_request(code, province);
            workflow
                .execute(Command::Create {
                    request: request.path().to_string_lossy().to_string(),
                })
                .await
                .unwrap();
        }

        let output = workflow
            .execute(Command::List(ListFilter {
                province: Some("Guayas".to_string()),
                ..Default::default()
            }))
            .await
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 1);
        assert_eq!(parsed[0]["businessCode"], "BR-002");

        let output = workflow
            .execute(Command::List(ListFilter::default()))
            .await
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_request_file() {
        let workflow = create_workflow();

        let err = workflow
            .execute(Command::Create {
                request: "/nonexistent/request.json".to_string(),
            })
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Failed to read request file"));
    }

    #[tokio::test]
    async fn test_delete_unknown_id() {
        let workflow = create_workflow();

        let err = workflow
            .execute(Command::Delete {
                id: "missing".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<DirectoryError>(),
            Some(DirectoryError::NotFound(_))
        ));
    }
}
