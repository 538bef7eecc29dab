//! Site and deployment types.

use serde::{Deserialize, Serialize};

/// A site hosted on a server - from `GET /servers/{id}/sites/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub id: u64,
    pub server_id: u64,
    /// Primary domain of the site.
    pub name: String,
    /// `None` until a repository is attached.
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub repository_branch: Option<String>,
    #[serde(default)]
    pub repository_provider: Option<String>,
    #[serde(default)]
    pub directory: Option<String>,
    #[serde(default)]
    pub php_version: Option<String>,
    pub status: String,
    /// Status of the most recent deployment, if any.
    #[serde(default)]
    pub deployment_status: Option<String>,
    #[serde(default)]
    pub quick_deploy: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Sites on a server - from `GET /servers/{id}/sites`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteList {
    pub sites: Vec<Site>,
}

impl SiteList {
    pub fn count(&self) -> usize {
        self.sites.len()
    }
}

/// Payload for `POST /servers/{id}/sites`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSite {
    /// Primary domain.
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub php_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isolated: Option<bool>,
}

/// Payload for `PUT .../deployment/script`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateDeploymentScript {
    pub content: String,
}

/// One deployment run - from `GET .../deployment-history`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deployment {
    pub id: u64,
    pub server_id: u64,
    pub site_id: u64,
    #[serde(default)]
    pub commit_hash: Option<String>,
    #[serde(default)]
    pub commit_author: Option<String>,
    #[serde(default)]
    pub commit_message: Option<String>,
    pub status: String,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub ended_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentList {
    pub deployments: Vec<Deployment>,
}

impl DeploymentList {
    pub fn count(&self) -> usize {
        self.deployments.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_site_round_trip() {
        let wire = json!({
            "id": 3,
            "server_id": 7,
            "name": "example.com",
            "repository": "org/app",
            "repository_branch": "main",
            "repository_provider": "github",
            "directory": "/public",
            "php_version": "php83",
            "status": "installed",
            "deployment_status": null,
            "quick_deploy": true,
            "created_at": "2026-02-01 12:00:00"
        });

        let site: Site = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(site.name, "example.com");
        assert!(site.quick_deploy);
        assert_eq!(serde_json::to_value(&site).unwrap(), wire);
    }

    #[test]
    fn test_site_without_repository() {
        let site: Site = serde_json::from_value(json!({
            "id": 3,
            "server_id": 7,
            "name": "bare.example.com",
            "status": "installing"
        }))
        .unwrap();
        assert_eq!(site.repository, None);
        assert!(!site.quick_deploy);
    }

    #[test]
    fn test_create_site_minimal_payload() {
        let create = CreateSite {
            domain: "new.example.com".to_string(),
            project_type: None,
            directory: None,
            php_version: None,
            isolated: None,
        };
        assert_eq!(
            serde_json::to_value(&create).unwrap(),
            json!({"domain": "new.example.com"})
        );
    }
}
