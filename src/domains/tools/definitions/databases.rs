//! Database and database-user tools.

use std::sync::Arc;

use rmcp::model::{CallToolResult, ToolAnnotations};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::api::types::{CreateDatabase, CreateDatabaseUser};
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::definition::{ToolDefinition, destructive, read_only, write};
use crate::domains::tools::envelope;

use super::common::{MIN_PASSWORD_LEN, min_len, non_empty, positive_id};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ServerScopedParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
}

// ── list_databases ───────────────────────────────────────────────────

pub struct ListDatabasesTool;

impl ToolDefinition for ListDatabasesTool {
    const NAME: &'static str = "list_databases";
    const DESCRIPTION: &'static str = "List all databases on a server.";
    type Params = ServerScopedParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Listing databases on server {}", params.server_id);
        match ctx.api.databases().list(params.server_id).await {
            Ok(list) => envelope::list("databases", &list.databases),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── get_database ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DatabaseIdParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
    #[schemars(description = "Numeric id of the database")]
    pub database_id: u64,
}

pub struct GetDatabaseTool;

impl ToolDefinition for GetDatabaseTool {
    const NAME: &'static str = "get_database";
    const DESCRIPTION: &'static str = "Get a single database by id.";
    type Params = DatabaseIdParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)?;
        positive_id("database_id", params.database_id)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!(
            "Fetching database {} on server {}",
            params.database_id, params.server_id
        );
        match ctx
            .api
            .databases()
            .get(params.server_id, params.database_id)
            .await
        {
            Ok(db) => envelope::entity(&db),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── create_database ──────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateDatabaseParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
    #[schemars(description = "Name of the new database")]
    pub name: String,
    #[schemars(description = "Optionally create a user granted to this database")]
    pub user: Option<String>,
    #[schemars(description = "Password for the new user (min 8 characters)")]
    pub password: Option<String>,
}

pub struct CreateDatabaseTool;

impl ToolDefinition for CreateDatabaseTool {
    const NAME: &'static str = "create_database";
    const DESCRIPTION: &'static str =
        "Create a database on a server, optionally with a dedicated user.";
    type Params = CreateDatabaseParams;

    fn annotations() -> ToolAnnotations {
        write()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)?;
        non_empty("name", &params.name)?;
        if let Some(password) = &params.password {
            min_len("password", password, MIN_PASSWORD_LEN)?;
        }
        Ok(())
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Creating database {} on server {}", params.name, params.server_id);
        let payload = CreateDatabase {
            name: params.name,
            user: params.user,
            password: params.password,
        };
        match ctx.api.databases().create(params.server_id, &payload).await {
            Ok(db) => envelope::entity(&db),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── delete_database ──────────────────────────────────────────────────

pub struct DeleteDatabaseTool;

impl ToolDefinition for DeleteDatabaseTool {
    const NAME: &'static str = "delete_database";
    const DESCRIPTION: &'static str = "Permanently delete a database and its data.";
    type Params = DatabaseIdParams;

    fn annotations() -> ToolAnnotations {
        destructive()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)?;
        positive_id("database_id", params.database_id)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!(
            "Deleting database {} on server {}",
            params.database_id, params.server_id
        );
        match ctx
            .api
            .databases()
            .delete(params.server_id, params.database_id)
            .await
        {
            Ok(()) => envelope::message(format!("Database {} deleted", params.database_id)),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── list_database_users ──────────────────────────────────────────────

pub struct ListDatabaseUsersTool;

impl ToolDefinition for ListDatabaseUsersTool {
    const NAME: &'static str = "list_database_users";
    const DESCRIPTION: &'static str =
        "List all database users on a server with the databases each can access.";
    type Params = ServerScopedParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Listing database users on server {}", params.server_id);
        match ctx.api.database_users().list(params.server_id).await {
            Ok(list) => envelope::list("users", &list.users),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── create_database_user ─────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateDatabaseUserParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
    #[schemars(description = "Name of the new database user")]
    pub name: String,
    #[schemars(description = "Password for the new user (min 8 characters)")]
    pub password: String,
    #[schemars(description = "Ids of databases this user may access")]
    #[serde(default)]
    pub databases: Vec<u64>,
}

pub struct CreateDatabaseUserTool;

impl ToolDefinition for CreateDatabaseUserTool {
    const NAME: &'static str = "create_database_user";
    const DESCRIPTION: &'static str = "Create a database user on a server.";
    type Params = CreateDatabaseUserParams;

    fn annotations() -> ToolAnnotations {
        write()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)?;
        non_empty("name", &params.name)?;
        min_len("password", &params.password, MIN_PASSWORD_LEN)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!(
            "Creating database user {} on server {}",
            params.name, params.server_id
        );
        let payload = CreateDatabaseUser {
            name: params.name,
            password: params.password,
            databases: params.databases,
        };
        match ctx
            .api
            .database_users()
            .create(params.server_id, &payload)
            .await
        {
            Ok(user) => envelope::entity(&user),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── delete_database_user ─────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DatabaseUserIdParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
    #[schemars(description = "Numeric id of the database user")]
    pub user_id: u64,
}

pub struct DeleteDatabaseUserTool;

impl ToolDefinition for DeleteDatabaseUserTool {
    const NAME: &'static str = "delete_database_user";
    const DESCRIPTION: &'static str = "Delete a database user from a server.";
    type Params = DatabaseUserIdParams;

    fn annotations() -> ToolAnnotations {
        destructive()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)?;
        positive_id("user_id", params.user_id)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!(
            "Deleting database user {} on server {}",
            params.user_id, params.server_id
        );
        match ctx
            .api
            .database_users()
            .delete(params.server_id, params.user_id)
            .await
        {
            Ok(()) => envelope::message(format!("Database user {} deleted", params.user_id)),
            Err(e) => envelope::failure(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_database_optional_user() {
        let params: CreateDatabaseParams =
            serde_json::from_str(r#"{"server_id": 1, "name": "mydb"}"#).unwrap();
        assert!(CreateDatabaseTool::validate(&params).is_ok());
        assert_eq!(params.user, None);
    }

    #[test]
    fn test_create_database_short_password_rejected() {
        let params: CreateDatabaseParams = serde_json::from_str(
            r#"{"server_id": 1, "name": "mydb", "user": "app", "password": "short"}"#,
        )
        .unwrap();
        assert!(CreateDatabaseTool::validate(&params).is_err());
    }

    #[test]
    fn test_create_database_user_password_required() {
        let parsed: Result<CreateDatabaseUserParams, _> =
            serde_json::from_str(r#"{"server_id": 1, "name": "app"}"#);
        assert!(parsed.is_err());
    }
}
