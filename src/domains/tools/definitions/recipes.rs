//! Recipe tools.

use std::sync::Arc;

use rmcp::model::{CallToolResult, ToolAnnotations};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::api::types::{CreateRecipe, RunRecipe};
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::definition::{
    NoParams, ToolDefinition, destructive, read_only, write,
};
use crate::domains::tools::envelope;

use super::common::{non_empty, positive_id, positive_ids};

// ── list_recipes ─────────────────────────────────────────────────────

pub struct ListRecipesTool;

impl ToolDefinition for ListRecipesTool {
    const NAME: &'static str = "list_recipes";
    const DESCRIPTION: &'static str = "List all shell recipes on the account.";
    type Params = NoParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    async fn run(_params: NoParams, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Listing recipes");
        match ctx.api.recipes().list().await {
            Ok(list) => envelope::list("recipes", &list.recipes),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── create_recipe ────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateRecipeParams {
    #[schemars(description = "Name of the recipe")]
    pub name: String,
    #[schemars(description = "Shell script body")]
    pub script: String,
    #[schemars(description = "Unix user the recipe runs as; omit for root")]
    pub user: Option<String>,
}

pub struct CreateRecipeTool;

impl ToolDefinition for CreateRecipeTool {
    const NAME: &'static str = "create_recipe";
    const DESCRIPTION: &'static str = "Create a reusable shell recipe on the account.";
    type Params = CreateRecipeParams;

    fn annotations() -> ToolAnnotations {
        write()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        non_empty("name", &params.name)?;
        non_empty("script", &params.script)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Creating recipe {}", params.name);
        let payload = CreateRecipe {
            name: params.name,
            script: params.script,
            user: params.user,
        };
        match ctx.api.recipes().create(&payload).await {
            Ok(recipe) => envelope::entity(&recipe),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── run_recipe ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RunRecipeParams {
    #[schemars(description = "Numeric id of the recipe")]
    pub recipe_id: u64,
    #[schemars(description = "Ids of servers to run the recipe on")]
    pub server_ids: Vec<u64>,
}

pub struct RunRecipeTool;

impl ToolDefinition for RunRecipeTool {
    const NAME: &'static str = "run_recipe";
    const DESCRIPTION: &'static str =
        "Run a recipe on one or more servers. Execution is asynchronous upstream.";
    type Params = RunRecipeParams;

    fn annotations() -> ToolAnnotations {
        destructive()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("recipe_id", params.recipe_id)?;
        positive_ids("server_ids", &params.server_ids)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!(
            "Running recipe {} on {} server(s)",
            params.recipe_id,
            params.server_ids.len()
        );
        let payload = RunRecipe {
            servers: params.server_ids.clone(),
        };
        match ctx.api.recipes().run(params.recipe_id, &payload).await {
            Ok(()) => envelope::message(format!(
                "Recipe {} queued on {} server(s)",
                params.recipe_id,
                params.server_ids.len()
            )),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── delete_recipe ────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RecipeIdParams {
    #[schemars(description = "Numeric id of the recipe")]
    pub recipe_id: u64,
}

pub struct DeleteRecipeTool;

impl ToolDefinition for DeleteRecipeTool {
    const NAME: &'static str = "delete_recipe";
    const DESCRIPTION: &'static str = "Delete a recipe from the account.";
    type Params = RecipeIdParams;

    fn annotations() -> ToolAnnotations {
        destructive()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("recipe_id", params.recipe_id)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Deleting recipe {}", params.recipe_id);
        match ctx.api.recipes().delete(params.recipe_id).await {
            Ok(()) => envelope::message(format!("Recipe {} deleted", params.recipe_id)),
            Err(e) => envelope::failure(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_recipe_requires_targets() {
        let params = RunRecipeParams {
            recipe_id: 1,
            server_ids: vec![],
        };
        assert!(RunRecipeTool::validate(&params).is_err());
    }

    #[test]
    fn test_create_recipe_requires_script() {
        let params: CreateRecipeParams =
            serde_json::from_str(r#"{"name": "setup", "script": ""}"#).unwrap();
        assert!(CreateRecipeTool::validate(&params).is_err());
    }
}
