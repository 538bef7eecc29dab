//! Recipes and nginx templates.

use serde::{Deserialize, Serialize};

// ── Recipes ──────────────────────────────────────────────────────────

/// A reusable shell recipe on the account (not scoped to a server).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u64,
    pub name: String,
    /// Unix user the recipe runs as.
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub script: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeList {
    pub recipes: Vec<Recipe>,
}

impl RecipeList {
    pub fn count(&self) -> usize {
        self.recipes.len()
    }
}

/// Payload for `POST /recipes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRecipe {
    pub name: String,
    pub script: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// Payload for `POST /recipes/{id}/run`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecipe {
    /// Ids of servers to run the recipe on.
    pub servers: Vec<u64>,
}

// ── Nginx templates ──────────────────────────────────────────────────

/// A custom nginx configuration template on a server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NginxTemplate {
    pub id: u64,
    pub server_id: u64,
    pub name: String,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NginxTemplateList {
    pub templates: Vec<NginxTemplate>,
}

impl NginxTemplateList {
    pub fn count(&self) -> usize {
        self.templates.len()
    }
}

/// Payload for `POST /servers/{id}/nginx/templates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateNginxTemplate {
    pub name: String,
    pub content: String,
}

/// Payload for `PUT /servers/{id}/nginx/templates/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateNginxTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recipe_round_trip() {
        let wire = json!({
            "id": 30,
            "name": "install-redis",
            "user": "root",
            "script": "apt-get install -y redis-server",
            "created_at": "2026-04-01 09:30:00"
        });
        let recipe: Recipe = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(recipe.name, "install-redis");
        assert_eq!(serde_json::to_value(&recipe).unwrap(), wire);
    }

    #[test]
    fn test_update_nginx_template_partial() {
        let update = UpdateNginxTemplate {
            content: Some("server {}".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"content": "server {}"})
        );
    }
}
