//! Recipe and nginx-template façades.

use crate::api::client::ApiClient;
use crate::api::error::ApiResult;
use crate::api::types::{
    CreateNginxTemplate, CreateRecipe, NginxTemplate, NginxTemplateList, Recipe, RecipeList,
    RunRecipe, UpdateNginxTemplate,
};

/// Operations on account-level shell recipes.
pub struct Recipes<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn recipes(&self) -> Recipes<'_> {
        Recipes { client: self }
    }

    pub fn nginx_templates(&self) -> NginxTemplates<'_> {
        NginxTemplates { client: self }
    }
}

impl Recipes<'_> {
    pub async fn list(&self) -> ApiResult<RecipeList> {
        self.client.get("recipes").await
    }

    pub async fn get(&self, recipe_id: u64) -> ApiResult<Recipe> {
        self.client.get(&format!("recipes/{recipe_id}")).await
    }

    pub async fn create(&self, payload: &CreateRecipe) -> ApiResult<Recipe> {
        self.client.post("recipes", payload).await
    }

    pub async fn delete(&self, recipe_id: u64) -> ApiResult<()> {
        self.client.delete(&format!("recipes/{recipe_id}")).await
    }

    /// Run the recipe on the given servers. Execution is asynchronous
    /// upstream; this only enqueues it.
    pub async fn run(&self, recipe_id: u64, payload: &RunRecipe) -> ApiResult<()> {
        self.client
            .post_empty(&format!("recipes/{recipe_id}/run"), payload)
            .await
    }
}

/// Operations on server nginx templates.
pub struct NginxTemplates<'a> {
    client: &'a ApiClient,
}

impl NginxTemplates<'_> {
    pub async fn list(&self, server_id: u64) -> ApiResult<NginxTemplateList> {
        self.client
            .get(&format!("servers/{server_id}/nginx/templates"))
            .await
    }

    pub async fn get(&self, server_id: u64, template_id: u64) -> ApiResult<NginxTemplate> {
        self.client
            .get(&format!("servers/{server_id}/nginx/templates/{template_id}"))
            .await
    }

    pub async fn create(
        &self,
        server_id: u64,
        payload: &CreateNginxTemplate,
    ) -> ApiResult<NginxTemplate> {
        self.client
            .post(&format!("servers/{server_id}/nginx/templates"), payload)
            .await
    }

    pub async fn update(
        &self,
        server_id: u64,
        template_id: u64,
        payload: &UpdateNginxTemplate,
    ) -> ApiResult<NginxTemplate> {
        self.client
            .put(
                &format!("servers/{server_id}/nginx/templates/{template_id}"),
                payload,
            )
            .await
    }

    pub async fn delete(&self, server_id: u64, template_id: u64) -> ApiResult<()> {
        self.client
            .delete(&format!("servers/{server_id}/nginx/templates/{template_id}"))
            .await
    }
}
