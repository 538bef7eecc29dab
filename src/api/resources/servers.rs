//! Server and account façades.

use crate::api::client::ApiClient;
use crate::api::error::ApiResult;
use crate::api::types::{CreateServer, Server, ServerList, UpdateServer, User};

/// Operations on servers.
pub struct Servers<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn servers(&self) -> Servers<'_> {
        Servers { client: self }
    }

    pub fn account(&self) -> Account<'_> {
        Account { client: self }
    }
}

impl Servers<'_> {
    pub async fn list(&self) -> ApiResult<ServerList> {
        self.client.get("servers").await
    }

    pub async fn get(&self, server_id: u64) -> ApiResult<Server> {
        self.client.get(&format!("servers/{server_id}")).await
    }

    pub async fn create(&self, payload: &CreateServer) -> ApiResult<Server> {
        self.client.post("servers", payload).await
    }

    pub async fn update(&self, server_id: u64, payload: &UpdateServer) -> ApiResult<Server> {
        self.client.put(&format!("servers/{server_id}"), payload).await
    }

    pub async fn delete(&self, server_id: u64) -> ApiResult<()> {
        self.client.delete(&format!("servers/{server_id}")).await
    }

    pub async fn reboot(&self, server_id: u64) -> ApiResult<()> {
        self.client.action(&format!("servers/{server_id}/reboot")).await
    }
}

/// Operations on the account behind the API token.
pub struct Account<'a> {
    client: &'a ApiClient,
}

impl Account<'_> {
    pub async fn user(&self) -> ApiResult<User> {
        self.client.get("user").await
    }
}
