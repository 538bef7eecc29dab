//! Database and database-user façades.

use crate::api::client::ApiClient;
use crate::api::error::ApiResult;
use crate::api::types::{
    CreateDatabase, CreateDatabaseUser, Database, DatabaseList, DatabaseUser, DatabaseUserList,
    UpdateDatabaseUser,
};

/// Operations on databases.
pub struct Databases<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn databases(&self) -> Databases<'_> {
        Databases { client: self }
    }

    pub fn database_users(&self) -> DatabaseUsers<'_> {
        DatabaseUsers { client: self }
    }
}

impl Databases<'_> {
    pub async fn list(&self, server_id: u64) -> ApiResult<DatabaseList> {
        self.client.get(&format!("servers/{server_id}/databases")).await
    }

    pub async fn get(&self, server_id: u64, database_id: u64) -> ApiResult<Database> {
        self.client
            .get(&format!("servers/{server_id}/databases/{database_id}"))
            .await
    }

    pub async fn create(&self, server_id: u64, payload: &CreateDatabase) -> ApiResult<Database> {
        self.client
            .post(&format!("servers/{server_id}/databases"), payload)
            .await
    }

    pub async fn delete(&self, server_id: u64, database_id: u64) -> ApiResult<()> {
        self.client
            .delete(&format!("servers/{server_id}/databases/{database_id}"))
            .await
    }
}

/// Operations on database users.
pub struct DatabaseUsers<'a> {
    client: &'a ApiClient,
}

impl DatabaseUsers<'_> {
    pub async fn list(&self, server_id: u64) -> ApiResult<DatabaseUserList> {
        self.client
            .get(&format!("servers/{server_id}/database-users"))
            .await
    }

    pub async fn get(&self, server_id: u64, user_id: u64) -> ApiResult<DatabaseUser> {
        self.client
            .get(&format!("servers/{server_id}/database-users/{user_id}"))
            .await
    }

    pub async fn create(
        &self,
        server_id: u64,
        payload: &CreateDatabaseUser,
    ) -> ApiResult<DatabaseUser> {
        self.client
            .post(&format!("servers/{server_id}/database-users"), payload)
            .await
    }

    pub async fn update(
        &self,
        server_id: u64,
        user_id: u64,
        payload: &UpdateDatabaseUser,
    ) -> ApiResult<DatabaseUser> {
        self.client
            .put(
                &format!("servers/{server_id}/database-users/{user_id}"),
                payload,
            )
            .await
    }

    pub async fn delete(&self, server_id: u64, user_id: u64) -> ApiResult<()> {
        self.client
            .delete(&format!("servers/{server_id}/database-users/{user_id}"))
            .await
    }
}
