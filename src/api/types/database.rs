//! Database and database-user types.

use serde::{Deserialize, Serialize};

/// A database on a server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Database {
    pub id: u64,
    pub server_id: u64,
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseList {
    pub databases: Vec<Database>,
}

impl DatabaseList {
    pub fn count(&self) -> usize {
        self.databases.len()
    }
}

/// Payload for `POST /servers/{id}/databases`.
///
/// `user`/`password` optionally create a dedicated user granted to the new
/// database in the same call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDatabase {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// A database user on a server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseUser {
    pub id: u64,
    pub server_id: u64,
    pub name: String,
    pub status: String,
    /// Ids of databases this user can access.
    #[serde(default)]
    pub databases: Vec<u64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseUserList {
    pub users: Vec<DatabaseUser>,
}

impl DatabaseUserList {
    pub fn count(&self) -> usize {
        self.users.len()
    }
}

/// Payload for `POST /servers/{id}/database-users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDatabaseUser {
    pub name: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub databases: Vec<u64>,
}

/// Payload for `PUT /servers/{id}/database-users/{id}`.
///
/// Only the grant list is mutable upstream; omitting it leaves the grants
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateDatabaseUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub databases: Option<Vec<u64>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_database_round_trip() {
        let wire = json!({
            "id": 11,
            "server_id": 7,
            "name": "mydb",
            "status": "installed",
            "created_at": "2026-03-01 08:00:00"
        });
        let db: Database = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(db.name, "mydb");
        assert_eq!(serde_json::to_value(&db).unwrap(), wire);
    }

    #[test]
    fn test_create_database_name_only() {
        let create = CreateDatabase {
            name: "mydb".to_string(),
            user: None,
            password: None,
        };
        assert_eq!(serde_json::to_value(&create).unwrap(), json!({"name": "mydb"}));
    }

    #[test]
    fn test_database_user_default_grants() {
        let user: DatabaseUser = serde_json::from_value(json!({
            "id": 2,
            "server_id": 7,
            "name": "app",
            "status": "installing"
        }))
        .unwrap();
        assert!(user.databases.is_empty());
    }
}
