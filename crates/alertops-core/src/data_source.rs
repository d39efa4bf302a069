// ── alertops_user data source ──
//
// Read-only lookup of an existing user, by id or by exact user name.

use alertops_api::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, Operation};
use crate::resource::ResourceState;
use crate::schema::UserConfig;

/// Lookup criteria. `user_id` wins when both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UserLookup {
    client: Client,
}

impl UserLookup {
    pub const TYPE_NAME: &'static str = "alertops_user";

    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn read(&self, query: &UserQuery) -> Result<ResourceState<UserConfig>, CoreError> {
        let user = match (query.user_id, query.user_name.as_deref()) {
            (Some(id), _) => {
                let id = id.to_string();
                match self.client.get_user(&id).await {
                    Ok(user) => user,
                    Err(e) if e.is_not_found() => return Err(not_found(id)),
                    Err(e) => return Err(remote(format!("/api/v2/users/{id}"), e)),
                }
            }
            (None, Some(name)) => self
                .client
                .list_users()
                .await
                .map_err(|e| remote("/api/v2/users".into(), e))?
                .users
                .into_iter()
                .find(|u| u.user_name == name)
                .ok_or_else(|| not_found(name.to_owned()))?,
            (None, None) => return Err(not_found(String::new())),
        };

        Ok(ResourceState {
            id: user.user_id.map(|id| id.to_string()),
            attributes: UserConfig::from(&user),
        })
    }
}

fn not_found(identifier: String) -> CoreError {
    debug!(%identifier, "no matching user");
    CoreError::NotFound {
        entity_type: "user".into(),
        identifier,
    }
}

fn remote(path: String, source: alertops_api::Error) -> CoreError {
    CoreError::Remote {
        operation: Operation::Read,
        resource: UserLookup::TYPE_NAME.into(),
        path,
        source,
    }
}
