use alertops_api::{Client, Error, models as wire};
use async_trait::async_trait;

use super::Endpoint;
use crate::schema::UserConfig;

/// A user, with ordered contact methods.
#[derive(Debug, Clone)]
pub struct UserResource {
    client: Client,
}

impl UserResource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Endpoint for UserResource {
    type Tree = UserConfig;
    type Wire = wire::User;

    const NAME: &'static str = "alertops_user";
    const COLLECTION: &'static str = "/api/v2/users";

    fn remote_id(wire: &wire::User) -> Option<i64> {
        wire.user_id
    }

    fn set_remote_id(wire: &mut wire::User, id: i64) {
        wire.user_id = Some(id);
    }

    async fn post(&self, body: &wire::User) -> Result<wire::User, Error> {
        self.client.create_user(body).await
    }

    async fn get(&self, _tree: &UserConfig, id: &str) -> Result<wire::User, Error> {
        self.client.get_user(id).await
    }

    async fn put(&self, _tree: &UserConfig, id: &str, body: &wire::User) -> Result<(), Error> {
        self.client.update_user(id, body).await
    }

    async fn remove(&self, _tree: &UserConfig, id: &str) -> Result<(), Error> {
        self.client.delete_user(id).await
    }
}
