use alertops_api::{Client, Error, models as wire};
use async_trait::async_trait;

use super::Endpoint;
use crate::schema::GroupConfig;

/// A group of users or nested groups.
#[derive(Debug, Clone)]
pub struct GroupResource {
    client: Client,
}

impl GroupResource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Endpoint for GroupResource {
    type Tree = GroupConfig;
    type Wire = wire::Group;

    const NAME: &'static str = "alertops_group";
    const COLLECTION: &'static str = "/api/v2/groups";

    fn remote_id(wire: &wire::Group) -> Option<i64> {
        wire.group_id
    }

    fn set_remote_id(wire: &mut wire::Group, id: i64) {
        wire.group_id = Some(id);
    }

    async fn post(&self, body: &wire::Group) -> Result<wire::Group, Error> {
        self.client.create_group(body).await
    }

    async fn get(&self, _tree: &GroupConfig, id: &str) -> Result<wire::Group, Error> {
        self.client.get_group(id).await
    }

    async fn put(&self, _tree: &GroupConfig, id: &str, body: &wire::Group) -> Result<(), Error> {
        self.client.update_group(id, body).await
    }

    async fn remove(&self, _tree: &GroupConfig, id: &str) -> Result<(), Error> {
        self.client.delete_group(id).await
    }
}
