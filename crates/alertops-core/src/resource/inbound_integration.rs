use alertops_api::{Client, Error, models as wire};
use async_trait::async_trait;

use super::Endpoint;
use crate::schema::InboundIntegrationConfig;

/// An API, email, chat or heartbeat integration.
#[derive(Debug, Clone)]
pub struct InboundIntegrationResource {
    client: Client,
}

impl InboundIntegrationResource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Endpoint for InboundIntegrationResource {
    type Tree = InboundIntegrationConfig;
    type Wire = wire::InboundIntegration;

    const NAME: &'static str = "alertops_inbound_integration";
    const COLLECTION: &'static str = "/api/v2/integrations/inbound";

    fn remote_id(wire: &wire::InboundIntegration) -> Option<i64> {
        wire.inbound_integration_id
    }

    fn set_remote_id(wire: &mut wire::InboundIntegration, id: i64) {
        wire.inbound_integration_id = Some(id);
    }

    async fn post(
        &self,
        body: &wire::InboundIntegration,
    ) -> Result<wire::InboundIntegration, Error> {
        self.client.create_inbound_integration(body).await
    }

    async fn get(
        &self,
        _tree: &InboundIntegrationConfig,
        id: &str,
    ) -> Result<wire::InboundIntegration, Error> {
        self.client.get_inbound_integration(id).await
    }

    async fn put(
        &self,
        _tree: &InboundIntegrationConfig,
        id: &str,
        body: &wire::InboundIntegration,
    ) -> Result<(), Error> {
        self.client.update_inbound_integration(id, body).await
    }

    async fn remove(&self, _tree: &InboundIntegrationConfig, id: &str) -> Result<(), Error> {
        self.client.delete_inbound_integration(id).await
    }
}
