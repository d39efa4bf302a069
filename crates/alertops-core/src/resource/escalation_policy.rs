use alertops_api::{Client, Error, models as wire};
use async_trait::async_trait;

use super::Endpoint;
use crate::schema::EscalationPolicyConfig;

#[derive(Debug, Clone)]
pub struct EscalationPolicyResource {
    client: Client,
}

impl EscalationPolicyResource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Endpoint for EscalationPolicyResource {
    type Tree = EscalationPolicyConfig;
    type Wire = wire::EscalationPolicy;

    const NAME: &'static str = "alertops_escalation_policy";
    const COLLECTION: &'static str = "/api/v2/escalation_policies";

    fn remote_id(wire: &wire::EscalationPolicy) -> Option<i64> {
        wire.escalation_policy_id
    }

    fn set_remote_id(wire: &mut wire::EscalationPolicy, id: i64) {
        wire.escalation_policy_id = Some(id);
    }

    async fn post(&self, body: &wire::EscalationPolicy) -> Result<wire::EscalationPolicy, Error> {
        self.client.create_escalation_policy(body).await
    }

    async fn get(
        &self,
        _tree: &EscalationPolicyConfig,
        id: &str,
    ) -> Result<wire::EscalationPolicy, Error> {
        self.client.get_escalation_policy(id).await
    }

    async fn put(
        &self,
        _tree: &EscalationPolicyConfig,
        id: &str,
        body: &wire::EscalationPolicy,
    ) -> Result<(), Error> {
        self.client.update_escalation_policy(id, body).await
    }

    async fn remove(&self, _tree: &EscalationPolicyConfig, id: &str) -> Result<(), Error> {
        self.client.delete_escalation_policy(id).await
    }
}
