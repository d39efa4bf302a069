use alertops_api::{Client, Error, models as wire};
use async_trait::async_trait;

use super::Endpoint;
use crate::schema::WorkflowConfig;

#[derive(Debug, Clone)]
pub struct WorkflowResource {
    client: Client,
}

impl WorkflowResource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Endpoint for WorkflowResource {
    type Tree = WorkflowConfig;
    type Wire = wire::Workflow;

    const NAME: &'static str = "alertops_workflow";
    const COLLECTION: &'static str = "/api/v2/workflows";

    fn remote_id(wire: &wire::Workflow) -> Option<i64> {
        wire.workflow_id
    }

    fn set_remote_id(wire: &mut wire::Workflow, id: i64) {
        wire.workflow_id = Some(id);
    }

    async fn post(&self, body: &wire::Workflow) -> Result<wire::Workflow, Error> {
        self.client.create_workflow(body).await
    }

    async fn get(&self, _tree: &WorkflowConfig, id: &str) -> Result<wire::Workflow, Error> {
        self.client.get_workflow(id).await
    }

    async fn put(
        &self,
        _tree: &WorkflowConfig,
        id: &str,
        body: &wire::Workflow,
    ) -> Result<(), Error> {
        self.client.update_workflow(id, body).await
    }

    async fn remove(&self, _tree: &WorkflowConfig, id: &str) -> Result<(), Error> {
        self.client.delete_workflow(id).await
    }
}
