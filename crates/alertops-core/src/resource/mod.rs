// ── Resource lifecycle ──
//
// Every managed type goes through the same create/read/update/delete/import
// steps: expand the tree, call the API, flatten the canonical copy back.
// Per-type modules only describe their remote calls (`Endpoint`); the
// lifecycle and the JSON-erased form hosts drive (`DynResource`) are shared.

mod escalation_policy;
mod group;
mod inbound_integration;
mod schedule;
mod user;
mod workflow;

pub use escalation_policy::EscalationPolicyResource;
pub use group::GroupResource;
pub use inbound_integration::InboundIntegrationResource;
pub use schedule::ScheduleResource;
pub use user::UserResource;
pub use workflow::WorkflowResource;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error};

use crate::convert::Expand;
use crate::error::{CoreError, Operation};

/// Host-persisted state of one resource instance: the remote key plus the
/// flattened attribute tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceState<C> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub attributes: C,
}

impl<C> ResourceState<C> {
    /// A tree that is not yet managed remotely.
    pub fn planned(attributes: C) -> Self {
        Self {
            id: None,
            attributes,
        }
    }
}

/// Result of a Read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ReadOutcome {
    /// The remote record exists and the tree was refreshed.
    Present,
    /// The remote record no longer exists; the id was cleared.
    Gone,
}

/// CRUD entry points for one resource type.
#[async_trait]
pub trait Resource: Send + Sync {
    type Config: Serialize + DeserializeOwned + Send + Sync;

    /// Host-facing type name, e.g. `alertops_user`.
    const TYPE_NAME: &'static str;

    async fn create(&self, state: &mut ResourceState<Self::Config>) -> Result<(), CoreError>;

    async fn read(
        &self,
        state: &mut ResourceState<Self::Config>,
    ) -> Result<ReadOutcome, CoreError>;

    async fn update(&self, state: &mut ResourceState<Self::Config>) -> Result<(), CoreError>;

    async fn delete(&self, state: &mut ResourceState<Self::Config>) -> Result<(), CoreError>;

    /// Populate a full tree from a bare identifier via Read.
    async fn import(&self, id: &str) -> Result<ResourceState<Self::Config>, CoreError>;
}

/// Remote calls of one resource type. Implementors get `Resource` for free.
#[async_trait]
pub trait Endpoint: Send + Sync {
    type Tree: Expand<Output = Self::Wire>
        + for<'a> From<&'a Self::Wire>
        + Default
        + Serialize
        + DeserializeOwned
        + Send
        + Sync;
    type Wire: Send + Sync;

    const NAME: &'static str;
    const COLLECTION: &'static str;

    /// Path of one record, for request context in errors.
    fn path(&self, _tree: &Self::Tree, id: &str) -> String {
        format!("{}/{id}", Self::COLLECTION)
    }

    fn remote_id(wire: &Self::Wire) -> Option<i64>;

    fn set_remote_id(wire: &mut Self::Wire, id: i64);

    /// Split an import identifier into the record id and a seed tree.
    fn import_seed(raw: &str) -> Result<(i64, Self::Tree), CoreError> {
        Ok((parse_id(raw)?, Self::Tree::default()))
    }

    /// Restore key attributes the API does not echo after a refresh.
    fn carry_over(_previous: &Self::Tree, _fresh: &mut Self::Tree) {}

    async fn post(&self, body: &Self::Wire) -> Result<Self::Wire, alertops_api::Error>;

    async fn get(&self, tree: &Self::Tree, id: &str) -> Result<Self::Wire, alertops_api::Error>;

    async fn put(
        &self,
        tree: &Self::Tree,
        id: &str,
        body: &Self::Wire,
    ) -> Result<(), alertops_api::Error>;

    async fn remove(&self, tree: &Self::Tree, id: &str) -> Result<(), alertops_api::Error>;
}

/// Parse a record identifier. Identifiers are positive integers.
pub fn parse_id(raw: &str) -> Result<i64, CoreError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| CoreError::validation("id", format!("{raw:?} is not a numeric identifier")))
}

fn recorded_id<C>(state: &ResourceState<C>, resource: &str) -> Result<i64, CoreError> {
    let raw = state.id.as_deref().ok_or_else(|| CoreError::MissingIdentifier {
        resource: resource.to_owned(),
    })?;
    parse_id(raw)
}

fn remote(
    operation: Operation,
    resource: &str,
    path: String,
    source: alertops_api::Error,
) -> CoreError {
    error!(resource, %operation, %path, error = %source, "operation failed");
    CoreError::Remote {
        operation,
        resource: resource.to_owned(),
        path,
        source,
    }
}

/// Replace the tree with the flattened canonical copy.
fn apply<E: Endpoint>(state: &mut ResourceState<E::Tree>, wire: &E::Wire) {
    let mut fresh = E::Tree::from(wire);
    E::carry_over(&state.attributes, &mut fresh);
    state.attributes = fresh;
}

/// GET the record and flatten it into `state`.
async fn refresh<E: Endpoint>(
    endpoint: &E,
    state: &mut ResourceState<E::Tree>,
    id: &str,
) -> Result<(), CoreError> {
    let fetched = endpoint
        .get(&state.attributes, id)
        .await
        .map_err(|e| remote(Operation::Read, E::NAME, endpoint.path(&state.attributes, id), e))?;
    apply::<E>(state, &fetched);
    Ok(())
}

#[async_trait]
impl<E: Endpoint> Resource for E {
    type Config = E::Tree;

    const TYPE_NAME: &'static str = E::NAME;

    async fn create(&self, state: &mut ResourceState<E::Tree>) -> Result<(), CoreError> {
        let body = state.attributes.expand()?;
        let created = self
            .post(&body)
            .await
            .map_err(|e| remote(Operation::Create, E::NAME, E::COLLECTION.to_owned(), e))?;

        let id = E::remote_id(&created)
            .filter(|id| *id > 0)
            .ok_or_else(|| {
                error!(resource = E::NAME, "create response carried no identifier");
                CoreError::MissingIdentifier {
                    resource: E::NAME.to_owned(),
                }
            })?
            .to_string();

        // The record exists from here on, even if the resync below fails.
        state.id = Some(id.clone());
        refresh(self, state, &id).await
    }

    async fn read(&self, state: &mut ResourceState<E::Tree>) -> Result<ReadOutcome, CoreError> {
        let id = recorded_id(state, E::NAME)?.to_string();
        match self.get(&state.attributes, &id).await {
            Ok(fetched) => {
                apply::<E>(state, &fetched);
                Ok(ReadOutcome::Present)
            }
            Err(e) if e.is_not_found() => {
                debug!(resource = E::NAME, %id, "remote record gone, dropping from state");
                state.id = None;
                Ok(ReadOutcome::Gone)
            }
            Err(e) => Err(remote(
                Operation::Read,
                E::NAME,
                self.path(&state.attributes, &id),
                e,
            )),
        }
    }

    async fn update(&self, state: &mut ResourceState<E::Tree>) -> Result<(), CoreError> {
        let numeric = recorded_id(state, E::NAME)?;
        let id = numeric.to_string();
        let mut body = state.attributes.expand()?;
        E::set_remote_id(&mut body, numeric);

        self.put(&state.attributes, &id, &body).await.map_err(|e| {
            remote(
                Operation::Update,
                E::NAME,
                self.path(&state.attributes, &id),
                e,
            )
        })?;
        refresh(self, state, &id).await
    }

    async fn delete(&self, state: &mut ResourceState<E::Tree>) -> Result<(), CoreError> {
        let id = recorded_id(state, E::NAME)?.to_string();
        match self.remove(&state.attributes, &id).await {
            Ok(()) => {}
            Err(e) if e.is_not_found() => {
                debug!(resource = E::NAME, %id, "already deleted remotely");
            }
            Err(e) => {
                return Err(remote(
                    Operation::Delete,
                    E::NAME,
                    self.path(&state.attributes, &id),
                    e,
                ));
            }
        }
        state.id = None;
        Ok(())
    }

    async fn import(&self, raw: &str) -> Result<ResourceState<E::Tree>, CoreError> {
        let (id, seed) = E::import_seed(raw)?;
        let mut state = ResourceState {
            id: Some(id.to_string()),
            attributes: seed,
        };
        match Resource::read(self, &mut state).await? {
            ReadOutcome::Present => Ok(state),
            ReadOutcome::Gone => Err(CoreError::NotFound {
                entity_type: E::NAME.to_owned(),
                identifier: raw.to_owned(),
            }),
        }
    }
}

// ── JSON-erased form ─────────────────────────────────────────────────

/// A resource driven with host state as raw JSON.
#[async_trait]
pub trait DynResource: Send + Sync {
    fn type_name(&self) -> &'static str;

    async fn create(&self, state: Value) -> Result<Value, CoreError>;

    async fn read(&self, state: Value) -> Result<(ReadOutcome, Value), CoreError>;

    async fn update(&self, state: Value) -> Result<Value, CoreError>;

    async fn delete(&self, state: Value) -> Result<Value, CoreError>;

    async fn import(&self, id: &str) -> Result<Value, CoreError>;
}

fn decode_state<C: DeserializeOwned>(state: Value) -> Result<ResourceState<C>, CoreError> {
    Ok(serde_json::from_value(state)?)
}

fn encode_state<C: Serialize>(state: &ResourceState<C>) -> Result<Value, CoreError> {
    Ok(serde_json::to_value(state)?)
}

#[async_trait]
impl<R: Resource> DynResource for R {
    fn type_name(&self) -> &'static str {
        R::TYPE_NAME
    }

    async fn create(&self, state: Value) -> Result<Value, CoreError> {
        let mut state = decode_state::<R::Config>(state)?;
        match Resource::create(self, &mut state).await {
            Ok(()) => encode_state(&state),
            // The POST succeeded: hand the id back with the error.
            Err(source) => match state.id.clone() {
                Some(id) => Err(CoreError::Incomplete {
                    resource: R::TYPE_NAME.to_owned(),
                    id,
                    state: Box::new(encode_state(&state)?),
                    source: Box::new(source),
                }),
                None => Err(source),
            },
        }
    }

    async fn read(&self, state: Value) -> Result<(ReadOutcome, Value), CoreError> {
        let mut state = decode_state::<R::Config>(state)?;
        let outcome = Resource::read(self, &mut state).await?;
        Ok((outcome, encode_state(&state)?))
    }

    async fn update(&self, state: Value) -> Result<Value, CoreError> {
        let mut state = decode_state::<R::Config>(state)?;
        Resource::update(self, &mut state).await?;
        encode_state(&state)
    }

    async fn delete(&self, state: Value) -> Result<Value, CoreError> {
        let mut state = decode_state::<R::Config>(state)?;
        Resource::delete(self, &mut state).await?;
        encode_state(&state)
    }

    async fn import(&self, id: &str) -> Result<Value, CoreError> {
        let state = Resource::import(self, id).await?;
        encode_state(&state)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::schema::WorkflowConfig;

    #[test]
    fn ids_must_be_positive_integers() {
        assert_eq!(parse_id(" 42 ").unwrap(), 42);
        for raw in ["", "abc", "0", "-3", "4.5"] {
            match parse_id(raw).unwrap_err() {
                CoreError::ValidationFailed { field, .. } => assert_eq!(field, "id"),
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn state_serializes_id_alongside_attributes() {
        let state = ResourceState {
            id: Some("8".into()),
            attributes: WorkflowConfig {
                workflow_name: "Chat".into(),
                workflow_type: "Message".into(),
                alert_type: "All".into(),
                recurrence_interval: Some(0),
                ..WorkflowConfig::default()
            },
        };
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["id"], json!("8"));
        assert_eq!(value["workflow_name"], json!("Chat"));
        assert!(value.get("attributes").is_none());

        let back: ResourceState<WorkflowConfig> = serde_json::from_value(value).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn missing_id_is_reported_per_resource() {
        let state = ResourceState::planned(WorkflowConfig::default());
        match recorded_id(&state, "alertops_workflow").unwrap_err() {
            CoreError::MissingIdentifier { resource } => assert_eq!(resource, "alertops_workflow"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
