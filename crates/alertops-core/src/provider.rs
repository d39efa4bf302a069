// ── Provider ──
//
// Configured once per process: one authenticated client shared by every
// resource and the user data source.

use alertops_api::Client;
use tracing::info;

use crate::config::ProviderConfig;
use crate::data_source::UserLookup;
use crate::error::CoreError;
use crate::registry::ProviderRegistry;
use crate::resource::{
    DynResource, EscalationPolicyResource, GroupResource, InboundIntegrationResource,
    ScheduleResource, UserResource, WorkflowResource,
};

#[derive(Debug)]
pub struct Provider {
    registry: ProviderRegistry,
    users: UserLookup,
}

impl Provider {
    /// Type names of every managed resource, sorted.
    pub const RESOURCE_TYPES: [&'static str; 6] = [
        "alertops_escalation_policy",
        "alertops_group",
        "alertops_inbound_integration",
        "alertops_schedule",
        "alertops_user",
        "alertops_workflow",
    ];

    /// Build the API client from `config` and register all resource types.
    pub fn configure(config: &ProviderConfig) -> Result<Self, CoreError> {
        let client = Client::from_api_key(
            config.base_url.as_str(),
            &config.api_key,
            &config.transport,
        )
        .map_err(|e| CoreError::Config {
            message: format!("cannot build API client: {e}"),
        })?;
        info!(base_url = %config.base_url, "provider configured");
        Ok(Self::from_client(client))
    }

    /// Wire an already-built client into every resource.
    pub fn from_client(client: Client) -> Self {
        let registry = ProviderRegistry::new()
            .register(UserResource::new(client.clone()))
            .register(GroupResource::new(client.clone()))
            .register(ScheduleResource::new(client.clone()))
            .register(WorkflowResource::new(client.clone()))
            .register(EscalationPolicyResource::new(client.clone()))
            .register(InboundIntegrationResource::new(client.clone()));
        Self {
            registry,
            users: UserLookup::new(client),
        }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Shorthand for `registry().resource(type_name)`.
    pub fn resource(&self, type_name: &str) -> Result<&dyn DynResource, CoreError> {
        self.registry.resource(type_name)
    }

    pub fn user_lookup(&self) -> &UserLookup {
        &self.users
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    #[test]
    fn registers_all_six_resources() {
        let config = ProviderConfig::new(SecretString::from("k".to_owned())).unwrap();
        let provider = Provider::configure(&config).unwrap();
        let types: Vec<_> = provider.registry().resource_types().collect();
        assert_eq!(types, Provider::RESOURCE_TYPES);
    }

    #[test]
    fn rejects_a_key_that_is_not_a_header_value() {
        let config = ProviderConfig::new(SecretString::from("bad\nkey".to_owned())).unwrap();
        let err = Provider::configure(&config).unwrap_err();
        assert!(matches!(err, CoreError::Config { .. }));
    }
}
