// ── Resource registry ──
//
// Lookup table from host-facing type name to its JSON-driven CRUD entry
// points, filled once at startup.

use std::collections::BTreeMap;

use crate::error::CoreError;
use crate::resource::{DynResource, Resource};

#[derive(Default)]
pub struct ProviderRegistry {
    resources: BTreeMap<&'static str, Box<dyn DynResource>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource under its `TYPE_NAME`, replacing any earlier one.
    #[must_use]
    pub fn register<R: Resource + 'static>(mut self, resource: R) -> Self {
        self.resources.insert(R::TYPE_NAME, Box::new(resource));
        self
    }

    pub fn resource(&self, type_name: &str) -> Result<&dyn DynResource, CoreError> {
        self.resources
            .get(type_name)
            .map(AsRef::as_ref)
            .ok_or_else(|| CoreError::UnknownResource {
                type_name: type_name.to_owned(),
            })
    }

    /// Registered type names, sorted.
    pub fn resource_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.resources.keys().copied()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.resource_types()).finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use alertops_api::{Client, TransportConfig};
    use secrecy::SecretString;

    use super::*;
    use crate::resource::{GroupResource, UserResource};

    fn client() -> Client {
        let key = SecretString::from("test-key".to_owned());
        Client::from_api_key("http://127.0.0.1:9", &key, &TransportConfig::default()).unwrap()
    }

    #[test]
    fn lists_registered_types_in_order() {
        let registry = ProviderRegistry::new()
            .register(UserResource::new(client()))
            .register(GroupResource::new(client()));
        let types: Vec<_> = registry.resource_types().collect();
        assert_eq!(types, vec!["alertops_group", "alertops_user"]);
        assert_eq!(
            registry.resource("alertops_user").unwrap().type_name(),
            "alertops_user"
        );
    }

    #[test]
    fn unknown_type_is_an_error() {
        let registry = ProviderRegistry::new();
        match registry.resource("alertops_widget") {
            Err(CoreError::UnknownResource { type_name }) => {
                assert_eq!(type_name, "alertops_widget");
            }
            Err(other) => panic!("unexpected error: {other:?}"),
            Ok(_) => panic!("lookup should fail"),
        }
    }
}
