// alertops-core: Resource lifecycle, conversion and typed configuration
// trees for managing AlertOps entities declaratively.

pub mod config;
pub mod convert;
pub mod data_source;
pub mod error;
pub mod provider;
pub mod registry;
pub mod resource;
pub mod schema;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{DEFAULT_BASE_URL, ProviderConfig};
pub use convert::Expand;
pub use data_source::{UserLookup, UserQuery};
pub use error::{CoreError, Operation};
pub use provider::Provider;
pub use registry::ProviderRegistry;
pub use resource::{DynResource, ReadOutcome, Resource, ResourceState};

pub use schema::{
    EscalationPolicyConfig, GroupConfig, InboundIntegrationConfig, ScheduleConfig, UserConfig,
    WorkflowConfig,
};
