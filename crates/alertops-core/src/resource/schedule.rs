// Schedules are created at the collection root but addressed under their
// owning group, so the key is the pair (group, id) and import takes
// `"<group>/<id>"`.

use alertops_api::{Client, Error, models as wire};
use async_trait::async_trait;

use super::{Endpoint, parse_id};
use crate::error::CoreError;
use crate::schema::ScheduleConfig;

#[derive(Debug, Clone)]
pub struct ScheduleResource {
    client: Client,
}

impl ScheduleResource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Endpoint for ScheduleResource {
    type Tree = ScheduleConfig;
    type Wire = wire::Schedule;

    const NAME: &'static str = "alertops_schedule";
    const COLLECTION: &'static str = "/api/v2/schedules";

    fn path(&self, tree: &ScheduleConfig, id: &str) -> String {
        format!("{}/{}/{id}", Self::COLLECTION, tree.group)
    }

    fn remote_id(wire: &wire::Schedule) -> Option<i64> {
        wire.schedule_id
    }

    fn set_remote_id(wire: &mut wire::Schedule, id: i64) {
        wire.schedule_id = Some(id);
    }

    fn import_seed(raw: &str) -> Result<(i64, ScheduleConfig), CoreError> {
        let (group, id) = raw
            .rsplit_once('/')
            .filter(|(group, _)| !group.trim().is_empty())
            .ok_or_else(|| {
                CoreError::validation("id", format!("{raw:?} is not of the form <group>/<id>"))
            })?;
        let seed = ScheduleConfig {
            group: group.trim().to_owned(),
            ..ScheduleConfig::default()
        };
        Ok((parse_id(id)?, seed))
    }

    fn carry_over(previous: &ScheduleConfig, fresh: &mut ScheduleConfig) {
        if fresh.group.is_empty() {
            fresh.group.clone_from(&previous.group);
        }
    }

    async fn post(&self, body: &wire::Schedule) -> Result<wire::Schedule, Error> {
        self.client.create_schedule(body).await
    }

    async fn get(&self, tree: &ScheduleConfig, id: &str) -> Result<wire::Schedule, Error> {
        self.client.get_schedule(&tree.group, id).await
    }

    async fn put(
        &self,
        tree: &ScheduleConfig,
        id: &str,
        body: &wire::Schedule,
    ) -> Result<(), Error> {
        self.client.update_schedule(&tree.group, id, body).await
    }

    async fn remove(&self, tree: &ScheduleConfig, id: &str) -> Result<(), Error> {
        self.client.delete_schedule(&tree.group, id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn import_key_splits_group_and_id() {
        let (id, seed) = ScheduleResource::import_seed("oncall/42").unwrap();
        assert_eq!(id, 42);
        assert_eq!(seed.group, "oncall");

        let (id, seed) = ScheduleResource::import_seed("on call/eu/7").unwrap();
        assert_eq!(id, 7);
        assert_eq!(seed.group, "on call/eu");
    }

    #[test]
    fn import_key_without_group_is_rejected() {
        for raw in ["42", "/42", "oncall/", "oncall/x"] {
            assert!(
                ScheduleResource::import_seed(raw).is_err(),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn group_survives_a_refresh_that_omits_it() {
        let previous = ScheduleConfig {
            group: "oncall".into(),
            ..ScheduleConfig::default()
        };
        let mut fresh = ScheduleConfig::default();
        ScheduleResource::carry_over(&previous, &mut fresh);
        assert_eq!(fresh.group, "oncall");
    }
}
