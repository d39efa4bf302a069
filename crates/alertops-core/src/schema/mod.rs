// ── Configuration trees ──
//
// Strongly-typed per-resource attribute trees, as persisted by the host.
// Presence is explicit: optional scalars are `Option<T>` and are only
// sent when set. Host defaults (`D=x` attributes) are applied when a tree
// is deserialized and the key is absent. Nested blocks are `Option<T>`
// on the Rust side and 0/1-element arrays in the serialized tree.

pub mod escalation_policy;
pub mod group;
pub mod inbound_integration;
pub mod schedule;
pub mod user;
pub mod workflow;

pub use escalation_policy::EscalationPolicyConfig;
pub use group::GroupConfig;
pub use inbound_integration::InboundIntegrationConfig;
pub use schedule::ScheduleConfig;
pub use user::UserConfig;
pub use workflow::WorkflowConfig;

/// Serde adapters for the host's block convention: a nested object is
/// exchanged as a list holding at most one element.
pub mod block {
    /// `Option<T>` <-> `[]` / `[T]`. Pair with `#[serde(default)]`.
    pub mod optional {
        use serde::de::Error as _;
        use serde::{Deserialize, Deserializer, Serialize, Serializer};

        #[allow(clippy::ref_option)]
        pub fn serialize<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
            T: Serialize,
        {
            serializer.collect_seq(value.iter())
        }

        pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
        where
            D: Deserializer<'de>,
            T: Deserialize<'de>,
        {
            let mut items = Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default();
            match items.len() {
                0 => Ok(None),
                1 => Ok(items.pop()),
                n => Err(D::Error::invalid_length(n, &"a block of at most one element")),
            }
        }
    }

    /// `T` <-> `[T]`, for blocks the schema requires.
    pub mod required {
        use serde::de::Error as _;
        use serde::{Deserialize, Deserializer, Serialize, Serializer};

        pub fn serialize<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
            T: Serialize,
        {
            serializer.collect_seq(std::iter::once(value))
        }

        pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
        where
            D: Deserializer<'de>,
            T: Deserialize<'de>,
        {
            let mut items = Vec::<T>::deserialize(deserializer)?;
            match (items.pop(), items.is_empty()) {
                (Some(item), true) => Ok(item),
                (None, _) => Err(D::Error::invalid_length(0, &"exactly one block")),
                (Some(_), false) => Err(D::Error::invalid_length(
                    items.len() + 1,
                    &"exactly one block",
                )),
            }
        }
    }
}

/// Host-applied defaults for `D=x` attributes.
pub(crate) mod defaults {
    pub fn yes() -> Option<bool> {
        Some(true)
    }

    pub fn no() -> Option<bool> {
        Some(false)
    }

    pub fn zero() -> Option<i64> {
        Some(0)
    }

    pub fn locale() -> Option<String> {
        Some("en-US".into())
    }

    pub fn user_type() -> Option<String> {
        Some("Standard".into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use super::block;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Inner {
        value: i64,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Outer {
        #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
        maybe: Option<Inner>,
        #[serde(with = "block::required")]
        always: Inner,
    }

    #[test]
    fn blocks_serialize_as_single_element_lists() {
        let outer = Outer {
            maybe: Some(Inner { value: 1 }),
            always: Inner { value: 2 },
        };
        assert_eq!(
            serde_json::to_value(&outer).unwrap(),
            json!({ "maybe": [{ "value": 1 }], "always": [{ "value": 2 }] })
        );
    }

    #[test]
    fn absent_null_and_empty_optional_blocks_are_none() {
        for tree in [
            json!({ "always": [{ "value": 2 }] }),
            json!({ "maybe": null, "always": [{ "value": 2 }] }),
            json!({ "maybe": [], "always": [{ "value": 2 }] }),
        ] {
            let outer: Outer = serde_json::from_value(tree).unwrap();
            assert_eq!(outer.maybe, None);
        }
    }

    #[test]
    fn more_than_one_block_is_rejected() {
        let tree = json!({ "maybe": [{ "value": 1 }, { "value": 2 }], "always": [{ "value": 2 }] });
        assert!(serde_json::from_value::<Outer>(tree).is_err());

        let tree = json!({ "always": [] });
        assert!(serde_json::from_value::<Outer>(tree).is_err());
    }
}
