#![allow(clippy::unwrap_used)]
// End-to-end lifecycle tests against a mock AlertOps API.

use std::time::Duration;

use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use alertops_api::{Client, RetryPolicy, TransportConfig};
use alertops_core::resource::{GroupResource, ScheduleResource, UserResource};
use alertops_core::{
    CoreError, Provider, ReadOutcome, Resource, ResourceState, ScheduleConfig, UserConfig,
    UserQuery,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let transport = TransportConfig {
        timeout: Duration::from_secs(5),
        retry: RetryPolicy::none(),
    };
    let client = Client::from_api_key(
        &server.uri(),
        &SecretString::from("test-key".to_owned()),
        &transport,
    )
    .unwrap();
    (server, client)
}

fn alice_tree() -> Value {
    json!({
        "user_name": "alice",
        "first_name": "Alice",
        "last_name": "Lee",
        "contact_methods": [{
            "contact_method_name": "Email-Official",
            "email": [{ "email_address": "alice@example.com" }],
            "sequence": 1
        }]
    })
}

fn alice_remote() -> Value {
    json!({
        "user_id": 7,
        "user_name": "alice",
        "first_name": "Alice",
        "last_name": "Lee",
        "locale": "en-US",
        "type": "Standard",
        "contact_methods": [{
            "contact_method_name": "Email-Official",
            "email": { "email_address": "alice@example.com" },
            "enabled": true,
            "sequence": 1
        }]
    })
}

// ── Create ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_posts_minimal_body_then_resyncs() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/users"))
        .and(body_json(json!({
            "user_name": "alice",
            "first_name": "Alice",
            "last_name": "Lee",
            "locale": "en-US",
            "type": "Standard",
            "contact_methods": [{
                "contact_method_name": "Email-Official",
                "email": { "email_address": "alice@example.com" },
                "enabled": true,
                "sequence": 1
            }]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "user_id": 7 })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/users/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(alice_remote()))
        .expect(1)
        .mount(&server)
        .await;

    let users = UserResource::new(client);
    let tree: UserConfig = serde_json::from_value(alice_tree()).unwrap();
    let mut state = ResourceState::planned(tree);
    Resource::create(&users, &mut state).await.unwrap();

    assert_eq!(state.id.as_deref(), Some("7"));
    assert_eq!(state.attributes.user_id, Some(7));
    assert_eq!(state.attributes.contact_methods[0].enabled, Some(true));
}

#[tokio::test]
async fn test_create_without_identifier_in_response_fails() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "group_name": "ops" })))
        .mount(&server)
        .await;

    let groups = GroupResource::new(client);
    let mut state = ResourceState::planned(
        serde_json::from_value(json!({ "group_name": "ops" })).unwrap(),
    );
    let err = Resource::create(&groups, &mut state).await.unwrap_err();

    assert!(matches!(
        err,
        CoreError::MissingIdentifier { ref resource } if resource == "alertops_group"
    ));
    assert_eq!(state.id, None);
}

#[tokio::test]
async fn test_failed_resync_keeps_the_new_identifier() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/groups"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "group_id": 9 })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/groups/9"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let groups = GroupResource::new(client);
    let mut state = ResourceState::planned(
        serde_json::from_value(json!({ "group_name": "ops" })).unwrap(),
    );
    let err = Resource::create(&groups, &mut state).await.unwrap_err();

    assert_eq!(err.api_error().and_then(alertops_api::Error::status), Some(500));
    assert_eq!(state.id.as_deref(), Some("9"));
}

#[tokio::test]
async fn test_registry_create_returns_identifier_with_resync_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/groups"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "group_id": 12 })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/groups/12"))
        .respond_with(ResponseTemplate::new(400).set_body_string("not ready"))
        .mount(&server)
        .await;

    let provider = Provider::from_client(client);
    let err = provider
        .resource("alertops_group")
        .unwrap()
        .create(json!({ "group_name": "ops" }))
        .await
        .unwrap_err();

    match err {
        CoreError::Incomplete {
            resource,
            id,
            state,
            source,
        } => {
            assert_eq!(resource, "alertops_group");
            assert_eq!(id, "12");
            assert_eq!(state["id"], json!("12"));
            assert_eq!(state["group_name"], json!("ops"));
            assert_eq!(source.api_error().and_then(alertops_api::Error::status), Some(400));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_registry_create_failure_before_post_carries_no_state() {
    let (_server, client) = setup().await;
    let provider = Provider::from_client(client);

    let err = provider
        .resource("alertops_user")
        .unwrap()
        .create(json!({
            "user_name": "alice",
            "first_name": "Alice",
            "last_name": "Lee",
            "contact_methods": [{ "contact_method_name": "Carrier-Pigeon" }]
        }))
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::ValidationFailed { .. }));
}

// ── Read / Update / Delete ──────────────────────────────────────────

#[tokio::test]
async fn test_update_twice_sends_identical_bodies() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/v2/users/7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/users/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(alice_remote()))
        .expect(2)
        .mount(&server)
        .await;

    let users = UserResource::new(client);
    let mut state = ResourceState {
        id: Some("7".into()),
        attributes: serde_json::from_value::<UserConfig>(alice_tree()).unwrap(),
    };
    Resource::update(&users, &mut state).await.unwrap();
    let after_first = state.clone();
    Resource::update(&users, &mut state).await.unwrap();
    assert_eq!(state, after_first);

    let bodies: Vec<Value> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|req| req.method.as_str() == "PUT")
        .map(|req| req.body_json().unwrap())
        .collect();

    assert_eq!(bodies.len(), 2);
    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[0]["user_id"], json!(7));
    assert_eq!(bodies[0]["locale"], json!("en-US"));
    assert_eq!(bodies[0]["type"], json!("Standard"));
    assert_eq!(bodies[0]["contact_methods"][0]["enabled"], json!(true));
}

#[tokio::test]
async fn test_read_of_missing_record_clears_identifier() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/groups/9"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let groups = GroupResource::new(client);
    let mut state = ResourceState {
        id: Some("9".into()),
        attributes: serde_json::from_value(json!({ "group_name": "ops" })).unwrap(),
    };
    let outcome = Resource::read(&groups, &mut state).await.unwrap();

    assert_eq!(outcome, ReadOutcome::Gone);
    assert_eq!(state.id, None);
}

#[tokio::test]
async fn test_schedule_update_addresses_group_and_id() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/v2/schedules/oncall/42"))
        .and(body_partial_json(json!({
            "schedule_id": 42,
            "group": "oncall",
            "schedule_name": "Primary"
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/schedules/oncall/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "schedule_id": 42,
            "schedule_name": "Primary",
            "schedule_type": "Fixed",
            "time_zone": "UTC",
            "enabled": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let schedules = ScheduleResource::new(client);
    let mut state = ResourceState {
        id: Some("42".into()),
        attributes: serde_json::from_value::<ScheduleConfig>(json!({
            "group": "oncall",
            "schedule_name": "Primary",
            "schedule_type": "Fixed",
            "time_zone": "UTC"
        }))
        .unwrap(),
    };
    Resource::update(&schedules, &mut state).await.unwrap();

    assert_eq!(state.attributes.schedule_id, Some(42));
    assert_eq!(state.attributes.group, "oncall");
}

#[tokio::test]
async fn test_delete_tolerates_already_deleted_record() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v2/users/7"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let users = UserResource::new(client);
    let mut state = ResourceState {
        id: Some("7".into()),
        attributes: serde_json::from_value::<UserConfig>(alice_tree()).unwrap(),
    };
    Resource::delete(&users, &mut state).await.unwrap();

    assert_eq!(state.id, None);
}

// ── Import ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_import_of_unknown_schedule_is_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/schedules/oncall/5"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let schedules = ScheduleResource::new(client);
    let err = Resource::import(&schedules, "oncall/5").await.unwrap_err();

    match err {
        CoreError::NotFound {
            entity_type,
            identifier,
        } => {
            assert_eq!(entity_type, "alertops_schedule");
            assert_eq!(identifier, "oncall/5");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// ── Registry (JSON state) ───────────────────────────────────────────

#[tokio::test]
async fn test_registry_drives_resources_with_json_state() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/users/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(alice_remote()))
        .mount(&server)
        .await;

    let provider = Provider::from_client(client);
    let state = provider
        .resource("alertops_user")
        .unwrap()
        .import("7")
        .await
        .unwrap();

    assert_eq!(state["id"], json!("7"));
    assert_eq!(state["user_name"], json!("alice"));
    assert_eq!(
        state["contact_methods"][0]["email"],
        json!([{ "email_address": "alice@example.com" }])
    );

    let err = provider.resource("alertops_widget").err().unwrap();
    assert!(matches!(err, CoreError::UnknownResource { .. }));
}

// ── Data source ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_user_lookup_by_name_picks_exact_match() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "limit": 50,
            "offset": 0,
            "users": [
                { "user_id": 6, "user_name": "alice.b", "first_name": "Al", "last_name": "B" },
                alice_remote()
            ]
        })))
        .mount(&server)
        .await;

    let provider = Provider::from_client(client);
    let query = UserQuery {
        user_name: Some("alice".into()),
        ..UserQuery::default()
    };
    let found = provider.user_lookup().read(&query).await.unwrap();

    assert_eq!(found.id.as_deref(), Some("7"));
    assert_eq!(found.attributes.first_name, "Alice");
}

#[tokio::test]
async fn test_user_lookup_by_unknown_id_is_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/users/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let provider = Provider::from_client(client);
    let query = UserQuery {
        user_id: Some(99),
        ..UserQuery::default()
    };
    let err = provider.user_lookup().read(&query).await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_user_lookup_without_criteria_is_not_found() {
    let (_server, client) = setup().await;
    let provider = Provider::from_client(client);
    let err = provider
        .user_lookup()
        .read(&UserQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::NotFound { .. }));
}
