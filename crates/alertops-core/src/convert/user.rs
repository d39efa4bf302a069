// ── alertops_user conversions ──

use alertops_api::models as wire;
use strum::VariantNames;

use super::{
    Expand, Sequenced, expand_block, expand_list, expand_sequenced, flatten_block, flatten_list,
    flatten_sequenced, non_empty,
};
use crate::error::CoreError;
use crate::schema::user::{
    ContactMethod, Email, Gateway, NotificationTime, Phone, SlackDm, Sms, UserConfig,
};

/// Contact method names the API accepts for a user.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString, strum::VariantNames,
)]
pub enum ContactMethodName {
    #[strum(serialize = "Email-Official")]
    EmailOfficial,
    #[strum(serialize = "Phone-Official")]
    PhoneOfficial,
    #[strum(serialize = "SMS-Official")]
    SmsOfficial,
    #[strum(serialize = "Email-Official-SMS Gateway")]
    EmailOfficialSmsGateway,
    #[strum(serialize = "Email-Personal")]
    EmailPersonal,
    #[strum(serialize = "Email-Personal-SMS Gateway")]
    EmailPersonalSmsGateway,
    #[strum(serialize = "Phone-Official-Mobile")]
    PhoneOfficialMobile,
    #[strum(serialize = "Phone-Personal")]
    PhonePersonal,
    #[strum(serialize = "Phone-Personal-Mobile")]
    PhonePersonalMobile,
    #[strum(serialize = "SMS-Personal")]
    SmsPersonal,
}

impl ContactMethodName {
    fn validate(raw: &str) -> Result<Self, CoreError> {
        raw.parse().map_err(|_| {
            CoreError::validation(
                "contact_method_name",
                format!("{raw:?} is not one of: {}", Self::VARIANTS.join(", ")),
            )
        })
    }
}

// ── Expand ───────────────────────────────────────────────────────────

impl Expand for UserConfig {
    type Output = wire::User;

    fn expand(&self) -> Result<wire::User, CoreError> {
        Ok(wire::User {
            user_id: None,
            user_name: self.user_name.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            locale: self.locale.clone(),
            time_zone: self.time_zone.clone(),
            user_type: self.user_type.clone(),
            external_id: self.external_id.clone(),
            last_login_date: None,
            contact_methods: expand_sequenced(
                &self.contact_methods,
                "contact_methods",
                expand_contact_method,
            )?,
            roles: non_empty(&self.roles),
        })
    }
}

fn expand_contact_method(
    method: &ContactMethod,
    sequence: i64,
) -> Result<wire::ContactMethod, CoreError> {
    let name = ContactMethodName::validate(&method.contact_method_name)?;
    Ok(wire::ContactMethod {
        contact_method_name: name.to_string(),
        email: expand_block(&method.email, "email")?,
        phone: expand_block(&method.phone, "phone")?,
        sms: expand_block(&method.sms, "sms")?,
        gateway: expand_block(&method.gateway, "gateway")?,
        slack_dm: expand_block(&method.slack_dm, "slack_dm")?,
        wait_time_in_mins: method.wait_time_in_mins,
        repeat: method.repeat,
        repeat_times: method.repeat_times,
        repeat_minutes: method.repeat_minutes,
        notification_time24x7: method.notification_time24x7,
        notification_times: expand_list(&method.notification_times, "notification_times")?,
        enabled: method.enabled,
        sequence: Some(sequence),
    })
}

impl Sequenced for ContactMethod {
    fn sequence(&self) -> Option<i64> {
        self.sequence
    }

    fn set_sequence(&mut self, sequence: i64) {
        self.sequence = Some(sequence);
    }
}

impl Expand for Email {
    type Output = wire::EmailContact;

    fn expand(&self) -> Result<wire::EmailContact, CoreError> {
        Ok(wire::EmailContact {
            email_address: self.email_address.clone(),
        })
    }
}

impl Expand for Phone {
    type Output = wire::PhoneContact;

    fn expand(&self) -> Result<wire::PhoneContact, CoreError> {
        Ok(wire::PhoneContact {
            country_code: self.country_code.clone(),
            phone_number: self.phone_number.clone(),
            extension: self.extension.clone(),
        })
    }
}

impl Expand for Sms {
    type Output = wire::SmsContact;

    fn expand(&self) -> Result<wire::SmsContact, CoreError> {
        Ok(wire::SmsContact {
            country_code: self.country_code.clone(),
            phone_number: self.phone_number.clone(),
        })
    }
}

impl Expand for Gateway {
    type Output = wire::GatewayContact;

    fn expand(&self) -> Result<wire::GatewayContact, CoreError> {
        Ok(wire::GatewayContact {
            provider: self.provider.clone(),
            address: self.address.clone(),
        })
    }
}

impl Expand for SlackDm {
    type Output = wire::SlackDmContact;

    fn expand(&self) -> Result<wire::SlackDmContact, CoreError> {
        Ok(wire::SlackDmContact {
            member_id: self.member_id.clone(),
        })
    }
}

impl Expand for NotificationTime {
    type Output = wire::NotificationTime;

    fn expand(&self) -> Result<wire::NotificationTime, CoreError> {
        Ok(wire::NotificationTime {
            notification_time_id: self.notification_time_id,
            name: self.name.clone(),
            sunday: self.sunday,
            monday: self.monday,
            tuesday: self.tuesday,
            wednesday: self.wednesday,
            thursday: self.thursday,
            friday: self.friday,
            saturday: self.saturday,
            start_hour: self.start_hour,
            start_minute: self.start_minute,
            end_hour: self.end_hour,
            end_minute: self.end_minute,
        })
    }
}

// ── Flatten ──────────────────────────────────────────────────────────

impl From<&wire::User> for UserConfig {
    fn from(u: &wire::User) -> Self {
        Self {
            user_id: u.user_id,
            user_name: u.user_name.clone(),
            first_name: u.first_name.clone(),
            last_name: u.last_name.clone(),
            locale: u.locale.clone(),
            time_zone: u.time_zone.clone(),
            user_type: u.user_type.clone(),
            external_id: u.external_id.clone(),
            last_login_date: u.last_login_date.clone(),
            roles: u.roles.clone().unwrap_or_default(),
            contact_methods: flatten_sequenced(&u.contact_methods),
        }
    }
}

impl From<&wire::ContactMethod> for ContactMethod {
    fn from(m: &wire::ContactMethod) -> Self {
        Self {
            contact_method_name: m.contact_method_name.clone(),
            email: flatten_block(&m.email),
            phone: flatten_block(&m.phone),
            sms: flatten_block(&m.sms),
            gateway: flatten_block(&m.gateway),
            slack_dm: flatten_block(&m.slack_dm),
            notification_times: flatten_list(&m.notification_times),
            wait_time_in_mins: m.wait_time_in_mins,
            repeat: m.repeat,
            repeat_times: m.repeat_times,
            repeat_minutes: m.repeat_minutes,
            notification_time24x7: m.notification_time24x7,
            enabled: m.enabled,
            sequence: m.sequence,
        }
    }
}

impl From<&wire::EmailContact> for Email {
    fn from(e: &wire::EmailContact) -> Self {
        Self {
            email_address: e.email_address.clone(),
        }
    }
}

impl From<&wire::PhoneContact> for Phone {
    fn from(p: &wire::PhoneContact) -> Self {
        Self {
            country_code: p.country_code.clone(),
            phone_number: p.phone_number.clone(),
            extension: p.extension.clone(),
        }
    }
}

impl From<&wire::SmsContact> for Sms {
    fn from(s: &wire::SmsContact) -> Self {
        Self {
            country_code: s.country_code.clone(),
            phone_number: s.phone_number.clone(),
        }
    }
}

impl From<&wire::GatewayContact> for Gateway {
    fn from(g: &wire::GatewayContact) -> Self {
        Self {
            provider: g.provider.clone(),
            address: g.address.clone(),
        }
    }
}

impl From<&wire::SlackDmContact> for SlackDm {
    fn from(s: &wire::SlackDmContact) -> Self {
        Self {
            member_id: s.member_id.clone(),
        }
    }
}

impl From<&wire::NotificationTime> for NotificationTime {
    fn from(t: &wire::NotificationTime) -> Self {
        Self {
            notification_time_id: t.notification_time_id,
            name: t.name.clone(),
            sunday: t.sunday,
            monday: t.monday,
            tuesday: t.tuesday,
            wednesday: t.wednesday,
            thursday: t.thursday,
            friday: t.friday,
            saturday: t.saturday,
            start_hour: t.start_hour,
            start_minute: t.start_minute,
            end_hour: t.end_hour,
            end_minute: t.end_minute,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn alice_tree() -> serde_json::Value {
        json!({
            "user_name": "alice",
            "first_name": "Alice",
            "last_name": "Lee",
            "contact_methods": [{
                "contact_method_name": "Email-Official",
                "email": [{ "email_address": "alice@example.com" }],
                "enabled": true,
                "sequence": 1
            }]
        })
    }

    #[test]
    fn alice_expands_to_minimal_body_with_host_defaults() {
        let config: UserConfig = serde_json::from_value(alice_tree()).unwrap();
        let body = serde_json::to_value(config.expand().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
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
        );
    }

    #[test]
    fn unset_enabled_differs_from_explicit_false() {
        let mut config: UserConfig = serde_json::from_value(alice_tree()).unwrap();
        config.contact_methods[0].enabled = None;
        let unset = serde_json::to_value(config.expand().unwrap()).unwrap();
        assert!(unset["contact_methods"][0].get("enabled").is_none());

        config.contact_methods[0].enabled = Some(false);
        let explicit = serde_json::to_value(config.expand().unwrap()).unwrap();
        assert_eq!(explicit["contact_methods"][0]["enabled"], json!(false));
    }

    #[test]
    fn unknown_contact_method_name_is_rejected() {
        let mut config: UserConfig = serde_json::from_value(alice_tree()).unwrap();
        config.contact_methods[0].contact_method_name = "Pager".into();
        let err = config.expand().unwrap_err();
        match err {
            CoreError::ValidationFailed { field, message } => {
                assert_eq!(field, "contact_methods[0].contact_method_name");
                assert!(message.contains("SMS-Personal"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn every_listed_contact_method_name_is_accepted() {
        for name in ContactMethodName::VARIANTS {
            assert_eq!(ContactMethodName::validate(name).unwrap().to_string(), *name);
        }
    }

    #[test]
    fn response_flattens_with_id_and_nested_email() {
        let response: wire::User = serde_json::from_value(json!({
            "user_id": 501,
            "user_name": "alice",
            "first_name": "Alice",
            "last_name": "Lee",
            "locale": "en-US",
            "type": "Standard",
            "last_login_date": "2024-05-01T10:00:00Z",
            "contact_methods": [{
                "contact_method_name": "Email-Official",
                "email": { "email_address": "alice@example.com" },
                "enabled": true,
                "sequence": 1
            }]
        }))
        .unwrap();

        let tree = UserConfig::from(&response);
        assert_eq!(tree.user_id, Some(501));
        assert_eq!(
            tree.contact_methods[0].email.as_ref().unwrap().email_address,
            "alice@example.com"
        );
        assert!(tree.contact_methods[0].phone.is_none());

        let serialized = serde_json::to_value(&tree).unwrap();
        assert_eq!(
            serialized["contact_methods"][0]["email"],
            json!([{ "email_address": "alice@example.com" }])
        );
    }

    #[test]
    fn expand_of_flatten_is_identity_up_to_computed_fields() {
        let entity = wire::User {
            user_id: Some(7),
            user_name: "bob".into(),
            first_name: "Bob".into(),
            last_name: "Ng".into(),
            locale: Some("fr-FR".into()),
            time_zone: Some("Europe/Paris".into()),
            user_type: Some("Admin".into()),
            external_id: None,
            last_login_date: Some("2024-01-01".into()),
            roles: Some(vec!["Basic".into()]),
            contact_methods: Some(vec![
                wire::ContactMethod {
                    contact_method_name: "Phone-Official".into(),
                    phone: Some(wire::PhoneContact {
                        country_code: "+33".into(),
                        phone_number: "600000000".into(),
                        extension: None,
                    }),
                    repeat: Some(false),
                    repeat_times: Some(0),
                    notification_times: Some(vec![wire::NotificationTime {
                        name: "Weekdays".into(),
                        monday: true,
                        end_hour: 17,
                        ..wire::NotificationTime::default()
                    }]),
                    enabled: Some(true),
                    sequence: Some(1),
                    ..wire::ContactMethod::default()
                },
                wire::ContactMethod {
                    contact_method_name: "SMS-Personal".into(),
                    sms: Some(wire::SmsContact {
                        country_code: "+33".into(),
                        phone_number: "611111111".into(),
                    }),
                    sequence: Some(2),
                    ..wire::ContactMethod::default()
                },
            ]),
        };

        let round_trip = UserConfig::from(&entity).expand().unwrap();
        assert_eq!(
            round_trip,
            wire::User {
                user_id: None,
                last_login_date: None,
                ..entity
            }
        );
    }
}
