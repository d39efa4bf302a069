// ── alertops_user ──

use serde::{Deserialize, Serialize};

use super::{block, defaults};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    /// Computed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default = "defaults::locale", skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(
        rename = "type",
        default = "defaults::user_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    /// Computed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login_date: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact_methods: Vec<ContactMethod>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMethod {
    pub contact_method_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub email: Option<Email>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub phone: Option<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub sms: Option<Sms>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub gateway: Option<Gateway>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub slack_dm: Option<SlackDm>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notification_times: Vec<NotificationTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_time_in_mins: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_times: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_minutes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_time24x7: Option<bool>,
    #[serde(default = "defaults::yes", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// 1-based list position; derived when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub email_address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    pub country_code: String,
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sms {
    pub country_code: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gateway {
    pub provider: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackDm {
    pub member_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct NotificationTime {
    /// Computed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_time_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub sunday: bool,
    #[serde(default)]
    pub monday: bool,
    #[serde(default)]
    pub tuesday: bool,
    #[serde(default)]
    pub wednesday: bool,
    #[serde(default)]
    pub thursday: bool,
    #[serde(default)]
    pub friday: bool,
    #[serde(default)]
    pub saturday: bool,
    #[serde(default)]
    pub start_hour: i64,
    #[serde(default)]
    pub start_minute: i64,
    #[serde(default)]
    pub end_hour: i64,
    #[serde(default)]
    pub end_minute: i64,
}
