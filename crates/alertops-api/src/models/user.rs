// ── User wire types ──

use serde::{Deserialize, Serialize};

/// An AlertOps user as sent to and returned by `/api/v2/users`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    /// Server-maintained; never sent.
    #[serde(default, skip_serializing)]
    pub last_login_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_methods: Option<Vec<ContactMethod>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

/// One way of reaching a user (email, phone, SMS, gateway, Slack DM).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMethod {
    pub contact_method_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailContact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<PhoneContact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sms: Option<SmsContact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<GatewayContact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slack_dm: Option<SlackDmContact>,
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_times: Option<Vec<NotificationTime>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailContact {
    pub email_address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneContact {
    pub country_code: String,
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsContact {
    pub country_code: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayContact {
    pub provider: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackDmContact {
    pub member_id: String,
}

/// Weekly window during which a contact method may be used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct NotificationTime {
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

/// Envelope returned by `GET /api/v2/users`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserList {
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub users: Vec<User>,
}
