// ── alertops_schedule ──

use serde::{Deserialize, Serialize};

use super::{block, defaults};

/// An on-call schedule. Keyed by `(group, schedule_id)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Computed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_id: Option<i64>,
    pub group: String,
    pub schedule_name: String,
    pub schedule_type: String,
    #[serde(default = "defaults::no", skip_serializing_if = "Option::is_none")]
    pub continuous: Option<bool>,
    pub time_zone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub start_date: Option<ScheduleDate>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub end_date: Option<ScheduleDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_weekday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_weekday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub schedule_weekdays: Option<Weekdays>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate_frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub rotate_daily: Option<RotateDaily>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub rotate_weekly: Option<RotateWeekly>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub rotate_monthly: Option<RotateMonthly>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "block::optional")]
    pub repeat_schedule: Option<RepeatSchedule>,
    #[serde(default = "defaults::no", skip_serializing_if = "Option::is_none")]
    pub include_all_users_in_group: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<ScheduleUser>,
    #[serde(default = "defaults::yes", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default = "defaults::no", skip_serializing_if = "Option::is_none")]
    pub is_holiday_notify: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDate {
    pub date: String,
    pub hour: i64,
    pub minute: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: i64,
    pub minute: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Weekdays {
    #[serde(default)]
    pub sun: bool,
    #[serde(default)]
    pub mon: bool,
    #[serde(default)]
    pub tue: bool,
    #[serde(default)]
    pub wed: bool,
    #[serde(default)]
    pub thu: bool,
    #[serde(default)]
    pub fri: bool,
    #[serde(default)]
    pub sat: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotateDaily {
    pub rotate_x_users: i64,
    #[serde(with = "block::required")]
    pub rotate_at_time: TimeOfDay,
    pub every_x_days: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotateWeekly {
    pub rotate_x_users: i64,
    #[serde(with = "block::required")]
    pub rotate_at_time: TimeOfDay,
    pub every_x_weeks: i64,
    pub rotate_at_day_of_week: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotateMonthly {
    pub rotate_x_users: i64,
    #[serde(with = "block::required")]
    pub rotate_at_time: TimeOfDay,
    pub every_x_months: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatSchedule {
    pub every_x_weeks: i64,
    pub repeat_until_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleUser {
    pub user: String,
    pub role: String,
}
