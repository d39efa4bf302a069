// ── Schedule wire types ──

use serde::{Deserialize, Serialize};

/// An on-call schedule. Schedules live under their owning group:
/// reads and writes address `/api/v2/schedules/{group}/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_id: Option<i64>,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub schedule_name: String,
    #[serde(default)]
    pub schedule_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuous: Option<bool>,
    #[serde(default)]
    pub time_zone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<ScheduleDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<ScheduleDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_weekday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_weekday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_weekdays: Option<ScheduleWeekdays>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate_frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate_daily: Option<RotateDaily>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate_weekly: Option<RotateWeekly>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate_monthly: Option<RotateMonthly>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_schedule: Option<RepeatSchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_all_users_in_group: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<ScheduleUser>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_holiday_notify: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDate {
    pub date: String,
    #[serde(default)]
    pub hour: i64,
    #[serde(default)]
    pub minute: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleTime {
    #[serde(default)]
    pub hour: i64,
    #[serde(default)]
    pub minute: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct ScheduleWeekdays {
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
    #[serde(default)]
    pub rotate_at_time: ScheduleTime,
    pub every_x_days: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotateWeekly {
    pub rotate_x_users: i64,
    #[serde(default)]
    pub rotate_at_time: ScheduleTime,
    pub every_x_weeks: i64,
    pub rotate_at_day_of_week: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotateMonthly {
    pub rotate_x_users: i64,
    #[serde(default)]
    pub rotate_at_time: ScheduleTime,
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

/// Envelope returned by `GET /api/v2/schedules`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleList {
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub schedules: Vec<Schedule>,
}
