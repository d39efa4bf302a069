// ── alertops_schedule conversions ──

use alertops_api::models as wire;

use super::{Expand, expand_block, expand_list, flatten_block, flatten_list};
use crate::error::CoreError;
use crate::schema::schedule::{
    RepeatSchedule, RotateDaily, RotateMonthly, RotateWeekly, ScheduleConfig, ScheduleDate,
    ScheduleUser, TimeOfDay, Weekdays,
};

impl Expand for ScheduleConfig {
    type Output = wire::Schedule;

    fn expand(&self) -> Result<wire::Schedule, CoreError> {
        Ok(wire::Schedule {
            schedule_id: None,
            group: self.group.clone(),
            schedule_name: self.schedule_name.clone(),
            schedule_type: self.schedule_type.clone(),
            continuous: self.continuous,
            time_zone: self.time_zone.clone(),
            color: self.color.clone(),
            start_date: expand_block(&self.start_date, "start_date")?,
            end_date: expand_block(&self.end_date, "end_date")?,
            start_weekday: self.start_weekday.clone(),
            end_weekday: self.end_weekday.clone(),
            schedule_weekdays: expand_block(&self.schedule_weekdays, "schedule_weekdays")?,
            rotate_frequency: self.rotate_frequency.clone(),
            rotate_daily: expand_block(&self.rotate_daily, "rotate_daily")?,
            rotate_weekly: expand_block(&self.rotate_weekly, "rotate_weekly")?,
            rotate_monthly: expand_block(&self.rotate_monthly, "rotate_monthly")?,
            repeat_schedule: expand_block(&self.repeat_schedule, "repeat_schedule")?,
            include_all_users_in_group: self.include_all_users_in_group,
            users: expand_list(&self.users, "users")?,
            enabled: self.enabled,
            is_holiday_notify: self.is_holiday_notify,
        })
    }
}

impl Expand for ScheduleDate {
    type Output = wire::ScheduleDate;

    fn expand(&self) -> Result<wire::ScheduleDate, CoreError> {
        check_clock(self.hour, self.minute)?;
        Ok(wire::ScheduleDate {
            date: self.date.clone(),
            hour: self.hour,
            minute: self.minute,
        })
    }
}

impl Expand for Weekdays {
    type Output = wire::ScheduleWeekdays;

    fn expand(&self) -> Result<wire::ScheduleWeekdays, CoreError> {
        Ok(wire::ScheduleWeekdays {
            sun: self.sun,
            mon: self.mon,
            tue: self.tue,
            wed: self.wed,
            thu: self.thu,
            fri: self.fri,
            sat: self.sat,
        })
    }
}

/// Reject an hour outside 0..=23 or a minute outside 0..=59.
fn check_clock(hour: i64, minute: i64) -> Result<(), CoreError> {
    for (field, value, max) in [("hour", hour, 23), ("minute", minute, 59)] {
        if !(0..=max).contains(&value) {
            return Err(CoreError::validation(
                field,
                format!("{value} is outside 0..={max}"),
            ));
        }
    }
    Ok(())
}

impl Expand for TimeOfDay {
    type Output = wire::ScheduleTime;

    fn expand(&self) -> Result<wire::ScheduleTime, CoreError> {
        check_clock(self.hour, self.minute)?;
        Ok(wire::ScheduleTime {
            hour: self.hour,
            minute: self.minute,
        })
    }
}

fn expand_rotate_at(time: &TimeOfDay) -> Result<wire::ScheduleTime, CoreError> {
    time.expand().map_err(|e| e.within("rotate_at_time"))
}

impl Expand for RotateDaily {
    type Output = wire::RotateDaily;

    fn expand(&self) -> Result<wire::RotateDaily, CoreError> {
        Ok(wire::RotateDaily {
            rotate_x_users: self.rotate_x_users,
            rotate_at_time: expand_rotate_at(&self.rotate_at_time)?,
            every_x_days: self.every_x_days,
        })
    }
}

impl Expand for RotateWeekly {
    type Output = wire::RotateWeekly;

    fn expand(&self) -> Result<wire::RotateWeekly, CoreError> {
        Ok(wire::RotateWeekly {
            rotate_x_users: self.rotate_x_users,
            rotate_at_time: expand_rotate_at(&self.rotate_at_time)?,
            every_x_weeks: self.every_x_weeks,
            rotate_at_day_of_week: self.rotate_at_day_of_week.clone(),
        })
    }
}

impl Expand for RotateMonthly {
    type Output = wire::RotateMonthly;

    fn expand(&self) -> Result<wire::RotateMonthly, CoreError> {
        Ok(wire::RotateMonthly {
            rotate_x_users: self.rotate_x_users,
            rotate_at_time: expand_rotate_at(&self.rotate_at_time)?,
            every_x_months: self.every_x_months,
        })
    }
}

impl Expand for RepeatSchedule {
    type Output = wire::RepeatSchedule;

    fn expand(&self) -> Result<wire::RepeatSchedule, CoreError> {
        Ok(wire::RepeatSchedule {
            every_x_weeks: self.every_x_weeks,
            repeat_until_date: self.repeat_until_date.clone(),
        })
    }
}

impl Expand for ScheduleUser {
    type Output = wire::ScheduleUser;

    fn expand(&self) -> Result<wire::ScheduleUser, CoreError> {
        Ok(wire::ScheduleUser {
            user: self.user.clone(),
            role: self.role.clone(),
        })
    }
}

// ── Flatten ──────────────────────────────────────────────────────────

impl From<&wire::Schedule> for ScheduleConfig {
    fn from(s: &wire::Schedule) -> Self {
        Self {
            schedule_id: s.schedule_id,
            group: s.group.clone(),
            schedule_name: s.schedule_name.clone(),
            schedule_type: s.schedule_type.clone(),
            continuous: s.continuous,
            time_zone: s.time_zone.clone(),
            color: s.color.clone(),
            start_date: flatten_block(&s.start_date),
            end_date: flatten_block(&s.end_date),
            start_weekday: s.start_weekday.clone(),
            end_weekday: s.end_weekday.clone(),
            schedule_weekdays: flatten_block(&s.schedule_weekdays),
            rotate_frequency: s.rotate_frequency.clone(),
            rotate_daily: flatten_block(&s.rotate_daily),
            rotate_weekly: flatten_block(&s.rotate_weekly),
            rotate_monthly: flatten_block(&s.rotate_monthly),
            repeat_schedule: flatten_block(&s.repeat_schedule),
            include_all_users_in_group: s.include_all_users_in_group,
            users: flatten_list(&s.users),
            enabled: s.enabled,
            is_holiday_notify: s.is_holiday_notify,
        }
    }
}

impl From<&wire::ScheduleDate> for ScheduleDate {
    fn from(d: &wire::ScheduleDate) -> Self {
        Self {
            date: d.date.clone(),
            hour: d.hour,
            minute: d.minute,
        }
    }
}

impl From<&wire::ScheduleWeekdays> for Weekdays {
    fn from(w: &wire::ScheduleWeekdays) -> Self {
        Self {
            sun: w.sun,
            mon: w.mon,
            tue: w.tue,
            wed: w.wed,
            thu: w.thu,
            fri: w.fri,
            sat: w.sat,
        }
    }
}

impl From<wire::ScheduleTime> for TimeOfDay {
    fn from(t: wire::ScheduleTime) -> Self {
        Self {
            hour: t.hour,
            minute: t.minute,
        }
    }
}

impl From<&wire::RotateDaily> for RotateDaily {
    fn from(r: &wire::RotateDaily) -> Self {
        Self {
            rotate_x_users: r.rotate_x_users,
            rotate_at_time: r.rotate_at_time.into(),
            every_x_days: r.every_x_days,
        }
    }
}

impl From<&wire::RotateWeekly> for RotateWeekly {
    fn from(r: &wire::RotateWeekly) -> Self {
        Self {
            rotate_x_users: r.rotate_x_users,
            rotate_at_time: r.rotate_at_time.into(),
            every_x_weeks: r.every_x_weeks,
            rotate_at_day_of_week: r.rotate_at_day_of_week.clone(),
        }
    }
}

impl From<&wire::RotateMonthly> for RotateMonthly {
    fn from(r: &wire::RotateMonthly) -> Self {
        Self {
            rotate_x_users: r.rotate_x_users,
            rotate_at_time: r.rotate_at_time.into(),
            every_x_months: r.every_x_months,
        }
    }
}

impl From<&wire::RepeatSchedule> for RepeatSchedule {
    fn from(r: &wire::RepeatSchedule) -> Self {
        Self {
            every_x_weeks: r.every_x_weeks,
            repeat_until_date: r.repeat_until_date.clone(),
        }
    }
}

impl From<&wire::ScheduleUser> for ScheduleUser {
    fn from(u: &wire::ScheduleUser) -> Self {
        Self {
            user: u.user.clone(),
            role: u.role.clone(),
        }
    }
}
