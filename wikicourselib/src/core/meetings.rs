use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::collab::MeetingScheduler;
use crate::core::course::{Course, Week};
use crate::Result;

/// Days of the week a class meets, Sunday first.
///
/// Stored as a string of seven `0`/`1` flags: `"0101000"` is Monday and
/// Wednesday.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Weekdays([bool; 7]);

impl Weekdays {
    pub fn contains(self, day: Weekday) -> bool {
        self.0[day.num_days_from_sunday() as usize]
    }
}

impl TryFrom<String> for Weekdays {
    type Error = String;

    fn try_from(flags: String) -> std::result::Result<Self, Self::Error> {
        flags.parse()
    }
}

impl From<Weekdays> for String {
    fn from(weekdays: Weekdays) -> Self {
        weekdays.to_string()
    }
}

impl std::str::FromStr for Weekdays {
    type Err = String;

    fn from_str(flags: &str) -> std::result::Result<Self, Self::Err> {
        if flags.chars().count() != 7 {
            return Err(format!("weekdays '{flags}' must have exactly 7 flags"));
        }
        let mut days = [false; 7];
        for (day, flag) in days.iter_mut().zip(flags.chars()) {
            *day = match flag {
                '0' => false,
                '1' => true,
                other => return Err(format!("invalid weekday flag '{other}' in '{flags}'")),
            };
        }
        Ok(Self(days))
    }
}

impl std::fmt::Display for Weekdays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for day in self.0 {
            write!(f, "{}", if day { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// When a course meets over the span of its timeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MeetingSchedule {
    pub timeline_start: NaiveDate,
    pub timeline_end: NaiveDate,
    #[serde(default)]
    pub weekdays: Weekdays,
    /// Days the class does not meet even though the weekday says it does.
    #[serde(default)]
    pub day_exceptions: Vec<NaiveDate>,
}

impl MeetingSchedule {
    /// Meeting dates for the `week_number`th (1-based) calendar week of the
    /// timeline. Weeks start on Sunday. A week outside the representable date
    /// range has no meetings.
    pub fn dates_of_week(&self, week_number: usize) -> Vec<NaiveDate> {
        let Some(week_start) = self.week_start(week_number) else {
            trace!(week_number, "week lies outside the supported date range");
            return vec![];
        };

        (0..7)
            .filter_map(|day| week_start.checked_add_signed(Duration::days(day)))
            .filter(|date| self.timeline_start <= *date && *date <= self.timeline_end)
            .filter(|date| self.weekdays.contains(date.weekday()))
            .filter(|date| !self.day_exceptions.contains(date))
            .collect()
    }

    fn week_start(&self, week_number: usize) -> Option<NaiveDate> {
        let offset = self.timeline_start.weekday().num_days_from_sunday();
        let first_sunday = self
            .timeline_start
            .checked_sub_signed(Duration::days(i64::from(offset)))?;
        let weeks = i64::try_from(week_number.saturating_sub(1)).ok()?;
        first_sunday.checked_add_signed(Duration::try_weeks(weeks)?)
    }
}

/// Meeting dates computed from a course's own schedule.
#[derive(Clone, Copy, Debug)]
pub struct CourseMeetings<'a> {
    schedule: Option<&'a MeetingSchedule>,
}

impl<'a> CourseMeetings<'a> {
    pub fn new(course: &'a Course) -> Self {
        Self {
            schedule: course.meetings.as_ref(),
        }
    }
}

impl MeetingScheduler for CourseMeetings<'_> {
    fn dates_for(&self, _week: &Week, week_number: usize) -> Result<Vec<NaiveDate>> {
        match self.schedule {
            Some(schedule) => Ok(schedule.dates_of_week(week_number)),
            None => {
                trace!(week_number, "course has no meeting schedule");
                Ok(vec![])
            }
        }
    }
}
