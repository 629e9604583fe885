use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::de::lenient_number;

/// One day of the week being planned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekDay {
    #[serde(rename = "Day", with = "crate::models::de::weekday")]
    pub day: Weekday,

    #[serde(rename = "Date")]
    pub date: NaiveDate,

    #[serde(rename = "NumberOfPeople", deserialize_with = "lenient_number")]
    pub number_of_people: u32,

    /// Extra headcount fed from leftovers.
    #[serde(rename = "NumberOfPeopleLeftovers", deserialize_with = "lenient_number")]
    pub number_of_people_leftovers: u32,

    /// Inclusive ceiling in minutes.
    #[serde(rename = "MaxPreparationTime", deserialize_with = "lenient_number")]
    pub max_preparation_time: u32,
}

impl WeekDay {
    pub fn name(&self) -> &'static str {
        day_name(self.day)
    }

    /// Headcount when cooking for both the day and its leftovers.
    pub fn total_headcount(&self) -> u32 {
        self.number_of_people
            .saturating_add(self.number_of_people_leftovers)
    }

    /// Reject a day whose combined headcount does not fit in a `u32`.
    pub fn validate(&self) -> Result<(), String> {
        if self
            .number_of_people
            .checked_add(self.number_of_people_leftovers)
            .is_none()
        {
            return Err(format!(
                "{} headcount {} + {} leftovers is too large",
                self.name(),
                self.number_of_people,
                self.number_of_people_leftovers
            ));
        }
        Ok(())
    }
}

pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parse a full or abbreviated English day name, ignoring case.
pub fn parse_weekday(value: &str) -> Option<Weekday> {
    value.trim().parse::<Weekday>().ok()
}
