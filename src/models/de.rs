//! Serde helpers for cells that arrive from spreadsheet-like sources.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumericCell<T> {
    Number(T),
    Text(String),
}

impl<T> NumericCell<T>
where
    T: FromStr,
    T::Err: Display,
{
    fn into_number<E: de::Error>(self) -> Result<T, E> {
        match self {
            NumericCell::Number(n) => Ok(n),
            NumericCell::Text(text) => text
                .trim()
                .parse()
                .map_err(|e| E::custom(format!("invalid number '{}': {}", text, e))),
        }
    }
}

/// Accept a number or numeric text such as `"+15"` or `"1.50"`.
pub fn lenient_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    NumericCell::<T>::deserialize(deserializer)?.into_number()
}

/// Like [`lenient_number`], with `null` read as `None`.
pub fn lenient_optional_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    Option::<NumericCell<T>>::deserialize(deserializer)?
        .map(NumericCell::into_number)
        .transpose()
}

/// Accept either a textual or a numeric cell and keep it as text.
///
/// Product identifiers and slugs are often purely numeric, so the input
/// adapter may already have turned them into numbers.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrNumber;

    impl Visitor<'_> for StringOrNumber {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string or a number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(StringOrNumber)
}

/// Weekdays as full English names ("Monday"), parsed case-insensitively.
pub mod weekday {
    use chrono::Weekday;
    use serde::de;
    use serde::{Deserializer, Serializer};

    use super::string_or_number;
    use crate::models::week::{day_name, parse_weekday};

    pub fn serialize<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(day_name(*day))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let raw = string_or_number(deserializer)?;
        parse_weekday(&raw).ok_or_else(|| de::Error::custom(format!("unknown weekday '{}'", raw)))
    }
}
