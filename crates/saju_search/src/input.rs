//! Birth input: calendar fields, gender, calendar type and the lunar seam.
//!
//! Lunar-to-solar conversion is an external concern. Callers plug a
//! [`LunarConverter`] in; the bundled [`SolarOnly`] rejects lunar input.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use saju_time::BirthInstant;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Gender flag used by the luck-direction rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Male => "남",
            Self::Female => "여",
        }
    }
}

impl FromStr for Gender {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "남" | "남자" => Ok(Self::Male),
            "female" | "f" | "여" | "여자" => Ok(Self::Female),
            _ => Err(SearchError::InvalidInput("gender must be male or female")),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Calendar the birth date was recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarType {
    #[default]
    Solar,
    Lunar {
        /// The lunar month is the intercalary (윤달) one.
        leap_month: bool,
    },
}

impl CalendarType {
    pub const fn is_lunar(self) -> bool {
        matches!(self, Self::Lunar { .. })
    }
}

impl FromStr for CalendarType {
    type Err = SearchError;

    /// Accepts `solar`, `lunar`, `lunar-leap` and the Korean 양력/음력/윤달.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solar" | "양력" => Ok(Self::Solar),
            "lunar" | "음력" => Ok(Self::Lunar { leap_month: false }),
            "lunar-leap" | "lunar_leap" | "윤달" => Ok(Self::Lunar { leap_month: true }),
            _ => Err(SearchError::InvalidInput(
                "calendar must be solar, lunar or lunar-leap",
            )),
        }
    }
}

/// Lunar-to-solar date conversion, supplied by the caller.
pub trait LunarConverter {
    /// Solar date of the given lunar date.
    fn to_solar(
        &self,
        year: i32,
        month: u32,
        day: u32,
        leap_month: bool,
    ) -> Result<NaiveDate, SearchError>;
}

impl<F> LunarConverter for F
where
    F: Fn(i32, u32, u32, bool) -> Result<NaiveDate, SearchError>,
{
    fn to_solar(
        &self,
        year: i32,
        month: u32,
        day: u32,
        leap_month: bool,
    ) -> Result<NaiveDate, SearchError> {
        self(year, month, day, leap_month)
    }
}

/// Converter for deployments without lunar support.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolarOnly;

impl LunarConverter for SolarOnly {
    fn to_solar(&self, _: i32, _: u32, _: u32, _: bool) -> Result<NaiveDate, SearchError> {
        Err(SearchError::InvalidInput(
            "lunar calendar input requires a lunar converter",
        ))
    }
}

/// Raw birth data as entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub gender: Gender,
    #[serde(default)]
    pub calendar: CalendarType,
}

impl BirthInput {
    /// Solar-calendar input.
    pub const fn solar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        gender: Gender,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            gender,
            calendar: CalendarType::Solar,
        }
    }

    /// Resolve to a solar-calendar birth instant, converting lunar dates.
    pub fn resolve(&self, converter: &dyn LunarConverter) -> Result<BirthInstant, SearchError> {
        match self.calendar {
            CalendarType::Solar => Ok(BirthInstant::new(
                self.year,
                self.month,
                self.day,
                self.hour,
                self.minute,
            )?),
            CalendarType::Lunar { leap_month } => {
                let date = converter.to_solar(self.year, self.month, self.day, leap_month)?;
                tracing::debug!(
                    lunar = %format!("{}-{:02}-{:02}", self.year, self.month, self.day),
                    leap_month,
                    solar = %date,
                    "converted lunar birth date"
                );
                Ok(BirthInstant::new(
                    date.year(),
                    date.month(),
                    date.day(),
                    self.hour,
                    self.minute,
                )?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_spellings() {
        for s in ["male", "M", "남", " Male "] {
            assert_eq!(s.parse::<Gender>().unwrap(), Gender::Male, "{s}");
        }
        for s in ["female", "f", "여"] {
            assert_eq!(s.parse::<Gender>().unwrap(), Gender::Female, "{s}");
        }
        assert!(matches!(
            "x".parse::<Gender>(),
            Err(SearchError::InvalidInput(_))
        ));
    }

    #[test]
    fn calendar_spellings() {
        assert_eq!("solar".parse::<CalendarType>().unwrap(), CalendarType::Solar);
        assert_eq!(
            "음력".parse::<CalendarType>().unwrap(),
            CalendarType::Lunar { leap_month: false }
        );
        assert_eq!(
            "lunar-leap".parse::<CalendarType>().unwrap(),
            CalendarType::Lunar { leap_month: true }
        );
        assert!("julian".parse::<CalendarType>().is_err());
    }

    #[test]
    fn solar_input_resolves_directly() {
        let input = BirthInput::solar(2000, 9, 22, 16, 0, Gender::Male);
        let at = input.resolve(&SolarOnly).unwrap();
        assert_eq!(at.to_string(), "2000-09-22 16:00");
    }

    #[test]
    fn invalid_solar_date_is_rejected() {
        let input = BirthInput::solar(2001, 2, 29, 12, 0, Gender::Female);
        assert!(matches!(
            input.resolve(&SolarOnly),
            Err(SearchError::Time(_))
        ));
    }

    #[test]
    fn solar_only_rejects_lunar() {
        let input = BirthInput {
            calendar: CalendarType::Lunar { leap_month: false },
            ..BirthInput::solar(2000, 8, 24, 16, 0, Gender::Male)
        };
        assert!(matches!(
            input.resolve(&SolarOnly),
            Err(SearchError::InvalidInput(_))
        ));
    }

    #[test]
    fn closure_converter_is_used() {
        let convert = |y: i32, m: u32, d: u32, leap: bool| {
            assert!(!leap);
            assert_eq!((y, m, d), (2000, 8, 24));
            NaiveDate::from_ymd_opt(2000, 9, 22).ok_or(SearchError::InvalidInput("date"))
        };
        let input = BirthInput {
            calendar: CalendarType::Lunar { leap_month: false },
            ..BirthInput::solar(2000, 8, 24, 16, 0, Gender::Male)
        };
        let at = input.resolve(&convert).unwrap();
        assert_eq!(at.to_string(), "2000-09-22 16:00");
    }
}
