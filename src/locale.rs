//! Display locales for pivot labels.
//!
//! Only labels are localized. Record values and sort keys stay numeric, so
//! switching locale never changes the order of a pivot axis.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WhatstatError;

const WEEKDAYS_EN: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const WEEKDAYS_ES: [&str; 7] = [
    "Lunes",
    "Martes",
    "Miércoles",
    "Jueves",
    "Viernes",
    "Sábado",
    "Domingo",
];

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_ES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Language used for axis labels.
///
/// # Example
///
/// ```rust
/// use whatstat::locale::Locale;
///
/// assert_eq!(Locale::Es.weekday_name(0), Some("Lunes"));
/// assert_eq!(Locale::En.month_name(12), Some("December"));
/// assert_eq!(Locale::En.month_name(13), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Spanish
    Es,
}

impl Locale {
    /// Returns the weekday name for an index where Monday is 0.
    pub fn weekday_name(self, index: i64) -> Option<&'static str> {
        let names = match self {
            Locale::En => &WEEKDAYS_EN,
            Locale::Es => &WEEKDAYS_ES,
        };
        usize::try_from(index).ok().and_then(|i| names.get(i)).copied()
    }

    /// Returns the month name for a month number where January is 1.
    pub fn month_name(self, month: i64) -> Option<&'static str> {
        let names = match self {
            Locale::En => &MONTHS_EN,
            Locale::Es => &MONTHS_ES,
        };
        usize::try_from(month)
            .ok()
            .and_then(|m| m.checked_sub(1))
            .and_then(|i| names.get(i))
            .copied()
    }

    /// Returns the short code (`en`, `es`).
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = WhatstatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "es" | "spanish" | "español" => Ok(Locale::Es),
            _ => Err(WhatstatError::invalid_format(
                "locale",
                format!("Unknown locale '{}'. Expected one of: en, es", s),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_bounds() {
        assert_eq!(Locale::En.weekday_name(6), Some("Sunday"));
        assert_eq!(Locale::En.weekday_name(7), None);
        assert_eq!(Locale::Es.weekday_name(-1), None);
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(Locale::Es.month_name(1), Some("Enero"));
        assert_eq!(Locale::Es.month_name(0), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("ES".parse::<Locale>().unwrap(), Locale::Es);
        assert_eq!("english".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
    }
}
