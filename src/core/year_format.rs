use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

const HIJRA_YEAR: f64 = 622.0;
const LUNAR_YEARS_PER_SOLAR_YEAR: f64 = 1.030684;

/// Textual numbering used for year labels.
///
/// Notation never changes the internal year value, only how it is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum YearNotation {
    #[default]
    BcAd,
    BceCe,
    /// Approximate Hijri years (`AH` from 622 CE, `BH` before it).
    Hijri,
}

/// Astronomical year of an internal year: internal `Y` is astronomical `Y + 1`.
#[must_use]
pub fn astronomical_year(year: i32) -> i64 {
    i64::from(year) + 1
}

#[must_use]
pub fn format_year(year: i32, notation: YearNotation) -> String {
    match notation {
        YearNotation::BcAd => format_era(year, "BC", "AD"),
        YearNotation::BceCe => format_era(year, "BCE", "CE"),
        YearNotation::Hijri => format_hijri(year),
    }
}

fn format_era(year: i32, before: &str, after: &str) -> String {
    if year < 0 {
        format!("{} {before}", i64::from(year).abs())
    } else {
        format!("{} {after}", astronomical_year(year))
    }
}

fn format_hijri(year: i32) -> String {
    let astronomical = astronomical_year(year) as f64;
    if astronomical >= HIJRA_YEAR {
        let hijri = ((astronomical - HIJRA_YEAR) * LUNAR_YEARS_PER_SOLAR_YEAR).round() as i64 + 1;
        format!("{hijri} AH")
    } else {
        let before = ((HIJRA_YEAR - astronomical) * LUNAR_YEARS_PER_SOLAR_YEAR)
            .round()
            .max(1.0) as i64;
        format!("{before} BH")
    }
}

/// Parses an external year string into the internal numbering.
///
/// Accepted forms: `"500 BC"`, `"500BCE"`, `"1500 AD"`, `"1500 ce"`, and bare signed
/// integers which are taken as internal years (`"-500"` is 501 BC).
pub fn parse_year(input: &str) -> TimelineResult<i32> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimelineError::InvalidInput(
            "year text must not be empty".to_owned(),
        ));
    }

    let split = trimmed
        .char_indices()
        .find(|(_, ch)| ch.is_ascii_alphabetic())
        .map_or(trimmed.len(), |(index, _)| index);
    let (number_text, suffix) = trimmed.split_at(split);
    let number: i64 = number_text.trim().parse().map_err(|_| {
        TimelineError::InvalidInput(format!("`{input}` does not start with a year number"))
    })?;

    let internal = match suffix.trim().to_ascii_uppercase().as_str() {
        "" => number,
        "BC" | "BCE" => {
            ensure_positive_era_year(number, input)?;
            -number
        }
        "AD" | "CE" => {
            ensure_positive_era_year(number, input)?;
            number - 1
        }
        other => {
            return Err(TimelineError::InvalidInput(format!(
                "unknown era suffix `{other}` in `{input}`"
            )));
        }
    };

    i32::try_from(internal)
        .map_err(|_| TimelineError::InvalidInput(format!("`{input}` is out of year range")))
}

fn ensure_positive_era_year(number: i64, input: &str) -> TimelineResult<()> {
    if number < 1 {
        return Err(TimelineError::InvalidInput(format!(
            "era years start at 1, got `{input}`"
        )));
    }
    Ok(())
}
