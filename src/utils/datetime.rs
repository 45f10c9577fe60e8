//! Date/time formatting and parsing driven by Java-style patterns
//! (`yyyy-MM-dd HH:mm:ss`).
//!
//! A [`DatePattern`] is compiled once into a chrono strftime string and then
//! used symmetrically: [`format_instant`] renders an instant through it and
//! [`parse_instant`] reads the same text back. The wall clock is chosen by an
//! explicit [`Zone`] rather than the host default, so results are reproducible
//! whenever `Zone::Utc` or a fixed offset is used.
//!
//! Supported tokens:
//!
//! | token        | meaning                     |
//! |--------------|-----------------------------|
//! | `yyyy`, `yy` | year, two-digit year        |
//! | `MMMM`, `MMM`, `MM`, `M` | month name, abbreviation, number |
//! | `dd`, `d`    | day of month                |
//! | `HH`, `H`    | hour 0-23                   |
//! | `hh`, `h`    | hour 1-12                   |
//! | `mm`, `m`    | minute                      |
//! | `ss`, `s`    | second                      |
//! | `SSS`        | millisecond                 |
//! | `a`          | AM/PM marker                |
//! | `EEEE`, `EEE`| weekday name, abbreviation  |
//! | `Z`          | offset such as `+0800`      |
//!
//! Text in single quotes is literal and `''` is a single quote.
//!
//! Fields a pattern leaves out are filled in when parsing: year 1970, January,
//! day 1 (or the first day of the month matching a parsed weekday), hour and
//! minute 0, and AM for a 12-hour clock without `a`.

use std::fmt;
use std::str::FromStr;

use chrono::format::{parse, ParseResult, Parsed, StrftimeItems};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DateError, Result};

/// Wall clock used to render and interpret instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Zone {
    /// Host time zone. Output depends on the machine running the code.
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

impl Zone {
    fn resolve(self, naive: NaiveDateTime) -> std::result::Result<DateTime<Utc>, DateError> {
        let resolved = match self {
            Zone::Utc => Some(Utc.from_utc_datetime(&naive)),
            Zone::Local => Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
            Zone::Fixed(offset) => offset
                .from_local_datetime(&naive)
                .single()
                .map(|dt| dt.with_timezone(&Utc)),
        };
        resolved.ok_or_else(|| DateError::NonexistentLocalTime(naive.to_string()))
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Local => write!(f, "local"),
            Zone::Utc => write!(f, "utc"),
            Zone::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

impl FromStr for Zone {
    type Err = DateError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "local" => return Ok(Zone::Local),
            "utc" | "z" => return Ok(Zone::Utc),
            _ => {}
        }

        let invalid = || DateError::InvalidZone(s.to_string());
        let (sign, rest) = match trimmed.chars().next() {
            Some('+') => (1, &trimmed[1..]),
            Some('-') => (-1, &trimmed[1..]),
            _ => return Err(invalid()),
        };
        if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit() || b == b':') {
            return Err(invalid());
        }
        let (hours, minutes) = match rest.split_once(':') {
            Some((h, m)) => (h, m),
            None if rest.len() == 4 => rest.split_at(2),
            None => (rest, "0"),
        };
        let hours: i32 = hours.parse().map_err(|_| invalid())?;
        let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
        if !(0..=23).contains(&hours) || !(0..=59).contains(&minutes) {
            return Err(invalid());
        }
        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .map(Zone::Fixed)
            .ok_or_else(invalid)
    }
}

impl TryFrom<String> for Zone {
    type Error = DateError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Zone> for String {
    fn from(zone: Zone) -> Self {
        zone.to_string()
    }
}

/// Calendar and clock fields a pattern mentions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Fields {
    year: bool,
    month: bool,
    day: bool,
    weekday: bool,
    hour24: bool,
    hour12: bool,
    ampm: bool,
    minute: bool,
    offset: bool,
}

/// A compiled date pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    source: String,
    strftime: String,
    fields: Fields,
}

impl DatePattern {
    /// Compiles a Java-style pattern. Unknown letters and unterminated quotes
    /// are rejected.
    pub fn compile(pattern: &str) -> Result<Self> {
        let invalid = |reason: String| DateError::InvalidPattern {
            pattern: pattern.to_string(),
            reason,
        };

        let mut compiled = DatePattern {
            source: pattern.to_string(),
            strftime: String::with_capacity(pattern.len() * 2),
            fields: Fields::default(),
        };
        let chars: Vec<char> = pattern.chars().collect();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if c == '\'' {
                if chars.get(i + 1) == Some(&'\'') {
                    compiled.strftime.push('\'');
                    i += 2;
                    continue;
                }
                i += 1;
                loop {
                    match chars.get(i) {
                        None => return Err(invalid("unterminated quoted text".into()).into()),
                        Some('\'') if chars.get(i + 1) == Some(&'\'') => {
                            compiled.strftime.push('\'');
                            i += 2;
                        }
                        Some('\'') => {
                            i += 1;
                            break;
                        }
                        Some(&literal) => {
                            compiled.push_literal(literal);
                            i += 1;
                        }
                    }
                }
                continue;
            }

            if !c.is_ascii_alphabetic() {
                compiled.push_literal(c);
                i += 1;
                continue;
            }

            let run = chars[i..].iter().take_while(|&&other| other == c).count();
            let spec = match (c, run) {
                ('y', 2) => "%y",
                ('y', _) => "%Y",
                ('M', 1) => "%-m",
                ('M', 2) => "%m",
                ('M', 3) => "%b",
                ('M', _) => "%B",
                ('d', 1) => "%-d",
                ('d', _) => "%d",
                ('H', 1) => "%-H",
                ('H', _) => "%H",
                ('h', 1) => "%-I",
                ('h', _) => "%I",
                ('m', 1) => "%-M",
                ('m', _) => "%M",
                ('s', 1) => "%-S",
                ('s', _) => "%S",
                ('S', 3) => "%3f",
                ('a', _) => "%p",
                ('E', 1..=3) => "%a",
                ('E', _) => "%A",
                ('Z', _) => "%z",
                ('S', n) => {
                    return Err(invalid(format!("'{}' needs exactly 3 letters, got {}", c, n)).into())
                }
                _ => return Err(invalid(format!("unsupported pattern letter '{}'", c)).into()),
            };
            let fields = &mut compiled.fields;
            match c {
                'y' => fields.year = true,
                'M' => fields.month = true,
                'd' => fields.day = true,
                'E' => fields.weekday = true,
                'H' => fields.hour24 = true,
                'h' => fields.hour12 = true,
                'a' => fields.ampm = true,
                'm' => fields.minute = true,
                'Z' => fields.offset = true,
                _ => {}
            }
            compiled.strftime.push_str(spec);
            i += run;
        }

        debug!(pattern, strftime = %compiled.strftime, "compiled date pattern");
        Ok(compiled)
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The equivalent chrono strftime string.
    pub fn strftime(&self) -> &str {
        &self.strftime
    }

    /// Date from `parsed`, with absent fields taken from 1970-01-01. A parsed
    /// weekday without a day of month selects the first matching day.
    fn resolve_date(&self, parsed: &Parsed) -> ParseResult<NaiveDate> {
        let mut base = parsed.clone();
        if !self.fields.year {
            base.set_year(1970)?;
        }
        if !self.fields.month {
            base.set_month(1)?;
        }
        if self.fields.day {
            return base.to_naive_date();
        }

        let with_day = |day: i64| -> ParseResult<NaiveDate> {
            let mut candidate = base.clone();
            candidate.set_day(day)?;
            candidate.to_naive_date()
        };
        let mut resolved = with_day(1);
        if self.fields.weekday {
            for day in 2..=7 {
                if resolved.is_ok() {
                    break;
                }
                resolved = with_day(day);
            }
        }
        resolved
    }

    /// Wall-clock time from `parsed`, with absent fields taken as 0 and AM.
    fn resolve_time(&self, parsed: &mut Parsed) -> ParseResult<chrono::NaiveTime> {
        if self.fields.hour12 && !self.fields.ampm {
            parsed.set_ampm(false)?;
        }
        if !self.fields.hour12 && !self.fields.hour24 {
            if self.fields.ampm {
                parsed.set_hour12(12)?;
            } else {
                parsed.set_hour(0)?;
            }
        }
        if !self.fields.minute {
            parsed.set_minute(0)?;
        }
        parsed.to_naive_time()
    }

    fn push_literal(&mut self, c: char) {
        if c == '%' {
            self.strftime.push_str("%%");
        } else {
            self.strftime.push(c);
        }
    }
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for DatePattern {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        DatePattern::compile(s)
    }
}

/// Renders `instant` on the wall clock of `zone`.
pub fn format_instant(instant: &DateTime<Utc>, pattern: &DatePattern, zone: Zone) -> String {
    let fmt = pattern.strftime();
    match zone {
        Zone::Utc => instant.format(fmt).to_string(),
        Zone::Local => instant.with_timezone(&Local).format(fmt).to_string(),
        Zone::Fixed(offset) => instant.with_timezone(&offset).format(fmt).to_string(),
    }
}

/// Parses `input` with `pattern`, reading the wall clock as `zone`.
///
/// Fields missing from the pattern take the defaults listed in the module
/// docs. When the pattern carries `Z` the parsed offset wins over `zone`.
/// Anything the pattern does not carry is lost, so a formatted instant parses
/// back truncated to what the pattern keeps.
pub fn parse_instant(input: &str, pattern: &DatePattern, zone: Zone) -> Result<DateTime<Utc>> {
    let mismatch = |source: chrono::ParseError| DateError::Mismatch {
        input: input.to_string(),
        pattern: pattern.as_str().to_string(),
        source,
    };

    let mut parsed = Parsed::new();
    parse(&mut parsed, input, StrftimeItems::new(pattern.strftime())).map_err(mismatch)?;

    let date = pattern.resolve_date(&parsed).map_err(mismatch)?;
    let time = pattern.resolve_time(&mut parsed).map_err(mismatch)?;
    let zone = if pattern.fields.offset {
        Zone::Fixed(parsed.to_fixed_offset().map_err(mismatch)?)
    } else {
        zone
    };

    Ok(zone.resolve(date.and_time(time))?)
}

/// Milliseconds since the Unix epoch.
pub fn timestamp_millis() -> i64 {
    Utc::now().timestamp_millis()
}
