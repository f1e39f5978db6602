use std::fmt;

use calamine::Data;
use chrono::{NaiveDateTime, NaiveTime, TimeDelta, Timelike};

const MICROS_PER_DAY: i64 = 86_400_000_000;

/// Cached value of a single worksheet cell.
///
/// Every variant stringifies through [`fmt::Display`], and that string form is
/// what the report prints and what [`CellValue::is_present`] inspects.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    /// Time-of-day cell: a date-formatted serial below one day
    Time(NaiveTime),
    Duration(TimeDelta),
    Error(String),
}

impl CellValue {
    /// A cell counts when it holds something other than blanks.
    pub fn is_present(&self) -> bool {
        match self {
            CellValue::Empty => false,
            CellValue::Text(s) | CellValue::Error(s) => !s.trim().is_empty(),
            _ => !self.to_string().trim().is_empty(),
        }
    }
}

/// Shortest round-trip digits; exponent form below 1e-4 and from 1e16 up.
fn format_float(v: f64) -> String {
    if v == (v as i64) as f64 && v.abs() < 1e16 {
        return (v as i64).to_string();
    }

    let scientific = format!("{:e}", v);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return v.to_string(),
    };
    let exponent: i32 = match exponent.parse() {
        Ok(exp) => exp,
        Err(_) => return v.to_string(),
    };

    if (-4..16).contains(&exponent) {
        v.to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}

fn format_time(f: &mut fmt::Formatter<'_>, time: &NaiveTime) -> fmt::Result {
    write!(f, "{}", time.format("%H:%M:%S"))?;
    let micros = time.nanosecond() / 1_000;
    if micros != 0 {
        write!(f, ".{:06}", micros)?;
    }
    Ok(())
}

/// `[-]D day(s), H:MM:SS[.ffffff]` with days floored so the clock part is positive.
fn format_duration(f: &mut fmt::Formatter<'_>, delta: &TimeDelta) -> fmt::Result {
    let total = delta.num_microseconds().unwrap_or(i64::MAX);
    let days = total.div_euclid(MICROS_PER_DAY);
    let rest = total.rem_euclid(MICROS_PER_DAY);

    let seconds = rest / 1_000_000;
    let micros = rest % 1_000_000;

    if days != 0 {
        let unit = if days.abs() == 1 { "day" } else { "days" };
        write!(f, "{} {}, ", days, unit)?;
    }
    write!(
        f,
        "{}:{:02}:{:02}",
        seconds / 3600,
        (seconds / 60) % 60,
        seconds % 60
    )?;
    if micros != 0 {
        write!(f, ".{:06}", micros)?;
    }
    Ok(())
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) | CellValue::Error(s) => f.write_str(s),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(v) => f.write_str(&format_float(*v)),
            CellValue::Bool(b) => f.write_str(if *b { "True" } else { "False" }),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            CellValue::Time(time) => format_time(f, time),
            CellValue::Duration(delta) => format_duration(f, delta),
        }
    }
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Float(f) => CellValue::Float(*f),
            Data::Int(i) => CellValue::Int(*i),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::Error(e) => CellValue::Error(e.to_string()),
            Data::DateTime(dt) if dt.is_duration() => match dt.as_duration() {
                Some(delta) => CellValue::Duration(delta),
                None => CellValue::Float(dt.as_f64()),
            },
            // Serial numbers that don't map to a calendar date keep their raw value
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(value) if (0.0..1.0).contains(&dt.as_f64()) => CellValue::Time(value.time()),
                Some(value) => CellValue::DateTime(value),
                None => CellValue::Float(dt.as_f64()),
            },
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        }
    }
}
