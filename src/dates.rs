//! Resolution of the human-readable upload dates shown next to chapters.
//!
//! Three shapes are understood: relative phrases (`5 minutes ago`,
//! `a day ago`), day-relative times (`today 09:30 am`, `yesterday 11:15 pm`)
//! and absolute dates (`mar 05, 2024`). Anything else resolves to 0.

use chrono::{DateTime, Days, FixedOffset, Local, Months, NaiveDate, NaiveTime, TimeDelta};
use std::sync::Arc;

/// Format of the time part in `today`/`yesterday` phrases.
const TIME_FORMAT: &str = "%I:%M %p";

/// Format of absolute dates. `%B` also accepts the abbreviated month.
const DATE_FORMAT: &str = "%B %d, %Y";

/// Source of the reference instant relative dates are measured from.
pub trait Clock: Send + Sync {
    /// Returns the current instant in the reader's timezone.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Clock backed by the system time in the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Calendar unit of a relative date phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RelativeUnit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl RelativeUnit {
    fn parse(unit: &str) -> Option<Self> {
        let unit = unit.strip_suffix('s').unwrap_or(unit);
        match unit {
            "year" => Some(Self::Year),
            "month" => Some(Self::Month),
            "week" => Some(Self::Week),
            "day" => Some(Self::Day),
            "hour" => Some(Self::Hour),
            "minute" => Some(Self::Minute),
            "second" => Some(Self::Second),
            _ => None,
        }
    }

    /// Moves `from` back by `amount` of this unit.
    fn subtract(
        self,
        from: DateTime<FixedOffset>,
        amount: u32,
    ) -> Option<DateTime<FixedOffset>> {
        let amount_i64 = i64::from(amount);
        match self {
            Self::Year => from.checked_sub_months(Months::new(amount.checked_mul(12)?)),
            Self::Month => from.checked_sub_months(Months::new(amount)),
            Self::Week => from.checked_sub_signed(TimeDelta::try_weeks(amount_i64)?),
            Self::Day => from.checked_sub_signed(TimeDelta::try_days(amount_i64)?),
            Self::Hour => from.checked_sub_signed(TimeDelta::try_hours(amount_i64)?),
            Self::Minute => from.checked_sub_signed(TimeDelta::try_minutes(amount_i64)?),
            Self::Second => from.checked_sub_signed(TimeDelta::try_seconds(amount_i64)?),
        }
    }
}

/// Converts date phrases into epoch milliseconds against a [`Clock`].
#[derive(Clone)]
pub struct DateResolver {
    clock: Arc<dyn Clock>,
}

impl Default for DateResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DateResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateResolver").finish_non_exhaustive()
    }
}

impl DateResolver {
    /// Creates a resolver using the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Creates a resolver using the given clock.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Arc::new(clock),
        }
    }

    /// Resolves a date phrase to epoch milliseconds, or 0 when it can't be read.
    pub fn resolve(&self, date: &str) -> i64 {
        let date = date.trim().to_lowercase();

        let resolved = if date.ends_with("ago") {
            self.resolve_relative(&date)
        } else if date.starts_with("yesterday") {
            self.resolve_day_time(&date, 1)
        } else if date.starts_with("today") {
            self.resolve_day_time(&date, 0)
        } else {
            self.resolve_absolute(&date)
        };

        resolved.map(|dt| dt.timestamp_millis()).unwrap_or(0)
    }

    /// `<amount> <unit> ago`, e.g. `11 days ago` or `a week ago`.
    fn resolve_relative(&self, date: &str) -> Option<DateTime<FixedOffset>> {
        let tokens: Vec<&str> = date.split_whitespace().collect();
        let [amount, unit, "ago"] = tokens.as_slice() else {
            return None;
        };

        let amount = match *amount {
            "a" => 1,
            other => other.parse::<u32>().ok()?,
        };
        let unit = RelativeUnit::parse(unit)?;

        unit.subtract(self.clock.now(), amount)
    }

    /// `today 09:30 am` or `yesterday 11:15 pm`, `days_back` days before now.
    fn resolve_day_time(&self, date: &str, days_back: u64) -> Option<DateTime<FixedOffset>> {
        let (_, time) = date.split_once(' ')?;
        let time = NaiveTime::parse_from_str(time.trim(), TIME_FORMAT).ok()?;

        let now = self.clock.now();
        let day = now
            .date_naive()
            .checked_sub_days(Days::new(days_back))?;

        day.and_time(time)
            .and_local_timezone(*now.offset())
            .single()
    }

    /// `mar 05, 2024`, at midnight.
    fn resolve_absolute(&self, date: &str) -> Option<DateTime<FixedOffset>> {
        let day = NaiveDate::parse_from_str(date, DATE_FORMAT).ok()?;
        let offset = *self.clock.now().offset();

        day.and_hms_opt(0, 0, 0)?
            .and_local_timezone(offset)
            .single()
    }
}
