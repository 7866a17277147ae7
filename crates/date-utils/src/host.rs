//! Host date/time capability
//!
//! Everything that depends on the machine running the code (the current
//! instant and the local UTC offset) goes through [`Host`]. The free
//! functions in this crate use [`SystemHost`]; tests and callers that need
//! reproducible output use [`FixedHost`] through a [`Calendar`].

use crate::moment::Moment;
use chrono::{DateTime, Datelike, Duration, FixedOffset, Local, NaiveDate, Offset, TimeZone, Utc};

pub trait Host: Send + Sync {
    /// Current instant
    fn now(&self) -> Moment;

    /// Local UTC offset in effect at `instant`
    fn local_offset(&self, instant: &DateTime<Utc>) -> FixedOffset;
}

/// The machine's clock and local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl Host for SystemHost {
    fn now(&self) -> Moment {
        Moment::now()
    }

    fn local_offset(&self, instant: &DateTime<Utc>) -> FixedOffset {
        Local.offset_from_utc_datetime(&instant.naive_utc()).fix()
    }
}

/// A frozen clock in a fixed-offset zone
#[derive(Debug, Clone, Copy)]
pub struct FixedHost {
    pub now: Moment,
    pub offset: FixedOffset,
}

impl FixedHost {
    pub fn new(now: Moment, offset: FixedOffset) -> Self {
        Self { now, offset }
    }

    /// Frozen clock in UTC
    pub fn utc(now: Moment) -> Self {
        Self::new(now, Utc.fix())
    }
}

impl Host for FixedHost {
    fn now(&self) -> Moment {
        self.now
    }

    fn local_offset(&self, _instant: &DateTime<Utc>) -> FixedOffset {
        self.offset
    }
}

/// `utc` viewed at `offset`, or `None` when the local wall-clock time falls
/// outside chrono's range
pub(crate) fn shift(utc: &DateTime<Utc>, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    utc.naive_utc()
        .checked_add_signed(Duration::seconds(offset.local_minus_utc().into()))?;
    Some(utc.with_timezone(&offset))
}

/// Host-bound entry point for the formatters and validators that read the
/// clock or the local calendar
#[derive(Debug, Clone, Copy, Default)]
pub struct Calendar<H: Host = SystemHost> {
    host: H,
}

impl Calendar<SystemHost> {
    pub const fn system() -> Self {
        Self { host: SystemHost }
    }
}

impl<H: Host> Calendar<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// `base`, or the host's current instant when absent
    pub(crate) fn base_or_now(&self, base: Option<Moment>) -> Moment {
        base.unwrap_or_else(|| self.host.now())
    }

    /// The instant shifted into the host's local zone
    pub(crate) fn local(&self, moment: Moment) -> Option<DateTime<FixedOffset>> {
        let utc = moment.datetime()?;
        shift(&utc, self.host.local_offset(&utc))
    }

    pub(crate) fn local_date(&self, moment: Moment) -> Option<NaiveDate> {
        self.local(moment).map(|dt| dt.date_naive())
    }

    pub(crate) fn local_year_month(&self, moment: Moment) -> Option<(i32, u32)> {
        self.local(moment).map(|dt| (dt.year(), dt.month()))
    }
}
