use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

const SECONDS_PER_DAY: i64 = 86_400;

/// Price breakdown for a stay at a listing
///
/// Nothing is reserved or charged; this is the sidebar calculator on the
/// property page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookingQuote {
    #[serde(rename = "checkIn")]
    pub check_in: NaiveDate,
    #[serde(rename = "checkOut")]
    pub check_out: NaiveDate,
    pub nights: u32,
    #[serde(rename = "nightlyPrice")]
    pub nightly_price: u32,
    pub total: u64,
}

impl BookingQuote {
    /// Quote a stay between two calendar dates
    ///
    /// A check-out on or before check-in yields zero nights and a zero total.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate, nightly_price: u32) -> Self {
        let nights = nights_between(check_in, check_out);

        Self {
            check_in,
            check_out,
            nights,
            nightly_price,
            total: calculate_total(nights, nightly_price),
        }
    }

    pub fn is_bookable(&self) -> bool {
        self.nights > 0
    }
}

/// Whole nights between two dates, zero when check-out is not after check-in
#[inline]
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> u32 {
    nights_between_datetimes(
        check_in.and_time(NaiveTime::MIN),
        check_out.and_time(NaiveTime::MIN),
    )
}

/// Nights between two instants, rounding a partial day up
#[inline]
pub fn nights_between_datetimes(check_in: NaiveDateTime, check_out: NaiveDateTime) -> u32 {
    let seconds = (check_out - check_in).num_seconds();
    if seconds <= 0 {
        return 0;
    }

    let nights = (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY;
    u32::try_from(nights).unwrap_or(u32::MAX)
}

#[inline]
pub fn calculate_total(nights: u32, nightly_price: u32) -> u64 {
    u64::from(nights) * u64::from(nightly_price)
}
