use error_stack::Report;
use rust_decimal::Decimal;
use time::{Duration, OffsetDateTime, Time};
use vodca::{AsRefln, Fromln};

use crate::entity::{Price, PricePerMinute, RentedAt, ReturnedAt};
use crate::KernelError;

/// Maximum chargeable amount for a single calendar-day segment, applied to
/// each segment independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Fromln, AsRefln)]
pub struct DailyCap(Decimal);

impl DailyCap {
    pub fn new(cap: impl Into<Decimal>) -> Self {
        Self(cap.into())
    }
}

/// Prices a rental period. Stateless; the cap is the only configuration and
/// the current time comes from the caller, so the engine stays pure.
#[derive(Debug, Clone)]
pub struct RentalCalculator {
    daily_cap: DailyCap,
}

impl RentalCalculator {
    pub fn new(daily_cap: DailyCap) -> Self {
        Self { daily_cap }
    }

    /// Partitions `[rented_at, effective_end)` into calendar-day segments.
    /// Day boundaries are anchored to midnight after the rental's start
    /// date, not to day boundaries of the timestamps themselves. An open
    /// rental (no `returned_at`) is priced as if it ended at `now`.
    ///
    /// Per segment the charge is whole elapsed minutes times the rate,
    /// capped at the daily maximum. The total is the sum over segments.
    pub fn calculate(
        &self,
        rented_at: &RentedAt,
        returned_at: Option<&ReturnedAt>,
        now: OffsetDateTime,
        price_per_minute: &PricePerMinute,
    ) -> error_stack::Result<Price, KernelError> {
        let start = *rented_at.as_ref();
        let effective_end = returned_at.map(|end| *end.as_ref()).unwrap_or(now);

        if start > effective_end {
            return Err(Report::new(KernelError::InvalidRange));
        }

        let cap = *self.daily_cap.as_ref();
        let rate = *price_per_minute.as_ref();

        let mut sum = Decimal::ZERO;
        let mut next_day = start.replace_time(Time::MIDNIGHT) + Duration::days(1);

        let mut current_start = start;
        let mut current_end = effective_end.min(next_day);
        while current_start < current_end {
            let minutes = Decimal::from((current_end - current_start).whole_minutes());
            let day_price = minutes * rate;
            sum += day_price.min(cap);

            current_start = next_day;
            next_day += Duration::days(1);
            current_end = effective_end.min(next_day);
        }

        Ok(Price::new(sum))
    }
}

pub trait DependOnRentalCalculator: 'static + Sync + Send {
    fn rental_calculator(&self) -> &RentalCalculator;
}

#[cfg(test)]
mod test {
    use rust_decimal_macros::dec;
    use time::macros::datetime;
    use time::OffsetDateTime;

    use crate::entity::{Price, PricePerMinute, RentedAt, ReturnedAt};
    use crate::pricing::{DailyCap, RentalCalculator};
    use crate::KernelError;

    const NOW: OffsetDateTime = datetime!(2020-06-01 12:00:00 UTC);

    fn calculator() -> RentalCalculator {
        RentalCalculator::new(DailyCap::new(dec!(20)))
    }

    fn rate() -> PricePerMinute {
        PricePerMinute::new(dec!(1))
    }

    #[test]
    fn start_later_than_end_is_rejected() {
        let start = RentedAt::new(datetime!(2020-01-01 17:15:15 UTC));
        let end = ReturnedAt::new(datetime!(2020-01-01 15:15:15 UTC));

        let report = calculator()
            .calculate(&start, Some(&end), NOW, &rate())
            .expect_err("start is after end");

        assert!(matches!(
            report.current_context(),
            KernelError::InvalidRange
        ));
    }

    #[test]
    fn same_instant_yields_zero() {
        let start = RentedAt::new(datetime!(2020-01-01 17:15:15 UTC));
        let end = ReturnedAt::new(datetime!(2020-01-01 17:15:15 UTC));

        let price = calculator()
            .calculate(&start, Some(&end), NOW, &rate())
            .unwrap();

        assert_eq!(price, Price::new(dec!(0)));
    }

    #[test]
    fn same_day_under_cap() {
        let start = RentedAt::new(datetime!(2020-01-01 17:15:15 UTC));
        let end = ReturnedAt::new(datetime!(2020-01-01 17:25:15 UTC));

        let price = calculator()
            .calculate(&start, Some(&end), NOW, &rate())
            .unwrap();

        assert_eq!(price, Price::new(dec!(10)));
    }

    #[test]
    fn partial_minutes_are_not_charged() {
        let start = RentedAt::new(datetime!(2020-01-01 17:15:15 UTC));
        let end = ReturnedAt::new(datetime!(2020-01-01 17:25:55 UTC));

        let price = calculator()
            .calculate(&start, Some(&end), NOW, &rate())
            .unwrap();

        assert_eq!(price, Price::new(dec!(10)));
    }

    #[test]
    fn same_day_over_cap_is_capped() {
        let start = RentedAt::new(datetime!(2020-01-01 17:15:15 UTC));
        let end = ReturnedAt::new(datetime!(2020-01-01 17:55:15 UTC));

        let price = calculator()
            .calculate(&start, Some(&end), NOW, &rate())
            .unwrap();

        assert_eq!(price, Price::new(dec!(20)));
    }

    #[test]
    fn first_day_under_second_day_over_cap() {
        let start = RentedAt::new(datetime!(2020-01-01 23:55:00 UTC));
        let end = ReturnedAt::new(datetime!(2020-01-02 17:55:15 UTC));

        let price = calculator()
            .calculate(&start, Some(&end), NOW, &rate())
            .unwrap();

        // 5 minutes before midnight, capped second day
        assert_eq!(price, Price::new(dec!(25)));
    }

    #[test]
    fn first_day_over_last_day_under_cap() {
        let start = RentedAt::new(datetime!(2020-01-01 17:55:00 UTC));
        let end = ReturnedAt::new(datetime!(2020-01-02 00:10:15 UTC));

        let price = calculator()
            .calculate(&start, Some(&end), NOW, &rate())
            .unwrap();

        assert_eq!(price, Price::new(dec!(30)));
    }

    #[test]
    fn full_days_in_between_are_capped_independently() {
        let start = RentedAt::new(datetime!(2020-01-01 23:55:00 UTC));
        let end = ReturnedAt::new(datetime!(2020-01-04 00:10:15 UTC));

        let price = calculator()
            .calculate(&start, Some(&end), NOW, &rate())
            .unwrap();

        // 5 + 20 + 20 + 10, no cross-day discount
        assert_eq!(price, Price::new(dec!(55)));
    }

    #[test]
    fn every_day_over_cap() {
        let start = RentedAt::new(datetime!(2020-01-01 22:55:00 UTC));
        let end = ReturnedAt::new(datetime!(2020-01-04 22:10:15 UTC));

        let price = calculator()
            .calculate(&start, Some(&end), NOW, &rate())
            .unwrap();

        assert_eq!(price, Price::new(dec!(80)));
    }

    #[test]
    fn open_rental_is_priced_until_now() {
        let start = RentedAt::new(datetime!(2020-06-01 11:49:30 UTC));

        let open = calculator().calculate(&start, None, NOW, &rate()).unwrap();
        let closed = calculator()
            .calculate(&start, Some(&ReturnedAt::new(NOW)), NOW, &rate())
            .unwrap();

        assert_eq!(open, Price::new(dec!(10)));
        assert_eq!(open, closed);
    }

    #[test]
    fn fractional_rate_rounds_nothing() {
        let start = RentedAt::new(datetime!(2020-01-01 10:00:00 UTC));
        let end = ReturnedAt::new(datetime!(2020-01-01 10:15:00 UTC));

        let price = calculator()
            .calculate(
                &start,
                Some(&end),
                NOW,
                &PricePerMinute::new(dec!(0.25)),
            )
            .unwrap();

        assert_eq!(price, Price::new(dec!(3.75)));
    }
}
