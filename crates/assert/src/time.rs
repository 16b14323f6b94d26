//! Time-proximity predicate over zone-independent instants.

use chrono::{DateTime, TimeDelta, TimeZone};

/// Whether `t1` and `t2` denote instants at most `max_distance` apart.
///
/// The comparison is over absolute instants, so the zone representations of
/// the two timestamps are irrelevant. The boundary is inclusive: a delta
/// exactly equal to `max_distance` counts as close enough, and a zero
/// `max_distance` requires exact instant equality. Nanosecond-level deltas are
/// honored precisely.
pub fn are_times_closer_than<Tz1, Tz2>(
    t1: &DateTime<Tz1>,
    t2: &DateTime<Tz2>,
    max_distance: TimeDelta,
) -> bool
where
    Tz1: TimeZone,
    Tz2: TimeZone,
{
    let delta = t1.clone().signed_duration_since(t2.clone()).abs();
    delta <= max_distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use proptest::prelude::*;

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 29, 18, 12, 55).unwrap()
    }

    #[test]
    fn identical_instants_are_close_under_zero_distance() {
        assert!(are_times_closer_than(&base(), &base(), TimeDelta::zero()));
    }

    #[test]
    fn identical_instants_are_close_under_any_distance() {
        assert!(are_times_closer_than(&base(), &base(), TimeDelta::seconds(1)));
    }

    #[test]
    fn delta_equal_to_the_distance_is_close() {
        let later = base() + TimeDelta::seconds(1);
        assert!(are_times_closer_than(&later, &base(), TimeDelta::seconds(1)));
        assert!(are_times_closer_than(&base(), &later, TimeDelta::seconds(1)));
    }

    #[test]
    fn delta_beyond_the_distance_is_not_close() {
        let later = base() + TimeDelta::seconds(2);
        assert!(!are_times_closer_than(&later, &base(), TimeDelta::seconds(1)));
        assert!(!are_times_closer_than(&base(), &later, TimeDelta::seconds(1)));
    }

    #[test]
    fn one_second_apart_is_not_closer_than_999_milliseconds() {
        let later = base() + TimeDelta::seconds(1);
        assert!(!are_times_closer_than(&later, &base(), TimeDelta::milliseconds(999)));
    }

    #[test]
    fn a_single_nanosecond_over_the_distance_is_not_close() {
        let later = base() + TimeDelta::seconds(1) + TimeDelta::nanoseconds(1);
        assert!(!are_times_closer_than(&later, &base(), TimeDelta::seconds(1)));
    }

    #[test]
    fn nonzero_delta_is_not_close_under_zero_distance() {
        let later = base() + TimeDelta::nanoseconds(1);
        assert!(!are_times_closer_than(&later, &base(), TimeDelta::zero()));
    }

    #[test]
    fn zone_representation_is_irrelevant() {
        let berlin = FixedOffset::east_opt(3600).unwrap();
        let london = FixedOffset::east_opt(0).unwrap();
        // Same instant written on two different clocks.
        let t1 = berlin.with_ymd_and_hms(2024, 11, 29, 18, 12, 55).unwrap();
        let t2 = london.with_ymd_and_hms(2024, 11, 29, 17, 12, 55).unwrap();
        assert!(are_times_closer_than(&t1, &t2, TimeDelta::zero()));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the predicate is symmetric in its timestamp arguments
        /// and agrees with a direct |delta| <= max comparison.
        #[test]
        fn symmetric_and_consistent_with_absolute_delta(
            offset_nanos in -2_000_000_000i64..2_000_000_000i64,
            max_nanos in 0i64..2_000_000_000i64,
        ) {
            let t1 = base();
            let t2 = t1 + TimeDelta::nanoseconds(offset_nanos);
            let max = TimeDelta::nanoseconds(max_nanos);

            let forward = are_times_closer_than(&t1, &t2, max);
            let backward = are_times_closer_than(&t2, &t1, max);
            prop_assert_eq!(forward, backward);
            prop_assert_eq!(forward, offset_nanos.abs() <= max_nanos);
        }
    }
}
