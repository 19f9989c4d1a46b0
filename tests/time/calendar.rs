use rstest::*;
use sidereal::time::{calendar_to_jd, jd_to_calendar, CalendarDate};

#[test]
fn j2000_reference_epoch() {
    assert_eq!(calendar_to_jd(2000, 1, 1, 12, 0, 0, 0), 2_451_545.0);
    assert_eq!(
        jd_to_calendar(2_451_545.0),
        CalendarDate::try_new(2000, 1, 1, 12, 0, 0, 0).unwrap()
    );
}

#[rstest]
#[case(1582, 10, 15, 2_299_160.5)]
#[case(1858, 11, 17, 2_400_000.5)]
#[case(1900, 1, 1, 2_415_020.5)]
#[case(1972, 1, 1, 2_441_317.5)]
#[case(2017, 1, 1, 2_457_754.5)]
#[case(2100, 3, 1, 2_488_128.5)]
fn known_midnights(#[case] year: i32, #[case] month: u8, #[case] day: u8, #[case] jd: f64) {
    assert_eq!(calendar_to_jd(year, month, day, 0, 0, 0, 0), jd);
    let date = jd_to_calendar(jd);
    assert_eq!((date.year, date.month, date.day), (year, month, day));
    assert_eq!(date.nanoseconds_of_day(), 0);
}

#[test]
fn round_trip_gregorian() {
    // Sub-millisecond agreement over four centuries, every 37 days at varying times of day
    let start = calendar_to_jd(1600, 1, 1, 0, 0, 0, 0);
    for step in 0..4_000 {
        let jd = start + step as f64 * 37.0;
        let day = jd_to_calendar(jd);
        let hour = (step % 24) as u8;
        let minute = (step * 7 % 60) as u8;
        let second = (step * 13 % 60) as u8;
        let nanosecond = ((step as u64 * 123_456_789) % 1_000_000_000) as u32;
        let date = CalendarDate::try_new(
            day.year,
            day.month.into(),
            day.day.into(),
            hour.into(),
            minute.into(),
            second.into(),
            nanosecond.into(),
        )
        .unwrap();

        let back = jd_to_calendar(date.to_jd());
        let error_ns = back.nanoseconds_since(&date).abs();
        assert!(error_ns < 1_000_000, "{date} -> {back}: {error_ns} ns");
    }
}

#[test]
fn day_fraction() {
    let noon = calendar_to_jd(2024, 7, 4, 12, 0, 0, 0);
    let evening = calendar_to_jd(2024, 7, 4, 18, 0, 0, 0);
    let tick = calendar_to_jd(2024, 7, 4, 18, 0, 0, 500_000_000);
    assert_eq!(evening - noon, 0.25);
    assert!((tick - evening - 0.5 / 86_400.0).abs() < 1e-9);
}
