use crate::{init_logger, ts};
use hifitime::Epoch;
use sidereal::tables::EopError;
use sidereal::time::{CalendarDate, CalendarError, Duration, Timestamp, TimestampConfig};
use sidereal::SiderealError;

#[test]
fn invalid_fields() {
    for (fields, field) in [
        ([2023_i64, 13, 1, 0, 0, 0, 0], "month"),
        ([2023, 0, 1, 0, 0, 0, 0], "month"),
        ([2023, 2, 29, 0, 0, 0, 0], "day"),
        ([2023, 4, 31, 0, 0, 0, 0], "day"),
        ([2023, 4, 30, 24, 0, 0, 0], "hour"),
        ([2023, 4, 30, 23, 60, 0, 0], "minute"),
        ([2023, 4, 30, 23, 59, 60, 0], "second"),
        ([2023, 4, 30, 23, 59, 59, 1_000_000_000], "nanosecond"),
        ([2023, 4, 30, 23, 59, -1, 0], "second"),
    ] {
        match Timestamp::from_fields(&fields) {
            Err(SiderealError::Calendar {
                source: CalendarError::FieldOutOfRange { field: got, .. },
            }) => assert_eq!(got, field, "{fields:?}"),
            other => panic!("{fields:?} should be invalid, got {other:?}"),
        }
    }
    assert!(Timestamp::from_ymd(2024, 2, 29).is_ok());
}

#[test]
fn field_arity() {
    for count in [0, 1, 2, 8] {
        let fields = vec![1; count];
        assert_eq!(
            Timestamp::from_fields(&fields),
            Err(SiderealError::Calendar {
                source: CalendarError::UnsupportedArity { count }
            })
        );
    }

    let full = Timestamp::from_gregorian(2022, 5, 17, 0, 0, 0, 0).unwrap();
    assert_eq!(Timestamp::from_fields(&[2022, 5, 17]).unwrap(), full);
    assert_eq!(Timestamp::from_fields(&[2022, 5, 17, 0, 0]).unwrap(), full);
    let with_ns = Timestamp::from_fields(&[2022, 5, 17, 6, 7, 8, 9]).unwrap();
    assert_eq!(with_ns.nanosecond(), 9);
    assert_eq!(with_ns.second(), 8);
}

#[test]
fn config_builder_defaults_to_midnight() {
    let cfg = TimestampConfig::builder().year(2022).month(5).day(17).build();
    assert_eq!(cfg.hour, 0);
    assert_eq!(cfg.nanosecond, 0);
    assert_eq!(
        Timestamp::try_from(cfg).unwrap(),
        Timestamp::from_ymd(2022, 5, 17).unwrap()
    );
}

#[test]
fn time_scales() {
    let t = ts(2020, 6, 15, 12, 0, 0);
    assert_eq!(t.tai_minus_utc(), 37.0);
    assert!((t.jd_tai() - t.jd_utc() - 37.0 / 86_400.0).abs() < 1e-9);
    assert!((t.jd_tt() - t.jd_tai() - 32.184 / 86_400.0).abs() < 1e-9);
    assert!((t.jd_ut1() - t.jd_utc() - t.ut1_minus_utc() / 86_400.0).abs() < 1e-9);
    assert!(t.ut1_minus_utc().abs() < 0.9);

    for (jd, mjd) in [
        (t.jd_utc(), t.mjd_utc()),
        (t.jd_ut1(), t.mjd_ut1()),
        (t.jd_tai(), t.mjd_tai()),
        (t.jd_tt(), t.mjd_tt()),
    ] {
        assert_eq!(jd - 2_400_000.5, mjd);
    }
    assert_eq!(t.mjd_utc(), 59_015.5);
    assert_eq!(t.centuries_tt(), (t.jd_tt() - 2_451_545.0) / 36_525.0);
}

#[test]
fn vallado_epoch() {
    // Vallado, example 3-15: 2004 April 06, 07:51:28.386009 UTC
    let t = Timestamp::from_gregorian(2004, 4, 6, 7, 51, 28, 386_009_000).unwrap();
    assert_eq!(t.tai_minus_utc(), 32.0);
    assert!((t.centuries_tt() - 0.042_623_631_9).abs() < 1e-10);
    assert!((t.delta_psi().to_degrees() - -0.003_410_8).abs() < 1e-7);
    assert!((t.delta_eps().to_degrees() - 0.002_031_6).abs() < 1e-7);
    assert!((t.mean_obliquity().to_degrees() - 23.438_736_8).abs() < 1e-7);
    // IERS orientation of that day, interpolated a third of a day further
    assert!((t.ut1_minus_utc() - -0.439_961_9).abs() < 1e-3);
    let (x_p, y_p) = t.polar_motion();
    assert!((x_p - -0.140_682).abs() < 1e-2);
    assert!((y_p - 0.333_309).abs() < 1e-2);
}

#[test]
fn sidereal_angles() {
    let t = ts(2024, 3, 20, 3, 6, 0);
    assert!((0.0..std::f64::consts::TAU).contains(&t.gmst()));
    assert_eq!(t.equation_of_equinoxes(), t.gast() - t.gmst());
    // The equation of the equinoxes never exceeds ~1.2 s of time
    assert!(t.equation_of_equinoxes().abs().to_degrees() * 3_600.0 < 18.0);
}

#[test]
fn eop_range_is_enforced() {
    let err = Timestamp::from_ymd(1999, 6, 1).unwrap_err();
    assert!(matches!(
        err,
        SiderealError::Orientation {
            source: EopError::OutOfRange { .. }
        }
    ));
    assert!(Timestamp::from_ymd(2030, 1, 1).is_err());
    // Both ends of the table are usable
    assert!(Timestamp::from_ymd(2000, 1, 1).is_ok());
    assert!(Timestamp::from_ymd(2028, 1, 1).is_ok());
}

#[test]
fn add_duration() {
    init_logger();
    let t = ts(2024, 1, 31, 6, 30, 0);
    let next = (t + Duration::from_days(1)).unwrap();
    assert_eq!((next.year(), next.month(), next.day()), (2024, 2, 1));
    assert!((next.jd_utc() - t.jd_utc() - 1.0).abs() < 1e-9);
    assert!(!next.crosses_leap_second(&t));

    let later = (t + Duration::new(0, 1, 0, 20, 45, 30, 1_500_000_000)).unwrap();
    assert_eq!(later, (ts(2024, 3, 3, 3, 15, 31) + Duration::from_seconds_f64(0.5)).unwrap());

    let back = (next - Duration::from_days(1)).unwrap();
    assert_eq!(back, t);
}

#[test]
fn add_across_leap_second() {
    init_logger();
    let t = ts(2016, 12, 31, 12, 0, 0);
    let next = (t + Duration::from_days(1)).unwrap();
    assert!(next.crosses_leap_second(&t));
    assert_eq!(next.tai_minus_utc() - t.tai_minus_utc(), 1.0);
    // The UTC Julian Date moves by a day, TAI by a day and a second
    assert!((next.jd_utc() - t.jd_utc() - 1.0).abs() < 1e-9);
    assert!((next.jd_tai() - t.jd_tai() - 86_401.0 / 86_400.0).abs() < 1e-8);
}

#[test]
fn difference() {
    let t1 = ts(2021, 3, 1, 0, 0, 0);
    let t2 = Timestamp::from_gregorian(2021, 3, 2, 2, 3, 4, 5).unwrap();
    assert_eq!(t2 - t1, Duration::new(0, 0, 1, 2, 3, 4, 5));
    assert_eq!(t1 - t2, Duration::new(0, 0, -1, -2, -3, -4, -5));
    assert_eq!((t1 + (t2 - t1)).unwrap(), t2);
    assert!(t1 < t2);
    assert!(t2 >= t1);
}

#[test]
fn julian_date_reconstruction() {
    let t = Timestamp::from_gregorian(2019, 11, 5, 17, 4, 33, 250_000_000).unwrap();
    let rebuilt = Timestamp::from_jd_utc(t.jd_utc()).unwrap();
    assert!((rebuilt - t).total_nanoseconds().abs() < 100_000);
    let from_mjd = Timestamp::from_mjd_utc(t.mjd_utc()).unwrap();
    assert!((from_mjd - t).total_nanoseconds().abs() < 100_000);
}

#[test]
fn hifitime_interop() {
    let t = Timestamp::from_gregorian(2012, 6, 30, 12, 34, 56, 123_456_789).unwrap();
    let epoch = Epoch::from(t);
    assert_eq!(Timestamp::from_epoch(epoch).unwrap(), t);
    assert_eq!(epoch.leap_seconds(true), Some(t.tai_minus_utc()));

    match Timestamp::now() {
        Ok(now) => assert!(now.year() >= 2000),
        Err(e) => println!("system clock not usable: {e}"),
    }
}

#[test]
fn display() {
    let t = Timestamp::from_gregorian(2001, 2, 3, 4, 5, 6, 7).unwrap();
    assert_eq!(format!("{t}"), "2001-02-03T04:05:06.000000007 UTC");
}

#[test]
fn add_huge_duration() {
    let t = ts(2024, 1, 31, 6, 30, 0);

    // Ten billion days lands in year 27381094, far past the EOP table, in constant time
    let start = std::time::Instant::now();
    let err = (t + Duration::from_days(10_000_000_000)).unwrap_err();
    assert!(matches!(
        err,
        SiderealError::Orientation {
            source: EopError::OutOfRange { .. }
        }
    ));
    assert!(start.elapsed().as_millis() < 500);

    assert_eq!(
        (t + Duration::from_days(i64::MAX)).unwrap_err(),
        SiderealError::Calendar {
            source: CalendarError::Overflow { field: "day" }
        }
    );
    assert_eq!(
        (t + Duration::from_minutes(i64::MAX)).unwrap_err(),
        SiderealError::Calendar {
            source: CalendarError::Overflow { field: "minute" }
        }
    );
    assert_eq!(
        (t - Duration::from_days(i64::MIN)).unwrap_err(),
        SiderealError::Calendar {
            source: CalendarError::Overflow { field: "day" }
        }
    );

    for duration in [
        Duration::from_days(i64::MIN),
        Duration::from_days(i64::MAX - 31),
        Duration::from_hours(-i64::MAX),
        Duration::from_seconds(i64::MAX - 60),
        Duration::from_years(i64::MAX - 2024),
    ] {
        match (t + duration).unwrap_err() {
            SiderealError::Calendar {
                source: CalendarError::FieldOutOfRange { field, .. },
            } => assert_eq!(field, "year", "{duration}"),
            err => panic!("unexpected error for {duration}: {err}"),
        }
    }
}

#[test]
fn unnormalized_calendar_is_rejected() {
    let date = ts(2024, 1, 31, 6, 30, 0).date();
    for (invalid, field) in [
        (CalendarDate { month: 0, ..date }, "month"),
        (CalendarDate { month: 13, ..date }, "month"),
        (CalendarDate { day: 40, ..date }, "day"),
        (CalendarDate { month: 2, day: 30, ..date }, "day"),
        (CalendarDate { hour: 24, ..date }, "hour"),
        (CalendarDate { second: 60, ..date }, "second"),
        (
            CalendarDate {
                nanosecond: 1_000_000_000,
                ..date
            },
            "nanosecond",
        ),
    ] {
        match Timestamp::from_calendar(invalid) {
            Err(SiderealError::Calendar {
                source: CalendarError::FieldOutOfRange { field: actual, .. },
            }) => assert_eq!(actual, field),
            other => panic!("expected {field} to be rejected, got {other:?}"),
        }
    }
    assert!(Timestamp::from_calendar(date).is_ok());
}
