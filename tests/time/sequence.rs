use crate::{init_logger, ts};
use rstest::*;
use sidereal::time::{
    gast_batch, itrf_to_j2000_batch, j2000_to_itrf_batch, timestamp_arange, timestamp_linspace,
    Duration, SequenceError, TimestampSeries,
};
use sidereal::SiderealError;

#[rstest]
#[case(2)]
#[case(7)]
#[case(100)]
fn linspace(#[case] num: usize) {
    init_logger();
    let start = ts(2021, 1, 1, 0, 0, 0);
    let end = ts(2021, 1, 4, 6, 0, 0);
    let series = timestamp_linspace(start, end, num).unwrap();

    assert_eq!(series.len(), num);
    assert_eq!(series[0].jd_utc(), start.jd_utc());
    assert_eq!(series[num - 1].jd_utc(), end.jd_utc());

    let step = (end.jd_utc() - start.jd_utc()) / (num - 1) as f64;
    for pair in series.windows(2) {
        let delta = pair[1].jd_utc() - pair[0].jd_utc();
        assert!((delta - step).abs() < 1e-8, "{delta} != {step}");
    }
}

#[test]
fn linspace_needs_two_points() {
    let start = ts(2021, 1, 1, 0, 0, 0);
    for num in [0, 1] {
        assert_eq!(
            timestamp_linspace(start, start, num),
            Err(SiderealError::Sequence {
                source: SequenceError::TooFewPoints { num }
            })
        );
    }
}

#[test]
fn arange_daily() {
    init_logger();
    let start = ts(2021, 1, 1, 0, 0, 0);
    let end = (start + Duration::from_days(5)).unwrap();
    let series = timestamp_arange(start, end, Duration::from_days(1)).unwrap();

    assert_eq!(series.len(), 5);
    assert_eq!(series[0], start);
    for (day, timestamp) in series.iter().enumerate() {
        assert!(timestamp < &end);
        assert!(timestamp.jd_utc() < end.jd_utc());
        assert!((timestamp.jd_utc() - start.jd_utc() - day as f64).abs() < 1e-9);
    }
}

#[test]
fn arange_partial_steps() {
    let start = ts(2021, 1, 1, 0, 0, 0);
    let end = ts(2021, 1, 1, 5, 0, 0);
    // Five hours by 90 minutes: three whole steps
    let series = timestamp_arange(start, end, Duration::from_minutes(90)).unwrap();
    assert_eq!(series.len(), 3);
    assert_eq!(series[2].hour(), 3);
    assert!(series.iter().all(|t| t < &end));

    // Nothing when the end is not after the start
    assert!(timestamp_arange(end, start, Duration::from_hours(1))
        .unwrap()
        .is_empty());
    assert!(timestamp_arange(start, start, Duration::from_hours(1))
        .unwrap()
        .is_empty());
}

#[test]
fn arange_rejects_non_positive_step() {
    let start = ts(2021, 1, 1, 0, 0, 0);
    let end = ts(2021, 1, 2, 0, 0, 0);
    for step in [Duration::ZERO, Duration::from_hours(-1)] {
        assert_eq!(
            timestamp_arange(start, end, step),
            Err(SiderealError::Sequence {
                source: SequenceError::NonPositiveStep { step }
            })
        );
    }
}

#[test]
fn series_is_restartable() {
    let start = ts(2022, 8, 1, 0, 0, 0);
    let end = ts(2022, 8, 2, 0, 0, 0);
    let series = TimestampSeries::linspace(start, end, 9).unwrap();
    assert_eq!(series.iter().len(), 9);

    let first: Vec<_> = series.iter().map(|t| t.unwrap()).collect();
    let second: Vec<_> = series.into_iter().map(|t| t.unwrap()).collect();
    assert_eq!(first, second);
    assert_eq!(first, series.par_collect().unwrap());
    assert!(series.get(9).is_none());
}

#[test]
fn batches_preserve_order() {
    let start = ts(2023, 5, 1, 0, 0, 0);
    let end = ts(2023, 5, 31, 0, 0, 0);
    let series = timestamp_linspace(start, end, 31).unwrap();

    let itrf_to_j2000 = itrf_to_j2000_batch(&series);
    let j2000_to_itrf = j2000_to_itrf_batch(&series);
    let gast = gast_batch(&series);
    assert_eq!(itrf_to_j2000.len(), series.len());
    for (idx, timestamp) in series.iter().enumerate() {
        assert_eq!(itrf_to_j2000[idx], timestamp.itrf_to_j2000());
        assert_eq!(j2000_to_itrf[idx], timestamp.j2000_to_itrf());
        assert_eq!(gast[idx], timestamp.gast());
    }
}
