use hifitime::Epoch;
use sidereal::tables::{polar_motion, tai_minus_utc, ut1_minus_utc, EopError, EOP_TABLE, LEAP_SECONDS};
use sidereal::time::calendar_to_jd;

#[test]
fn leap_seconds_match_hifitime() {
    for year in 1972..2025 {
        for month in [3, 9] {
            let jd = calendar_to_jd(year, month, 15, 0, 0, 0, 0);
            let oracle = Epoch::from_gregorian_utc(year, month, 15, 0, 0, 0, 0).leap_seconds(true);
            assert_eq!(Some(tai_minus_utc(jd)), oracle, "{year}-{month}");
        }
    }
}

#[test]
fn leap_seconds_are_monotonic() {
    let mut prev = tai_minus_utc(2_441_000.0);
    for step in 0..20_000 {
        let jd = 2_441_000.0 + step as f64 * 0.9;
        let value = tai_minus_utc(jd);
        assert!(value >= prev);
        assert!(value == prev || value == prev + 1.0);
        prev = value;
    }
    for pair in LEAP_SECONDS.windows(2) {
        let threshold = pair[1].0;
        assert_ne!(tai_minus_utc(threshold - 1e-5), tai_minus_utc(threshold));
    }
}

#[test]
fn clamp_versus_range_error() {
    // Leap seconds clamp outside of their table, Earth orientation does not
    let (first, last) = EOP_TABLE.span();
    let before = first as f64 - 10.0;
    assert_eq!(tai_minus_utc(before + 2_400_000.5), 32.0);
    assert_eq!(tai_minus_utc(2_300_000.0), 10.0);
    assert_eq!(tai_minus_utc(2_500_000.0), 37.0);
    assert_eq!(
        ut1_minus_utc(before),
        Err(EopError::OutOfRange {
            mjd: before,
            first_mjd: first,
            last_mjd: last
        })
    );
    assert!(polar_motion(last as f64 + 0.5).is_err());
}

#[test]
fn eop_exact_on_grid() {
    let (first, last) = EOP_TABLE.span();
    for mjd in first..=last {
        let entry = EOP_TABLE.entry(mjd).unwrap();
        assert_eq!(ut1_minus_utc(mjd as f64).unwrap(), entry.ut1_minus_utc);
        assert_eq!(polar_motion(mjd as f64).unwrap(), (entry.x_p, entry.y_p));
        assert!(entry.ut1_minus_utc.abs() < 1.0);
        assert!(entry.x_p.abs() < 0.5 && entry.y_p.abs() < 0.7);
    }
}

#[test]
fn eop_interpolation_is_bounded() {
    let (first, last) = EOP_TABLE.span();
    for mjd in first..last {
        let before = EOP_TABLE.entry(mjd).unwrap().ut1_minus_utc;
        let after = EOP_TABLE.entry(mjd + 1).unwrap().ut1_minus_utc;
        let mid = ut1_minus_utc(mjd as f64 + 0.3).unwrap();
        assert!(mid >= before.min(after) && mid <= before.max(after));
    }
}
