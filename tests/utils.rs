extern crate nalgebra as na;
extern crate sidereal;

#[test]
fn elementary_rotations() {
    use self::na::{Matrix3, Vector3};
    use sidereal::utils::{r1, r2, r3};
    use std::f64::consts::FRAC_PI_2;

    assert_eq!(r1(0.0), Matrix3::identity());
    // Rotating the frame by +90 degrees moves the vectors by -90 degrees
    let y = r3(FRAC_PI_2) * Vector3::x();
    assert!((y - Vector3::new(0.0, -1.0, 0.0)).norm() < 1e-15);
    let z = r1(FRAC_PI_2) * Vector3::y();
    assert!((z - Vector3::new(0.0, 0.0, -1.0)).norm() < 1e-15);
    let x = r2(FRAC_PI_2) * Vector3::z();
    assert!((x - Vector3::new(-1.0, 0.0, 0.0)).norm() < 1e-15);

    for angle in [-2.0, 0.3, 1.0] {
        assert!((r1(angle) * r1(-angle) - Matrix3::identity()).norm() < 1e-15);
        assert_eq!(r2(angle).transpose(), r2(-angle));
    }
}

#[test]
fn orthogonality() {
    use self::na::Matrix3;
    use sidereal::utils::{is_orthogonal, r1, r3};

    assert!(is_orthogonal(&(r1(0.4) * r3(-1.2)), 1e-15));
    assert!(!is_orthogonal(&Matrix3::new(1.0, 0.1, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0), 1e-3));
    assert!(!is_orthogonal(&(Matrix3::identity() * 2.0), 1e-3));
}

#[test]
fn angles() {
    use sidereal::utils::{arcsec_to_rad, dms_to_rad, RAD_TO_ARCSEC};

    assert_eq!(arcsec_to_rad(RAD_TO_ARCSEC), 1.0);
    assert!((dms_to_rad(23.0, 26.0, 21.448) - 0.409_092_804).abs() < 1e-9);
    assert!((arcsec_to_rad(3_600.0) - 1f64.to_radians()).abs() < 1e-16);
}
