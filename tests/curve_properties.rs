use lissajous::prelude::*;
use nannou::rand::random_range;

#[test]
fn positive_frequencies_always_construct() {
    for _ in 0..500 {
        let fx = random_range(1e-6, 50.0);
        let fy = random_range(1e-6, 50.0);

        assert!(BasicCurve::new(fx, fy, 0.0).is_ok());
        assert!(ModulatedCurve::new(fx, fy, 0.0, 0.5).is_ok());
    }
}

#[test]
fn non_positive_frequencies_rejected() {
    for v in [0.0, -0.0, -1.0, -1e-12, -1e9] {
        assert!(matches!(
            BasicCurve::new(v, 1.0, 0.0),
            Err(CurveError::InvalidParameter { name: "freq_x", .. })
        ));
        assert!(matches!(
            BasicCurve::new(1.0, v, 0.0),
            Err(CurveError::InvalidParameter { name: "freq_y", .. })
        ));

        let mut curve = ModulatedCurve::default();
        assert!(curve.set_freq_x(v).is_err());
        assert!(curve.set_freq_y(v).is_err());
        assert!(eps_eq(curve.freq_x(), 1.0));
        assert!(eps_eq(curve.freq_y(), 1.0));
    }
}

#[test]
fn phase_is_periodic() {
    let mut a = BasicCurve::default();
    let mut b = BasicCurve::default();

    for _ in 0..500 {
        let v = random_range(-100.0, 100.0);
        a.set_phase(v);
        b.set_phase(v + TAU);

        assert!((0.0..TAU).contains(&a.phase()));
        assert!((0.0..TAU).contains(&b.phase()));

        // both wrap to the same angle, allowing for the seam at 0/TAU
        let diff = (a.phase() - b.phase()).abs();
        assert!(diff < 1e-9 || (TAU - diff) < 1e-9, "{v}: {diff}");
    }
}

#[test]
fn modulation_accepts_exactly_unit_range() {
    let mut curve = ModulatedCurve::default();

    for _ in 0..200 {
        let inside = random_range(0.0, 1.0);
        assert!(curve.set_modulation(inside).is_ok());

        let below = -random_range(1e-9, 10.0);
        let above = 1.0 + random_range(1e-9, 10.0);
        assert!(curve.set_modulation(below).is_err());
        assert!(curve.set_modulation(above).is_err());
        assert!(eps_eq(curve.modulation(), inside));
    }

    assert!(curve.set_modulation(0.0).is_ok());
    assert!(curve.set_modulation(1.0).is_ok());
}

#[test]
fn basic_samples_stay_in_unit_range() {
    for _ in 0..20 {
        let curve = BasicCurve::new(
            random_range(0.1, 20.0),
            random_range(0.1, 20.0),
            random_range(-10.0, 10.0),
        )
        .unwrap();
        let points = curve.compute_points();

        assert_eq!(points.x.len(), SAMPLE_COUNT);
        assert_eq!(points.y.len(), SAMPLE_COUNT);
        assert!(points.max_abs() <= 1.0);
    }
}

#[test]
fn modulated_samples_stay_within_bound() {
    for _ in 0..20 {
        let modulation = random_range(0.0, 1.0);
        let curve = ModulatedCurve::new(
            random_range(0.1, 20.0),
            random_range(0.1, 20.0),
            random_range(-10.0, 10.0),
            modulation,
        )
        .unwrap();
        let points = curve.compute_points();

        assert_eq!(points.len(), SAMPLE_COUNT);
        assert!(points.max_abs() <= 1.0 + modulation);
        assert!(points.max_abs() <= curve.amplitude_bound());
    }
}

#[test]
fn first_sample_scenarios() {
    let basic = BasicCurve::new(3.0, 2.0, FRAC_PI_4).unwrap();
    let (x, y) = basic.compute_points().first().unwrap();
    assert!(within_tolerance(x, 0.7071, 1e-4));
    assert!(eps_eq(y, 0.0));

    let modulated = ModulatedCurve::new(4.0, 3.0, 0.0, 0.7).unwrap();
    let (x, y) = modulated.compute_points().first().unwrap();
    assert!(eps_eq(x, 0.0));
    assert!(eps_eq(y, 0.0));
}

#[test]
fn recovers_after_rejected_assignment() {
    let mut curve = BasicCurve::new(2.0, 2.0, 0.0).unwrap();

    let err = curve.set_freq_x(-1.0).unwrap_err();
    assert!(err.to_string().contains("frequency must be positive"));

    curve.set_freq_x(3.0).unwrap();
    let points = curve.compute_points();
    let t = curve.params().domain().as_slice();

    assert!(eps_eq(curve.freq_x(), 3.0));
    assert!(within_tolerance(points.x[100], (3.0 * t[100]).sin(), 1e-12));
}
