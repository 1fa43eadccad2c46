pub fn assert_near(actual: f64, expected: f64, tolerance: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "expected {} ± {}, got {}",
        expected,
        tolerance,
        actual
    );
}
