use mathfn::prelude::*;

const SAMPLES: [f32; 7] = [0.0, 0.25, 0.5, 1.0, 2.0, 5.0, 10.0];

#[test]
fn test_backends_agree_within_four_ulps() {
    let platform = Backend::Std.cosh();
    let libm = Backend::Libm.cosh();

    for x in SAMPLES {
        let a = platform.eval(x);
        let b = libm.eval(x);
        let ulps = (a.to_bits() as i64 - b.to_bits() as i64).abs();
        assert!(ulps <= 4, "cosh({x}): platform={a} libm={b} ({ulps} ulps apart)");
    }
}

#[test]
fn test_backend_selection_by_name() {
    let backend: Backend = "libm".parse().unwrap();
    let function = backend.cosh();
    assert_eq!(function.backend(), Backend::Libm);
    assert_eq!(function.eval(0.0), 1.0);
}
