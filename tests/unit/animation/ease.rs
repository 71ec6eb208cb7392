use super::*;

const ALL: [Ease; 3] = [Ease::Linear, Ease::InOutSine, Ease::ENTRANCE];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-9);
        assert_eq!(ease.apply(-3.0), 0.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn in_out_sine_is_symmetric() {
    let e = Ease::InOutSine;
    assert!((e.apply(0.5) - 0.5).abs() < 1e-12);
    assert!((e.apply(0.2) + e.apply(0.8) - 1.0).abs() < 1e-12);
}

#[test]
fn linear_bezier_is_identity() {
    let e = Ease::CubicBezier {
        x1: 0.0,
        y1: 0.0,
        x2: 1.0,
        y2: 1.0,
    };
    for t in [0.1, 0.33, 0.5, 0.9] {
        assert!((e.apply(t) - t).abs() < 1e-5);
    }
}

#[test]
fn entrance_curve_decelerates() {
    assert!(Ease::ENTRANCE.apply(0.5) > 0.5);
    assert!(Ease::ENTRANCE.validate().is_ok());
}

#[test]
fn bezier_rejects_out_of_range_x() {
    let bad = Ease::CubicBezier {
        x1: 1.5,
        y1: 0.0,
        x2: 0.5,
        y2: 1.0,
    };
    assert!(bad.validate().is_err());
}
