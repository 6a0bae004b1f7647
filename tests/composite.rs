use quadintir::callbacks::SinkCallback;
use quadintir::integrators::composite::{self, total};
use quadintir::{FejerRule, GaussKind, GaussRule, Integrand, RuleSpec};

use assert_approx_eq::assert_approx_eq;

/// The integrand `tan(w * x)`.
struct Tan {
    w: f64,
}

impl Integrand<f64> for Tan {
    // int_0^c dx tan(w x) = -ln(cos(w c)) / w
    fn evaluate(&self, x: f64) -> f64 {
        (self.w * x).tan()
    }
}

#[test]
fn tan_with_gauss_legendre() {
    use std::f64::consts::{FRAC_PI_3, FRAC_PI_4, LN_2};

    let rule = GaussRule::new(GaussKind::Legendre, 2).unwrap();
    let integrand = Tan { w: 1.0 };

    let panels = composite::integrate(&rule, &integrand, 0.0, FRAC_PI_3, 100, 1, &SinkCallback {})
        .unwrap();
    assert_eq!(panels.len(), 100);
    assert_approx_eq!(total(&panels), LN_2, 1e-3);

    let panels = composite::integrate(&rule, &integrand, 0.0, FRAC_PI_4, 100, 1, &SinkCallback {})
        .unwrap();
    assert_approx_eq!(total(&panels), 0.5 * LN_2, 1e-3);
}

#[test]
fn tan_with_every_rule_family() {
    use std::f64::consts::FRAC_PI_3;

    // tan(2x) on [0, pi/6] has the same integral as tan(x) on [0, pi/3], divided by two
    let integrand = Tan { w: 2.0 };
    let exact = -0.5 * (2.0 * FRAC_PI_3 / 2.0).cos().ln();

    let specs = [
        RuleSpec::Gauss {
            kind: GaussKind::Legendre,
            order: 5,
        },
        RuleSpec::Gauss {
            kind: GaussKind::Kronrod,
            order: 5,
        },
        RuleSpec::Fejer { order: 8 },
        RuleSpec::Fejer { order: 9 },
    ];

    for spec in &specs {
        let rule = spec.build::<f64>().unwrap();
        let panels = composite::integrate(
            &rule,
            &integrand,
            0.0,
            FRAC_PI_3 / 2.0,
            20,
            2,
            &SinkCallback {},
        )
        .unwrap();
        assert_approx_eq!(total(&panels), exact, 1e-12);
    }
}

#[test]
fn result_does_not_depend_on_cores() {
    let rule = FejerRule::new(7).unwrap();
    let integrand = |x: f64| (3.0 * x).sin() * x.exp();

    let reference =
        composite::integrate(&rule, &integrand, -1.0, 2.0, 37, 1, &SinkCallback {}).unwrap();

    for n_cores in 2..=8 {
        let panels =
            composite::integrate(&rule, &integrand, -1.0, 2.0, 37, n_cores, &SinkCallback {})
                .unwrap();

        assert_eq!(panels, reference);
        assert_eq!(total(&panels).to_bits(), total(&reference).to_bits());
    }
}

#[test]
fn more_cores_than_panels() {
    let rule = GaussRule::new(GaussKind::Kronrod, 3).unwrap();
    let panels =
        composite::integrate(&rule, &|x: f64| x * x, 0.0, 3.0, 3, 8, &SinkCallback {}).unwrap();

    assert_eq!(panels.len(), 3);
    assert_eq!(panels[0].a(), 0.0);
    assert_eq!(panels[2].b(), 3.0);
    assert_approx_eq!(total(&panels), 9.0);
}

#[test]
fn reversed_composite_interval() {
    let rule = GaussRule::new(GaussKind::Legendre, 4).unwrap();
    let f = |x: f64| x.cos();

    let forward = composite::integrate(&rule, &f, 0.0, 1.0, 10, 3, &SinkCallback {}).unwrap();
    let backward = composite::integrate(&rule, &f, 1.0, 0.0, 10, 3, &SinkCallback {}).unwrap();

    assert_approx_eq!(total(&forward), 1.0_f64.sin());
    assert_approx_eq!(total(&backward), -1.0_f64.sin());
}

#[test]
fn panels_serialize() {
    let rule = GaussRule::new(GaussKind::Legendre, 3).unwrap();
    let panels =
        composite::integrate(&rule, &|x: f64| x, 0.0, 1.0, 2, 1, &SinkCallback {}).unwrap();

    let json = serde_json::to_string(&panels).unwrap();
    let restored: Vec<composite::Panel<f64>> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, panels);
}
