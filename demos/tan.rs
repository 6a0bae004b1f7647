use quadintir::callbacks::SimpleCumulativeCallback;
use quadintir::integrators::composite::{self, total};
use quadintir::{GaussKind, Integrand, Result, RuleSpec};

use std::f64::consts::FRAC_PI_3;
use tracing_subscriber::EnvFilter;

/// The integrand `tan(w * x)`.
struct Tan {
    w: f64,
}

impl Integrand<f64> for Tan {
    fn evaluate(&self, x: f64) -> f64 {
        (self.w * x).tan()
    }
}

fn main() -> Result<()> {
    // set `RUST_LOG=quadintir=debug` to see the rules being constructed
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // the rule can be given as JSON on the command line
    let spec = match std::env::args().nth(1) {
        Some(json) => RuleSpec::from_json(&json)?,
        None => RuleSpec::Gauss {
            kind: GaussKind::Legendre,
            order: 2,
        },
    };
    let rule = spec.build::<f64>()?;
    let integrand = Tan { w: 1.0 };

    // int_0^{pi/3} dx tan(x) = ln(2)
    let panels = composite::integrate(
        &rule,
        &integrand,
        0.0,
        FRAC_PI_3,
        100,
        4,
        &SimpleCumulativeCallback {},
    )?;

    let result = total(&panels);
    println!("\n--------------------------------------");
    println!("Rule: {:?}", spec);
    println!("Final result: {: >0.12}", result);
    println!("Exact result: {: >0.12}", std::f64::consts::LN_2);
    println!("Difference:   {: >0.3e}", result - std::f64::consts::LN_2);

    Ok(())
}
