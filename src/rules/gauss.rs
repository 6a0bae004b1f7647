//! Gauss-Legendre, Gauss-Kronrod and Gauss-Chebyshev rules.
use crate::core::error::{QuadratureError, Result};
use crate::core::{from_f64, from_usize, Quadrature, Real, Rule};
use crate::rules::tables::{KRONROD, LEGENDRE};

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// The kinds of rules a [`GaussRule`] can be built from.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GaussKind {
    /// Gauss-Legendre rule with `order` points, tabulated for orders 1 to 11.
    Legendre,
    /// Gauss-Kronrod rule with `2 * order + 1` points that extends the Gauss-Legendre rule of the
    /// same order, tabulated for orders 1 to 11.
    Kronrod,
    /// Gauss-Chebyshev rule with `order` points, available for every order.
    Chebyshev,
}

impl GaussKind {
    /// Returns the largest order that is available for this kind, or `None` if every positive
    /// order is supported.
    pub fn max_order(self) -> Option<usize> {
        match self {
            Self::Legendre => Some(LEGENDRE.len()),
            Self::Kronrod => Some(KRONROD.len()),
            Self::Chebyshev => None,
        }
    }

    /// Returns the number of points of the rule with the given `order`.
    pub const fn points(self, order: usize) -> usize {
        match self {
            Self::Kronrod => 2 * order + 1,
            Self::Legendre | Self::Chebyshev => order,
        }
    }
}

impl fmt::Display for GaussKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Legendre => "legendre",
            Self::Kronrod => "kronrod",
            Self::Chebyshev => "chebyshev",
        };
        f.write_str(name)
    }
}

impl FromStr for GaussKind {
    type Err = QuadratureError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legendre" => Ok(Self::Legendre),
            "kronrod" => Ok(Self::Kronrod),
            "chebyshev" => Ok(Self::Chebyshev),
            _ => Err(QuadratureError::UnknownKind {
                name: s.to_string(),
            }),
        }
    }
}

/// A Gauss-type quadrature rule of a given kind and order.
///
/// The serialized form contains the nodes and weights, but deserialization reads only `kind` and
/// `order` and rebuilds the rule with [`GaussRule::new`].
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct GaussRule<T> {
    kind: GaussKind,
    order: usize,
    rule: Rule<T>,
}

#[derive(Deserialize)]
struct GaussParameters {
    kind: GaussKind,
    order: usize,
}

impl<'de, T: Real> Deserialize<'de> for GaussRule<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let GaussParameters { kind, order } = GaussParameters::deserialize(deserializer)?;
        Self::new(kind, order).map_err(de::Error::custom)
    }
}

impl<T: Real> GaussRule<T> {
    /// Construct the rule of the given `kind` with `order` fundamental points.
    ///
    /// Legendre and Kronrod rules are looked up in tables for orders 1 to 11. The Chebyshev rule
    /// is given in closed form for every order $n$, with nodes and weights
    ///
    /// $$ x_i = \cos \left( \frac{2i-1}{2n} \pi \right), \quad w_i = \frac{\pi}{n} \sqrt{1 -
    /// x_i^2}, \quad i = 1, \ldots, n. $$
    ///
    /// This is the Gauss-Chebyshev rule for the weight function $1/\sqrt{1-x^2}$ applied to
    /// $f(x) \sqrt{1-x^2}$, so its weights only sum to $2$ in the limit of large $n$.
    ///
    /// # Errors
    ///
    /// Returns [`QuadratureError::InvalidOrder`] if `order` is zero and
    /// [`QuadratureError::UnsupportedConfiguration`] if `order` exceeds
    /// [`GaussKind::max_order`].
    pub fn new(kind: GaussKind, order: usize) -> Result<Self> {
        if order == 0 {
            return Err(QuadratureError::InvalidOrder { order });
        }

        let rule = match kind {
            GaussKind::Legendre => tabulated(&LEGENDRE, kind, order)?,
            GaussKind::Kronrod => tabulated(&KRONROD, kind, order)?,
            GaussKind::Chebyshev => chebyshev(order)?,
        };

        debug_assert_eq!(rule.len(), kind.points(order));
        debug!(%kind, order, points = rule.len(), "constructed Gauss rule");

        Ok(Self { kind, order, rule })
    }

    /// Returns the kind of this rule.
    pub const fn kind(&self) -> GaussKind {
        self.kind
    }

    /// Returns the order this rule was constructed with.
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Discard kind and order and return the nodes and weights.
    pub fn into_rule(self) -> Rule<T> {
        self.rule
    }
}

impl<T: Real> Quadrature<T> for GaussRule<T> {
    fn rule(&self) -> &Rule<T> {
        &self.rule
    }
}

fn tabulated<T: Real>(table: &[&[(f64, f64)]], kind: GaussKind, order: usize) -> Result<Rule<T>> {
    let half = table
        .get(order - 1)
        .ok_or(QuadratureError::UnsupportedConfiguration { kind, order })?;

    mirror(half)
}

/// Expand the non-negative half of a symmetric rule, stored from the largest node downwards,
/// into the full rule with ascending nodes.
fn mirror<T: Real>(half: &[(f64, f64)]) -> Result<Rule<T>> {
    let centre = half.last().map_or(false, |&(x, _)| x == 0.0);
    let negative = half
        .iter()
        .take(half.len() - usize::from(centre))
        .map(|&(x, w)| (-x, w));
    let positive = half.iter().rev().copied();

    let mut nodes = Vec::with_capacity(2 * half.len());
    let mut weights = Vec::with_capacity(2 * half.len());

    for (x, w) in negative.chain(positive) {
        nodes.push(from_f64(x)?);
        weights.push(from_f64(w)?);
    }

    Rule::new(nodes, weights)
}

fn chebyshev<T: Real>(order: usize) -> Result<Rule<T>> {
    let n = from_usize::<T>(order)?;
    let two = T::one() + T::one();
    let scale = T::PI() / n;

    let mut nodes = Vec::with_capacity(order);
    let mut weights = Vec::with_capacity(order);

    for i in 1..=order {
        let i = from_usize::<T>(i)?;
        let x = ((two * i - T::one()) / (two * n) * T::PI()).cos();
        nodes.push(x);
        weights.push(scale * (T::one() - x * x).sqrt());
    }

    Rule::new(nodes, weights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_deserialize_rebuilds() {
        // the stored nodes and weights do not enter the rebuilt rule
        let json = r#"{"kind":"kronrod","order":2,"rule":{"nodes":[0.0],"weights":[2.0]}}"#;
        let rule: GaussRule<f64> = serde_json::from_str(json).unwrap();
        assert_eq!(rule, GaussRule::new(GaussKind::Kronrod, 2).unwrap());
        assert_eq!(rule.rule().len(), 5);

        let error = serde_json::from_str::<GaussRule<f64>>(
            r#"{"kind":"legendre","order":12,"rule":{"nodes":[],"weights":[]}}"#,
        )
        .unwrap_err();
        assert!(error.to_string().contains("no legendre rule of order 12"));

        let error = serde_json::from_str::<GaussRule<f64>>(r#"{"kind":"chebyshev","order":0}"#);
        assert!(error.is_err());
    }

    #[test]
    fn test_mirror_odd_and_even() {
        let odd: Rule<f64> = mirror(&[(0.5, 0.25), (0.0, 1.5)]).unwrap();
        assert_eq!(odd.nodes(), &[-0.5, 0.0, 0.5]);
        assert_eq!(odd.weights(), &[0.25, 1.5, 0.25]);

        let even: Rule<f64> = mirror(&[(0.75, 0.5), (0.25, 0.5)]).unwrap();
        assert_eq!(even.nodes(), &[-0.75, -0.25, 0.25, 0.75]);
        assert_eq!(even.weights(), &[0.5, 0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_point_counts() {
        for order in 1..=11 {
            for &kind in &[GaussKind::Legendre, GaussKind::Kronrod, GaussKind::Chebyshev] {
                let rule = GaussRule::<f64>::new(kind, order).unwrap();
                assert_eq!(rule.rule().len(), kind.points(order));
                assert_eq!(rule.kind(), kind);
                assert_eq!(rule.order(), order);
            }
        }
    }

    #[test]
    fn test_kronrod_contains_legendre_nodes() {
        for order in 1..=11 {
            let legendre = GaussRule::<f64>::new(GaussKind::Legendre, order).unwrap();
            let kronrod = GaussRule::<f64>::new(GaussKind::Kronrod, order).unwrap();

            // the Gauss nodes sit at the odd positions of the Kronrod rule
            for (i, &x) in legendre.rule().nodes().iter().enumerate() {
                assert_approx_eq!(kronrod.rule().nodes()[2 * i + 1], x, 1e-15);
            }
        }
    }

    #[test]
    fn test_chebyshev_closed_form() {
        let rule = GaussRule::<f64>::new(GaussKind::Chebyshev, 2).unwrap();
        let x = std::f64::consts::FRAC_1_SQRT_2;

        assert_approx_eq!(rule.rule().nodes()[0], x, 1e-15);
        assert_approx_eq!(rule.rule().nodes()[1], -x, 1e-15);
        assert_approx_eq!(rule.rule().weights()[0], std::f64::consts::FRAC_PI_2 * x, 1e-15);
        assert_approx_eq!(rule.rule().weights()[1], std::f64::consts::FRAC_PI_2 * x, 1e-15);
    }

    #[test]
    fn test_unsupported_orders() {
        for &kind in &[GaussKind::Legendre, GaussKind::Kronrod] {
            assert!(matches!(
                GaussRule::<f64>::new(kind, 12),
                Err(QuadratureError::UnsupportedConfiguration { order: 12, .. })
            ));
        }

        assert!(matches!(
            GaussRule::<f64>::new(GaussKind::Chebyshev, 0),
            Err(QuadratureError::InvalidOrder { order: 0 })
        ));
        assert!(GaussRule::<f64>::new(GaussKind::Chebyshev, 1000).is_ok());
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("Legendre".parse::<GaussKind>().unwrap(), GaussKind::Legendre);
        assert_eq!(" kronrod ".parse::<GaussKind>().unwrap(), GaussKind::Kronrod);
        assert_eq!(
            GaussKind::Chebyshev.to_string().parse::<GaussKind>().unwrap(),
            GaussKind::Chebyshev
        );
        assert!(matches!(
            "lobatto".parse::<GaussKind>(),
            Err(QuadratureError::UnknownKind { .. })
        ));
    }

    #[test]
    fn test_single_precision() {
        let rule = GaussRule::<f32>::new(GaussKind::Legendre, 5).unwrap();
        assert!((rule.rule().weight_sum() - 2.0).abs() < 1e-6);
    }
}
