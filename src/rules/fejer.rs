//! Fejér's first and second quadrature rules.
//!
//! Both rules use the zeros or extrema of Chebyshev polynomials as nodes and derive their weights
//! from a trigonometric series, so they are available for every positive order. Computing the
//! weights costs $O(n^2)$ operations, which is paid once when the rule is constructed.
use crate::core::error::{QuadratureError, Result};
use crate::core::{from_usize, Quadrature, Real, Rule};

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use tracing::debug;

/// Selects one of Fejér's two formulas.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FejerFormula {
    /// Fejér's first rule, with the zeros of the Chebyshev polynomial $T_n$ as nodes:
    ///
    /// $$ \theta_i = \frac{(2i-1) \pi}{2n}, \quad w_i = \frac{2}{n} \left( 1 - 2
    /// \sum_{m=1}^{\lfloor n/2 \rfloor} \frac{\cos (2m\theta_i)}{4m^2-1} \right). $$
    First,
    /// Fejér's second rule, with the interior extrema of the Chebyshev polynomial $T_{n+1}$ as
    /// nodes:
    ///
    /// $$ \theta_i = \frac{i \pi}{n+1}, \quad w_i = \frac{4 \sin \theta_i}{n+1}
    /// \sum_{m=1}^{\lceil n/2 \rceil} \frac{\sin ((2m-1) \theta_i)}{2m-1}. $$
    Second,
}

impl FejerFormula {
    /// Returns the formula [`FejerRule::new`] uses for `order`: the first one for even and the
    /// second one for odd orders.
    pub const fn for_order(order: usize) -> Self {
        if order % 2 == 0 {
            Self::First
        } else {
            Self::Second
        }
    }
}

impl fmt::Display for FejerFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Second => f.write_str("second"),
        }
    }
}

/// A Fejér quadrature rule with nodes $x_i = \cos \theta_i$, $i = 1, \ldots, n$.
///
/// Like [`GaussRule`](crate::rules::GaussRule), a deserialized rule is rebuilt from its `formula`
/// and `order`.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct FejerRule<T> {
    formula: FejerFormula,
    order: usize,
    rule: Rule<T>,
}

#[derive(Deserialize)]
struct FejerParameters {
    formula: FejerFormula,
    order: usize,
}

impl<'de, T: Real> Deserialize<'de> for FejerRule<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let FejerParameters { formula, order } = FejerParameters::deserialize(deserializer)?;
        Self::with_formula(formula, order).map_err(de::Error::custom)
    }
}

impl<T: Real> FejerRule<T> {
    /// Construct the Fejér rule with `order` points, choosing the formula by the parity of
    /// `order` as given by [`FejerFormula::for_order`].
    ///
    /// # Errors
    ///
    /// Returns [`QuadratureError::InvalidOrder`] if `order` is zero.
    pub fn new(order: usize) -> Result<Self> {
        Self::with_formula(FejerFormula::for_order(order), order)
    }

    /// Construct the Fejér rule with `order` points using the given `formula`. Both formulas are
    /// valid for every positive order.
    ///
    /// # Errors
    ///
    /// Returns [`QuadratureError::InvalidOrder`] if `order` is zero.
    pub fn with_formula(formula: FejerFormula, order: usize) -> Result<Self> {
        if order == 0 {
            return Err(QuadratureError::InvalidOrder { order });
        }

        let rule = match formula {
            FejerFormula::First => first(order)?,
            FejerFormula::Second => second(order)?,
        };

        debug!(%formula, order, "constructed Fejér rule");

        Ok(Self {
            formula,
            order,
            rule,
        })
    }

    /// Returns the formula this rule was derived with.
    pub const fn formula(&self) -> FejerFormula {
        self.formula
    }

    /// Returns the number of points.
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Discard formula and order and return the nodes and weights.
    pub fn into_rule(self) -> Rule<T> {
        self.rule
    }
}

impl<T: Real> Quadrature<T> for FejerRule<T> {
    fn rule(&self) -> &Rule<T> {
        &self.rule
    }
}

fn first<T: Real>(order: usize) -> Result<Rule<T>> {
    let n = from_usize::<T>(order)?;
    let one = T::one();
    let two = one + one;
    let four = two + two;

    let mut nodes = Vec::with_capacity(order);
    let mut weights = Vec::with_capacity(order);

    for i in 1..=order {
        let theta = (two * from_usize::<T>(i)? - one) * T::PI() / (two * n);

        let mut sum = T::zero();
        for m in 1..=order / 2 {
            let m = from_usize::<T>(m)?;
            sum = sum + (two * m * theta).cos() / (four * m * m - one);
        }

        nodes.push(theta.cos());
        weights.push(two / n * (one - two * sum));
    }

    Rule::new(nodes, weights)
}

fn second<T: Real>(order: usize) -> Result<Rule<T>> {
    let n1 = from_usize::<T>(order + 1)?;
    let one = T::one();
    let two = one + one;
    let four = two + two;

    let mut nodes = Vec::with_capacity(order);
    let mut weights = Vec::with_capacity(order);

    for i in 1..=order {
        let theta = from_usize::<T>(i)? * T::PI() / n1;

        // for odd orders the last term is m = (n + 1) / 2; without it a single-point rule
        // would have a vanishing weight
        let mut sum = T::zero();
        for m in 1..=(order + 1) / 2 {
            let k = two * from_usize::<T>(m)? - one;
            sum = sum + (k * theta).sin() / k;
        }

        nodes.push(theta.cos());
        weights.push(four * theta.sin() / n1 * sum);
    }

    Rule::new(nodes, weights)
}
