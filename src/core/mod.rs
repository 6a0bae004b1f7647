//! The core module
pub mod error;

use crate::core::error::{QuadratureError, Result};
use num_traits::{Float, FloatConst, FromPrimitive};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt::Debug;
use std::ops::Range;

/// Numeric types the rules and integrators of this crate can work with.
///
/// This is implemented automatically for every type that fulfills the bounds, in particular
/// `f32` and `f64`.
pub trait Real: Float + FloatConst + FromPrimitive + Debug + Send + Sync {}

impl<T> Real for T where T: Float + FloatConst + FromPrimitive + Debug + Send + Sync {}

/// Converts a tabulated `f64` constant into `T`.
pub(crate) fn from_f64<T: Real>(value: f64) -> Result<T> {
    T::from_f64(value).ok_or(QuadratureError::NumericConversion { value })
}

/// Converts an index or order into `T`.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn from_usize<T: Real>(value: usize) -> Result<T> {
    T::from_usize(value).ok_or(QuadratureError::NumericConversion {
        value: value as f64,
    })
}

/// Integrand trait
pub trait Integrand<T>: Send + Sync {
    /// Evaluate the integrand at the point `x`.
    fn evaluate(&self, x: T) -> T;
}

impl<T, F> Integrand<T> for F
where
    F: Fn(T) -> T + Send + Sync,
{
    fn evaluate(&self, x: T) -> T {
        self(x)
    }
}

/// Abscissas and weights of a quadrature rule on the reference interval $[-1, 1]$.
///
/// A rule is immutable once constructed; building a rule of a different kind or order means
/// constructing a new value. Deserialization goes through [`Rule::new`] and therefore rejects
/// empty rules and rules whose nodes and weights differ in length.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Rule<T> {
    nodes: Vec<T>,
    weights: Vec<T>,
}

/// Serialized form of a [`Rule`] before validation.
#[derive(Deserialize)]
struct RawRule<T> {
    nodes: Vec<T>,
    weights: Vec<T>,
}

impl<'de, T> Deserialize<'de> for Rule<T>
where
    T: Real + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawRule::deserialize(deserializer)?;
        Self::new(raw.nodes, raw.weights).map_err(de::Error::custom)
    }
}

impl<T: Real> Rule<T> {
    /// Construct a rule from its `nodes` and the corresponding `weights`. Both must have the
    /// same, non-zero length.
    ///
    /// # Errors
    ///
    /// Returns [`QuadratureError::EmptyRule`] if `nodes` is empty and
    /// [`QuadratureError::LengthMismatch`] if the lengths differ.
    pub fn new(nodes: Vec<T>, weights: Vec<T>) -> Result<Self> {
        if nodes.len() != weights.len() {
            return Err(QuadratureError::LengthMismatch {
                nodes: nodes.len(),
                weights: weights.len(),
            });
        }

        if nodes.is_empty() {
            return Err(QuadratureError::EmptyRule);
        }

        Ok(Self { nodes, weights })
    }

    /// Returns the abscissas on $[-1, 1]$.
    pub fn nodes(&self) -> &[T] {
        &self.nodes
    }

    /// Returns the weights, paired with [`Rule::nodes`] by index.
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Returns the number of points, $L$.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Neither [`Rule::new`] nor deserialization produce a rule without points, so this is
    /// always `false`.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns $\sum_i w_i$, which is the length of the reference interval, $2$, for every rule
    /// that integrates constants exactly.
    pub fn weight_sum(&self) -> T {
        self.weights.iter().fold(T::zero(), |sum, &w| sum + w)
    }
}

/// Common interface of everything that owns a [`Rule`].
pub trait Quadrature<T: Real>: Sync {
    /// Returns the underlying nodes and weights.
    fn rule(&self) -> &Rule<T>;

    /// Approximate the integral of `integrand` from `a` to `b`.
    ///
    /// See [`evaluate`] for the conventions regarding `a == b` and `a > b`.
    fn integrate<I>(&self, integrand: &I, a: T, b: T) -> T
    where
        I: Integrand<T> + ?Sized,
    {
        let rule = self.rule();
        evaluate(rule.nodes(), rule.weights(), integrand, a, b)
    }
}

impl<T: Real> Quadrature<T> for Rule<T> {
    fn rule(&self) -> &Self {
        self
    }
}

/// Apply the rule given by `nodes` and `weights` to `integrand` over $[a, b]$.
///
/// Each node $x_i$ is mapped affinely into the target interval and the weighted sum is scaled by
/// the half-length of the interval:
///
/// $$ \int_a^b f(x) \, \mathrm{d} x \approx \frac{b-a}{2} \sum_{i=1}^L w_i f \left( \frac{b-a}{2}
/// x_i + \frac{a+b}{2} \right) $$
///
/// If `a == b` the result is zero and `integrand` is not called. If `a > b` the result is the
/// negative of the integral from `b` to `a`, following the usual orientation convention.
pub fn evaluate<T, I>(nodes: &[T], weights: &[T], integrand: &I, a: T, b: T) -> T
where
    T: Real,
    I: Integrand<T> + ?Sized,
{
    debug_assert_eq!(nodes.len(), weights.len());

    if a == b {
        return T::zero();
    }

    let two = T::one() + T::one();
    let half_width = (b - a) / two;
    let mid = (a + b) / two;

    let sum = nodes
        .iter()
        .zip(weights)
        .fold(T::zero(), |sum, (&x, &w)| {
            sum + w * integrand.evaluate(x * half_width + mid)
        });

    sum * half_width
}

/// Compute the range of work items handled by the (zero-based) `core` when `total` items are
/// distributed over `n_cores` cores. The ranges of all cores are contiguous, ordered and cover
/// `0..total` exactly once.
pub(crate) fn panel_range_for_core(core: usize, n_cores: usize, total: usize) -> Range<usize> {
    debug_assert!(core < n_cores);
    let per_core = (total + n_cores - 1) / n_cores;

    // with more cores than items the trailing cores get empty ranges
    let start = (core * per_core).min(total);
    let end = (start + per_core).min(total);

    start..end
}
