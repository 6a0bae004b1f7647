#![warn(clippy::all, clippy::cargo, clippy::nursery, clippy::pedantic)]
#![warn(missing_docs)]

//! The crate `quadintir` provides fixed-order [numerical quadrature] rules, which approximate
//! definite one-dimensional [integrals] over finite intervals by weighted sums of integrand
//! values.
//!
//! # Features
//!
//! - **Gauss rules**. Gauss-Legendre rules with 1 to 11 points and their Gauss-Kronrod extensions
//! with 3 to 23 points are reproduced from tables; Gauss-Chebyshev rules are available in closed
//! form for every order. See [`GaussRule`].
//! - **Fejér rules**. Fejér's first and second rules are derived from trigonometric series for
//! every order, see [`FejerRule`].
//! - **Generic numeric type**. The numeric type used in this library is not fixed, but instead a
//! generic parameter, so that the rules can be used with either `f32`, `f64`, or a custom numeric
//! type that implements the `Float`, `FloatConst` and `FromPrimitive` traits from the
//! `num-traits` crate.
//! - **Immutable rules**. A rule is a value: once constructed its nodes and weights never change,
//! so a single rule can be shared between threads and used to integrate any number of integrands
//! over any number of intervals concurrently.
//! - **Composite integration**. The [`composite`](integrators::composite) integrator splits an
//! interval into equal panels and integrates them on several cores. The results do not depend on
//! the number of cores.
//!
//! # What is ...?
//!
//! This section is a dictionary of terms that are used in this documentation. Given
//!
//! $$ I = \int_a^b \mathrm{d} x \, f(x) $$
//!
//! we approximate $I$ with an $L$-point rule using
//!
//! $$ I \approx \frac{b-a}{2} \sum_{i=1}^L w_i f \left( \frac{b-a}{2} x_i + \frac{a+b}{2}
//! \right) $$
//!
//! where we use the following terms:
//!
//! - the *nodes* or *abscissas* are the points $x_i$ on the reference interval $[-1, 1]$,
//! - the *weights* are the coefficients $w_i$,
//! - the *order* is the number of fundamental points requested when constructing a rule. For
//! Gauss-Kronrod rules of order $n$ the number of points is $L = 2n+1$, otherwise $L = n$,
//! - the *integrand* is the function, $f(x)$, that is being integrated,
//! - *composite integration* applies a rule to each of several sub-intervals (*panels*) of
//! $[a, b]$ and sums the results.
//!
//! Every rule that integrates constants exactly has weights that sum to $2$, the length of the
//! reference interval.
//!
//! [numerical quadrature]: https://en.wikipedia.org/wiki/Numerical_integration
//! [integrals]: https://en.wikipedia.org/wiki/Integral

pub mod callbacks;
pub mod core;
pub mod integrators;
pub mod rules;

pub use crate::core::error::{QuadratureError, Result};
pub use crate::core::*;
pub use crate::rules::{FejerFormula, FejerRule, GaussKind, GaussRule, RuleSpec};
