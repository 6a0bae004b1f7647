//! Composite integrator
use crate::callbacks::Callback;
use crate::core::error::{QuadratureError, Result};
use crate::core::{from_usize, panel_range_for_core, Integrand, Quadrature, Real};

use crossbeam as cb;
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::{trace, warn};

/// The estimate of a rule over one sub-interval of a composite integration.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Panel<T> {
    a: T,
    b: T,
    estimate: T,
}

impl<T: Copy> Panel<T> {
    /// Create a new panel for the interval from `a` to `b`.
    pub const fn new(a: T, b: T, estimate: T) -> Self {
        Self { a, b, estimate }
    }

    /// Returns the lower limit of this panel.
    pub const fn a(&self) -> T {
        self.a
    }

    /// Returns the upper limit of this panel.
    pub const fn b(&self) -> T {
        self.b
    }

    /// Returns the estimate of the integral over this panel.
    pub const fn estimate(&self) -> T {
        self.estimate
    }
}

/// Sum the estimates of `panels` in the order given.
pub fn total<T: Float>(panels: &[Panel<T>]) -> T {
    panels
        .iter()
        .fold(T::zero(), |sum, panel| sum + panel.estimate)
}

/// Returns the limits of panel `index` when `[a, b]` is divided into `panels` equal parts. The
/// last panel ends exactly at `b` and neighbouring panels share their limits bit-for-bit.
fn panel_limits<T: Real>(a: T, b: T, panels: usize, index: usize) -> Result<(T, T)> {
    let n = from_usize::<T>(panels)?;
    let limit = |i: usize| -> Result<T> { Ok(a + (b - a) * from_usize::<T>(i)? / n) };

    let left = limit(index)?;
    let right = if index + 1 == panels {
        b
    } else {
        limit(index + 1)?
    };

    Ok((left, right))
}

/// Integrate the panels in `range` on the current thread.
fn integrate_panel_range<T, Q, I>(
    rule: &Q,
    integrand: &I,
    a: T,
    b: T,
    panels: usize,
    range: Range<usize>,
) -> Result<Vec<Panel<T>>>
where
    T: Real,
    Q: Quadrature<T>,
    I: Integrand<T>,
{
    range
        .map(|index| {
            let (left, right) = panel_limits(a, b, panels, index)?;
            Ok(Panel::new(left, right, rule.integrate(integrand, left, right)))
        })
        .collect()
}

/// Integrate `integrand` from `a` to `b` by applying `rule` to each of `panels` equal
/// sub-intervals, using `n_cores` threads.
///
/// The estimates of all panels are returned in interval order; their sum, see [`total`], is the
/// composite estimate. The `callback` is invoked once per panel after all threads have finished,
/// together with the running sum of the estimates.
/// The results do not depend on `n_cores`.
///
/// # Errors
///
/// Returns [`QuadratureError::InvalidPanels`] or [`QuadratureError::InvalidCores`] if `panels`
/// or `n_cores` is zero, and [`QuadratureError::WorkerPanicked`] if the integrand panicked on
/// one of the threads.
pub fn integrate<T, Q, I>(
    rule: &Q,
    integrand: &I,
    a: T,
    b: T,
    panels: usize,
    n_cores: usize,
    callback: &impl Callback<T>,
) -> Result<Vec<Panel<T>>>
where
    T: Real,
    Q: Quadrature<T>,
    I: Integrand<T>,
{
    if panels == 0 {
        return Err(QuadratureError::InvalidPanels);
    }

    if n_cores == 0 {
        return Err(QuadratureError::InvalidCores);
    }

    // distribute contiguous blocks of panels evenly across the cores
    let per_core = cb::thread::scope(|s| {
        let handles = (0..n_cores)
            .map(|core| {
                let range = panel_range_for_core(core, n_cores, panels);

                s.spawn(move |_| {
                    trace!(core, start = range.start, end = range.end, "integrating panels");
                    integrate_panel_range(rule, integrand, a, b, panels, range)
                })
            })
            .collect::<Vec<_>>();

        // wait for the threads to finish
        handles
            .into_iter()
            .map(|handle| handle.join().map_err(|_| QuadratureError::WorkerPanicked))
            .collect::<Vec<_>>()
    })
    .map_err(|_| QuadratureError::WorkerPanicked)?;

    let mut results = Vec::with_capacity(panels);
    for block in per_core {
        results.extend(block??);
    }

    for (index, panel) in results.iter().enumerate() {
        if !panel.estimate.is_finite() {
            warn!(index, a = ?panel.a, b = ?panel.b, "non-finite panel estimate");
        }
    }

    // the running sum adds the estimates in the same order as `total`
    let mut sum = T::zero();
    for (index, panel) in results.iter().enumerate() {
        sum = sum + panel.estimate;
        callback.print(&results[..=index], sum);
    }

    Ok(results)
}
