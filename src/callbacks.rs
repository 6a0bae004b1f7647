//! Implementation of different callback functions.
use crate::integrators::composite::Panel;
use num_traits::Float;
use std::fmt::Display;

/// Trait for implementing callbacks for the composite integrator
pub trait Callback<T> {
    /// This method is called after each panel, in interval order, with all panels finished so
    /// far and the sum of their estimates, and may print information about it.
    fn print(&self, panels: &[Panel<T>], total: T);
}

/// A callback function that does nothing
pub struct SinkCallback {}

impl<T> Callback<T> for SinkCallback {
    fn print(&self, _: &[Panel<T>], _: T) {}
}

/// A callback function that prints the result of each individual panel
pub struct SimpleCallback {}

impl<T> Callback<T> for SimpleCallback
where
    T: Display + Float,
{
    fn print(&self, panels: &[Panel<T>], _: T) {
        if let Some(panel) = panels.last() {
            println!(
                "panel {} [{}, {}]: I={}",
                panels.len() - 1,
                panel.a(),
                panel.b(),
                panel.estimate()
            );
        }
    }
}

/// Simple cumulative callback that shows the result of the individual panel together with the
/// sum over all panels finished so far.
pub struct SimpleCumulativeCallback {}

impl<T> Callback<T> for SimpleCumulativeCallback
where
    T: Display + Float,
{
    fn print(&self, panels: &[Panel<T>], total: T) {
        if let Some(panel) = panels.last() {
            println!(
                "[panel {}: [{}, {}] I={}] [Cumulative: [{}, {}] I={}]",
                panels.len() - 1,
                panel.a(),
                panel.b(),
                panel.estimate(),
                panels[0].a(),
                panel.b(),
                total
            );
        }
    }
}
