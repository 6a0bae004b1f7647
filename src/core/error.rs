//! Error type shared by all rules and integrators.
use crate::rules::GaussKind;
use thiserror::Error;

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, QuadratureError>;

/// Everything that can go wrong when building a rule or running an integration.
///
/// All of these are precondition violations detected at the boundary of a constructor or an
/// integrator; none of them is recoverable by retrying.
#[derive(Debug, Error)]
pub enum QuadratureError {
    /// The requested order was zero.
    #[error("invalid order {order}: a quadrature rule needs at least one point")]
    InvalidOrder {
        /// The rejected order.
        order: usize,
    },

    /// The rule kind has no tabulated coefficients for the requested order.
    #[error("unsupported configuration: no {kind} rule of order {order} is tabulated")]
    UnsupportedConfiguration {
        /// The requested kind.
        kind: GaussKind,
        /// The requested order.
        order: usize,
    },

    /// A rule kind was given by a name that is not known.
    #[error("unsupported configuration: unknown rule kind `{name}`")]
    UnknownKind {
        /// The name that could not be parsed.
        name: String,
    },

    /// A tabulated or computed value is not representable in the numeric type.
    #[error("cannot represent {value} in the requested numeric type")]
    NumericConversion {
        /// The value that failed to convert.
        value: f64,
    },

    /// A hand-built rule without any nodes.
    #[error("a quadrature rule needs at least one node")]
    EmptyRule,

    /// A hand-built rule whose nodes and weights differ in length.
    #[error("rule has {nodes} nodes but {weights} weights")]
    LengthMismatch {
        /// Number of nodes.
        nodes: usize,
        /// Number of weights.
        weights: usize,
    },

    /// Composite integration was asked for zero panels.
    #[error("composite integration needs at least one panel")]
    InvalidPanels,

    /// Composite integration was asked to run on zero cores.
    #[error("composite integration needs at least one core")]
    InvalidCores,

    /// A worker thread of the composite integrator panicked.
    #[error("a worker thread panicked during composite integration")]
    WorkerPanicked,

    /// A rule configuration could not be parsed.
    #[error("invalid rule configuration: {0}")]
    Config(#[from] serde_json::Error),
}
