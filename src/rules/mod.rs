//! Quadrature rules and their configuration.
pub mod fejer;
pub mod gauss;
mod tables;

pub use fejer::{FejerFormula, FejerRule};
pub use gauss::{GaussKind, GaussRule};

use crate::core::error::Result;
use crate::core::{Real, Rule};
use serde::{Deserialize, Serialize};

/// Serializable description of a rule, e.g. read from a configuration file.
///
/// In JSON a Gauss rule is written as `{"rule": "gauss", "kind": "kronrod", "order": 7}` and a
/// Fejér rule as `{"rule": "fejer", "order": 8}`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "lowercase")]
pub enum RuleSpec {
    /// A [`GaussRule`].
    Gauss {
        /// Kind of the rule.
        kind: GaussKind,
        /// Number of fundamental points.
        order: usize,
    },
    /// A [`FejerRule`], whose formula is chosen by the parity of `order`.
    Fejer {
        /// Number of points.
        order: usize,
    },
}

impl RuleSpec {
    /// Parse a specification from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`QuadratureError::Config`](crate::QuadratureError::Config) if `json` does not
    /// describe a rule.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the rule this specification describes.
    ///
    /// # Errors
    ///
    /// Fails with the errors of [`GaussRule::new`] or [`FejerRule::new`], respectively.
    pub fn build<T: Real>(&self) -> Result<Rule<T>> {
        match *self {
            Self::Gauss { kind, order } => GaussRule::new(kind, order).map(GaussRule::into_rule),
            Self::Fejer { order } => FejerRule::new(order).map(FejerRule::into_rule),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::QuadratureError;

    #[test]
    fn test_spec_from_json() {
        let spec = RuleSpec::from_json(r#"{"rule": "gauss", "kind": "kronrod", "order": 7}"#)
            .unwrap();
        assert_eq!(
            spec,
            RuleSpec::Gauss {
                kind: GaussKind::Kronrod,
                order: 7
            }
        );
        assert_eq!(spec.build::<f64>().unwrap().len(), 15);

        let spec = RuleSpec::from_json(r#"{"rule": "fejer", "order": 8}"#).unwrap();
        assert_eq!(spec, RuleSpec::Fejer { order: 8 });
        assert_eq!(spec.build::<f64>().unwrap().len(), 8);
    }

    #[test]
    fn test_spec_round_trip_through_json() {
        let spec = RuleSpec::Gauss {
            kind: GaussKind::Chebyshev,
            order: 3,
        };
        let json = serde_json::to_string(&spec).unwrap();

        assert_eq!(json, r#"{"rule":"gauss","kind":"chebyshev","order":3}"#);
    }

    #[test]
    fn test_invalid_specs() {
        assert!(matches!(
            RuleSpec::from_json(r#"{"rule": "gauss", "kind": "lobatto", "order": 3}"#),
            Err(QuadratureError::Config(_))
        ));
        assert!(matches!(
            RuleSpec::Gauss {
                kind: GaussKind::Legendre,
                order: 12
            }
            .build::<f64>(),
            Err(QuadratureError::UnsupportedConfiguration { .. })
        ));
    }
}
