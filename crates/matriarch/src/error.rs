// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Error type for reading and writing [`crate::Transform`] descriptions.
///
/// Matrix arithmetic itself never fails; these only arise at the text
/// boundary.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Malformed or mistyped JSON.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// A component was NaN or infinite.
    #[error("non-finite value in `{field}`: {value}")]
    NonFinite {
        /// Dotted path of the offending component, e.g. `scale.y`.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}
