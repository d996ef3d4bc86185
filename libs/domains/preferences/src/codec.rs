//! Preference vector codec.
//!
//! Maps the fixed boolean flag schema to a fixed-length numeric vector
//! (true -> 1.0, false -> 0.0) in canonical order, zero-padded to
//! [`VECTOR_DIMENSION`] components. Encoding is deterministic and total:
//! there is no error path, and identical flags always produce bit-identical
//! vectors.

use serde::{Deserialize, Serialize};

use crate::models::PreferenceFlags;

/// Number of defined preference flags (the populated vector prefix).
pub const FLAG_COUNT: usize = 23;

/// Stored vector length. Components beyond the flag prefix are zero.
pub const VECTOR_DIMENSION: usize = 30;

/// Fixed-length numeric representation of a preference profile.
///
/// Always exactly [`VECTOR_DIMENSION`] components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreferenceVector([f32; VECTOR_DIMENSION]);

impl PreferenceVector {
    /// Build a vector from raw components, padding with zeros or truncating
    /// to exactly [`VECTOR_DIMENSION`] entries.
    pub fn from_components(components: &[f32]) -> Self {
        let mut values = [0.0; VECTOR_DIMENSION];
        for (slot, value) in values.iter_mut().zip(components.iter()) {
            *slot = *value;
        }
        Self(values)
    }

    /// All-zero vector.
    pub fn zero() -> Self {
        Self([0.0; VECTOR_DIMENSION])
    }

    pub fn components(&self) -> &[f32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|c| *c == 0.0)
    }
}

impl Default for PreferenceVector {
    fn default() -> Self {
        Self::zero()
    }
}

/// Encode preference flags into their canonical vector form.
pub fn encode(flags: &PreferenceFlags) -> PreferenceVector {
    let mut values = [0.0; VECTOR_DIMENSION];
    for (slot, flag) in values.iter_mut().zip(flags.as_array()) {
        *slot = if flag { 1.0 } else { 0.0 };
    }
    PreferenceVector(values)
}

/// Numeric component view of a vector, used for display and similarity math.
pub fn decode(vector: &PreferenceVector) -> Vec<f32> {
    vector.components().to_vec()
}
