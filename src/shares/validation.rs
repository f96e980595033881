use tracing::debug;

use super::registry::ShareRegistry;
use crate::error::{CompletenessError, Result};

/// Weights of a fully declared registry must add up to exactly this.
pub const FULL_SCORE: f64 = 100.0;

/// Validate that every weight is a non-negative number and that the weights
/// sum to exactly 100. No tolerance is applied to the sum.
pub fn validate_shares(registry: &ShareRegistry) -> Result<()> {
    for share in registry {
        if !share.weight.is_finite() || share.weight < 0.0 {
            return Err(CompletenessError::InvalidWeight {
                field: share.field.clone(),
                weight: share.weight,
            });
        }
    }

    let sum = registry.total_weight();
    debug!(fields = registry.len(), sum, "validating completeness shares");
    if sum != FULL_SCORE {
        return Err(CompletenessError::InvalidWeightSum { sum });
    }

    Ok(())
}
