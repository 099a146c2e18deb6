//! Pure aggregation of material verification flags into a vehicle status.

use crate::model::material::Material;
use crate::model::vehicle::VerificationStatus;

/// Progress of a verification pass, for display next to the material list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VerificationProgress {
    pub verified_count: usize,
    pub total_count: usize,
}

impl VerificationProgress {
    /// Whole percents, `0` for an empty set.
    pub fn percentage(&self) -> u8 {
        if self.total_count == 0 {
            0
        } else {
            (self.verified_count * 100 / self.total_count) as u8
        }
    }
}

/// Derives the aggregate status of a vehicle from its assigned materials.
///
/// Empty set means there is nothing to verify; a single unverified material
/// is enough for an anomaly. No thresholds, no weighting.
pub fn aggregate(materials: &[Material]) -> VerificationStatus {
    if materials.is_empty() {
        VerificationStatus::NonApplicable
    } else if materials.iter().all(|material| material.is_verified) {
        VerificationStatus::Ok
    } else {
        VerificationStatus::Anomalie
    }
}

pub fn progress(materials: &[Material]) -> VerificationProgress {
    VerificationProgress {
        verified_count: materials
            .iter()
            .filter(|material| material.is_verified)
            .count(),
        total_count: materials.len(),
    }
}
