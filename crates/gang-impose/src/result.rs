use crate::plan::LayoutCandidate;
use crate::types::{LayoutError, RotationAngle};

/// Utilization banding used for operator advice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtilizationTier {
    /// Below 50%
    Low,
    /// 50% to 75%
    Acceptable,
    /// 75% to 90%
    Good,
    /// Above 90%
    Excellent,
}

impl UtilizationTier {
    pub fn from_percent(percent: f32) -> Self {
        if percent < 50.0 {
            UtilizationTier::Low
        } else if percent < 75.0 {
            UtilizationTier::Acceptable
        } else if percent <= 90.0 {
            UtilizationTier::Good
        } else {
            UtilizationTier::Excellent
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UtilizationTier::Low => "low utilization, consider a different substrate size",
            UtilizationTier::Acceptable => "acceptable",
            UtilizationTier::Good => "good",
            UtilizationTier::Excellent => "excellent",
        }
    }
}

/// Outcome of one planning call.
///
/// Failures are reported through `success` and `error_message` rather than
/// an error return: the engine is driven interactively and a mistyped
/// dimension is an ordinary outcome, not a fault. Numeric fields of a
/// failed result are all zero.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpositionResult {
    pub success: bool,
    pub error_message: Option<String>,
    /// Rows of artwork down the substrate
    pub rows: u32,
    /// Columns of artwork across the substrate
    pub columns: u32,
    /// Total copies placed (`rows * columns`)
    pub quantity: u32,
    /// Share of the usable substrate area covered by artwork, 0 to 100
    pub utilization_percent: f32,
    /// Rotation relative to the substrate's reference edge
    pub rotation: RotationAngle,
    /// Whether the chosen orientation differs from the artwork's natural one
    pub rotated: bool,
    /// Human-readable summary for logs and the UI
    pub description: String,
}

impl ImpositionResult {
    pub(crate) fn from_candidate(candidate: &LayoutCandidate) -> Self {
        let rotation = if candidate.rotated {
            RotationAngle::Clockwise270
        } else {
            RotationAngle::Zero
        };
        let tier = UtilizationTier::from_percent(candidate.utilization_percent);
        let description = format!(
            "{} columns x {} rows = {} up at {}\u{b0}, {:.1}% utilization ({})",
            candidate.columns,
            candidate.rows,
            candidate.quantity,
            rotation.degrees(),
            candidate.utilization_percent,
            tier.label(),
        );

        Self {
            success: true,
            error_message: None,
            rows: candidate.rows,
            columns: candidate.columns,
            quantity: candidate.quantity,
            utilization_percent: candidate.utilization_percent,
            rotation,
            rotated: candidate.rotated,
            description,
        }
    }

    pub(crate) fn failure(error: LayoutError) -> Self {
        Self {
            success: false,
            error_message: Some(error.to_string()),
            rows: 0,
            columns: 0,
            quantity: 0,
            utilization_percent: 0.0,
            rotation: RotationAngle::Zero,
            rotated: false,
            description: String::new(),
        }
    }

    /// Banding of the utilization percentage
    pub fn tier(&self) -> UtilizationTier {
        UtilizationTier::from_percent(self.utilization_percent)
    }
}
