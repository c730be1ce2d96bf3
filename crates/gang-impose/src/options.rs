use crate::types::*;

/// How the press run will be finished downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProductionMode {
    /// One-pass production; any column count is acceptable
    #[default]
    Standard,
    /// Duplicate (two-up) production: the sheet is slit into equal left and
    /// right halves, so the column count must be even
    Duplicate,
}

/// Configuration for a fixed flat sheet substrate
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlatSheetConfig {
    /// Full sheet size
    pub sheet: Dimension,
    /// Unprintable border
    pub margins: Margins,
    /// Operator-forced row count; `None` means search for the best
    pub forced_rows: Option<u32>,
    /// Operator-forced column count; `None` means search for the best
    pub forced_columns: Option<u32>,
    pub mode: ProductionMode,
}

impl FlatSheetConfig {
    pub fn new(sheet: Dimension) -> Self {
        Self {
            sheet,
            margins: Margins::default(),
            forced_rows: None,
            forced_columns: None,
            mode: ProductionMode::Standard,
        }
    }
}

/// Configuration for roll material: fixed width, elastic length.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollConfig {
    /// Fixed roll width
    pub width_mm: f32,
    /// Minimum length of material the run must fill
    pub min_length_mm: f32,
    /// Unprintable border
    pub margins: Margins,
    /// Operator-forced row count; `None` means derive from the length
    pub forced_rows: Option<u32>,
    /// Operator-forced column count; `None` means search for the best
    pub forced_columns: Option<u32>,
    pub mode: ProductionMode,
}

impl RollConfig {
    pub fn new(width_mm: f32, min_length_mm: f32) -> Self {
        Self {
            width_mm,
            min_length_mm,
            margins: Margins::default(),
            forced_rows: None,
            forced_columns: None,
            mode: ProductionMode::Standard,
        }
    }
}

/// The substrate a job will be ganged onto
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SubstrateConfig {
    FlatSheet(FlatSheetConfig),
    Roll(RollConfig),
}

impl SubstrateConfig {
    /// Load a substrate configuration from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let config = serde_json::from_slice(&bytes)
            .map_err(|e| LayoutError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Save a substrate configuration to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LayoutError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        match self {
            SubstrateConfig::FlatSheet(cfg) => {
                validate_outer("sheet width", cfg.sheet.width_mm)?;
                validate_outer("sheet height", cfg.sheet.height_mm)?;
                validate_margins(cfg.margins, cfg.sheet.width_mm, cfg.sheet.height_mm)?;
                validate_forced(cfg.forced_rows, cfg.forced_columns)
            }
            SubstrateConfig::Roll(cfg) => {
                validate_outer("roll width", cfg.width_mm)?;
                validate_outer("minimum length", cfg.min_length_mm)?;
                validate_margins(cfg.margins, cfg.width_mm, cfg.min_length_mm)?;
                validate_forced(cfg.forced_rows, cfg.forced_columns)
            }
        }
    }
}

fn validate_outer(name: &str, value_mm: f32) -> Result<()> {
    if value_mm <= 0.0 {
        return Err(LayoutError::Config(format!(
            "{} must be positive, got {}mm",
            name, value_mm
        )));
    }
    Ok(())
}

fn validate_margins(margins: Margins, outer_width_mm: f32, outer_height_mm: f32) -> Result<()> {
    for (name, value) in [
        ("top", margins.top_mm),
        ("bottom", margins.bottom_mm),
        ("left", margins.left_mm),
        ("right", margins.right_mm),
    ] {
        if value < 0.0 {
            return Err(LayoutError::Config(format!(
                "{} margin must not be negative, got {}mm",
                name, value
            )));
        }
    }
    if margins.left_mm + margins.right_mm >= outer_width_mm {
        return Err(LayoutError::Config(
            "left and right margins leave no usable width".to_string(),
        ));
    }
    if margins.top_mm + margins.bottom_mm >= outer_height_mm {
        return Err(LayoutError::Config(
            "top and bottom margins leave no usable height".to_string(),
        ));
    }
    Ok(())
}

fn validate_forced(rows: Option<u32>, columns: Option<u32>) -> Result<()> {
    if rows == Some(0) {
        return Err(LayoutError::Config(
            "forced row count must be positive; leave it unset to search".to_string(),
        ));
    }
    if columns == Some(0) {
        return Err(LayoutError::Config(
            "forced column count must be positive; leave it unset to search".to_string(),
        ));
    }
    Ok(())
}
