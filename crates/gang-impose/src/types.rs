use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("invalid dimension {width_mm}mm x {height_mm}mm: both sides must be positive")]
    InvalidDimension { width_mm: f32, height_mm: f32 },
    #[error("margins consume the entire substrate {0}")]
    InvalidMargins(Axis),
    #[error("artwork does not fit the usable area in either orientation")]
    ArtworkTooLarge,
    #[error("no even column count of at least 2 fits within the usable width")]
    EvenColumnUnsatisfiable,
}

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Substrate axis, used to pinpoint margin failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Width => write!(f, "width"),
            Axis::Height => write!(f, "height"),
        }
    }
}

/// A rectangular size in millimeters.
///
/// Both sides are strictly positive; use [`Dimension::new`] to construct
/// one from untrusted values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension {
    pub width_mm: f32,
    pub height_mm: f32,
}

impl Dimension {
    pub fn new(width_mm: f32, height_mm: f32) -> Result<Self> {
        if width_mm <= 0.0 || height_mm <= 0.0 {
            return Err(LayoutError::InvalidDimension {
                width_mm,
                height_mm,
            });
        }
        Ok(Self {
            width_mm,
            height_mm,
        })
    }

    /// Area in square millimeters
    pub fn area_mm2(self) -> f32 {
        self.width_mm * self.height_mm
    }

    /// The same size with width and height exchanged (a quarter turn)
    pub fn swapped(self) -> Self {
        Self {
            width_mm: self.height_mm,
            height_mm: self.width_mm,
        }
    }
}

/// Standard substrate sheet sizes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaperSize {
    A2,
    A3,
    A4,
    /// Oversized A3 for full-bleed work
    SRA3,
    Letter,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A2 => (420.0, 594.0),
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::SRA3 => (320.0, 450.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }
}

/// Page rotation declared by the source document
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    #[default]
    None,
    Clockwise90,
    Clockwise180,
    Clockwise270,
}

impl Rotation {
    pub fn degrees(self) -> i32 {
        match self {
            Rotation::None => 0,
            Rotation::Clockwise90 => 90,
            Rotation::Clockwise180 => 180,
            Rotation::Clockwise270 => 270,
        }
    }

    /// Quarter turns exchange width and height; half turns do not.
    pub fn swaps_axes(self) -> bool {
        matches!(self, Rotation::Clockwise90 | Rotation::Clockwise270)
    }

    /// Apply this rotation to a size
    pub fn apply(self, size: Dimension) -> Dimension {
        if self.swaps_axes() {
            size.swapped()
        } else {
            size
        }
    }
}

/// Rotation of the artwork relative to the substrate's reference edge, as
/// reported in an [`ImpositionResult`](crate::ImpositionResult).
///
/// Press feed direction makes a quarter turn of the artwork equivalent to
/// imposing it at 270 degrees to the gripper edge, so the planner only ever
/// reports these two angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RotationAngle {
    #[default]
    Zero,
    Clockwise270,
}

impl RotationAngle {
    pub fn degrees(self) -> i32 {
        match self {
            RotationAngle::Zero => 0,
            RotationAngle::Clockwise270 => 270,
        }
    }
}

/// The single repeating unit to be ganged on the substrate.
///
/// Dimensions are expected to already include bleed; the planner never adds
/// trim allowance of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArtworkPage {
    /// Nominal size as declared by the source document
    pub size: Dimension,
    /// Page rotation declared by the source document, if any
    pub source_rotation: Rotation,
}

impl ArtworkPage {
    pub fn new(width_mm: f32, height_mm: f32) -> Result<Self> {
        Ok(Self {
            size: Dimension::new(width_mm, height_mm)?,
            source_rotation: Rotation::None,
        })
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.source_rotation = rotation;
        self
    }

    /// Size as it sits on the substrate, with the source rotation applied
    pub fn effective_size(&self) -> Dimension {
        self.source_rotation.apply(self.size)
    }
}

/// Substrate margins - unprintable area around the usable region.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margins {
    /// Top margin
    pub top_mm: f32,
    /// Bottom margin
    pub bottom_mm: f32,
    /// Left margin
    pub left_mm: f32,
    /// Right margin
    pub right_mm: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top_mm: 5.0,
            bottom_mm: 5.0,
            left_mm: 5.0,
            right_mm: 5.0,
        }
    }
}

impl Margins {
    /// Create uniform margins on all sides
    pub fn uniform(margin_mm: f32) -> Self {
        Self {
            top_mm: margin_mm,
            bottom_mm: margin_mm,
            left_mm: margin_mm,
            right_mm: margin_mm,
        }
    }
}
