//! Selectable overlay filters and their per-filter alignment records.
//!
//! Each filter is described entirely by data: which two landmarks the sprite
//! aligns to, which landmark anchors its placement, and how it scales and
//! offsets relative to the face. The pipeline looks the record up once per
//! frame instead of branching on the filter identity.

use crate::constants::{
    FOREHEAD_TOP, LEFT_CHEEK, LEFT_EYE_OUTER, NOSE_BRIDGE, RIGHT_CHEEK, RIGHT_EYE_OUTER, UPPER_LIP,
};
use crate::{Error, Result};

/// The closed set of selectable overlay filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Eyeglasses centered on the nose bridge
    Glasses,
    /// Mustache between nose and upper lip
    Mustache,
    /// Hat sitting above the forehead
    Hat,
    /// Crown sitting above the forehead
    Crown,
}

impl FilterKind {
    /// All selectable filters, in key order
    pub const ALL: [FilterKind; 4] = [
        FilterKind::Glasses,
        FilterKind::Mustache,
        FilterKind::Hat,
        FilterKind::Crown,
    ];

    /// Map a selection key to its filter, if any
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '1' => Some(FilterKind::Glasses),
            '2' => Some(FilterKind::Mustache),
            '3' => Some(FilterKind::Hat),
            '4' => Some(FilterKind::Crown),
            _ => None,
        }
    }

    /// Selection key for this filter
    #[must_use]
    pub fn key(self) -> char {
        match self {
            FilterKind::Glasses => '1',
            FilterKind::Mustache => '2',
            FilterKind::Hat => '3',
            FilterKind::Crown => '4',
        }
    }

    /// Human-readable filter name
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FilterKind::Glasses => "Glasses",
            FilterKind::Mustache => "Mustache",
            FilterKind::Hat => "Hat",
            FilterKind::Crown => "Crown",
        }
    }

    /// Alignment record for this filter
    ///
    /// Glasses align to the outer eye corners and center on the nose bridge.
    /// The mustache aligns to the cheeks and hangs from the upper lip. Hat
    /// and crown share eye-corner alignment but anchor to the forehead and
    /// sit entirely above it.
    #[must_use]
    pub fn spec(self) -> FilterSpec {
        match self {
            FilterKind::Glasses => FilterSpec {
                left: LEFT_EYE_OUTER,
                right: RIGHT_EYE_OUTER,
                anchor: NOSE_BRIDGE,
                scale_factor: 1.4,
                vertical_offset: 0.6,
            },
            FilterKind::Mustache => FilterSpec {
                left: LEFT_CHEEK,
                right: RIGHT_CHEEK,
                anchor: UPPER_LIP,
                scale_factor: 0.8,
                vertical_offset: 0.5,
            },
            FilterKind::Hat | FilterKind::Crown => FilterSpec {
                left: LEFT_EYE_OUTER,
                right: RIGHT_EYE_OUTER,
                anchor: FOREHEAD_TOP,
                scale_factor: 2.0,
                vertical_offset: 1.0,
            },
        }
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable per-filter alignment record
///
/// `left` and `right` are the landmark indices the sprite width and roll are
/// derived from; `anchor` is the landmark the sprite is placed against.
/// `scale_factor` multiplies the left-right distance into a sprite width and
/// `vertical_offset` is the fraction of the sprite height the sprite is
/// raised above the anchor point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterSpec {
    pub left: usize,
    pub right: usize,
    pub anchor: usize,
    pub scale_factor: f64,
    pub vertical_offset: f64,
}

impl FilterSpec {
    /// Largest landmark index this record reads
    #[must_use]
    pub fn max_index(&self) -> usize {
        self.left.max(self.right).max(self.anchor)
    }

    /// Check the record against the expected landmark count
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if any configured index cannot exist in a
    /// landmark set of `num_landmarks` entries, or if the scale factor is not
    /// positive.
    pub fn validate(&self, num_landmarks: usize) -> Result<()> {
        if self.max_index() >= num_landmarks {
            return Err(Error::ConfigError(format!(
                "Landmark index {} exceeds detector output of {num_landmarks} points",
                self.max_index()
            )));
        }
        if self.scale_factor <= 0.0 {
            return Err(Error::ConfigError(format!(
                "Scale factor must be positive, got {}",
                self.scale_factor
            )));
        }
        Ok(())
    }
}
