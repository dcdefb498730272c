use serde::Deserialize;
use std::collections::HashSet;
use std::f64::consts::PI;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

/// One selectable entry in the navigation strip
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavDestination {
    /// Short display string, also used as the list key (must be unique)
    pub label: String,
    /// Path compared against the current route
    pub route: String,
    /// Icon reference or emoji shown next to the label
    pub glyph: String,
}

impl NavDestination {
    pub fn new(
        label: impl Into<String>,
        route: impl Into<String>,
        glyph: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            route: route.into(),
            glyph: glyph.into(),
        }
    }
}

/// How many destinations may be highlighted when several share the current route
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Every destination whose route equals the current route is active
    #[default]
    AllMatches,
    /// Only the first destination whose route equals the current route is active
    FirstMatch,
}

/// Ordered navigation configuration injected by the application shell.
///
/// List order is display order (left to right). The component never adds,
/// removes or reorders entries.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavConfig {
    #[serde(default)]
    pub policy: MatchPolicy,
    pub destinations: Vec<NavDestination>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            policy: MatchPolicy::AllMatches,
            destinations: vec![
                NavDestination::new("Home", "/", "🏠"),
                NavDestination::new("Progress", "/progress", "📈"),
                NavDestination::new("About", "/about", "ℹ️"),
            ],
        }
    }
}

impl NavConfig {
    /// Parse and validate a JSON navigation config
    pub fn from_json(json: &str) -> Result<Self, NavConfigError> {
        let config: NavConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Labels are list keys, so they must be non-blank and unique.
    /// Routes are not checked: duplicates and empty lists are tolerated.
    pub fn validate(&self) -> Result<(), NavConfigError> {
        let mut seen = HashSet::new();
        for (index, destination) in self.destinations.iter().enumerate() {
            if destination.label.trim().is_empty() {
                return Err(NavConfigError::BlankLabel { index });
            }
            if !seen.insert(destination.label.as_str()) {
                return Err(NavConfigError::DuplicateLabel {
                    label: destination.label.clone(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum NavConfigError {
    #[error("Failed to parse navigation config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Destination at position {index} has a blank label")]
    BlankLabel { index: usize },
    #[error("Duplicate destination label: {label}")]
    DuplicateLabel { label: String },
}

/// A destination paired with its active flag for one render pass
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub label: String,
    pub route: String,
    pub glyph: String,
    pub active: bool,
}

/// Exact string equality: no prefix matching, no trailing-slash normalization
pub fn is_active(destination: &NavDestination, current_route: &str) -> bool {
    destination.route == current_route
}

/// One active flag per destination, in input order
pub fn active_flags(
    destinations: &[NavDestination],
    current_route: &str,
    policy: MatchPolicy,
) -> Vec<bool> {
    let mut matched = false;
    destinations
        .iter()
        .map(|destination| {
            let active = is_active(destination, current_route);
            match policy {
                MatchPolicy::AllMatches => active,
                MatchPolicy::FirstMatch => {
                    let first = active && !matched;
                    matched |= active;
                    first
                }
            }
        })
        .collect()
}

/// Index of the first destination matching the current route
pub fn active_index(destinations: &[NavDestination], current_route: &str) -> Option<usize> {
    destinations
        .iter()
        .position(|destination| is_active(destination, current_route))
}

pub fn nav_items(
    destinations: &[NavDestination],
    current_route: &str,
    policy: MatchPolicy,
) -> Vec<NavItem> {
    destinations
        .iter()
        .zip(active_flags(destinations, current_route, policy))
        .map(|(destination, active)| NavItem {
            label: destination.label.clone(),
            route: destination.route.clone(),
            glyph: destination.glyph.clone(),
            active,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Circular progress
// ---------------------------------------------------------------------------

pub const DEFAULT_SIZE: f64 = 120.0;
pub const DEFAULT_STROKE_WIDTH: f64 = 8.0;

/// Inputs for one circular progress render.
///
/// `value` is a percentage in [0, 100] by contract but is never clamped here;
/// out-of-range values produce degenerate dash geometry. Use [`ProgressSpec::clamped`]
/// when the caller wants a pinned value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSpec {
    pub value: f64,
    pub size: f64,
    pub stroke_width: f64,
}

impl ProgressSpec {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            size: DEFAULT_SIZE,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Same spec with `value` pinned into [0, 100]. NaN becomes 0.
    pub fn clamped(self) -> Self {
        let value = if self.value.is_nan() {
            0.0
        } else {
            self.value.clamp(0.0, 100.0)
        };
        Self { value, ..self }
    }

    /// Report the first contract violation, if any. Rendering never calls this
    /// to reject input, only to diagnose it.
    pub fn validate(&self) -> Result<(), ProgressSpecError> {
        if !(self.size > 0.0) {
            return Err(ProgressSpecError::NonPositiveSize { size: self.size });
        }
        if !(self.stroke_width > 0.0 && self.stroke_width < self.size) {
            return Err(ProgressSpecError::InvalidStrokeWidth {
                stroke_width: self.stroke_width,
                size: self.size,
            });
        }
        if !(0.0..=100.0).contains(&self.value) {
            return Err(ProgressSpecError::ValueOutOfRange { value: self.value });
        }
        Ok(())
    }

    /// Derive the ring geometry. Recomputed on every call, nothing is cached.
    pub fn geometry(&self) -> RingGeometry {
        let radius = (self.size - self.stroke_width) / 2.0;
        let circumference = 2.0 * PI * radius;
        let dash_offset = circumference - (self.value / 100.0) * circumference;

        RingGeometry {
            size: self.size,
            center: self.size / 2.0,
            radius,
            circumference,
            dash_offset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProgressSpecError {
    #[error("Progress value {value} is outside 0..=100")]
    ValueOutOfRange { value: f64 },
    #[error("Progress size must be positive, got {size}")]
    NonPositiveSize { size: f64 },
    #[error("Stroke width {stroke_width} must be positive and smaller than size {size}")]
    InvalidStrokeWidth { stroke_width: f64, size: f64 },
}

/// Derived ring quantities for a [`ProgressSpec`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub size: f64,
    /// Both circles are centered at (center, center)
    pub center: f64,
    pub radius: f64,
    pub circumference: f64,
    /// stroke-dashoffset of the indicator circle
    pub dash_offset: f64,
}

impl RingGeometry {
    /// Length of the visibly filled arc
    pub fn filled_length(&self) -> f64 {
        self.circumference - self.dash_offset
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.size, self.size)
    }

    /// Moves the SVG stroke start from 3 o'clock to 12 o'clock
    pub fn rotation(&self) -> String {
        format!("rotate(-90 {} {})", self.center, self.center)
    }
}
