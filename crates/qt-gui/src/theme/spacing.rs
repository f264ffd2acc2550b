//! Spacing constants for consistent layout throughout the application.
//!
//! All spacing values are in pixels (f32) and follow a consistent scale.

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps
pub const SPACING_LG: f32 = 24.0;

// =============================================================================
// BORDERS
// =============================================================================

/// Small radius - buttons, inputs, chips
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Medium radius - cards, panels
pub const BORDER_RADIUS_MD: f32 = 6.0;

/// Thin border - subtle separators
pub const BORDER_WIDTH_THIN: f32 = 1.0;

// =============================================================================
// COMPONENT SIZES
// =============================================================================

/// Width of the metric name column in subject tables
pub const METRIC_NAME_WIDTH: f32 = 240.0;

/// Width of a metric card in the metrics view
pub const METRIC_CARD_WIDTH: f32 = 320.0;
