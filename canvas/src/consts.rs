//! Shared numeric constants for the canvas crate.

// ── Hotspot marker ──────────────────────────────────────────────

/// Marker radius as a fraction of the square side the marker is drawn on.
pub const MARKER_RADIUS_RATIO: f64 = 0.015;

/// Smallest marker radius in pixels, so tiny images still get a visible dot.
pub const MARKER_MIN_RADIUS_PX: f64 = 6.0;

/// Width of the contrasting ring drawn around the marker disc.
pub const MARKER_RING_PX: f64 = 2.0;

/// Marker disc colour (opaque red).
pub const MARKER_FILL: [u8; 4] = [255, 0, 0, 255];

/// Marker ring colour (opaque white).
pub const MARKER_RING: [u8; 4] = [255, 255, 255, 255];

// ── Padding ─────────────────────────────────────────────────────

/// Default fill for padding added around an image (opaque black).
pub const DEFAULT_PAD_FILL: [u8; 4] = [0, 0, 0, 255];
