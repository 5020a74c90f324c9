// Copyright 2026 the Padnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: directions, key codes, screen metrics, and cache entries.

/// One of the four canonical navigation directions.
///
/// The coordinate convention is y-up: a candidate "above" the current focus
/// has a larger y in reference space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward larger y.
    Up,
    /// Toward smaller y.
    Down,
    /// Toward smaller x.
    Left,
    /// Toward larger x.
    Right,
}

impl Direction {
    /// The ideal candidate angle for this direction, in degrees measured
    /// clockwise from the positive y axis.
    pub(crate) const fn ideal_angle(self) -> f64 {
        match self {
            Self::Up => 0.0,
            Self::Right => 90.0,
            Self::Down => 180.0,
            Self::Left => -90.0,
        }
    }
}

/// Host input identifier remappable to a [`Direction`].
///
/// The host decides what the number means (a scancode, a gamepad button, an
/// action id); the navigator only uses it as a map key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyCode(pub u32);

/// Current display metrics in reference space.
///
/// Updated in place whenever the host reports a display or scale change;
/// read by every geometric predicate. Last write wins.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScreenMetrics {
    /// Screen width in reference space.
    pub width: f64,
    /// Screen height in reference space.
    pub height: f64,
    /// Reference scale that per-node render scales are normalized against.
    pub scale: f64,
}

impl ScreenMetrics {
    /// Create metrics from width, height, and reference scale.
    pub const fn new(width: f64, height: f64, scale: f64) -> Self {
        Self {
            width,
            height,
            scale,
        }
    }
}

impl Default for ScreenMetrics {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            scale: 1.0,
        }
    }
}

/// A scene node classified as interactive during the last scan.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CachedNode<K> {
    /// The host node.
    pub node: K,
    /// Widget classification captured at scan time.
    pub kind: padnav_scene::WidgetKind,
    /// Nearest ancestor that clips or scrolls its children, if any.
    pub clip_ancestor: Option<K>,
    /// Absolute layer (stratum base plus local depth).
    pub layer: i64,
}

/// The on-screen bounds of a pointer-responsive node, kept for occlusion
/// tests against lower-layer cached nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OcclusionRect<K> {
    /// The host node.
    pub node: K,
    /// Absolute layer (stratum base plus local depth).
    pub layer: i64,
}

/// Transient per-query descriptor of one candidate relative to the current
/// focus: reference-space position, absolute axis distances, and angle in
/// degrees clockwise from the positive y axis (up = 0°, right = 90°).
///
/// Never persisted beyond a single navigation query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct CandidateVector {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) h: f64,
    pub(crate) v: f64,
    pub(crate) angle: f64,
}
