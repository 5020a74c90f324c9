// Copyright 2026 the Padnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Padnav: directional, non-pointer ("gamepad") focus movement over a scene
//! tree.
//!
//! Given a host scene implementing [`SceneHost`], this crate answers queries
//! like "find the best element above the current focus" or "find something
//! reasonable to focus when nothing is selected". It does so in three stages,
//! all owned by a [`Navigator`] context:
//!
//! - **Scan** ([`Navigator::scan`] / [`Navigator::scan_subtree`]): a worklist
//!   walk over the scene that classifies each relevant element, caching
//!   interactive ones as navigation targets and every pointer-responsive one
//!   as an occluding rect.
//! - **Occlusion filter** (run automatically after each scan): removes
//!   cached targets whose centers are hidden behind higher-layer rects.
//! - **Selection** ([`Navigator::find_best_strict`],
//!   [`Navigator::find_best_balanced`], [`Navigator::find_best_permissive`],
//!   [`Navigator::pick_arbitrary`]): vector/angle-based strategies over the
//!   cache, from strict axis-dominant movement down to a deterministic
//!   priority fallback.
//!
//! All coordinates are compared in one reference space (y-up): each node's
//! geometry is normalized by `render_scale(node) / metrics.scale` using the
//! [`ScreenMetrics`] the host keeps current via [`Navigator::set_metrics`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use padnav::{Direction, Navigator, ScreenMetrics};
//! use padnav_scene::simple::{SceneNode, SimpleScene};
//! use padnav_scene::WidgetKind;
//!
//! let mut scene = SimpleScene::new();
//! let root = scene.insert(None, SceneNode::default());
//! let mut button = |scene: &mut SimpleScene, frame| {
//!     scene.insert(
//!         Some(root),
//!         SceneNode {
//!             frame: Some(frame),
//!             kind: WidgetKind::Button,
//!             ..SceneNode::default()
//!         },
//!     )
//! };
//! let lower = button(&mut scene, Rect::new(0.0, 0.0, 40.0, 20.0));
//! let upper = button(&mut scene, Rect::new(0.0, 100.0, 40.0, 120.0));
//!
//! let mut nav = Navigator::new(ScreenMetrics::new(800.0, 600.0, 1.0));
//! nav.scan(&scene, &[root]);
//!
//! let (next, changed) = nav.find_best_strict(&scene, lower, Direction::Up);
//! assert!(changed);
//! assert_eq!(next, upper);
//! ```
//!
//! ## What this crate is not
//!
//! It does not own the scene (elements are only borrowed through `K`
//! handles), does not handle pointer/mouse interaction, and assumes the host
//! guarantees a finite acyclic tree and does not mutate the scene during a
//! scan. Queries never fail loudly: missing geometry and empty caches yield
//! "no candidate" sentinels rather than errors.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for
//!   floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use hashbrown::HashMap;
use padnav_scene::SceneHost;

mod cache;
mod geometry;
mod navigate;
mod occlusion;
mod scan;
mod types;

pub use cache::NavCache;
pub use types::{CachedNode, Direction, KeyCode, OcclusionRect, ScreenMetrics};

/// The navigation context: caches, screen metrics, and key mapping.
///
/// One `Navigator` serves one logical scene. Every operation borrows the
/// host immutably; the navigator never stores anything host-owned beyond `K`
/// handles captured at scan time. Single-threaded by design: callers must
/// not interleave a navigation query with an in-progress scan.
#[derive(Clone, Debug)]
pub struct Navigator<K> {
    cache: NavCache<K>,
    metrics: ScreenMetrics,
    keys: HashMap<KeyCode, Direction>,
}

impl<K> Default for Navigator<K> {
    fn default() -> Self {
        Self {
            cache: NavCache::default(),
            metrics: ScreenMetrics::default(),
            keys: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq> Navigator<K> {
    /// Create a navigator with the given screen metrics.
    pub fn new(metrics: ScreenMetrics) -> Self {
        Self {
            metrics,
            ..Self::default()
        }
    }

    /// The current screen metrics.
    pub fn metrics(&self) -> ScreenMetrics {
        self.metrics
    }

    /// Replace the screen metrics in place.
    ///
    /// Call this from the host's display-metric change notification. Cached
    /// scan results are not invalidated automatically; the host is expected
    /// to trigger a rescan after a display change.
    pub fn set_metrics(&mut self, metrics: ScreenMetrics) {
        self.metrics = metrics;
    }

    /// Read-only access to the node and rect caches.
    pub fn cache(&self) -> &NavCache<K> {
        &self.cache
    }

    /// Drop all cached scan results.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Map an input identifier to a canonical direction, replacing any
    /// previous mapping for that identifier.
    pub fn set_direction_key(&mut self, key: KeyCode, direction: Direction) {
        self.keys.insert(key, direction);
    }

    /// The direction an input identifier is mapped to, or `None` if unmapped
    /// (the host then treats the input as non-navigational).
    pub fn direction_key(&self, key: KeyCode) -> Option<Direction> {
        self.keys.get(&key).copied()
    }

    /// The backward/forward scroll controls of a scroll container, if the
    /// host declares any. `None` for non-scroll-container nodes.
    pub fn scroll_controls<H>(&self, host: &H, node: K) -> Option<(K, K)>
    where
        H: SceneHost<K>,
    {
        if host.kind(node).is_scroll_container() {
            host.scroll_controls(node)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_keys_are_remappable() {
        let mut nav: Navigator<u32> = Navigator::default();
        let key = KeyCode(42);
        assert_eq!(nav.direction_key(key), None);

        nav.set_direction_key(key, Direction::Left);
        assert_eq!(nav.direction_key(key), Some(Direction::Left));

        nav.set_direction_key(key, Direction::Down);
        assert_eq!(nav.direction_key(key), Some(Direction::Down));
        assert_eq!(nav.direction_key(KeyCode(7)), None);
    }

    #[test]
    fn scroll_controls_only_for_scroll_containers() {
        use padnav_scene::simple::{SceneNode, SimpleScene};
        use padnav_scene::WidgetKind;

        let mut scene = SimpleScene::new();
        let prev = scene.insert(None, SceneNode::default());
        let next = scene.insert(None, SceneNode::default());
        let list = scene.insert(
            None,
            SceneNode {
                kind: WidgetKind::ScrollView,
                scroll_controls: Some((prev, next)),
                ..SceneNode::default()
            },
        );
        let button = scene.insert(
            None,
            SceneNode {
                kind: WidgetKind::Button,
                scroll_controls: Some((prev, next)),
                ..SceneNode::default()
            },
        );

        let nav = Navigator::new(ScreenMetrics::new(100.0, 100.0, 1.0));
        assert_eq!(nav.scroll_controls(&scene, list), Some((prev, next)));
        assert_eq!(nav.scroll_controls(&scene, button), None);
    }
}
