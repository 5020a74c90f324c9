// Copyright 2026 the Padnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The node and rect caches rebuilt by every scan.
//!
//! Both containers live and die together: a scan clears them atomically and
//! repopulates them in one pass, so no partial state is ever observable
//! between a clear and a completed scan.

use alloc::vec::Vec;

use crate::types::{CachedNode, OcclusionRect};

/// Ordered storage for scan results.
///
/// - The node cache holds interactive nodes, priority-first and otherwise in
///   scan (insertion) order.
/// - The rect cache holds the bounds of every pointer-responsive node,
///   strictly ordered by descending layer; equal layers keep insertion order.
#[derive(Clone, Debug)]
pub struct NavCache<K> {
    nodes: Vec<CachedNode<K>>,
    rects: Vec<OcclusionRect<K>>,
}

impl<K> Default for NavCache<K> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            rects: Vec::new(),
        }
    }
}

impl<K: Copy + Eq> NavCache<K> {
    /// Create an empty cache pair.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            rects: Vec::new(),
        }
    }

    /// Insert into the node cache.
    ///
    /// With a priority, the entry lands at that 1-based position, shifting
    /// later entries; a position past the end (or 0) is clamped. Without a
    /// priority, the entry is appended.
    pub fn insert_node(&mut self, priority: Option<usize>, entry: CachedNode<K>) {
        match priority {
            Some(p) => {
                let at = (p.max(1) - 1).min(self.nodes.len());
                self.nodes.insert(at, entry);
            }
            None => self.nodes.push(entry),
        }
    }

    /// Insert into the rect cache, preserving the descending-layer order.
    ///
    /// The entry lands before the first existing entry with a strictly
    /// smaller layer, so ties go after equal-or-greater layers.
    pub fn insert_rect(&mut self, entry: OcclusionRect<K>) {
        let at = self
            .rects
            .iter()
            .position(|r| r.layer < entry.layer)
            .unwrap_or(self.rects.len());
        self.rects.insert(at, entry);
    }

    /// Empty both caches.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.rects.clear();
    }

    /// Whether both caches are empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.rects.is_empty()
    }

    /// The node cache, in priority/scan order.
    pub fn nodes(&self) -> &[CachedNode<K>] {
        &self.nodes
    }

    /// The rect cache, in descending layer order.
    pub fn rects(&self) -> &[OcclusionRect<K>] {
        &self.rects
    }

    pub(crate) fn remove_node(&mut self, at: usize) {
        self.nodes.remove(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use padnav_scene::WidgetKind;

    fn node(id: u32, layer: i64) -> CachedNode<u32> {
        CachedNode {
            node: id,
            kind: WidgetKind::Button,
            clip_ancestor: None,
            layer,
        }
    }

    #[test]
    fn nodes_append_without_priority() {
        let mut cache = NavCache::new();
        cache.insert_node(None, node(1, 0));
        cache.insert_node(None, node(2, 0));
        let ids: Vec<u32> = cache.nodes().iter().map(|n| n.node).collect();
        assert_eq!(ids, [1, 2]);
    }

    #[test]
    fn priority_is_a_one_based_position() {
        let mut cache = NavCache::new();
        cache.insert_node(None, node(1, 0));
        cache.insert_node(None, node(2, 0));
        cache.insert_node(Some(1), node(3, 0));
        cache.insert_node(Some(2), node(4, 0));
        let ids: Vec<u32> = cache.nodes().iter().map(|n| n.node).collect();
        assert_eq!(ids, [3, 4, 1, 2]);
    }

    #[test]
    fn priority_past_the_end_appends() {
        let mut cache = NavCache::new();
        cache.insert_node(None, node(1, 0));
        cache.insert_node(Some(99), node(2, 0));
        cache.insert_node(Some(0), node(3, 0));
        let ids: Vec<u32> = cache.nodes().iter().map(|n| n.node).collect();
        assert_eq!(ids, [3, 1, 2]);
    }

    #[test]
    fn rects_stay_sorted_descending_with_ties_after() {
        let mut cache: NavCache<u32> = NavCache::new();
        for (id, layer) in [(1, 10_000), (2, 50_000), (3, 40_000), (4, 40_000)] {
            cache.insert_rect(OcclusionRect { node: id, layer });
        }
        let order: Vec<(u32, i64)> = cache.rects().iter().map(|r| (r.node, r.layer)).collect();
        assert_eq!(
            order,
            [(2, 50_000), (3, 40_000), (4, 40_000), (1, 10_000)],
            "ties must land after equal layers"
        );
    }

    #[test]
    fn clear_empties_both_caches() {
        let mut cache = NavCache::new();
        cache.insert_node(None, node(1, 0));
        cache.insert_rect(OcclusionRect { node: 1, layer: 0 });
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
    }
}
