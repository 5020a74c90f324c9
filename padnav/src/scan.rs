// Copyright 2026 the Padnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene scanning: classify elements and populate the caches.
//!
//! The walk is depth-first in host child order, driven by an explicit
//! worklist of `(node, clip_ancestor)` pairs so that deep host trees cannot
//! exhaust the call stack. The active clip/scroll ancestor is threaded down
//! the stack: it becomes the node itself whenever the node clips its
//! children, and is inherited unchanged otherwise.

use alloc::vec::Vec;
use padnav_scene::{NodeState, SceneHost};

use crate::types::{CachedNode, OcclusionRect};
use crate::{geometry, Navigator};

impl<K: Copy + Eq> Navigator<K> {
    /// Rebuild both caches from the given root elements.
    ///
    /// Clears the previous contents, walks each root's subtree in order, and
    /// finishes with the occlusion scrub, so the caches are atomically
    /// replaced before this returns.
    pub fn scan<H>(&mut self, host: &H, roots: &[K])
    where
        H: SceneHost<K>,
    {
        self.clear_cache();
        let mut stack: Vec<(K, Option<K>)> = Vec::with_capacity(roots.len());
        for &root in roots.iter().rev() {
            stack.push((root, None));
        }
        self.walk(host, stack);
        self.scrub(host);
    }

    /// Rebuild both caches from a single branch.
    ///
    /// Locates the nearest clip/scroll ancestor of `node` by walking upward,
    /// clears the caches, then classifies `node` itself and scans its
    /// subtree under that ancestor. Used for incremental rescans when only
    /// one branch of the scene changed.
    pub fn scan_subtree<H>(&mut self, host: &H, node: K)
    where
        H: SceneHost<K>,
    {
        let mut clip = None;
        let mut cur = host.parent(node);
        while let Some(p) = cur {
            if host.clips_children(p) {
                clip = Some(p);
                break;
            }
            cur = host.parent(p);
        }

        self.clear_cache();
        let mut stack = Vec::new();
        stack.push((node, clip));
        self.walk(host, stack);
        self.scrub(host);
    }

    /// Whether a node participates in scanning at all: not forbidden, not
    /// flagged ignored, and currently visible.
    pub fn is_relevant<H>(&self, host: &H, node: K) -> bool
    where
        H: SceneHost<K>,
    {
        let state = host.state(node);
        state.contains(NodeState::VISIBLE)
            && !state.contains(NodeState::FORBIDDEN)
            && !host.attrs(node).ignore
    }

    /// Whether a node is currently drawn: its reference-space hit center
    /// lies within the screen bounds, and — when its clip ancestor is a
    /// slider-type control — its frame intersects that ancestor's frame.
    pub fn is_drawn<H>(&self, host: &H, node: K, clip_ancestor: Option<K>) -> bool
    where
        H: SceneHost<K>,
    {
        let m = self.metrics();
        let Some(center) = geometry::center_in_reference_space(host, node, m) else {
            return false;
        };
        if !geometry::in_range(center.x, 0.0, m.width) || !geometry::in_range(center.y, 0.0, m.height)
        {
            return false;
        }
        match clip_ancestor {
            None => true,
            Some(clip) => {
                !host.kind(clip).is_slider() || geometry::rects_intersect(host, node, clip, m)
            }
        }
    }

    fn walk<H>(&mut self, host: &H, mut stack: Vec<(K, Option<K>)>)
    where
        H: SceneHost<K>,
    {
        while let Some((node, clip)) = stack.pop() {
            // An irrelevant element hides its entire subtree.
            if !self.is_relevant(host, node) {
                continue;
            }

            self.classify(host, node, clip);

            // Geometry may differ per descendant, so recursion continues even
            // when the element itself was not drawn. Singletons stop it.
            if !host.attrs(node).singleton {
                let child_clip = if host.clips_children(node) {
                    Some(node)
                } else {
                    clip
                };
                let children = host.children(node);
                for &child in children.iter().rev() {
                    stack.push((child, child_clip));
                }
            }
        }
    }

    fn classify<H>(&mut self, host: &H, node: K, clip: Option<K>)
    where
        H: SceneHost<K>,
    {
        if !self.is_drawn(host, node, clip) {
            return;
        }
        let state = host.state(node);
        if !state.contains(NodeState::POINTER) {
            return;
        }

        let kind = host.kind(node);
        let attrs = host.attrs(node);
        let layer = geometry::absolute_layer(host, node);
        let interactive = !kind.is_scroll_container()
            && !attrs.pass_through
            && (kind.is_interactive() || state.contains(NodeState::HANDLERS));

        if interactive {
            self.cache.insert_node(
                attrs.priority,
                CachedNode {
                    node,
                    kind,
                    clip_ancestor: clip,
                    layer,
                },
            );
        }
        // An interactive node occludes like any other pointer-responsive
        // surface, so the rect entry is unconditional.
        self.cache.insert_rect(OcclusionRect { node, layer });
    }
}
