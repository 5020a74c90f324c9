// Copyright 2026 the Padnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small retained scene graph implementing [`SceneHost`].
//!
//! [`SimpleScene`] exists so that the navigation core can be exercised
//! without a real UI toolkit: tests, doc examples, and demos build their
//! trees here. It stores nodes in a slot vector with parent/child links and
//! answers every [`SceneHost`] query from per-node [`SceneNode`] data.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use padnav_scene::simple::{SceneNode, SimpleScene};
//! use padnav_scene::{SceneHost, WidgetKind};
//!
//! let mut scene = SimpleScene::new();
//! let root = scene.insert(None, SceneNode::default());
//! let button = scene.insert(
//!     Some(root),
//!     SceneNode {
//!         frame: Some(Rect::new(10.0, 10.0, 60.0, 40.0)),
//!         kind: WidgetKind::Button,
//!         ..SceneNode::default()
//!     },
//! );
//!
//! assert_eq!(scene.parent(button), Some(root));
//! assert_eq!(scene.children(root).as_slice(), &[button]);
//! ```

use alloc::vec::Vec;
use kurbo::{Insets, Rect};

use crate::{Children, NavAttrs, NodeState, SceneHost, Stratum, WidgetKind};

/// Identifier of a node in a [`SimpleScene`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeRef(u32);

impl NodeRef {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Per-node data held by a [`SimpleScene`].
#[derive(Clone, Debug)]
pub struct SceneNode {
    /// Laid-out rectangle, or `None` if the node has no geometry yet.
    pub frame: Option<Rect>,
    /// Hit-test insets applied when computing the hit center.
    pub hit_insets: Insets,
    /// Effective rendering scale.
    pub scale: f64,
    /// Boolean node state.
    pub state: NodeState,
    /// Widget classification.
    pub kind: WidgetKind,
    /// Rendering stratum.
    pub stratum: Stratum,
    /// Navigation attributes.
    pub attrs: NavAttrs,
    /// Whether the node clips or scrolls its children.
    pub clips_children: bool,
    /// Backward/forward scroll controls, for scroll containers.
    pub scroll_controls: Option<(NodeRef, NodeRef)>,
}

impl Default for SceneNode {
    fn default() -> Self {
        Self {
            frame: None,
            hit_insets: Insets::ZERO,
            scale: 1.0,
            state: NodeState::default(),
            kind: WidgetKind::Surface,
            stratum: Stratum::Medium,
            attrs: NavAttrs::default(),
            clips_children: false,
            scroll_controls: None,
        }
    }
}

#[derive(Clone, Debug)]
struct Entry {
    data: SceneNode,
    parent: Option<NodeRef>,
    children: Vec<NodeRef>,
}

/// A retained scene graph backed by a slot vector.
///
/// Nodes are inserted under a parent (or as roots) and never removed; the
/// node's position in its parent's child list is its host-defined order.
/// Local depth within a stratum is the node's ancestor count.
#[derive(Clone, Debug, Default)]
pub struct SimpleScene {
    nodes: Vec<Entry>,
}

impl SimpleScene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node as a child of `parent`, or as a root if `None`.
    pub fn insert(&mut self, parent: Option<NodeRef>, data: SceneNode) -> NodeRef {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeRef uses 32-bit indices by design."
        )]
        let id = NodeRef(self.nodes.len() as u32);
        self.nodes.push(Entry {
            data,
            parent,
            children: Vec::new(),
        });
        if let Some(p) = parent {
            self.nodes[p.idx()].children.push(id);
        }
        id
    }

    /// All root nodes, in insertion order.
    pub fn roots(&self) -> Vec<NodeRef> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, e)| {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "NodeRef uses 32-bit indices by design."
                )]
                let id = NodeRef(i as u32);
                e.parent.is_none().then_some(id)
            })
            .collect()
    }

    /// Mutable access to a node's data.
    pub fn node_mut(&mut self, id: NodeRef) -> &mut SceneNode {
        &mut self.nodes[id.idx()].data
    }

    /// Update a node's frame.
    pub fn set_frame(&mut self, id: NodeRef, frame: Option<Rect>) {
        self.nodes[id.idx()].data.frame = frame;
    }

    /// Update a node's state flags.
    pub fn set_state(&mut self, id: NodeRef, state: NodeState) {
        self.nodes[id.idx()].data.state = state;
    }

    /// Update a node's navigation attributes.
    pub fn set_attrs(&mut self, id: NodeRef, attrs: NavAttrs) {
        self.nodes[id.idx()].data.attrs = attrs;
    }

    fn data(&self, id: NodeRef) -> &SceneNode {
        &self.nodes[id.idx()].data
    }
}

impl SceneHost<NodeRef> for SimpleScene {
    fn children(&self, node: NodeRef) -> Children<NodeRef> {
        self.nodes[node.idx()].children.iter().copied().collect()
    }

    fn parent(&self, node: NodeRef) -> Option<NodeRef> {
        self.nodes[node.idx()].parent
    }

    fn frame(&self, node: NodeRef) -> Option<Rect> {
        self.data(node).frame
    }

    fn hit_insets(&self, node: NodeRef) -> Insets {
        self.data(node).hit_insets
    }

    fn render_scale(&self, node: NodeRef) -> f64 {
        self.data(node).scale
    }

    fn state(&self, node: NodeRef) -> NodeState {
        self.data(node).state
    }

    fn kind(&self, node: NodeRef) -> WidgetKind {
        self.data(node).kind
    }

    fn stratum(&self, node: NodeRef) -> Stratum {
        self.data(node).stratum
    }

    fn local_depth(&self, node: NodeRef) -> i64 {
        let mut depth = 0_i64;
        let mut cur = self.parent(node);
        while let Some(p) = cur {
            depth += 1;
            cur = self.parent(p);
        }
        depth
    }

    fn attrs(&self, node: NodeRef) -> NavAttrs {
        self.data(node).attrs
    }

    fn clips_children(&self, node: NodeRef) -> bool {
        self.data(node).clips_children
    }

    fn scroll_controls(&self, node: NodeRef) -> Option<(NodeRef, NodeRef)> {
        self.data(node).scroll_controls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_links_parent_and_child_order() {
        let mut scene = SimpleScene::new();
        let root = scene.insert(None, SceneNode::default());
        let a = scene.insert(Some(root), SceneNode::default());
        let b = scene.insert(Some(root), SceneNode::default());

        assert_eq!(scene.children(root).as_slice(), &[a, b]);
        assert_eq!(scene.parent(a), Some(root));
        assert_eq!(scene.parent(root), None);
        assert_eq!(scene.roots(), [root]);
    }

    #[test]
    fn local_depth_counts_ancestors() {
        let mut scene = SimpleScene::new();
        let root = scene.insert(None, SceneNode::default());
        let mid = scene.insert(Some(root), SceneNode::default());
        let leaf = scene.insert(Some(mid), SceneNode::default());

        assert_eq!(scene.local_depth(root), 0);
        assert_eq!(scene.local_depth(mid), 1);
        assert_eq!(scene.local_depth(leaf), 2);
    }

    #[test]
    fn mutators_update_node_data() {
        let mut scene = SimpleScene::new();
        let n = scene.insert(None, SceneNode::default());

        scene.set_frame(n, Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
        scene.set_state(n, NodeState::VISIBLE);
        scene.set_attrs(
            n,
            NavAttrs {
                singleton: true,
                ..NavAttrs::default()
            },
        );

        assert_eq!(scene.frame(n), Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert!(!scene.state(n).contains(NodeState::POINTER));
        assert!(scene.attrs(n).singleton);
    }
}
