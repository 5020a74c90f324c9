// Copyright 2026 the Padnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Padnav Scene: the host-facing side of gamepad focus navigation.
//!
//! Directional (non-pointer) focus movement needs to ask questions about a
//! scene tree it does not own: which children a node has, where a node is on
//! screen, whether it is visible and accepts input, and which rendering
//! stratum it is drawn in. This crate defines that dependency surface as the
//! [`SceneHost`] trait, together with the vocabulary types the answers are
//! expressed in:
//!
//! - [`WidgetKind`] classifies a node (button, slider, scroll view, …).
//! - [`Stratum`] names the fixed ordered set of rendering layers, each
//!   spanning [`Stratum::SPAN`] layer units.
//! - [`NodeState`] carries boolean node state (visible, forbidden, accepts
//!   pointer input, …) as `bitflags`.
//! - [`NavAttrs`] carries the per-node navigation attributes a host may
//!   declare (ignore, priority, singleton, pass-through).
//!
//! The trait is generic over the node identifier `K`, so hosts can use any
//! small, copyable handle (a slot index, an ECS entity, or an
//! application-specific id).
//!
//! The [`simple`] module provides [`simple::SimpleScene`], a small retained
//! scene graph implementing [`SceneHost`]. It exists for tests, doc examples,
//! and demos; production hosts implement the trait over their own scene
//! storage.
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

use kurbo::{Insets, Rect};
use smallvec::SmallVec;

pub mod simple;

/// Child list returned by [`SceneHost::children`].
///
/// Most scene nodes have only a handful of children, so the list is inline
/// up to eight entries.
pub type Children<K> = SmallVec<[K; 8]>;

bitflags::bitflags! {
    /// Boolean node state reported by the host.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeState: u8 {
        /// Node is currently visible.
        const VISIBLE   = 0b0000_0001;
        /// Node is forbidden (disabled); it and its subtree are skipped.
        const FORBIDDEN = 0b0000_0010;
        /// Node accepts pointer input, and therefore occludes what is below it.
        const POINTER   = 0b0000_0100;
        /// Node accepts wheel input. The navigation core records but does
        /// not consume this flag; it is reserved for hosts that route wheel
        /// events alongside directional focus.
        const WHEEL     = 0b0000_1000;
        /// Node exhibits interactive-handler behavior even if its
        /// [`WidgetKind`] is not one of the recognized interactive kinds.
        const HANDLERS  = 0b0001_0000;
    }
}

impl Default for NodeState {
    fn default() -> Self {
        Self::VISIBLE | Self::POINTER
    }
}

/// Widget classification of a scene node.
///
/// The closed set below is what navigation needs to reason about; hosts map
/// their own widget zoo onto it. Anything without a better match is a
/// [`WidgetKind::Surface`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// Plain pressable button.
    Button,
    /// Two-state toggle or checkbox.
    Toggle,
    /// Slider-type control. Sliders double as clip ancestors with stricter
    /// intersection rules during scanning.
    Slider,
    /// Editable text field.
    TextInput,
    /// Selectable item inside a list.
    ListItem,
    /// Scroll container. Never cached as a navigation target itself.
    ScrollView,
    /// Generic surface: panels, images, decorations.
    Surface,
}

impl WidgetKind {
    /// Whether this kind is one of the recognized interactive widget kinds.
    pub const fn is_interactive(self) -> bool {
        matches!(
            self,
            Self::Button | Self::Toggle | Self::Slider | Self::TextInput | Self::ListItem
        )
    }

    /// Whether this kind is a scroll-container type.
    pub const fn is_scroll_container(self) -> bool {
        matches!(self, Self::ScrollView)
    }

    /// Whether this kind is a slider-type control.
    pub const fn is_slider(self) -> bool {
        matches!(self, Self::Slider)
    }
}

/// Rendering stratum of a node.
///
/// Strata form a fixed total order from background to tooltip. Each stratum
/// spans [`Stratum::SPAN`] layer units; a node's absolute layer is its
/// stratum base plus its local depth within the stratum.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stratum {
    /// Backdrop content.
    Background,
    /// Below-normal content.
    Low,
    /// Normal content.
    Medium,
    /// Above-normal content.
    High,
    /// Modal dialogs.
    Dialog,
    /// Fullscreen surfaces.
    Fullscreen,
    /// Dialogs above fullscreen surfaces.
    FullscreenDialog,
    /// Tooltips, above everything.
    Tooltip,
}

impl Stratum {
    /// Layer units spanned by one stratum.
    pub const SPAN: i64 = 10_000;

    /// The base layer of this stratum.
    pub const fn base(self) -> i64 {
        self as i64 * Self::SPAN
    }
}

/// Per-node navigation attributes declared by the host.
///
/// These are layered on top of the scene tree: they do not affect rendering
/// or hit testing, only how the scanner and the fallback selector treat the
/// node.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NavAttrs {
    /// Exclude this node and its subtree from scans.
    pub ignore: bool,
    /// Explicit 1-based cache insertion position; also wins the fallback
    /// selection outright when set.
    pub priority: Option<usize>,
    /// Suppress recursion into this node's children. The node itself is
    /// still classified.
    pub singleton: bool,
    /// Exclude this node from caching as a navigation target, but still scan
    /// its children.
    pub pass_through: bool,
}

/// Capabilities a host scene must provide for navigation.
///
/// The navigation core never owns or mutates scene elements; it only queries
/// them through this trait and stores `K` handles. Hosts guarantee a finite,
/// acyclic tree — the core does not defend against cycles.
///
/// Several methods have defaults matching the most common answer so that
/// simple hosts only implement the structural and geometric queries.
pub trait SceneHost<K: Copy + Eq> {
    /// The node's children, in host-defined order.
    fn children(&self, node: K) -> Children<K>;

    /// The node's parent, or `None` for roots.
    fn parent(&self, node: K) -> Option<K>;

    /// The node's laid-out rectangle in its own scale, or `None` if the node
    /// currently reports no rectangle.
    fn frame(&self, node: K) -> Option<Rect>;

    /// Hit-test insets shrinking (or, negative, growing) the frame for the
    /// purpose of computing the hit center.
    fn hit_insets(&self, _node: K) -> Insets {
        Insets::ZERO
    }

    /// Effective rendering scale of the node.
    fn render_scale(&self, _node: K) -> f64 {
        1.0
    }

    /// Boolean node state.
    fn state(&self, node: K) -> NodeState;

    /// Widget classification.
    fn kind(&self, node: K) -> WidgetKind;

    /// Rendering stratum.
    fn stratum(&self, node: K) -> Stratum;

    /// Depth of the node within its stratum.
    fn local_depth(&self, node: K) -> i64;

    /// Navigation attributes.
    fn attrs(&self, _node: K) -> NavAttrs {
        NavAttrs::default()
    }

    /// Whether the node clips or scrolls its children. Such a node becomes
    /// the active clip ancestor for its descendants during a scan.
    fn clips_children(&self, _node: K) -> bool {
        false
    }

    /// For scroll containers, the host controls that scroll backward and
    /// forward (for example, a pair of arrow buttons).
    fn scroll_controls(&self, _node: K) -> Option<(K, K)> {
        None
    }
}
