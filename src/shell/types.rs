use std::cmp::Ordering;

use bitflags::bitflags;

use crate::error::ShellError;

/// Stacking layers, ordered by z depth, bottom-most first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SurfaceLayer {
    /// Below everything, usually wallpapers
    Background,
    /// Above the wallpaper, below regular windows
    Bottom,
    /// Above regular windows, below overlays
    Top,
    /// Above all other layers
    Overlay,
}

impl SurfaceLayer {
    /// Layers in the order they are offered to the user
    pub const MENU_ORDER: [SurfaceLayer; 4] = [
        SurfaceLayer::Overlay,
        SurfaceLayer::Top,
        SurfaceLayer::Bottom,
        SurfaceLayer::Background,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SurfaceLayer::Background => "Background",
            SurfaceLayer::Bottom => "Bottom",
            SurfaceLayer::Top => "Top",
            SurfaceLayer::Overlay => "Overlay",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, ShellError> {
        match name {
            "Background" => Ok(SurfaceLayer::Background),
            "Bottom" => Ok(SurfaceLayer::Bottom),
            "Top" => Ok(SurfaceLayer::Top),
            "Overlay" => Ok(SurfaceLayer::Overlay),
            other => Err(ShellError::UnknownLayer(other.to_string())),
        }
    }
}

/// One of the four screen edges a surface can attach to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorEdge {
    Left,
    Right,
    Top,
    Bottom,
}

impl AnchorEdge {
    pub const ALL: [AnchorEdge; 4] = [
        AnchorEdge::Left,
        AnchorEdge::Right,
        AnchorEdge::Top,
        AnchorEdge::Bottom,
    ];

    pub fn flag(self) -> Anchors {
        match self {
            AnchorEdge::Left => Anchors::LEFT,
            AnchorEdge::Right => Anchors::RIGHT,
            AnchorEdge::Top => Anchors::TOP,
            AnchorEdge::Bottom => Anchors::BOTTOM,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            AnchorEdge::Left => 0,
            AnchorEdge::Right => 1,
            AnchorEdge::Top => 2,
            AnchorEdge::Bottom => 3,
        }
    }
}

bitflags! {
    /// Set of edges a surface is anchored to
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Anchors: u32 {
        const TOP = 1;
        const BOTTOM = 2;
        const LEFT = 4;
        const RIGHT = 8;
    }
}

impl Default for Anchors {
    fn default() -> Self {
        Self::empty()
    }
}

impl Anchors {
    pub fn is_anchored(&self, edge: AnchorEdge) -> bool {
        self.contains(edge.flag())
    }
}

/// Space the surface asks other surfaces to keep clear of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExclusiveZone {
    /// Reserve this many pixels along the anchored edge
    Exclusive(u32),
    /// Reserve nothing, but move to avoid other exclusive zones
    #[default]
    Neutral,
    /// Ignore other exclusive zones and allow overlap
    DontCare,
}

impl From<i32> for ExclusiveZone {
    fn from(v: i32) -> Self {
        match v.cmp(&0) {
            Ordering::Greater => Self::Exclusive(v as u32),
            Ordering::Equal => Self::Neutral,
            Ordering::Less => Self::DontCare,
        }
    }
}

impl From<ExclusiveZone> for i32 {
    fn from(z: ExclusiveZone) -> i32 {
        match z {
            ExclusiveZone::Exclusive(v) => v.min(i32::MAX as u32) as i32,
            ExclusiveZone::Neutral => 0,
            ExclusiveZone::DontCare => -1,
        }
    }
}

/// Full configuration of a layer surface as requested from the compositor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceConfig {
    pub layer: SurfaceLayer,
    pub anchors: Anchors,
    pub exclusive_zone: ExclusiveZone,
}

impl SurfaceConfig {
    pub const DEFAULT_LAYER: SurfaceLayer = SurfaceLayer::Top;
    pub const DEFAULT_ANCHORS: Anchors = Anchors::LEFT.union(Anchors::TOP);
    pub const DEFAULT_EXCLUSIVE_ZONE: i32 = 20;

    /// Edge a positive exclusive zone is requested against.
    ///
    /// A single top/bottom anchor wins over a single left/right anchor.
    /// Returns `None` when neither axis has exactly one edge anchored; the
    /// compositor decides what happens then.
    pub fn exclusive_edge(&self) -> Option<AnchorEdge> {
        if !matches!(self.exclusive_zone, ExclusiveZone::Exclusive(_)) {
            return None;
        }
        Self::single_edge(self.anchors, AnchorEdge::Top, AnchorEdge::Bottom)
            .or_else(|| Self::single_edge(self.anchors, AnchorEdge::Left, AnchorEdge::Right))
    }

    /// Left or right column the surface is docked to, if exactly one is anchored
    pub fn docked_column(&self) -> Option<AnchorEdge> {
        Self::single_edge(self.anchors, AnchorEdge::Left, AnchorEdge::Right)
    }

    fn single_edge(anchors: Anchors, a: AnchorEdge, b: AnchorEdge) -> Option<AnchorEdge> {
        match (anchors.is_anchored(a), anchors.is_anchored(b)) {
            (true, false) => Some(a),
            (false, true) => Some(b),
            _ => None,
        }
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            layer: Self::DEFAULT_LAYER,
            anchors: Self::DEFAULT_ANCHORS,
            exclusive_zone: Self::DEFAULT_EXCLUSIVE_ZONE.into(),
        }
    }
}
