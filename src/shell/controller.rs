use smallvec::SmallVec;
use tracing::debug;

use super::binding::ShellBinding;
use super::types::{AnchorEdge, Anchors, ExclusiveZone, SurfaceConfig, SurfaceLayer};
use crate::error::ShellError;

/// A single configuration change flushed to the compositor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceDiff {
    Layer(SurfaceLayer),
    Anchor { edge: AnchorEdge, anchored: bool },
    ExclusiveZone(ExclusiveZone),
}

/// Sole owner of a layer surface's configuration.
///
/// Setters only touch the pending configuration. [`commit`](Self::commit)
/// sends whatever differs from the last commit to the binding in one go, so
/// the compositor never sees a half-applied state.
pub struct LayerSurfaceController<B: ShellBinding> {
    binding: B,
    pending: SurfaceConfig,
    committed: Option<SurfaceConfig>,
}

impl<B: ShellBinding> LayerSurfaceController<B> {
    /// Bind the window to the layer-shell protocol.
    ///
    /// Takes the binding by value, so a window can only be initialized once.
    pub fn init(binding: B, initial: SurfaceConfig) -> Result<Self, ShellError> {
        binding.init_for_window()?;

        debug!(
            "Layer surface created: layer={:?}, anchors={:?}, exclusive_zone={:?}",
            initial.layer, initial.anchors, initial.exclusive_zone
        );

        Ok(Self {
            binding,
            pending: initial,
            committed: None,
        })
    }

    pub fn set_layer(&mut self, layer: SurfaceLayer) {
        self.pending.layer = layer;
    }

    pub fn set_anchor(&mut self, edge: AnchorEdge, anchored: bool) {
        self.pending.anchors.set(edge.flag(), anchored);
    }

    pub fn set_exclusive_zone(&mut self, zone: impl Into<ExclusiveZone>) {
        self.pending.exclusive_zone = zone.into();
    }

    pub fn layer(&self) -> SurfaceLayer {
        self.pending.layer
    }

    pub fn anchors(&self) -> Anchors {
        self.pending.anchors
    }

    pub fn exclusive_zone(&self) -> ExclusiveZone {
        self.pending.exclusive_zone
    }

    /// Configuration as it will look after the next commit
    pub fn pending(&self) -> &SurfaceConfig {
        &self.pending
    }

    /// Configuration last flushed to the compositor
    pub fn committed(&self) -> Option<&SurfaceConfig> {
        self.committed.as_ref()
    }

    pub fn needs_commit(&self) -> bool {
        self.committed != Some(self.pending)
    }

    pub fn binding(&self) -> &B {
        &self.binding
    }

    /// Flush pending changes to the compositor binding
    pub fn commit(&mut self) -> SmallVec<[SurfaceDiff; 6]> {
        let diffs = Self::diff(self.committed.as_ref(), &self.pending);

        for diff in &diffs {
            match *diff {
                SurfaceDiff::Layer(layer) => self.binding.set_layer(layer),
                SurfaceDiff::Anchor { edge, anchored } => self.binding.set_anchor(edge, anchored),
                SurfaceDiff::ExclusiveZone(zone) => self.binding.set_exclusive_zone(zone),
            }
        }

        if !diffs.is_empty() {
            debug!("Committed {} surface change(s): {:?}", diffs.len(), diffs);
        }

        self.committed = Some(self.pending);
        diffs
    }

    fn diff(old: Option<&SurfaceConfig>, new: &SurfaceConfig) -> SmallVec<[SurfaceDiff; 6]> {
        let mut diffs = SmallVec::new();

        if old.map(|o| o.layer) != Some(new.layer) {
            diffs.push(SurfaceDiff::Layer(new.layer));
        }

        for edge in AnchorEdge::ALL {
            let anchored = new.anchors.is_anchored(edge);
            if old.map(|o| o.anchors.is_anchored(edge)) != Some(anchored) {
                diffs.push(SurfaceDiff::Anchor { edge, anchored });
            }
        }

        if old.map(|o| o.exclusive_zone) != Some(new.exclusive_zone) {
            diffs.push(SurfaceDiff::ExclusiveZone(new.exclusive_zone));
        }

        diffs
    }
}
