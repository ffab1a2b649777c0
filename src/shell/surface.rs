use smallvec::SmallVec;

use super::anchor::{AnchorIndicator, AnchorToggles};
use super::binding::ShellBinding;
use super::controller::{LayerSurfaceController, SurfaceDiff};
use super::selector::LayerSelector;
use super::types::{AnchorEdge, Anchors, ExclusiveZone, SurfaceConfig, SurfaceLayer};
use crate::error::ShellError;

/// Everything one window needs to drive its layer surface.
///
/// Owns the controller, the per-edge toggles and the layer selector; all of
/// them go away together when the surface is dropped.
pub struct LayerSurface<B: ShellBinding, I> {
    controller: LayerSurfaceController<B>,
    anchors: AnchorToggles<I>,
    selector: LayerSelector,
}

impl<B: ShellBinding, I: AnchorIndicator> LayerSurface<B, I> {
    /// Initialize layer-shell for the window behind `binding` and apply
    /// `initial`. Nothing reaches the compositor until [`commit`](Self::commit).
    pub fn new(
        binding: B,
        initial: SurfaceConfig,
        indicator_for: impl FnMut(AnchorEdge) -> I,
    ) -> Result<Self, ShellError> {
        let mut controller = LayerSurfaceController::init(
            binding,
            SurfaceConfig {
                anchors: Anchors::empty(),
                ..initial
            },
        )?;
        let anchors = AnchorToggles::new(initial.anchors, indicator_for, &mut controller);

        Ok(Self {
            controller,
            anchors,
            selector: LayerSelector::new(),
        })
    }

    pub fn toggle_anchor(&mut self, edge: AnchorEdge) -> bool {
        self.anchors.toggle(edge, &mut self.controller)
    }

    pub fn select_layer(&mut self, name: Option<&str>) -> Result<SurfaceLayer, ShellError> {
        self.selector.select(name, &mut self.controller)
    }

    pub fn set_exclusive_zone(&mut self, zone: impl Into<ExclusiveZone>) {
        self.controller.set_exclusive_zone(zone);
    }

    pub fn needs_commit(&self) -> bool {
        self.controller.needs_commit()
    }

    pub fn commit(&mut self) -> SmallVec<[SurfaceDiff; 6]> {
        self.controller.commit()
    }

    pub fn controller(&self) -> &LayerSurfaceController<B> {
        &self.controller
    }

    pub fn anchors(&self) -> &AnchorToggles<I> {
        &self.anchors
    }

    pub fn selector(&self) -> &LayerSelector {
        &self.selector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::testing::{BindingCall, RecordingBinding, RecordingIndicator};

    fn surface() -> (LayerSurface<RecordingBinding, RecordingIndicator>, RecordingBinding) {
        let binding = RecordingBinding::new();
        let surface = LayerSurface::new(binding.clone(), SurfaceConfig::default(), |_| {
            RecordingIndicator::default()
        })
        .unwrap();
        (surface, binding)
    }

    #[test]
    fn defaults_reserve_top_and_dock_left() {
        let (mut surface, binding) = surface();
        surface.commit();

        let committed = *surface.controller().committed().unwrap();
        assert_eq!(committed, SurfaceConfig::default());
        assert_eq!(committed.exclusive_edge(), Some(AnchorEdge::Top));
        assert_eq!(committed.docked_column(), Some(AnchorEdge::Left));

        let calls = binding.calls();
        assert_eq!(calls[0], BindingCall::Init);
        assert!(calls.contains(&BindingCall::Layer(SurfaceLayer::Top)));
        assert!(calls.contains(&BindingCall::Anchor(AnchorEdge::Left, true)));
        assert!(calls.contains(&BindingCall::Anchor(AnchorEdge::Top, true)));
        assert!(calls.contains(&BindingCall::ExclusiveZone(ExclusiveZone::Exclusive(20))));
    }

    #[test]
    fn indicators_match_initial_anchors() {
        let (surface, _) = surface();
        for toggle in surface.anchors().iter() {
            let expected = SurfaceConfig::DEFAULT_ANCHORS.is_anchored(toggle.edge());
            assert_eq!(toggle.indicator().shown(), Some(expected));
            assert_eq!(toggle.indicator().updates(), 1);
        }
    }

    #[test]
    fn one_callback_commits_once() {
        let (mut surface, binding) = surface();
        surface.commit();
        binding.clear();

        surface.toggle_anchor(AnchorEdge::Bottom);
        surface.select_layer(Some("Overlay")).unwrap();
        surface.set_exclusive_zone(0);
        assert!(surface.needs_commit());
        assert!(binding.calls().is_empty());

        let diffs = surface.commit();
        assert_eq!(
            diffs.as_slice(),
            [
                SurfaceDiff::Layer(SurfaceLayer::Overlay),
                SurfaceDiff::Anchor {
                    edge: AnchorEdge::Bottom,
                    anchored: true
                },
                SurfaceDiff::ExclusiveZone(ExclusiveZone::Neutral),
            ]
        );
        assert_eq!(binding.calls().len(), 3);
    }

    #[test]
    fn bad_layer_name_leaves_surface_alone() {
        let (mut surface, _) = surface();
        surface.commit();

        assert!(surface.select_layer(Some("Underlay")).is_err());
        assert!(!surface.needs_commit());
        assert_eq!(surface.controller().layer(), SurfaceLayer::Top);
    }
}
