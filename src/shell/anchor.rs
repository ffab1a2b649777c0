use gtk4::prelude::*;
use gtk4::Button;
use tracing::debug;

use super::binding::ShellBinding;
use super::controller::LayerSurfaceController;
use super::types::{AnchorEdge, Anchors};

/// Visual feedback for one anchor edge
pub trait AnchorIndicator {
    fn show_anchored(&self, anchored: bool);
}

/// Anchored edges draw a button frame, free edges are flat
impl AnchorIndicator for Button {
    fn show_anchored(&self, anchored: bool) {
        self.set_has_frame(anchored);
        if anchored {
            self.add_css_class("anchor-active");
        } else {
            self.remove_css_class("anchor-active");
        }
    }
}

/// Two-state toggle for a single edge, bound to an indicator and the controller
#[derive(Debug)]
pub struct AnchorToggle<I> {
    edge: AnchorEdge,
    anchored: bool,
    indicator: I,
}

impl<I: AnchorIndicator> AnchorToggle<I> {
    /// Create the toggle in `anchored` state, updating the indicator and the
    /// controller once.
    pub fn new<B: ShellBinding>(
        edge: AnchorEdge,
        anchored: bool,
        indicator: I,
        surface: &mut LayerSurfaceController<B>,
    ) -> Self {
        let toggle = Self {
            edge,
            anchored,
            indicator,
        };
        toggle.apply(surface);
        toggle
    }

    /// Flip the edge. Returns the new state.
    pub fn toggle<B: ShellBinding>(&mut self, surface: &mut LayerSurfaceController<B>) -> bool {
        self.anchored = !self.anchored;
        self.apply(surface);
        debug!("Anchor {:?} toggled to {}", self.edge, self.anchored);
        self.anchored
    }

    pub fn edge(&self) -> AnchorEdge {
        self.edge
    }

    pub fn is_anchored(&self) -> bool {
        self.anchored
    }

    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    fn apply<B: ShellBinding>(&self, surface: &mut LayerSurfaceController<B>) {
        self.indicator.show_anchored(self.anchored);
        surface.set_anchor(self.edge, self.anchored);
    }
}

/// The four per-edge toggles of one surface
#[derive(Debug)]
pub struct AnchorToggles<I> {
    toggles: [AnchorToggle<I>; 4],
}

impl<I: AnchorIndicator> AnchorToggles<I> {
    /// Build one toggle per edge, anchored where `initial` says so.
    pub fn new<B: ShellBinding>(
        initial: Anchors,
        mut indicator_for: impl FnMut(AnchorEdge) -> I,
        surface: &mut LayerSurfaceController<B>,
    ) -> Self {
        let toggles = AnchorEdge::ALL.map(|edge| {
            AnchorToggle::new(edge, initial.is_anchored(edge), indicator_for(edge), &mut *surface)
        });
        Self { toggles }
    }

    pub fn toggle<B: ShellBinding>(
        &mut self,
        edge: AnchorEdge,
        surface: &mut LayerSurfaceController<B>,
    ) -> bool {
        self.toggles[edge.index()].toggle(surface)
    }

    pub fn get(&self, edge: AnchorEdge) -> &AnchorToggle<I> {
        &self.toggles[edge.index()]
    }

    /// Edges currently anchored according to the toggles
    pub fn anchors(&self) -> Anchors {
        self.toggles
            .iter()
            .filter(|t| t.is_anchored())
            .fold(Anchors::empty(), |acc, t| acc | t.edge().flag())
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnchorToggle<I>> {
        self.toggles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::testing::{RecordingBinding, RecordingIndicator};
    use crate::shell::types::SurfaceConfig;

    fn empty_controller() -> LayerSurfaceController<RecordingBinding> {
        let config = SurfaceConfig {
            anchors: Anchors::empty(),
            ..SurfaceConfig::default()
        };
        LayerSurfaceController::init(RecordingBinding::new(), config).unwrap()
    }

    #[test]
    fn construction_applies_initial_state_once() {
        let mut controller = empty_controller();
        let indicator = RecordingIndicator::default();
        let toggle = AnchorToggle::new(AnchorEdge::Top, true, indicator.clone(), &mut controller);

        assert!(toggle.is_anchored());
        assert_eq!(indicator.shown(), Some(true));
        assert_eq!(indicator.updates(), 1);
        assert_eq!(controller.anchors(), Anchors::TOP);
    }

    #[test]
    fn double_toggle_restores_every_edge() {
        for edge in AnchorEdge::ALL {
            for initial in [false, true] {
                let mut controller = empty_controller();
                let binding = controller.binding().clone();
                let indicator = RecordingIndicator::default();
                let mut toggle =
                    AnchorToggle::new(edge, initial, indicator.clone(), &mut controller);
                controller.commit();
                binding.clear();

                assert_eq!(toggle.toggle(&mut controller), !initial);
                controller.commit();
                assert_eq!(toggle.toggle(&mut controller), initial);
                controller.commit();

                assert_eq!(toggle.is_anchored(), initial);
                assert_eq!(controller.anchors().is_anchored(edge), initial);
                assert_eq!(binding.anchor_calls(edge), vec![!initial, initial]);
                assert_eq!(indicator.shown(), Some(initial));
            }
        }
    }

    #[test]
    fn toggle_keeps_indicator_and_controller_in_step() {
        let mut controller = empty_controller();
        let indicator = RecordingIndicator::default();
        let mut toggle =
            AnchorToggle::new(AnchorEdge::Bottom, false, indicator.clone(), &mut controller);

        for _ in 0..5 {
            let state = toggle.toggle(&mut controller);
            assert_eq!(indicator.shown(), Some(state));
            assert_eq!(controller.anchors().is_anchored(AnchorEdge::Bottom), state);
        }
    }

    #[test]
    fn initial_left_and_top_yield_left_top() {
        let mut controller = empty_controller();
        let toggles = AnchorToggles::new(
            Anchors::LEFT | Anchors::TOP,
            |_| RecordingIndicator::default(),
            &mut controller,
        );

        assert_eq!(toggles.anchors(), Anchors::LEFT | Anchors::TOP);
        assert_eq!(controller.anchors(), Anchors::LEFT | Anchors::TOP);
        assert!(toggles.get(AnchorEdge::Left).is_anchored());
        assert!(!toggles.get(AnchorEdge::Right).is_anchored());
        assert!(toggles.get(AnchorEdge::Top).is_anchored());
        assert!(!toggles.get(AnchorEdge::Bottom).is_anchored());
    }

    #[test]
    fn toggling_one_edge_leaves_the_others() {
        let mut controller = empty_controller();
        let mut toggles = AnchorToggles::new(
            Anchors::LEFT | Anchors::TOP,
            |_| RecordingIndicator::default(),
            &mut controller,
        );

        toggles.toggle(AnchorEdge::Right, &mut controller);
        assert_eq!(
            controller.anchors(),
            Anchors::LEFT | Anchors::TOP | Anchors::RIGHT
        );
        assert_eq!(toggles.anchors(), controller.anchors());
    }
}
