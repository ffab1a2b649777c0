use gtk4::prelude::*;
use gtk4::Window;
use gtk4_layer_shell::{Edge, KeyboardMode, Layer, LayerShell};
use tracing::debug;

use super::types::{AnchorEdge, ExclusiveZone, SurfaceLayer};
use crate::config::KeyboardInteractivity;
use crate::error::ShellError;

/// Calls the core makes into the compositor's shell-surface protocol.
///
/// Only [`LayerSurfaceController`](super::LayerSurfaceController) talks to a
/// binding; everything else goes through the controller.
pub trait ShellBinding {
    /// Turn the window into a layer surface. Called once, before first map.
    fn init_for_window(&self) -> Result<(), ShellError>;

    fn set_layer(&self, layer: SurfaceLayer);

    fn set_anchor(&self, edge: AnchorEdge, anchored: bool);

    fn set_exclusive_zone(&self, zone: ExclusiveZone);
}

impl From<SurfaceLayer> for Layer {
    fn from(layer: SurfaceLayer) -> Self {
        match layer {
            SurfaceLayer::Background => Layer::Background,
            SurfaceLayer::Bottom => Layer::Bottom,
            SurfaceLayer::Top => Layer::Top,
            SurfaceLayer::Overlay => Layer::Overlay,
        }
    }
}

impl From<AnchorEdge> for Edge {
    fn from(edge: AnchorEdge) -> Self {
        match edge {
            AnchorEdge::Left => Edge::Left,
            AnchorEdge::Right => Edge::Right,
            AnchorEdge::Top => Edge::Top,
            AnchorEdge::Bottom => Edge::Bottom,
        }
    }
}

impl From<KeyboardInteractivity> for KeyboardMode {
    fn from(mode: KeyboardInteractivity) -> Self {
        match mode {
            KeyboardInteractivity::None => KeyboardMode::None,
            KeyboardInteractivity::OnDemand => KeyboardMode::OnDemand,
            KeyboardInteractivity::Exclusive => KeyboardMode::Exclusive,
        }
    }
}

/// gtk4-layer-shell backed binding for a GTK window
#[derive(Debug, Clone)]
pub struct GtkLayerBinding {
    window: Window,
    namespace: String,
    keyboard_mode: KeyboardInteractivity,
}

impl GtkLayerBinding {
    pub fn new(
        window: &impl IsA<Window>,
        namespace: impl Into<String>,
        keyboard_mode: KeyboardInteractivity,
    ) -> Self {
        Self {
            window: window.clone().upcast(),
            namespace: namespace.into(),
            keyboard_mode,
        }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl ShellBinding for GtkLayerBinding {
    fn init_for_window(&self) -> Result<(), ShellError> {
        if !gtk4_layer_shell::is_supported() {
            return Err(ShellError::Unsupported);
        }
        if self.window.is_visible() {
            return Err(ShellError::AlreadyMapped);
        }

        self.window.init_layer_shell();
        self.window.set_namespace(&self.namespace);
        self.window.set_keyboard_mode(self.keyboard_mode.into());

        debug!(
            "Layer shell initialized: namespace={}, keyboard={:?}",
            self.namespace, self.keyboard_mode
        );
        Ok(())
    }

    fn set_layer(&self, layer: SurfaceLayer) {
        LayerShell::set_layer(&self.window, layer.into());
    }

    fn set_anchor(&self, edge: AnchorEdge, anchored: bool) {
        LayerShell::set_anchor(&self.window, edge.into(), anchored);
    }

    fn set_exclusive_zone(&self, zone: ExclusiveZone) {
        LayerShell::set_exclusive_zone(&self.window, zone.into());
    }
}
