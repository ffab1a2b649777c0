use tracing::{debug, error};

use super::binding::ShellBinding;
use super::controller::LayerSurfaceController;
use super::types::SurfaceLayer;
use crate::error::ShellError;

/// Translates a layer chosen by name into a controller call
#[derive(Debug, Clone, Copy, Default)]
pub struct LayerSelector;

impl LayerSelector {
    pub fn new() -> Self {
        Self
    }

    /// Choices in display order
    pub fn choices(&self) -> &'static [SurfaceLayer] {
        &SurfaceLayer::MENU_ORDER
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.choices().iter().map(|layer| layer.name())
    }

    /// Position of `layer` among the choices
    pub fn position_of(&self, layer: SurfaceLayer) -> Option<u32> {
        self.choices()
            .iter()
            .position(|l| *l == layer)
            .map(|i| i as u32)
    }

    /// Apply the layer named `name`.
    ///
    /// Names outside the four known layers are refused and logged; the
    /// surface keeps its current layer.
    pub fn select<B: ShellBinding>(
        &self,
        name: Option<&str>,
        surface: &mut LayerSurfaceController<B>,
    ) -> Result<SurfaceLayer, ShellError> {
        let layer = name
            .ok_or(ShellError::NoSelection)
            .and_then(SurfaceLayer::from_name)
            .inspect_err(|e| error!("Refusing layer selection: {}", e))?;

        surface.set_layer(layer);
        debug!("Layer selected: {:?}", layer);
        Ok(layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::testing::RecordingBinding;
    use crate::shell::types::SurfaceConfig;

    fn controller() -> LayerSurfaceController<RecordingBinding> {
        LayerSurfaceController::init(RecordingBinding::new(), SurfaceConfig::default()).unwrap()
    }

    #[test]
    fn offers_layers_top_down() {
        let names: Vec<_> = LayerSelector::new().names().collect();
        assert_eq!(names, ["Overlay", "Top", "Bottom", "Background"]);
        assert_eq!(LayerSelector::new().position_of(SurfaceLayer::Top), Some(1));
    }

    #[test]
    fn known_names_set_the_layer() {
        let selector = LayerSelector::new();
        let mut surface = controller();

        for layer in SurfaceLayer::MENU_ORDER {
            assert_eq!(selector.select(Some(layer.name()), &mut surface), Ok(layer));
            assert_eq!(surface.layer(), layer);
        }
    }

    #[test]
    fn unknown_name_fails_without_changing_layer() {
        let selector = LayerSelector::new();
        let mut surface = controller();
        surface.commit();
        let binding = surface.binding().clone();
        binding.clear();

        let result = selector.select(Some("Middle"), &mut surface);
        assert_eq!(result, Err(ShellError::UnknownLayer("Middle".into())));
        assert_eq!(surface.layer(), SurfaceLayer::Top);
        assert!(!surface.needs_commit());
        assert!(surface.commit().is_empty());
        assert!(binding.calls().is_empty());
    }

    #[test]
    fn empty_selection_is_an_error() {
        let mut surface = controller();
        assert_eq!(
            LayerSelector::new().select(None, &mut surface),
            Err(ShellError::NoSelection)
        );
        assert_eq!(surface.layer(), SurfaceLayer::Top);
    }
}
