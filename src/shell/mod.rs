mod anchor;
mod binding;
mod controller;
mod popup;
mod selector;
mod surface;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use anchor::{AnchorIndicator, AnchorToggle, AnchorToggles};
pub use binding::{GtkLayerBinding, ShellBinding};
pub use controller::{LayerSurfaceController, SurfaceDiff};
pub use popup::{Corner, PopupAnchor, PopupPlan, Rect};
pub use selector::LayerSelector;
pub use surface::LayerSurface;
pub use types::{AnchorEdge, Anchors, ExclusiveZone, SurfaceConfig, SurfaceLayer};
