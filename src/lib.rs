pub mod config;
pub mod css;
pub mod error;
pub mod shell;
pub mod ui;

pub use config::{ConfigPaths, DemoSettings, KeyboardInteractivity};
pub use error::ShellError;
pub use shell::{
    AnchorEdge, AnchorIndicator, AnchorToggle, AnchorToggles, Anchors, Corner, ExclusiveZone,
    GtkLayerBinding, LayerSelector, LayerSurface, LayerSurfaceController, PopupAnchor, Rect,
    ShellBinding, SurfaceConfig, SurfaceDiff, SurfaceLayer,
};
pub use ui::DemoWindow;
