mod anchor_pad;
mod handle;
mod layer_selection;
mod window;

pub use anchor_pad::AnchorPad;
pub use handle::{
    DemoSurface, DemoSurfaceHandle, SurfaceHandle, WeakDemoSurfaceHandle, WeakSurfaceHandle,
};
pub use layer_selection::LayerSelection;
pub use window::DemoWindow;
