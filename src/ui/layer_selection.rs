use gtk4::prelude::*;
use gtk4::{Align, Box as GtkBox, DropDown, Label, Orientation, StringObject};
use tracing::debug;

use super::handle::WeakDemoSurfaceHandle;
use crate::shell::{LayerSelector, SurfaceLayer};

/// "Layer:" label plus a drop-down of the four layers
pub struct LayerSelection {
    container: GtkBox,
}

impl LayerSelection {
    pub fn new(surface: WeakDemoSurfaceHandle, selector: &LayerSelector, current: SurfaceLayer) -> Self {
        let container = GtkBox::new(Orientation::Vertical, 6);

        let label = Label::new(Some("Layer:"));
        label.set_halign(Align::Start);
        label.add_css_class("layer-label");
        container.append(&label);

        let names: Vec<&str> = selector.names().collect();
        let dropdown = DropDown::from_strings(&names);
        if let Some(position) = selector.position_of(current) {
            dropdown.set_selected(position);
        }

        dropdown.connect_selected_notify(move |dropdown| {
            let name = dropdown
                .selected_item()
                .and_downcast::<StringObject>()
                .map(|item| item.string());

            let Some(surface) = surface.upgrade() else {
                return;
            };
            match surface.update(|s| s.select_layer(name.as_deref())) {
                Ok(layer) => debug!("Drop-down moved surface to {:?}", layer),
                Err(e) => debug!("Drop-down selection rejected: {}", e),
            }
        });
        container.append(&dropdown);

        Self { container }
    }

    pub fn widget(&self) -> &GtkBox {
        &self.container
    }
}
