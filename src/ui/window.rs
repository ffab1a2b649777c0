use gtk4::prelude::*;
use gtk4::{Application, Box as GtkBox, Button, Orientation, Window};
use std::cell::RefCell;
use tracing::{debug, info};

use super::anchor_pad::AnchorPad;
use super::handle::{DemoSurfaceHandle, SurfaceHandle};
use super::layer_selection::LayerSelection;
use crate::config::DemoSettings;
use crate::error::ShellError;
use crate::shell::{GtkLayerBinding, LayerSurface, PopupAnchor, SurfaceConfig};

/// The demo window: a layer surface with controls for its own configuration
pub struct DemoWindow {
    window: Window,
    surface: DemoSurfaceHandle,
}

impl DemoWindow {
    /// Build the window and set it up as a layer surface.
    ///
    /// Fails if the compositor has no layer-shell support.
    pub fn new(app: &Application, settings: &DemoSettings) -> Result<Self, ShellError> {
        let window = Window::builder()
            .application(app)
            .title(settings.title.as_str())
            .build();
        window.set_default_size(-1, -1);

        let pad = AnchorPad::new();
        let binding = GtkLayerBinding::new(&window, settings.namespace.as_str(), settings.keyboard_mode);
        let surface = LayerSurface::new(binding, SurfaceConfig::default(), |edge| pad.button(edge))?;
        let surface = SurfaceHandle::new(surface);

        // Must reach the compositor before the first map
        surface.commit_now();

        let content = GtkBox::new(Orientation::Vertical, 12);
        content.add_css_class("demo-container");

        let spacer_btn = Button::with_label("Useless");
        spacer_btn.set_tooltip_text(Some("This is a tooltip"));
        content.append(&spacer_btn);

        let popup = PopupAnchor::new(settings.menu_items, settings.menu_label.clone());
        let menu_btn = Button::with_label("Menu");
        menu_btn.connect_clicked(move |btn| {
            popup.popup_at(btn);
        });
        content.append(&menu_btn);

        let (selector, layer) = surface.with(|s| (*s.selector(), s.controller().layer()));
        let selection = LayerSelection::new(surface.downgrade(), &selector, layer);
        content.append(selection.widget());

        pad.connect(surface.downgrade());
        content.append(pad.widget());

        window.set_child(Some(&content));

        // The surface holds the window through its binding; let go on close
        let keep_alive = RefCell::new(Some(surface.clone()));
        window.connect_close_request(move |_| {
            if keep_alive.borrow_mut().take().is_some() {
                debug!("Layer surface released");
            }
            glib::Propagation::Proceed
        });

        info!("Demo window created");

        Ok(Self { window, surface })
    }

    pub fn present(&self) {
        self.window.present();
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn surface(&self) -> &DemoSurfaceHandle {
        &self.surface
    }
}
