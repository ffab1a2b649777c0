use gtk4::prelude::*;
use gtk4::{Align, Box as GtkBox, Button, Orientation};

use super::handle::WeakDemoSurfaceHandle;
use crate::shell::AnchorEdge;

/// One button per edge, laid out as a cross
pub struct AnchorPad {
    container: GtkBox,
    buttons: [Button; 4],
}

impl AnchorPad {
    /// Create the buttons. They are wired up later with [`connect`](Self::connect)
    /// once the surface that owns their state exists.
    pub fn new() -> Self {
        let buttons = AnchorEdge::ALL.map(|edge| {
            let btn = Button::from_icon_name(Self::icon_name(edge));
            btn.set_tooltip_text(Some(Self::tooltip(edge)));
            btn
        });

        let outside_hbox = GtkBox::new(Orientation::Horizontal, 0);
        outside_hbox.add_css_class("anchor-pad");

        let hbox = GtkBox::new(Orientation::Horizontal, 5);
        hbox.set_halign(Align::Center);
        hbox.set_hexpand(true);
        outside_hbox.append(&hbox);

        let left_vbox = GtkBox::new(Orientation::Vertical, 0);
        let left = &buttons[AnchorEdge::Left.index()];
        left.set_valign(Align::Center);
        left.set_vexpand(true);
        left_vbox.append(left);
        hbox.append(&left_vbox);

        let center_vbox = GtkBox::new(Orientation::Vertical, 16);
        center_vbox.append(&buttons[AnchorEdge::Top.index()]);
        center_vbox.append(&buttons[AnchorEdge::Bottom.index()]);
        hbox.append(&center_vbox);

        let right_vbox = GtkBox::new(Orientation::Vertical, 0);
        let right = &buttons[AnchorEdge::Right.index()];
        right.set_valign(Align::Center);
        right.set_vexpand(true);
        right_vbox.append(right);
        hbox.append(&right_vbox);

        Self {
            container: outside_hbox,
            buttons,
        }
    }

    /// Indicator button for `edge`
    pub fn button(&self, edge: AnchorEdge) -> Button {
        self.buttons[edge.index()].clone()
    }

    /// Route clicks to the surface's anchor toggles
    pub fn connect(&self, surface: WeakDemoSurfaceHandle) {
        for edge in AnchorEdge::ALL {
            let surface = surface.clone();
            self.buttons[edge.index()].connect_clicked(move |_| {
                if let Some(surface) = surface.upgrade() {
                    surface.update(|s| s.toggle_anchor(edge));
                }
            });
        }
    }

    pub fn widget(&self) -> &GtkBox {
        &self.container
    }

    fn icon_name(edge: AnchorEdge) -> &'static str {
        match edge {
            AnchorEdge::Left => "go-first",
            AnchorEdge::Right => "go-last",
            AnchorEdge::Top => "go-top",
            AnchorEdge::Bottom => "go-bottom",
        }
    }

    fn tooltip(edge: AnchorEdge) -> &'static str {
        match edge {
            AnchorEdge::Left => "Anchor left",
            AnchorEdge::Right => "Anchor right",
            AnchorEdge::Top => "Anchor top",
            AnchorEdge::Bottom => "Anchor bottom",
        }
    }
}

impl Default for AnchorPad {
    fn default() -> Self {
        Self::new()
    }
}
