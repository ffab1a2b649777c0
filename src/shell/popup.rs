use compact_str::CompactString;
use gtk4::prelude::*;
use gtk4::{gdk, Align, Box as GtkBox, Button, Orientation, PositionType, Popover, Widget};
use tracing::debug;

/// Integer rectangle in surface-local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Corner of a rectangle, used as gravity when placing popups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Corner {
    /// Absolute position of this corner of `rect`
    pub fn point_in(self, rect: Rect) -> (i32, i32) {
        let (dx, dy) = self.offset(rect.width, rect.height);
        (rect.x + dx, rect.y + dy)
    }

    /// Position of this corner relative to a rectangle's origin
    pub fn offset(self, width: i32, height: i32) -> (i32, i32) {
        match self {
            Corner::NorthWest => (0, 0),
            Corner::NorthEast => (width, 0),
            Corner::SouthWest => (0, height),
            Corner::SouthEast => (width, height),
        }
    }
}

/// What a popup will contain and how it hangs off its trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupPlan {
    pub labels: Vec<String>,
    pub trigger_corner: Corner,
    pub popup_corner: Corner,
}

/// Builds a transient menu hanging off the control that opened it.
///
/// The popup's north-east corner sits on the trigger's south-west corner, so
/// the menu grows down and to the left.
#[derive(Debug, Clone)]
pub struct PopupAnchor {
    item_count: usize,
    label_template: CompactString,
}

impl PopupAnchor {
    pub const TRIGGER_CORNER: Corner = Corner::SouthWest;
    pub const POPUP_CORNER: Corner = Corner::NorthEast;

    /// `label_template` has its first `{}` replaced by the entry index.
    pub fn new(item_count: usize, label_template: impl Into<CompactString>) -> Self {
        Self {
            item_count,
            label_template: label_template.into(),
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn label(&self, index: usize) -> String {
        if self.label_template.contains("{}") {
            self.label_template.replacen("{}", &index.to_string(), 1)
        } else {
            format!("{} {}", self.label_template, index)
        }
    }

    pub fn labels(&self) -> Vec<String> {
        (0..self.item_count).map(|i| self.label(i)).collect()
    }

    pub fn plan(&self) -> PopupPlan {
        PopupPlan {
            labels: self.labels(),
            trigger_corner: Self::TRIGGER_CORNER,
            popup_corner: Self::POPUP_CORNER,
        }
    }

    /// Where a popup of the given size lands next to `trigger`
    pub fn place(trigger: Rect, width: i32, height: i32) -> Rect {
        let (ax, ay) = Self::TRIGGER_CORNER.point_in(trigger);
        let (dx, dy) = Self::POPUP_CORNER.offset(width, height);
        Rect::new(ax - dx, ay - dy, width, height)
    }

    /// Build the popup, parent it to `trigger` and show it.
    ///
    /// Dismissal and keyboard navigation are left to GTK. The popover
    /// unparents itself once closed.
    pub fn popup_at(&self, trigger: &impl IsA<Widget>) -> Popover {
        let popover = Popover::new();
        popover.add_css_class("anchored-menu");
        popover.set_has_arrow(false);
        popover.set_autohide(true);

        let menu_box = GtkBox::new(Orientation::Vertical, 2);
        for label in self.labels() {
            let item = Button::with_label(&label);
            item.add_css_class("menu-item");
            item.set_has_frame(false);

            let weak = popover.downgrade();
            item.connect_clicked(move |_| {
                if let Some(popover) = weak.upgrade() {
                    popover.popdown();
                }
            });
            menu_box.append(&item);
        }
        popover.set_child(Some(&menu_box));
        popover.set_parent(trigger);

        // Point at a 1px strip along the trigger's left edge and align the
        // popover's end with it: NE of the popover meets SW of the trigger.
        let height = trigger.as_ref().height();
        popover.set_position(PositionType::Bottom);
        popover.set_halign(Align::End);
        popover.set_pointing_to(Some(&gdk::Rectangle::new(0, 0, 1, height)));
        popover.set_offset(-1, 0);

        popover.connect_closed(|popover| {
            let popover = popover.clone();
            glib::idle_add_local_once(move || popover.unparent());
        });

        popover.popup();
        debug!("Popup shown with {} item(s)", self.item_count);

        popover
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_items_are_numbered_from_zero() {
        let plan = PopupAnchor::new(3, "Menu item {}").plan();
        assert_eq!(plan.labels, ["Menu item 0", "Menu item 1", "Menu item 2"]);
        assert_eq!(plan.trigger_corner, Corner::SouthWest);
        assert_eq!(plan.popup_corner, Corner::NorthEast);
    }

    #[test]
    fn template_without_placeholder_gets_index_appended() {
        let anchor = PopupAnchor::new(2, "Entry");
        assert_eq!(anchor.labels(), ["Entry 0", "Entry 1"]);
        assert!(PopupAnchor::new(0, "Entry").labels().is_empty());
    }

    #[test]
    fn popup_north_east_meets_trigger_south_west() {
        let trigger = Rect::new(100, 40, 80, 30);
        let popup = PopupAnchor::place(trigger, 120, 90);

        assert_eq!(
            Corner::NorthEast.point_in(popup),
            Corner::SouthWest.point_in(trigger)
        );
        // grows south-west
        assert!(popup.x < trigger.x);
        assert!(popup.y >= trigger.y + trigger.height);
        assert_eq!(popup, Rect::new(-20, 70, 120, 90));
    }
}
