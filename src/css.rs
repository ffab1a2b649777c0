use gtk4::gdk::Display;
use gtk4::CssProvider;
use tracing::debug;

/// Demo window theme
pub const DEMO_CSS: &str = r#"
window {
    background-color: rgba(30, 30, 30, 0.85);
}

.demo-container {
    padding: 12px;
}

.layer-label {
    color: rgba(200, 200, 200, 0.9);
    font-size: 12px;
    font-weight: 600;
}

.anchor-pad button {
    min-width: 32px;
    min-height: 32px;
    border-radius: 6px;
    transition: all 150ms ease;
}

.anchor-pad button.anchor-active {
    background: rgba(0, 150, 136, 0.3);
    border: 1px solid rgba(0, 150, 136, 0.5);
}

popover.anchored-menu > contents {
    background-color: rgba(40, 40, 40, 0.95);
    border-radius: 8px;
    padding: 4px;
}

.menu-item {
    padding: 6px 16px;
    border-radius: 4px;
}

.menu-item:hover {
    background: rgba(255, 255, 255, 0.1);
}
"#;

/// Load and apply the demo CSS theme
pub fn load_css() {
    let provider = CssProvider::new();
    provider.load_from_data(DEMO_CSS);

    if let Some(display) = Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
        debug!("CSS theme loaded");
    }
}
