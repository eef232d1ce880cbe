use gdk4 as gdk;
use gtk4 as gtk;
use palette::Srgba;

/// Fixed regulation board colors.
pub struct ThemeColors {
    pub dark: Srgba<f64>,
    pub light: Srgba<f64>,
    pub red: Srgba<f64>,
    pub green: Srgba<f64>,
    pub separator: Srgba<f64>,
    pub glow: Srgba<f64>,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            dark: Srgba::new(0.0, 0.0, 0.0, 1.0),
            light: Srgba::new(1.0, 1.0, 1.0, 1.0),
            red: Srgba::new(1.0, 0.0, 0.0, 1.0),
            green: Srgba::new(0.0, 0.5, 0.0, 1.0),
            separator: Srgba::new(0.2, 0.2, 0.2, 1.0),
            glow: Srgba::new(0.0, 150.0 / 255.0, 1.0, 1.0),
        }
    }
}

impl ThemeColors {
    /// Base and ring color of a wedge, alternating by parity.
    pub fn wedge(&self, even: bool) -> (Srgba<f64>, Srgba<f64>) {
        if even {
            (self.dark, self.red)
        } else {
            (self.light, self.green)
        }
    }

    /// Label color readable on the given wedge base.
    pub fn label(&self, even: bool) -> Srgba<f64> {
        if even { self.light } else { self.dark }
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.tray-number {
    min-width: 40px;
    font-weight: bold;
}
.tray-number.selected {
    background: rgba(0, 150, 255, 0.6);
}
.mode-button.active {
    background: rgba(0, 150, 255, 0.4);
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
