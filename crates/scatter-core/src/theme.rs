// File: crates/scatter-core/src/theme.rs
// Summary: Light/Dark theming for ambient chart chrome (background, axes, tick text).

/// Colors for everything that is not data ink. The marker/trend color comes
/// from [`crate::ChartConfig::color`], never from the theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub axis: &'static str,
    pub tick_label: &'static str,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#121214",
            axis: "#B4B4BE",
            tick_label: "#9696A0",
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: "#FAFAFC",
            axis: "#3C3C46",
            tick_label: "#64646E",
        }
    }
}

/// Return the list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}
