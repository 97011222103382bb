//! Visual theme for every rendered page.
//!
//! The theme is a `static` value: palette, typography, shape and per-component
//! overrides. It is rendered to CSS once at startup (see
//! [`ThemeStyles`](crate::templates::ThemeStyles)) and never changes per request.

use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSet {
    pub main: &'static str,
    pub light: &'static str,
    pub dark: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Background {
    pub default: &'static str,
    pub paper: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: ColorSet,
    pub secondary: ColorSet,
    pub background: Background,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Typography {
    pub font_family: &'static [&'static str],
    pub h1_weight: u16,
    pub h2_weight: u16,
    pub h3_weight: u16,
}

impl Typography {
    pub fn font_stack(&self) -> String {
        self.font_family.join(",")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub border_radius_px: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonOverrides {
    pub text_transform: &'static str,
    pub font_weight: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardOverrides {
    pub box_shadow: &'static str,
    pub transition: &'static str,
    pub hover_transform: &'static str,
    pub hover_box_shadow: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentOverrides {
    pub button: ButtonOverrides,
    pub card: CardOverrides,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub palette: Palette,
    pub typography: Typography,
    pub shape: Shape,
    pub components: ComponentOverrides,
}

/// Institutional blues of the ITAM
pub static ITAM_THEME: Theme = Theme {
    palette: Palette {
        primary: ColorSet {
            main: "#003057",
            light: "#0066A1",
            dark: "#001f3f",
        },
        secondary: ColorSet {
            main: "#0066A1",
            light: "#4d94c4",
            dark: "#004670",
        },
        background: Background {
            default: "#f5f5f5",
            paper: "#ffffff",
        },
    },
    typography: Typography {
        font_family: &[
            "-apple-system",
            "BlinkMacSystemFont",
            "\"Segoe UI\"",
            "Roboto",
            "\"Helvetica Neue\"",
            "Arial",
            "sans-serif",
        ],
        h1_weight: 700,
        h2_weight: 600,
        h3_weight: 600,
    },
    shape: Shape {
        border_radius_px: 8,
    },
    components: ComponentOverrides {
        button: ButtonOverrides {
            text_transform: "none",
            font_weight: 600,
        },
        card: CardOverrides {
            box_shadow: "0 2px 8px rgba(0,0,0,0.1)",
            transition: "transform 0.2s, box-shadow 0.2s",
            hover_transform: "translateY(-4px)",
            hover_box_shadow: "0 4px 16px rgba(0,0,0,0.15)",
        },
    },
};

impl Theme {
    pub fn itam() -> &'static Theme {
        &ITAM_THEME
    }

    /// Render the theme as CSS: custom properties on `:root` plus the
    /// typography and component rules that consume them.
    pub fn stylesheet(&self) -> String {
        let p = &self.palette;
        let t = &self.typography;
        let button = &self.components.button;
        let card = &self.components.card;

        let mut css = String::new();
        // Writing into a String cannot fail
        let _ = write!(
            css,
            ":root{{\
--color-primary:{};--color-primary-light:{};--color-primary-dark:{};\
--color-secondary:{};--color-secondary-light:{};--color-secondary-dark:{};\
--color-background:{};--color-paper:{};\
--font-family:{};--radius:{}px;}}",
            p.primary.main,
            p.primary.light,
            p.primary.dark,
            p.secondary.main,
            p.secondary.light,
            p.secondary.dark,
            p.background.default,
            p.background.paper,
            t.font_stack(),
            self.shape.border_radius_px,
        );
        let _ = write!(
            css,
            "body{{font-family:var(--font-family);background-color:var(--color-background);}}\
h1{{font-weight:{};}}h2{{font-weight:{};}}h3{{font-weight:{};}}",
            t.h1_weight, t.h2_weight, t.h3_weight,
        );
        let _ = write!(
            css,
            ".button{{text-transform:{};font-weight:{};border-radius:var(--radius);}}",
            button.text_transform, button.font_weight,
        );
        let _ = write!(
            css,
            ".card{{background-color:var(--color-paper);border-radius:var(--radius);\
box-shadow:{};transition:{};}}\
.card:hover{{transform:{};box-shadow:{};}}",
            card.box_shadow, card.transition, card.hover_transform, card.hover_box_shadow,
        );
        css
    }
}
