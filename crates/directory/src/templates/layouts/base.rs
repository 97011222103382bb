use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::theme::Theme;

pub struct PageMeta<'a> {
    pub title: &'a str,
    pub description: &'a str,
}

/// Theme rendered to CSS once and shared by every page.
pub struct ThemeStyles {
    theme: &'static Theme,
    css: String,
}

impl ThemeStyles {
    pub fn new(theme: &'static Theme) -> Self {
        Self {
            theme,
            css: theme.stylesheet(),
        }
    }

    pub fn theme(&self) -> &'static Theme {
        self.theme
    }

    pub fn css(&self) -> &str {
        &self.css
    }
}

pub fn base(page: &PageMeta, styles: &ThemeStyles, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (page.title) }
                meta name="description" content=(page.description);
                link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bulma@1.0.4/css/bulma.min.css";
                link rel="stylesheet" href="/static/styles.min.css";
                style id="theme" { (PreEscaped(styles.css())) }
            }
            body {
                (content)
            }
        }
    }
}
