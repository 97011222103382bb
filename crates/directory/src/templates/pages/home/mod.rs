use maud::{html, Markup};

use crate::{
    db::LaboratorySummary,
    templates::{
        fragments::lab_card,
        layouts::{base, PageMeta, ThemeStyles},
    },
};

pub const HOME_META: PageMeta<'static> = PageMeta {
    title: "Laboratorios - ITAM",
    description: "Directorio de Laboratorios de Ingeniería en Computación del ITAM",
};

/// Landing page - hero, lab count, card grid and footer
pub fn home_page(styles: &ThemeStyles, labs: &[LaboratorySummary]) -> Markup {
    base(&HOME_META, styles, home_content(labs))
}

pub fn home_content(labs: &[LaboratorySummary]) -> Markup {
    html! {
        div class="directory" {
            section class="hero lab-hero" {
                div class="hero-body" {
                    div class="container is-max-widescreen" {
                        h1 class="title is-1" { "Directorio de Laboratorios" }
                        p class="subtitle is-5 lab-hero-subtitle" {
                            "Explora los laboratorios de investigación y desarrollo del departamento de "
                            "ingeniería en computación del ITAM"
                        }
                    }
                }
            }

            section class="section" {
                div class="container is-max-widescreen" {
                    h2 class="title is-4 lab-count" { (labs_heading(labs.len())) }

                    div class="columns is-multiline lab-grid" {
                        @for lab in labs {
                            div class="column is-12-mobile is-6-tablet is-4-desktop" {
                                (lab_card(lab))
                            }
                        }
                    }
                }
            }

            footer class="lab-footer" {
                div class="container is-max-widescreen has-text-centered" {
                    p class="is-size-7" {
                        "© 2025 Instituto Tecnológico Autónomo de México (ITAM)"
                    }
                    p class="is-size-7 lab-footer-secondary" {
                        "Departamento de Ingeniería en Computación"
                    }
                }
            }
        }
    }
}

/// "{n} Laboratorio{s} Disponible{s}", singular only for exactly one
pub fn labs_heading(n: usize) -> String {
    let s = if n == 1 { "" } else { "s" };
    format!("{n} Laboratorio{s} Disponible{s}")
}
