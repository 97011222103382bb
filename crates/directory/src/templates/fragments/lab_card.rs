use maud::{html, Markup};

use crate::{
    db::LaboratorySummary,
    templates::components::{location_icon, mail_icon},
};

/// Clickable directory card for one laboratory, linking to its detail page
pub fn lab_card(lab: &LaboratorySummary) -> Markup {
    html! {
        a class="card lab-card" href=(lab.href()) {
            // No placeholder when the lab has no logo
            @if let Some(logo) = lab.logo() {
                div class="card-image" {
                    img class="lab-card-media" src=(logo) alt=(lab.name) height="200";
                }
            }

            div class="card-content" {
                h2 class="title is-5 lab-card-name" { (lab.name) }
                p class="lab-card-description is-size-7 has-text-grey" { (lab.description) }

                div class="lab-card-meta" {
                    (location_icon())
                    span class="is-size-7 has-text-grey" { (lab.location) }
                }
                div class="lab-card-meta" {
                    (mail_icon())
                    span class="is-size-7 has-text-grey" { (lab.email) }
                }

                div class="lab-card-counts" {
                    span class="is-size-7 has-text-grey" { (lab.posts_count) " publicaciones" }
                    span class="is-size-7 has-text-grey" { (lab.events_count) " eventos" }
                }
            }
        }
    }
}
