use crate::domain::VehicleStatus;
use maud::{html, Markup};

/// Summary tile for the listing header counts.
pub fn stat_card(value: usize, label: &str, tone: &str) -> Markup {
    html! {
        div class={ "stat-card stat-" (tone) } {
            div class="value" { (value) }
            div { (label) }
        }
    }
}

pub fn status_badge(status: VehicleStatus) -> Markup {
    html! {
        span class=(status.css_class()) { (status.label()) }
    }
}

/// Localized inline error, rendered in place instead of failing the page.
pub fn error_box(message: &str) -> Markup {
    html! {
        div class="error-box" { p { (message) } }
    }
}

/// Non-error inline notice (e.g. empty export).
pub fn notice_box(message: &str) -> Markup {
    html! {
        div class="notice-box" { p { (message) } }
    }
}
