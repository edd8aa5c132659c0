use maud::{html, Markup};

pub fn stat(label: &str, value: &str) -> Markup {
    html! {
        div class="stat" {
            span class="stat-value" { (value) }
            span class="stat-label" { (label) }
        }
    }
}
