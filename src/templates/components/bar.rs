use maud::{html, Markup};

/// One labelled bar of a horizontal bar list; `max` scales the fill.
pub fn bar_row(label: &str, value: i64, max: i64, color: &str) -> Markup {
    let pct = if max > 0 {
        (value.max(0) as f64 / max as f64) * 100.0
    } else {
        0.0
    };

    html! {
        div class="bar-row" {
            span class="bar-label" title=(label) { (label) }
            div class="bar-track" {
                div class="bar-fill" style=(format!("width: {pct:.1}%; background: {color};")) {}
            }
            span class="bar-value" { (value) }
        }
    }
}
