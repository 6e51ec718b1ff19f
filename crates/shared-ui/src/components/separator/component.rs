use dioxus::prelude::*;
use dioxus_primitives::separator as prim;

/// Thin divider line, horizontal by default. The navbar uses the vertical
/// orientation between the page title and its neighbors.
#[component]
pub fn Separator(mut props: prim::SeparatorProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "chalk-separator", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Separator { ..props }
    }
}
