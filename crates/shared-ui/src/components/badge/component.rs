use dioxus::prelude::*;

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Muted,
    Outline,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "default",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Muted => "muted",
            BadgeVariant::Outline => "outline",
        }
    }
}

/// Inline badge for roles, class labels and statuses.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn badge_variant_classes_are_distinct() {
        let classes = [
            BadgeVariant::Default.class(),
            BadgeVariant::Secondary.class(),
            BadgeVariant::Muted.class(),
            BadgeVariant::Outline.class(),
        ];
        let mut deduped = classes.to_vec();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), classes.len());
    }

    #[test]
    fn badge_renders_variant_and_children() {
        #[component]
        fn Fixture() -> Element {
            rsx! {
                Badge { variant: BadgeVariant::Muted, "Not Assigned" }
            }
        }

        let mut dom = VirtualDom::new(Fixture);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("Not Assigned"));
        assert!(html.contains("data-style=\"muted\""));
    }
}
