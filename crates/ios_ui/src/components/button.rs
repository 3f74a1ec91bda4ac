use ios_ui_style::{resolve, Selection, VariantAxis, VariantOption, VariantSchema};

use super::*;

/// Variant schema for [`Button`]: base, `variant` and `size` axes.
pub static BUTTON_VARIANTS: VariantSchema = VariantSchema::new(
    "inline-flex items-center justify-center whitespace-nowrap rounded-ios-md text-headline \
     font-semibold transition-all duration-ios-normal ease-ios-spring focus-visible:outline-none \
     focus-visible:ring-2 focus-visible:ring-ios-blue focus-visible:ring-offset-2 \
     disabled:pointer-events-none disabled:opacity-50 min-h-[44px]",
    &[
        VariantAxis::new(
            "variant",
            "default",
            &[
                VariantOption::new(
                    "default",
                    "bg-ios-blue text-white hover:opacity-90 active:opacity-80",
                ),
                VariantOption::new(
                    "destructive",
                    "bg-ios-red text-white hover:opacity-90 active:opacity-80",
                ),
                VariantOption::new(
                    "outline",
                    "border border-separator bg-transparent text-label hover:bg-fill-secondary \
                     active:bg-fill",
                ),
                VariantOption::new(
                    "secondary",
                    "bg-fill-secondary text-label hover:bg-fill active:bg-fill-tertiary",
                ),
                VariantOption::new("ghost", "text-label hover:bg-fill-secondary active:bg-fill"),
                VariantOption::new("link", "text-ios-blue underline-offset-4 hover:underline"),
            ],
        ),
        VariantAxis::new(
            "size",
            "default",
            &[
                VariantOption::new("default", "h-[44px] px-ios-md"),
                VariantOption::new("sm", "h-[36px] px-ios-sm text-body"),
                VariantOption::new("lg", "h-[52px] px-ios-lg text-title-3"),
                VariantOption::new("icon", "h-[44px] w-[44px]"),
            ],
        ),
    ],
);

/// Class string for a button, usable on any element that should look like one.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, class: Option<&str>) -> String {
    let selection = Selection::new()
        .with("variant", variant.option())
        .with("size", size.option());
    resolve(&BUTTON_VARIANTS, &selection, class)
}

#[component]
/// iOS-style button. Renders a `<button>`, or the caller's element when `render_as` is custom.
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    /// Override classes, merged after the variant classes.
    #[prop(optional, into)]
    class: Option<String>,
    #[prop(optional)] render_as: RenderAs,
    /// Attached to the default `<button>` only.
    #[prop(optional)]
    node_ref: Option<NodeRef<html::Button>>,
    #[prop(optional, into)] extra: ExtraAttributes,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    /// Click handler for the default element. Substitute elements attach their own handlers.
    #[prop(optional)]
    on_click: Option<Callback<ev::MouseEvent>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let forwarded = forward(
        vec![
            static_attr("data-ui-kind", "button"),
            static_attr("data-ui-variant", variant.option()),
            static_attr("data-ui-size", size.option()),
        ],
        extra,
        attrs,
    );
    let class = button_class(
        variant,
        size,
        override_classes(class, forwarded.class).as_deref(),
    );
    let attributes = forwarded.attributes;

    if render_as.drops_node_ref(node_ref.is_some()) {
        logging::warn!("Button: node_ref is not attached when render_as supplies the element");
    }
    let node_ref = node_ref.unwrap_or_else(create_node_ref);

    match render_as {
        RenderAs::Element => view! {
            <button
                class=class
                node_ref=node_ref
                on:click=move |ev| {
                    if let Some(on_click) = on_click.as_ref() {
                        on_click.call(ev);
                    }
                }
                {..attributes}
            >
                {children.map(|children| children())}
            </button>
        }
        .into_view(),
        RenderAs::Custom(render) => render.call(Slot {
            class,
            attributes,
            children,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_button_classes() {
        assert_eq!(
            button_class(ButtonVariant::Default, ButtonSize::Default, None),
            "inline-flex items-center justify-center whitespace-nowrap rounded-ios-md \
             text-headline font-semibold transition-all duration-ios-normal ease-ios-spring \
             focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ios-blue \
             focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50 \
             min-h-[44px] bg-ios-blue text-white hover:opacity-90 active:opacity-80 h-[44px] \
             px-ios-md"
        );
    }

    #[test]
    fn outline_small_with_margin_override() {
        assert_eq!(
            button_class(ButtonVariant::Outline, ButtonSize::Sm, Some("mt-4")),
            "inline-flex items-center justify-center whitespace-nowrap rounded-ios-md text-body \
             font-semibold transition-all duration-ios-normal ease-ios-spring \
             focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ios-blue \
             focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50 \
             min-h-[44px] border border-separator bg-transparent text-label \
             hover:bg-fill-secondary active:bg-fill h-[36px] px-ios-sm mt-4"
        );
    }

    #[test]
    fn override_class_replaces_conflicting_tokens_only() {
        let class = button_class(
            ButtonVariant::Default,
            ButtonSize::Default,
            Some("w-full bg-ios-green"),
        );
        assert!(class.contains("bg-ios-green"));
        assert!(!class.contains("bg-ios-blue"));
        assert!(class.ends_with("w-full"));
        assert!(class.contains("text-white"));
    }

    #[test]
    fn icon_size_is_square() {
        let class = button_class(ButtonVariant::Ghost, ButtonSize::Icon, None);
        assert!(class.contains("h-[44px] w-[44px]"));
        assert!(!class.contains("px-ios-md"));
    }

    #[test]
    fn large_size_replaces_headline_type() {
        let class = button_class(ButtonVariant::Secondary, ButtonSize::Lg, None);
        assert!(class.contains("text-title-3"));
        assert!(!class.contains("text-headline"));
        assert!(class.contains("text-label"));
    }
}
