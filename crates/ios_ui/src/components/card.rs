use ios_ui_style::{resolve, Selection, VariantAxis, VariantOption, VariantSchema};

use super::*;

/// Variant schema for [`Card`].
pub static CARD_VARIANTS: VariantSchema = VariantSchema::new(
    "rounded-ios-xl text-label overflow-hidden",
    &[VariantAxis::new(
        "variant",
        "default",
        &[
            VariantOption::new(
                "default",
                "border border-separator bg-background dark:border-separator-dark",
            ),
            VariantOption::new("elevated", "bg-background shadow-ios-lg"),
            VariantOption::new("filled", "bg-background-secondary"),
            VariantOption::new(
                "blurred",
                "border border-separator/50 bg-background/70 backdrop-blur-ios",
            ),
        ],
    )],
);

/// Style schema for [`CardHeader`].
pub static CARD_HEADER_STYLE: VariantSchema =
    VariantSchema::new("flex flex-col gap-ios-xs p-ios-md", &[]);

/// Style schema for [`CardTitle`].
pub static CARD_TITLE_STYLE: VariantSchema =
    VariantSchema::new("text-title-3 text-label tracking-tight", &[]);

/// Style schema for [`CardDescription`].
pub static CARD_DESCRIPTION_STYLE: VariantSchema =
    VariantSchema::new("text-subheadline text-label-secondary", &[]);

/// Style schema for [`CardContent`].
pub static CARD_CONTENT_STYLE: VariantSchema = VariantSchema::new("px-ios-md pb-ios-md", &[]);

/// Style schema for [`CardFooter`].
pub static CARD_FOOTER_STYLE: VariantSchema =
    VariantSchema::new("flex items-center px-ios-md pb-ios-md", &[]);

/// Class string for a card surface.
pub fn card_class(variant: CardVariant, class: Option<&str>) -> String {
    let selection = Selection::new().with("variant", variant.option());
    resolve(&CARD_VARIANTS, &selection, class)
}

/// Class string for a card header.
pub fn card_header_class(class: Option<&str>) -> String {
    resolve(&CARD_HEADER_STYLE, &Selection::new(), class)
}

/// Class string for a card title.
pub fn card_title_class(class: Option<&str>) -> String {
    resolve(&CARD_TITLE_STYLE, &Selection::new(), class)
}

/// Class string for a card description.
pub fn card_description_class(class: Option<&str>) -> String {
    resolve(&CARD_DESCRIPTION_STYLE, &Selection::new(), class)
}

/// Class string for a card body.
pub fn card_content_class(class: Option<&str>) -> String {
    resolve(&CARD_CONTENT_STYLE, &Selection::new(), class)
}

/// Class string for a card footer.
pub fn card_footer_class(class: Option<&str>) -> String {
    resolve(&CARD_FOOTER_STYLE, &Selection::new(), class)
}

#[component]
/// Grouped surface for related content.
pub fn Card(
    #[prop(optional)] variant: CardVariant,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(optional, into)] extra: ExtraAttributes,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let forwarded = forward(
        vec![
            static_attr("data-ui-kind", "card"),
            static_attr("data-ui-variant", variant.option()),
        ],
        extra,
        attrs,
    );
    let class = card_class(variant, override_classes(class, forwarded.class).as_deref());
    let attributes = forwarded.attributes;

    view! {
        <div class=class node_ref={node_ref} {..attributes}>
            {children.map(|children| children())}
        </div>
    }
}

#[component]
/// Title and description stack at the top of a [`Card`].
pub fn CardHeader(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(optional, into)] extra: ExtraAttributes,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let forwarded = forward(vec![static_attr("data-ui-slot", "card-header")], extra, attrs);
    let class = card_header_class(override_classes(class, forwarded.class).as_deref());
    let attributes = forwarded.attributes;

    view! {
        <div class=class node_ref={node_ref} {..attributes}>
            {children.map(|children| children())}
        </div>
    }
}

#[component]
/// Card heading.
pub fn CardTitle(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::H3>,
    #[prop(optional, into)] extra: ExtraAttributes,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let forwarded = forward(vec![static_attr("data-ui-slot", "card-title")], extra, attrs);
    let class = card_title_class(override_classes(class, forwarded.class).as_deref());
    let attributes = forwarded.attributes;

    view! {
        <h3 class=class node_ref={node_ref} {..attributes}>
            {children.map(|children| children())}
        </h3>
    }
}

#[component]
/// Secondary text under a [`CardTitle`].
pub fn CardDescription(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::P>,
    #[prop(optional, into)] extra: ExtraAttributes,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let forwarded = forward(
        vec![static_attr("data-ui-slot", "card-description")],
        extra,
        attrs,
    );
    let class = card_description_class(override_classes(class, forwarded.class).as_deref());
    let attributes = forwarded.attributes;

    view! {
        <p class=class node_ref={node_ref} {..attributes}>
            {children.map(|children| children())}
        </p>
    }
}

#[component]
/// Card body.
pub fn CardContent(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(optional, into)] extra: ExtraAttributes,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let forwarded = forward(vec![static_attr("data-ui-slot", "card-content")], extra, attrs);
    let class = card_content_class(override_classes(class, forwarded.class).as_deref());
    let attributes = forwarded.attributes;

    view! {
        <div class=class node_ref={node_ref} {..attributes}>
            {children.map(|children| children())}
        </div>
    }
}

#[component]
/// Action row at the bottom of a [`Card`].
pub fn CardFooter(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(optional, into)] extra: ExtraAttributes,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let forwarded = forward(vec![static_attr("data-ui-slot", "card-footer")], extra, attrs);
    let class = card_footer_class(override_classes(class, forwarded.class).as_deref());
    let attributes = forwarded.attributes;

    view! {
        <div class=class node_ref={node_ref} {..attributes}>
            {children.map(|children| children())}
        </div>
    }
}
