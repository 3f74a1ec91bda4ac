use ios_ui_style::{resolve, Selection, VariantSchema};

use super::*;

/// Style schema for [`Input`]. Inputs have no variant axes, only base classes.
pub static INPUT_STYLE: VariantSchema = VariantSchema::new(
    "flex h-[44px] w-full rounded-ios-md border border-separator bg-background px-ios-sm \
     py-ios-sm text-body text-label placeholder:text-label-tertiary focus:outline-none \
     focus:ring-2 focus:ring-ios-blue focus:ring-offset-2 disabled:cursor-not-allowed \
     disabled:opacity-50 dark:border-separator-dark",
    &[],
);

/// Class string for a text field.
pub fn input_class(class: Option<&str>) -> String {
    resolve(&INPUT_STYLE, &Selection::new(), class)
}

#[component]
/// Single-line text field rendered as a native `<input>`.
pub fn Input(
    #[prop(optional)] input_type: InputType,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional, into)] extra: ExtraAttributes,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] on_input: Option<Callback<ev::Event>>,
) -> impl IntoView {
    let forwarded = forward(vec![static_attr("data-ui-kind", "input")], extra, attrs);
    let class = input_class(override_classes(class, forwarded.class).as_deref());
    let attributes = forwarded.attributes;

    view! {
        <input
            type=input_type.as_str()
            class=class
            node_ref=node_ref
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
            {..attributes}
        />
    }
}
