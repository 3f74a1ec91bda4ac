//! iOS-styled Leptos components: buttons, text inputs and cards.
//!
//! Every component resolves its classes through a static [`VariantSchema`] and the
//! conflict-aware [`merge`] from `ios_ui_style`, then renders one native element with the
//! caller's override classes merged last. Passthrough attributes are forwarded untouched, either
//! through leptos `attr:*` spreading or an explicit [`ExtraAttributes`] map, and every component
//! accepts a `node_ref` for the element it renders. The stable `data-ui-kind` / `data-ui-slot`
//! attributes identify rendered parts for tests and stylesheets.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod attrs;
mod components;
mod render_as;

pub use attrs::{AttrValue, ExtraAttributes};
pub use components::{
    button_class, card_class, card_content_class, card_description_class, card_footer_class,
    card_header_class, card_title_class, input_class, Button, ButtonSize, ButtonVariant, Card,
    CardContent, CardDescription, CardFooter, CardHeader, CardTitle, CardVariant, Input,
    InputType, BUTTON_VARIANTS, CARD_CONTENT_STYLE, CARD_DESCRIPTION_STYLE, CARD_FOOTER_STYLE,
    CARD_HEADER_STYLE, CARD_TITLE_STYLE, CARD_VARIANTS, INPUT_STYLE,
};
pub use ios_ui_style::{cn, merge, theme, ClassInput, Selection, VariantSchema};
pub use render_as::{RenderAs, Slot};

/// Convenience imports for applications composing the kit.
pub mod prelude {
    pub use crate::{
        cn, AttrValue, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription,
        CardFooter, CardHeader, CardTitle, CardVariant, ExtraAttributes, Input, InputType,
        RenderAs, Slot,
    };
}
