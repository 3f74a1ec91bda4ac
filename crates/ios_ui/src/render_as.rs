//! "Render as" polymorphism: swapping the default element for a caller-supplied one.

use leptos::{Attribute, Callback, Children, View};

/// Resolved styling and attributes handed to a substitute renderer.
pub struct Slot {
    /// Final merged class string.
    pub class: String,
    /// Passthrough and `data-ui-*` attributes, ready for `{..attributes}` spreading.
    pub attributes: Vec<(&'static str, Attribute)>,
    /// Children passed to the component.
    pub children: Option<Children>,
}

/// Chooses which element a component renders.
///
/// ```ignore
/// view! {
///     <Button render_as=RenderAs::custom(|slot: Slot| view! {
///         <a href="/settings" class=slot.class {..slot.attributes}>
///             {slot.children.map(|children| children())}
///         </a>
///     }.into_view())>
///         "Settings"
///     </Button>
/// }
/// ```
#[derive(Clone, Default)]
pub enum RenderAs {
    /// The component's own element.
    #[default]
    Element,
    /// A caller-supplied element built from the resolved [`Slot`]. The component's `node_ref` is
    /// not attached; the substitute owns its element, and passing both is logged.
    Custom(Callback<Slot, View>),
}

impl RenderAs {
    /// Wraps a substitute renderer.
    pub fn custom(render: impl Fn(Slot) -> View + 'static) -> Self {
        Self::Custom(Callback::new(render))
    }

    /// Returns `true` for the component's own element.
    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element)
    }

    /// Returns `true` when a caller-supplied `node_ref` would not reach the rendered element.
    pub(crate) fn drops_node_ref(&self, has_node_ref: bool) -> bool {
        has_node_ref && !self.is_element()
    }
}
