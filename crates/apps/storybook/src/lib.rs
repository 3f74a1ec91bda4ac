//! Story catalog for the iOS component kit.
//!
//! Every component family gets a primary story driven by editable args plus a handful of fixed
//! compositions. The open story and each component's args form a serializable
//! [`CatalogState`] the host can persist and hand back on the next launch.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod app;
pub mod catalog;
mod config;
mod error;
mod stories;

pub use app::StorybookApp;
pub use catalog::{story_catalog, ArgControl, ArgSpec, CatalogState, StoryMeta};
pub use config::{CatalogTheme, StoryLayout, StorybookConfig};
pub use error::CatalogError;
pub use stories::{render_story, StoryKind};

/// Mounts the catalog on `<body>` with the default configuration.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <StorybookApp /> })
}
