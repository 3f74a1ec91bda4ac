//! Class-name composition for the iOS component kit.
//!
//! The crate is runtime-agnostic: it has no Leptos or browser dependency. It provides the
//! conflict-aware class merger ([`merge`], [`cn!`], [`ClassMerger`]), static variant schemas
//! resolved into class strings ([`VariantSchema`], [`resolve`]) and the theme token catalogue
//! ([`theme`]). Every operation is a pure string transform and never fails at resolution time.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod conflict;
mod error;
mod merge;
pub mod theme;
mod variants;

pub use error::SchemaError;
pub use merge::{merge, ClassInput, ClassMerger};
pub use variants::{
    resolve, CompoundVariant, Selection, VariantAxis, VariantOption, VariantSchema,
};
