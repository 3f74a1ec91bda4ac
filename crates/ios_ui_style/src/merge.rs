//! Class-name merging with last-wins conflict resolution.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::conflict::ConflictKey;

/// A value that may contribute a whitespace-delimited class list.
///
/// Implemented for string types and for `Option` of any of them, so absent inputs can be passed
/// straight through to [`merge`] and [`cn!`](crate::cn).
pub trait ClassInput {
    /// Returns the class list, or `None` when the input is absent.
    fn class_str(&self) -> Option<&str>;
}

impl ClassInput for str {
    fn class_str(&self) -> Option<&str> {
        Some(self)
    }
}

impl ClassInput for String {
    fn class_str(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl ClassInput for Cow<'_, str> {
    fn class_str(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: ClassInput + ?Sized> ClassInput for &T {
    fn class_str(&self) -> Option<&str> {
        (**self).class_str()
    }
}

impl<T: ClassInput> ClassInput for Option<T> {
    fn class_str(&self) -> Option<&str> {
        self.as_ref().and_then(ClassInput::class_str)
    }
}

/// Incremental class merger.
///
/// Tokens are pushed in order. A token replaces the live token with the same conflict key in
/// place, and removes live tokens whose group it shadows (`p-4` removes an earlier `px-2`).
#[derive(Debug, Default, Clone)]
pub struct ClassMerger {
    slots: Vec<Option<String>>,
    live: HashMap<ConflictKey, usize>,
}

impl ClassMerger {
    /// Creates an empty merger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every token of `input`. Absent and empty inputs are ignored.
    pub fn push(&mut self, input: impl ClassInput) -> &mut Self {
        if let Some(classes) = input.class_str() {
            for token in classes.split_whitespace() {
                self.push_token(token);
            }
        }
        self
    }

    fn push_token(&mut self, token: &str) {
        let key = ConflictKey::of(token);
        for shadowed in key.shadowed() {
            if let Some(slot) = self.live.remove(&shadowed) {
                self.slots[slot] = None;
            }
        }

        match self.live.get(&key) {
            Some(&slot) => self.slots[slot] = Some(token.to_string()),
            None => {
                self.live.insert(key, self.slots.len());
                self.slots.push(Some(token.to_string()));
            }
        }
    }

    /// Joins the surviving tokens with single spaces.
    pub fn finish(self) -> String {
        self.slots.into_iter().flatten().collect::<Vec<_>>().join(" ")
    }
}

/// Merges class lists into one string where later conflicting utilities win.
///
/// ```
/// use ios_ui_style::merge;
///
/// assert_eq!(merge(["p-2", "p-4"]), "p-4");
/// assert_eq!(merge(["p-2", "text-red"]), "p-2 text-red");
/// assert_eq!(merge([Some("mt-2"), None, Some("mt-4 flex")]), "mt-4 flex");
/// ```
pub fn merge<I>(inputs: I) -> String
where
    I: IntoIterator,
    I::Item: ClassInput,
{
    let mut merger = ClassMerger::new();
    for input in inputs {
        merger.push(input);
    }
    merger.finish()
}

/// Merges heterogeneous class inputs (`&str`, `String`, `Option<_>`).
///
/// ```
/// use ios_ui_style::cn;
///
/// let extra: Option<String> = Some("px-ios-lg".into());
/// assert_eq!(cn!("px-ios-md py-2", extra, None::<&str>), "px-ios-lg py-2");
/// ```
#[macro_export]
macro_rules! cn {
    ($($input:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut merger = $crate::ClassMerger::new();
        $( merger.push(&$input); )*
        merger.finish()
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn later_same_group_token_wins() {
        assert_eq!(merge(["p-2", "p-4"]), "p-4");
        assert_eq!(merge(["p-2", "text-red"]), "p-2 text-red");
        assert_eq!(merge(["h-[44px] px-ios-md", "h-[36px]"]), "h-[36px] px-ios-md");
    }

    #[test]
    fn empty_inputs_yield_empty_string() {
        assert_eq!(merge::<[&str; 0]>([]), "");
        assert_eq!(merge([Some(""), None]), "");
        assert_eq!(merge(["   ", "\t\n"]), "");
        assert_eq!(cn!(), "");
    }

    #[test]
    fn survivors_keep_the_slot_of_their_group() {
        assert_eq!(merge(["p-2 text-red", "p-4"]), "p-4 text-red");
        assert_eq!(
            merge(["bg-ios-blue text-white hover:opacity-90", "bg-ios-red"]),
            "bg-ios-red text-white hover:opacity-90"
        );
    }

    #[test]
    fn duplicates_collapse_to_first_occurrence() {
        assert_eq!(merge(["card flex card", "flex"]), "card flex");
    }

    #[test]
    fn unrecognized_tokens_never_conflict() {
        assert_eq!(
            merge(["btn card-shell", "btn-primary"]),
            "btn card-shell btn-primary"
        );
    }

    #[test]
    fn modifiers_scope_conflicts() {
        assert_eq!(merge(["hover:bg-fill", "hover:bg-fill-secondary"]), "hover:bg-fill-secondary");
        assert_eq!(
            merge(["bg-fill", "hover:bg-fill-secondary"]),
            "bg-fill hover:bg-fill-secondary"
        );
        assert_eq!(
            merge(["focus-visible:ring-2", "focus-visible:ring-4 focus-visible:ring-ios-blue"]),
            "focus-visible:ring-4 focus-visible:ring-ios-blue"
        );
    }

    #[test]
    fn colour_and_size_on_same_prefix_coexist() {
        assert_eq!(
            merge(["text-headline text-label", "text-body"]),
            "text-body text-label"
        );
        assert_eq!(
            merge(["border border-separator", "border-ios-red"]),
            "border border-ios-red"
        );
    }

    #[test]
    fn shorthand_shadows_earlier_longhands() {
        assert_eq!(merge(["px-2 py-1", "p-4"]), "p-4");
        assert_eq!(merge(["p-4", "px-2"]), "p-4 px-2");
        assert_eq!(merge(["w-4 h-4 flex", "size-8"]), "flex size-8");
        assert_eq!(merge(["rounded-t-lg", "rounded-ios-md"]), "rounded-ios-md");
    }

    #[test]
    fn distinct_properties_sharing_a_prefix_are_kept() {
        let cases = [
            ("col-span-2 col-start-2", "col-span-2 col-start-2"),
            ("row-span-2 row-start-1", "row-span-2 row-start-1"),
            ("decoration-wavy decoration-ios-red", "decoration-wavy decoration-ios-red"),
            ("bg-clip-text bg-ios-blue", "bg-clip-text bg-ios-blue"),
            ("bg-[url(/hero.png)] bg-ios-blue", "bg-[url(/hero.png)] bg-ios-blue"),
            ("space-x-4 space-x-reverse", "space-x-4 space-x-reverse"),
            ("object-cover object-center", "object-cover object-center"),
            ("break-words break-inside-avoid", "break-words break-inside-avoid"),
        ];
        for (input, expected) in cases {
            assert_eq!(merge([input]), expected, "input {input:?}");
        }
    }

    #[test]
    fn grid_shorthand_shadows_placement() {
        assert_eq!(merge(["col-span-2 col-start-2", "col-auto"]), "col-auto");
        assert_eq!(merge(["col-auto", "col-span-2"]), "col-auto col-span-2");
        assert_eq!(merge(["object-cover", "object-contain"]), "object-contain");
    }

    #[test]
    fn freed_slot_is_not_reused() {
        assert_eq!(merge(["px-1 p-2 px-3"]), "p-2 px-3");
    }

    #[test]
    fn merging_is_associative_over_inputs() {
        let cases: &[(&str, &str, &str)] = &[
            ("px-1 p-2", "px-3", "p-4"),
            ("p-2 text-red hover:bg-a", "p-4 hover:bg-b", "text-blue"),
            ("card flex", "card grid", "hidden"),
            ("border border-separator", "border-2", "border-t-4 border-x"),
            ("", "mt-4", ""),
            ("col-span-2", "col-start-2", "col-auto"),
            ("row-span-2 row-start-1", "row-end-3", "row-span-1"),
            ("decoration-wavy", "decoration-ios-red", "decoration-2"),
            ("bg-clip-text bg-[url(/hero.png)]", "bg-ios-blue", "bg-origin-border"),
            ("space-x-4", "space-x-reverse", "space-x-2"),
            ("object-cover", "object-center", "object-contain"),
            ("break-words", "break-inside-avoid", "break-all"),
        ];
        for (a, b, c) in cases {
            let stepwise = merge([merge([*a, *b]).as_str(), *c]);
            assert_eq!(stepwise, merge([*a, *b, *c]), "inputs {a:?} {b:?} {c:?}");
        }
    }

    #[test]
    fn macro_accepts_mixed_inputs() {
        let owned = String::from("text-body");
        let missing: Option<&str> = None;
        let present: Option<String> = Some("text-title-3".to_string());
        assert_eq!(cn!("font-semibold text-headline", owned, missing, present), "font-semibold text-title-3");
    }

    #[test]
    fn important_and_negative_utilities() {
        assert_eq!(merge(["!p-2", "p-4"]), "!p-2 p-4");
        assert_eq!(merge(["-mt-2", "mt-4"]), "mt-4");
    }
}
