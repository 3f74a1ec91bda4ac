//! Story renderers. Primary stories read their args; the rest are fixed compositions.

use ios_ui::prelude::*;
use ios_ui::theme::{self, SystemColor};
use leptos::*;
use serde_json::Value;

use crate::catalog::{decode_button_args, decode_card_args, decode_input_args, Decoded, StoryMeta};

fn log_fallbacks<T>(story: &str, decoded: Decoded<T>) -> T {
    for warning in &decoded.warnings {
        logging::warn!("{story}: {warning}");
    }
    decoded.value
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Every story the catalog can render.
pub enum StoryKind {
    /// Button driven by the args panel.
    ButtonDefault,
    /// One button per colour treatment.
    ButtonVariants,
    /// One button per size.
    ButtonSizes,
    /// Enabled and disabled buttons.
    ButtonStates,
    /// Buttons with leading and trailing glyphs.
    ButtonWithIcons,
    /// Input driven by the args panel.
    InputDefault,
    /// One input per native type.
    InputTypes,
    /// Placeholder, disabled and pre-filled inputs.
    InputStates,
    /// Input paired with a label.
    InputWithLabels,
    /// Full card driven by the args panel.
    CardDefault,
    /// One card per surface treatment.
    CardVariants,
    /// Card with only content.
    CardSimple,
    /// Card with footer actions.
    CardWithActions,
    /// System and semantic colour swatches.
    ThemeColors,
    /// Dynamic type ramp and font stacks.
    ThemeTypography,
    /// Spacing scale and corner radii.
    ThemeSpacing,
    /// Shadows, material blur and motion.
    ThemeEffects,
}

impl StoryKind {
    /// Looks up the story `story` of `component`.
    pub fn lookup(component: &str, story: &str) -> Option<Self> {
        let kind = match (component, story) {
            ("Button", "Default") => Self::ButtonDefault,
            ("Button", "Variants") => Self::ButtonVariants,
            ("Button", "Sizes") => Self::ButtonSizes,
            ("Button", "States") => Self::ButtonStates,
            ("Button", "WithIcons") => Self::ButtonWithIcons,
            ("Input", "Default") => Self::InputDefault,
            ("Input", "Types") => Self::InputTypes,
            ("Input", "States") => Self::InputStates,
            ("Input", "WithLabels") => Self::InputWithLabels,
            ("Card", "Default") => Self::CardDefault,
            ("Card", "Variants") => Self::CardVariants,
            ("Card", "Simple") => Self::CardSimple,
            ("Card", "WithActions") => Self::CardWithActions,
            ("Theme", "Colors") => Self::ThemeColors,
            ("Theme", "Typography") => Self::ThemeTypography,
            ("Theme", "Spacing") => Self::ThemeSpacing,
            ("Theme", "Effects") => Self::ThemeEffects,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns `true` when the story reads the args panel.
    pub fn reads_args(self) -> bool {
        matches!(self, Self::ButtonDefault | Self::InputDefault | Self::CardDefault)
    }

    /// Renders the story with the primary-story `args`.
    pub fn render(self, args: &Value) -> View {
        match self {
            Self::ButtonDefault => button_default(args),
            Self::ButtonVariants => button_variants(),
            Self::ButtonSizes => button_sizes(),
            Self::ButtonStates => button_states(),
            Self::ButtonWithIcons => button_with_icons(),
            Self::InputDefault => input_default(args),
            Self::InputTypes => input_types(),
            Self::InputStates => input_states(),
            Self::InputWithLabels => input_with_labels(),
            Self::CardDefault => card_default(args),
            Self::CardVariants => card_variants(),
            Self::CardSimple => card_simple(),
            Self::CardWithActions => card_with_actions(),
            Self::ThemeColors => theme_colors(),
            Self::ThemeTypography => theme_typography(),
            Self::ThemeSpacing => theme_spacing(),
            Self::ThemeEffects => theme_effects(),
        }
    }
}

/// Renders `story` of `meta` with the primary-story `args`.
///
/// Stories without a renderer produce an empty canvas and are logged.
pub fn render_story(meta: &StoryMeta, story: &str, args: &Value) -> View {
    match StoryKind::lookup(meta.component, story) {
        Some(kind) => kind.render(args),
        None => {
            logging::warn!("no renderer for {} story `{story}`", meta.component);
            View::default()
        }
    }
}

fn anchor_slot(slot: Slot) -> View {
    view! {
        <a href="#" class=slot.class {..slot.attributes}>
            {slot.children.map(|children| children())}
        </a>
    }
    .into_view()
}

fn button_default(args: &Value) -> View {
    let args = log_fallbacks("Button/Default", decode_button_args(args));
    let render_as = if args.as_child {
        RenderAs::custom(anchor_slot)
    } else {
        RenderAs::Element
    };

    view! {
        <Button
            variant=args.variant
            size=args.size
            render_as=render_as
            extra=ExtraAttributes::new().with("disabled", args.disabled)
        >
            {args.label}
        </Button>
    }
    .into_view()
}

fn button_variants() -> View {
    view! {
        <div class="flex flex-col gap-4">
            <div class="flex gap-4">
                <Button variant=ButtonVariant::Default>"Default"</Button>
                <Button variant=ButtonVariant::Destructive>"Destructive"</Button>
                <Button variant=ButtonVariant::Outline>"Outline"</Button>
                <Button variant=ButtonVariant::Secondary>"Secondary"</Button>
                <Button variant=ButtonVariant::Ghost>"Ghost"</Button>
                <Button variant=ButtonVariant::Link>"Link"</Button>
            </div>
        </div>
    }
    .into_view()
}

fn button_sizes() -> View {
    view! {
        <div class="flex items-center gap-4">
            <Button size=ButtonSize::Sm>"Small"</Button>
            <Button size=ButtonSize::Default>"Default"</Button>
            <Button size=ButtonSize::Lg>"Large"</Button>
            <Button size=ButtonSize::Icon extra=ExtraAttributes::new().with("aria-label", "Launch")>
                "🚀"
            </Button>
        </div>
    }
    .into_view()
}

fn button_states() -> View {
    let disabled = || ExtraAttributes::new().with("disabled", true);

    view! {
        <div class="flex flex-col gap-4">
            <div class="flex gap-4">
                <Button>"Default"</Button>
                <Button extra=disabled()>"Disabled"</Button>
            </div>
            <div class="flex gap-4">
                <Button variant=ButtonVariant::Outline>"Outline"</Button>
                <Button variant=ButtonVariant::Outline extra=disabled()>"Outline Disabled"</Button>
            </div>
        </div>
    }
    .into_view()
}

fn button_with_icons() -> View {
    view! {
        <div class="flex gap-4">
            <Button>
                <span class="mr-2">"←"</span>
                "Back"
            </Button>
            <Button>
                "Next"
                <span class="ml-2">"→"</span>
            </Button>
        </div>
    }
    .into_view()
}

fn input_default(args: &Value) -> View {
    let args = log_fallbacks("Input/Default", decode_input_args(args));

    view! {
        <Input
            input_type=args.input_type
            class="w-[300px]"
            extra=ExtraAttributes::new()
                .with("placeholder", args.placeholder)
                .with("disabled", args.disabled)
        />
    }
    .into_view()
}

fn sample_placeholder(input_type: InputType) -> &'static str {
    match input_type {
        InputType::Text => "Text input",
        InputType::Email => "Email input",
        InputType::Password => "Password input",
        InputType::Number => "Number input",
        InputType::Tel => "Phone number",
        InputType::Url => "URL",
        InputType::Search => "Search",
    }
}

fn input_types() -> View {
    view! {
        <div class="flex flex-col gap-4 w-[300px]">
            {InputType::ALL
                .into_iter()
                .map(|input_type| {
                    let placeholder = sample_placeholder(input_type);
                    view! { <Input input_type=input_type attr:placeholder=placeholder /> }
                })
                .collect_view()}
        </div>
    }
    .into_view()
}

fn input_states() -> View {
    view! {
        <div class="flex flex-col gap-4 w-[300px]">
            <Input attr:placeholder="Default state" />
            <Input extra=ExtraAttributes::new()
                .with("placeholder", "Disabled state")
                .with("disabled", true) />
            <Input extra=ExtraAttributes::new()
                .with("placeholder", "With value")
                .with("value", "Pre-filled value") />
        </div>
    }
    .into_view()
}

fn input_with_labels() -> View {
    view! {
        <div class="flex flex-col gap-2 w-[300px]">
            <label class="text-subheadline text-label-secondary" for="story-email">
                "Email"
            </label>
            <Input
                input_type=InputType::Email
                extra=ExtraAttributes::new()
                    .with("id", "story-email")
                    .with("placeholder", "name@example.com")
            />
        </div>
    }
    .into_view()
}

fn card_default(args: &Value) -> View {
    let args = log_fallbacks("Card/Default", decode_card_args(args));

    view! {
        <Card variant=args.variant class="w-[350px]">
            <CardHeader>
                <CardTitle>"Card Title"</CardTitle>
                <CardDescription>"Card description goes here."</CardDescription>
            </CardHeader>
            <CardContent>
                <p class="text-body">"Card content goes here."</p>
            </CardContent>
            <CardFooter>
                <Button class="w-full">"Action"</Button>
            </CardFooter>
        </Card>
    }
    .into_view()
}

fn card_variants() -> View {
    let cards = [
        (
            CardVariant::Default,
            "Default Card",
            "Standard card with border",
            "This is a default card.",
        ),
        (
            CardVariant::Elevated,
            "Elevated Card",
            "Card with elevated shadow",
            "This card has more elevation.",
        ),
        (
            CardVariant::Filled,
            "Filled Card",
            "Card with filled background",
            "This card has a filled background.",
        ),
        (
            CardVariant::Blurred,
            "Blurred Card",
            "Card with blur effect",
            "This card has a blur effect.",
        ),
    ];

    view! {
        <div class="flex flex-col gap-4">
            {cards
                .into_iter()
                .map(|(variant, title, description, body)| {
                    view! {
                        <Card variant=variant class="w-[350px]">
                            <CardHeader>
                                <CardTitle>{title}</CardTitle>
                                <CardDescription>{description}</CardDescription>
                            </CardHeader>
                            <CardContent>
                                <p class="text-body">{body}</p>
                            </CardContent>
                        </Card>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_view()
}

fn card_simple() -> View {
    view! {
        <Card class="w-[350px]">
            <CardContent class="p-ios-md">
                <p class="text-body">"Simple card with just content."</p>
            </CardContent>
        </Card>
    }
    .into_view()
}

fn card_with_actions() -> View {
    view! {
        <Card class="w-[350px]">
            <CardHeader>
                <CardTitle>"Card with Actions"</CardTitle>
                <CardDescription>"Card with footer actions"</CardDescription>
            </CardHeader>
            <CardContent>
                <p class="text-body">"This card has action buttons in the footer."</p>
            </CardContent>
            <CardFooter class="flex gap-2">
                <Button variant=ButtonVariant::Outline class="flex-1">"Cancel"</Button>
                <Button class="flex-1">"Confirm"</Button>
            </CardFooter>
        </Card>
    }
    .into_view()
}

fn swatch_row(title: &'static str, colors: &'static [SystemColor]) -> impl IntoView {
    view! {
        <section class="flex flex-col gap-ios-sm">
            <h3 class="text-headline text-label">{title}</h3>
            <div class="grid grid-cols-4 gap-ios-sm">
                {colors
                    .iter()
                    .map(|color| {
                        view! {
                            <div class="flex flex-col gap-ios-xs" data-token=color.name>
                                <div
                                    class="h-[44px] rounded-ios-md border border-separator"
                                    style=format!("background: {}", color.light)
                                ></div>
                                <span class="text-footnote text-label">{color.name}</span>
                                <span class="text-caption-1 text-label-secondary">
                                    {format!("{} / {}", color.light, color.dark)}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

fn theme_colors() -> View {
    view! {
        <div class="flex flex-col gap-ios-lg">
            {swatch_row("System colors", theme::SYSTEM_COLORS)}
            {swatch_row("Semantic colors", theme::SEMANTIC_COLORS)}
        </div>
    }
    .into_view()
}

fn token_table<V: std::fmt::Display>(
    title: &'static str,
    tokens: &'static [(&'static str, V)],
    unit: &'static str,
) -> impl IntoView {
    view! {
        <section class="flex flex-col gap-ios-xs">
            <h3 class="text-headline text-label">{title}</h3>
            {tokens
                .iter()
                .map(|(name, value)| {
                    view! {
                        <div class="flex justify-between gap-ios-md" data-token=*name>
                            <span class="text-footnote text-label">{*name}</span>
                            <span class="text-caption-1 text-label-secondary">
                                {format!("{value}{unit}")}
                            </span>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

fn theme_spacing() -> View {
    view! {
        <div class="flex flex-col gap-ios-lg">
            <section class="flex flex-col gap-ios-xs">
                <h3 class="text-headline text-label">"Spacing"</h3>
                {theme::SPACING
                    .iter()
                    .map(|(name, px)| {
                        view! {
                            <div class="flex items-center gap-ios-md" data-token=*name>
                                <span class="w-[80px] text-footnote text-label">{*name}</span>
                                <div
                                    class="h-ios-sm rounded-ios-xs bg-ios-blue"
                                    style=format!("width: {px}px")
                                ></div>
                                <span class="text-caption-1 text-label-secondary">
                                    {format!("{px}px")}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
            <section class="flex flex-col gap-ios-xs">
                <h3 class="text-headline text-label">"Corner radii"</h3>
                <div class="flex flex-wrap gap-ios-md">
                    {theme::RADII
                        .iter()
                        .map(|(name, value)| {
                            view! {
                                <div class="flex flex-col items-center gap-ios-xs" data-token=*name>
                                    <div
                                        class="size-[56px] border border-separator bg-fill-secondary"
                                        style=format!("border-radius: {value}")
                                    ></div>
                                    <span class="text-caption-1 text-label">{*name}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
    .into_view()
}

fn theme_effects() -> View {
    view! {
        <div class="flex flex-col gap-ios-lg">
            <section class="flex flex-col gap-ios-xs">
                <h3 class="text-headline text-label">"Shadows"</h3>
                <div class="flex flex-wrap gap-ios-lg">
                    {theme::SHADOWS
                        .iter()
                        .map(|(name, value)| {
                            view! {
                                <div
                                    class="flex size-[96px] items-center justify-center rounded-ios-lg bg-background"
                                    style=format!("box-shadow: {value}")
                                    data-token=*name
                                >
                                    <span class="text-caption-1 text-label">{*name}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            {token_table("Backdrop blur", theme::BLURS, "px")}
            {token_table("Durations", theme::DURATIONS, "ms")}
            {token_table("Easings", theme::EASINGS, "")}
        </div>
    }
    .into_view()
}

fn theme_typography() -> View {
    let families = theme::FONT_FAMILIES
        .iter()
        .map(|(name, stack)| {
            view! {
                <div class="flex flex-col gap-ios-xs" data-token=*name>
                    <span class=format!("font-{name} text-headline text-label")>{*name}</span>
                    <span class="text-caption-1 text-label-secondary">{stack.join(", ")}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="flex flex-col gap-ios-sm">
            {families}
            {theme::TYPE_SCALE
                .iter()
                .map(|style| {
                    view! {
                        <div class="flex items-baseline gap-ios-md" data-token=style.name>
                            <span class=format!("text-{} text-label", style.name)>{style.name}</span>
                            <span class="text-caption-1 text-label-secondary">
                                {format!(
                                    "{}px / {}px, weight {}",
                                    style.size_px,
                                    style.line_height_px,
                                    style.weight,
                                )}
                            </span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::story_catalog;

    #[test]
    fn every_catalog_story_has_a_renderer() {
        for meta in story_catalog() {
            for story in meta.stories {
                assert!(
                    StoryKind::lookup(meta.component, story).is_some(),
                    "{} has no renderer for {story}",
                    meta.title
                );
            }
        }
    }

    #[test]
    fn input_type_samples_cover_every_type() {
        let placeholders: Vec<&str> = InputType::ALL.into_iter().map(sample_placeholder).collect();
        assert_eq!(placeholders.len(), 7);
        assert!(placeholders.contains(&"Search"));
        for (idx, placeholder) in placeholders.iter().enumerate() {
            assert!(!placeholders[idx + 1..].contains(placeholder));
        }
    }

    #[test]
    fn only_primary_stories_read_args() {
        let catalog = story_catalog();
        for meta in &catalog {
            for (idx, story) in meta.stories.iter().enumerate() {
                let Some(kind) = StoryKind::lookup(meta.component, story) else {
                    continue;
                };
                assert_eq!(kind.reads_args(), idx == 0 && !meta.args.is_empty());
            }
        }
        assert_eq!(StoryKind::lookup("Button", "Loading"), None);
    }
}
