//! Fixed conflict-group table used by the class merger.
//!
//! A token is split into variant modifiers (`hover:`, `dark:`), an optional important marker and
//! the utility itself. The utility is mapped onto a [`ConflictGroup`]; tokens sharing modifiers,
//! importance and group set the same CSS property, so only the last one survives a merge.

use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ConflictGroup {
    // Layout
    Display,
    Position,
    Visibility,
    Inset,
    InsetX,
    InsetY,
    Top,
    Right,
    Bottom,
    Left,
    Start,
    End,
    ZIndex,
    Overflow,
    OverflowX,
    OverflowY,
    Aspect,
    ObjectFit,
    ObjectPosition,
    ScreenReader,
    // Flexbox and grid
    Basis,
    Flex,
    FlexDirection,
    FlexWrap,
    Grow,
    Shrink,
    Order,
    GridCols,
    GridRows,
    Col,
    ColSpan,
    ColStart,
    ColEnd,
    Row,
    RowSpan,
    RowStart,
    RowEnd,
    AlignItems,
    AlignContent,
    AlignSelf,
    JustifyContent,
    JustifyItems,
    JustifySelf,
    PlaceItems,
    PlaceContent,
    PlaceSelf,
    Gap,
    GapX,
    GapY,
    // Spacing
    P,
    Px,
    Py,
    Pt,
    Pr,
    Pb,
    Pl,
    Ps,
    Pe,
    M,
    Mx,
    My,
    Mt,
    Mr,
    Mb,
    Ml,
    Ms,
    Me,
    SpaceX,
    SpaceY,
    SpaceXReverse,
    SpaceYReverse,
    // Sizing
    Size,
    W,
    H,
    MinW,
    MinH,
    MaxW,
    MaxH,
    // Typography
    FontSize,
    FontWeight,
    FontFamily,
    FontStyle,
    FontSmoothing,
    TextColor,
    TextAlign,
    TextWrap,
    TextTransform,
    TextOverflow,
    TextDecoration,
    DecorationStyle,
    DecorationThickness,
    DecorationColor,
    UnderlineOffset,
    Leading,
    Tracking,
    Whitespace,
    WordBreak,
    BreakInside,
    BreakBefore,
    BreakAfter,
    Indent,
    VerticalAlign,
    LineClamp,
    ListStyle,
    // Backgrounds
    BgColor,
    BgOpacity,
    BgSize,
    BgPosition,
    BgRepeat,
    BgAttachment,
    BgImage,
    BgClip,
    BgOrigin,
    BgBlend,
    GradientFrom,
    GradientVia,
    GradientTo,
    // Borders
    BorderW,
    BorderWX,
    BorderWY,
    BorderWT,
    BorderWR,
    BorderWB,
    BorderWL,
    BorderWS,
    BorderWE,
    BorderColor,
    BorderColorX,
    BorderColorY,
    BorderColorT,
    BorderColorR,
    BorderColorB,
    BorderColorL,
    BorderColorS,
    BorderColorE,
    BorderStyle,
    BorderOpacity,
    BorderCollapse,
    BorderSpacing,
    Rounded,
    RoundedT,
    RoundedR,
    RoundedB,
    RoundedL,
    RoundedS,
    RoundedE,
    RoundedTl,
    RoundedTr,
    RoundedBr,
    RoundedBl,
    RoundedSs,
    RoundedSe,
    RoundedEs,
    RoundedEe,
    RingW,
    RingColor,
    RingInset,
    RingOffsetW,
    RingOffsetColor,
    OutlineStyle,
    OutlineW,
    OutlineColor,
    OutlineOffset,
    // Effects and filters
    Shadow,
    ShadowColor,
    Opacity,
    Blur,
    BackdropBlur,
    Fill,
    Stroke,
    // Transitions and transforms
    Transition,
    Duration,
    Ease,
    Delay,
    Animate,
    Scale,
    Rotate,
    TranslateX,
    TranslateY,
    // Interactivity
    Cursor,
    PointerEvents,
    UserSelect,
    Appearance,
    Resize,
}

impl ConflictGroup {
    /// Narrower groups a later token of this group removes, the way CSS shorthands reset their
    /// longhands.
    pub(crate) fn shadows(self) -> &'static [ConflictGroup] {
        use ConflictGroup::*;
        match self {
            Inset => &[InsetX, InsetY, Top, Right, Bottom, Left, Start, End],
            InsetX => &[Right, Left],
            InsetY => &[Top, Bottom],
            Overflow => &[OverflowX, OverflowY],
            Gap => &[GapX, GapY],
            Col => &[ColSpan, ColStart, ColEnd],
            Row => &[RowSpan, RowStart, RowEnd],
            P => &[Px, Py, Pt, Pr, Pb, Pl, Ps, Pe],
            Px => &[Pr, Pl],
            Py => &[Pt, Pb],
            M => &[Mx, My, Mt, Mr, Mb, Ml, Ms, Me],
            Mx => &[Mr, Ml],
            My => &[Mt, Mb],
            Size => &[W, H],
            BorderW => &[
                BorderWX, BorderWY, BorderWT, BorderWR, BorderWB, BorderWL, BorderWS, BorderWE,
            ],
            BorderWX => &[BorderWR, BorderWL],
            BorderWY => &[BorderWT, BorderWB],
            BorderColor => &[
                BorderColorX,
                BorderColorY,
                BorderColorT,
                BorderColorR,
                BorderColorB,
                BorderColorL,
                BorderColorS,
                BorderColorE,
            ],
            BorderColorX => &[BorderColorR, BorderColorL],
            BorderColorY => &[BorderColorT, BorderColorB],
            Rounded => &[
                RoundedT, RoundedR, RoundedB, RoundedL, RoundedS, RoundedE, RoundedTl, RoundedTr,
                RoundedBr, RoundedBl, RoundedSs, RoundedSe, RoundedEs, RoundedEe,
            ],
            RoundedT => &[RoundedTl, RoundedTr],
            RoundedR => &[RoundedTr, RoundedBr],
            RoundedB => &[RoundedBr, RoundedBl],
            RoundedL => &[RoundedTl, RoundedBl],
            RoundedS => &[RoundedSs, RoundedEs],
            RoundedE => &[RoundedSe, RoundedEe],
            _ => &[],
        }
    }
}

/// Identity of the property a token sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct ConflictKey {
    scope: String,
    target: Target,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Target {
    Group(ConflictGroup),
    /// Arbitrary property such as `[mask-type:alpha]`, keyed by property name.
    Property(String),
    /// Unrecognized token; only conflicts with an identical token.
    Literal(String),
}

impl ConflictKey {
    pub(crate) fn of(token: &str) -> Self {
        let (modifiers, utility) = split_modifiers(token);
        let (important, utility) = match utility.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => match utility.strip_suffix('!') {
                Some(rest) => (true, rest),
                None => (false, utility),
            },
        };

        let target = if let Some(property) = arbitrary_property(utility) {
            Target::Property(property.to_string())
        } else {
            let positive = utility.strip_prefix('-').unwrap_or(utility);
            match classify(positive) {
                Some(group) => Target::Group(group),
                None => {
                    return Self {
                        scope: String::new(),
                        target: Target::Literal(token.to_string()),
                    }
                }
            }
        };

        Self {
            scope: scope_of(modifiers, important),
            target,
        }
    }

    /// Keys in the same scope that this key shadows.
    pub(crate) fn shadowed(&self) -> impl Iterator<Item = ConflictKey> + '_ {
        let groups: &'static [ConflictGroup] = match self.target {
            Target::Group(group) => group.shadows(),
            _ => &[],
        };
        groups.iter().map(move |group| ConflictKey {
            scope: self.scope.clone(),
            target: Target::Group(*group),
        })
    }
}

/// Splits `md:hover:bg-fill` into `["md", "hover"]` and `bg-fill`, ignoring colons nested inside
/// arbitrary values.
fn split_modifiers(token: &str) -> (Vec<&str>, &str) {
    let mut modifiers = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (idx, ch) in token.char_indices() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                modifiers.push(&token[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    (modifiers, &token[start..])
}

fn scope_of(mut modifiers: Vec<&str>, important: bool) -> String {
    // Arbitrary variants depend on their position, so only plain modifier lists are reordered.
    if !modifiers.iter().any(|modifier| modifier.starts_with('[')) {
        modifiers.sort_unstable();
    }
    let mut scope = modifiers.join(":");
    if important {
        scope.push('!');
    }
    scope
}

fn arbitrary_property(utility: &str) -> Option<&str> {
    let inner = utility.strip_prefix('[')?.strip_suffix(']')?;
    let (property, value) = inner.split_once(':')?;
    let valid = !property.is_empty()
        && !value.is_empty()
        && property
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch == '-');
    valid.then_some(property)
}

const STANDALONE: &[(&str, ConflictGroup)] = &[
    ("block", ConflictGroup::Display),
    ("inline-block", ConflictGroup::Display),
    ("inline", ConflictGroup::Display),
    ("flex", ConflictGroup::Display),
    ("inline-flex", ConflictGroup::Display),
    ("grid", ConflictGroup::Display),
    ("inline-grid", ConflictGroup::Display),
    ("table", ConflictGroup::Display),
    ("flow-root", ConflictGroup::Display),
    ("contents", ConflictGroup::Display),
    ("list-item", ConflictGroup::Display),
    ("hidden", ConflictGroup::Display),
    ("static", ConflictGroup::Position),
    ("fixed", ConflictGroup::Position),
    ("absolute", ConflictGroup::Position),
    ("relative", ConflictGroup::Position),
    ("sticky", ConflictGroup::Position),
    ("visible", ConflictGroup::Visibility),
    ("invisible", ConflictGroup::Visibility),
    ("collapse", ConflictGroup::Visibility),
    ("sr-only", ConflictGroup::ScreenReader),
    ("space-x-reverse", ConflictGroup::SpaceXReverse),
    ("space-y-reverse", ConflictGroup::SpaceYReverse),
    ("not-sr-only", ConflictGroup::ScreenReader),
    ("grow", ConflictGroup::Grow),
    ("shrink", ConflictGroup::Shrink),
    ("italic", ConflictGroup::FontStyle),
    ("not-italic", ConflictGroup::FontStyle),
    ("antialiased", ConflictGroup::FontSmoothing),
    ("subpixel-antialiased", ConflictGroup::FontSmoothing),
    ("uppercase", ConflictGroup::TextTransform),
    ("lowercase", ConflictGroup::TextTransform),
    ("capitalize", ConflictGroup::TextTransform),
    ("normal-case", ConflictGroup::TextTransform),
    ("truncate", ConflictGroup::TextOverflow),
    ("text-ellipsis", ConflictGroup::TextOverflow),
    ("text-clip", ConflictGroup::TextOverflow),
    ("underline", ConflictGroup::TextDecoration),
    ("overline", ConflictGroup::TextDecoration),
    ("line-through", ConflictGroup::TextDecoration),
    ("no-underline", ConflictGroup::TextDecoration),
    ("border", ConflictGroup::BorderW),
    ("rounded", ConflictGroup::Rounded),
    ("shadow", ConflictGroup::Shadow),
    ("ring", ConflictGroup::RingW),
    ("ring-inset", ConflictGroup::RingInset),
    ("outline", ConflictGroup::OutlineStyle),
    ("transition", ConflictGroup::Transition),
    ("blur", ConflictGroup::Blur),
    ("backdrop-blur", ConflictGroup::BackdropBlur),
    ("resize", ConflictGroup::Resize),
];

#[derive(Debug, Clone, Copy)]
enum Rule {
    Group(ConflictGroup),
    /// Width-like values pick the first group, everything else is a colour.
    WidthOrColor(ConflictGroup, ConflictGroup),
    Text,
    Font,
    Flex,
    Object,
    Decoration,
    Background,
    Border,
    Rounded,
    Shadow,
    Outline,
}

// Longer prefixes precede the shorter prefixes they extend.
const PREFIXES: &[(&str, Rule)] = &[
    ("inset-x-", Rule::Group(ConflictGroup::InsetX)),
    ("inset-y-", Rule::Group(ConflictGroup::InsetY)),
    ("inset-", Rule::Group(ConflictGroup::Inset)),
    ("top-", Rule::Group(ConflictGroup::Top)),
    ("right-", Rule::Group(ConflictGroup::Right)),
    ("bottom-", Rule::Group(ConflictGroup::Bottom)),
    ("left-", Rule::Group(ConflictGroup::Left)),
    ("start-", Rule::Group(ConflictGroup::Start)),
    ("end-", Rule::Group(ConflictGroup::End)),
    ("z-", Rule::Group(ConflictGroup::ZIndex)),
    ("overflow-x-", Rule::Group(ConflictGroup::OverflowX)),
    ("overflow-y-", Rule::Group(ConflictGroup::OverflowY)),
    ("overflow-", Rule::Group(ConflictGroup::Overflow)),
    ("aspect-", Rule::Group(ConflictGroup::Aspect)),
    ("object-", Rule::Object),
    ("basis-", Rule::Group(ConflictGroup::Basis)),
    ("flex-", Rule::Flex),
    ("grow-", Rule::Group(ConflictGroup::Grow)),
    ("shrink-", Rule::Group(ConflictGroup::Shrink)),
    ("order-", Rule::Group(ConflictGroup::Order)),
    ("grid-cols-", Rule::Group(ConflictGroup::GridCols)),
    ("grid-rows-", Rule::Group(ConflictGroup::GridRows)),
    ("col-span-", Rule::Group(ConflictGroup::ColSpan)),
    ("col-start-", Rule::Group(ConflictGroup::ColStart)),
    ("col-end-", Rule::Group(ConflictGroup::ColEnd)),
    ("col-", Rule::Group(ConflictGroup::Col)),
    ("row-span-", Rule::Group(ConflictGroup::RowSpan)),
    ("row-start-", Rule::Group(ConflictGroup::RowStart)),
    ("row-end-", Rule::Group(ConflictGroup::RowEnd)),
    ("row-", Rule::Group(ConflictGroup::Row)),
    ("items-", Rule::Group(ConflictGroup::AlignItems)),
    ("content-", Rule::Group(ConflictGroup::AlignContent)),
    ("self-", Rule::Group(ConflictGroup::AlignSelf)),
    ("justify-items-", Rule::Group(ConflictGroup::JustifyItems)),
    ("justify-self-", Rule::Group(ConflictGroup::JustifySelf)),
    ("justify-", Rule::Group(ConflictGroup::JustifyContent)),
    ("place-items-", Rule::Group(ConflictGroup::PlaceItems)),
    ("place-content-", Rule::Group(ConflictGroup::PlaceContent)),
    ("place-self-", Rule::Group(ConflictGroup::PlaceSelf)),
    ("gap-x-", Rule::Group(ConflictGroup::GapX)),
    ("gap-y-", Rule::Group(ConflictGroup::GapY)),
    ("gap-", Rule::Group(ConflictGroup::Gap)),
    ("p-", Rule::Group(ConflictGroup::P)),
    ("px-", Rule::Group(ConflictGroup::Px)),
    ("py-", Rule::Group(ConflictGroup::Py)),
    ("pt-", Rule::Group(ConflictGroup::Pt)),
    ("pr-", Rule::Group(ConflictGroup::Pr)),
    ("pb-", Rule::Group(ConflictGroup::Pb)),
    ("pl-", Rule::Group(ConflictGroup::Pl)),
    ("ps-", Rule::Group(ConflictGroup::Ps)),
    ("pe-", Rule::Group(ConflictGroup::Pe)),
    ("m-", Rule::Group(ConflictGroup::M)),
    ("mx-", Rule::Group(ConflictGroup::Mx)),
    ("my-", Rule::Group(ConflictGroup::My)),
    ("mt-", Rule::Group(ConflictGroup::Mt)),
    ("mr-", Rule::Group(ConflictGroup::Mr)),
    ("mb-", Rule::Group(ConflictGroup::Mb)),
    ("ml-", Rule::Group(ConflictGroup::Ml)),
    ("ms-", Rule::Group(ConflictGroup::Ms)),
    ("me-", Rule::Group(ConflictGroup::Me)),
    ("space-x-", Rule::Group(ConflictGroup::SpaceX)),
    ("space-y-", Rule::Group(ConflictGroup::SpaceY)),
    ("size-", Rule::Group(ConflictGroup::Size)),
    ("min-w-", Rule::Group(ConflictGroup::MinW)),
    ("min-h-", Rule::Group(ConflictGroup::MinH)),
    ("max-w-", Rule::Group(ConflictGroup::MaxW)),
    ("max-h-", Rule::Group(ConflictGroup::MaxH)),
    ("w-", Rule::Group(ConflictGroup::W)),
    ("h-", Rule::Group(ConflictGroup::H)),
    ("text-", Rule::Text),
    ("font-", Rule::Font),
    ("decoration-", Rule::Decoration),
    ("underline-offset-", Rule::Group(ConflictGroup::UnderlineOffset)),
    ("leading-", Rule::Group(ConflictGroup::Leading)),
    ("tracking-", Rule::Group(ConflictGroup::Tracking)),
    ("whitespace-", Rule::Group(ConflictGroup::Whitespace)),
    ("break-inside-", Rule::Group(ConflictGroup::BreakInside)),
    ("break-before-", Rule::Group(ConflictGroup::BreakBefore)),
    ("break-after-", Rule::Group(ConflictGroup::BreakAfter)),
    ("break-", Rule::Group(ConflictGroup::WordBreak)),
    ("indent-", Rule::Group(ConflictGroup::Indent)),
    ("align-", Rule::Group(ConflictGroup::VerticalAlign)),
    ("line-clamp-", Rule::Group(ConflictGroup::LineClamp)),
    ("list-", Rule::Group(ConflictGroup::ListStyle)),
    ("bg-", Rule::Background),
    ("from-", Rule::Group(ConflictGroup::GradientFrom)),
    ("via-", Rule::Group(ConflictGroup::GradientVia)),
    ("to-", Rule::Group(ConflictGroup::GradientTo)),
    ("border-", Rule::Border),
    ("rounded-", Rule::Rounded),
    (
        "ring-offset-",
        Rule::WidthOrColor(ConflictGroup::RingOffsetW, ConflictGroup::RingOffsetColor),
    ),
    (
        "ring-",
        Rule::WidthOrColor(ConflictGroup::RingW, ConflictGroup::RingColor),
    ),
    ("outline-offset-", Rule::Group(ConflictGroup::OutlineOffset)),
    ("outline-", Rule::Outline),
    ("shadow-", Rule::Shadow),
    ("opacity-", Rule::Group(ConflictGroup::Opacity)),
    ("backdrop-blur-", Rule::Group(ConflictGroup::BackdropBlur)),
    ("blur-", Rule::Group(ConflictGroup::Blur)),
    ("fill-", Rule::Group(ConflictGroup::Fill)),
    ("stroke-", Rule::Group(ConflictGroup::Stroke)),
    ("transition-", Rule::Group(ConflictGroup::Transition)),
    ("duration-", Rule::Group(ConflictGroup::Duration)),
    ("ease-", Rule::Group(ConflictGroup::Ease)),
    ("delay-", Rule::Group(ConflictGroup::Delay)),
    ("animate-", Rule::Group(ConflictGroup::Animate)),
    ("scale-", Rule::Group(ConflictGroup::Scale)),
    ("rotate-", Rule::Group(ConflictGroup::Rotate)),
    ("translate-x-", Rule::Group(ConflictGroup::TranslateX)),
    ("translate-y-", Rule::Group(ConflictGroup::TranslateY)),
    ("cursor-", Rule::Group(ConflictGroup::Cursor)),
    ("pointer-events-", Rule::Group(ConflictGroup::PointerEvents)),
    ("select-", Rule::Group(ConflictGroup::UserSelect)),
    ("appearance-", Rule::Group(ConflictGroup::Appearance)),
    ("resize-", Rule::Group(ConflictGroup::Resize)),
];

/// Maps a bare utility (no modifiers, importance or negation) onto its conflict group.
pub(crate) fn classify(utility: &str) -> Option<ConflictGroup> {
    if let Some((_, group)) = STANDALONE.iter().find(|(name, _)| *name == utility) {
        return Some(*group);
    }

    PREFIXES.iter().find_map(|(prefix, rule)| {
        let value = utility.strip_prefix(prefix)?;
        if value.is_empty() {
            return None;
        }
        Some(apply_rule(*rule, value))
    })
}

fn apply_rule(rule: Rule, value: &str) -> ConflictGroup {
    match rule {
        Rule::Group(group) => group,
        Rule::WidthOrColor(width, color) => {
            if is_width(value) {
                width
            } else {
                color
            }
        }
        Rule::Text => text_group(value),
        Rule::Font => font_group(value),
        Rule::Flex => match value {
            "row" | "row-reverse" | "col" | "col-reverse" => ConflictGroup::FlexDirection,
            "wrap" | "wrap-reverse" | "nowrap" => ConflictGroup::FlexWrap,
            _ => ConflictGroup::Flex,
        },
        Rule::Object => match value {
            "contain" | "cover" | "fill" | "none" | "scale-down" => ConflictGroup::ObjectFit,
            _ => ConflictGroup::ObjectPosition,
        },
        Rule::Decoration => match value {
            "solid" | "double" | "dotted" | "dashed" | "wavy" => ConflictGroup::DecorationStyle,
            "auto" | "from-font" => ConflictGroup::DecorationThickness,
            _ if is_width(value) => ConflictGroup::DecorationThickness,
            _ => ConflictGroup::DecorationColor,
        },
        Rule::Background => background_group(value),
        Rule::Border => border_group(value),
        Rule::Rounded => rounded_group(value),
        Rule::Shadow => {
            if matches!(value, "sm" | "md" | "lg" | "xl" | "2xl" | "inner" | "none")
                || theme::is_shadow(value)
                || is_arbitrary(value)
            {
                ConflictGroup::Shadow
            } else {
                ConflictGroup::ShadowColor
            }
        }
        Rule::Outline => match value {
            "none" | "solid" | "dashed" | "dotted" | "double" | "hidden" => {
                ConflictGroup::OutlineStyle
            }
            _ if is_width(value) => ConflictGroup::OutlineW,
            _ => ConflictGroup::OutlineColor,
        },
    }
}

fn text_group(value: &str) -> ConflictGroup {
    match value {
        "left" | "center" | "right" | "justify" | "start" | "end" => ConflictGroup::TextAlign,
        "wrap" | "nowrap" | "balance" | "pretty" => ConflictGroup::TextWrap,
        _ => {
            let size = strip_postfix(value);
            if matches!(
                size,
                "xs" | "sm" | "base" | "lg" | "xl" | "2xl" | "3xl" | "4xl" | "5xl" | "6xl" | "7xl"
                    | "8xl" | "9xl"
            ) || theme::is_type_scale(size)
                || is_arbitrary_length(size)
            {
                ConflictGroup::FontSize
            } else {
                ConflictGroup::TextColor
            }
        }
    }
}

fn font_group(value: &str) -> ConflictGroup {
    let weight = matches!(
        value,
        "thin"
            | "extralight"
            | "light"
            | "normal"
            | "medium"
            | "semibold"
            | "bold"
            | "extrabold"
            | "black"
    ) || is_number(value)
        || arbitrary_inner(value).is_some_and(is_number);
    if weight {
        ConflictGroup::FontWeight
    } else {
        ConflictGroup::FontFamily
    }
}

fn background_group(value: &str) -> ConflictGroup {
    match value {
        "auto" | "cover" | "contain" => ConflictGroup::BgSize,
        "bottom" | "center" | "left" | "left-bottom" | "left-top" | "right" | "right-bottom"
        | "right-top" | "top" => ConflictGroup::BgPosition,
        "repeat" | "no-repeat" | "repeat-x" | "repeat-y" | "repeat-round" | "repeat-space" => {
            ConflictGroup::BgRepeat
        }
        "fixed" | "local" | "scroll" => ConflictGroup::BgAttachment,
        "none" => ConflictGroup::BgImage,
        _ if value.starts_with("gradient-") => ConflictGroup::BgImage,
        _ if value.starts_with("opacity-") => ConflictGroup::BgOpacity,
        _ if value.starts_with("clip-") => ConflictGroup::BgClip,
        _ if value.starts_with("origin-") => ConflictGroup::BgOrigin,
        _ if value.starts_with("blend-") => ConflictGroup::BgBlend,
        _ => match arbitrary_inner(value) {
            Some(inner) if is_image(inner) => ConflictGroup::BgImage,
            Some(inner) if inner.starts_with("length:") || inner.starts_with("size:") => {
                ConflictGroup::BgSize
            }
            Some(inner) if inner.starts_with("position:") => ConflictGroup::BgPosition,
            _ => ConflictGroup::BgColor,
        },
    }
}

/// Arbitrary background values that are images rather than colours.
fn is_image(inner: &str) -> bool {
    inner.starts_with("url(") || inner.starts_with("image:") || inner.contains("-gradient(")
}

fn border_group(value: &str) -> ConflictGroup {
    match value {
        "solid" | "dashed" | "dotted" | "double" | "hidden" | "none" => {
            return ConflictGroup::BorderStyle
        }
        "collapse" | "separate" => return ConflictGroup::BorderCollapse,
        _ => {}
    }
    if value.starts_with("spacing-") {
        return ConflictGroup::BorderSpacing;
    }
    if value.starts_with("opacity-") {
        return ConflictGroup::BorderOpacity;
    }

    let (side, rest) = match value.split_once('-') {
        Some((side, rest)) if is_border_side(side) => (Some(side), Some(rest)),
        _ if is_border_side(value) => (Some(value), None),
        _ => (None, Some(value)),
    };
    let width = rest.map_or(true, is_width);

    use ConflictGroup::*;
    match (side, width) {
        (None, true) => BorderW,
        (None, false) => BorderColor,
        (Some("x"), true) => BorderWX,
        (Some("y"), true) => BorderWY,
        (Some("t"), true) => BorderWT,
        (Some("r"), true) => BorderWR,
        (Some("b"), true) => BorderWB,
        (Some("l"), true) => BorderWL,
        (Some("s"), true) => BorderWS,
        (Some(_), true) => BorderWE,
        (Some("x"), false) => BorderColorX,
        (Some("y"), false) => BorderColorY,
        (Some("t"), false) => BorderColorT,
        (Some("r"), false) => BorderColorR,
        (Some("b"), false) => BorderColorB,
        (Some("l"), false) => BorderColorL,
        (Some("s"), false) => BorderColorS,
        (Some(_), false) => BorderColorE,
    }
}

fn is_border_side(segment: &str) -> bool {
    matches!(segment, "x" | "y" | "t" | "r" | "b" | "l" | "s" | "e")
}

fn rounded_group(value: &str) -> ConflictGroup {
    use ConflictGroup::*;
    let corner = value.split_once('-').map_or(value, |(head, _)| head);
    match corner {
        "t" => RoundedT,
        "r" => RoundedR,
        "b" => RoundedB,
        "l" => RoundedL,
        "s" => RoundedS,
        "e" => RoundedE,
        "tl" => RoundedTl,
        "tr" => RoundedTr,
        "br" => RoundedBr,
        "bl" => RoundedBl,
        "ss" => RoundedSs,
        "se" => RoundedSe,
        "es" => RoundedEs,
        "ee" => RoundedEe,
        _ => Rounded,
    }
}

fn strip_postfix(value: &str) -> &str {
    if is_arbitrary(value) {
        return value;
    }
    value.split_once('/').map_or(value, |(head, _)| head)
}

fn is_number(value: &str) -> bool {
    !value.is_empty()
        && value.chars().any(|ch| ch.is_ascii_digit())
        && value.chars().all(|ch| ch.is_ascii_digit() || ch == '.')
}

fn is_arbitrary(value: &str) -> bool {
    value.starts_with('[') && value.ends_with(']')
}

fn arbitrary_inner(value: &str) -> Option<&str> {
    value.strip_prefix('[')?.strip_suffix(']')
}

/// Border, ring and outline widths: bare numbers, `px`, or arbitrary lengths.
fn is_width(value: &str) -> bool {
    value == "px" || is_number(value) || is_arbitrary_length(value)
}

const LENGTH_UNITS: &[&str] = &[
    "px", "rem", "em", "%", "vh", "vw", "vmin", "vmax", "dvh", "dvw", "svh", "svw", "lvh", "lvw",
    "pt", "pc", "in", "cm", "mm", "ch", "ex", "lh", "rlh", "cqw", "cqh",
];

fn is_arbitrary_length(value: &str) -> bool {
    let Some(inner) = arbitrary_inner(value) else {
        return false;
    };
    if let Some(hinted) = inner.strip_prefix("length:") {
        return !hinted.is_empty();
    }
    if inner.starts_with("calc(") || inner.starts_with("min(") || inner.starts_with("max(") {
        return true;
    }
    if inner == "0" {
        return true;
    }
    LENGTH_UNITS.iter().any(|unit| {
        inner
            .strip_suffix(unit)
            .is_some_and(|number| is_number(number))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(utility: &str) -> Option<ConflictGroup> {
        classify(utility)
    }

    #[test]
    fn spacing_prefixes_map_to_their_sides() {
        assert_eq!(group("p-2"), Some(ConflictGroup::P));
        assert_eq!(group("px-ios-md"), Some(ConflictGroup::Px));
        assert_eq!(group("mt-4"), Some(ConflictGroup::Mt));
        assert_eq!(group("gap-x-2"), Some(ConflictGroup::GapX));
        assert_eq!(group("min-h-[44px]"), Some(ConflictGroup::MinH));
        assert_eq!(group("pointer-events-none"), Some(ConflictGroup::PointerEvents));
    }

    #[test]
    fn text_prefix_splits_size_colour_and_alignment() {
        assert_eq!(group("text-body"), Some(ConflictGroup::FontSize));
        assert_eq!(group("text-title-3"), Some(ConflictGroup::FontSize));
        assert_eq!(group("text-lg"), Some(ConflictGroup::FontSize));
        assert_eq!(group("text-[17px]"), Some(ConflictGroup::FontSize));
        assert_eq!(group("text-label"), Some(ConflictGroup::TextColor));
        assert_eq!(group("text-ios-blue"), Some(ConflictGroup::TextColor));
        assert_eq!(group("text-[#333]"), Some(ConflictGroup::TextColor));
        assert_eq!(group("text-center"), Some(ConflictGroup::TextAlign));
    }

    #[test]
    fn border_ring_and_outline_values_pick_width_or_colour() {
        assert_eq!(group("border"), Some(ConflictGroup::BorderW));
        assert_eq!(group("border-2"), Some(ConflictGroup::BorderW));
        assert_eq!(group("border-t"), Some(ConflictGroup::BorderWT));
        assert_eq!(group("border-x-[3px]"), Some(ConflictGroup::BorderWX));
        assert_eq!(group("border-separator"), Some(ConflictGroup::BorderColor));
        assert_eq!(group("border-t-ios-red"), Some(ConflictGroup::BorderColorT));
        assert_eq!(group("border-dashed"), Some(ConflictGroup::BorderStyle));
        assert_eq!(group("ring-2"), Some(ConflictGroup::RingW));
        assert_eq!(group("ring-ios-blue"), Some(ConflictGroup::RingColor));
        assert_eq!(group("ring-offset-2"), Some(ConflictGroup::RingOffsetW));
        assert_eq!(group("ring-offset-background"), Some(ConflictGroup::RingOffsetColor));
        assert_eq!(group("outline-none"), Some(ConflictGroup::OutlineStyle));
        assert_eq!(group("outline-2"), Some(ConflictGroup::OutlineW));
    }

    #[test]
    fn font_rounded_and_flex_families() {
        assert_eq!(group("font-semibold"), Some(ConflictGroup::FontWeight));
        assert_eq!(group("font-sans"), Some(ConflictGroup::FontFamily));
        assert_eq!(group("rounded-ios-md"), Some(ConflictGroup::Rounded));
        assert_eq!(group("rounded-t-lg"), Some(ConflictGroup::RoundedT));
        assert_eq!(group("rounded-tl"), Some(ConflictGroup::RoundedTl));
        assert_eq!(group("flex-1"), Some(ConflictGroup::Flex));
        assert_eq!(group("flex-col"), Some(ConflictGroup::FlexDirection));
        assert_eq!(group("flex"), Some(ConflictGroup::Display));
        assert_eq!(group("shadow-ios-lg"), Some(ConflictGroup::Shadow));
    }

    #[test]
    fn grid_placement_groups_stay_apart() {
        assert_eq!(group("col-span-2"), Some(ConflictGroup::ColSpan));
        assert_eq!(group("col-start-2"), Some(ConflictGroup::ColStart));
        assert_eq!(group("col-end-4"), Some(ConflictGroup::ColEnd));
        assert_eq!(group("col-auto"), Some(ConflictGroup::Col));
        assert_eq!(group("row-span-2"), Some(ConflictGroup::RowSpan));
        assert_eq!(group("row-start-1"), Some(ConflictGroup::RowStart));
        assert_eq!(group("row-end-3"), Some(ConflictGroup::RowEnd));
        assert_eq!(group("space-x-4"), Some(ConflictGroup::SpaceX));
        assert_eq!(group("space-x-reverse"), Some(ConflictGroup::SpaceXReverse));
        assert_eq!(group("space-y-reverse"), Some(ConflictGroup::SpaceYReverse));
    }

    #[test]
    fn decoration_object_and_break_values() {
        assert_eq!(group("decoration-wavy"), Some(ConflictGroup::DecorationStyle));
        assert_eq!(group("decoration-dashed"), Some(ConflictGroup::DecorationStyle));
        assert_eq!(group("decoration-2"), Some(ConflictGroup::DecorationThickness));
        assert_eq!(group("decoration-from-font"), Some(ConflictGroup::DecorationThickness));
        assert_eq!(group("decoration-ios-red"), Some(ConflictGroup::DecorationColor));
        assert_eq!(group("object-cover"), Some(ConflictGroup::ObjectFit));
        assert_eq!(group("object-scale-down"), Some(ConflictGroup::ObjectFit));
        assert_eq!(group("object-center"), Some(ConflictGroup::ObjectPosition));
        assert_eq!(group("object-left-top"), Some(ConflictGroup::ObjectPosition));
        assert_eq!(group("break-words"), Some(ConflictGroup::WordBreak));
        assert_eq!(group("break-inside-avoid"), Some(ConflictGroup::BreakInside));
        assert_eq!(group("break-before-page"), Some(ConflictGroup::BreakBefore));
        assert_eq!(group("break-after-column"), Some(ConflictGroup::BreakAfter));
    }

    #[test]
    fn background_values_pick_their_property() {
        assert_eq!(group("bg-ios-blue"), Some(ConflictGroup::BgColor));
        assert_eq!(group("bg-[#f2f2f7]"), Some(ConflictGroup::BgColor));
        assert_eq!(group("bg-clip-text"), Some(ConflictGroup::BgClip));
        assert_eq!(group("bg-origin-border"), Some(ConflictGroup::BgOrigin));
        assert_eq!(group("bg-blend-multiply"), Some(ConflictGroup::BgBlend));
        assert_eq!(group("bg-[url(/hero.png)]"), Some(ConflictGroup::BgImage));
        assert_eq!(
            group("bg-[linear-gradient(to_right,#fff,#000)]"),
            Some(ConflictGroup::BgImage)
        );
        assert_eq!(group("bg-gradient-to-r"), Some(ConflictGroup::BgImage));
        assert_eq!(group("bg-[length:200px_100px]"), Some(ConflictGroup::BgSize));
        assert_eq!(group("bg-cover"), Some(ConflictGroup::BgSize));
    }

    #[test]
    fn shadow_sizes_come_from_the_theme() {
        assert_eq!(group("shadow-ios-sm"), Some(ConflictGroup::Shadow));
        assert_eq!(group("shadow-ios-xl"), Some(ConflictGroup::Shadow));
        assert_eq!(group("shadow-ios-blue"), Some(ConflictGroup::ShadowColor));
        assert_eq!(group("shadow-lg"), Some(ConflictGroup::Shadow));
    }

    #[test]
    fn unknown_utilities_are_unclassified() {
        assert_eq!(group("btn-primary"), None);
        assert_eq!(group("card"), None);
        assert_eq!(group("text-"), None);
    }

    #[test]
    fn keys_respect_modifiers_and_importance() {
        assert_eq!(ConflictKey::of("hover:bg-a"), ConflictKey::of("hover:bg-b"));
        assert_ne!(ConflictKey::of("bg-a"), ConflictKey::of("hover:bg-a"));
        assert_eq!(
            ConflictKey::of("dark:hover:bg-a"),
            ConflictKey::of("hover:dark:bg-b")
        );
        assert_ne!(ConflictKey::of("!p-2"), ConflictKey::of("p-2"));
        assert_eq!(ConflictKey::of("-mt-2"), ConflictKey::of("mt-4"));
        assert_eq!(
            ConflictKey::of("[mask-type:alpha]"),
            ConflictKey::of("[mask-type:luminance]")
        );
        assert_eq!(ConflictKey::of("h-[44px]"), ConflictKey::of("h-[52px]"));
    }

    #[test]
    fn arbitrary_values_keep_their_colons() {
        let (modifiers, utility) = split_modifiers("md:bg-[url(a:b)]");
        assert_eq!(modifiers, vec!["md"]);
        assert_eq!(utility, "bg-[url(a:b)]");
    }
}
