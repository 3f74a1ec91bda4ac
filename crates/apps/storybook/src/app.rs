use ios_ui::prelude::*;
use ios_ui::{
    VariantSchema, BUTTON_VARIANTS, CARD_CONTENT_STYLE, CARD_DESCRIPTION_STYLE, CARD_FOOTER_STYLE,
    CARD_HEADER_STYLE, CARD_TITLE_STYLE, CARD_VARIANTS, INPUT_STYLE,
};
use leptos::*;
use serde_json::Value;

use crate::catalog::{find_story, story_catalog, ArgControl, ArgSpec, CatalogState, StoryMeta};
use crate::config::{CatalogTheme, StorybookConfig};
use crate::stories::{render_story, StoryKind};

#[component]
/// Story catalog: story list, canvas and args panel.
pub fn StorybookApp(
    /// Branding and default layout.
    #[prop(optional)]
    config: StorybookConfig,
    /// Previously persisted [`CatalogState`] payload.
    #[prop(optional)]
    restored_state: Option<Value>,
    /// Receives the catalog state whenever it changes.
    #[prop(optional)]
    on_state_change: Option<Callback<Value>>,
) -> impl IntoView {
    warn_on_invalid_schemas();

    let catalog = store_value(story_catalog());
    let state = create_rw_signal(catalog.with_value(|catalog| CatalogState::initial(catalog)));
    let last_saved = create_rw_signal::<Option<String>>(None);

    if restored_state.is_some() {
        let restored = catalog.with_value(|catalog| CatalogState::restore(catalog, restored_state));
        for warning in &restored.warnings {
            logging::warn!("storybook restore: {warning}");
        }
        last_saved.set(serde_json::to_string(&restored.value).ok());
        state.set(restored.value);
    }

    create_effect(move |_| {
        let snapshot = state.get();
        let serialized = match serde_json::to_string(&snapshot) {
            Ok(serialized) => serialized,
            Err(err) => {
                logging::warn!("storybook serialize failed: {err}");
                return;
            }
        };

        if last_saved.get().as_deref() == Some(serialized.as_str()) {
            return;
        }
        last_saved.set(Some(serialized));

        if let Some(on_state_change) = on_state_change.as_ref() {
            if let Ok(value) = serde_json::to_value(&snapshot) {
                on_state_change.call(value);
            }
        }
    });

    // Re-renders only when a different story is opened, not on every arg edit.
    let selected = create_memo(move |_| {
        let id = state.with(|state| state.selected.clone());
        catalog.with_value(|catalog| find_story(catalog, &id))
    });

    let root_class = cn!(
        "flex min-h-screen bg-background text-label",
        (config.theme == CatalogTheme::Dark).then_some("dark"),
    );
    let default_layout = config.layout;

    view! {
        <div class=root_class data-ui-kind="storybook">
            <nav class="flex w-[240px] flex-col gap-ios-md border-r border-separator p-ios-md">
                <a class="text-headline text-label" href=config.brand_url.clone()>
                    {config.brand_title.clone()}
                </a>
                {catalog.with_value(|catalog| {
                    catalog
                        .iter()
                        .map(|meta| story_group(meta, state))
                        .collect_view()
                })}
            </nav>
            <main class="flex flex-1 flex-col">
                {move || {
                    let Some((idx, story)) = selected.get() else {
                        return View::default();
                    };
                    catalog.with_value(|catalog| {
                        let meta = &catalog[idx];
                        let title = meta.title;
                        let meta_for_canvas = meta.clone();
                        let canvas_class = meta.layout_or(default_layout).canvas_class();
                        view! {
                            <section class=canvas_class data-story=meta.story_id(story)>
                                {move || {
                                    let args = state.with(|state| state.args_for(title));
                                    render_story(&meta_for_canvas, story, &args)
                                }}
                            </section>
                            {args_panel(meta, story, state)}
                        }
                        .into_view()
                    })
                }}
            </main>
        </div>
    }
}

/// Logs shipped schemas that would resolve with silent fallbacks.
fn warn_on_invalid_schemas() {
    let schemas: [(&str, &VariantSchema); 8] = [
        ("Button", &BUTTON_VARIANTS),
        ("Input", &INPUT_STYLE),
        ("Card", &CARD_VARIANTS),
        ("CardHeader", &CARD_HEADER_STYLE),
        ("CardTitle", &CARD_TITLE_STYLE),
        ("CardDescription", &CARD_DESCRIPTION_STYLE),
        ("CardContent", &CARD_CONTENT_STYLE),
        ("CardFooter", &CARD_FOOTER_STYLE),
    ];
    for (component, schema) in schemas {
        if let Err(err) = schema.validate() {
            logging::warn!("{component} schema is malformed: {err}");
        }
    }
}

fn story_group(meta: &StoryMeta, state: RwSignal<CatalogState>) -> impl IntoView {
    view! {
        <section class="flex flex-col gap-ios-xs">
            <h2 class="text-footnote text-label-secondary">{meta.title}</h2>
            {meta
                .stories
                .iter()
                .map(|story| {
                    let id = meta.story_id(story);
                    let label = *story;
                    move || {
                        let id = id.clone();
                        let active = state.with(|state| state.selected == id);
                        let variant = if active {
                            ButtonVariant::Secondary
                        } else {
                            ButtonVariant::Ghost
                        };
                        view! {
                            <Button
                                variant=variant
                                size=ButtonSize::Sm
                                class="w-full justify-start"
                                on_click=Callback::new(move |_| {
                                    let id = id.clone();
                                    state.update(|state| state.selected = id);
                                })
                            >
                                {label}
                            </Button>
                        }
                    }
                })
                .collect_view()}
        </section>
    }
}

fn args_panel(meta: &StoryMeta, story: &str, state: RwSignal<CatalogState>) -> View {
    let reads_args = StoryKind::lookup(meta.component, story).is_some_and(StoryKind::reads_args);
    if !reads_args || meta.args.is_empty() {
        return View::default();
    }

    let title = meta.title;
    let initial = state.with_untracked(|state| state.args_for(title));
    let controls = meta
        .args
        .iter()
        .map(|spec| {
            let current = initial
                .get(spec.name)
                .cloned()
                .unwrap_or_else(|| spec.default.clone());
            arg_control(title, spec, current, state)
        })
        .collect_view();

    view! {
        <Card variant=CardVariant::Filled class="m-ios-md">
            <CardHeader>
                <CardTitle>"Controls"</CardTitle>
            </CardHeader>
            <CardContent class="flex flex-col gap-ios-sm">{controls}</CardContent>
        </Card>
    }
    .into_view()
}

fn arg_control(
    title: &'static str,
    spec: &ArgSpec,
    current: Value,
    state: RwSignal<CatalogState>,
) -> View {
    let name = spec.name;
    let set = move |value: Value| state.update(|state| state.set_arg(title, name, value));

    let control = match &spec.control {
        ArgControl::Select { options } => {
            let current = current.as_str().unwrap_or_default().to_string();
            view! {
                <select
                    class="h-[36px] rounded-ios-sm border border-separator bg-background px-ios-sm"
                    on:change=move |ev| set(Value::from(event_target_value(&ev)))
                >
                    {options
                        .iter()
                        .map(|option| {
                            view! {
                                <option value=*option selected={*option == current}>
                                    {*option}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            }
            .into_view()
        }
        ArgControl::Boolean => view! {
            <input
                type="checkbox"
                checked=current.as_bool().unwrap_or(false)
                on:change=move |ev| set(Value::Bool(event_target_checked(&ev)))
            />
        }
        .into_view(),
        ArgControl::Text => view! {
            <Input
                extra=ExtraAttributes::new().with("value", current.as_str().unwrap_or_default())
                on_input=Callback::new(move |ev| set(Value::from(event_target_value(&ev))))
            />
        }
        .into_view(),
    };

    view! {
        <label class="flex items-center justify-between gap-ios-sm text-subheadline">
            <span class="text-label-secondary">{name}</span>
            {control}
        </label>
    }
    .into_view()
}
