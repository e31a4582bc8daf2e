//! Prediction Form Component
//!
//! Four-step heart-health questionnaire. Each field is rendered from its
//! descriptor: numeric fields get an input with quick picks, choice fields
//! get a row of option cards.

use leptos::*;

use cardio_guard::assessment::{format_number, AssessmentForm, Direction, FieldId, FieldKind};
use cardio_guard::risk::Prediction;

use crate::api;
use crate::components::toast::FormError;
use crate::state::global::GlobalState;

const STEP_TITLES: [&str; 4] = [
    "About you",
    "Blood pressure & cholesterol",
    "Heart activity",
    "Exercise test results",
];

#[component]
pub fn PredictionForm(#[prop(into)] on_result: Callback<Prediction>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let form = create_rw_signal(AssessmentForm::new());
    let (submitting, set_submitting) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);
    let (show_help, set_show_help) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // Enter in a single-input step submits the form; ignore it there
        let Some(submitted) = form.with_untracked(|f| f.submit_if_ready()) else {
            return;
        };
        set_error.set(None);

        let input = match submitted {
            Ok(input) => input,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        let Some(token) = state.bearer() else {
            set_error.set(Some("Authentication required".to_string()));
            return;
        };

        for warning in input.range_warnings() {
            web_sys::console::info_1(&warning.to_string().into());
        }

        set_submitting.set(true);
        spawn_local(async move {
            match api::predict(&token, &input).await {
                Ok(prediction) => on_result.call(prediction),
                Err(e) => set_error.set(Some(e)),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="relative bg-white rounded-xl shadow-md p-6">
            {move || submitting.get().then(|| view! {
                <div class="absolute inset-0 bg-white/70 flex items-center justify-center rounded-xl z-10">
                    <div class="loading-spinner w-8 h-8" />
                </div>
            })}

            <div class="flex items-center gap-3 mb-6">
                <span class="text-2xl">"💓"</span>
                <h2 class="text-2xl font-bold text-slate-800">"Heart Health Assessment"</h2>
                <button
                    type="button"
                    on:click=move |_| set_show_help.update(|v| *v = !*v)
                    class="ml-auto text-rose-600 hover:text-rose-700"
                >
                    "ⓘ"
                </button>
            </div>

            {move || show_help.get().then(|| view! {
                <div class="bg-rose-50 p-4 rounded-lg mb-6 border border-rose-100 text-sm text-slate-700">
                    "Please provide accurate medical information for the best prediction results. \
                     Fields left blank are sent as zero."
                </div>
            })}

            <StepIndicator form=form />

            <form on:submit=on_submit class="space-y-6">
                <div class=move || match form.with(|f| f.direction()) {
                    Direction::Forward => "space-y-6 animate-slide-from-right",
                    Direction::Backward => "space-y-6 animate-slide-from-left",
                }>
                    {move || {
                        form.with(|f| f.current_fields())
                            .iter()
                            .map(|field| view! { <FieldInput field=*field form=form /> })
                            .collect_view()
                    }}
                </div>

                <FormError message=error />

                <div class="flex justify-between pt-4">
                    <button
                        type="button"
                        on:click=move |_| form.update(|f| f.previous())
                        disabled=move || form.with(|f| f.is_first_step())
                        class="px-4 py-2 border border-slate-300 text-slate-700 rounded-lg hover:bg-slate-50 disabled:opacity-50"
                    >
                        "‹ Previous"
                    </button>

                    {move || if form.with(|f| f.is_last_step()) {
                        view! {
                            <button
                                type="submit"
                                disabled=move || submitting.get()
                                class="px-6 py-2 bg-rose-600 text-white rounded-lg shadow hover:bg-rose-700"
                            >
                                "Get Prediction"
                            </button>
                        }.into_view()
                    } else {
                        view! {
                            <button
                                type="button"
                                on:click=move |_| form.update(|f| f.next())
                                class="px-6 py-2 bg-rose-600 text-white rounded-lg shadow hover:bg-rose-700"
                            >
                                "Next ›"
                            </button>
                        }.into_view()
                    }}
                </div>
            </form>
        </div>
    }
}

#[component]
fn StepIndicator(form: RwSignal<AssessmentForm>) -> impl IntoView {
    view! {
        <div class="mb-6">
            <div class="flex justify-between text-sm text-slate-500 mb-2">
                <span>{move || {
                    let step = form.with(|f| f.current_step());
                    format!("Step {} of {}", step + 1, STEP_TITLES.len())
                }}</span>
                <span>{move || STEP_TITLES[form.with(|f| f.current_step())]}</span>
            </div>
            <div class="flex gap-2">
                {(0..STEP_TITLES.len()).map(|step| view! {
                    <button
                        type="button"
                        on:click=move |_| form.update(|f| f.advance(step))
                        class=move || {
                            if form.with(|f| f.current_step()) >= step {
                                "h-2 flex-1 rounded-full bg-rose-500"
                            } else {
                                "h-2 flex-1 rounded-full bg-rose-100"
                            }
                        }
                    />
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn FieldInput(field: FieldId, form: RwSignal<AssessmentForm>) -> impl IntoView {
    let descriptor = field.descriptor();

    let control = match descriptor.kind {
        FieldKind::Numeric {
            unit,
            hint,
            suggestions,
            ..
        } => view! {
            <div class="space-y-2">
                <div class="flex items-center gap-2">
                    <input
                        type="number"
                        step="any"
                        name=field.as_str()
                        placeholder="0"
                        prop:value=move || form.with(|f| f.value(field).to_string())
                        on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
                        class="flex-1 border border-slate-300 rounded-lg px-4 py-2 focus:border-rose-500 focus:outline-none"
                    />
                    {unit.map(|u| view! { <span class="text-sm text-slate-500">{u}</span> })}
                </div>
                {hint.map(|h| view! { <p class="text-xs text-slate-500">{h}</p> })}
                <div class="flex flex-wrap gap-2">
                    {suggestions.iter().map(|value| {
                        let value = *value;
                        view! {
                            <button
                                type="button"
                                on:click=move |_| form.update(|f| f.select(field, value))
                                class=move || chip_class(form.with(|f| f.is_selected(field, value)))
                            >
                                {format_number(value)}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
        }
        .into_view(),
        FieldKind::Choice { options } => view! {
            <div class="grid grid-cols-2 md:grid-cols-4 gap-3">
                {options.iter().map(|option| {
                    let value = f64::from(option.value);
                    view! {
                        <button
                            type="button"
                            on:click=move |_| form.update(|f| f.select(field, value))
                            class=move || card_class(form.with(|f| f.is_selected(field, value)))
                        >
                            <span class="block font-medium">{option.label}</span>
                            {option.description.map(|d| view! {
                                <span class="block text-xs text-slate-500 mt-1">{d}</span>
                            })}
                        </button>
                    }
                }).collect_view()}
            </div>
        }
        .into_view(),
    };

    view! {
        <div class="space-y-2">
            <label class="block font-medium text-slate-700">{descriptor.label}</label>
            {control}
        </div>
    }
}

fn chip_class(selected: bool) -> &'static str {
    if selected {
        "px-3 py-1 rounded-full text-sm bg-rose-600 text-white"
    } else {
        "px-3 py-1 rounded-full text-sm bg-rose-50 text-rose-700 hover:bg-rose-100"
    }
}

fn card_class(selected: bool) -> &'static str {
    if selected {
        "p-3 rounded-lg border-2 border-rose-500 bg-rose-50 text-left"
    } else {
        "p-3 rounded-lg border border-slate-200 hover:border-rose-300 text-left"
    }
}
