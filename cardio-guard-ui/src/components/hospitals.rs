//! Hospital Recommendations Component
//!
//! Locates the user with the browser's geolocation and lists nearby
//! hospitals, with copy that depends on the predicted risk.

use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use cardio_guard::links;
use cardio_guard::model::{Coordinates, Hospital};
use cardio_guard::risk::RiskLevel;

use crate::api;
use crate::components::loading::Loading;
use crate::state::global::GlobalState;

/// Ask the browser for the current position
fn locate(on_found: impl FnOnce(Coordinates) + 'static, on_error: impl FnOnce(String) + 'static) {
    let Some(geolocation) = web_sys::window().and_then(|w| w.navigator().geolocation().ok()) else {
        on_error("Geolocation is not supported by your browser".to_string());
        return;
    };

    let success = Closure::once(move |position: web_sys::GeolocationPosition| {
        let coords = position.coords();
        on_found(Coordinates {
            latitude: coords.latitude(),
            longitude: coords.longitude(),
        });
    });
    let failure = Closure::once(move |_: web_sys::GeolocationPositionError| {
        on_error("Unable to retrieve your location".to_string());
    });

    if let Err(e) = geolocation.get_current_position_with_error_callback(
        success.as_ref().unchecked_ref(),
        Some(failure.as_ref().unchecked_ref()),
    ) {
        web_sys::console::error_2(&"Geolocation request failed".into(), &e);
    }

    success.forget();
    failure.forget();
}

#[component]
pub fn HospitalRecommendations(level: RiskLevel) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let hospitals = create_rw_signal(None::<Vec<Hospital>>);
    let error = create_rw_signal(None::<String>);

    locate(
        move |at| {
            let Some(token) = state.bearer() else {
                error.set(Some("Authentication required".to_string()));
                return;
            };
            spawn_local(async move {
                match api::find_nearby_hospitals(&token, at).await {
                    Ok(found) => hospitals.set(Some(found)),
                    Err(e) => error.set(Some(e)),
                }
            });
        },
        move |message| error.set(Some(message)),
    );

    let accent = if level.is_elevated() {
        "border-rose-200 bg-rose-50"
    } else {
        "border-emerald-200 bg-emerald-50"
    };

    view! {
        <section class=format!("mt-8 rounded-xl border p-6 {}", accent)>
            <h3 class="text-xl font-semibold text-slate-800">{level.hospitals_heading()}</h3>
            <p class="text-slate-600 mt-1 mb-4">{level.hospitals_intro()}</p>

            {move || match (error.get(), hospitals.get()) {
                (Some(message), _) => view! {
                    <p class="text-sm text-rose-600">{message}</p>
                }.into_view(),
                (None, None) => view! { <Loading /> }.into_view(),
                (None, Some(found)) if found.is_empty() => view! {
                    <p class="text-sm text-slate-500">"No hospitals found nearby."</p>
                }.into_view(),
                (None, Some(found)) => found
                    .into_iter()
                    .map(|hospital| view! { <HospitalCard hospital=hospital /> })
                    .collect_view(),
            }}

            <p class="mt-4 text-sm font-medium text-slate-700">{level.advice()}</p>
        </section>
    }
}

#[component]
fn HospitalCard(hospital: Hospital) -> impl IntoView {
    let directions = links::directions_url(hospital.location());
    let open = hospital.is_open_now();
    let reviews = hospital.user_ratings_total.unwrap_or(0);
    let Hospital {
        name,
        vicinity,
        rating,
        ..
    } = hospital;

    view! {
        <div class="bg-white rounded-lg shadow-sm p-4 mb-3 flex items-start justify-between">
            <div>
                <h4 class="font-semibold text-slate-800">{name}</h4>
                <p class="text-sm text-slate-500">{vicinity}</p>
                <div class="flex items-center gap-3 mt-2 text-sm">
                    {rating.map(|r| view! {
                        <span class="text-amber-500">{format!("★ {:.1}", r)}</span>
                        <span class="text-slate-400">
                            {format!("({} reviews)", reviews)}
                        </span>
                    })}
                    <span class=if open { "text-emerald-600" } else { "text-slate-400" }>
                        {if open { "Open now" } else { "Closed" }}
                    </span>
                </div>
            </div>
            <a
                href=directions
                target="_blank"
                rel="noopener noreferrer"
                class="px-3 py-2 rounded-lg bg-rose-600 text-white text-sm hover:bg-rose-700"
            >
                "Directions"
            </a>
        </div>
    }
}
