//! Cardio Guard Web Client
//!
//! Heart-health risk assessment and community, built with Leptos (WASM).
//!
//! # Features
//!
//! - Four-step risk questionnaire with hospital recommendations
//! - Community posts, comments and replies
//! - Profile dashboard with post management
//! - Feedback and contact forms
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the Cardio Guard API over HTTP and reuses the
//! questionnaire, board, route and session logic of the `cardio-guard` core.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
