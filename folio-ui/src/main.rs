//! Folio Dashboard
//!
//! Portfolio dashboard page built with Leptos (WASM).
//!
//! # Features
//!
//! - Portfolio composition, allocation and growth charts on canvas
//! - Animated total-value counter
//! - Goal progress bars and scroll-triggered section reveal
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Page behavior lives in the `folio` crate; this crate supplies
//! the DOM surface, the `requestAnimationFrame` scheduler and the markup.

use leptos::*;

mod app;
mod components;
mod web;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
