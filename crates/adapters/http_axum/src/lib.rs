//! # faqhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the compiled front-end bundle (`index.html`, wasm, JS, CSS) from a
//!   directory on disk
//! - Answer every client-side route (`/dashboard`, `/sair`) with `index.html`
//!   so deep links and reloads boot the single-page app
//! - Answer unknown paths with `index.html` and a `404` status; the app
//!   renders its own not-found view
//! - Expose `/health` for liveness probes
//!
//! ## Dependency rule
//! Depends on `faqhub-domain` for the route table only. There is no server-side
//! application logic: login, theme and navigation all run in the browser.

pub mod router;
