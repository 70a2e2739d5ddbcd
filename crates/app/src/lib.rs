//! # faqhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PreferenceStore` — key-value persistence for user preferences
//!   - `DocumentTheme` — applies the theme to the rendered document
//!   - `Navigator` — moves the user to another route
//!   - `Scheduler` — runs a one-shot callback after a delay, cancellably
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ThemeService` — load, toggle and persist the theme preference
//!   - `LoginService` — validate the login form and navigate on success
//!   - `LogoutRedirect` — delayed, cancellable return to the login page
//! - Orchestrate domain objects without knowing *how* storage, rendering or
//!   timers work
//!
//! ## Dependency rule
//! Depends on `faqhub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
