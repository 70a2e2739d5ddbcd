//! # faqhub-domain
//!
//! Pure domain model for the FAQ Hub front end.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, routes
//! - Define the **theme preference** (light/dark) and its persisted form
//! - Define the **login form** and its validation rules
//! - Define the **dashboard menu** and the state it drives
//! - Define the static **cards** shown on the dashboard
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser APIs.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod route;

pub mod card;
pub mod login;
pub mod menu;
pub mod theme;
