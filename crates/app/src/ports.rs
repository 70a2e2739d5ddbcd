//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! Every port is synchronous: the browser executes all of them on a single
//! thread, in response to user events or a timer callback.

pub mod document;
pub mod navigator;
pub mod preference_store;
pub mod scheduler;

pub use document::DocumentTheme;
pub use navigator::Navigator;
pub use preference_store::PreferenceStore;
pub use scheduler::{ScheduledTask, Scheduler};
