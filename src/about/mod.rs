//! About panel: branding, version, update checks and feedback links.
//!
//! [`AboutController`] holds everything that does not need a window, so it can
//! be driven from tests with a fake [`Host`](crate::host::Host). The gpui view
//! lives in [`crate::views::about`].

pub mod controller;
pub mod links;
pub mod state;

pub use controller::{AboutController, CHECK_THROTTLE, Notice, subscribe_update_events};
pub use links::AboutLinks;
pub use state::{DisplayState, UpdateOutcome, UpdatePhase};
