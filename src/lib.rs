//! Loader views for asynchronous data.
//!
//! Given a fetch function, a loader shows a loading view, then either the success view with
//! the fetched data or an error view, re-rendering once as the fetch settles. The
//! [`loaded`] module holds the UI-agnostic state machine, [`components`] binds it to
//! Dioxus.

pub mod components;
pub mod error;
pub mod loaded;
pub mod utils;

pub mod prelude {
    pub use super::components::prelude::*;
    pub use super::error::{FetchFailed, LifecycleError};
    pub use super::loaded::prelude::*;
}
