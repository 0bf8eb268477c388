//! # Loaded Module
//!
//! The framework-agnostic core: a three-state machine (loading, error, success) driving the
//! view of a single asynchronous fetch.
//!
//! ## Core Concepts
//!
//! - [`FetchOutcome`](outcome::FetchOutcome): `Pending`, `Succeeded(data)` or `Failed`,
//!   leaving `Pending` at most once
//! - [`Renderer`](renderer::Renderer): the loading/error/success capability set, with
//!   [`ViewSet`](renderer::ViewSet) as the callback-based implementation
//! - [`RenderSink`](sink::RenderSink): where a view goes once the fetch settles
//! - [`AsyncView`](async_view::AsyncView): one mount, one fetch attempt
//! - [`PropsBoundAsyncView`](props_bound::PropsBoundAsyncView): a factory currying props into
//!   both the fetch and the success view
//! - [`MountScope`](mount::MountScope): guards against settling a view that is already gone
//!
//! ## Example Usage
//!
//! ```rust
//! use loaded_view::prelude::*;
//!
//! let fetch = FetchFn::new(|| async { Err::<u32, _>("no network") });
//! let views = ViewSet::new(|n: &u32| format!("<p>{n}</p>")).with_error(|| "offline".to_owned());
//! let view = AsyncView::mount(fetch, views, |_: String| {});
//!
//! assert_eq!(view.render(), "<h1>loading...</h1>");
//! ```

pub mod async_view;
pub mod fetch;
pub mod loaders;
pub mod mount;
pub mod outcome;
pub mod props_bound;
pub mod renderer;
pub mod sink;

/// Prelude module that re-exports commonly used types and traits.
pub mod prelude {
    pub use super::async_view::AsyncView;
    pub use super::fetch::{BoundFetchFn, FetchFn};
    pub use super::loaders::{FallbackView, Fallbacks};
    pub use super::mount::{MountScope, MountToken};
    pub use super::outcome::FetchOutcome;
    pub use super::props_bound::{PropsBoundAsyncView, WithData};
    pub use super::renderer::{Renderer, ViewSet};
    pub use super::sink::RenderSink;
}
