//! Dioxus binding of the [`loaded`](crate::loaded) core.
//!
//! - [`AsyncLoader`](async_loader::AsyncLoader): the direct form, one fetch function and
//!   its views as props
//! - [`PropsBoundLoader`](props_bound_loader::PropsBoundLoader): the props-bound form, usually
//!   rendered through [`PropsBoundAsyncView::view`](crate::loaded::props_bound::PropsBoundAsyncView::view)

pub mod async_loader;
pub mod props_bound_loader;

pub mod prelude {
    pub use super::async_loader::{AsyncLoader, FrameSink};
    pub use super::props_bound_loader::PropsBoundLoader;
}
