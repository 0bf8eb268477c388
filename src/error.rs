use thiserror::Error;

/// The single failure kind of a fetch attempt.
///
/// Whatever the fetch function rejected with is dropped at the boundary: the view only
/// ever learns that the attempt failed, never why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("fetch failed")]
pub struct FetchFailed;

/// Misuse of the mount lifecycle of an [`AsyncView`](crate::loaded::async_view::AsyncView).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    /// `on_attach` was already called for this mount; the fetch is never started twice.
    #[error("view {0} is already attached")]
    AlreadyAttached(uuid::Uuid),
}
