/// The state of one fetch attempt.
///
/// A fresh outcome is created for every mount and starts as [`FetchOutcome::Pending`]. It
/// leaves `Pending` at most once, to either [`FetchOutcome::Succeeded`] or
/// [`FetchOutcome::Failed`], and never leaves a terminal state afterwards.
///
/// # Examples
///
/// ```rust
/// use loaded_view::prelude::*;
///
/// let mut outcome = FetchOutcome::Pending;
/// assert!(outcome.settle(FetchOutcome::Succeeded(3)));
/// assert!(!outcome.settle(FetchOutcome::Failed));
/// assert_eq!(outcome, FetchOutcome::Succeeded(3));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchOutcome<T> {
    /// The fetch has been started, or is about to be, and has not settled yet
    #[default]
    Pending,
    /// The fetch produced its data
    Succeeded(T),
    /// The fetch failed; why is deliberately not kept
    Failed,
}

impl<T> FetchOutcome<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchOutcome::Pending)
    }

    /// `true` once the outcome reached `Succeeded` or `Failed`.
    pub fn is_settled(&self) -> bool {
        !self.is_pending()
    }

    /// Moves a `Pending` outcome to `next`.
    ///
    /// Returns whether a transition happened. A terminal outcome is left untouched, and so is
    /// a `Pending` one when `next` is `Pending` too.
    pub fn settle(&mut self, next: FetchOutcome<T>) -> bool {
        if self.is_settled() || next.is_pending() {
            return false;
        }
        *self = next;
        true
    }

    pub fn as_ref(&self) -> FetchOutcome<&T> {
        match self {
            FetchOutcome::Pending => FetchOutcome::Pending,
            FetchOutcome::Succeeded(data) => FetchOutcome::Succeeded(data),
            FetchOutcome::Failed => FetchOutcome::Failed,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> FetchOutcome<U> {
        match self {
            FetchOutcome::Pending => FetchOutcome::Pending,
            FetchOutcome::Succeeded(data) => FetchOutcome::Succeeded(f(data)),
            FetchOutcome::Failed => FetchOutcome::Failed,
        }
    }
}

impl<T, E> From<Result<T, E>> for FetchOutcome<T> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(data) => FetchOutcome::Succeeded(data),
            Err(_) => FetchOutcome::Failed,
        }
    }
}
