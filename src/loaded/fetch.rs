use std::future::Future;

use futures_util::future::{FutureExt, LocalBoxFuture};

use crate::{
    error::FetchFailed,
    utils::{CheapClone, EqCheapClone},
};

pub type FetchFuture<T> = LocalBoxFuture<'static, Result<T, FetchFailed>>;

type FetchCall<T> = dyn Fn() -> FetchFuture<T>;
type BoundFetchCall<P, T> = dyn Fn(&P) -> FetchFuture<T>;

/// A caller-supplied zero-argument asynchronous producer of `T`.
///
/// The core never looks inside: it calls the function once per mount and only observes
/// how the returned future settles. The caller's error type is erased into
/// [`FetchFailed`] as soon as the future completes.
///
/// Handles compare by identity, so a `FetchFn` can be passed as a Dioxus prop.
///
/// # Examples
///
/// ```rust
/// use loaded_view::prelude::*;
///
/// let fetch = FetchFn::new(|| async { Ok::<_, std::io::Error>(42) });
/// assert_eq!(fetch, fetch.clone());
/// ```
pub struct FetchFn<T: 'static>(EqCheapClone<FetchCall<T>>);

impl<T: 'static> FetchFn<T> {
    pub fn new<F, Fut, E>(f: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<T, E>> + 'static,
    {
        Self::from_call(move || f().map(|r| r.map_err(|_| FetchFailed)).boxed_local())
    }

    fn from_call(call: impl Fn() -> FetchFuture<T> + 'static) -> Self {
        let call: CheapClone<FetchCall<T>> = CheapClone::new(call);
        Self(call.into())
    }

    /// Starts one fetch attempt.
    pub fn call(&self) -> FetchFuture<T> {
        (*self.0)()
    }
}

impl<T: 'static> Clone for FetchFn<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
impl<T: 'static> PartialEq for FetchFn<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl<T: 'static> core::fmt::Debug for FetchFn<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("FetchFn")
    }
}

/// A fetch function that needs the props of the view it feeds.
///
/// The future it returns must own whatever it takes from the props, they are only
/// borrowed for the duration of the call.
pub struct BoundFetchFn<P: 'static, T: 'static>(EqCheapClone<BoundFetchCall<P, T>>);

impl<P: 'static, T: 'static> BoundFetchFn<P, T> {
    pub fn new<F, Fut, E>(f: F) -> Self
    where
        F: Fn(&P) -> Fut + 'static,
        Fut: Future<Output = Result<T, E>> + 'static,
    {
        let call: CheapClone<BoundFetchCall<P, T>> = CheapClone::new(move |props: &P| {
            f(props).map(|r| r.map_err(|_| FetchFailed)).boxed_local()
        });
        Self(call.into())
    }

    pub fn call(&self, props: &P) -> FetchFuture<T> {
        (*self.0)(props)
    }

    /// Curries `props` in, giving the zero-argument form an [`AsyncView`] consumes.
    ///
    /// [`AsyncView`]: super::async_view::AsyncView
    pub fn bind(&self, props: CheapClone<P>) -> FetchFn<T> {
        let bound = self.clone();
        FetchFn::from_call(move || bound.call(&props))
    }
}

impl<P: 'static, T: 'static> Clone for BoundFetchFn<P, T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
impl<P: 'static, T: 'static> PartialEq for BoundFetchFn<P, T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl<P: 'static, T: 'static> core::fmt::Debug for BoundFetchFn<P, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("BoundFetchFn")
    }
}
