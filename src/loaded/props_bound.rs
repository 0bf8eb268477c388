use std::future::Future;

use super::{
    async_view::AsyncView,
    fetch::BoundFetchFn,
    loaders::{FallbackView, Fallbacks},
    renderer::ViewSet,
    sink::RenderSink,
};
use crate::utils::{CheapClone, EqCheapClone};

/// What a props-bound success view receives: the props it was mounted with, plus the data.
///
/// Dereferences to the props so their fields read as if `data` had been merged in.
#[derive(Debug)]
pub struct WithData<'a, P, T> {
    pub props: &'a P,
    pub data: &'a T,
}

impl<P, T> core::ops::Deref for WithData<'_, P, T> {
    type Target = P;

    fn deref(&self) -> &Self::Target {
        self.props
    }
}

type BoundSuccessFn<P, T, V> = dyn Fn(WithData<'_, P, T>) -> V;
type StateFn<V> = dyn Fn() -> V;

/// A reusable loader for views whose fetch needs the same props as their success view.
///
/// Nothing is fetched by the factory itself. Each [`PropsBoundAsyncView::mount`] binds one
/// props snapshot into a fresh [`AsyncView`], which then behaves exactly like a direct one:
/// a single fetch for that mount, whatever happens to the props later.
///
/// # Examples
///
/// ```rust
/// use loaded_view::prelude::*;
///
/// struct Props {
///     id: u32,
/// }
///
/// let doubled = PropsBoundAsyncView::new(
///     |props: &Props| {
///         let id = props.id;
///         async move { Ok::<_, ()>(id * 2) }
///     },
///     |w| format!("{{id: {}, data: {}}}", w.id, w.data),
/// );
///
/// let view = doubled.mount(Props { id: 5 }, |_: String| {});
/// assert_eq!(view.render(), "<h1>loading...</h1>");
/// ```
pub struct PropsBoundAsyncView<P: 'static, T: 'static, V: 'static> {
    fetch: BoundFetchFn<P, T>,
    success: EqCheapClone<BoundSuccessFn<P, T, V>>,
    loading: Option<EqCheapClone<StateFn<V>>>,
    error: Option<EqCheapClone<StateFn<V>>>,
    fallbacks: Fallbacks,
}

impl<P: 'static, T: 'static, V: FallbackView + 'static> PropsBoundAsyncView<P, T, V> {
    pub fn new<F, Fut, E>(fetch: F, success: impl Fn(WithData<'_, P, T>) -> V + 'static) -> Self
    where
        F: Fn(&P) -> Fut + 'static,
        Fut: Future<Output = Result<T, E>> + 'static,
    {
        let success: CheapClone<BoundSuccessFn<P, T, V>> = CheapClone::new(success);
        Self {
            fetch: BoundFetchFn::new(fetch),
            success: success.into(),
            loading: None,
            error: None,
            fallbacks: Fallbacks::default(),
        }
    }

    /// Loading view given to every mount.
    pub fn with_loading(mut self, loading: impl Fn() -> V + 'static) -> Self {
        let loading: CheapClone<StateFn<V>> = CheapClone::new(loading);
        self.loading = Some(loading.into());
        self
    }

    /// Error view given to every mount.
    pub fn with_error(mut self, error: impl Fn() -> V + 'static) -> Self {
        let error: CheapClone<StateFn<V>> = CheapClone::new(error);
        self.error = Some(error.into());
        self
    }

    pub fn with_fallbacks(mut self, fallbacks: Fallbacks) -> Self {
        self.fallbacks = fallbacks;
        self
    }

    /// Mounts a fresh [`AsyncView`] bound to `props`.
    ///
    /// The fetch of the new view is the bound fetch called with these props, and its
    /// success view gets them back alongside the data.
    pub fn mount<S>(&self, props: P, sink: S) -> AsyncView<T, ViewSet<T, V>, S>
    where
        S: RenderSink<V> + 'static,
    {
        let props = CheapClone::new(props);
        let fetch = self.fetch.bind(props.clone());

        let success = self.success.clone();
        let mut views = ViewSet::new(move |data: &T| {
            (*success)(WithData {
                props: &props,
                data,
            })
        })
        .with_fallbacks(self.fallbacks.clone());
        if let Some(loading) = self.loading.clone() {
            views = views.with_loading(move || (*loading)());
        }
        if let Some(error) = self.error.clone() {
            views = views.with_error(move || (*error)());
        }

        AsyncView::mount(fetch, views, sink)
    }
}

impl<P: 'static, T: 'static, V: 'static> Clone for PropsBoundAsyncView<P, T, V> {
    fn clone(&self) -> Self {
        Self {
            fetch: self.fetch.clone(),
            success: self.success.clone(),
            loading: self.loading.clone(),
            error: self.error.clone(),
            fallbacks: self.fallbacks.clone(),
        }
    }
}

impl<P: 'static, T: 'static, V: 'static> PartialEq for PropsBoundAsyncView<P, T, V> {
    fn eq(&self, other: &Self) -> bool {
        self.fetch == other.fetch
            && self.success == other.success
            && self.loading == other.loading
            && self.error == other.error
            && self.fallbacks == other.fallbacks
    }
}
