use super::{
    loaders::{FallbackView, Fallbacks},
    outcome::FetchOutcome,
};

/// The capability set a loader needs to display each state of a fetch.
///
/// Any UI layer adapts its own component model to this trait; [`ViewSet`] is the
/// callback-based implementation most callers want.
pub trait Renderer<T> {
    type View;

    fn loading(&self) -> Self::View;
    fn error(&self) -> Self::View;
    fn success(&self, data: &T) -> Self::View;

    /// Derives the view of `outcome`.
    ///
    /// A recorded success always wins; an error is only shown when the fetch failed;
    /// anything else is still loading.
    fn render(&self, outcome: &FetchOutcome<T>) -> Self::View {
        match outcome {
            FetchOutcome::Succeeded(data) => self.success(data),
            FetchOutcome::Failed => self.error(),
            FetchOutcome::Pending => self.loading(),
        }
    }
}

type SuccessFn<T, V> = Box<dyn Fn(&T) -> V>;
type StateFn<V> = Box<dyn Fn() -> V>;

/// Caller-supplied rendering callbacks.
///
/// The success view is mandatory. The loading and error ones are optional and default to
/// the built-in visuals described by [`Fallbacks`].
///
/// # Examples
///
/// ```rust
/// use loaded_view::prelude::*;
///
/// let views = ViewSet::new(|n: &u32| format!("<p>{n}</p>"))
///     .with_loading(|| "<p>please wait</p>".to_owned());
///
/// assert_eq!(views.render(&FetchOutcome::Pending), "<p>please wait</p>");
/// assert_eq!(views.render(&FetchOutcome::Succeeded(7)), "<p>7</p>");
/// assert!(views.render(&FetchOutcome::Failed).contains("an error has occurred"));
/// ```
pub struct ViewSet<T, V> {
    success: SuccessFn<T, V>,
    loading: Option<StateFn<V>>,
    error: Option<StateFn<V>>,
    fallbacks: Fallbacks,
}

impl<T, V: FallbackView> ViewSet<T, V> {
    pub fn new(success: impl Fn(&T) -> V + 'static) -> Self {
        Self {
            success: Box::new(success),
            loading: None,
            error: None,
            fallbacks: Fallbacks::default(),
        }
    }

    pub fn with_loading(mut self, loading: impl Fn() -> V + 'static) -> Self {
        self.loading = Some(Box::new(loading));
        self
    }

    pub fn with_error(mut self, error: impl Fn() -> V + 'static) -> Self {
        self.error = Some(Box::new(error));
        self
    }

    /// Replaces the settings of the built-in visuals used when a view is missing.
    pub fn with_fallbacks(mut self, fallbacks: Fallbacks) -> Self {
        self.fallbacks = fallbacks;
        self
    }
}

impl<T, V: FallbackView> Renderer<T> for ViewSet<T, V> {
    type View = V;

    fn loading(&self) -> V {
        match &self.loading {
            Some(loading) => loading(),
            None => V::loading(&self.fallbacks),
        }
    }

    fn error(&self) -> V {
        match &self.error {
            Some(error) => error(),
            None => V::error(&self.fallbacks),
        }
    }

    fn success(&self, data: &T) -> V {
        (self.success)(data)
    }
}
