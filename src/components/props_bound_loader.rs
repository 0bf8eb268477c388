use dioxus::prelude::*;

use super::async_loader::use_async_view;
use crate::loaded::{loaders::Fallbacks, props_bound::PropsBoundAsyncView};

/// Mounts `loader` for the `input` props.
///
/// Behaves like [`AsyncLoader`](super::async_loader::AsyncLoader): one fetch per mount,
/// bound to the props the component was first rendered with. A [`Fallbacks`] context, when
/// provided, replaces the fallbacks of the loader.
#[component]
pub fn PropsBoundLoader<P: Clone + PartialEq + 'static, T: Clone + PartialEq + 'static>(
    loader: PropsBoundAsyncView<P, T, Element>,
    input: P,
) -> Element {
    let fallbacks = try_use_context::<Fallbacks>();

    use_async_view(move |sink| {
        let loader = match fallbacks {
            Some(fallbacks) => loader.with_fallbacks(fallbacks),
            None => loader,
        };
        loader.mount(input, sink)
    })
}

impl<P: Clone + PartialEq + 'static, T: Clone + PartialEq + 'static>
    PropsBoundAsyncView<P, T, Element>
{
    /// Renders this loader for one set of props, as a [`PropsBoundLoader`].
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// #[component]
    /// fn Profile(user_id: u64) -> Element {
    ///     let loader = use_hook(|| {
    ///         PropsBoundAsyncView::new(
    ///             |id: &u64| fetch_user(*id),
    ///             |user| rsx! { h2 { "#{user.props} {user.data.name}" } },
    ///         )
    ///     });
    ///     loader.view(user_id)
    /// }
    /// ```
    pub fn view(&self, input: P) -> Element {
        rsx! {
            PropsBoundLoader::<P, T> { loader: self.clone(), input }
        }
    }
}
