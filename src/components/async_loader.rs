use std::sync::Arc;

use dioxus::prelude::*;

use crate::{
    loaded::{
        async_view::AsyncView,
        fetch::FetchFn,
        loaders::Fallbacks,
        renderer::{Renderer, ViewSet},
        sink::RenderSink,
    },
    utils::CheapClone,
};

/// A [`RenderSink`] for Dioxus: marks the component dirty when the fetch settles.
///
/// The emitted frame itself is not kept. Every render of the component derives its view
/// again from the settled outcome, against the current state of whatever the render
/// callbacks read.
#[derive(Clone)]
pub struct FrameSink {
    redraw: Arc<dyn Fn() + Send + Sync>,
}

impl FrameSink {
    pub fn new(redraw: Arc<dyn Fn() + Send + Sync>) -> Self {
        Self { redraw }
    }
}

impl RenderSink<Element> for FrameSink {
    fn emit(&self, _view: Element) {
        (self.redraw)();
    }
}

/// Hosts one [`AsyncView`] for the lifetime of the calling component.
///
/// The view is mounted on the first render and attached right after; its task is spawned
/// with [`spawn_forever`] because the fetch must survive the component, the mount scope
/// takes care of discarding its result. Dropping the component drops the view.
pub(super) fn use_async_view<T, R>(
    mount: impl FnOnce(FrameSink) -> AsyncView<T, R, FrameSink>,
) -> Element
where
    T: 'static,
    R: Renderer<T, View = Element> + 'static,
{
    let view = use_hook(move || {
        let view = CheapClone::new(mount(FrameSink::new(schedule_update())));
        log::debug!("AsyncView {} mounted", view.id());
        view
    });

    use_hook({
        let view = view.clone();
        move || match view.on_attach() {
            Ok(task) => {
                if spawn_forever(task).is_none() {
                    log::warn!("AsyncView {} could not spawn its fetch task", view.id());
                }
            }
            Err(e) => log::warn!("{e}"),
        }
    });

    let id = view.id();
    use_drop(move || log::debug!("AsyncView {id} dropped"));

    view.render()
}

/// Fetches once when mounted and shows the loading, error or success view accordingly.
///
/// The views missing from the props fall back to the built-in visuals, configured by a
/// [`Fallbacks`] context if an ancestor provides one. Changing the props of a mounted
/// loader does not fetch again; only a new mount does.
///
/// # Parameters
///
/// * `fetch` - The fetch function, called once per mount
/// * `render_success` - Renders the fetched data
/// * `render_loading` - Rendered until the fetch settles
/// * `render_error` - Rendered if the fetch fails
///
/// # Examples
///
/// ```rust,ignore
/// use dioxus::prelude::*;
/// use loaded_view::prelude::*;
///
/// #[component]
/// fn Balance(account: String) -> Element {
///     let fetch = use_hook(|| FetchFn::new(move || fetch_balance(account.clone())));
///     rsx! {
///         AsyncLoader::<u64> {
///             fetch,
///             render_success: |sats: u64| rsx! { span { "{sats} sat" } },
///         }
///     }
/// }
/// ```
#[component]
pub fn AsyncLoader<T: Clone + PartialEq + 'static>(
    fetch: FetchFn<T>,
    render_success: Callback<T, Element>,
    render_loading: Option<Callback<(), Element>>,
    render_error: Option<Callback<(), Element>>,
) -> Element {
    let fallbacks = try_use_context::<Fallbacks>().unwrap_or_default();

    use_async_view(move |sink| {
        let mut views = ViewSet::new(move |data: &T| render_success.call(data.clone()))
            .with_fallbacks(fallbacks);
        if let Some(render_loading) = render_loading {
            views = views.with_loading(move || render_loading.call(()));
        }
        if let Some(render_error) = render_error {
            views = views.with_error(move || render_error.call(()));
        }
        AsyncView::mount(fetch, views, sink)
    })
}

#[cfg(test)]
pub(super) mod tests {
    use std::{cell::Cell, rc::Rc, time::Duration};

    use dioxus::dioxus_core::{NoOpMutations, ScopeId, VirtualDom};
    use tokio::sync::Notify;

    use super::*;

    /// Lets the spawned tasks run and re-renders until the dom goes idle.
    pub(crate) async fn settle(dom: &mut VirtualDom) {
        for _ in 0..8 {
            let work = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work());
            if work.await.is_err() {
                break;
            }
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    #[tokio::test]
    async fn loading_then_success() {
        fn app() -> Element {
            let fetch = use_hook(|| FetchFn::new(|| async { Ok::<_, ()>(7u32) }));
            rsx! {
                AsyncLoader::<u32> {
                    fetch,
                    render_success: |n: u32| rsx! {
                        p { "value {n}" }
                    },
                }
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        assert_eq!(dioxus_ssr::render(&dom), "<h1>loading...</h1>");

        settle(&mut dom).await;
        assert_eq!(dioxus_ssr::render(&dom), "<p>value 7</p>");
    }

    #[tokio::test]
    async fn failure_shows_the_error_fallback() {
        fn app() -> Element {
            let fetch = use_hook(|| FetchFn::new(|| async { Err::<u32, _>("down") }));
            rsx! {
                AsyncLoader::<u32> {
                    fetch,
                    render_success: |n: u32| rsx! {
                        p { "value {n}" }
                    },
                }
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        settle(&mut dom).await;

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("an error has occurred..."), "{html}");
        assert!(html.contains("#ff00ff"), "{html}");
        assert!(html.contains("#00ff00"), "{html}");
        assert!(!html.contains("value"), "{html}");
    }

    #[tokio::test]
    async fn custom_error_view() {
        fn app() -> Element {
            let fetch = use_hook(|| FetchFn::new(|| async { Err::<u32, _>(()) }));
            rsx! {
                AsyncLoader::<u32> {
                    fetch,
                    render_success: |n: u32| rsx! {
                        p { "value {n}" }
                    },
                    render_error: Callback::new(|_: ()| rsx! {
                        p { "sorry" }
                    }),
                }
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        settle(&mut dom).await;
        assert_eq!(dioxus_ssr::render(&dom), "<p>sorry</p>");
    }

    #[tokio::test]
    async fn fallbacks_from_context() {
        fn app() -> Element {
            use_context_provider(|| Fallbacks {
                loading_text: "patience".to_owned(),
                ..Default::default()
            });
            let fetch = use_hook(|| FetchFn::new(std::future::pending::<Result<u32, ()>>));
            rsx! {
                AsyncLoader::<u32> {
                    fetch,
                    render_success: |n: u32| rsx! {
                        p { "value {n}" }
                    },
                }
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        settle(&mut dom).await;
        assert_eq!(dioxus_ssr::render(&dom), "<h1>patience</h1>");
    }

    /// Shared with a test app through its root props.
    #[derive(Clone, Default)]
    struct Harness {
        fetches: Rc<Cell<u32>>,
        fetch_gate: Rc<Notify>,
        app_gate: Rc<Notify>,
    }

    impl Harness {
        fn gated_fetch(&self) -> FetchFn<u32> {
            let (fetches, gate) = (self.fetches.clone(), self.fetch_gate.clone());
            FetchFn::new(move || {
                fetches.set(fetches.get() + 1);
                let gate = gate.clone();
                async move {
                    gate.notified().await;
                    Ok::<_, ()>(7u32)
                }
            })
        }
    }

    #[tokio::test]
    async fn unmounted_before_settling_renders_nothing() {
        fn app(harness: Harness) -> Element {
            let mut show = use_signal(|| true);
            let fetch = use_hook(|| harness.gated_fetch());
            use_hook(|| {
                let gate = harness.app_gate.clone();
                spawn(async move {
                    gate.notified().await;
                    show.set(false);
                })
            });
            rsx! {
                div {
                    if show() {
                        AsyncLoader::<u32> {
                            fetch,
                            render_success: |n: u32| rsx! {
                                p { "value {n}" }
                            },
                        }
                    }
                }
            }
        }

        let harness = Harness::default();
        let mut dom = VirtualDom::new_with_props(app, harness.clone());
        dom.rebuild_in_place();
        assert_eq!(dioxus_ssr::render(&dom), "<div><h1>loading...</h1></div>");

        harness.app_gate.notify_one();
        settle(&mut dom).await;
        assert_eq!(dioxus_ssr::render(&dom), "<div></div>");

        harness.fetch_gate.notify_one();
        settle(&mut dom).await;
        assert_eq!(dioxus_ssr::render(&dom), "<div></div>");
        assert_eq!(harness.fetches.get(), 1);
    }

    #[tokio::test]
    async fn rerendering_keeps_the_settled_view() {
        fn app(harness: Harness) -> Element {
            let fetch = use_hook(|| harness.gated_fetch());
            rsx! {
                AsyncLoader::<u32> {
                    fetch,
                    render_success: |n: u32| rsx! {
                        p { "value {n}" }
                    },
                }
            }
        }

        let harness = Harness::default();
        let mut dom = VirtualDom::new_with_props(app, harness.clone());
        dom.rebuild_in_place();
        harness.fetch_gate.notify_one();
        settle(&mut dom).await;
        assert_eq!(dioxus_ssr::render(&dom), "<p>value 7</p>");

        for _ in 0..3 {
            dom.mark_dirty(ScopeId::APP);
            dom.render_immediate(&mut NoOpMutations);
            assert_eq!(dioxus_ssr::render(&dom), "<p>value 7</p>");
        }
        assert_eq!(harness.fetches.get(), 1);
    }

    #[tokio::test]
    async fn settled_view_follows_state_changes() {
        fn app(harness: Harness) -> Element {
            let mut label = use_signal(|| "first");
            let fetch = use_hook(|| harness.gated_fetch());
            use_hook(|| {
                let gate = harness.app_gate.clone();
                spawn(async move {
                    gate.notified().await;
                    label.set("second");
                })
            });
            rsx! {
                AsyncLoader::<u32> {
                    fetch,
                    render_success: move |n: u32| rsx! {
                        p { "{label} {n}" }
                    },
                }
            }
        }

        let harness = Harness::default();
        let mut dom = VirtualDom::new_with_props(app, harness.clone());
        dom.rebuild_in_place();
        harness.fetch_gate.notify_one();
        settle(&mut dom).await;
        assert_eq!(dioxus_ssr::render(&dom), "<p>first 7</p>");

        harness.app_gate.notify_one();
        settle(&mut dom).await;
        assert_eq!(dioxus_ssr::render(&dom), "<p>second 7</p>");
        assert_eq!(harness.fetches.get(), 1);
    }
}
