use std::{
    cell::{Cell, Ref, RefCell},
    future::Future,
};

use uuid::Uuid;

use super::{
    fetch::FetchFn, mount::MountScope, outcome::FetchOutcome, renderer::Renderer,
    sink::RenderSink,
};
use crate::{error::LifecycleError, utils::CheapClone};

/// One mount of a loader: a single fetch attempt and the view of its outcome.
///
/// The lifecycle is explicit:
/// 1. [`AsyncView::mount`] creates the view with a `Pending` outcome,
/// 2. the host renders it with [`AsyncView::render`] as often as it likes,
/// 3. after the first render the host calls [`AsyncView::on_attach`] exactly once and drives
///    the returned task on its event loop,
/// 4. when the fetch settles the task records the outcome and emits the new view to the
///    [`RenderSink`],
/// 5. dropping the view (or [`AsyncView::detach`]) tears the mount down.
///
/// The fetch is never cancelled. If the view is torn down before it settles, the task still
/// runs it to completion and then discards the result without touching anything.
///
/// # Examples
///
/// ```rust
/// use loaded_view::prelude::*;
///
/// # let _ = futures_util::FutureExt::now_or_never(async {
/// let fetch = FetchFn::new(|| async { Ok::<_, ()>(1) });
/// let views = ViewSet::new(|id: &u32| format!("<p>{id}</p>"));
/// let view = AsyncView::mount(fetch, views, |frame: String| println!("{frame}"));
///
/// assert_eq!(view.render(), "<h1>loading...</h1>");
/// view.on_attach().unwrap().await;
/// assert_eq!(view.render(), "<p>1</p>");
/// # });
/// ```
pub struct AsyncView<T: 'static, R, S> {
    outcome: CheapClone<RefCell<FetchOutcome<T>>>,
    renderer: CheapClone<R>,
    sink: CheapClone<S>,
    fetch: Cell<Option<FetchFn<T>>>,
    scope: MountScope,
}

impl<T, R, S> AsyncView<T, R, S>
where
    T: 'static,
    R: Renderer<T> + 'static,
    S: RenderSink<R::View> + 'static,
{
    pub fn mount(fetch: FetchFn<T>, renderer: R, sink: S) -> Self {
        let scope = MountScope::new();
        log::trace!("mount {} created", scope.id());
        Self {
            outcome: CheapClone::new(RefCell::new(FetchOutcome::Pending)),
            renderer: CheapClone::new(renderer),
            sink: CheapClone::new(sink),
            fetch: Cell::new(Some(fetch)),
            scope,
        }
    }

    pub fn id(&self) -> Uuid {
        self.scope.id()
    }

    /// Derives the current view from the current outcome. Never starts anything.
    pub fn render(&self) -> R::View {
        self.renderer.render(&self.outcome.borrow())
    }

    pub fn outcome(&self) -> Ref<'_, FetchOutcome<T>> {
        self.outcome.borrow()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Starts the one fetch attempt of this mount.
    ///
    /// The fetch function is called right away; the returned task awaits it, then commits
    /// the outcome and emits one view, unless the mount was torn down in between. The task
    /// is the only suspension point of the view and must be driven by the host.
    ///
    /// # Errors
    ///
    /// [`LifecycleError::AlreadyAttached`] on every call after the first one. Nothing is
    /// started in that case.
    pub fn on_attach(&self) -> Result<impl Future<Output = ()> + 'static, LifecycleError> {
        let Some(fetch) = self.fetch.take() else {
            log::warn!("mount {} attached twice, ignoring", self.id());
            return Err(LifecycleError::AlreadyAttached(self.id()));
        };

        let token = self.scope.token();
        let outcome = self.outcome.clone();
        let renderer = self.renderer.clone();
        let sink = self.sink.clone();

        log::trace!("mount {} attached, fetch started", token.id());
        let settling = fetch.call();

        Ok(async move {
            let next = FetchOutcome::from(settling.await);
            if !token.is_live() {
                log::debug!("mount {} settled after teardown, discarded", token.id());
                return;
            }
            let view = {
                let mut outcome = outcome.borrow_mut();
                if !outcome.settle(next) {
                    return;
                }
                let settled_as = match *outcome {
                    FetchOutcome::Succeeded(_) => "succeeded",
                    _ => "failed",
                };
                log::trace!("mount {} {settled_as}", token.id());
                renderer.render(&outcome)
            };
            sink.emit(view);
        })
    }

    /// Tears the mount down. Same as dropping it, spelled out.
    pub fn detach(self) {
        log::trace!("mount {} detached", self.id());
    }
}
