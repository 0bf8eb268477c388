/// The host's capability to accept a freshly rendered view.
///
/// An [`AsyncView`](super::async_view::AsyncView) emits exactly one view through its sink,
/// when its fetch settles while it is still mounted. Whatever reconciliation the host UI
/// does with it is out of the view's hands.
pub trait RenderSink<V> {
    fn emit(&self, view: V);
}

impl<V, F: Fn(V)> RenderSink<V> for F {
    fn emit(&self, view: V) {
        self(view)
    }
}

