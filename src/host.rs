/// Re-render seam between the card and its host UI layer.
///
/// The card calls [`schedule_render`](RenderHost::schedule_render) after
/// every visible field mutation; a declarative view layer batches those
/// requests and performs the actual render.
pub trait RenderHost: Send + Sync {
    fn schedule_render(&self);
}

/// Host that drops render requests, for driving the card headless.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHost;

impl RenderHost for NoopHost {
    fn schedule_render(&self) {}
}
