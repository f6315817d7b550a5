use crate::render::render_card;
use crate::{
    DisplayStrings, MetadataExtractor, MetadataFetcher, MetadataSource, NoopHost, PreviewRecord,
    RenderHost,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use tracing::{debug, instrument};

/// Link preview card component.
///
/// A changed `href` resets the display record, fetches metadata from the
/// configured source, and applies the normalized result. Failures degrade to
/// a fallback record and are never surfaced to the caller.
///
/// Clones share state, so a host can hand the card to a spawned task and
/// keep reading it.
#[derive(Clone)]
pub struct LinkPreviewCard {
    source: Arc<dyn MetadataSource>,
    extractor: MetadataExtractor,
    strings: DisplayStrings,
    host: Arc<dyn RenderHost>,
    state: Arc<RwLock<CardState>>,
    seq: Arc<AtomicU64>,
}

#[derive(Debug, Default)]
struct CardState {
    href: String,
    record: PreviewRecord,
}

impl Default for LinkPreviewCard {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkPreviewCard {
    pub fn new() -> Self {
        Self::with_source(Arc::new(MetadataFetcher::new()))
    }

    pub fn with_source(source: Arc<dyn MetadataSource>) -> Self {
        Self {
            source,
            extractor: MetadataExtractor::new(),
            strings: DisplayStrings::default(),
            host: Arc::new(NoopHost),
            state: Arc::new(RwLock::new(CardState::default())),
            seq: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn with_host(mut self, host: Arc<dyn RenderHost>) -> Self {
        self.host = host;
        self
    }

    pub fn with_strings(mut self, strings: DisplayStrings) -> Self {
        self.extractor = MetadataExtractor::with_strings(strings.clone());
        self.strings = strings;
        self
    }

    /// Snapshot of the current display record.
    pub fn record(&self) -> PreviewRecord {
        self.read_state().record.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.read_state().record.loading_state
    }

    pub fn href(&self) -> String {
        self.read_state().href.clone()
    }

    /// Renders the current record as a text card; `expanded` opens the
    /// description region.
    pub fn render(&self, expanded: bool) -> String {
        render_card(&self.record(), &self.strings, expanded)
    }

    /// Sets the target URL.
    ///
    /// An actual change resets the record to defaults; a changed, non-empty
    /// value additionally runs one fetch cycle to completion. Re-setting the
    /// current value is a no-op.
    #[instrument(level = "debug", skip(self))]
    pub async fn set_href(&self, href: &str) {
        {
            let mut state = self.write_state();
            if state.href == href {
                debug!("href unchanged, skipping fetch");
                return;
            }
            state.href = href.to_string();
            state.record = PreviewRecord::default();
        }
        self.host.schedule_render();

        if !href.is_empty() {
            self.fetch_data(href).await;
        }
    }

    /// One fetch-and-apply cycle.
    ///
    /// The loading flag is raised before the first await and cleared at
    /// settlement. A cycle that is no longer the latest issued request
    /// discards its result instead of applying it, so a late response for an
    /// earlier URL can neither overwrite fields nor clear the loading state
    /// of a newer in-flight request.
    async fn fetch_data(&self, href: &str) {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.write_state().record.loading_state = true;
        self.host.schedule_render();

        let record = match self.source.fetch_metadata(href).await {
            Ok(fields) => self.extractor.extract(&fields, href),
            Err(e) => {
                e.log();
                self.extractor.fallback(href)
            }
        };

        {
            let mut state = self.write_state();
            if self.seq.load(Ordering::SeqCst) != seq {
                debug!(href = %href, "Discarding stale metadata response");
                return;
            }
            state.record = record;
        }
        self.host.schedule_render();
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, CardState> {
        self.state.read().expect("card state lock poisoned")
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, CardState> {
        self.state.write().expect("card state lock poisoned")
    }
}
