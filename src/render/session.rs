use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

use crate::assets::decode::{PreparedImage, decode_background};
use crate::document::ThumbnailDocument;
use crate::foundation::error::{ThumbError, ThumbResult};
use crate::render::compositor::Compositor;
use crate::render::surface::RenderedSurface;

/// Completion message for one off-thread background decode, tagged with the session revision
/// that requested it.
struct DecodeDone {
    revision: u64,
    key: u64,
    result: ThumbResult<PreparedImage>,
}

/// Single-editor render orchestration with last-write-wins semantics.
///
/// Background bitmap decode is the only suspension point in the pipeline. Each [`submit`]
/// bumps a monotonically increasing revision; a decode completion whose tag no longer matches
/// the current revision is stale and is discarded, so a superseded decode can never race a
/// newer document state onto the surface. Text paints only as part of a full render, which in
/// turn only happens once the background for the latest revision is available (or its decode
/// has failed over to the gradient).
///
/// [`submit`]: RenderSession::submit
pub struct RenderSession {
    compositor: Compositor,
    tx: Sender<DecodeDone>,
    rx: Receiver<DecodeDone>,

    revision: u64,
    latest: ThumbnailDocument,
    latest_fingerprint: Option<u64>,
    pending_decode: Option<u64>,
    dirty: bool,
}

impl Default for RenderSession {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSession {
    /// Create a session with an empty document and no font registered.
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self {
            compositor: Compositor::new(),
            tx,
            rx,
            revision: 0,
            latest: ThumbnailDocument::new(),
            latest_fingerprint: None,
            pending_decode: None,
            dirty: false,
        }
    }

    /// Register the font used for title and subtitle glyphs.
    pub fn register_font(&mut self, font_bytes: &[u8]) -> ThumbResult<()> {
        self.compositor.register_font(font_bytes)
    }

    /// Submit a new document state, returning the session revision it was assigned.
    ///
    /// A document whose fingerprint equals the current one is ignored: the five render inputs
    /// are the sole invalidation condition, and none of them changed. Otherwise the revision is
    /// bumped and, when the background still needs decoding, the decode is started off-thread.
    pub fn submit(&mut self, doc: ThumbnailDocument) -> u64 {
        let fingerprint = doc.fingerprint();
        if self.latest_fingerprint == Some(fingerprint) {
            return self.revision;
        }

        self.revision += 1;
        self.latest = doc;
        self.latest_fingerprint = Some(fingerprint);
        self.dirty = true;
        self.pending_decode = None;

        if let Some(src) = &self.latest.background {
            let key = src.cache_key();
            if !self.compositor.has_decoded(key) {
                let revision = self.revision;
                let tx = self.tx.clone();
                let src = src.clone();
                self.pending_decode = Some(revision);
                thread::spawn(move || {
                    let result = decode_background(&src);
                    // The session may be gone by the time the decode lands; that is fine.
                    let _ = tx.send(DecodeDone {
                        revision,
                        key,
                        result,
                    });
                });
            }
        }

        self.revision
    }

    /// Drain decode completions and render the latest document if it is ready.
    ///
    /// Returns `Ok(None)` when nothing changed since the last render or the latest revision is
    /// still waiting on its background decode.
    pub fn poll(&mut self) -> ThumbResult<Option<RenderedSurface>> {
        while let Ok(done) = self.rx.try_recv() {
            self.absorb(done);
        }

        if self.dirty && self.pending_decode.is_none() {
            let surface = self.compositor.render(&self.latest)?;
            self.dirty = false;
            return Ok(Some(surface));
        }
        Ok(None)
    }

    /// Render the latest document, blocking on its in-flight background decode if necessary.
    pub fn render_latest(&mut self) -> ThumbResult<RenderedSurface> {
        while self.pending_decode.is_some() {
            let done = self
                .rx
                .recv()
                .map_err(|_| ThumbError::render("decode worker channel closed"))?;
            self.absorb(done);
        }
        let surface = self.compositor.render(&self.latest)?;
        self.dirty = false;
        Ok(surface)
    }

    /// Revision tag of the in-flight background decode, if any.
    pub fn pending_revision(&self) -> Option<u64> {
        self.pending_decode
    }

    /// Current session revision.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The latest submitted document state.
    pub fn document(&self) -> &ThumbnailDocument {
        &self.latest
    }

    fn absorb(&mut self, done: DecodeDone) {
        if Some(done.revision) != self.pending_decode {
            tracing::debug!(
                revision = done.revision,
                current = self.revision,
                "discarding stale background decode"
            );
            return;
        }

        let decoded = match done.result {
            Ok(img) => Some(img),
            Err(e) => {
                tracing::warn!(error = %e, "background decode failed; using gradient fallback");
                None
            }
        };
        self.compositor.insert_decoded(done.key, decoded);
        self.pending_decode = None;
    }
}
