//! The animation loop: draw, present, update, wait for the next refresh.

use crate::canvas::Canvas;
use crate::error::Error;
use crate::random::RandomSource;
use crate::renderer::StarfieldRenderer;
use crate::types::{FrameStats, Viewport};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag that ends the run loop at the next iteration.
#[derive(Debug, Clone, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Whatever displays frames and paces the loop.
#[allow(async_fn_in_trait)]
pub trait FrameHost<C: Canvas> {
    /// Show the frame that was just drawn.
    fn present(&mut self, canvas: &C, stats: FrameStats) -> Result<(), Error>;

    /// Wait for the next display refresh. Returns the new surface size if
    /// the host was resized since the previous frame.
    async fn next_frame(&mut self) -> Result<Option<Viewport>, Error>;
}

/// Run until `stop` is raised, returning the number of frames rendered.
///
/// Within a frame drawing always precedes the update, and a resize reported
/// by the host is applied before the following draw.
pub async fn run<C, R, H>(
    renderer: &mut StarfieldRenderer<C, R>,
    host: &mut H,
    stop: &StopFlag,
) -> Result<u64, Error>
where
    C: Canvas,
    R: RandomSource,
    H: FrameHost<C>,
{
    let mut frames: u64 = 0;
    tracing::info!(viewport = %renderer.viewport(), "animation started");

    while !stop.is_stopped() {
        renderer.draw();
        frames += 1;
        let stats = FrameStats {
            frame: frames,
            stars: renderer.stars().len(),
            viewport: renderer.viewport(),
        };
        host.present(renderer.canvas(), stats)?;
        renderer.update();
        tracing::trace!(frame = frames, "frame done");

        if let Some(viewport) = host.next_frame().await? {
            renderer.resize(viewport.width, viewport.height);
        }
    }

    tracing::info!(frames, "animation stopped");
    Ok(frames)
}

/// Process exit status for a finished run: 0 on a clean stop, 1 when the
/// loop failed.
pub fn exit_status(result: &Result<u64, Error>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}
