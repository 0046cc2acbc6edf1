use async_trait::async_trait;
use std::time::Instant;

/// Source of the current time for interpolation.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// A per-frame tick source, standing in for a display refresh signal.
#[async_trait]
pub trait FrameTicker: Send {
    /// Resolves when the next frame should be drawn.
    async fn next_frame(&mut self);
}

pub type FrameTickerBox = Box<dyn FrameTicker>;
