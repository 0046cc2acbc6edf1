use crate::domain::ports::FrameTicker;
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Interval, MissedTickBehavior};

/// Roughly one frame of a 60 Hz display.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Frame ticks from a `tokio` interval.
///
/// Missed ticks are delayed rather than skipped or bursted: a slow host only
/// pushes completion back.
pub struct IntervalTicker {
    interval: Interval,
}

impl IntervalTicker {
    pub fn new(period: Duration) -> Self {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }
}

impl Default for IntervalTicker {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_INTERVAL)
    }
}

#[async_trait]
impl FrameTicker for IntervalTicker {
    async fn next_frame(&mut self) {
        self.interval.tick().await;
    }
}

/// Frame ticks pushed by hand through a channel.
///
/// Once every sender is dropped no further frame ever arrives.
pub struct ChannelTicker {
    frames: mpsc::Receiver<()>,
}

impl ChannelTicker {
    pub fn new() -> (mpsc::Sender<()>, Self) {
        let (tx, rx) = mpsc::channel(64);
        (tx, Self { frames: rx })
    }
}

#[async_trait]
impl FrameTicker for ChannelTicker {
    async fn next_frame(&mut self) {
        if self.frames.recv().await.is_none() {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_channel_ticker_yields_pushed_frames() {
        let (frames, mut ticker) = ChannelTicker::new();
        frames.send(()).await.unwrap();
        tokio::time::timeout(Duration::from_secs(1), ticker.next_frame())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_channel_ticker_stalls_after_senders_drop() {
        let (frames, mut ticker) = ChannelTicker::new();
        drop(frames);
        let stalled = tokio::time::timeout(Duration::from_millis(20), ticker.next_frame()).await;
        assert!(stalled.is_err());
    }

    #[tokio::test]
    async fn test_interval_ticker_ticks() {
        let mut ticker = IntervalTicker::default();
        ticker.next_frame().await;
        ticker.next_frame().await;
    }
}
