use super::interpolator::ValueInterpolator;
use crate::domain::interpolation::{RunId, Sample};
use crate::domain::ports::{Clock, FrameTickerBox};
use crate::error::{CheckoutError, Result};
use rust_decimal::Decimal;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

enum Command {
    Start {
        start_value: Decimal,
        end_value: Decimal,
        duration: Duration,
        reply: oneshot::Sender<RunId>,
    },
    Retarget {
        end_value: Decimal,
        duration: Duration,
        reply: oneshot::Sender<RunId>,
    },
    Cancel {
        reply: oneshot::Sender<bool>,
    },
}

/// Handle to an animated value running on its own task.
///
/// The task owns a [`ValueInterpolator`] and is the only writer of the value.
/// It waits for frames only while a run is active, and handles commands
/// before frames so a superseded run cannot slip in one more sample.
/// Dropping the handle stops the task.
pub struct AnimatedValue {
    commands: mpsc::Sender<Command>,
    task: JoinHandle<()>,
}

impl AnimatedValue {
    /// Spawns the animation task. Samples are delivered on the returned
    /// receiver in emission order.
    pub fn spawn<C>(
        clock: C,
        mut ticker: FrameTickerBox,
        initial: Decimal,
    ) -> (Self, mpsc::UnboundedReceiver<Sample>)
    where
        C: Clock + 'static,
    {
        let (command_tx, mut command_rx) = mpsc::channel::<Command>(16);
        let (sample_tx, sample_rx) = mpsc::unbounded_channel();

        let task = tokio::spawn(async move {
            let mut interpolator = ValueInterpolator::new(clock, initial);
            loop {
                tokio::select! {
                    biased;
                    command = command_rx.recv() => {
                        let Some(command) = command else { break };
                        match command {
                            Command::Start { start_value, end_value, duration, reply } => {
                                let _ = reply.send(interpolator.start(start_value, end_value, duration));
                            }
                            Command::Retarget { end_value, duration, reply } => {
                                let _ = reply.send(interpolator.retarget(end_value, duration));
                            }
                            Command::Cancel { reply } => {
                                let _ = reply.send(interpolator.cancel());
                            }
                        }
                    }
                    _ = ticker.next_frame(), if interpolator.is_running() => {
                        if let Some(sample) = interpolator.tick()
                            && sample_tx.send(sample).is_err()
                        {
                            break;
                        }
                    }
                }
            }
            tracing::debug!("animation task stopped");
        });

        (
            Self {
                commands: command_tx,
                task,
            },
            sample_rx,
        )
    }

    /// Starts a run, superseding any run in flight.
    pub async fn start_interpolation(
        &self,
        start_value: Decimal,
        end_value: Decimal,
        duration: Duration,
    ) -> Result<RunId> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Start {
            start_value,
            end_value,
            duration,
            reply,
        })
        .await?;
        rx.await.map_err(|_| CheckoutError::AnimationStopped)
    }

    /// Starts a run from the currently displayed value.
    pub async fn retarget(&self, end_value: Decimal, duration: Duration) -> Result<RunId> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Retarget {
            end_value,
            duration,
            reply,
        })
        .await?;
        rx.await.map_err(|_| CheckoutError::AnimationStopped)
    }

    /// Cancels the active run. Once this returns, no further sample of that
    /// run is sent.
    pub async fn cancel(&self) -> Result<bool> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Cancel { reply }).await?;
        rx.await.map_err(|_| CheckoutError::AnimationStopped)
    }

    async fn send(&self, command: Command) -> Result<()> {
        self.commands
            .send(command)
            .await
            .map_err(|_| CheckoutError::AnimationStopped)
    }
}

impl Drop for AnimatedValue {
    fn drop(&mut self) {
        self.task.abort();
    }
}
