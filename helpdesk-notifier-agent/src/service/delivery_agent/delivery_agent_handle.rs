use super::{AgentEvent, DeliveryAgent};
use crate::error::Error;
use std::sync::Arc;
use tokio::{
    sync::{mpsc, oneshot, Notify},
    task::JoinHandle,
};

struct Envelope {
    event: AgentEvent,
    done: oneshot::Sender<Result<(), Error>>,
}

///
/// Runs [DeliveryAgent] in a background task.
/// Events are handled one at a time in the order they were dispatched.
///
pub struct DeliveryAgentHandle {
    events_tx: mpsc::Sender<Envelope>,
    close_notify: Arc<Notify>,
    handle: JoinHandle<()>,
}

impl DeliveryAgentHandle {
    pub fn start(agent: DeliveryAgent, buffer_size: usize) -> Self {
        let (events_tx, events_rx) = mpsc::channel(buffer_size);
        let close_notify = Arc::new(Notify::new());
        let handle = tokio::spawn(Self::run(agent, events_rx, close_notify.clone()));

        Self {
            events_tx,
            close_notify,
            handle,
        }
    }

    ///
    /// Hand event to the agent and wait until it is handled
    ///
    /// ### Errors
    /// - [Error::Closed] when agent is not running anymore
    /// - error returned by the event handler
    ///
    pub async fn dispatch(&self, event: AgentEvent) -> Result<(), Error> {
        let (done, done_rx) = oneshot::channel();
        self.events_tx
            .send(Envelope { event, done })
            .await
            .map_err(|_| Error::Closed)?;

        done_rx.await.map_err(|_| Error::Closed)?
    }

    ///
    /// Stop the agent. Event being handled is cancelled,
    /// queued events are dropped.
    ///
    pub async fn close(self) {
        self.close_notify.notify_one();
        if let Err(err) = self.handle.await {
            tracing::error!(%err, "delivery agent task failed");
        }
    }

    #[tracing::instrument(name = "Delivery Agent", skip_all)]
    async fn run(
        mut agent: DeliveryAgent,
        mut events_rx: mpsc::Receiver<Envelope>,
        close_notify: Arc<Notify>,
    ) {
        tracing::info!("delivery agent started");

        tokio::select! {
            biased;

            _ = close_notify.notified() => {},

            _ = async {
                while let Some(Envelope { event, done }) = events_rx.recv().await {
                    let result = agent.handle(event).await;
                    if let Err(err) = &result {
                        tracing::warn!(%err, "event handler failed");
                    }
                    // Dispatcher may have stopped waiting
                    let _ = done.send(result);
                }
            } => {}
        }

        tracing::info!("delivery agent finished");
    }
}
