#[cfg(test)]
#[path = "../../tests/unit/population/handoff_test.rs"]
mod handoff_test;

use super::PopulationUpdater;
use crate::models::Population;
use crate::utils::GenericResult;
use tokio::sync::{mpsc, oneshot};

/// Defines messages which can be sent to the updater actor.
enum UpdateMessage {
    Update { population: Population, respond_to: oneshot::Sender<Population> },
}

/// An actor which owns the population only while it is updating it.
struct UpdaterActor {
    updater: PopulationUpdater,
    receiver: mpsc::Receiver<UpdateMessage>,
}

impl UpdaterActor {
    fn new(updater: PopulationUpdater, receiver: mpsc::Receiver<UpdateMessage>) -> Self {
        Self { updater, receiver }
    }

    fn handle_message(&mut self, msg: UpdateMessage) {
        match msg {
            UpdateMessage::Update { mut population, respond_to } => {
                self.updater.update(&mut population);
                let _ = respond_to.send(population);
            }
        }
    }
}

/// A handle to the population updater which runs as a separate task.
///
/// The population is moved into the request and moved back with the response, so only one
/// side holds it at any time. The caller awaits the response before sending the next request,
/// which keeps exactly one update in flight.
pub struct UpdaterHandle {
    sender: mpsc::Sender<UpdateMessage>,
}

impl UpdaterHandle {
    /// Spawns the updater task. Must be called within a tokio runtime.
    pub fn new(updater: PopulationUpdater) -> Self {
        let (sender, receiver) = mpsc::channel(1);
        let mut actor = UpdaterActor::new(updater, receiver);
        tokio::spawn(async move {
            while let Some(msg) = actor.receiver.recv().await {
                actor.handle_message(msg);
            }
        });

        Self { sender }
    }

    /// Hands the population over to the updater and waits until the updated one is returned.
    pub async fn update(&self, population: Population) -> GenericResult<Population> {
        let (send, recv) = oneshot::channel();
        let message = UpdateMessage::Update { population, respond_to: send };

        self.sender.send(message).await.map_err(|_| "population updater is not running".to_string())?;

        recv.await.map_err(|_| "population updater has dropped update request".into())
    }
}
