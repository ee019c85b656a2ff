//! Live draft projection for interactive editing.
//!
//! Inputs are coalesced until they stop arriving for the debounce interval, then a single
//! draft is generated. A newer input arriving mid-generation drops the stale generation, so
//! the published projection always reflects the most recent request.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use super::domain::{Draft, DraftFailure, DraftMemoKey, DraftRequest, DraftResult};
use super::service::DraftService;

/// What the editor should currently display.
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    /// No draft: nothing submitted yet, or the description is too short.
    Empty,
    Pending,
    Ready(Box<Draft>),
    Failed(DraftFailure),
}

impl Projection {
    pub fn draft(&self) -> Option<&Draft> {
        match self {
            Projection::Ready(draft) => Some(&**draft),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("draft projector has stopped")]
pub struct ProjectorClosed;

/// Handle to a background task that debounces requests into drafts.
pub struct DraftProjector {
    input: mpsc::UnboundedSender<DraftRequest>,
    output: watch::Receiver<Projection>,
    task: JoinHandle<()>,
}

impl DraftProjector {
    pub fn spawn(service: Arc<DraftService>, debounce: Duration) -> Self {
        let (input, inputs) = mpsc::unbounded_channel();
        let (publisher, output) = watch::channel(Projection::Empty);
        let task = tokio::spawn(project(service, debounce, inputs, publisher));

        Self {
            input,
            output,
            task,
        }
    }

    /// Queue the latest form state. Earlier queued states are superseded.
    pub fn submit(&self, request: DraftRequest) -> Result<(), ProjectorClosed> {
        self.input.send(request).map_err(|_| ProjectorClosed)
    }

    pub fn subscribe(&self) -> watch::Receiver<Projection> {
        self.output.clone()
    }

    pub fn current(&self) -> Projection {
        self.output.borrow().clone()
    }

    /// Stop accepting input and wait for any queued request to settle.
    pub async fn shutdown(self) {
        let DraftProjector { input, task, .. } = self;
        drop(input);
        if let Err(error) = task.await {
            tracing::warn!(error = %error, "draft projector task ended abnormally");
        }
    }
}

/// Latest input once the quiet period passes. The flag is set when every sender is gone.
async fn settle(
    mut latest: DraftRequest,
    debounce: Duration,
    inputs: &mut mpsc::UnboundedReceiver<DraftRequest>,
) -> (DraftRequest, bool) {
    loop {
        tokio::select! {
            next = inputs.recv() => match next {
                Some(request) => latest = request,
                None => return (latest, true),
            },
            _ = tokio::time::sleep(debounce) => return (latest, false),
        }
    }
}

async fn project(
    service: Arc<DraftService>,
    debounce: Duration,
    mut inputs: mpsc::UnboundedReceiver<DraftRequest>,
    publisher: watch::Sender<Projection>,
) {
    let mut last_drafted: Option<DraftMemoKey> = None;
    let mut queued: Option<DraftRequest> = None;
    let mut closed = false;

    loop {
        let first = match queued.take() {
            Some(request) => request,
            None if closed => break,
            None => match inputs.recv().await {
                Some(request) => request,
                None => break,
            },
        };

        let request = if closed {
            first
        } else {
            let (request, now_closed) = settle(first, debounce, &mut inputs).await;
            closed = now_closed;
            request
        };

        if !service.accepts(&request) {
            last_drafted = None;
            publisher.send_replace(Projection::Empty);
            continue;
        }

        let key = request.memo_key();
        if last_drafted == Some(key) {
            tracing::debug!("request unchanged since last draft, skipping regeneration");
            continue;
        }

        // the displayed draft is superseded from here on
        last_drafted = None;
        publisher.send_replace(Projection::Pending);

        let generation = service.generate_draft(&request);
        tokio::pin!(generation);

        let result = if closed {
            Some(generation.await)
        } else {
            tokio::select! {
                result = &mut generation => Some(result),
                next = inputs.recv() => match next {
                    Some(newer) => {
                        tracing::debug!("newer input arrived, dropping in-flight draft");
                        queued = Some(newer);
                        None
                    }
                    None => {
                        closed = true;
                        Some(generation.await)
                    }
                },
            }
        };

        match result {
            Some(DraftResult::Drafted(draft)) => {
                last_drafted = Some(key);
                publisher.send_replace(Projection::Ready(draft));
            }
            Some(DraftResult::Failed(failure)) => {
                last_drafted = None;
                publisher.send_replace(Projection::Failed(failure));
            }
            None => {}
        }
    }

    tracing::debug!("draft projector stopped");
}
