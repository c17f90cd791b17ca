use std::fmt::Debug;

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

use crate::view::Node;

// =============================================================================
// 1. THE ABSTRACTION (Component trait with lifecycle hooks)
// =============================================================================

/// Trait that any UI component must implement to be driven by a ComponentHost
pub trait Component: Clone + Send + 'static {
    /// Initial inputs handed down by the owner.
    type Props: Send + Debug;
    type Event: Send + Debug;
    /// What the owner learns from handling an event (the callback payload).
    type Outcome: Send + Debug;
    type Error: std::error::Error + From<FrameworkError> + Send + 'static;

    /// Human readable component name used in spans.
    const NAME: &'static str;

    /// Construct the component from its props
    fn create(props: Self::Props) -> Self;

    // --- Lifecycle Hooks ---

    fn on_mount(&mut self) {}
    fn on_unmount(&mut self) {}

    /// Apply one event to the component state.
    fn update(&mut self, event: Self::Event) -> Result<Self::Outcome, Self::Error>;

    /// Render the current state.
    fn view(&self) -> Node;
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Component host closed")]
    HostClosed,
    #[error("Component host dropped the response")]
    HostDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<T>;

#[derive(Debug)]
pub enum HostRequest<C: Component> {
    Dispatch {
        event: C::Event,
        respond_to: Response<Result<C::Outcome, C::Error>>,
    },
    Render {
        respond_to: Response<Node>,
    },
    Snapshot {
        respond_to: Response<C>,
    },
}

// =============================================================================
// 3. THE GENERIC HOST (single update queue)
// =============================================================================

pub struct ComponentHost<C: Component> {
    receiver: mpsc::Receiver<HostRequest<C>>,
    component: C,
}

impl<C: Component> ComponentHost<C> {
    pub fn new(buffer_size: usize, props: C::Props) -> (Self, HostClient<C>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let host = Self {
            receiver,
            component: C::create(props),
        };
        let client = HostClient::new(sender);
        (host, client)
    }

    /// Processes requests one at a time until every client is dropped.
    #[instrument(name = "component_host", skip(self), fields(component = C::NAME))]
    pub async fn run(mut self) {
        self.component.on_mount();
        info!("Component mounted");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                HostRequest::Dispatch { event, respond_to } => {
                    debug!(?event, "Handling event");
                    let result = self.component.update(event);
                    if let Err(e) = &result {
                        warn!(error = %e, "Event rejected");
                    }
                    let _ = respond_to.send(result);
                }
                HostRequest::Render { respond_to } => {
                    let _ = respond_to.send(self.component.view());
                }
                HostRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(self.component.clone());
                }
            }
        }

        self.component.on_unmount();
        info!("Component unmounted");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct HostClient<C: Component> {
    sender: mpsc::Sender<HostRequest<C>>,
}

impl<C: Component> HostClient<C> {
    pub fn new(sender: mpsc::Sender<HostRequest<C>>) -> Self {
        Self { sender }
    }

    pub async fn dispatch(&self, event: C::Event) -> Result<C::Outcome, C::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(HostRequest::Dispatch { event, respond_to })
            .await
            .map_err(|_| FrameworkError::HostClosed)?;
        response.await.map_err(|_| FrameworkError::HostDropped)?
    }

    pub async fn render(&self) -> Result<Node, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(HostRequest::Render { respond_to })
            .await
            .map_err(|_| FrameworkError::HostClosed)?;
        response.await.map_err(|_| FrameworkError::HostDropped)
    }

    pub async fn snapshot(&self) -> Result<C, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(HostRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::HostClosed)?;
        response.await.map_err(|_| FrameworkError::HostDropped)
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
