//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_dispatch`] or [`expect_render`] to assert behavior.

use crate::component_framework::{Component, HostClient, HostRequest};
use crate::view::Node;
use tokio::sync::{mpsc, oneshot};

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// A client such as `UsersClient` only translates gestures into events, so
/// it can be tested without a running `ComponentHost`. The mock client sends
/// requests to a channel the test owns; the test inspects each request and
/// answers it, which makes success and failure paths deterministic.
pub fn create_mock_client<C: Component>(buffer_size: usize) -> (HostClient<C>, mpsc::Receiver<HostRequest<C>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (HostClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Dispatch request
pub async fn expect_dispatch<C: Component>(
    receiver: &mut mpsc::Receiver<HostRequest<C>>,
) -> Option<(C::Event, oneshot::Sender<Result<C::Outcome, C::Error>>)> {
    match receiver.recv().await {
        Some(HostRequest::Dispatch { event, respond_to }) => Some((event, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Render request
pub async fn expect_render<C: Component>(receiver: &mut mpsc::Receiver<HostRequest<C>>) -> Option<oneshot::Sender<Node>> {
    match receiver.recv().await {
        Some(HostRequest::Render { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot<C: Component>(receiver: &mut mpsc::Receiver<HostRequest<C>>) -> Option<oneshot::Sender<C>> {
    match receiver.recv().await {
        Some(HostRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::FormClient;
    use crate::domain::FieldId;
    use crate::messages::{FormEvent, FormOutcome};
    use crate::registration_form::RegistrationForm;
    use crate::view::Element;

    #[tokio::test]
    async fn test_mock_client() {
        let (inner, mut receiver) = create_mock_client::<RegistrationForm>(10);
        let client = FormClient::new(inner);

        let blur_task = tokio::spawn(async move { client.blur(FieldId::Email).await });

        let (event, responder) = expect_dispatch(&mut receiver).await.expect("Expected Dispatch request");
        assert_eq!(event, FormEvent::Blur { field: FieldId::Email });
        let outcome = FormOutcome::FieldChecked {
            field: FieldId::Email,
            check: FieldId::Email.check(""),
            submit_enabled: false,
        };
        responder.send(Ok(outcome.clone())).unwrap();

        let result = blur_task.await.unwrap();
        assert_eq!(result, Ok(outcome));
    }

    #[tokio::test]
    async fn test_mock_render() {
        let (inner, mut receiver) = create_mock_client::<RegistrationForm>(10);
        let client = FormClient::new(inner);

        let render_task = tokio::spawn(async move { client.render_form().await });

        let responder = expect_render(&mut receiver).await.expect("Expected Render request");
        responder.send(Element::new("p").text("stub").into()).unwrap();

        let node = render_task.await.unwrap().unwrap();
        assert_eq!(node.text_content(), "stub");
    }
}
