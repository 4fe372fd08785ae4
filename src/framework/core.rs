//! # Core Actor Plumbing
//!
//! This module defines the generic building blocks shared by the register's
//! actors.
//!
//! ## Key Types
//!
//! - [`Service`]: The trait a component implements to run inside an actor.
//! - [`ServiceActor`]: The generic mailbox loop that owns a service.
//! - [`request`]: The typed send-and-await helper the clients are built on.
//! - [`FrameworkError`]: Channel transport errors (e.g. ActorClosed).
//!
//! # Architecture Note
//! The register's components are not CRUD-shaped (a cart merges repeated
//! adds, a ledger only appends, a catalog is replaced wholesale), so each
//! actor speaks its own request enum. What is written once and reused
//! everywhere is the plumbing around those enums: the sequential mailbox
//! loop, the oneshot request/response dance, and context injection at
//! `run()` ("late binding": dependencies are passed when the actor starts,
//! not when it is constructed).

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait a stateful component implements to be driven by a [`ServiceActor`].
///
/// The component owns its state; the actor owns the mailbox. Because each
/// actor processes its mailbox sequentially, `handle` gets `&mut self`
/// without any locking.
#[async_trait]
pub trait Service: Send + 'static {
    /// The request enum this service understands. Every variant carries a
    /// [`Response`] channel for its reply.
    type Request: Send;

    /// The runtime dependencies injected into the actor when it starts.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync + 'static;

    /// Handles one request to completion. Replies are sent through the
    /// response channel embedded in the request; a dropped receiver is not
    /// an error (the caller simply went away).
    async fn handle(&mut self, request: Self::Request, ctx: &Self::Context);
}

// =============================================================================
// 2. THE GENERIC ERRORS & RESPONSE CHANNEL
// =============================================================================

/// Errors that can occur within the actor plumbing itself.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}

/// Type alias for the one-shot response channel embedded in every request.
pub type Response<T, E> = oneshot::Sender<Result<T, E>>;

// =============================================================================
// 3. THE GENERIC ACTOR
// =============================================================================

/// The generic actor that owns a [`Service`] and its mailbox.
///
/// **Concurrency Model**:
/// Each `ServiceActor` processes its own messages *sequentially* in a loop,
/// so the service state needs no `Mutex` or `RwLock`: exclusive ownership
/// within the task is the whole synchronization story.
pub struct ServiceActor<S: Service> {
    receiver: mpsc::Receiver<S::Request>,
    service: S,
}

impl<S: Service> ServiceActor<S> {
    pub fn new(buffer_size: usize, service: S) -> (Self, mpsc::Sender<S::Request>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        (Self { receiver, service }, sender)
    }

    /// Runs the actor's event loop, processing messages until the channel
    /// closes.
    ///
    /// # Context Injection
    /// The `context` argument is handed to every `handle` call. This allows
    /// a service to reach dependencies (like another actor's client) that
    /// were created *after* the service was instantiated but *before* the
    /// loop started.
    pub async fn run(mut self, context: S::Context) {
        // Extract just the type name (e.g., "Cart" instead of "till::cart_actor::Cart")
        let service_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(service_type, "Actor started");

        while let Some(request) = self.receiver.recv().await {
            debug!(service_type, "Handling request");
            self.service.handle(request, &context).await;
        }

        info!(service_type, "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT HELPER
// =============================================================================

/// Sends one request and awaits its reply.
///
/// The closure builds the request variant around the response channel; the
/// service's own error type comes back through that channel, and transport
/// failures are folded into it via `From<FrameworkError>`.
pub async fn request<Req, T, E>(
    sender: &mpsc::Sender<Req>,
    build: impl FnOnce(Response<T, E>) -> Req,
) -> Result<T, E>
where
    E: From<FrameworkError>,
{
    let (respond_to, response) = oneshot::channel();
    sender
        .send(build(respond_to))
        .await
        .map_err(|_| FrameworkError::ActorClosed)?;
    response.await.map_err(|_| FrameworkError::ActorDropped)?
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- Minimal Service Definition ---

    struct Counter {
        count: u32,
    }

    enum CounterRequest {
        Bump { respond_to: Response<u32, CounterError> },
        Get { respond_to: Response<u32, CounterError> },
    }

    #[derive(Debug, thiserror::Error, PartialEq)]
    enum CounterError {
        #[error("Actor communication error: {0}")]
        Channel(#[from] FrameworkError),
    }

    #[async_trait]
    impl Service for Counter {
        type Request = CounterRequest;
        type Context = ();

        async fn handle(&mut self, request: CounterRequest, _ctx: &()) {
            match request {
                CounterRequest::Bump { respond_to } => {
                    self.count += 1;
                    let _ = respond_to.send(Ok(self.count));
                }
                CounterRequest::Get { respond_to } => {
                    let _ = respond_to.send(Ok(self.count));
                }
            }
        }
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_requests_processed_in_order() {
        let (actor, sender) = ServiceActor::new(8, Counter { count: 0 });
        let handle = tokio::spawn(actor.run(()));

        for expected in 1..=3 {
            let count = request(&sender, |respond_to| CounterRequest::Bump { respond_to })
                .await
                .unwrap();
            assert_eq!(count, expected);
        }

        let count = request(&sender, |respond_to| CounterRequest::Get { respond_to })
            .await
            .unwrap();
        assert_eq!(count, 3);

        drop(sender);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_closed_actor_reports_channel_error() {
        let (actor, sender) = ServiceActor::new(8, Counter { count: 0 });
        drop(actor);

        let err = request(&sender, |respond_to| CounterRequest::Get { respond_to })
            .await
            .unwrap_err();
        assert_eq!(err, CounterError::Channel(FrameworkError::ActorClosed));
    }
}
