// crates/routes-rpc/src/consumer.rs
//
// Stream consumer for server-streamed responses.
//
// Valid transitions:
//   Reading -> Done      (clean end of stream)
//   Reading -> Aborted   (error status or deadline)
// Done and Aborted are terminal.

use std::fmt;

use futures::{Stream, StreamExt};
use tokio::time::Instant;
use tonic::Status;

use routes_core::RoutesError;

/// Lifecycle states of a stream consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumerState {
    /// Pulling elements from the stream.
    Reading,
    /// The stream ended cleanly; nothing more will arrive.
    Done,
    /// The stream failed or the deadline passed.
    Aborted,
}

impl fmt::Display for ConsumerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsumerState::Reading => write!(f, "Reading"),
            ConsumerState::Done => write!(f, "Done"),
            ConsumerState::Aborted => write!(f, "Aborted"),
        }
    }
}

/// Outcome of a clean drain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamSummary {
    /// Elements emitted, in arrival order.
    pub received: usize,
    pub state: ConsumerState,
}

/// Drains one stream to exhaustion under a fixed deadline.
///
/// Every successfully received element is handed to the emit callback before
/// the next one is requested, so elements emitted before a failure stay
/// emitted. Nothing is emitted after the first error.
#[derive(Debug)]
pub struct StreamConsumer {
    method: &'static str,
    deadline: Instant,
    state: ConsumerState,
    received: usize,
}

impl StreamConsumer {
    /// Create a consumer in the Reading state.
    ///
    /// `deadline` bounds the whole drain, not each element.
    pub fn new(method: &'static str, deadline: Instant) -> Self {
        Self {
            method,
            deadline,
            state: ConsumerState::Reading,
            received: 0,
        }
    }

    pub fn state(&self) -> ConsumerState {
        self.state
    }

    pub fn received(&self) -> usize {
        self.received
    }

    /// Pull elements until the stream ends, fails, or the deadline passes.
    ///
    /// Returns the summary on a clean end. On failure the consumer is left in
    /// `Aborted` and the error says how many elements were emitted first.
    pub async fn drain<S, T, F>(&mut self, mut stream: S, mut emit: F) -> Result<StreamSummary, RoutesError>
    where
        S: Stream<Item = Result<T, Status>> + Unpin,
        F: FnMut(T),
    {
        if self.state != ConsumerState::Reading {
            return Err(RoutesError::InvalidState(format!(
                "{} stream consumer is {}, streams cannot be restarted",
                self.method, self.state
            )));
        }

        loop {
            let next = match tokio::time::timeout_at(self.deadline, stream.next()).await {
                Ok(next) => next,
                Err(_) => {
                    self.transition(ConsumerState::Aborted);
                    return Err(RoutesError::DeadlineExceeded {
                        method: self.method,
                    });
                }
            };

            match next {
                Some(Ok(element)) => {
                    self.received += 1;
                    tracing::debug!("{} stream: element {}", self.method, self.received);
                    emit(element);
                }
                Some(Err(status)) => {
                    self.transition(ConsumerState::Aborted);
                    return Err(RoutesError::Stream {
                        method: self.method,
                        received: self.received,
                        status,
                    });
                }
                None => {
                    self.transition(ConsumerState::Done);
                    return Ok(StreamSummary {
                        received: self.received,
                        state: self.state,
                    });
                }
            }
        }
    }

    fn transition(&mut self, new_state: ConsumerState) {
        tracing::debug!(
            "{} stream: {} -> {} after {} elements",
            self.method,
            self.state,
            new_state,
            self.received
        );
        self.state = new_state;
    }
}
