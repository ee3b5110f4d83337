//! Typed JetStream publisher bound to a single stream.

use std::marker::PhantomData;

use async_nats::jetstream::{Context, stream};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::{Error, Result, TRACING_TARGET_STREAM};

/// Typed publisher for a single JetStream stream.
///
/// The backing stream is created on first use if it does not exist yet.
/// Messages are serialized as JSON and every publish waits for the server
/// acknowledgement before returning.
#[derive(Debug, Clone)]
pub struct StreamPublisher<T>
where
    T: Serialize + Send + Sync + 'static,
{
    jetstream: Context,
    stream_name: String,
    _message: PhantomData<T>,
}

impl<T> StreamPublisher<T>
where
    T: Serialize + Send + Sync + 'static,
{
    /// Create a new stream publisher, ensuring the backing stream exists.
    #[instrument(skip(jetstream, stream_config), target = TRACING_TARGET_STREAM, fields(stream = %stream_config.name))]
    pub(crate) async fn new(jetstream: &Context, stream_config: stream::Config) -> Result<Self> {
        let stream_name = stream_config.name.clone();

        // Try to get existing stream first
        match jetstream.get_stream(&stream_name).await {
            Ok(_) => {
                debug!(
                    target: TRACING_TARGET_STREAM,
                    stream = %stream_name,
                    "Using existing stream"
                );
            }
            Err(_) => {
                // Stream doesn't exist, create it
                debug!(
                    target: TRACING_TARGET_STREAM,
                    stream = %stream_name,
                    "Creating new stream"
                );
                jetstream
                    .create_stream(stream_config)
                    .await
                    .map_err(|e| Error::stream_error(&stream_name, e.to_string()))?;
            }
        }

        Ok(Self {
            jetstream: jetstream.clone(),
            stream_name,
            _message: PhantomData,
        })
    }

    /// Publish a message to the given subject and wait for the server ack.
    #[instrument(skip(self, message), target = TRACING_TARGET_STREAM)]
    pub async fn publish(&self, subject: &str, message: &T) -> Result<()> {
        let payload = serde_json::to_vec(message)?;
        let payload_size = payload.len();

        self.jetstream
            .publish(subject.to_string(), payload.into())
            .await
            .map_err(|e| Error::delivery_failed(subject, e.to_string()))?
            .await
            .map_err(|e| Error::operation("publish_ack", e.to_string()))?;

        debug!(
            target: TRACING_TARGET_STREAM,
            subject = %subject,
            stream = %self.stream_name,
            payload_size = payload_size,
            "Published message"
        );
        Ok(())
    }

    /// Publish multiple messages to the given subject.
    #[instrument(skip(self, messages), target = TRACING_TARGET_STREAM)]
    pub async fn publish_batch(&self, subject: &str, messages: &[T]) -> Result<()> {
        let count = messages.len();
        for message in messages {
            self.publish(subject, message).await?;
        }

        debug!(
            target: TRACING_TARGET_STREAM,
            count = count,
            stream = %self.stream_name,
            "Published batch of messages"
        );
        Ok(())
    }

    /// Returns the name of the backing stream.
    #[inline]
    pub fn stream_name(&self) -> &str {
        &self.stream_name
    }
}
