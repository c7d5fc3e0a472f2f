use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use yougo_slack::events::{AckError, Acknowledge};

/// Per-request acknowledgement handle.
///
/// The HTTP 200 written after dispatch is what Slack treats as the ack; this
/// records that the handler asked for it and rejects a second call.
#[derive(Debug, Default)]
pub struct ResponseAck {
    acknowledged: AtomicBool,
}

impl ResponseAck {
    pub fn acknowledged(&self) -> bool {
        self.acknowledged.load(Ordering::Acquire)
    }
}

#[async_trait]
impl Acknowledge for ResponseAck {
    async fn ack(&self) -> Result<(), AckError> {
        if self.acknowledged.swap(true, Ordering::AcqRel) {
            return Err(AckError("interaction already acknowledged".to_owned()));
        }
        Ok(())
    }
}
