use crate::domain::{Member, MemberNotified};
use crate::ports::notifier::Notifier;
use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};
use uuid::Uuid;

use super::compose;

/// Recording notifier
///
/// Keeps every delivery in memory instead of sending it.
/// Supports stateful testing: the channel label can mimic either the
/// email or the SMS variant.
pub struct RecordingNotifier {
    channel: String,
    deliveries: Mutex<Vec<MemberNotified>>,
}

impl RecordingNotifier {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            deliveries: Mutex::new(Vec::new()),
        }
    }

    /// Deliveries in the order they were made
    pub fn deliveries(&self) -> Vec<MemberNotified> {
        self.deliveries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Deliveries rendered the way the email/SMS notifiers print them
    pub fn lines(&self) -> Vec<String> {
        self.deliveries()
            .iter()
            .map(|d| compose(&d.channel, &d.member, &d.message))
            .collect()
    }
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        Self::new("Email")
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn channel(&self) -> &str {
        &self.channel
    }

    async fn notify(&self, member: &Member, message: &str) {
        let delivery = MemberNotified {
            delivery_id: Uuid::new_v4(),
            channel: self.channel.clone(),
            member: member.clone(),
            message: message.to_string(),
        };

        self.deliveries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(delivery);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_deliveries_in_order() {
        let notifier = RecordingNotifier::new("SMS");
        let alice = Member::new("Alice", "M001");
        let bob = Member::new("Bob", "M002");

        notifier.notify(&alice, "first").await;
        notifier.notify(&bob, "second").await;

        let deliveries = notifier.deliveries();
        assert_eq!(deliveries.len(), 2);
        assert_eq!(deliveries[0].member, alice);
        assert_eq!(deliveries[1].message, "second");
        assert_ne!(deliveries[0].delivery_id, deliveries[1].delivery_id);
        assert_eq!(notifier.lines(), vec!["SMS to Alice: first", "SMS to Bob: second"]);
    }
}
