use crate::domain::Member;
use crate::ports::notifier::Notifier;
use async_trait::async_trait;

use super::compose;

/// SMS notifier
///
/// Same contract as `EmailNotifier`; only the channel label differs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmsNotifier;

impl SmsNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for SmsNotifier {
    fn channel(&self) -> &str {
        "SMS"
    }

    async fn notify(&self, member: &Member, message: &str) {
        let line = compose(self.channel(), member, message);
        tracing::info!(
            target: "notifier",
            channel = self.channel(),
            member_id = %member.member_id,
            "{}",
            line
        );
    }
}
