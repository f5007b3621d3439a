use crate::domain::Member;
use crate::ports::notifier::Notifier;
use async_trait::async_trait;

use super::compose;

/// Email notifier
///
/// Does not send actual mail. The composed message is emitted as a
/// tracing event on the `notifier` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailNotifier;

impl EmailNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    fn channel(&self) -> &str {
        "Email"
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
