pub mod email;
pub mod recording;
pub mod sms;

pub use email::EmailNotifier;
pub use recording::RecordingNotifier;
pub use sms::SmsNotifier;

use crate::domain::Member;

/// Compose the delivered line, e.g. "Email to Alice: You have loaned 'Clean Code'."
pub fn compose(channel: &str, member: &Member, message: &str) -> String {
    format!("{} to {}: {}", channel, member.name, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_uses_channel_label_and_member_name() {
        let alice = Member::new("Alice", "M001");

        assert_eq!(
            compose("SMS", &alice, "Thank you for returning 'Clean Code'."),
            "SMS to Alice: Thank you for returning 'Clean Code'."
        );
    }
}
