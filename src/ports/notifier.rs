use crate::domain::Member;
use async_trait::async_trait;

/// 通知ポート
///
/// 会員へのメッセージ配信を抽象化する。実装はメール、SMSなど。
/// 配信は投げっぱなしで、受信確認や失敗は扱わない。
/// どの実装に差し替えても呼び出し側の振る舞いは変わらない。
#[async_trait]
pub trait Notifier: Send + Sync {
    /// 配信チャネル名（"Email", "SMS" など）
    fn channel(&self) -> &str;

    /// 会員にメッセージを配信する
    async fn notify(&self, member: &Member, message: &str);
}
