use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

pub const RETURN_POLICY_ENV: &str = "LIBRARY_RETURN_POLICY";
pub const DUPLICATE_POLICY_ENV: &str = "LIBRARY_DUPLICATE_POLICY";
pub const NOTIFIER_ENV: &str = "LIBRARY_NOTIFIER";

/// 設定のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?} (expected one of: {expected})")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// 貸出記録のない返却をどう扱うか
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReturnPolicy {
    /// どんな返却も受け付け、在庫に戻して通知する（既定）
    #[default]
    AcceptAnyReturn,
    /// 台帳に貸出がある場合だけ在庫に戻して通知する
    RequireActiveLoan,
}

impl FromStr for ReturnPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "accept-any" => Ok(ReturnPolicy::AcceptAnyReturn),
            "require-loan" => Ok(ReturnPolicy::RequireActiveLoan),
            _ => Err(ConfigError::InvalidValue {
                var: RETURN_POLICY_ENV,
                value: s.to_string(),
                expected: "accept-any, require-loan",
            }),
        }
    }
}

/// 同じ値の書籍が複数存在することを許すか
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DuplicatePolicy {
    /// 重複を許す（既定）
    #[default]
    Allow,
    /// 在庫にある、または貸出中の書籍の追加を拒否し、
    /// 在庫に既にある書籍の返却時は在庫に戻さない
    Reject,
}

impl FromStr for DuplicatePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allow" => Ok(DuplicatePolicy::Allow),
            "reject" => Ok(DuplicatePolicy::Reject),
            _ => Err(ConfigError::InvalidValue {
                var: DUPLICATE_POLICY_ENV,
                value: s.to_string(),
                expected: "allow, reject",
            }),
        }
    }
}

/// 図書館サービスのポリシー
///
/// 既定値は従来の振る舞い（返却は常に受け付け、重複も許す）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LibraryPolicy {
    pub return_policy: ReturnPolicy,
    pub duplicate_policy: DuplicatePolicy,
}

impl LibraryPolicy {
    /// 厳格なポリシー：貸出のない返却と重複をどちらも拒否する
    pub fn strict() -> Self {
        Self {
            return_policy: ReturnPolicy::RequireActiveLoan,
            duplicate_policy: DuplicatePolicy::Reject,
        }
    }

    /// 環境変数から読み込む。未設定の項目は既定値
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let return_policy = lookup(RETURN_POLICY_ENV)
            .map(|v| v.parse::<ReturnPolicy>())
            .transpose()?
            .unwrap_or_default();
        let duplicate_policy = lookup(DUPLICATE_POLICY_ENV)
            .map(|v| v.parse::<DuplicatePolicy>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            return_policy,
            duplicate_policy,
        })
    }
}

/// 通知チャネルの選択
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NotifierChannel {
    #[default]
    Email,
    Sms,
}

impl NotifierChannel {
    pub fn from_env() -> Result<Self, ConfigError> {
        std::env::var(NOTIFIER_ENV)
            .ok()
            .map(|v| v.parse::<NotifierChannel>())
            .transpose()
            .map(Option::unwrap_or_default)
    }
}

impl FromStr for NotifierChannel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(NotifierChannel::Email),
            "sms" => Ok(NotifierChannel::Sms),
            _ => Err(ConfigError::InvalidValue {
                var: NOTIFIER_ENV,
                value: s.to_string(),
                expected: "email, sms",
            }),
        }
    }
}
