use serde::{Deserialize, Serialize};
use std::fmt;

/// 会員ID - "M001" のような会員番号
///
/// 一意であることが期待されるが、検索キーとしては使われない。
/// 照合は常にMember値全体で行う。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberId(String);

impl MemberId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 書籍 - タイトル・著者・出版年の組
///
/// 生成後は不変。同一性は持たず、全フィールドの値で等価判定する。
/// 同じ内容の書籍が2冊あれば、それらは区別されない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: i32,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
        }
    }
}

/// 在庫一覧での表示形式: "{title} by {author}"
impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}

/// 会員 - 氏名と会員番号の組
///
/// Bookと同様に値として扱い、貸出台帳のキーにもなる。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub member_id: MemberId,
}

impl Member {
    pub fn new(name: impl Into<String>, member_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            member_id: MemberId::new(member_id),
        }
    }
}
