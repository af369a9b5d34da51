use chrono::{DateTime, Utc};

/// コマンド：資料を貸し出す
///
/// 会員は名前、資料はタイトルで指定する（完全一致）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorrowItem {
    pub member_name: String,
    pub item_title: String,
    pub requested_at: DateTime<Utc>,
}

impl BorrowItem {
    pub fn new(member_name: impl Into<String>, item_title: impl Into<String>) -> Self {
        Self {
            member_name: member_name.into(),
            item_title: item_title.into(),
            requested_at: Utc::now(),
        }
    }
}
