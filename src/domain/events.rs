use chrono::{DateTime, Utc};

use super::{ItemKind, MemberId};

/// イベント：資料が貸し出された
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemBorrowed {
    pub member_id: MemberId,
    pub member_name: String,
    pub item_title: String,
    pub item_kind: ItemKind,
    pub borrowed_at: DateTime<Utc>,
}
