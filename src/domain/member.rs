use std::sync::{Arc, Mutex, PoisonError};

use super::{ItemHandle, MemberId};

/// 会員への共有ハンドル
pub type MemberHandle = Arc<Mutex<Member>>;

/// 会員
///
/// 不変条件：
/// - `borrowed` は追記のみ（この範囲では返却を扱わない）
/// - `borrowed` は資料を所有せず、カタログの資料を参照する
#[derive(Debug, Clone)]
pub struct Member {
    pub name: String,
    pub id: MemberId,
    borrowed: Vec<ItemHandle>,
}

impl Member {
    pub fn new(name: impl Into<String>, id: MemberId) -> Self {
        Self {
            name: name.into(),
            id,
            borrowed: Vec::new(),
        }
    }

    /// 貸出リストに資料を追加する
    pub fn add_borrowed(&mut self, item: ItemHandle) {
        self.borrowed.push(item);
    }

    /// 貸出中の資料（貸出順）
    pub fn borrowed(&self) -> &[ItemHandle] {
        &self.borrowed
    }

    /// 貸出中の資料のタイトル（貸出順）
    pub fn borrowed_titles(&self) -> Vec<String> {
        self.borrowed
            .iter()
            .map(|item| {
                item.lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .title()
                    .to_string()
            })
            .collect()
    }
}
