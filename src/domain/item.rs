use serde::Deserialize;
use std::fmt;
use std::sync::{Arc, Mutex};

use super::{Isbn, IssueNumber};

/// 貸出対象の種別
///
/// ログとイベントでのみ使用する。貸出処理は種別で分岐しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Book,
    Magazine,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Book => "book",
            ItemKind::Magazine => "magazine",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 貸出可能な資料の能力
///
/// 書籍・雑誌など、種別ごとのメタデータに関係なく
/// タイトルと貸出可否フラグだけを公開する。
pub trait Borrowable: fmt::Debug + Send {
    /// タイトル
    fn title(&self) -> &str;

    /// 現在貸出可能か
    fn is_available(&self) -> bool;

    /// 貸出可否フラグを更新する
    fn set_availability(&mut self, available: bool);

    /// 資料の種別
    fn kind(&self) -> ItemKind;
}

/// 資料への共有ハンドル
///
/// カタログが所有する資料を、会員の貸出リストから参照するために使用する。
/// 会員側はハンドルを保持するだけで、資料を所有しない。
pub type ItemHandle = Arc<Mutex<dyn Borrowable>>;

/// 書籍
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: Isbn,
    pub available: bool,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: Isbn,
        available: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn,
            available,
        }
    }
}

impl Borrowable for Book {
    fn title(&self) -> &str {
        &self.title
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn set_availability(&mut self, available: bool) {
        self.available = available;
    }

    fn kind(&self) -> ItemKind {
        ItemKind::Book
    }
}

/// 雑誌
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Magazine {
    pub title: String,
    pub issue: IssueNumber,
    pub available: bool,
}

impl Magazine {
    pub fn new(title: impl Into<String>, issue: IssueNumber, available: bool) -> Self {
        Self {
            title: title.into(),
            issue,
            available,
        }
    }
}

impl Borrowable for Magazine {
    fn title(&self) -> &str {
        &self.title
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn set_availability(&mut self, available: bool) {
        self.available = available;
    }

    fn kind(&self) -> ItemKind {
        ItemKind::Magazine
    }
}
