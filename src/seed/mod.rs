use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

use crate::adapters::in_memory::{BookCatalog, MagazineCatalog, MemberRegistry};
use crate::domain::{Book, Magazine, Member, MemberId};

/// 組み込みの初期データ
const BUILTIN_LIBRARY: &str = include_str!("library.json");

/// 初期データ読み込みのエラー
#[derive(Debug, Error)]
pub enum SeedError {
    /// JSONとして解釈できない
    #[error("Invalid seed data")]
    Parse(#[from] serde_json::Error),
}

/// 会員の初期データ
///
/// 貸出リストは起動時には常に空のため、名前とIDのみを持つ。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemberRecord {
    pub name: String,
    pub id: MemberId,
}

impl MemberRecord {
    pub fn into_member(self) -> Member {
        Member::new(self.name, self.id)
    }
}

/// 蔵書・会員の初期データ
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LibrarySeed {
    pub books: Vec<Book>,
    pub magazines: Vec<Magazine>,
    pub members: Vec<MemberRecord>,
}

/// 初期データから構築したリポジトリ一式
///
/// 所有者はエントリポイントで、プロセス全体で共有される状態は持たない。
#[derive(Clone)]
pub struct Repositories {
    pub members: Arc<MemberRegistry>,
    pub books: Arc<BookCatalog>,
    pub magazines: Arc<MagazineCatalog>,
}

impl LibrarySeed {
    /// バイナリに組み込まれた初期データ（書籍5冊・雑誌2誌・会員2名）
    pub fn builtin() -> Result<Self, SeedError> {
        Self::from_json(BUILTIN_LIBRARY)
    }

    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let seed: Self = serde_json::from_str(json)?;
        tracing::debug!(
            "Seed loaded: {} books, {} magazines, {} members",
            seed.books.len(),
            seed.magazines.len(),
            seed.members.len()
        );
        Ok(seed)
    }

    /// 登録順を保ったままリポジトリを構築する
    pub fn into_repositories(self) -> Repositories {
        Repositories {
            members: Arc::new(MemberRegistry::new(
                self.members
                    .into_iter()
                    .map(MemberRecord::into_member)
                    .collect(),
            )),
            books: Arc::new(BookCatalog::new(self.books)),
            magazines: Arc::new(MagazineCatalog::new(self.magazines)),
        }
    }
}
