use crate::domain::{BorrowItem, ItemBorrowed};
use crate::ports::*;
use std::sync::{Arc, PoisonError};

use super::errors::{BorrowError, Result};

/// 貸出前の貸出可否チェック方針
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AvailabilityPolicy {
    /// 貸出可否を確認しない（貸出中の資料も再度貸し出せる）
    #[default]
    Permissive,
    /// 貸出中の資料は `BorrowError::ItemUnavailable` で拒否する
    RequireAvailable,
}

/// 貸出コーディネーター
///
/// 会員リポジトリと資料リポジトリを1つずつ保持し、両者を組み合わせて貸出を行う。
/// 資料リポジトリは呼び出しの合間に差し替えられる（書籍カタログ → 雑誌カタログなど）。
/// 保持するのはポートのみで、資料の具体的な種別は知らない。
#[derive(Clone)]
pub struct BorrowCoordinator {
    pub member_repository: Arc<dyn MemberRepository>,
    pub item_repository: Arc<dyn ItemRepository>,
    pub policy: AvailabilityPolicy,
}

impl BorrowCoordinator {
    pub fn new(
        member_repository: Arc<dyn MemberRepository>,
        item_repository: Arc<dyn ItemRepository>,
    ) -> Self {
        Self {
            member_repository,
            item_repository,
            policy: AvailabilityPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: AvailabilityPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// 資料リポジトリを差し替え、それまでのリポジトリを返す
    pub fn rebind_items(
        &mut self,
        item_repository: Arc<dyn ItemRepository>,
    ) -> Arc<dyn ItemRepository> {
        std::mem::replace(&mut self.item_repository, item_repository)
    }

    /// 資料を貸し出す
    ///
    /// 会員・資料の両方が見つかった場合のみ、会員の貸出リストに資料を追加し、
    /// 資料を貸出不可にする。見つからなかった場合は何も変更せず、何も通知しない。
    ///
    /// 失敗理由が必要な場合は`try_borrow()`を使う。
    pub fn borrow(&self, member_name: &str, item_title: &str) {
        if let Err(err) = self.try_borrow(BorrowItem::new(member_name, item_title)) {
            tracing::debug!("Borrow skipped: {}", err);
        }
    }

    /// 資料を貸し出し、結果を返す
    ///
    /// 処理フロー：
    /// 1. 会員リポジトリから会員を検索
    /// 2. 資料リポジトリから資料を検索
    /// 3. 両方見つかった場合のみ、貸出リストへの追加と貸出不可への更新を行う
    ///
    /// 2つの更新は会員のロックを保持したまま行い、
    /// 片方だけが反映された状態は外から観測できない。
    ///
    /// # エラー
    /// - MemberNotFound: 会員が存在しない
    /// - ItemNotFound: 資料が存在しない
    /// - ItemUnavailable: `RequireAvailable`方針で資料が貸出中
    ///
    /// いずれのエラーでも状態は変更されない。
    pub fn try_borrow(&self, cmd: BorrowItem) -> Result<ItemBorrowed> {
        // 1. 会員の検索
        let member = self
            .member_repository
            .check_availability(&cmd.member_name)
            .ok_or_else(|| BorrowError::MemberNotFound(cmd.member_name.clone()))?;

        // 2. 資料の検索
        let item = self
            .item_repository
            .check_availability(&cmd.item_title)
            .ok_or_else(|| BorrowError::ItemNotFound(cmd.item_title.clone()))?;

        let mut member_guard = member.lock().unwrap_or_else(PoisonError::into_inner);
        let mut item_guard = item.lock().unwrap_or_else(PoisonError::into_inner);

        if self.policy == AvailabilityPolicy::RequireAvailable && !item_guard.is_available() {
            return Err(BorrowError::ItemUnavailable(cmd.item_title));
        }

        // 3. 貸出の記録と貸出可否の更新
        member_guard.add_borrowed(Arc::clone(&item));
        item_guard.set_availability(false);

        let event = ItemBorrowed {
            member_id: member_guard.id.clone(),
            member_name: member_guard.name.clone(),
            item_title: item_guard.title().to_string(),
            item_kind: item_guard.kind(),
            borrowed_at: cmd.requested_at,
        };

        tracing::info!(
            "{} ({}) borrowed {} \"{}\"",
            event.member_name,
            event.member_id,
            event.item_kind,
            event.item_title
        );

        Ok(event)
    }
}
