use thiserror::Error;

/// 貸出アプリケーション層のエラー
///
/// いずれのエラーでも、会員・資料の状態は変更されない。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BorrowError {
    /// 会員が存在しない
    #[error("Member not found: {0}")]
    MemberNotFound(String),

    /// 資料が存在しない
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// 資料が貸出中（`AvailabilityPolicy::RequireAvailable` のときのみ）
    #[error("Item is not available for borrowing: {0}")]
    ItemUnavailable(String),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, BorrowError>;
