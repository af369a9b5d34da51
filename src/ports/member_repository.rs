use crate::domain::MemberHandle;

/// 会員リポジトリポート
///
/// 会員は下流で常に具体型として扱うため、資料ポートとは別に定義する。
pub trait MemberRepository: Send + Sync {
    /// 名前で会員を検索する
    ///
    /// 登録順に走査し、名前が完全一致する最初の会員を返す。
    /// 見つからない場合は`None`。副作用なし。
    fn check_availability(&self, name: &str) -> Option<MemberHandle>;
}
