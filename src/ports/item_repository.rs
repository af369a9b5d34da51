use crate::domain::ItemHandle;

/// 資料リポジトリポート
///
/// 種別ごと（書籍・雑誌）のカタログを抽象化する。
/// 貸出処理はこのポート越しに資料を扱い、具体的な種別を知らない。
pub trait ItemRepository: Send + Sync {
    /// タイトルで資料を検索する
    ///
    /// 登録順に走査し、タイトルが完全一致（大文字小文字を区別）する
    /// 最初の資料を返す。見つからない場合は`None`。副作用なし。
    fn check_availability(&self, title: &str) -> Option<ItemHandle>;
}
