use crate::application::borrow::BorrowCoordinator;
use crate::report;
use crate::seed::Repositories;

/// 組み込みデータでの貸出シナリオを実行し、レポートを返す
///
/// 1. 書籍カタログにつないだ状態で Lucas Ferreira が Clean Code を借りる
/// 2. 同じコーディネーターを雑誌カタログに差し替え、Alice Johnson が Tech Today を借りる
pub fn run(repositories: &Repositories) -> String {
    let Repositories {
        members,
        books,
        magazines,
    } = repositories;

    let mut coordinator = BorrowCoordinator::new(members.clone(), books.clone());

    coordinator.borrow("Lucas Ferreira", "Clean Code");
    coordinator.rebind_items(magazines.clone());
    coordinator.borrow("Alice Johnson", "Tech Today");

    report::render(&members.members(), &books.items(), &magazines.items())
}
