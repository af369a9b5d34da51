#![allow(dead_code)]

use rusty_library_lending::adapters::in_memory::MemberRegistry;
use rusty_library_lending::ports::ItemRepository;
use rusty_library_lending::seed::{LibrarySeed, Repositories};

/// 組み込みデータでシナリオを実行した後のレポート
pub const EXPECTED_REPORT: &str = "\
Member: Lucas Ferreira
 - Borrowed: Clean Code
Member: Alice Johnson
 - Borrowed: Tech Today

📚 Available Books:
 - The Go Programming Language by Alan A. A. Donovan [978-0134190440] - Available ✅
 - Clean Code by Robert C. Martin [978-0132350884] - Unavailable ❌
 - Design Patterns by Erich Gamma [978-0201633610] - Unavailable ❌
 - The Pragmatic Programmer by Andrew Hunt [978-0201616223] - Available ✅
 - Refactoring by Martin Fowler [978-0201485677] - Unavailable ❌

📰 Available Magazines:
 - Tech Today (Issue 42) - Unavailable ❌
 - Science Weekly (Issue 10) - Unavailable ❌
";

/// 組み込みの初期データからリポジトリを構築
pub fn builtin_repositories() -> Repositories {
    LibrarySeed::builtin()
        .expect("Builtin seed must parse")
        .into_repositories()
}

/// 会員ごとの貸出タイトル一覧（登録順）
pub fn borrowed_titles(members: &MemberRegistry) -> Vec<(String, Vec<String>)> {
    members
        .members()
        .into_iter()
        .map(|member| {
            let titles = member.borrowed_titles();
            (member.name, titles)
        })
        .collect()
}

/// 指定会員の貸出タイトル一覧
pub fn titles(members: &MemberRegistry, name: &str) -> Vec<String> {
    borrowed_titles(members)
        .into_iter()
        .find(|(member_name, _)| member_name == name)
        .map(|(_, titles)| titles)
        .unwrap_or_default()
}

/// リポジトリ越しに資料の貸出可否を取得
pub fn available(repository: &dyn ItemRepository, title: &str) -> bool {
    let item = repository
        .check_availability(title)
        .expect("Item must exist");
    let item = item.lock().unwrap();
    item.is_available()
}
