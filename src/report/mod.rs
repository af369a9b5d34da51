use crate::domain::{Book, Magazine, Member};

pub const AVAILABLE_LABEL: &str = "Available ✅";
pub const UNAVAILABLE_LABEL: &str = "Unavailable ❌";

/// 貸出可否の表示ラベル
pub fn availability_label(available: bool) -> &'static str {
    if available {
        AVAILABLE_LABEL
    } else {
        UNAVAILABLE_LABEL
    }
}

/// 貸出状況のレポートを組み立てる
///
/// 会員ごとの貸出一覧、書籍一覧、雑誌一覧の順に出力する。
/// 並び順は各リポジトリの登録順に従う。
pub fn render(members: &[Member], books: &[Book], magazines: &[Magazine]) -> String {
    let mut lines = Vec::new();

    for member in members {
        lines.push(format!("Member: {}", member.name));
        for title in member.borrowed_titles() {
            lines.push(format!(" - Borrowed: {}", title));
        }
    }

    lines.push(String::new());
    lines.push("📚 Available Books:".to_string());
    for book in books {
        lines.push(format!(
            " - {} by {} [{}] - {}",
            book.title,
            book.author,
            book.isbn,
            availability_label(book.available)
        ));
    }

    lines.push(String::new());
    lines.push("📰 Available Magazines:".to_string());
    for magazine in magazines {
        lines.push(format!(
            " - {} (Issue {}) - {}",
            magazine.title,
            magazine.issue,
            availability_label(magazine.available)
        ));
    }

    let mut report = lines.join("\n");
    report.push('\n');
    report
}
