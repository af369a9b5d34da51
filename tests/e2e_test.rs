use pretty_assertions::assert_eq;
use rusty_library_lending::application::borrow::BorrowCoordinator;
use rusty_library_lending::{report, scenario};
use std::process::Command;

mod common;

// ============================================================================
// E2Eテスト: 組み込みデータでの貸出シナリオ
// ============================================================================

#[test]
fn test_e2e_scenario_renders_report() {
    // Arrange
    let repos = common::builtin_repositories();

    // Act
    let output = scenario::run(&repos);

    // Assert
    assert_eq!(output, common::EXPECTED_REPORT);
}

#[test]
fn test_e2e_scenario_updates_members_and_catalogs() {
    // Arrange
    let repos = common::builtin_repositories();

    // Act
    scenario::run(&repos);

    // Assert: Step 1 は書籍、Step 2 は差し替え後の雑誌
    let lucas = common::titles(&repos.members, "Lucas Ferreira");
    let alice = common::titles(&repos.members, "Alice Johnson");
    assert_eq!(lucas, vec!["Clean Code"]);
    assert_eq!(alice, vec!["Tech Today"]);
    assert!(!common::available(&*repos.books, "Clean Code"));
    assert!(!common::available(&*repos.magazines, "Tech Today"));
}

#[test]
fn test_e2e_unknown_member_after_scenario_changes_nothing() {
    // Arrange
    let repos = common::builtin_repositories();
    scenario::run(&repos);
    let coordinator = BorrowCoordinator::new(repos.members.clone(), repos.books.clone());

    // Act: 存在しない会員（何も起きない）
    coordinator.borrow("Unknown Person", "Clean Code");

    // Assert
    let members = repos.members.members();
    let books = repos.books.items();
    let magazines = repos.magazines.items();
    let output = report::render(&members, &books, &magazines);
    assert_eq!(output, common::EXPECTED_REPORT);
}

#[test]
fn test_e2e_report_before_any_borrow() {
    let repos = common::builtin_repositories();
    let members = repos.members.members();
    let books = repos.books.items();
    let magazines = repos.magazines.items();

    let output = report::render(&members, &books, &magazines);

    let header = "Member: Lucas Ferreira\nMember: Alice Johnson\n\n";
    let clean_code = " - Clean Code by Robert C. Martin [978-0132350884] - Available ✅\n";
    let tech_today = " - Tech Today (Issue 42) - Available ✅\n";
    let science_weekly = " - Science Weekly (Issue 10) - Unavailable ❌\n";
    assert!(output.starts_with(header));
    assert!(output.contains(clean_code));
    assert!(output.contains(tech_today));
    assert!(output.contains(science_weekly));
}

// ============================================================================
// E2Eテスト: バイナリの標準出力
// ============================================================================

#[test]
fn test_e2e_binary_prints_report() {
    // Act
    let binary = env!("CARGO_BIN_EXE_rusty-library-lending");
    let output = Command::new(binary)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run binary");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, common::EXPECTED_REPORT);
}
