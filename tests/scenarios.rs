//! End-to-end command scenarios
//!
//! Drives the text boundary the way the CLI does: one line in, at most
//! one printed line out.

use pizdb::{Archive, Error, Executor, MemoryArchive, Output, UndoEntry};

/// Run `lines`, returning what a session would print.
fn transcript(executor: &mut Executor, lines: &[&str]) -> Vec<String> {
    let mut printed = Vec::new();
    for line in lines {
        match executor.execute_line(line) {
            Ok(Some(output)) if !output.is_unit() => printed.push(output.to_string()),
            Ok(_) => {}
            Err(e) => printed.push(format!("(error) {}", e)),
        }
    }
    printed
}

// ============================================================================
// Reference Scenario
// ============================================================================

#[test]
fn test_reference_session() {
    let mut executor = Executor::new();
    let printed = transcript(
        &mut executor,
        &[
            "SET a 10", "SET b 20", "SET c 10", "COUNTS 10",
            "BEGIN", "SET a 30", "GET a", "ROLLBACK", "GET a",
            "BEGIN", "UNSET b", "GET b", "COMMIT", "GET b",
            "COUNTS 10",
        ],
    );

    // ROLLBACK leaves the first transaction open, so the second BEGIN is
    // rejected and UNSET b joins the same transaction.
    assert_eq!(
        printed,
        vec![
            "2",
            "30",
            "10",
            "(error) transaction already open",
            "NULL",
            "NULL",
            "2",
        ]
    );
    assert!(!executor.engine().in_transaction());
    assert!(executor.is_running());
}

#[test]
fn test_reference_session_with_commit_between() {
    let mut executor = Executor::new();
    let printed = transcript(
        &mut executor,
        &[
            "SET a 10", "SET b 20", "SET c 10", "COUNTS 10",
            "BEGIN", "SET a 30", "GET a", "ROLLBACK", "GET a", "COMMIT",
            "BEGIN", "UNSET b", "GET b", "COMMIT", "GET b",
            "COUNTS 10",
        ],
    );
    assert_eq!(printed, vec!["2", "30", "10", "NULL", "NULL", "2"]);
    assert_eq!(executor.engine().store().get("a"), Some(10));
    assert_eq!(executor.engine().store().get("b"), None);
}

// ============================================================================
// Session Behavior
// ============================================================================

mod session {
    use super::*;

    #[test]
    fn test_errors_do_not_end_session() {
        let mut executor = Executor::new();
        let printed = transcript(
            &mut executor,
            &["FETCH a", "SET a", "SET a ten", "COUNTS", "ROLLBACK", "SET a 1", "GET a"],
        );
        assert_eq!(
            printed,
            vec![
                "(error) unknown command: 'FETCH'",
                "(error) malformed argument for SET: missing value",
                "(error) malformed argument for SET: expected integer, got 'ten'",
                "(error) malformed argument for COUNTS: missing value",
                "(error) no active transaction",
                "1",
            ]
        );
        assert!(executor.is_running());
    }

    #[test]
    fn test_mixed_case_commands() {
        let mut executor = Executor::new();
        let printed = transcript(&mut executor, &["set A 5", "Get A", "counts 5", "gEt a"]);
        assert_eq!(printed, vec!["5", "1", "NULL"]);
    }

    #[test]
    fn test_keys_are_taken_verbatim() {
        let mut executor = Executor::new();
        let printed = transcript(
            &mut executor,
            &[
                "SET #tag 1", "SET it's 2", r"SET a\b 3", "SET \"q 4",
                "GET #tag", "GET it's", r"GET a\b", "GET ab", "GET \"q",
                "COUNTS 3",
            ],
        );
        assert_eq!(printed, vec!["1", "2", "3", "NULL", "4", "1"]);
    }

    #[test]
    fn test_quotes_do_not_group_operands() {
        let mut executor = Executor::new();
        let printed = transcript(&mut executor, &["SET \"two words\" 7"]);
        assert_eq!(
            printed,
            vec!["(error) malformed argument for SET: unexpected operand '7', usage: SET name value"]
        );
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let mut executor = Executor::new();
        assert_eq!(executor.execute_line("").unwrap(), None);
        assert_eq!(executor.execute_line("   \t").unwrap(), None);
    }

    #[test]
    fn test_end_stops_session() {
        let mut executor = Executor::new();
        assert_eq!(executor.execute_line("END").unwrap(), Some(Output::Unit));
        assert!(!executor.is_running());
    }

    #[test]
    fn test_end_with_open_transaction_keeps_it_uncommitted() {
        let mut executor = Executor::new();
        transcript(&mut executor, &["BEGIN", "SET a 1", "END"]);
        assert!(!executor.is_running());
        assert!(executor.engine().in_transaction());
        assert_eq!(executor.engine().store().get("a"), None);
    }
}

// ============================================================================
// Transactions
// ============================================================================

mod transactions {
    use super::*;

    #[test]
    fn test_repeated_rollback_is_stable() {
        let mut executor = Executor::new();
        let printed = transcript(
            &mut executor,
            &[
                "SET a 1", "BEGIN", "SET a 2", "ROLLBACK", "ROLLBACK", "GET a",
                "SET a 3", "UNSET a", "ROLLBACK", "GET a", "COMMIT", "GET a",
            ],
        );
        assert_eq!(printed, vec!["1", "1", "1"]);
    }

    #[test]
    fn test_set_then_unset_absent_key_in_transaction() {
        let mut executor = Executor::new();
        let printed = transcript(
            &mut executor,
            &["BEGIN", "SET x 4", "UNSET x", "GET x", "ROLLBACK", "GET x", "COMMIT", "GET x"],
        );
        assert_eq!(printed, vec!["NULL", "NULL", "NULL"]);
        assert_eq!(executor.engine().committed_len(), 0);
    }

    #[test]
    fn test_begin_twice_is_rejected() {
        let mut executor = Executor::new();
        executor.execute_line("BEGIN").unwrap();
        assert!(matches!(
            executor.execute_line("begin"),
            Err(Error::AlreadyOpen)
        ));
    }

    #[test]
    fn test_committed_log_reaches_archive() {
        let mut executor: Executor<MemoryArchive> = Executor::new();
        transcript(
            &mut executor,
            &["BEGIN", "SET a 1", "GET a", "UNSET a", "COUNTS 1", "COMMIT"],
        );

        let archive = executor.engine().archive();
        assert_eq!(archive.len(), 6);
        let kinds: Vec<_> = archive.records().iter().map(|r| r.entry.kind()).collect();
        assert_eq!(kinds, vec!["begin", "set", "get", "unset", "counts", "commit"]);
        assert!(archive.records().iter().all(|r| r.txn_id == 1));
        assert_eq!(archive.records()[0].entry, UndoEntry::Begin);
        assert_eq!(archive.records().last().unwrap().entry, UndoEntry::Commit);
    }
}
