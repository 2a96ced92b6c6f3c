//! TextBuffer property tests
//!
//! 公開APIだけを使い、文字列モデルと履歴の往復を検証する。

use plainpad::TextBuffer;
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

#[derive(Debug, Clone)]
enum Operation {
    SetText(String),
    Append(String),
    Insert { pos: usize, text: String },
    Delete { pos: usize, len: usize },
}

fn small_string() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![Just('a'), Just('B'), Just(' '), Just('\n'), Just('é'), Just('語')],
        0..12,
    )
    .prop_map(|chars| chars.into_iter().collect::<String>())
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        small_string().prop_map(Operation::SetText),
        small_string().prop_map(Operation::Append),
        (0usize..32, small_string()).prop_map(|(pos, text)| Operation::Insert { pos, text }),
        (0usize..32, 0usize..6).prop_map(|(pos, len)| Operation::Delete { pos, len }),
    ]
}

fn apply(buffer: &mut TextBuffer, op: &Operation) {
    match op {
        Operation::SetText(text) => buffer.set_text(text),
        Operation::Append(text) => buffer.append(text),
        Operation::Insert { pos, text } => {
            let pos = (*pos).min(buffer.len_chars());
            buffer.insert(pos, text).unwrap();
        }
        Operation::Delete { pos, len } => {
            let start = (*pos).min(buffer.len_chars());
            let end = (start + len).min(buffer.len_chars());
            buffer.delete(start..end).unwrap();
        }
    }
}

/// 文字単位で小文字化した左から右への走査。次の走査は直前の一致の終端から。
fn scan_model(text: &str, query: &str) -> Vec<(usize, usize)> {
    let fold = |ch: char| ch.to_lowercase().collect::<String>();
    let haystack: Vec<String> = text.chars().map(fold).collect();
    let needle: Vec<String> = query.chars().map(fold).collect();

    let mut spans = Vec::new();
    let mut start = 0usize;
    while !needle.is_empty() && start + needle.len() <= haystack.len() {
        if haystack[start..start + needle.len()] == needle[..] {
            spans.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }
    spans
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn set_text_round_trips(text in any::<String>()) {
        let mut buffer = TextBuffer::new();
        buffer.set_text(&text);
        prop_assert_eq!(buffer.text(), text.as_str());
        prop_assert_eq!(buffer.len_chars(), text.chars().count());
    }

    #[test]
    fn undo_and_redo_walk_the_history(
        initial in small_string(),
        ops in proptest::collection::vec(operation_strategy(), 0..16)
    ) {
        let mut buffer = TextBuffer::new();
        buffer.set_text(&initial);
        let start = buffer.text().to_string();
        let base_depth = buffer.history().undo_len();

        for op in &ops {
            apply(&mut buffer, op);
        }
        let end = buffer.text().to_string();
        let recorded = buffer.history().undo_len() - base_depth;

        for _ in 0..recorded {
            prop_assert!(buffer.undo());
        }
        prop_assert_eq!(buffer.text(), start.as_str());

        for _ in 0..recorded {
            prop_assert!(buffer.redo());
        }
        prop_assert_eq!(buffer.text(), end.as_str());
    }

    #[test]
    fn search_matches_left_to_right_scan(
        text in small_string(),
        query in "[aAbBéÉ ]{1,3}"
    ) {
        let mut buffer = TextBuffer::new();
        buffer.set_text(&text);
        let spans: Vec<(usize, usize)> = buffer
            .search(Some(query.as_str()))
            .into_iter()
            .map(|span| (span.start, span.end))
            .collect();
        prop_assert_eq!(spans, scan_model(&text, &query));
    }

    #[test]
    fn identical_set_text_discards_redo(
        first in small_string(),
        second in small_string()
    ) {
        prop_assume!(first != second);
        let mut buffer = TextBuffer::new();
        buffer.set_text(&first);
        buffer.set_text(&second);
        prop_assert!(buffer.undo());
        prop_assert!(buffer.can_redo());

        buffer.set_text(&first);
        prop_assert!(!buffer.can_redo());
        prop_assert!(!buffer.redo());
        prop_assert_eq!(buffer.text(), first.as_str());
    }
}
