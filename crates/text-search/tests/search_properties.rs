//! Property-based tests for navigation, highlighting and bulk replacement

use std::ops::Range;

use proptest::prelude::*;
use quill_buffer::TextView;
use quill_text_search::{
    locator, FindSession, Highlighter, ReplaceSession, SearchOptions, Status, HIGHLIGHT_TAG,
};

const TEXT_CHARS: &[char] = &['a', 'A', 'b', 'é', 'É', ' ', 'ж', 'Ж', '\n'];
const TERM_CHARS: &[char] = &['a', 'A', 'b', 'é', 'É', ' ', 'ж', 'Ж'];
const FOREIGN_CHARS: &[char] = &['x', 'y', 'z', '-'];

fn chars(alphabet: &'static [char], len: Range<usize>) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(alphabet), len)
        .prop_map(|chars| chars.into_iter().collect())
}

fn options(case_sensitive: bool) -> SearchOptions {
    SearchOptions {
        case_sensitive,
        ..SearchOptions::default()
    }
}

/// Leftmost non-overlapping occurrences as char ranges, by plain comparison
fn occurrences(text: &str, term: &str, case_sensitive: bool) -> Vec<Range<usize>> {
    let fold = |c: char| {
        if case_sensitive {
            c
        } else {
            c.to_lowercase().next().unwrap_or(c)
        }
    };
    let hay: Vec<char> = text.chars().map(fold).collect();
    let needle: Vec<char> = term.chars().map(fold).collect();

    let mut found = Vec::new();
    let mut i = 0;
    while i + needle.len() <= hay.len() {
        if hay[i..i + needle.len()] == needle[..] {
            found.push(i..i + needle.len());
            i += needle.len();
        } else {
            i += 1;
        }
    }
    found
}

/// `text` with every range swapped for `replacement`
fn splice(text: &str, ranges: &[Range<usize>], replacement: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    let mut at = 0;
    for range in ranges {
        out.extend(&chars[at..range.start]);
        out.push_str(replacement);
        at = range.end;
    }
    out.extend(&chars[at..]);
    out
}

fn selection(view: &TextView) -> Range<usize> {
    let (start, end) = view.buffer().selection().unwrap();
    start.offset()..end.offset()
}

proptest! {
    // k calls to next visit every match in order, the next one wraps to the first
    #[test]
    fn next_cycles_through_every_match(
        text in chars(TEXT_CHARS, 0..60),
        term in chars(TERM_CHARS, 1..3),
        case_sensitive in any::<bool>(),
    ) {
        let expected = occurrences(&text, &term, case_sensitive);
        let mut view = TextView::from_text(&text);
        let mut find = FindSession::new(&mut view, options(case_sensitive));
        find.set_term(&mut view, &term).unwrap();

        if expected.is_empty() {
            prop_assert_eq!(find.next(&mut view).unwrap(), Status::NoMoreMatches);
            return Ok(());
        }

        for range in &expected {
            prop_assert_eq!(find.next(&mut view).unwrap(), Status::MatchFound);
            prop_assert_eq!(&selection(&view), range);
        }
        prop_assert_eq!(find.next(&mut view).unwrap(), Status::WrappedToStart);
        prop_assert_eq!(&selection(&view), &expected[0]);
    }

    // Highlighting twice gives the same spans, and every match is covered
    #[test]
    fn highlight_all_is_idempotent(
        text in chars(TEXT_CHARS, 0..60),
        term in chars(TERM_CHARS, 1..3),
        case_sensitive in any::<bool>(),
    ) {
        let expected = occurrences(&text, &term, case_sensitive);
        let mut view = TextView::from_text(&text);
        let highlighter = Highlighter::default();
        highlighter.ensure(&mut view);

        let count = highlighter
            .highlight_all(&mut view, &term, options(case_sensitive))
            .unwrap();
        let first = view.buffer().tag_spans(HIGHLIGHT_TAG);
        let again = highlighter
            .highlight_all(&mut view, &term, options(case_sensitive))
            .unwrap();

        prop_assert_eq!(count, expected.len());
        prop_assert_eq!(again, count);
        prop_assert_eq!(view.buffer().tag_spans(HIGHLIGHT_TAG), first.clone());
        for range in &expected {
            prop_assert!(first
                .iter()
                .any(|span| span.start <= range.start && range.end <= span.end));
        }
    }

    // Replacing with text that cannot contain the term leaves no occurrence
    #[test]
    fn replace_all_removes_every_occurrence(
        text in chars(TEXT_CHARS, 0..60),
        term in chars(TERM_CHARS, 1..3),
        replacement in chars(FOREIGN_CHARS, 1..4),
        case_sensitive in any::<bool>(),
    ) {
        let expected = occurrences(&text, &term, case_sensitive);
        let mut view = TextView::from_text(&text);
        let mut replace = ReplaceSession::new(&mut view, options(case_sensitive));
        replace.set_term(&mut view, &term).unwrap();
        replace.set_replacement(&replacement);

        let status = replace.replace_all(&mut view).unwrap();

        prop_assert_eq!(status, Status::ReplacedCount(expected.len()));
        prop_assert_eq!(view.buffer().text(), splice(&text, &expected, &replacement));
        let left = locator::find_all(&view, &term, options(case_sensitive)).unwrap();
        prop_assert!(left.is_empty());
        prop_assert_eq!(view.buffer().marker_count(), 2);
    }

    // Any replacement, including ones containing the term, is applied once per original match
    #[test]
    fn replace_all_terminates_with_original_count(
        text in chars(TEXT_CHARS, 0..40),
        term in chars(TERM_CHARS, 1..3),
        extra in chars(TEXT_CHARS, 0..3),
        case_sensitive in any::<bool>(),
    ) {
        let replacement = format!("{}{}", term, extra);
        let expected = occurrences(&text, &term, case_sensitive);
        let mut view = TextView::from_text(&text);
        let mut replace = ReplaceSession::new(&mut view, options(case_sensitive));
        replace.set_term(&mut view, &term).unwrap();
        replace.set_replacement(&replacement);

        let status = replace.replace_all(&mut view).unwrap();

        prop_assert_eq!(status, Status::ReplacedCount(expected.len()));
        prop_assert_eq!(view.buffer().text(), splice(&text, &expected, &replacement));
        prop_assert_eq!(view.buffer().user_action_count(), 1);
    }
}
