use super::*;
use crate::kernel::services::adapters::{
    LineStartMatcher, LineStartSkipWhitespaceMatcher, SearchMatcher, TokenStartMatcher,
    VerticalMatcher, WordStartMatcher,
};
use crate::kernel::services::ports::JumpOptions;

fn window(cursor_col: usize, text: &str) -> WindowContext {
    WindowContext::new(1, 7, Position::new(0, cursor_col)).with_lines(0, [text])
}

fn scan(
    window: &WindowContext,
    matcher: &dyn Matcher,
    direction: Option<HintDirection>,
    hint_position: HintPosition,
) -> Vec<JumpTarget> {
    let scan = LineScan {
        truncate: direction,
        direction,
        hint_position,
        max_scan_chars: 4096,
    };
    scan_line(window, &window.lines[0], matcher, scan)
}

fn cols(targets: &[JumpTarget]) -> Vec<usize> {
    targets.iter().map(|t| t.cursor.col).collect()
}

#[test]
fn token_start_splits_camel_case() {
    let matcher = TokenStartMatcher::new().unwrap();
    let w = window(0, "fooBarBaz");
    let targets = scan(&w, &matcher, None, HintPosition::Start);
    assert_eq!(cols(&targets), vec![0, 3, 6]);
    assert!(targets.iter().all(|t| t.window == 1 && t.buffer == 7));
    assert_eq!(targets[1].len, 3);
}

#[test]
fn after_cursor_truncates_to_cursor_column() {
    let w = window(5, "hello world");
    let targets = scan(
        &w,
        &WordStartMatcher,
        Some(HintDirection::AfterCursor),
        HintPosition::Start,
    );
    assert_eq!(cols(&targets), vec![6]);
}

#[test]
fn before_cursor_truncates_at_cursor_column() {
    let w = window(6, "hello world");
    let targets = scan(
        &w,
        &WordStartMatcher,
        Some(HintDirection::BeforeCursor),
        HintPosition::Start,
    );
    assert_eq!(cols(&targets), vec![0]);
}

#[test]
fn line_start_on_empty_line_yields_single_anchor() {
    let w = window(0, "");
    let targets = scan(&w, &LineStartMatcher, None, HintPosition::Start);
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].cursor, Position::new(0, 0));
    assert_eq!(targets[0].len, 0);
}

#[test]
fn zero_width_match_reports_zero_length_with_any_hint_position() {
    let w = window(0, "abc");
    for hint in [HintPosition::Start, HintPosition::Middle, HintPosition::End] {
        let targets = scan(&w, &LineStartMatcher, None, hint);
        assert_eq!(cols(&targets), vec![0]);
        assert_eq!(targets[0].len, 0);
    }
}

#[test]
fn scrolled_out_truncation_yields_nothing() {
    let mut w = window(8, "abcdefgh");
    w.leftmost_col = 4;
    let targets = scan(
        &w,
        &LineStartMatcher,
        Some(HintDirection::AfterCursor),
        HintPosition::Start,
    );
    assert!(targets.is_empty());

    // Unscrolled empty lines still get their anchor.
    let w = window(0, "");
    let targets = scan(
        &w,
        &LineStartMatcher,
        Some(HintDirection::AfterCursor),
        HintPosition::Start,
    );
    assert_eq!(cols(&targets), vec![0]);
}

#[test]
fn horizontal_scroll_biases_columns() {
    let mut w = window(0, "foo bar baz");
    w.leftmost_col = 4;
    let targets = scan(&w, &WordStartMatcher, None, HintPosition::Start);
    assert_eq!(cols(&targets), vec![4, 8]);
}

#[test]
fn width_bounds_the_visible_text() {
    let mut w = window(0, "foo bar baz");
    w.width = Some(5);
    let targets = scan(&w, &WordStartMatcher, None, HintPosition::Start);
    assert_eq!(cols(&targets), vec![0, 4]);
    assert_eq!(targets[1].len, 1);
}

#[test]
fn multibyte_columns_are_byte_offsets() {
    let w = window(0, "héllo wörld");
    let targets = scan(&w, &WordStartMatcher, None, HintPosition::Start);
    assert_eq!(cols(&targets), vec![0, 7]);

    let mut w = window(0, "你好 abc");
    w.leftmost_col = 2;
    let targets = scan(&w, &WordStartMatcher, None, HintPosition::Start);
    assert_eq!(cols(&targets), vec![3, 7]);
}

#[test]
fn hint_position_places_column_inside_span() {
    let w = window(0, "hello world");
    let middle = scan(&w, &WordStartMatcher, None, HintPosition::Middle);
    assert_eq!(cols(&middle), vec![2, 8]);
    let end = scan(&w, &WordStartMatcher, None, HintPosition::End);
    assert_eq!(cols(&end), vec![4, 10]);
}

#[test]
fn hint_position_end_lands_on_char_boundary() {
    let w = window(0, "wörld");
    let end = scan(&w, &WordStartMatcher, None, HintPosition::End);
    assert_eq!(cols(&end), vec![5]);
    let middle = scan(&w, &WordStartMatcher, None, HintPosition::Middle);
    assert!(w.lines[0].text.is_char_boundary(middle[0].cursor.col));
}

#[test]
fn oneshot_matchers_yield_at_most_one_target() {
    let w = window(0, "   x y");
    let targets = scan(&w, &LineStartSkipWhitespaceMatcher, None, HintPosition::Start);
    assert_eq!(cols(&targets), vec![3]);

    let w = window(0, "    ");
    let targets = scan(&w, &LineStartSkipWhitespaceMatcher, None, HintPosition::Start);
    assert!(targets.is_empty());
}

#[test]
fn successive_matches_do_not_overlap() {
    let opts = JumpOptions::default();
    let matcher = SearchMatcher::literal("aa", &opts).unwrap();
    let w = window(0, "aaaaa");
    let targets = scan(&w, &matcher, None, HintPosition::Start);
    assert_eq!(cols(&targets), vec![0, 2]);
    for pair in targets.windows(2) {
        assert!(pair[1].cursor.col >= pair[0].cursor.col + pair[0].len);
    }
}

#[test]
fn scan_respects_char_cap() {
    let w = window(0, "a b c d");
    let scan = LineScan {
        truncate: None,
        direction: None,
        hint_position: HintPosition::Start,
        max_scan_chars: 3,
    };
    let targets = scan_line(&w, &w.lines[0], &WordStartMatcher, scan);
    assert_eq!(cols(&targets), vec![0, 2]);
}

#[test]
fn vertical_matcher_aligns_to_leftmost_column() {
    let w = window(0, "abcdef");
    let targets = scan(&w, &VerticalMatcher, None, HintPosition::Start);
    assert_eq!(cols(&targets), vec![0]);
    assert_eq!(targets[0].len, 1);

    let mut w = window(0, "abcdef");
    w.leftmost_col = 2;
    let targets = scan(&w, &VerticalMatcher, None, HintPosition::Start);
    assert_eq!(cols(&targets), vec![2]);

    // Display cells, not chars: two cells in is the second CJK char.
    let mut w = window(0, "你好ab");
    w.leftmost_col = 2;
    let targets = scan(&w, &VerticalMatcher, None, HintPosition::Start);
    assert_eq!(cols(&targets), vec![3]);
    assert_eq!(targets[0].len, 3);

    // Lines ending left of the window edge have nothing visible.
    let mut w = window(0, "a");
    w.leftmost_col = 2;
    assert!(scan(&w, &VerticalMatcher, None, HintPosition::Start).is_empty());
}

#[test]
fn matcher_sees_direction_without_truncation() {
    use std::cell::RefCell;

    struct Recorder(RefCell<Vec<Option<HintDirection>>>);

    impl Matcher for Recorder {
        fn find(&self, _suffix: &str, cx: &MatchContext) -> Option<(usize, usize)> {
            self.0.borrow_mut().push(cx.direction);
            None
        }
    }

    let recorder = Recorder(RefCell::new(Vec::new()));
    let w = window(3, "hello world");
    let scan = LineScan {
        truncate: None,
        direction: Some(HintDirection::AfterCursor),
        hint_position: HintPosition::Start,
        max_scan_chars: 4096,
    };
    assert!(scan_line(&w, &w.lines[0], &recorder, scan).is_empty());
    assert_eq!(
        recorder.0.into_inner(),
        vec![Some(HintDirection::AfterCursor)]
    );
}

#[test]
fn columns_never_decrease() {
    let matcher = TokenStartMatcher::new().unwrap();
    let w = window(0, "let xmlHttp = parse(0x1F, buf[idx]) + 3.25;");
    let targets = scan(&w, &matcher, None, HintPosition::Start);
    assert!(targets.len() > 5);
    for pair in targets.windows(2) {
        assert!(pair[0].cursor.col < pair[1].cursor.col);
    }
}
