use super::*;

fn rope_window(handle: WindowHandle, text: &str, viewport: Viewport, cursor: Position) -> RopeWindow {
    RopeWindow {
        window: handle,
        buffer: handle + 10,
        rope: Rope::from_str(text),
        viewport,
        cursor,
    }
}

fn rows(context: &WindowContext) -> Vec<usize> {
    context.lines.iter().map(|l| l.row).collect()
}

#[test]
fn contexts_cover_viewport_rows() {
    let provider = RopeWindowProvider::new(1).with_window(rope_window(
        1,
        "one\ntwo\nthree\nfour",
        Viewport::rows(10),
        Position::new(1, 0),
    ));

    let contexts = provider.window_contexts(None);
    assert_eq!(contexts.len(), 1);
    let context = &contexts[0];
    assert_eq!(rows(context), vec![0, 1, 2, 3]);
    assert_eq!(context.lines[2].text, "three");
    assert_eq!(context.buffer, 11);
    assert_eq!(context.cursor_line().map(|l| l.text.as_str()), Some("two"));
}

#[test]
fn contexts_strip_line_endings() {
    let provider = RopeWindowProvider::new(1).with_window(rope_window(
        1,
        "a\r\nb\n",
        Viewport::rows(10),
        Position::default(),
    ));
    let contexts = provider.window_contexts(None);
    let texts: Vec<&str> = contexts[0].lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "b", ""]);
}

#[test]
fn direction_clips_vertical_span() {
    let viewport = Viewport {
        top_row: 1,
        height: 4,
        leftmost_col: 2,
        width: Some(20),
    };
    let provider = RopeWindowProvider::new(1).with_window(rope_window(
        1,
        "0\n1\n2\n3\n4\n5\n6",
        viewport,
        Position::new(3, 0),
    ));

    let all = provider.window_contexts(None);
    assert_eq!(rows(&all[0]), vec![1, 2, 3, 4]);
    assert_eq!(all[0].leftmost_col, 2);
    assert_eq!(all[0].width, Some(20));

    let before = provider.window_contexts(Some(HintDirection::BeforeCursor));
    assert_eq!(rows(&before[0]), vec![1, 2, 3]);

    let after = provider.window_contexts(Some(HintDirection::AfterCursor));
    assert_eq!(rows(&after[0]), vec![3, 4]);
}

#[test]
fn focused_window_comes_first() {
    let mut provider = RopeWindowProvider::new(2);
    provider.push(rope_window(1, "a", Viewport::rows(1), Position::default()));
    provider.push(rope_window(2, "b", Viewport::rows(1), Position::default()));
    provider.push(rope_window(3, "c", Viewport::rows(1), Position::default()));

    assert_eq!(provider.focused_window(), 2);
    let order: Vec<WindowHandle> = provider
        .window_contexts(None)
        .iter()
        .map(|c| c.window)
        .collect();
    assert_eq!(order, vec![2, 1, 3]);

    provider.set_focused(3);
    let order: Vec<WindowHandle> = provider
        .window_contexts(None)
        .iter()
        .map(|c| c.window)
        .collect();
    assert_eq!(order, vec![3, 1, 2]);
}
