use talkbook_core::{
    paginate, text_width, Block, FontFace, HeadingLevel, PageGeometry, Story, StyleSheet,
};

fn story_of(blocks: Vec<Block>) -> Story {
    let mut story = Story::new();
    for block in blocks {
        story.push(block);
    }
    story
}

fn paragraph(text: &str) -> Block {
    Block::Paragraph(text.to_string())
}

#[test]
fn helvetica_widths_match_font_metrics() {
    assert_eq!(text_width(FontFace::Helvetica, 10.0, "i"), 2.22);
    assert_eq!(text_width(FontFace::HelveticaBold, 1000.0, "W"), 944.0);
    assert_eq!(text_width(FontFace::Helvetica, 1000.0, "Hello"), 2278.0);
    assert_eq!(text_width(FontFace::Helvetica, 12.0, ""), 0.0);
}

#[test]
fn letter_frame_uses_fixed_margins() {
    let geometry = PageGeometry::letter();
    assert_eq!(geometry.frame_width(), 468.0);
    assert_eq!(geometry.frame_top(), 720.0);
    assert_eq!(geometry.frame_bottom(), 18.0);
}

#[test]
fn empty_story_still_yields_one_blank_page() {
    let pages = paginate(&Story::new(), &PageGeometry::letter(), &StyleSheet::default());
    assert_eq!(pages.len(), 1);
    assert!(pages[0].is_blank());
}

#[test]
fn first_line_sits_below_top_margin_at_left_margin() {
    let pages = paginate(
        &story_of(vec![paragraph("hello")]),
        &PageGeometry::letter(),
        &StyleSheet::default(),
    );
    let line = &pages[0].lines[0];
    assert_eq!(line.text, "hello");
    assert_eq!(line.face, FontFace::Helvetica);
    assert_eq!(line.x, 72.0);
    assert_eq!(line.y, 710.0);
}

#[test]
fn title_is_centred_in_frame() {
    let styles = StyleSheet::default();
    let story = story_of(vec![Block::Heading {
        level: HeadingLevel::Document,
        text: "Title".to_string(),
    }]);
    let pages = paginate(&story, &PageGeometry::letter(), &styles);
    let line = &pages[0].lines[0];

    let width = text_width(FontFace::HelveticaBold, 18.0, "Title");
    let expected = 72.0 + (468.0 - width) / 2.0;
    assert!((line.x - expected).abs() < 0.001);
    assert_eq!(line.face, FontFace::HelveticaBold);
}

#[test]
fn long_paragraph_wraps_within_frame() {
    let styles = StyleSheet::default();
    let text = "lorem ipsum dolor sit amet ".repeat(40);
    let pages = paginate(&story_of(vec![paragraph(&text)]), &PageGeometry::letter(), &styles);

    let lines = &pages[0].lines;
    assert!(lines.len() > 1);
    for line in lines {
        assert!(text_width(FontFace::Helvetica, 10.0, &line.text) <= 468.0);
    }
    let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.text.split(' ')).collect();
    assert_eq!(rejoined, text.split_whitespace().collect::<Vec<_>>());
    assert_eq!(lines[0].y - lines[1].y, 12.0);
}

#[test]
fn oversized_word_is_broken_between_characters() {
    let word = "x".repeat(200);
    let pages = paginate(
        &story_of(vec![paragraph(&word)]),
        &PageGeometry::letter(),
        &StyleSheet::default(),
    );
    let lines = &pages[0].lines;
    assert!(lines.len() > 1);
    assert_eq!(lines.iter().map(|l| l.text.len()).sum::<usize>(), 200);
}

#[test]
fn whitespace_is_collapsed() {
    let pages = paginate(
        &story_of(vec![paragraph("a \t  b")]),
        &PageGeometry::letter(),
        &StyleSheet::default(),
    );
    assert_eq!(pages[0].lines[0].text, "a b");
}

#[test]
fn text_outside_latin1_is_replaced() {
    let pages = paginate(
        &story_of(vec![paragraph("caf\u{e9} \u{2192} done")]),
        &PageGeometry::letter(),
        &StyleSheet::default(),
    );
    assert_eq!(pages[0].lines[0].text, "caf\u{e9} ? done");
}

#[test]
fn lines_overflow_onto_next_page() {
    // 702 pt of frame at 12 pt leading holds 58 body lines.
    let blocks = (0..70).map(|i| paragraph(&format!("line {i}"))).collect();
    let pages = paginate(&story_of(blocks), &PageGeometry::letter(), &StyleSheet::default());

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].lines.len(), 58);
    assert_eq!(pages[1].lines.len(), 12);
    assert_eq!(pages[1].lines[0].text, "line 58");
    assert_eq!(pages[1].lines[0].y, 710.0);
}

#[test]
fn page_break_starts_new_page_but_never_a_blank_one() {
    let story = story_of(vec![
        paragraph("one"),
        Block::PageBreak,
        Block::PageBreak,
        paragraph("two"),
        Block::PageBreak,
    ]);
    let pages = paginate(&story, &PageGeometry::letter(), &StyleSheet::default());

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].lines[0].text, "one");
    assert_eq!(pages[1].lines[0].text, "two");
}

#[test]
fn spacer_moves_following_text_down() {
    let story = story_of(vec![paragraph("a"), Block::Spacer(30.0), paragraph("b")]);
    let pages = paginate(&story, &PageGeometry::letter(), &StyleSheet::default());
    let lines = &pages[0].lines;
    assert_eq!(lines[0].y - lines[1].y, 42.0);
}

#[test]
fn spacer_that_does_not_fit_ends_the_page() {
    let story = story_of(vec![paragraph("a"), Block::Spacer(800.0), paragraph("b")]);
    let pages = paginate(&story, &PageGeometry::letter(), &StyleSheet::default());
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[1].lines[0].y, 710.0);
}

#[test]
fn space_before_is_skipped_at_top_of_page() {
    let styles = StyleSheet::default();
    let subtitle = Block::Heading {
        level: HeadingLevel::Subtitle,
        text: "Sub".to_string(),
    };
    let pages = paginate(&story_of(vec![subtitle.clone()]), &PageGeometry::letter(), &styles);
    assert_eq!(pages[0].lines[0].y, 720.0 - 14.0);

    let pages = paginate(
        &story_of(vec![paragraph("a"), subtitle]),
        &PageGeometry::letter(),
        &styles,
    );
    // 12 pt leading of the body line, 12 pt space before, 14 pt font size.
    assert_eq!(pages[0].lines[1].y, 720.0 - 12.0 - 12.0 - 14.0);
}
