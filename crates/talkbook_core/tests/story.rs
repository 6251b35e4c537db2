use pretty_assertions::assert_eq;
use talkbook_core::{
    build_talk_markdown, talk_body_lines, Block, HeadingLevel, Story, TalkIndex,
    BLANK_LINE_SPACER, SECTION_SPACER, TITLE_SPACER,
};

fn init_logging() {
    talkbook_logging::initialize_for_tests();
}

fn section(n: u32) -> Block {
    Block::Heading {
        level: HeadingLevel::Section,
        text: format!("Talk {n} - MKC Series"),
    }
}

fn paragraph(text: &str) -> Block {
    Block::Paragraph(text.to_string())
}

#[test]
fn title_block_is_dropped_when_file_opens_with_heading() {
    init_logging();
    let content = "# Talk 1 - Series\n\n```\nfirst\nsecond\n```";
    assert_eq!(talk_body_lines(content), vec!["first", "second", "```"]);
}

#[test]
fn files_without_heading_keep_every_line() {
    init_logging();
    let content = "plain\n\ntext";
    assert_eq!(talk_body_lines(content), vec!["plain", "", "text"]);
}

#[test]
fn short_files_with_heading_have_no_body() {
    init_logging();
    assert!(talk_body_lines("# only a title").is_empty());
    assert!(talk_body_lines("# title\n\n```").is_empty());
}

#[test]
fn title_page_has_title_spacer_subtitle_and_break() {
    init_logging();
    let mut story = Story::new();
    story.push_title_page("Collection", "All 58 talks from the MKC series");

    assert_eq!(
        story.blocks(),
        &[
            Block::Heading {
                level: HeadingLevel::Document,
                text: "Collection".to_string(),
            },
            Block::Spacer(TITLE_SPACER),
            Block::Heading {
                level: HeadingLevel::Subtitle,
                text: "All 58 talks from the MKC series".to_string(),
            },
            Block::PageBreak,
        ]
    );
}

#[test]
fn two_hello_talks_produce_expected_sequence() {
    init_logging();
    let mut story = Story::new();
    story.push_title_page("Collection", "Subtitle");
    for n in 1..=2 {
        let index = TalkIndex::new(n).unwrap();
        let content = build_talk_markdown(index, "Graydon's MKC Series", "hello");
        story.push_talk(index, "MKC Series", &content);
    }

    let blocks = story.into_blocks();
    assert_eq!(
        &blocks[4..],
        &[
            section(1),
            Block::Spacer(SECTION_SPACER),
            paragraph("hello"),
            Block::PageBreak,
            section(2),
            Block::Spacer(SECTION_SPACER),
            paragraph("hello"),
            Block::PageBreak,
        ]
    );
}

#[test]
fn blank_body_lines_become_spacers() {
    init_logging();
    let index = TalkIndex::new(5).unwrap();
    let content = build_talk_markdown(index, "Series", "first\n   \nsecond");
    let mut story = Story::new();
    story.push_talk(index, "MKC Series", &content);

    assert_eq!(
        story.blocks(),
        &[
            section(5),
            Block::Spacer(SECTION_SPACER),
            paragraph("first"),
            Block::Spacer(BLANK_LINE_SPACER),
            paragraph("second"),
            Block::PageBreak,
        ]
    );
}

#[test]
fn wrapped_prose_stays_one_paragraph_per_line() {
    init_logging();
    let index = TalkIndex::new(2).unwrap();
    let content = build_talk_markdown(index, "Series", "this sentence is\nwrapped over\nthree lines");
    let mut story = Story::new();
    story.push_talk(index, "MKC Series", &content);

    let paragraphs: Vec<_> = story
        .blocks()
        .iter()
        .filter_map(|block| match block {
            Block::Paragraph(text) => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(paragraphs, vec!["this sentence is", "wrapped over", "three lines"]);
}

#[test]
fn fence_markers_are_stripped_inside_lines() {
    init_logging();
    let index = TalkIndex::new(9).unwrap();
    let mut story = Story::new();
    story.push_talk(index, "MKC Series", "no heading\n```code```\n  ```  \r\nend\r");

    assert_eq!(
        story.blocks(),
        &[
            section(9),
            Block::Spacer(SECTION_SPACER),
            paragraph("no heading"),
            paragraph("code"),
            paragraph("end"),
            Block::PageBreak,
        ]
    );
}
