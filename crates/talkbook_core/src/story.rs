use crate::markdown::{talk_body_lines, FENCE};
use crate::TalkIndex;

/// Gap between the document title and the subtitle (half an inch).
pub const TITLE_SPACER: f32 = 36.0;
/// Gap below each talk heading (0.2 inch).
pub const SECTION_SPACER: f32 = 14.4;
/// Gap standing in for one blank source line.
pub const BLANK_LINE_SPACER: f32 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// Title of the whole collection, first line of the title page.
    Document,
    /// Line below the document title.
    Subtitle,
    /// Heading that opens each talk.
    Section,
}

/// One unit of document content. Heights are in points.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { level: HeadingLevel, text: String },
    Paragraph(String),
    Spacer(f32),
    PageBreak,
}

/// Ordered content of the combined document, consumed once by layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Story {
    blocks: Vec<Block>,
}

impl Story {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    /// Title, spacer, subtitle, then a page break.
    pub fn push_title_page(&mut self, title: &str, subtitle: &str) {
        self.push(Block::Heading {
            level: HeadingLevel::Document,
            text: title.to_string(),
        });
        self.push(Block::Spacer(TITLE_SPACER));
        self.push(Block::Heading {
            level: HeadingLevel::Subtitle,
            text: subtitle.to_string(),
        });
        self.push(Block::PageBreak);
    }

    /// Appends one talk: its heading, its body line by line, then a page break.
    ///
    /// Every non-blank line becomes its own paragraph once fence markers are
    /// removed; wrapped prose is not rejoined. Blank lines become spacers.
    pub fn push_talk(&mut self, index: TalkIndex, section_label: &str, content: &str) {
        self.push(Block::Heading {
            level: HeadingLevel::Section,
            text: format!("Talk {index} - {section_label}"),
        });
        self.push(Block::Spacer(SECTION_SPACER));

        for line in talk_body_lines(content) {
            if line.trim().is_empty() {
                self.push(Block::Spacer(BLANK_LINE_SPACER));
                continue;
            }
            let stripped = line.replace(FENCE, "");
            let text = stripped.trim();
            if !text.is_empty() {
                self.push(Block::Paragraph(text.to_string()));
            }
        }

        self.push(Block::PageBreak);
    }
}
