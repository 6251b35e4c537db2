//! Greedy line wrapping and pagination of a [`Story`].
//!
//! All lengths are PDF points (1/72 inch) with the origin at the bottom-left
//! corner of the page, the way the renderer draws them.

use crate::metrics::{text_width, FontFace};
use crate::story::{Block, HeadingLevel, Story};

/// Page size and margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
}

impl PageGeometry {
    /// US Letter with one inch left, right and top margins and a quarter inch at the bottom.
    pub fn letter() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
            margin_left: 72.0,
            margin_right: 72.0,
            margin_top: 72.0,
            margin_bottom: 18.0,
        }
    }

    pub fn frame_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    pub fn frame_top(&self) -> f32 {
        self.height - self.margin_top
    }

    pub fn frame_bottom(&self) -> f32 {
        self.margin_bottom
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::letter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub face: FontFace,
    pub size: f32,
    pub leading: f32,
    pub space_before: f32,
    pub space_after: f32,
    pub alignment: Alignment,
}

/// The fixed styles of the combined document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSheet {
    pub title: TextStyle,
    pub subtitle: TextStyle,
    pub section: TextStyle,
    pub body: TextStyle,
}

impl StyleSheet {
    pub fn heading(&self, level: HeadingLevel) -> &TextStyle {
        match level {
            HeadingLevel::Document => &self.title,
            HeadingLevel::Subtitle => &self.subtitle,
            HeadingLevel::Section => &self.section,
        }
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            title: TextStyle {
                face: FontFace::HelveticaBold,
                size: 18.0,
                leading: 22.0,
                space_before: 0.0,
                space_after: 6.0,
                alignment: Alignment::Center,
            },
            subtitle: TextStyle {
                face: FontFace::HelveticaBold,
                size: 14.0,
                leading: 18.0,
                space_before: 12.0,
                space_after: 6.0,
                alignment: Alignment::Left,
            },
            section: TextStyle {
                face: FontFace::HelveticaBold,
                size: 18.0,
                leading: 22.0,
                space_before: 0.0,
                space_after: 6.0,
                alignment: Alignment::Left,
            },
            body: TextStyle {
                face: FontFace::Helvetica,
                size: 10.0,
                leading: 12.0,
                space_before: 0.0,
                space_after: 0.0,
                alignment: Alignment::Left,
            },
        }
    }
}

/// One line of text at its final position; `y` is the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub text: String,
    pub face: FontFace,
    pub size: f32,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<PlacedText>,
}

impl Page {
    pub fn is_blank(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Flows `story` onto pages. Always returns at least one page.
pub fn paginate(story: &Story, geometry: &PageGeometry, styles: &StyleSheet) -> Vec<Page> {
    let mut flow = Flow::new(geometry);
    for block in story.blocks() {
        match block {
            Block::Heading { level, text } => flow.text(styles.heading(*level), text),
            Block::Paragraph(text) => flow.text(&styles.body, text),
            Block::Spacer(height) => flow.spacer(*height),
            Block::PageBreak => flow.page_break(),
        }
    }
    flow.finish()
}

struct Flow<'a> {
    geometry: &'a PageGeometry,
    pages: Vec<Page>,
    current: Page,
    y: f32,
}

impl<'a> Flow<'a> {
    fn new(geometry: &'a PageGeometry) -> Self {
        Self {
            geometry,
            pages: Vec::new(),
            current: Page::default(),
            y: geometry.frame_top(),
        }
    }

    fn at_top(&self) -> bool {
        self.y >= self.geometry.frame_top()
    }

    fn new_page(&mut self) {
        let finished = std::mem::take(&mut self.current);
        self.pages.push(finished);
        self.y = self.geometry.frame_top();
    }

    fn text(&mut self, style: &TextStyle, text: &str) {
        let lines = wrap(&encodable(text), style, self.geometry.frame_width());
        if lines.is_empty() {
            return;
        }

        if !self.at_top() {
            self.y -= style.space_before;
        }

        for line in lines {
            if self.y - style.leading < self.geometry.frame_bottom() && !self.at_top() {
                self.new_page();
            }
            let x = match style.alignment {
                Alignment::Left => self.geometry.margin_left,
                Alignment::Center => {
                    let slack = self.geometry.frame_width() - text_width(style.face, style.size, &line);
                    self.geometry.margin_left + (slack / 2.0).max(0.0)
                }
            };
            self.current.lines.push(PlacedText {
                text: line,
                face: style.face,
                size: style.size,
                x,
                y: self.y - style.size,
            });
            self.y -= style.leading;
        }

        self.y = (self.y - style.space_after).max(self.geometry.frame_bottom());
    }

    fn spacer(&mut self, height: f32) {
        if self.y - height < self.geometry.frame_bottom() {
            self.new_page();
        } else {
            self.y -= height;
        }
    }

    fn page_break(&mut self) {
        if self.current.is_blank() {
            self.y = self.geometry.frame_top();
        } else {
            self.new_page();
        }
    }

    fn finish(mut self) -> Vec<Page> {
        if !self.current.is_blank() || self.pages.is_empty() {
            self.pages.push(self.current);
        }
        self.pages
    }
}

/// Greedy word wrap; a word wider than the frame is broken between characters.
fn wrap(text: &str, style: &TextStyle, max_width: f32) -> Vec<String> {
    let space = text_width(style.face, style.size, " ");
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0;

    for word in text.split_whitespace() {
        let width = text_width(style.face, style.size, word);

        if width > max_width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let mut pieces = break_word(word, style, max_width);
            let last = pieces.pop().unwrap_or_default();
            lines.extend(pieces);
            current_width = text_width(style.face, style.size, &last);
            current = last;
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
            current_width = width;
        } else if current_width + space + width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += space + width;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
            current_width = width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn break_word(word: &str, style: &TextStyle, max_width: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0.0;
    for c in word.chars() {
        let mut buf = [0u8; 4];
        let char_width = text_width(style.face, style.size, c.encode_utf8(&mut buf));
        if !piece.is_empty() && piece_width + char_width > max_width {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0.0;
        }
        piece.push(c);
        piece_width += char_width;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

/// The built-in fonts only cover Latin-1; anything else is drawn as `?`.
fn encodable(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\t' | '\n' | '\r' => ' ',
            c if c.is_control() || u32::from(c) > 0xFF => '?',
            c => c,
        })
        .collect()
}
