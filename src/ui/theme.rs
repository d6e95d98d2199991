//! 标记 -> 字形/颜色
//!
//! 数据层只携带不透明标记，具体外观在这里决定

use ratatui::style::Color;

use crate::config::GlyphStyle;
use crate::models::{ColorTag, IconTag};

pub const TEXT: Color = Color::White;
pub const MUTED: Color = Color::Gray;
pub const ACCENT: Color = Color::Rgb(59, 130, 246);
pub const HIGHLIGHT: Color = Color::Rgb(250, 204, 21);

pub fn color(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Blue => Color::Rgb(59, 130, 246),
        ColorTag::Gold => Color::Rgb(234, 179, 8),
        ColorTag::Emerald => Color::Rgb(16, 185, 129),
        ColorTag::Purple => Color::Rgb(168, 85, 247),
        ColorTag::Orange => Color::Rgb(249, 115, 22),
        ColorTag::Red => Color::Rgb(239, 68, 68),
        ColorTag::Slate => Color::Rgb(71, 85, 105),
    }
}

pub fn glyph(tag: IconTag, style: GlyphStyle) -> &'static str {
    match style {
        GlyphStyle::Unicode => match tag {
            IconTag::Plane => "✈",
            IconTag::Camera => "◉",
            IconTag::Building => "▥",
            IconTag::Sun => "☀",
            IconTag::Ticket => "◈",
            IconTag::ArrowRight => "→",
            IconTag::Star => "★",
            IconTag::Users => "☺",
        },
        GlyphStyle::Ascii => match tag {
            IconTag::Plane => ">",
            IconTag::Camera => "[o]",
            IconTag::Building => "#",
            IconTag::Sun => "o",
            IconTag::Ticket => "$",
            IconTag::ArrowRight => "->",
            IconTag::Star => "*",
            IconTag::Users => "@",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAGS: [IconTag; 8] = [
        IconTag::Plane,
        IconTag::Camera,
        IconTag::Building,
        IconTag::Sun,
        IconTag::Ticket,
        IconTag::ArrowRight,
        IconTag::Star,
        IconTag::Users,
    ];

    #[test]
    fn test_ascii_glyphs_are_ascii() {
        for tag in TAGS {
            assert!(glyph(tag, GlyphStyle::Ascii).is_ascii());
            assert!(!glyph(tag, GlyphStyle::Unicode).is_empty());
        }
    }

    #[test]
    fn test_glyphs_are_distinct() {
        for style in [GlyphStyle::Unicode, GlyphStyle::Ascii] {
            for (i, a) in TAGS.iter().enumerate() {
                for b in &TAGS[i + 1..] {
                    assert_ne!(glyph(*a, style), glyph(*b, style), "{:?} / {:?}", a, b);
                }
            }
        }
    }
}
