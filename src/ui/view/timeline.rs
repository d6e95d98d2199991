//! 行程面板：每天一张卡片，按数据顺序排列
//!
//! 卡片高度按换行后的实际行数计算，内容过高时由外层滚动

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::components::card_block;
use crate::config::GlyphStyle;
use crate::currency::format_inr;
use crate::models::{ColorTag, ItineraryDay};
use crate::ui::theme;

/// 单日卡片的视图模型
#[derive(Debug, Clone, PartialEq)]
pub struct DayCard {
    pub heading: String,
    pub date: &'static str,
    pub title: &'static str,
    pub glyph: &'static str,
    pub color: ColorTag,
    pub highlights: Vec<&'static str>,
    pub notes: &'static str,
    pub cost: String,
}

impl DayCard {
    fn body(&self) -> Paragraph<'_> {
        let accent = theme::color(self.color);
        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    format!(" {} ", self.glyph),
                    Style::default().fg(Color::White).bg(accent),
                ),
                Span::raw(" "),
                Span::styled(
                    self.heading.to_uppercase(),
                    Style::default().fg(theme::MUTED).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {}", self.date), Style::default().fg(theme::TEXT)),
            ]),
            Line::from(Span::styled(
                self.title,
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            )),
        ];
        lines.extend(self.highlights.iter().map(|h| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::DarkGray)),
                Span::raw(*h),
            ])
        }));
        lines.push(Line::from(Span::styled(
            self.notes,
            Style::default()
                .fg(theme::MUTED)
                .add_modifier(Modifier::ITALIC),
        )));
        Paragraph::new(lines).wrap(Wrap { trim: true })
    }

    /// 给定卡片宽度时所需的高度: 边框 2 + 正文 + 费用行 1
    fn height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(2);
        self.body().line_count(inner) as u16 + 3
    }
}

pub fn day_cards(days: &[ItineraryDay], glyphs: GlyphStyle) -> Vec<DayCard> {
    days.iter()
        .map(|d| DayCard {
            heading: format!("Day {}", d.day),
            date: d.date,
            title: d.title,
            glyph: theme::glyph(d.icon, glyphs),
            color: d.color,
            highlights: d.highlights.to_vec(),
            notes: d.notes,
            cost: format_inr(d.cost),
        })
        .collect()
}

/// 按宽度决定列数
pub fn columns_for(width: u16) -> usize {
    match width {
        120.. => 3,
        72.. => 2,
        _ => 1,
    }
}

fn column_split(area: Rect) -> Vec<Rect> {
    let columns = columns_for(area.width);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
        .split(area)
        .to_vec()
}

fn row_heights(cards: &[DayCard], width: u16) -> Vec<u16> {
    let columns = column_split(Rect::new(0, 0, width, 1));
    cards
        .chunks(columns.len())
        .map(|row| {
            row.iter()
                .zip(&columns)
                .map(|(card, col)| card.height(col.width))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

/// 全部卡片所需的总高度
pub fn content_height(days: &[ItineraryDay], glyphs: GlyphStyle, width: u16) -> u16 {
    row_heights(&day_cards(days, glyphs), width).iter().sum()
}

pub fn render_timeline(buf: &mut Buffer, area: Rect, days: &[ItineraryDay], glyphs: GlyphStyle) {
    let cards = day_cards(days, glyphs);
    if cards.is_empty() {
        return;
    }

    let heights = row_heights(&cards, area.width);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(heights.iter().map(|h| Constraint::Length(*h)))
        .split(area);

    let columns = columns_for(area.width);
    for (row_area, row_cards) in rows.iter().zip(cards.chunks(columns)) {
        for (col_area, card) in column_split(*row_area).iter().zip(row_cards) {
            render_card(buf, *col_area, card);
        }
    }
}

fn render_card(buf: &mut Buffer, area: Rect, card: &DayCard) {
    let block = card_block(Color::DarkGray);
    let inner = block.inner(area);
    block.render(area, buf);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    card.body().render(chunks[0], buf);

    Paragraph::new("Day Cost")
        .style(Style::default().fg(theme::MUTED))
        .render(chunks[1], buf);
    Paragraph::new(card.cost.as_str())
        .alignment(Alignment::Right)
        .style(Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD))
        .render(chunks[1], buf);
}
