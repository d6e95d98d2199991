//! 交通与住宿面板：去程、返程、住宿，顺序固定
//!
//! 高度不足时改用紧凑卡片，三张卡片始终同时可见

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::components::{badge, card_block, centered_horizontally};
use crate::config::GlyphStyle;
use crate::currency::format_inr;
use crate::models::{Accommodation, ColorTag, FlightSegment, IconTag, TripData};
use crate::ui::theme;

const MAX_WIDTH: u16 = 90;

/// 完整布局: 航段 6 + 6，间隔 1，住宿 5
pub const FULL_HEIGHT: u16 = 18;
/// 紧凑布局: 三张卡片各 4 行
pub const COMPACT_HEIGHT: u16 = 12;

/// 航段卡片的视图模型
#[derive(Debug, Clone, PartialEq)]
pub struct FlightCard {
    pub label: &'static str,
    pub accent: ColorTag,
    pub date: &'static str,
    pub subtitle: String,
    pub strip: String,
}

/// 航线示意: "BOM Mumbai ──── ✈ Direct Flight ──── DXB Dubai"
pub fn route_strip(segment: &FlightSegment, glyphs: GlyphStyle) -> String {
    let plane = theme::glyph(IconTag::Plane, glyphs);
    let rule = match glyphs {
        GlyphStyle::Unicode => "────",
        GlyphStyle::Ascii => "----",
    };
    match segment.endpoints() {
        Some((from, to)) => format!(
            "{} {}  {} {} {} {}  {} {}",
            from.code, from.city, rule, plane, segment.segment_type, rule, to.code, to.city
        ),
        None => format!("{}  {} {}", segment.route, plane, segment.segment_type),
    }
}

/// 去程只显示航司，返程附带航段说明
pub fn flight_cards(trip: &TripData, glyphs: GlyphStyle) -> [FlightCard; 2] {
    let outbound = &trip.flights.outbound;
    let inbound = &trip.flights.inbound;
    [
        FlightCard {
            label: "OUTBOUND",
            accent: ColorTag::Blue,
            date: outbound.date,
            subtitle: trip.details.airline.to_string(),
            strip: route_strip(outbound, glyphs),
        },
        FlightCard {
            label: "RETURN",
            accent: ColorTag::Slate,
            date: inbound.date,
            subtitle: format!("{} • {}", trip.details.airline, inbound.details),
            strip: route_strip(inbound, glyphs),
        },
    ]
}

/// 视口高度足够时用完整布局，否则用紧凑布局
pub fn content_height(viewport_height: u16) -> u16 {
    if viewport_height >= FULL_HEIGHT {
        FULL_HEIGHT
    } else {
        COMPACT_HEIGHT
    }
}

pub fn render_flights(buf: &mut Buffer, area: Rect, trip: &TripData, glyphs: GlyphStyle) {
    let area = centered_horizontally(area, MAX_WIDTH);
    let compact = area.height < FULL_HEIGHT;
    let constraints = if compact {
        [
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(0),
            Constraint::Length(4),
            Constraint::Min(0),
        ]
    } else {
        [
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Min(0),
        ]
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let [outbound, inbound] = flight_cards(trip, glyphs);
    render_flight_card(buf, chunks[0], &outbound, compact);
    render_flight_card(buf, chunks[1], &inbound, compact);
    render_hotel_card(buf, chunks[3], &trip.accommodation, compact);
}

fn render_flight_card(buf: &mut Buffer, area: Rect, card: &FlightCard, compact: bool) {
    let accent = theme::color(card.accent);
    let block = card_block(accent);
    let inner = block.inner(area);
    block.render(area, buf);

    let date = Span::styled(
        card.date,
        Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
    );
    let subtitle = Span::styled(card.subtitle.clone(), Style::default().fg(theme::MUTED));
    let strip = Line::from(card.strip.clone()).alignment(Alignment::Center);

    let lines = if compact {
        vec![
            Line::from(vec![badge(card.label, accent), Span::raw(" "), date, Span::raw("  "), subtitle]),
            strip,
        ]
    } else {
        vec![
            Line::from(badge(card.label, accent)),
            Line::from(date),
            Line::from(subtitle),
            strip,
        ]
    };
    Paragraph::new(lines).render(inner, buf);
}

fn render_hotel_card(buf: &mut Buffer, area: Rect, hotel: &Accommodation, compact: bool) {
    let accent = theme::color(ColorTag::Gold);
    let block = card_block(accent);
    let inner = block.inner(area);
    block.render(area, buf);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(16)])
        .split(inner);

    let name = Span::styled(
        hotel.name,
        Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
    );
    let descriptors = Line::from(Span::styled(
        format!("{} • {} • {}", hotel.rooms, hotel.nights, hotel.rating),
        Style::default().fg(theme::MUTED),
    ));
    let left = if compact {
        vec![
            Line::from(vec![badge("ACCOMMODATION", accent), Span::raw(" "), name]),
            descriptors,
        ]
    } else {
        vec![Line::from(badge("ACCOMMODATION", accent)), Line::from(name), descriptors]
    };
    Paragraph::new(left).render(chunks[0], buf);

    let mut right = vec![
        Line::from(Span::styled(
            format_inr(hotel.total),
            Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Total Cost", Style::default().fg(theme::MUTED))),
    ];
    if !compact {
        right.insert(0, Line::from(""));
    }
    Paragraph::new(right)
        .alignment(Alignment::Right)
        .render(chunks[1], buf);
}
