//! 视图层模块
//!
//! 页眉 + 标签栏 + 当前面板 + 页脚。任一时刻只渲染一个面板。
//!
//! 面板先按完整高度画到离屏缓冲区，再按滚动偏移拷贝到视口。

pub mod components;
pub mod costs;
pub mod flights;
pub mod timeline;

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Tabs},
};

use super::state::{App, Tab};
use super::theme;
use crate::currency::format_inr;
use crate::models::IconTag;
use components::card_block;
use costs::render_costs;
use flights::render_flights;
use timeline::render_timeline;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // 页眉
            Constraint::Length(3), // 标签栏
            Constraint::Min(10),   // 面板
            Constraint::Length(3), // 页脚
            Constraint::Length(1), // 帮助
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_tab_bar(frame, app, chunks[1]);
    render_panel(frame, app, chunks[2]);
    render_footer(frame, app, chunks[3]);
    render_help(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let details = &app.trip.details;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(24)])
        .split(area);

    let left = vec![
        Line::from(Span::styled(
            details.dates.to_uppercase(),
            Style::default()
                .fg(theme::HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            details.title,
            Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "{} {}   {} {}",
                theme::glyph(IconTag::Users, app.glyphs),
                details.travelers,
                theme::glyph(IconTag::Building, app.glyphs),
                app.trip.accommodation.name
            ),
            Style::default().fg(theme::MUTED),
        )),
    ];
    frame.render_widget(
        Paragraph::new(left).block(Block::default().borders(Borders::ALL)),
        chunks[0],
    );

    let right = vec![
        Line::from(Span::styled("GRAND TOTAL", Style::default().fg(theme::MUTED))),
        Line::from(Span::styled(
            format_inr(details.grand_total),
            Style::default()
                .fg(theme::HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Approx ±10%", Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(
        Paragraph::new(right)
            .alignment(Alignment::Right)
            .block(Block::default().borders(Borders::ALL)),
        chunks[1],
    );
}

fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| {
            Line::from(vec![
                Span::styled(
                    format!("{}:", tab.shortcut()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(tab.title()),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(theme::MUTED))
        .highlight_style(
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(" │ ");

    frame.render_widget(tabs, area);
}

/// 面板在给定宽度与视口高度下的内容高度
fn panel_height(app: &App, width: u16, viewport_height: u16) -> u16 {
    match app.tab {
        Tab::Timeline => timeline::content_height(app.trip.days, app.glyphs, width),
        Tab::Costs => costs::content_height(app.trip, width),
        Tab::Flights => flights::content_height(viewport_height),
    }
}

fn render_panel(frame: &mut Frame, app: &mut App, area: Rect) {
    if area.is_empty() {
        return;
    }

    // 内容超出视口时让出最右一列给滚动条
    let mut width = area.width;
    let mut height = panel_height(app, width, area.height);
    let overflow = height > area.height;
    if overflow {
        width = width.saturating_sub(1);
        height = panel_height(app, width, area.height);
    }
    let height = height.max(area.height);

    let max_scroll = height - area.height;
    app.scroll = app.scroll.min(max_scroll);

    let content_area = Rect::new(0, 0, width, height);
    let mut content = Buffer::empty(content_area);
    match app.tab {
        Tab::Timeline => render_timeline(&mut content, content_area, app.trip.days, app.glyphs),
        Tab::Costs => render_costs(&mut content, content_area, app.trip),
        Tab::Flights => render_flights(&mut content, content_area, app.trip, app.glyphs),
    }
    blit(&content, app.scroll, frame.buffer_mut(), area);

    if overflow {
        let mut state = ScrollbarState::new(max_scroll as usize + 1)
            .position(app.scroll as usize);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut state,
        );
    }
}

/// 将离屏内容从第 offset 行开始拷贝到视口
fn blit(content: &Buffer, offset: u16, dest: &mut Buffer, area: Rect) {
    let width = content.area.width.min(area.width);
    for y in 0..area.height {
        for x in 0..width {
            dest[(area.x + x, area.y + y)] = content[(x, y + offset)].clone();
        }
    }
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let highlights = app.trip.highlights;
    if highlights.is_empty() {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, highlights.len() as u32);
            highlights.len()
        ])
        .split(area);

    for (tile, highlight) in chunks.iter().zip(highlights) {
        let color = theme::color(highlight.color);
        let label = Span::styled(
            highlight.label.to_uppercase(),
            Style::default().fg(theme::MUTED),
        );
        let glyph = theme::glyph(highlight.icon, app.glyphs);
        // 窄格子里只保留文字
        let inner_width = tile.width.saturating_sub(2) as usize;
        let line = if label.width() + Span::raw(glyph).width() + 1 > inner_width {
            Line::from(label)
        } else {
            Line::from(vec![
                Span::styled(glyph, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::raw(" "),
                label,
            ])
        };
        frame.render_widget(
            Paragraph::new(line)
                .alignment(Alignment::Center)
                .block(card_block(Color::DarkGray)),
            *tile,
        );
    }
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new("[1/2/3] Tabs  [Tab/h/l] Switch  [j/k] Scroll  [q] Quit")
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    use super::*;
    use crate::config::GlyphStyle;
    use crate::trip_data::TRIP;
    use crate::ui::actions::Action;

    const WIDTH: u16 = 150;
    const HEIGHT: u16 = 44;
    /// 终端默认尺寸
    const SMALL: (u16, u16) = (80, 24);

    fn draw_at(app: &mut App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn draw(app: &mut App) -> Buffer {
        draw_at(app, WIDTH, HEIGHT)
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn render_tab_at(tab: Tab, (width, height): (u16, u16)) -> String {
        let mut app = App::new(&TRIP, GlyphStyle::Ascii);
        app.dispatch(Action::SelectTab(tab));
        buffer_text(&draw_at(&mut app, width, height))
    }

    fn render_tab(tab: Tab) -> String {
        render_tab_at(tab, (WIDTH, HEIGHT))
    }

    /// 一直向下滚动到底，收集每一帧的文本
    fn scroll_through(app: &mut App, (width, height): (u16, u16)) -> Vec<String> {
        let mut frames = vec![buffer_text(&draw_at(app, width, height))];
        for _ in 0..100 {
            let before = app.scroll;
            app.dispatch(Action::ScrollDown);
            let text = buffer_text(&draw_at(app, width, height));
            if app.scroll == before {
                break;
            }
            frames.push(text);
        }
        frames
    }

    const TIMELINE_MARKER: &str = "Day Cost";
    const COSTS_MARKER: &str = "Budget Distribution";
    const FLIGHTS_MARKER: &str = "ACCOMMODATION";

    fn assert_one_panel(tab: Tab, text: &str) {
        let visible = [
            text.contains(TIMELINE_MARKER),
            text.contains(COSTS_MARKER),
            text.contains(FLIGHTS_MARKER),
        ];
        assert_eq!(visible.iter().filter(|v| **v).count(), 1, "{:?}", tab);
        assert!(visible[tab.index()], "{:?}", tab);
    }

    #[test]
    fn test_exactly_one_panel_per_tab() {
        for tab in Tab::ALL {
            assert_one_panel(tab, &render_tab(tab));
        }
    }

    #[test]
    fn test_exactly_one_panel_per_tab_small_terminal() {
        for tab in Tab::ALL {
            assert_one_panel(tab, &render_tab_at(tab, SMALL));
        }
    }

    #[test]
    fn test_header_on_every_tab() {
        for size in [(WIDTH, HEIGHT), SMALL] {
            for tab in Tab::ALL {
                let text = render_tab_at(tab, size);
                assert!(text.contains("Dubai Family Extravaganza 2026"));
                assert!(text.contains("₹8,60,490"));
                assert!(text.contains("10 Travelers"));
            }
        }
    }

    #[test]
    fn test_timeline_cards_in_order() {
        let text = render_tab(Tab::Timeline);
        let positions: Vec<usize> = TRIP
            .days
            .iter()
            .map(|d| text.find(&format!("DAY {}", d.day)).unwrap())
            .collect();
        assert_eq!(positions.len(), 6);
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.contains("₹13,000"));
        assert!(text.contains("Warner Bros World"));
    }

    #[test]
    fn test_timeline_shows_every_line_on_tall_terminal() {
        let text = render_tab(Tab::Timeline);
        for day in TRIP.days {
            for highlight in day.highlights {
                assert!(text.contains(highlight), "{}", highlight);
            }
            assert!(text.contains(day.notes), "{}", day.notes);
        }
    }

    #[test]
    fn test_timeline_scrolls_on_small_terminal() {
        let mut app = App::new(&TRIP, GlyphStyle::Ascii);
        let frames = scroll_through(&mut app, SMALL);
        assert!(frames[0].contains("DAY 1"));
        assert!(frames[0].contains("Arrive Dubai"));
        assert!(frames.len() > 1);

        let seen = frames.concat();
        for day in TRIP.days {
            assert!(seen.contains(&format!("DAY {}", day.day)));
            for highlight in day.highlights {
                assert!(seen.contains(highlight), "{}", highlight);
            }
        }
        // 第一天的备注在窄卡片里会换行
        assert!(seen.contains("Hotel cost excluded here"));
        for day in &TRIP.days[1..] {
            assert!(seen.contains(day.notes), "{}", day.notes);
        }
    }

    #[test]
    fn test_scroll_clamps_to_bottom() {
        let mut app = App::new(&TRIP, GlyphStyle::Ascii);
        for _ in 0..200 {
            app.dispatch(Action::ScrollDown);
        }
        draw_at(&mut app, SMALL.0, SMALL.1);
        let bottom = app.scroll;
        assert!(bottom > 0 && bottom < 200);

        app.dispatch(Action::ScrollUp);
        draw_at(&mut app, SMALL.0, SMALL.1);
        assert_eq!(app.scroll, bottom - 1);
    }

    #[test]
    fn test_scroll_is_zero_when_content_fits() {
        let mut app = App::new(&TRIP, GlyphStyle::Ascii);
        app.dispatch(Action::SelectTab(Tab::Flights));
        app.dispatch(Action::ScrollDown);
        draw_at(&mut app, SMALL.0, SMALL.1);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_costs_legend() {
        let text = render_tab(Tab::Costs);
        assert!(text.contains("26% of total"));
        assert!(text.contains("42% of total"));
        assert!(text.contains("32% of total"));
        assert!(text.contains("₹3,60,000"));
        assert!(!text.contains("DAY 1"));
    }

    #[test]
    fn test_costs_legend_small_terminal() {
        let text = render_tab_at(Tab::Costs, SMALL);
        for item in TRIP.costs {
            assert!(text.contains(item.name), "{}", item.name);
        }
        for amount in ["₹2,23,790", "₹3,60,000", "₹2,76,700"] {
            assert!(text.contains(amount), "{}", amount);
        }
        assert!(text.contains("26% of total"));
        assert!(text.contains("42% of total"));
        assert!(text.contains("32% of total"));
        assert!(text.contains("Summary:"));
    }

    #[test]
    fn test_flights_order() {
        let text = render_tab(Tab::Flights);
        let outbound = text.find("OUTBOUND").unwrap();
        let inbound = text.find("RETURN").unwrap();
        let hotel = text.find(FLIGHTS_MARKER).unwrap();
        assert!(outbound < inbound && inbound < hotel);
        assert!(text.contains("3 Rooms"));
        assert!(text.contains("₹3,60,000"));
    }

    #[test]
    fn test_flights_small_terminal() {
        let text = render_tab_at(Tab::Flights, SMALL);
        let outbound = text.find("OUTBOUND").unwrap();
        let inbound = text.find("RETURN").unwrap();
        let hotel = text.find(FLIGHTS_MARKER).unwrap();
        assert!(outbound < inbound && inbound < hotel);
        assert!(text.contains("BOM Mumbai"));
        assert!(text.contains("DXB Dubai"));
        assert!(text.contains("Millennium Plaza Downtown"));
        assert!(text.contains("3 Rooms"));
        assert!(text.contains("₹3,60,000"));
        assert!(text.contains("Total Cost"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut app = App::new(&TRIP, GlyphStyle::Unicode);
        assert_eq!(draw(&mut app), draw(&mut app));
    }

    #[test]
    fn test_no_residue_from_intermediate_tab() {
        let mut app = App::new(&TRIP, GlyphStyle::Unicode);
        app.dispatch(Action::SelectTab(Tab::Costs));
        app.dispatch(Action::SelectTab(Tab::Flights));
        let via_costs = draw(&mut app);

        let mut direct = App::new(&TRIP, GlyphStyle::Unicode);
        direct.dispatch(Action::SelectTab(Tab::Flights));
        assert_eq!(via_costs, draw(&mut direct));
    }

    #[test]
    fn test_footer_highlights() {
        for size in [(WIDTH, HEIGHT), SMALL] {
            let text = render_tab_at(Tab::Timeline, size);
            assert!(text.contains("DIRECT FLIGHTS"));
            assert!(text.contains("PREMIUM ACTIVITIES"));
            assert!(text.contains("5★ HOTEL STAY"));
        }
    }
}
