//! 预算面板：环形图 + 图例
//!
//! 环形图按分项之和分配角度，图例百分比按 grand_total 计算。
//! 两个分母在数据不一致时会给出不同的比例，这里不做调和。

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, Cell, Paragraph, Row, Table, Widget, Wrap,
        canvas::{Canvas, Points},
    },
};

use crate::currency::format_inr;
use crate::models::{ColorTag, TripData, percent_of_total, ring_shares};
use crate::ui::theme;

/// 相邻扇段之间的间隔角度
const PADDING_DEG: f64 = 5.0;
const INNER_RADIUS: f64 = 0.6;
const OUTER_RADIUS: f64 = 0.95;

const MIN_RING_WIDTH: u16 = 24;
const RING_MIN_HEIGHT: u16 = 8;
const STACKED_RING_HEIGHT: u16 = 10;
const COLUMN_SPACING: u16 = 1;
const LEGEND_TITLE_HEIGHT: u16 = 2;

/// 环形图扇段
#[derive(Debug, Clone, PartialEq)]
pub struct RingSlice {
    pub start_deg: f64,
    pub sweep_deg: f64,
    pub color: ColorTag,
    pub tooltip: String,
}

/// 图例行
#[derive(Debug, Clone, PartialEq)]
pub struct LegendRow {
    pub name: &'static str,
    pub amount: String,
    pub percent: i64,
    pub color: ColorTag,
}

impl LegendRow {
    pub fn percent_label(&self, wide: bool) -> String {
        if wide {
            format!("{}% of total", self.percent)
        } else {
            format!("{}%", self.percent)
        }
    }
}

pub fn ring_slices(trip: &TripData) -> Vec<RingSlice> {
    let values: Vec<i64> = trip.costs.iter().map(|c| c.value).collect();
    ring_shares(&values, PADDING_DEG)
        .into_iter()
        .zip(trip.costs)
        .map(|((start_deg, sweep_deg), item)| RingSlice {
            start_deg,
            sweep_deg,
            color: item.color,
            tooltip: format_inr(item.value),
        })
        .collect()
}

pub fn legend_rows(trip: &TripData) -> Vec<LegendRow> {
    trip.costs
        .iter()
        .map(|c| LegendRow {
            name: c.name,
            amount: format_inr(c.value),
            percent: percent_of_total(c.value, trip.details.grand_total),
            color: c.color,
        })
        .collect()
}

/// 最大分项的占比说明
pub fn summary_line(trip: &TripData) -> Option<String> {
    let item = trip.largest_item()?;
    Some(format!(
        "Most of the budget (~{}%) is allocated to {}.",
        percent_of_total(item.value, trip.details.grand_total),
        item.name
    ))
}

fn max_width(rows: &[LegendRow], text: impl Fn(&LegendRow) -> String) -> u16 {
    rows.iter()
        .map(|r| Line::raw(text(r)).width() as u16)
        .max()
        .unwrap_or(0)
}

/// 图例三列按内容计算的宽度: (名称, 金额, 百分比)
fn legend_columns(rows: &[LegendRow], wide: bool) -> [u16; 3] {
    [
        max_width(rows, |r| format!("● {}", r.name)),
        max_width(rows, |r| r.amount.clone()),
        max_width(rows, |r| r.percent_label(wide)),
    ]
}

fn legend_width(rows: &[LegendRow], wide: bool) -> u16 {
    legend_columns(rows, wide).iter().sum::<u16>() + 2 * COLUMN_SPACING
}

/// 面板布局
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostsLayout {
    /// 左侧环形图，右侧图例
    SideBySide { ring_width: u16 },
    /// 环形图在上，图例在下
    Stacked { wide_labels: bool },
}

pub fn plan_layout(trip: &TripData, width: u16) -> CostsLayout {
    let rows = legend_rows(trip);
    let full = legend_width(&rows, true);
    // 图例多留 2 列给说明文字换行
    let legend = (full + 2).max(width / 2);
    if width >= legend + MIN_RING_WIDTH {
        CostsLayout::SideBySide {
            ring_width: width - legend,
        }
    } else {
        CostsLayout::Stacked {
            wide_labels: width >= full,
        }
    }
}

fn summary_paragraph(trip: &TripData) -> Option<Paragraph<'static>> {
    let summary = summary_line(trip)?;
    Some(
        Paragraph::new(Line::from(vec![
            Span::styled("Summary: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(summary),
        ]))
        .style(Style::default().fg(theme::ACCENT))
        .wrap(Wrap { trim: true }),
    )
}

fn summary_height(trip: &TripData, width: u16) -> u16 {
    summary_paragraph(trip)
        .map(|p| p.line_count(width.saturating_sub(2)) as u16 + 2)
        .unwrap_or(0)
}

fn legend_height(trip: &TripData, width: u16) -> u16 {
    LEGEND_TITLE_HEIGHT + trip.costs.len() as u16 * 2 + summary_height(trip, width)
}

/// 面板所需的总高度
pub fn content_height(trip: &TripData, width: u16) -> u16 {
    match plan_layout(trip, width) {
        CostsLayout::SideBySide { ring_width } => {
            legend_height(trip, width - ring_width).max(RING_MIN_HEIGHT)
        }
        CostsLayout::Stacked { .. } => STACKED_RING_HEIGHT + legend_height(trip, width),
    }
}

pub fn render_costs(buf: &mut Buffer, area: Rect, trip: &TripData) {
    let slices = ring_slices(trip);
    match plan_layout(trip, area.width) {
        CostsLayout::SideBySide { ring_width } => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(ring_width), Constraint::Min(0)])
                .split(area);
            render_ring(buf, chunks[0], &slices);
            render_legend(buf, chunks[1], trip, true);
        }
        CostsLayout::Stacked { wide_labels } => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(STACKED_RING_HEIGHT), Constraint::Min(0)])
                .split(area);
            render_ring(buf, chunks[0], &slices);
            render_legend(buf, chunks[1], trip, wide_labels);
        }
    }
}

fn ring_points(slice: &RingSlice) -> Vec<(f64, f64)> {
    let mut coords = Vec::new();
    let steps = (slice.sweep_deg * 2.0).ceil() as usize;
    for i in 0..=steps {
        let angle = (slice.start_deg + slice.sweep_deg * i as f64 / steps.max(1) as f64).to_radians();
        let mut r = INNER_RADIUS;
        while r <= OUTER_RADIUS {
            coords.push((r * angle.cos(), r * angle.sin()));
            r += 0.02;
        }
    }
    coords
}

/// 标签左端的 x 坐标: 以扇段中点居中，并收紧到画布 [-1, 1] 之内
fn label_x(mid_x: f64, label_width: u16, canvas_width: u16) -> f64 {
    let unit = 2.0 / canvas_width.saturating_sub(1).max(1) as f64;
    let span = label_width as f64 * unit;
    let x = mid_x - span / 2.0;
    x.min(1.0 - span).max(-1.0)
}

fn render_ring(buf: &mut Buffer, area: Rect, slices: &[RingSlice]) {
    let label_radius = (INNER_RADIUS + OUTER_RADIUS) / 2.0;
    Canvas::default()
        .x_bounds([-1.0, 1.0])
        .y_bounds([-1.0, 1.0])
        .marker(Marker::Braille)
        .paint(|ctx| {
            for slice in slices {
                let coords = ring_points(slice);
                ctx.draw(&Points {
                    coords: &coords,
                    color: theme::color(slice.color),
                });
            }
            ctx.layer();
            for slice in slices {
                let mid = (slice.start_deg + slice.sweep_deg / 2.0).to_radians();
                let label = Span::styled(
                    slice.tooltip.clone(),
                    Style::default()
                        .fg(theme::TEXT)
                        .add_modifier(Modifier::BOLD),
                );
                ctx.print(
                    label_x(label_radius * mid.cos(), label.width() as u16, area.width),
                    label_radius * mid.sin(),
                    label,
                );
            }
        })
        .render(area, buf);
}

fn render_legend(buf: &mut Buffer, area: Rect, trip: &TripData, wide: bool) {
    let rows = legend_rows(trip);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(LEGEND_TITLE_HEIGHT),
            Constraint::Length(rows.len() as u16 * 2),
            Constraint::Min(0),
        ])
        .split(area);

    Paragraph::new(Line::from(Span::styled(
        "Budget Distribution",
        Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
    )))
    .render(chunks[0], buf);

    let [name_w, amount_w, percent_w] = legend_columns(&rows, wide);
    let table_rows = rows.iter().map(|row| {
        Row::new(vec![
            Cell::from(Line::from(vec![
                Span::styled("● ", Style::default().fg(theme::color(row.color))),
                Span::raw(row.name),
            ])),
            Cell::from(Span::styled(
                row.amount.clone(),
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            )),
            Cell::from(Span::styled(
                row.percent_label(wide),
                Style::default().fg(theme::MUTED),
            )),
        ])
        .bottom_margin(1)
    });
    Table::new(
        table_rows,
        [
            Constraint::Min(name_w),
            Constraint::Length(amount_w),
            Constraint::Length(percent_w),
        ],
    )
    .column_spacing(COLUMN_SPACING)
    .render(chunks[1], buf);

    if let Some(summary) = summary_paragraph(trip) {
        summary
            .block(Block::default().borders(Borders::ALL))
            .render(chunks[2], buf);
    }
}
