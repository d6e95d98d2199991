//! App 状态定义 (Model)
//!
//! 当前标签页 + 面板内的滚动偏移，切换标签页时偏移归零

use crate::config::GlyphStyle;
use crate::models::TripData;

/// 标签页，三个面板互斥
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Timeline,
    Costs,
    Flights,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Timeline, Tab::Costs, Tab::Flights];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Timeline => "Itinerary",
            Tab::Costs => "Budget",
            Tab::Flights => "Logistics",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Tab::Timeline => '1',
            Tab::Costs => '2',
            Tab::Flights => '3',
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Timeline => 0,
            Tab::Costs => 1,
            Tab::Flights => 2,
        }
    }

    pub fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// 应用状态
pub struct App {
    pub trip: &'static TripData,
    pub tab: Tab,
    pub glyphs: GlyphStyle,
    /// 面板滚动偏移（行），渲染时按内容高度收紧
    pub scroll: u16,
}

impl App {
    /// 创建新的应用实例，初始标签页为行程
    pub fn new(trip: &'static TripData, glyphs: GlyphStyle) -> Self {
        Self {
            trip,
            tab: Tab::default(),
            glyphs,
            scroll: 0,
        }
    }
}
