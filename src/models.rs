use serde::Serialize;

/// 图标标记（由视图层映射为具体字形）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconTag {
    Plane,
    Camera,
    Building,
    Sun,
    Ticket,
    ArrowRight,
    Star,
    Users,
}

/// 颜色标记（由视图层映射为具体颜色）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorTag {
    Blue,
    Gold,
    Emerald,
    Purple,
    Orange,
    Red,
    Slate,
}

/// 行程概要
#[derive(Debug, Clone, Serialize)]
pub struct TripDetails {
    pub title: &'static str,
    pub dates: &'static str,
    pub travelers: &'static str,
    pub grand_total: i64,
    pub airline: &'static str,
}

/// 预算分项
#[derive(Debug, Clone, Serialize)]
pub struct CostItem {
    pub name: &'static str,
    pub value: i64,
    pub color: ColorTag,
}

/// 航段
#[derive(Debug, Clone, Serialize)]
pub struct FlightSegment {
    pub date: &'static str,
    pub route: &'static str,
    pub segment_type: &'static str,
    pub details: &'static str,
}

/// 航线端点: (城市, 机场代码)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint<'a> {
    pub city: &'a str,
    pub code: &'a str,
}

impl FlightSegment {
    /// 解析 "City (CODE) → City (CODE)" 形式的航线
    pub fn endpoints(&self) -> Option<(Endpoint<'static>, Endpoint<'static>)> {
        let (from, to) = self.route.split_once('→')?;
        Some((parse_endpoint(from)?, parse_endpoint(to)?))
    }
}

fn parse_endpoint(part: &str) -> Option<Endpoint<'_>> {
    let part = part.trim();
    let open = part.rfind('(')?;
    let code = part[open + 1..].strip_suffix(')')?.trim();
    let city = part[..open].trim();
    if code.is_empty() || city.is_empty() {
        return None;
    }
    Some(Endpoint { city, code })
}

/// 去程 + 返程
#[derive(Debug, Clone, Serialize)]
pub struct Flights {
    pub outbound: FlightSegment,
    pub inbound: FlightSegment,
}

/// 单日行程
#[derive(Debug, Clone, Serialize)]
pub struct ItineraryDay {
    pub day: u32,
    pub date: &'static str,
    pub title: &'static str,
    pub icon: IconTag,
    pub color: ColorTag,
    pub cost: i64,
    pub highlights: &'static [&'static str],
    pub notes: &'static str,
}

/// 住宿卡片。total 是独立字面量，与预算中的酒店分项仅按约定一致
#[derive(Debug, Clone, Serialize)]
pub struct Accommodation {
    pub name: &'static str,
    pub rooms: &'static str,
    pub nights: &'static str,
    pub rating: &'static str,
    pub total: i64,
}

/// 页脚亮点
#[derive(Debug, Clone, Serialize)]
pub struct Highlight {
    pub label: &'static str,
    pub icon: IconTag,
    pub color: ColorTag,
}

/// 完整的行程数据集
#[derive(Debug, Clone, Serialize)]
pub struct TripData {
    pub details: TripDetails,
    pub costs: &'static [CostItem],
    pub flights: Flights,
    pub days: &'static [ItineraryDay],
    pub accommodation: Accommodation,
    pub highlights: &'static [Highlight],
}

impl TripData {
    /// 所有预算分项之和（环形图的分母）
    pub fn cost_sum(&self) -> i64 {
        self.costs.iter().map(|c| c.value).sum()
    }

    /// 所有单日费用之和
    pub fn day_cost_sum(&self) -> i64 {
        self.days.iter().map(|d| d.cost).sum()
    }

    /// 金额最大的预算分项（并列时取靠前者）
    pub fn largest_item(&self) -> Option<&CostItem> {
        self.costs
            .iter()
            .reduce(|best, c| if c.value > best.value { c } else { best })
    }
}

/// 四舍五入（半数进位）的百分比，total 为 0 时返回 0，超出 i64 时饱和
pub fn percent_of_total(value: i64, total: i64) -> i64 {
    if total == 0 {
        return 0;
    }
    let num = 200 * value as i128 + total as i128;
    let den = 2 * total as i128;
    let percent = num.div_euclid(den);
    i64::try_from(percent).unwrap_or(if percent > 0 { i64::MAX } else { i64::MIN })
}

/// 环形图各段: (起始角, 扫过角)，单位为度
///
/// 每段之间留出 `padding` 度间隔，剩余角度按 value / Σvalue 分配。
/// 总和为 0 或为空时返回空列表。
pub fn ring_shares(values: &[i64], padding: f64) -> Vec<(f64, f64)> {
    let sum: i64 = values.iter().map(|v| (*v).max(0)).sum();
    if sum == 0 {
        return Vec::new();
    }

    let usable = (360.0 - padding * values.len() as f64).max(0.0);
    let mut start = 90.0;
    values
        .iter()
        .map(|v| {
            let sweep = usable * (*v).max(0) as f64 / sum as f64;
            let seg = (start, sweep);
            start += sweep + padding;
            seg
        })
        .collect()
}
