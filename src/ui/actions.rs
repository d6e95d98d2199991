//! Action 枚举定义 (Intent)
//!
//! 按键转化为明确的语义化 Action

use super::state::Tab;

/// 用户操作枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    SelectTab(Tab),
    NextTab,
    PrevTab,
    ScrollUp,
    ScrollDown,
}
