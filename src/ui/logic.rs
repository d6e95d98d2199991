//! 状态更新 (Update/Dispatch)
//!
//! 标签页切换无条件成功，不保留历史

use tracing::{debug, info};

use super::actions::Action;
use super::state::{App, Tab};

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => {
                info!("quit requested");
                return true;
            }
            Action::SelectTab(tab) => self.select_tab(tab),
            Action::NextTab => self.select_tab(self.tab.next()),
            Action::PrevTab => self.select_tab(self.tab.prev()),
            Action::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            Action::ScrollDown => self.scroll = self.scroll.saturating_add(1),
        }
        false
    }

    /// 切换到指定标签页，滚动偏移归零
    pub fn select_tab(&mut self, tab: Tab) {
        debug!(from = ?self.tab, to = ?tab, "select tab");
        self.tab = tab;
        self.scroll = 0;
    }
}
