mod config;
mod currency;
mod error;
mod logging;
mod models;
mod trip_data;
mod ui;

use std::io;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::{debug, info, warn};

use crate::config::{config_path, data_dir, load_config};
use crate::error::AppError;
use crate::logging::init_logging;
use crate::trip_data::TRIP;
use crate::ui::{App, render};

fn main() -> Result<(), AppError> {
    // 配置文件 (~/.config/itinerary/config.toml)，不存在时使用默认值
    let config = match config_path() {
        Some(path) => load_config(&path)?,
        None => Default::default(),
    };

    let log_file = match &config.log.file {
        Some(file) => file.clone(),
        None => data_dir()?.join("itinerary.log"),
    };
    init_logging(&config.log.level, &log_file)?;
    info!(trip = TRIP.details.title, glyphs = ?config.glyphs, "starting");

    // 环形图与图例使用不同分母，数据不一致时只提示
    if TRIP.cost_sum() != TRIP.details.grand_total {
        warn!(
            breakdown = TRIP.cost_sum(),
            grand_total = TRIP.details.grand_total,
            "cost breakdown does not add up to grand total"
        );
    }
    debug!(days = TRIP.days.len(), day_costs = TRIP.day_cost_sum(), "trip loaded");

    let mut app = App::new(&TRIP, config.glyphs);

    // panic 时先恢复终端再打印信息
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));

    // 设置终端，中途失败时同样恢复
    enable_raw_mode()?;
    let mut terminal = with_restore(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        restore_terminal,
    )?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("exiting");
    result.map_err(AppError::from)
}

/// 尽力恢复终端，忽略错误
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// 执行 `f`，失败时先调用 `restore` 再返回错误
fn with_restore<T>(
    f: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce(),
) -> io::Result<T> {
    f().inspect_err(|_| restore())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && ui::handle_key_event(app, key.code) {
                break;
            }
        }
    }
    Ok(())
}
