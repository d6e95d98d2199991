//! 日志初始化
//!
//! 终端被 UI 占用，日志写入文件

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::AppError;

/// RUST_LOG 优先，否则使用配置中的级别
pub fn init_logging(level: &str, file: &Path) -> Result<(), AppError> {
    let writer = OpenOptions::new().create(true).append(true).open(file)?;

    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(writer));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
