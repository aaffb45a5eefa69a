//! Daxie Core
//!
//! 人民币金额大写转换核心库

#![warn(rust_2018_idioms)]

pub mod amount;
pub mod config;
pub mod converter;
pub mod error;
pub mod numeral;

// Re-export key types
pub use amount::{is_valid_amount, sanitize_input, Amount};
pub use config::{ConverterConfig, DaxieConfig};
pub use converter::{convert_amount, Converter, CLEARED_DISPLAY};
pub use error::{DaxieError, DaxieResult};
pub use numeral::{convert_to_chinese, format_amount};

/// 初始化日志系统
///
/// 调试模式 (--features debug-logs): 日志级别由 DAXIE_LOG 控制，默认 warn
///
/// 注意: 此函数可以安全地多次调用
pub fn init_logging() {
    #[cfg(feature = "debug-logs")]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter =
            EnvFilter::try_from_env("DAXIE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

        // 使用 try_init() 代替 init()，避免重复初始化时 panic
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .with(filter)
            .try_init();
    }

    #[cfg(not(feature = "debug-logs"))]
    {
        // 未启用 debug-logs 时不安装 subscriber
    }
}

