//! Daxie 命令行工具
//!
//! 将金额转换为人民币大写：
//! - 命令行参数中的每个金额输出一行
//! - 无参数时逐行读取标准输入

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use daxie_core::{Converter, DaxieConfig};

/// 人民币金额大写转换
#[derive(Debug, Parser)]
#[command(name = "daxie", version, about)]
struct Cli {
    /// 要转换的金额（例如 1234.56）；省略时从标准输入逐行读取
    amounts: Vec<String>,

    /// 配置文件路径（默认 ~/.config/daxie/config.toml）
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// 校验前过滤输入中的非数字字符
    #[arg(long, conflicts_with = "no_sanitize")]
    sanitize: bool,

    /// 不过滤输入（覆盖配置文件）
    #[arg(long)]
    no_sanitize: bool,

    /// 只校验金额格式，不转换
    #[arg(long)]
    check: bool,
}

impl Cli {
    /// 加载配置并应用命令行覆盖项
    fn load_config(&self) -> anyhow::Result<DaxieConfig> {
        let mut config = match &self.config {
            Some(path) => DaxieConfig::load_from(path)
                .with_context(|| format!("无法加载配置文件: {}", path.display()))?,
            None => DaxieConfig::load().context("无法加载配置文件")?,
        };

        if self.sanitize {
            config.converter.sanitize_input = true;
        }
        if self.no_sanitize {
            config.converter.sanitize_input = false;
        }
        Ok(config)
    }
}

/// 处理单个输入，返回是否成功
///
/// 金额输入错误只报告并返回 `false`，其他错误向上传递
fn handle(
    converter: &Converter,
    check_only: bool,
    input: &str,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let result = if check_only {
        converter.check(input).map(|()| "ok".to_string())
    } else {
        converter.convert(input)
    };

    match result {
        Ok(text) => {
            writeln!(out, "{}", text)?;
            Ok(true)
        }
        Err(e) if e.is_input_error() => {
            tracing::debug!("转换失败: {:?}", e);
            eprintln!("{}: {}", input, e);
            Ok(false)
        }
        Err(e) => Err(e).with_context(|| format!("处理输入失败: {}", input)),
    }
}

/// 逐行处理输入，跳过空行
fn handle_lines(
    converter: &Converter,
    check_only: bool,
    input: impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let mut all_ok = true;
    for line in input.lines() {
        let line = line.context("读取标准输入失败")?;
        if line.trim().is_empty() {
            continue;
        }
        all_ok &= handle(converter, check_only, &line, out)?;
    }
    Ok(all_ok)
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = cli.load_config()?;
    let converter = Converter::new(config.converter);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.amounts.is_empty() {
        return handle_lines(&converter, cli.check, io::stdin().lock(), &mut out);
    }

    let mut all_ok = true;
    for amount in &cli.amounts {
        all_ok &= handle(&converter, cli.check, amount, &mut out)?;
    }
    Ok(all_ok)
}

fn main() -> ExitCode {
    daxie_core::init_logging();

    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("错误: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
