use anyhow::{Context, Result};
use banner_panel::{PLACEHOLDER_TEXT, Poller, PollerConfig, WriterSink};
use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::time::Duration;

/// 横幅面板指示器（终端模式）
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 横幅文件路径 (默认: /tmp/typer-timer/banner)
    #[arg(short, long, default_value = banner_panel::DEFAULT_BANNER_PATH)]
    path: PathBuf,

    /// 轮询间隔秒数 (默认: 5)
    #[arg(short, long, default_value_t = 5)]
    interval: u64,

    /// 单次读取的字节上限 (默认: 65536)
    #[arg(short, long, default_value_t = banner_panel::DEFAULT_MAX_BYTES)]
    max_bytes: usize,

    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logger(&args.log_level);

    info!("横幅面板指示器启动中...");

    let config = PollerConfig {
        path: args.path,
        interval: Duration::from_secs(args.interval),
        max_bytes: args.max_bytes,
    };

    info!(
        "配置信息 - 路径: {}, 间隔: {} 秒, 上限: {} 字节",
        config.path.display(),
        args.interval,
        config.max_bytes
    );

    // 首次成功读取之前显示占位文本
    println!("{PLACEHOLDER_TEXT}");

    let handle = Poller::start(&config, WriterSink::new(std::io::stdout()))
        .context("无法启动横幅轮询")?;

    tokio::signal::ctrl_c()
        .await
        .context("无法监听 Ctrl-C 信号")?;

    handle.stop();
    info!("横幅面板指示器正常关闭");

    Ok(())
}

/// 初始化日志系统
fn init_logger(level: &str) {
    // 日志输出到 stderr，stdout 只留给横幅
    match env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .try_init()
    {
        Ok(_) => info!("日志系统初始化成功，级别: {level}"),
        Err(e) => {
            eprintln!("日志系统初始化失败: {e}，使用默认设置");
        }
    }
}
