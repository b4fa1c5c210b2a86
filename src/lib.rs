//! 横幅面板指示器库
//!
//! 定时读取外部程序写入的横幅文件，并把文本推送到面板标签。
//! 读取失败时保留上一次的显示内容，轮询不会因此中断。

pub mod config;
pub mod error;
pub mod indicator;
pub mod poller;
pub mod scheduler;
pub mod sink;
pub mod source;

// 重新导出主要的公共类型
pub use config::{
    DEFAULT_BANNER_PATH, DEFAULT_MAX_BYTES, DEFAULT_POLL_INTERVAL, PLACEHOLDER_TEXT, PollerConfig,
};
pub use error::{BannerError, Result};
pub use indicator::Indicator;
pub use poller::{PollHandle, Poller, TickOutcome, start, stop, tick};
pub use scheduler::{Scheduler, TimerHandle, TokioScheduler};
pub use sink::{DisplaySink, Label, WriterSink};
pub use source::{BannerSource, FileSource, decode_banner, read_banner};
