use crate::config::{PollerConfig, validate_interval};
use crate::error::{BannerError, Result};
use crate::scheduler::{Scheduler, TimerHandle, TokioScheduler};
use crate::sink::DisplaySink;
use crate::source::{BannerSource, FileSource, read_banner};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Duration;

/// 单次轮询的结果
#[derive(Debug)]
pub enum TickOutcome {
    Updated,
    Skipped(BannerError),
}

impl TickOutcome {
    #[inline]
    pub fn is_updated(&self) -> bool {
        matches!(self, TickOutcome::Updated)
    }
}

/// 执行一次轮询：读取、解码，成功时恰好调用一次 `set_text`
///
/// 内容与上次相同也会照常推送。
pub fn tick<S, D>(source: &S, sink: &D) -> TickOutcome
where
    S: BannerSource + ?Sized,
    D: DisplaySink + ?Sized,
{
    match read_banner(source) {
        Ok(text) => {
            sink.set_text(&text);
            TickOutcome::Updated
        }
        Err(e) => {
            debug!("本次轮询跳过: {e}");
            TickOutcome::Skipped(e)
        }
    }
}

/// 轮询器的取消句柄，丢弃句柄会停止轮询
#[derive(Debug)]
pub struct PollHandle {
    timer: TimerHandle,
}

impl PollHandle {
    /// 停止后续轮询，可重复调用
    ///
    /// 正在进行的一次轮询会执行完毕，此后不再有更新。
    pub fn stop(&self) {
        if !self.timer.is_cancelled() {
            info!("横幅轮询已停止");
        }
        self.timer.cancel();
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.timer.is_cancelled()
    }
}

pub struct Poller;

impl Poller {
    /// 按配置轮询磁盘上的横幅文件，使用当前 tokio 运行时
    pub fn start<D: DisplaySink>(config: &PollerConfig, sink: D) -> Result<PollHandle> {
        config.validate()?;
        let scheduler = TokioScheduler::current()?;
        info!(
            "开始轮询横幅 - 路径: {}, 间隔: {:?}, 上限: {} 字节",
            config.path.display(),
            config.interval,
            config.max_bytes
        );
        Self::start_with(
            &scheduler,
            config.interval,
            FileSource::from_config(config),
            sink,
        )
    }

    /// 使用指定的调度器与来源启动轮询
    ///
    /// 间隔为 0 时立即返回 `InvalidArgument`，不会注册定时器。
    pub fn start_with<C, S, D>(
        scheduler: &C,
        interval: Duration,
        source: S,
        sink: D,
    ) -> Result<PollHandle>
    where
        C: Scheduler + ?Sized,
        S: BannerSource,
        D: DisplaySink,
    {
        validate_interval(interval)?;

        let timer = scheduler.schedule_repeating(
            interval,
            Box::new(move || {
                tick(&source, &sink);
            }),
        );
        Ok(PollHandle { timer })
    }
}

/// 以默认读取上限轮询 `path`
pub fn start<D: DisplaySink>(
    path: impl Into<PathBuf>,
    interval: Duration,
    sink: D,
) -> Result<PollHandle> {
    Poller::start(&PollerConfig::new(path, interval), sink)
}

/// 停止轮询，等同于 [`PollHandle::stop`]
#[inline]
pub fn stop(handle: &PollHandle) {
    handle.stop();
}
