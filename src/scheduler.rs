use crate::error::{BannerError, Result};
use log::{debug, warn};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

/// 单次触发的回调
pub type TickFn = Box<dyn FnMut() + Send + 'static>;

/// 重复定时器的取消句柄
///
/// `cancel` 可重复调用；句柄被丢弃时定时器同样停止。
#[derive(Debug)]
pub struct TimerHandle {
    stop: watch::Sender<bool>,
}

impl TimerHandle {
    /// 创建句柄及调度器一侧用于监听取消的接收端
    pub fn channel() -> (Self, watch::Receiver<bool>) {
        let (stop, rx) = watch::channel(false);
        (Self { stop }, rx)
    }

    #[inline]
    pub fn cancel(&self) {
        self.stop.send_replace(true);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        *self.stop.borrow()
    }
}

pub trait Scheduler {
    /// 注册重复回调，首次触发在 `now + interval`
    fn schedule_repeating(&self, interval: Duration, tick: TickFn) -> TimerHandle;

    #[inline]
    fn cancel(&self, handle: &TimerHandle) {
        handle.cancel();
    }
}

/// 基于 tokio 运行时的调度器
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    #[inline]
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// 使用当前线程所在的运行时
    pub fn current() -> Result<Self> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|_| BannerError::NoRuntime)
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_repeating(&self, interval: Duration, mut tick: TickFn) -> TimerHandle {
        let (handle, mut stop_rx) = TimerHandle::channel();

        self.handle.spawn(async move {
            let mut ticker = interval_at(Instant::now() + interval, interval);
            // 某次触发被耽搁后不补发，保持原有节奏
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                if *stop_rx.borrow_and_update() {
                    break;
                }

                tokio::select! {
                    biased;
                    // 发送端被丢弃同样视为取消
                    _ = stop_rx.changed() => break,
                    _ = ticker.tick() => {
                        // 回调内的 panic 不能终止定时器
                        if catch_unwind(AssertUnwindSafe(&mut tick)).is_err() {
                            warn!("定时回调 panic，继续等待下一次触发");
                        }
                    }
                }
            }

            debug!("定时器已停止");
        });

        handle
    }
}
