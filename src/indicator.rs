use crate::config::PollerConfig;
use crate::error::Result;
use crate::poller::{PollHandle, Poller};
use crate::sink::Label;
use log::info;

/// 面板指示器：一个标签加一个轮询器
///
/// 对应宿主的 init / enable / disable 三个阶段。
/// 标签与轮询句柄都由指示器自身持有，不依赖全局状态。
pub struct Indicator {
    config: PollerConfig,
    label: Label,
    poll: Option<PollHandle>,
}

impl Indicator {
    /// 校验配置并创建显示占位文本的标签
    pub fn new(config: PollerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            label: Label::placeholder(),
            poll: None,
        })
    }

    /// 挂载标签并开始轮询，已启用时不做任何事
    pub fn enable(&mut self) -> Result<()> {
        if self.poll.is_some() {
            return Ok(());
        }
        let handle = Poller::start(&self.config, self.label.clone())?;
        self.label.attach();
        self.poll = Some(handle);
        info!("指示器已启用");
        Ok(())
    }

    /// 停止轮询并移除标签，可重复调用
    pub fn disable(&mut self) {
        if let Some(handle) = self.poll.take() {
            handle.stop();
            self.label.detach();
            info!("指示器已停用");
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.poll.is_some()
    }

    #[inline]
    pub fn label(&self) -> &Label {
        &self.label
    }

    #[inline]
    pub fn config(&self) -> &PollerConfig {
        &self.config
    }
}

impl Drop for Indicator {
    fn drop(&mut self) {
        self.disable();
    }
}
