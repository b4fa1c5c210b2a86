use crate::error::{BannerError, Result};
use std::path::PathBuf;
use std::time::Duration;

/// 横幅文件默认路径，由外部的打字计时程序写入
pub const DEFAULT_BANNER_PATH: &str = "/tmp/typer-timer/banner";

/// 默认轮询间隔
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// 单次读取的默认字节上限 (64 KiB)
pub const DEFAULT_MAX_BYTES: usize = 64 * 1024;

/// 首次成功读取之前标签显示的占位文本
pub const PLACEHOLDER_TEXT: &str = "Loading...";

/// 轮询配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollerConfig {
    pub path: PathBuf,
    pub interval: Duration,
    pub max_bytes: usize,
}

impl Default for PollerConfig {
    #[inline]
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_BANNER_PATH),
            interval: DEFAULT_POLL_INTERVAL,
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

impl PollerConfig {
    /// 使用给定路径与间隔创建配置，读取上限取默认值
    pub fn new(path: impl Into<PathBuf>, interval: Duration) -> Self {
        Self {
            path: path.into(),
            interval,
            ..Self::default()
        }
    }

    /// 校验配置，在注册任何定时器之前调用
    pub fn validate(&self) -> Result<()> {
        let raw = self.path.as_os_str();
        if raw.is_empty() {
            return Err(BannerError::invalid("横幅路径不能为空"));
        }
        if raw.as_encoded_bytes().contains(&0) {
            return Err(BannerError::invalid(format!(
                "横幅路径包含 NUL 字节: {}",
                self.path.display()
            )));
        }
        validate_interval(self.interval)?;
        if self.max_bytes == 0 {
            return Err(BannerError::invalid("读取上限必须大于 0"));
        }
        Ok(())
    }
}

#[inline]
pub(crate) fn validate_interval(interval: Duration) -> Result<()> {
    if interval.is_zero() {
        return Err(BannerError::invalid("轮询间隔必须大于 0"));
    }
    Ok(())
}
