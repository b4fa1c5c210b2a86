use std::str::Utf8Error;

/// 横幅轮询错误类型
///
/// 只有 `InvalidArgument` 与 `NoRuntime` 会同步返回给调用方；
/// 其余变体仅在单次轮询内部产生，随后被吞掉并记入调试日志。
#[derive(Debug, thiserror::Error)]
pub enum BannerError {
    #[error("参数无效: {0}")]
    InvalidArgument(String),

    #[error("读取失败: {0}")]
    ReadFailure(#[from] std::io::Error),

    #[error("文件超过 {limit} 字节上限")]
    TooLarge { limit: usize },

    #[error("UTF-8 解码失败: {0}")]
    DecodeFailure(#[from] Utf8Error),

    #[error("当前线程不在 tokio 运行时中")]
    NoRuntime,
}

impl BannerError {
    #[inline]
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        BannerError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, BannerError>;
