use crate::config::PLACEHOLDER_TEXT;
use log::debug;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};

/// 显示横幅文本的外部组件
///
/// `set_text` 不得失败，也不应长时间阻塞。
pub trait DisplaySink: Send + 'static {
    fn set_text(&self, text: &str);
}

#[derive(Debug)]
struct LabelState {
    text: String,
    attached: bool,
    updates: u64,
}

/// 面板标签
///
/// 克隆得到的是同一个标签的共享句柄。
#[derive(Debug, Clone)]
pub struct Label {
    state: Arc<Mutex<LabelState>>,
}

impl Label {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(LabelState {
                text: initial.into(),
                attached: false,
                updates: 0,
            })),
        }
    }

    /// 显示占位文本的标签
    #[inline]
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_TEXT)
    }

    // 标签状态只有简单赋值，锁中毒时直接取回内部数据
    fn lock(&self) -> MutexGuard<'_, LabelState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn text(&self) -> String {
        self.lock().text.clone()
    }

    /// `set_text` 被调用的总次数
    pub fn update_count(&self) -> u64 {
        self.lock().updates
    }

    /// 挂载到宿主容器，返回挂载前的状态
    pub fn attach(&self) -> bool {
        std::mem::replace(&mut self.lock().attached, true)
    }

    /// 从宿主容器移除，返回移除前的状态
    pub fn detach(&self) -> bool {
        std::mem::replace(&mut self.lock().attached, false)
    }

    pub fn is_attached(&self) -> bool {
        self.lock().attached
    }
}

impl Default for Label {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl DisplaySink for Label {
    fn set_text(&self, text: &str) {
        let mut state = self.lock();
        // 未挂载时照常保存文本，挂载后即可显示
        state.text.clear();
        state.text.push_str(text);
        state.updates += 1;
    }
}

/// 把每次推送的横幅写成一行，终端模式下使用
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send + 'static> WriterSink<W> {
    #[inline]
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send + 'static> DisplaySink for WriterSink<W> {
    fn set_text(&self, text: &str) {
        let mut writer = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        let line = text.trim_end_matches(['\r', '\n']);
        if let Err(e) = writeln!(writer, "{line}").and_then(|_| writer.flush()) {
            debug!("写入横幅失败: {e}");
        }
    }
}
