use crate::config::PollerConfig;
use crate::error::{BannerError, Result};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// 横幅字节来源
///
/// 每次轮询调用一次 `read_bytes`，读取是同步的，
/// 因此同一时刻最多只有一次读取在进行。
pub trait BannerSource: Send + 'static {
    fn read_bytes(&self) -> Result<Vec<u8>>;
}

/// 从磁盘文件读取横幅
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    max_bytes: usize,
}

impl FileSource {
    #[inline]
    pub fn new(path: impl Into<PathBuf>, max_bytes: usize) -> Self {
        Self {
            path: path.into(),
            max_bytes,
        }
    }

    #[inline]
    pub fn from_config(config: &PollerConfig) -> Self {
        Self::new(config.path.clone(), config.max_bytes)
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BannerSource for FileSource {
    fn read_bytes(&self) -> Result<Vec<u8>> {
        let file = File::open(&self.path)?;

        // 多读一个字节用于判断是否超出上限
        let limit = (self.max_bytes as u64).saturating_add(1);
        let mut buf = Vec::with_capacity(self.max_bytes.min(4096));
        file.take(limit).read_to_end(&mut buf)?;

        if buf.len() > self.max_bytes {
            return Err(BannerError::TooLarge {
                limit: self.max_bytes,
            });
        }
        Ok(buf)
    }
}

/// 将字节解码为 UTF-8 文本，无效序列整体视为失败
#[inline]
pub fn decode_banner(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| BannerError::DecodeFailure(e.utf8_error()))
}

/// 读取并解码一次横幅
pub fn read_banner<S: BannerSource + ?Sized>(source: &S) -> Result<String> {
    let bytes = source.read_bytes()?;
    decode_banner(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(bytes: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_read_banner_from_file() {
        let file = write_temp("05:23".as_bytes());
        let source = FileSource::new(file.path(), 1024);
        assert_eq!(read_banner(&source).unwrap(), "05:23");
    }

    #[test]
    fn test_read_banner_keeps_newlines_and_unicode() {
        let text = "12% μ/d — 30% μ/h —  1h  5m 🔨\n";
        let file = write_temp(text.as_bytes());
        let source = FileSource::new(file.path(), 1024);
        assert_eq!(read_banner(&source).unwrap(), text);
    }

    #[test]
    fn test_read_banner_empty_file() {
        let file = write_temp(b"");
        let source = FileSource::new(file.path(), 1024);
        assert_eq!(read_banner(&source).unwrap(), "");
    }

    #[test]
    fn test_read_banner_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("banner"), 1024);
        match read_banner(&source) {
            Err(BannerError::ReadFailure(e)) => {
                assert_eq!(e.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("应该是 ReadFailure, 实际为 {other:?}"),
        }
    }

    #[test]
    fn test_read_banner_directory_is_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path(), 1024);
        assert!(matches!(
            read_banner(&source),
            Err(BannerError::ReadFailure(_))
        ));
    }

    #[test]
    fn test_read_banner_invalid_utf8() {
        let file = write_temp(&[b'0', b'5', 0xc3, 0x28]);
        let source = FileSource::new(file.path(), 1024);
        assert!(matches!(
            read_banner(&source),
            Err(BannerError::DecodeFailure(_))
        ));
    }

    #[test]
    fn test_read_banner_size_cap() {
        let file = write_temp(b"0123456789");

        let exact = FileSource::new(file.path(), 10);
        assert_eq!(read_banner(&exact).unwrap(), "0123456789");

        let small = FileSource::new(file.path(), 9);
        assert!(matches!(
            read_banner(&small),
            Err(BannerError::TooLarge { limit: 9 })
        ));
    }

    #[test]
    fn test_read_banner_unbounded_cap() {
        let file = write_temp("05:23".as_bytes());
        let config = PollerConfig {
            path: file.path().to_path_buf(),
            max_bytes: usize::MAX,
            ..PollerConfig::default()
        };
        assert!(config.validate().is_ok());

        let source = FileSource::from_config(&config);
        assert_eq!(read_banner(&source).unwrap(), "05:23");
    }

    #[test]
    fn test_file_source_from_config() {
        let config = PollerConfig::default();
        let source = FileSource::from_config(&config);
        assert_eq!(source.path(), Path::new("/tmp/typer-timer/banner"));
    }

    #[test]
    fn test_decode_banner_is_stateless() {
        // 一次失败不会影响后续解码
        assert!(decode_banner(vec![0xff]).is_err());
        assert_eq!(decode_banner(b"ok".to_vec()).unwrap(), "ok");
    }
}
