//! # 加密请求数据模型
//!
//! 由命令行参数构造一次，之后只读。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs`, `commands/protect.rs` 使用
//! - 使用 `error.rs`

use crate::error::{ProtectError, Result};

use std::path::{Path, PathBuf};

/// 输出文件名默认前缀
pub const DEFAULT_PREFIX: &str = "pwd-";

/// 一次批量加密的全部配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectRequest {
    /// 待处理的文件或目录（按输入顺序）
    paths: Vec<PathBuf>,

    /// 输出目录，空表示源文件所在目录
    out_dir: PathBuf,

    /// 输出文件名前缀，同时用于识别已处理文件
    prefix: String,

    /// 应用到每个输出 PDF 的密码
    password: String,
}

impl ProtectRequest {
    /// 校验并构造请求
    ///
    /// `out_dir` 和 `prefix` 缺省时视为空字符串；
    /// `paths` 缺失或 `password` 为空时返回 `Configuration` 错误。
    pub fn new(
        paths: Option<Vec<PathBuf>>,
        out_dir: Option<PathBuf>,
        prefix: Option<String>,
        password: Option<String>,
    ) -> Result<Self> {
        let paths = paths.ok_or_else(|| {
            ProtectError::Configuration("Specified paths cannot be empty".to_string())
        })?;

        let password = match password {
            Some(p) if !p.is_empty() => p,
            _ => {
                return Err(ProtectError::Configuration(
                    "Cannot protect a PDF without a password".to_string(),
                ))
            }
        };

        Ok(Self {
            paths,
            out_dir: out_dir.unwrap_or_default(),
            prefix: prefix.unwrap_or_default(),
            password,
        })
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}
