//! # 文件收集器
//!
//! 列出目录下直接包含的 PDF 文件。
//!
//! ## 功能
//! - 只遍历一层，不递归
//! - glob 模式匹配，大小写不敏感（`.pdf`, `.PDF`, `.Pdf` 均可）
//! - 隐藏文件（`.` 开头，如 `._report.pdf`）不匹配
//! - 不区分条目类型：名为 `*.pdf` 的子目录也会返回，读取时报告为失败
//! - 文件名不要求是合法 UTF-8
//! - 按文件名排序，保证处理顺序稳定
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `glob` 匹配文件名

use crate::error::{ProtectError, Result};

use glob::{MatchOptions, Pattern};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 匹配模式
pub const PDF_PATTERN: &str = "*.pdf";

/// 文件收集器
pub struct FileCollector {
    /// 目录路径
    dir: PathBuf,
}

impl FileCollector {
    /// 创建收集 PDF 的文件收集器
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
        }
    }

    /// 目录路径
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 收集所有匹配的文件名（不含目录部分）
    pub fn collect(&self) -> Result<Vec<OsString>> {
        let pattern = Pattern::new(PDF_PATTERN).map_err(|e| {
            ProtectError::Configuration(format!("Invalid pattern '{}': {}", PDF_PATTERN, e))
        })?;
        let options = MatchOptions {
            case_sensitive: false,
            require_literal_leading_dot: true,
            ..MatchOptions::new()
        };

        let mut names: Vec<OsString> = WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_os_string())
            .filter(|name| pattern.matches_with(&name.to_string_lossy(), options))
            .collect();

        names.sort();
        Ok(names)
    }
}
