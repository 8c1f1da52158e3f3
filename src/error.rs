//! # 统一错误处理模块
//!
//! 定义加密流程中的全部错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分类
//! - `Configuration`: 必需参数缺失（无路径、空密码），在任何文件 I/O 之前终止
//! - `DocumentRead`: 源 PDF 不存在、不可读或格式错误
//! - `DocumentWrite`: 输出目录或输出文件不可写
//! - `InvalidPath`: 既不是文件也不是目录的输入路径（仅报告，不终止）
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use std::error::Error as StdError;
use thiserror::Error;

/// 统一错误类型
#[derive(Error, Debug)]
pub enum ProtectError {
    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ─────────────────────────────────────────────────────────────
    // 文档读写错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read PDF: {path}\nReason: {reason}")]
    DocumentRead { path: String, reason: String },

    #[error("Failed to write PDF: {path}\nReason: {reason}")]
    DocumentWrite {
        path: String,
        reason: String,
        #[source]
        source: Option<std::io::Error>,
    },

    // ─────────────────────────────────────────────────────────────
    // 路径错误
    // ─────────────────────────────────────────────────────────────
    #[error("{path} is not a valid path")]
    InvalidPath { path: String },
}

impl ProtectError {
    /// 由 I/O 错误构造写入错误
    pub fn write_io(path: impl Into<String>, reason: &str, source: std::io::Error) -> Self {
        ProtectError::DocumentWrite {
            path: path.into(),
            reason: reason.to_string(),
            source: Some(source),
        }
    }

    /// 错误及其完整的 source 链，逐行展开
    pub fn chain(&self) -> String {
        let mut text = self.to_string();
        let mut current = self.source();
        while let Some(cause) = current {
            text.push_str(&format!("\nCaused by: {}", cause));
            current = cause.source();
        }
        text
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ProtectError>;
