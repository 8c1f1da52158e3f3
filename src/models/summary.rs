//! # 处理结果数据模型
//!
//! 单文件处理结果、目录级失败记录以及整次运行的统计。
//!
//! ## 依赖关系
//! - 被 `protect/processor.rs`, `batch/runner.rs`, `commands/protect.rs` 使用

use crate::error::ProtectError;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// 单个文件处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// 已加密并写出
    Protected(PathBuf),
    /// 文件名已带前缀，跳过
    Skipped(String),
}

/// 单个目录遍历期间的失败记录（文件名 -> 错误）
pub type FailureRecord = BTreeMap<String, ProtectError>;

/// 整次运行的统计
#[derive(Debug, Default)]
pub struct RunSummary {
    /// 成功加密数量
    pub protected: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
    /// 无效路径数量
    pub invalid: usize,
    /// 失败详情 (文件路径, 错误信息)
    pub failures: Vec<(String, String)>,
}

impl RunSummary {
    /// 合并单文件处理结果
    pub fn merge(&mut self, outcome: &ProcessOutcome) {
        match outcome {
            ProcessOutcome::Protected(_) => self.protected += 1,
            ProcessOutcome::Skipped(_) => self.skipped += 1,
        }
    }

    /// 合并一个目录的失败记录
    pub fn absorb_failures(&mut self, dir: &Path, failures: &FailureRecord) {
        for (filename, err) in failures {
            self.failed += 1;
            self.failures
                .push((dir.join(filename).display().to_string(), err.to_string()));
        }
    }

    /// 已尝试的文件总数
    pub fn total(&self) -> usize {
        self.protected + self.skipped + self.failed
    }
}
