//! # 数据模型模块
//!
//! 定义加密请求与处理结果数据模型。
//!
//! ## 依赖关系
//! - 被 `batch/`, `protect/` 和 `commands/` 使用
//! - 子模块: request, summary

pub mod request;
pub mod summary;

pub use request::{ProtectRequest, DEFAULT_PREFIX};
pub use summary::{FailureRecord, ProcessOutcome, RunSummary};
