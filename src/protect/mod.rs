//! # 单文件加密模块
//!
//! 解析输入与输出路径，读取 PDF，加密后写出。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `lopdf` 完成 PDF 解析、加密与序列化
//! - 子模块: paths, pdf, processor

pub mod paths;
pub mod pdf;
pub mod processor;

pub use processor::process_file;
