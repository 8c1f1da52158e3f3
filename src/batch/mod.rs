//! # 批量处理模块
//!
//! 按输入路径批量加密 PDF。
//!
//! ## 功能
//! - 自动检测输入类型（文件/目录/无效路径）
//! - 收集目录中的 PDF 列表
//! - 顺序处理，目录内逐文件隔离错误
//! - 失败汇总与运行统计
//!
//! ## 依赖关系
//! - 被 `commands/protect.rs` 使用
//! - 使用 `protect/` 处理单个文件
//! - 使用 `walkdir`, `glob` 收集文件

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::run;
