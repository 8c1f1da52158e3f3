//! # 美化输出工具
//!
//! 提供统一的终端输出样式，以及可注入的输出接口 `Reporter`。
//!
//! 批量执行器只通过 `Reporter` 输出进度与失败信息，
//! 测试中替换为内存实现即可断言输出内容。
//!
//! ## 依赖关系
//! - 被 `batch/`, `protect/`, `commands/` 模块使用
//! - 使用 `colored` crate
//! - 使用 `utils/progress.rs` 创建进度条

use crate::utils::progress;

use colored::Colorize;
use indicatif::ProgressBar;
use std::cell::RefCell;

/// 进度与诊断信息的输出接口
pub trait Reporter {
    /// 进度信息
    fn info(&self, msg: &str);

    /// 单个文件处理成功
    fn success(&self, msg: &str);

    /// 跳过的文件
    fn skip(&self, msg: &str);

    /// 非致命问题（无效路径、失败汇总）
    fn warning(&self, msg: &str);

    /// 单个文件的失败详情
    fn error(&self, msg: &str);

    /// 开始一段已知长度的处理（目录遍历）
    fn start_progress(&self, _len: u64) {}

    /// 完成一项
    fn advance(&self) {}

    /// 结束当前进度
    fn finish_progress(&self) {}
}

/// 终端输出实现
#[derive(Default)]
pub struct ConsoleReporter {
    bar: RefCell<Option<ProgressBar>>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 打印时暂停进度条，避免输出交错
    fn emit(&self, f: impl FnOnce()) {
        match self.bar.borrow().as_ref() {
            Some(pb) => pb.suspend(f),
            None => f(),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn info(&self, msg: &str) {
        self.emit(|| print_info(msg));
    }

    fn success(&self, msg: &str) {
        self.emit(|| print_success(msg));
    }

    fn skip(&self, msg: &str) {
        self.emit(|| print_skip(msg));
    }

    fn warning(&self, msg: &str) {
        self.emit(|| print_warning(msg));
    }

    fn error(&self, msg: &str) {
        self.emit(|| print_error(msg));
    }

    fn start_progress(&self, len: u64) {
        let pb = progress::create_progress_bar(len, "Protecting");
        if let Some(old) = self.bar.replace(Some(pb)) {
            old.finish_and_clear();
        }
    }

    fn advance(&self) {
        if let Some(pb) = self.bar.borrow().as_ref() {
            pb.inc(1);
        }
    }

    fn finish_progress(&self) {
        if let Some(pb) = self.bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印跳过消息
pub fn print_skip(msg: &str) {
    println!("{} {}", "[SKIP]".dimmed(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印键值对设置项
pub fn print_setting(key: &str, value: &str) {
    println!("    {:<10} {}", format!("{}:", key).dimmed(), value);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}

/// 输出级别（测试用内存实现记录）
#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Skip,
    Warning,
    Error,
}

/// 内存输出实现，记录全部消息供断言
#[cfg(test)]
#[derive(Default)]
pub struct MemoryReporter {
    pub lines: RefCell<Vec<(Level, String)>>,
}

#[cfg(test)]
impl MemoryReporter {
    /// 指定级别的全部消息
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    fn push(&self, level: Level, msg: &str) {
        self.lines.borrow_mut().push((level, msg.to_string()));
    }
}

#[cfg(test)]
impl Reporter for MemoryReporter {
    fn info(&self, msg: &str) {
        self.push(Level::Info, msg);
    }

    fn success(&self, msg: &str) {
        self.push(Level::Success, msg);
    }

    fn skip(&self, msg: &str) {
        self.push(Level::Skip, msg);
    }

    fn warning(&self, msg: &str) {
        self.push(Level::Warning, msg);
    }

    fn error(&self, msg: &str) {
        self.push(Level::Error, msg);
    }
}
