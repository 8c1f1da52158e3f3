//! # password-protect-pdfs - 批量为 PDF 加密码
//!
//! 读取指定文件或目录中的 PDF，加密码后另存。
//! 输出文件名带前缀，重复运行时据此跳过已处理文件。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── batch/     (批量执行器、文件收集)
//!   │           └── protect/   (单文件加密、路径解析、PDF 读写)
//!   ├── models/     (请求与结果数据模型)
//!   ├── utils/      (输出接口、进度条)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod protect;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&e.chain());
        std::process::exit(1);
    }
}
