//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。单一命令，无子命令。
//!
//! ## 参数
//! - `path`: 一个或多个文件/目录
//! - `--out-dir`: 输出目录，缺省为源文件所在目录
//! - `--filename-prefix`: 输出文件名前缀，默认 `pwd-`
//! - `--password`: 密码，也可由环境变量 `PDF_PASSWORD` 提供
//!
//! 可选参数只写选项名不带值时视为空字符串。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/protect.rs`

use crate::models::DEFAULT_PREFIX;

use clap::Parser;
use std::path::PathBuf;

/// password-protect-pdfs - 批量为 PDF 加密码
#[derive(Parser, Debug)]
#[command(name = "password-protect-pdfs")]
#[command(version)]
#[command(about = "Load in and re-save pdfs with a password.", long_about = None)]
pub struct Cli {
    /// Pdfs or directories containing pdfs to load, add password and save with any specified filename prefix added
    #[arg(value_name = "PATH", required = true, num_args = 1..)]
    pub paths: Vec<PathBuf>,

    /// Directory to output password protected pdfs; default is the source dir. Can be an absolute or relative path
    #[arg(long, num_args = 0..=1, default_value = "", default_missing_value = "")]
    pub out_dir: String,

    /// Prefix added to the filename to mark the file as password protected
    #[arg(long, num_args = 0..=1, default_value = DEFAULT_PREFIX, default_missing_value = "")]
    pub filename_prefix: String,

    /// Password to protect generated pdfs
    #[arg(
        long,
        env = "PDF_PASSWORD",
        hide_env_values = true,
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub password: Option<String>,
}
