//! # 加密命令实现
//!
//! 打印本次运行的设置，执行批量加密，最后打印统计。
//!
//! ## 依赖关系
//! - 使用 `cli/mod.rs` 定义的参数
//! - 使用 `batch/` 执行批量加密
//! - 使用 `utils/output.rs` 的 `ConsoleReporter`

use crate::batch;
use crate::cli::Cli;
use crate::error::Result;
use crate::models::RunSummary;
use crate::utils::output::{self, ConsoleReporter};

use std::path::PathBuf;

/// 执行加密命令
pub fn execute(cli: Cli) -> Result<()> {
    output::print_header("Password Protecting PDFs");

    let paths: Vec<String> = cli
        .paths
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    output::print_setting("paths", &paths.join(", "));
    output::print_setting("outDir", &cli.out_dir);
    output::print_setting("prefix", &cli.filename_prefix);
    output::print_setting("password", mask_password(cli.password.as_deref()));
    println!();

    let reporter = ConsoleReporter::new();
    let summary = batch::run(
        Some(cli.paths),
        Some(PathBuf::from(cli.out_dir)),
        Some(cli.filename_prefix),
        cli.password,
        &reporter,
    )?;

    output::print_separator();
    for (path, reason) in &summary.failures {
        let first_line = reason.lines().next().unwrap_or_default();
        output::print_warning(&format!("{}: {}", path, first_line));
    }
    output::print_done(&summary_line(&summary));

    Ok(())
}

/// 密码只显示是否提供
fn mask_password(password: Option<&str>) -> &'static str {
    match password {
        Some(p) if !p.is_empty() => "********",
        _ => "<none>",
    }
}

/// 运行统计
fn summary_line(summary: &RunSummary) -> String {
    format!(
        "Protected {} of {} file(s) ({} skipped, {} failed, {} invalid path(s))",
        summary.protected,
        summary.total(),
        summary.skipped,
        summary.failed,
        summary.invalid
    )
}
