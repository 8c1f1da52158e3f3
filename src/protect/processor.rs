//! # 单文件处理
//!
//! 为单个 PDF 加密码并写出到输出目录。
//!
//! ## 流程
//! 1. 文件名已带前缀则跳过
//! 2. 解析源文件与输出目录的绝对路径
//! 3. 读取源 PDF
//! 4. 创建输出目录（已存在不报错）
//! 5. 加密并写出，覆盖同名文件
//!
//! 任何错误都返回给调用方，由批量执行器决定终止还是记录后继续。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `protect/paths.rs`, `protect/pdf.rs`
//! - 使用 `utils/output.rs` 的 `Reporter`

use crate::error::{ProtectError, Result};
use crate::models::{ProcessOutcome, ProtectRequest};
use crate::protect::paths;
use crate::protect::pdf::PdfDocument;
use crate::utils::output::Reporter;

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

/// 处理 `dir` 下名为 `filename` 的 PDF
pub fn process_file(
    dir: &Path,
    filename: &OsStr,
    request: &ProtectRequest,
    reporter: &dyn Reporter,
) -> Result<ProcessOutcome> {
    let prefix = request.prefix();
    let name = filename.to_string_lossy();

    if !prefix.is_empty() && name.starts_with(prefix) {
        reporter.skip(&format!(
            "Skipping {} as it already has the prefix {}",
            name, prefix
        ));
        return Ok(ProcessOutcome::Skipped(name.to_string()));
    }

    let abs_dir = paths::absolutize(dir).map_err(|e| ProtectError::DocumentRead {
        path: dir.display().to_string(),
        reason: format!("cannot resolve directory: {}", e),
    })?;
    let abs_path = paths::normalize(&abs_dir.join(filename));

    let abs_out_dir = paths::resolve_output_dir(&abs_dir, request.out_dir()).map_err(|e| {
        ProtectError::write_io(
            request.out_dir().display().to_string(),
            "cannot resolve output directory",
            e,
        )
    })?;
    let abs_out_path = paths::output_file_path(&abs_out_dir, prefix, filename);

    reporter.info(&format!(
        "Adding password to {} and saving as {}.",
        abs_path.display(),
        abs_out_path.display()
    ));

    let mut document = PdfDocument::open(&abs_path)?;
    let pages = document.page_count();

    fs::create_dir_all(&abs_out_dir).map_err(|e| {
        ProtectError::write_io(
            abs_out_dir.display().to_string(),
            "cannot create output directory",
            e,
        )
    })?;

    document.save_protected(request.password(), &abs_out_path)?;

    reporter.success(&format!(
        "{} ({} page(s))",
        abs_out_path.display(),
        pages
    ));

    Ok(ProcessOutcome::Protected(abs_out_path))
}
