//! # 批量执行器
//!
//! 按输入顺序逐个处理路径，单线程，不重排。
//!
//! ## 功能
//! - 文件：直接处理，错误向上传播并终止本次运行
//! - 目录：遍历其中的 PDF，单个文件失败只记录，继续处理其余文件，
//!   遍历结束后汇总失败文件
//! - 其他：报告为无效路径并继续
//!
//! ## 依赖关系
//! - 被 `commands/protect.rs` 调用
//! - 使用 `batch/collector.rs` 收集目录中的 PDF
//! - 使用 `protect/processor.rs` 处理单个文件

use crate::batch::FileCollector;
use crate::error::{ProtectError, Result};
use crate::models::{FailureRecord, ProtectRequest, RunSummary};
use crate::protect::process_file;
use crate::utils::output::Reporter;

use std::path::{Path, PathBuf};

/// 校验参数并执行一次批量加密
///
/// 参数不合法时在任何文件 I/O 之前返回 `Configuration` 错误。
pub fn run(
    paths: Option<Vec<PathBuf>>,
    out_dir: Option<PathBuf>,
    prefix: Option<String>,
    password: Option<String>,
    reporter: &dyn Reporter,
) -> Result<RunSummary> {
    let request = ProtectRequest::new(paths, out_dir, prefix, password)?;
    BatchRunner::new(&request, reporter).run()
}

/// 批量执行器
pub struct BatchRunner<'a> {
    request: &'a ProtectRequest,
    reporter: &'a dyn Reporter,
}

impl<'a> BatchRunner<'a> {
    /// 创建新的批量执行器
    pub fn new(request: &'a ProtectRequest, reporter: &'a dyn Reporter) -> Self {
        Self { request, reporter }
    }

    /// 依次处理全部输入路径
    pub fn run(&self) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for path in self.request.paths() {
            if path.is_file() {
                self.run_file(path, &mut summary)?;
            } else if path.is_dir() {
                self.run_directory(path, &mut summary)?;
            } else {
                self.report_invalid(path, &mut summary);
            }
        }

        Ok(summary)
    }

    /// 单文件输入，错误不隔离
    fn run_file(&self, path: &Path, summary: &mut RunSummary) -> Result<()> {
        let dir = path.parent().unwrap_or_else(|| Path::new(""));
        let filename = path.file_name().ok_or_else(|| ProtectError::DocumentRead {
            path: path.display().to_string(),
            reason: "path has no file name".to_string(),
        })?;

        let outcome = process_file(dir, filename, self.request, self.reporter)?;
        summary.merge(&outcome);
        Ok(())
    }

    /// 目录输入，逐文件隔离错误
    fn run_directory(&self, dir: &Path, summary: &mut RunSummary) -> Result<()> {
        let collector = FileCollector::new(dir);
        let filenames = collector.collect()?;

        let mut failures = FailureRecord::new();
        self.reporter.start_progress(filenames.len() as u64);

        for filename in &filenames {
            match process_file(collector.dir(), filename, self.request, self.reporter) {
                Ok(outcome) => summary.merge(&outcome),
                Err(e) => {
                    let name = filename.to_string_lossy().to_string();
                    self.reporter.error(&format!("{}: {}", name, e.chain()));
                    failures.insert(name, e);
                }
            }
            self.reporter.advance();
        }

        self.reporter.finish_progress();

        if !failures.is_empty() {
            self.reporter
                .warning(&format!("{} failed files:", failures.len()));
            for filename in failures.keys() {
                self.reporter.warning(&format!("    {}", filename));
            }
        }

        summary.absorb_failures(dir, &failures);
        Ok(())
    }

    fn report_invalid(&self, path: &Path, summary: &mut RunSummary) {
        let err = ProtectError::InvalidPath {
            path: path.display().to_string(),
        };
        self.reporter.warning(&err.to_string());
        summary.invalid += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protect::pdf::fixtures::write_sample_pdf;
    use crate::utils::output::{Level, MemoryReporter};
    use std::fs;
    use tempfile::tempdir;

    fn secret() -> Option<String> {
        Some("secret".to_string())
    }

    fn pwd() -> Option<String> {
        Some("pwd-".to_string())
    }

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_empty_password_fails_without_io() {
        let dir = tempdir().unwrap();
        write_sample_pdf(&dir.path().join("a.pdf"), 1);
        let reporter = MemoryReporter::default();

        for password in [None, Some(String::new())] {
            let err = run(
                Some(vec![dir.path().to_path_buf()]),
                None,
                pwd(),
                password,
                &reporter,
            )
            .unwrap_err();
            assert!(matches!(err, ProtectError::Configuration(_)));
        }

        assert!(reporter.is_empty());
        assert_eq!(entries(dir.path()), vec!["a.pdf"]);
    }

    #[test]
    fn test_missing_paths_fails() {
        let reporter = MemoryReporter::default();
        let err = run(None, None, pwd(), secret(), &reporter).unwrap_err();
        assert!(matches!(err, ProtectError::Configuration(_)));
        assert!(reporter.is_empty());
    }

    #[test]
    fn test_second_run_skips_prefixed_outputs() {
        let dir = tempdir().unwrap();
        write_sample_pdf(&dir.path().join("report.pdf"), 1);
        let paths = Some(vec![dir.path().to_path_buf()]);

        let first = MemoryReporter::default();
        let summary = run(paths.clone(), None, pwd(), secret(), &first).unwrap();
        assert_eq!(summary.protected, 1);
        assert_eq!(entries(dir.path()), vec!["pwd-report.pdf", "report.pdf"]);

        let second = MemoryReporter::default();
        let summary = run(paths, None, pwd(), secret(), &second).unwrap();
        assert_eq!(summary.skipped, 1);
        assert_eq!(
            second.messages(Level::Skip),
            vec!["Skipping pwd-report.pdf as it already has the prefix pwd-"]
        );
        assert_eq!(entries(dir.path()), vec!["pwd-report.pdf", "report.pdf"]);
    }

    #[test]
    fn test_directory_walk_matches_any_case() {
        let dir = tempdir().unwrap();
        let out = tempdir().unwrap();
        for name in ["A.PDF", "b.pdf", "C.Pdf"] {
            write_sample_pdf(&dir.path().join(name), 1);
        }
        fs::write(dir.path().join("notes.txt"), b"not a pdf").unwrap();
        let reporter = MemoryReporter::default();

        let summary = run(
            Some(vec![dir.path().to_path_buf()]),
            Some(out.path().to_path_buf()),
            pwd(),
            secret(),
            &reporter,
        )
        .unwrap();

        assert_eq!(summary.protected, 3);
        assert_eq!(summary.failed, 0);
        assert_eq!(
            entries(out.path()),
            vec!["pwd-A.PDF", "pwd-C.Pdf", "pwd-b.pdf"]
        );
    }

    #[test]
    fn test_corrupt_file_in_directory_is_isolated() {
        let dir = tempdir().unwrap();
        write_sample_pdf(&dir.path().join("good1.pdf"), 1);
        write_sample_pdf(&dir.path().join("good2.pdf"), 2);
        fs::write(dir.path().join("bad.pdf"), b"%PDF-1.5 garbage").unwrap();
        let reporter = MemoryReporter::default();

        let summary = run(
            Some(vec![dir.path().to_path_buf()]),
            None,
            pwd(),
            secret(),
            &reporter,
        )
        .unwrap();

        assert_eq!(summary.protected, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.failures.len(), 1);
        assert!(summary.failures[0].0.ends_with("bad.pdf"));
        assert!(dir.path().join("pwd-good1.pdf").is_file());
        assert!(dir.path().join("pwd-good2.pdf").is_file());
        assert!(!dir.path().join("pwd-bad.pdf").exists());
        assert_eq!(
            reporter.messages(Level::Warning),
            vec!["1 failed files:", "    bad.pdf"]
        );
        assert_eq!(reporter.messages(Level::Error).len(), 1);
    }

    #[test]
    fn test_hidden_sidecar_files_are_ignored() {
        let dir = tempdir().unwrap();
        write_sample_pdf(&dir.path().join("report.pdf"), 1);
        fs::write(dir.path().join("._report.pdf"), b"\x00\x05\x16\x07").unwrap();
        let reporter = MemoryReporter::default();

        let summary = run(
            Some(vec![dir.path().to_path_buf()]),
            None,
            pwd(),
            secret(),
            &reporter,
        )
        .unwrap();

        assert_eq!(summary.protected, 1);
        assert_eq!(summary.failed, 0);
        assert!(reporter.messages(Level::Warning).is_empty());
    }

    #[test]
    fn test_directory_named_pdf_is_reported_as_failure() {
        let dir = tempdir().unwrap();
        write_sample_pdf(&dir.path().join("good.pdf"), 1);
        fs::create_dir(dir.path().join("folder.pdf")).unwrap();
        let reporter = MemoryReporter::default();

        let summary = run(
            Some(vec![dir.path().to_path_buf()]),
            None,
            pwd(),
            secret(),
            &reporter,
        )
        .unwrap();

        assert_eq!(summary.protected, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(
            reporter.messages(Level::Warning),
            vec!["1 failed files:", "    folder.pdf"]
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_names_are_processed() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        let walked = dir.path().join(OsStr::from_bytes(b"r\xe9sum\xe9.pdf"));
        let single = tempdir().unwrap();
        let direct = single.path().join(OsStr::from_bytes(b"\xff.pdf"));
        write_sample_pdf(&walked, 1);
        write_sample_pdf(&direct, 1);
        let reporter = MemoryReporter::default();

        let summary = run(
            Some(vec![dir.path().to_path_buf(), direct]),
            None,
            pwd(),
            secret(),
            &reporter,
        )
        .unwrap();

        assert_eq!(summary.protected, 2);
        assert_eq!(summary.invalid, 0);
        assert!(dir
            .path()
            .join(OsStr::from_bytes(b"pwd-r\xe9sum\xe9.pdf"))
            .is_file());
        assert!(single
            .path()
            .join(OsStr::from_bytes(b"pwd-\xff.pdf"))
            .is_file());
    }

    #[test]
    fn test_corrupt_single_file_aborts_run() {
        let dir = tempdir().unwrap();
        let bad = dir.path().join("bad.pdf");
        let later = dir.path().join("later.pdf");
        fs::write(&bad, b"garbage").unwrap();
        write_sample_pdf(&later, 1);
        let reporter = MemoryReporter::default();

        let err = run(
            Some(vec![bad, later]),
            None,
            pwd(),
            secret(),
            &reporter,
        )
        .unwrap_err();

        assert!(matches!(err, ProtectError::DocumentRead { .. }));
        assert!(!dir.path().join("pwd-later.pdf").exists());
    }

    #[test]
    fn test_invalid_path_is_reported_and_run_continues() {
        let dir = tempdir().unwrap();
        write_sample_pdf(&dir.path().join("a.pdf"), 1);
        let missing = dir.path().join("no-such-thing");
        let reporter = MemoryReporter::default();

        let summary = run(
            Some(vec![missing.clone(), dir.path().join("a.pdf")]),
            None,
            pwd(),
            secret(),
            &reporter,
        )
        .unwrap();

        assert_eq!(summary.invalid, 1);
        assert_eq!(summary.protected, 1);
        assert_eq!(
            reporter.messages(Level::Warning),
            vec![format!("{} is not a valid path", missing.display())]
        );
        assert!(dir.path().join("pwd-a.pdf").is_file());
    }
}
