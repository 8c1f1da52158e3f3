//! # 路径解析
//!
//! 绝对路径规整与输出目录解析。
//!
//! ## 输出目录优先级
//! 1. `out_dir` 为绝对路径：直接使用（不存在时稍后创建）
//! 2. `out_dir` 非空且相对当前工作目录已是目录：使用其绝对形式
//! 3. 其他情况：作为片段追加到源目录之后（空值即源目录本身）
//!
//! 第 3 条意味着尚不存在的相对目录总是嵌套在源目录下。
//!
//! ## 依赖关系
//! - 被 `protect/processor.rs` 使用

use std::env;
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Component, Path, PathBuf};

/// 转为绝对路径并按词法规整 `.` 与 `..`，不解析符号链接
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize(path))
    } else {
        Ok(normalize(&env::current_dir()?.join(path)))
    }
}

/// 词法规整路径
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// 解析输出目录的绝对路径
pub fn resolve_output_dir(abs_dir: &Path, out_dir: &Path) -> io::Result<PathBuf> {
    if out_dir.is_absolute() {
        Ok(normalize(out_dir))
    } else if !out_dir.as_os_str().is_empty() && out_dir.is_dir() {
        absolutize(out_dir)
    } else {
        Ok(normalize(&abs_dir.join(out_dir)))
    }
}

/// 输出文件路径: `{abs_out_dir}/{prefix}{filename}`
pub fn output_file_path(abs_out_dir: &Path, prefix: &str, filename: &OsStr) -> PathBuf {
    let mut name = OsString::from(prefix);
    name.push(filename);
    abs_out_dir.join(name)
}
