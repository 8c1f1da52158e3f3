//! # PDF 读写与加密
//!
//! 封装 `lopdf`，对外只提供打开、加密写出两个能力。
//!
//! ## 加密参数
//! - 标准安全处理器，RC4 128 位密钥
//! - 用户密码与所有者密码相同
//! - 授予全部权限
//!
//! ## 依赖关系
//! - 被 `protect/processor.rs` 使用
//! - 使用 `lopdf`, `md5`

use crate::error::{ProtectError, Result};

use lopdf::{Document, EncryptionState, EncryptionVersion, Object, Permissions, StringFormat};
use std::fmt::Display;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// RC4 密钥长度（位）
const KEY_LENGTH: usize = 128;

/// 已加载的源 PDF
pub struct PdfDocument {
    inner: Document,
    /// 源文件字节的 MD5，缺少 /ID 时用作文件标识
    digest: [u8; 16],
}

impl PdfDocument {
    /// 读取并解析源 PDF
    pub fn open(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| read_error(path, e))?;
        let inner = Document::load_mem(&bytes).map_err(|e| read_error(path, e))?;

        if inner.is_encrypted() {
            return Err(read_error(path, "document is already password protected"));
        }

        Ok(Self {
            inner,
            digest: md5::compute(&bytes).0,
        })
    }

    /// 页数
    pub fn page_count(&self) -> usize {
        self.inner.get_pages().len()
    }

    /// 使用密码加密并写出到目标路径（覆盖已有文件）
    pub fn save_protected(&mut self, password: &str, dest: &Path) -> Result<()> {
        self.ensure_file_id();

        let version = EncryptionVersion::V2 {
            document: &self.inner,
            owner_password: password,
            user_password: password,
            key_length: KEY_LENGTH,
            permissions: Permissions::all(),
        };
        let state = EncryptionState::try_from(version).map_err(|e| write_error(dest, e))?;
        self.inner
            .encrypt(&state)
            .map_err(|e| write_error(dest, e))?;

        let file = File::create(dest).map_err(|e| {
            ProtectError::write_io(dest.display().to_string(), "cannot create output file", e)
        })?;
        let mut writer = BufWriter::new(file);
        self.inner
            .save_to(&mut writer)
            .map_err(|e| write_error(dest, e))?;
        writer.flush().map_err(|e| {
            ProtectError::write_io(dest.display().to_string(), "cannot flush output file", e)
        })
    }

    /// 加密密钥由 trailer 中的 /ID 派生，缺失时补上
    fn ensure_file_id(&mut self) {
        if self.inner.trailer.get(b"ID").is_ok() {
            return;
        }
        let id = Object::String(self.digest.to_vec(), StringFormat::Hexadecimal);
        self.inner
            .trailer
            .set("ID", Object::Array(vec![id.clone(), id]));
    }
}

fn read_error(path: &Path, reason: impl Display) -> ProtectError {
    ProtectError::DocumentRead {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

fn write_error(path: &Path, reason: impl Display) -> ProtectError {
    ProtectError::DocumentWrite {
        path: path.display().to_string(),
        reason: reason.to_string(),
        source: None,
    }
}
