//! 记录写入服务 - 业务能力层
//!
//! 只负责"把一条记录写进 CSV"，不关心流程

use crate::error::{AppResult, IoError};
use crate::models::ResolvedRecord;
use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use std::fs::File;
use std::io::Write;
use tracing::debug;

/// 记录写入服务
///
/// 职责：
/// - 启动时打开一次输出文件（截断旧内容）
/// - 每条记录写一行，无表头，逗号分隔，只在必要时加双引号
/// - 每行写完立即 flush；Drop 时 csv::Writer 会再次 flush，出错退出时已写行仍保留
pub struct RecordWriter<W: Write = File> {
    writer: Writer<W>,
    path: String,
    rows_written: usize,
}

impl RecordWriter<File> {
    /// 创建（或截断）输出文件
    pub fn create(path: impl Into<String>) -> AppResult<Self> {
        let path = path.into();
        let file = File::create(&path).map_err(|source| IoError::OpenFailed {
            path: path.clone(),
            source,
        })?;
        Ok(Self::from_writer(file, path))
    }
}

impl<W: Write> RecordWriter<W> {
    /// 包装任意写入目标，`path` 仅用于错误信息
    pub fn from_writer(inner: W, path: impl Into<String>) -> Self {
        let writer = WriterBuilder::new()
            .has_headers(false)
            .delimiter(b',')
            .quote(b'"')
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::CRLF)
            .from_writer(inner);

        Self {
            writer,
            path: path.into(),
            rows_written: 0,
        }
    }

    /// 写入一条记录并立即 flush
    pub fn write(&mut self, record: &ResolvedRecord) -> AppResult<()> {
        self.writer
            .write_record(record.to_row())
            .map_err(|source| self.write_failed(source))?;
        self.writer
            .flush()
            .map_err(|source| self.write_failed(csv::Error::from(source)))?;

        self.rows_written += 1;
        debug!("已写入第 {} 行", self.rows_written);
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// 取出底层写入目标
    #[cfg(test)]
    fn into_inner(self) -> AppResult<W> {
        let path = self.path;
        self.writer.into_inner().map_err(|e| {
            IoError::WriteFailed {
                path,
                source: csv::Error::from(e.into_error()),
            }
            .into()
        })
    }

    fn write_failed(&self, source: csv::Error) -> crate::error::AppError {
        IoError::WriteFailed {
            path: self.path.clone(),
            source,
        }
        .into()
    }
}
