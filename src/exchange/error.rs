// ==========================================
// 材料成本工具 - 交换层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 原则: 可恢复问题按最小工作单元（单行）跳过，
//       只有存储级/文件级失败才中止整个操作
// ==========================================

use crate::catalog::error::CatalogError;
use crate::settings::error::SettingsError;
use thiserror::Error;

/// 交换层错误类型
#[derive(Error, Debug)]
pub enum ExchangeError {
    // ===== 文件相关错误 =====
    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("文件写入失败: {0}")]
    FileWriteError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 格式错误 =====
    #[error("不支持的旧版三列格式（guid,weight,cost）: {0}")]
    LegacyFormat(String),

    // ===== 用户决定 =====
    // 货币不一致时用户拒绝继续：是主动中止，不是故障
    #[error("货币单位不一致，用户取消导入")]
    ImportDeclined,

    // ===== 协作层错误 =====
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ExchangeError {
    fn from(err: std::io::Error) -> Self {
        ExchangeError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ExchangeError {
    fn from(err: csv::Error) -> Self {
        ExchangeError::CsvParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ExchangeResult<T> = Result<T, ExchangeError>;
