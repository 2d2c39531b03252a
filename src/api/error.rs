// ==========================================
// 材料成本工具 - API层错误类型
// ==========================================
// 职责: 把交换层/偏好层/目录层的技术错误转换为用户可理解的业务错误
// 说明: 取消类结果（未选文件、货币不一致被拒绝、清除被拒绝）
//       不是错误，不经过本类型
// ==========================================

use crate::catalog::error::CatalogError;
use crate::exchange::error::ExchangeError;
use crate::settings::error::SettingsError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== 导入/导出错误 =====
    #[error("文件导入失败: {0}")]
    ImportError(String),

    #[error("文件导出失败: {0}")]
    ExportError(String),

    // ===== 协作层错误 =====
    #[error("偏好存储错误: {0}")]
    StoreError(String),

    #[error("材料目录错误: {0}")]
    CatalogError(String),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从协作层错误转换
// ==========================================
impl From<SettingsError> for ApiError {
    fn from(err: SettingsError) -> Self {
        match err {
            SettingsError::StoreUnreadable { key, message } => {
                ApiError::StoreError(format!("偏好值无法解析 (key: {}): {}", key, message))
            }
            other => ApiError::StoreError(other.to_string()),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError::CatalogError(err.to_string())
    }
}

impl ApiError {
    /// 导入上下文的交换层错误转换
    ///
    /// 注意: ImportDeclined 是用户主动中止，调用方先行处理，不应到达此处
    pub fn from_import(err: ExchangeError) -> Self {
        match err {
            ExchangeError::Settings(e) => e.into(),
            ExchangeError::Catalog(e) => e.into(),
            other => ApiError::ImportError(other.to_string()),
        }
    }

    /// 导出上下文的交换层错误转换
    pub fn from_export(err: ExchangeError) -> Self {
        match err {
            ExchangeError::Settings(e) => e.into(),
            ExchangeError::Catalog(e) => e.into(),
            other => ApiError::ExportError(other.to_string()),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
