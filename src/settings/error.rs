// ==========================================
// 材料成本工具 - 偏好设置层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 偏好设置层错误类型
#[derive(Error, Debug)]
pub enum SettingsError {
    // ===== 数据库错误 =====
    #[error("数据库连接失败: {0}")]
    DatabaseConnectionError(String),

    #[error("数据库锁获取失败: {0}")]
    LockError(String),

    #[error("数据库查询失败: {0}")]
    DatabaseQueryError(String),

    // ===== 数据质量错误 =====
    #[error("偏好值无法解析 (key: {key}): {message}")]
    StoreUnreadable { key: String, message: String },

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<rusqlite::Error>
impl From<rusqlite::Error> for SettingsError {
    fn from(err: rusqlite::Error) -> Self {
        SettingsError::DatabaseQueryError(err.to_string())
    }
}

/// Result 类型别名
pub type SettingsResult<T> = Result<T, SettingsError>;
