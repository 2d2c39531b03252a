// ==========================================
// 材料成本工具 - 偏好存储实现
// ==========================================
// 职责: SettingsStore 的 SQLite 实现
// 存储: preference_kv 表 (key-value + 审计时间)
// ==========================================

use crate::db::{configure_sqlite_connection, open_sqlite_connection};
use crate::settings::error::{SettingsError, SettingsResult};
use crate::settings::settings_store::SettingsStore;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex};

// ==========================================
// PreferenceStore - 偏好存储
// ==========================================
pub struct PreferenceStore {
    conn: Arc<Mutex<Connection>>,
}

impl PreferenceStore {
    /// 创建新的 PreferenceStore 实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> SettingsResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| SettingsError::DatabaseConnectionError(e.to_string()))?;

        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.ensure_schema()?;
        Ok(store)
    }

    /// 从已有连接创建 PreferenceStore
    ///
    /// 说明：为保证连接行为一致，会对传入连接再次应用统一 PRAGMA（幂等）。
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> SettingsResult<Self> {
        {
            let conn_guard = conn
                .lock()
                .map_err(|e| SettingsError::LockError(e.to_string()))?;
            configure_sqlite_connection(&conn_guard)
                .map_err(|e| SettingsError::DatabaseConnectionError(e.to_string()))?;
        }

        let store = Self { conn };
        store.ensure_schema()?;
        Ok(store)
    }

    /// 初始化 preference_kv 表（幂等）
    fn ensure_schema(&self) -> SettingsResult<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| SettingsError::LockError(e.to_string()))?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS preference_kv (
                key        TEXT PRIMARY KEY,
                value      TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );",
        )?;
        Ok(())
    }
}

impl SettingsStore for PreferenceStore {
    fn get_value(&self, key: &str) -> SettingsResult<Option<String>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| SettingsError::LockError(e.to_string()))?;

        let value = conn
            .query_row(
                "SELECT value FROM preference_kv WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(value)
    }

    fn set_value(&self, key: &str, value: &str) -> SettingsResult<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| SettingsError::LockError(e.to_string()))?;

        // 使用 UPSERT 语法（SQLite 3.24.0+）
        conn.execute(
            "INSERT INTO preference_kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}
