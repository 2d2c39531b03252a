// ==========================================
// 材料成本工具 - SQLite 连接初始化
// ==========================================
// 目标:
// - 统一所有 Connection::open 的 PRAGMA 行为，避免"部分模块外键开启/部分不开启"
// - 统一 busy_timeout，减少偶发 busy 错误
// ==========================================

use rusqlite::Connection;
use std::path::PathBuf;
use std::time::Duration;

/// 默认 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 配置 SQLite 连接的统一 PRAGMA
///
/// 说明：
/// - foreign_keys 需要"每个连接"单独开启
/// - busy_timeout 需要"每个连接"单独配置
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// 打开 SQLite 连接并应用统一配置
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// 默认数据库路径
///
/// 位于用户数据目录下的 material-cost-tools/material_cost_tools.db；
/// 目录不存在时回退到当前目录。
pub fn default_db_path() -> String {
    let mut dir: PathBuf = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    dir.push("material-cost-tools");
    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::warn!(error = %e, "无法创建数据目录，回退到当前目录");
        dir = PathBuf::from(".");
    }
    dir.push("material_cost_tools.db");
    dir.display().to_string()
}
