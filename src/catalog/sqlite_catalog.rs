// ==========================================
// 材料成本工具 - 材料目录实现
// ==========================================
// 职责: MaterialCatalog 的 SQLite 实现
// 存储: material / printer / printer_material_variant 表
//       （主机材料注册表在本地数据库中的镜像）
// ==========================================

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::material_catalog::MaterialCatalog;
use crate::db::{configure_sqlite_connection, open_sqlite_connection};
use crate::domain::material::MaterialRecord;
use crate::domain::types::ActivePrinter;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex, MutexGuard};

// ==========================================
// SqliteMaterialCatalog - 材料目录
// ==========================================
pub struct SqliteMaterialCatalog {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteMaterialCatalog {
    /// 创建新的 SqliteMaterialCatalog 实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> CatalogResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| CatalogError::DatabaseConnectionError(e.to_string()))?;

        let catalog = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        catalog.ensure_schema()?;
        Ok(catalog)
    }

    /// 从已有连接创建目录实例
    ///
    /// 说明：为保证连接行为一致，会对传入连接再次应用统一 PRAGMA（幂等）。
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> CatalogResult<Self> {
        {
            let conn_guard = conn
                .lock()
                .map_err(|e| CatalogError::LockError(e.to_string()))?;
            configure_sqlite_connection(&conn_guard)
                .map_err(|e| CatalogError::DatabaseConnectionError(e.to_string()))?;
        }

        let catalog = Self { conn };
        catalog.ensure_schema()?;
        Ok(catalog)
    }

    /// 获取数据库连接
    fn get_conn(&self) -> CatalogResult<MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| CatalogError::LockError(e.to_string()))
    }

    /// 初始化目录表（幂等）
    fn ensure_schema(&self) -> CatalogResult<()> {
        let conn = self.get_conn()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS material (
                guid                 TEXT PRIMARY KEY,
                brand                TEXT NOT NULL DEFAULT '',
                material_type        TEXT NOT NULL DEFAULT '',
                name                 TEXT NOT NULL DEFAULT '',
                approximate_diameter REAL,
                base_file_guid       TEXT,
                updated_at           TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS printer (
                printer_id        TEXT PRIMARY KEY,
                name              TEXT NOT NULL DEFAULT '',
                material_diameter REAL,
                has_materials     INTEGER NOT NULL DEFAULT 1,
                is_active         INTEGER NOT NULL DEFAULT 0
            );

            CREATE TABLE IF NOT EXISTS printer_material_variant (
                printer_id           TEXT NOT NULL,
                material_guid        TEXT NOT NULL,
                approximate_diameter REAL,
                PRIMARY KEY (printer_id, material_guid)
            );
            "#,
        )?;
        Ok(())
    }

    /// 写入/更新一条材料记录（INSERT OR REPLACE）
    ///
    /// # 参数
    /// - record: 材料记录
    /// - base_file_guid: base 材料标识（base 材料本身传 None）
    ///
    /// # 说明
    /// 供注册表同步与测试数据生成使用；日常流程只读
    pub fn replace_material(
        &self,
        record: &MaterialRecord,
        base_file_guid: Option<&str>,
    ) -> CatalogResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT OR REPLACE INTO material (
                guid, brand, material_type, name, approximate_diameter,
                base_file_guid, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                record.guid,
                record.brand,
                record.material_type,
                record.name,
                record.approximate_diameter,
                base_file_guid,
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// 写入/更新一台打印机（INSERT OR REPLACE）
    pub fn upsert_printer(&self, printer: &ActivePrinter, is_active: bool) -> CatalogResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT OR REPLACE INTO printer (
                printer_id, name, material_diameter, has_materials, is_active
            ) VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                printer.printer_id,
                printer.name,
                printer.material_diameter,
                printer.supports_materials,
                is_active,
            ],
        )?;
        Ok(())
    }

    /// 写入/更新一条按打印机的材料变体线径记录
    pub fn upsert_printer_variant(
        &self,
        printer_id: &str,
        material_guid: &str,
        approximate_diameter: Option<f64>,
    ) -> CatalogResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT OR REPLACE INTO printer_material_variant (
                printer_id, material_guid, approximate_diameter
            ) VALUES (?1, ?2, ?3)
            "#,
            params![printer_id, material_guid, approximate_diameter],
        )?;
        Ok(())
    }

    /// 行映射: (guid, brand, type, name, diameter, base_file_guid) → MaterialRecord
    ///
    /// is_base_variant 规则: base_file_guid 为空（材料自身即 base 文件）
    /// 或等于 guid 时为 true
    fn map_record(
        guid: String,
        brand: String,
        material_type: String,
        name: String,
        approximate_diameter: Option<f64>,
        base_file_guid: Option<String>,
    ) -> MaterialRecord {
        let is_base_variant = match &base_file_guid {
            None => true,
            Some(base) => base == &guid,
        };

        MaterialRecord {
            guid,
            brand,
            material_type,
            name,
            approximate_diameter,
            is_base_variant,
        }
    }
}

impl MaterialCatalog for SqliteMaterialCatalog {
    fn materials(&self) -> CatalogResult<Vec<MaterialRecord>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT guid, brand, material_type, name, approximate_diameter, base_file_guid
             FROM material",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Self::map_record(
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    fn active_printer(&self) -> CatalogResult<Option<ActivePrinter>> {
        let conn = self.get_conn()?;
        let printer = conn
            .query_row(
                "SELECT printer_id, name, material_diameter, has_materials
                 FROM printer WHERE is_active = 1 LIMIT 1",
                [],
                |row| {
                    Ok(ActivePrinter {
                        printer_id: row.get(0)?,
                        name: row.get(1)?,
                        material_diameter: row.get(2)?,
                        supports_materials: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(printer)
    }

    fn materials_compatible_with(
        &self,
        printer: &ActivePrinter,
    ) -> CatalogResult<Vec<MaterialRecord>> {
        let target_diameter = match printer.material_diameter {
            Some(d) if printer.supports_materials => d,
            _ => return Ok(Vec::new()),
        };

        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT m.guid, m.brand, m.material_type, m.name, m.approximate_diameter,
                   m.base_file_guid,
                   COALESCE(v.approximate_diameter, m.approximate_diameter) AS effective_diameter
            FROM material m
            LEFT JOIN printer_material_variant v
                   ON v.material_guid = m.guid AND v.printer_id = ?1
            "#,
        )?;

        let rows = stmt.query_map(params![printer.printer_id], |row| {
            let record = Self::map_record(
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
            );
            let effective_diameter: Option<f64> = row.get(6)?;
            Ok((record, effective_diameter))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (record, effective_diameter) = row?;
            // 浮点相等比较（与主机记录的线径快照一致才算兼容）
            if effective_diameter == Some(target_diameter) {
                records.push(record);
            }
        }
        Ok(records)
    }
}
