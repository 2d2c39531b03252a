// ==========================================
// 材料成本工具 - CSV 导入器
// ==========================================
// 职责: 读取 CSV 文件，逐行校验并合并进现有成本条目映射
// 红线: 原地合并，绝不整体替换映射；
//       单行失败跳过该行继续，存储级/文件级失败才中止
// ==========================================

use crate::domain::material::CostEntryMap;
use crate::domain::types::ImportSummary;
use crate::exchange::confirm::{ConfirmRequest, ConfirmationProvider};
use crate::exchange::error::{ExchangeError, ExchangeResult};
use crate::settings::settings_store::SettingsStore;
use regex::Regex;
use std::fs::File;
use std::path::Path;
use std::sync::OnceLock;
use uuid::Uuid;

/// 单行合并结果
enum RowOutcome {
    /// 至少一个数值字段解析成功并已合并
    Merged,
    /// 行被跳过（字段不足/UUID 非法/数值全部解析失败）
    Skipped,
}

// ==========================================
// CsvImporter - CSV 导入器
// ==========================================
pub struct CsvImporter<'a> {
    confirm: &'a dyn ConfirmationProvider,
}

impl<'a> CsvImporter<'a> {
    pub fn new(confirm: &'a dyn ConfirmationProvider) -> Self {
        Self { confirm }
    }

    /// 从 CSV 文件导入成本数据并合并进偏好存储
    ///
    /// # 参数
    /// - path: CSV 文件路径
    /// - settings: 偏好存储（读-改-写，最后单次持久化）
    ///
    /// # 返回
    /// - Ok(ImportSummary): 合并行数与跳过行数；成功读取后零数据行不是错误
    /// - Err(StoreUnreadable/FileReadError): 在任何变更前中止
    /// - Err(LegacyFormat): 旧版三列文件，明确拒绝而非静默误读
    /// - Err(ImportDeclined): 货币不一致且用户拒绝，整个导入中止、无部分合并
    ///
    /// # 导入流程
    /// 1. 读取现有成本条目（JSON 无法解析 → 中止）
    /// 2. 第 0 行为表头：旧版格式检测 + 货币一致性检查（至多询问一次）
    /// 3. 数据行 ≥4 个有序字段 (guid, name, weight, cost)，多余尾字段忽略
    /// 4. guid 必须是语法合法的 UUID，非法行跳过并记日志
    /// 5. weight 按整数、cost 按浮点各自独立解析，互不影响
    /// 6. 解析成功的字段覆盖现有条目的对应字段（条目不存在则创建）
    /// 7. 全部行处理完后单次写回
    pub fn import_from_path(
        &self,
        path: &Path,
        settings: &dyn SettingsStore,
    ) -> ExchangeResult<ImportSummary> {
        // 任何变更前先确认现有存储可读
        let mut entries = settings.cost_entries()?;

        let file = File::open(path)
            .map_err(|e| ExchangeError::FileReadError(format!("{}: {}", path.display(), e)))?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // 允许行长度不一致，行级校验自行处理
            .delimiter(b',')
            .quote(b'"')
            .from_reader(file);

        let mut summary = ImportSummary::default();
        let mut line_number: i64 = -1;
        for result in reader.records() {
            line_number += 1;

            let row = match result {
                Ok(row) => row,
                Err(e) => {
                    // IO 层失败中止整个导入；记录级失败只跳过该行
                    if matches!(e.kind(), csv::ErrorKind::Io(_)) {
                        return Err(ExchangeError::CsvParseError(e.to_string()));
                    }
                    tracing::error!(line = line_number, error = %e, "CSV 行读取失败，已跳过");
                    if line_number > 0 {
                        summary.skipped_rows += 1;
                    }
                    continue;
                }
            };

            if line_number == 0 {
                self.check_header(&row, settings)?;
                continue;
            }

            match Self::merge_row(line_number, &row, &mut entries) {
                RowOutcome::Merged => summary.imported_rows += 1,
                RowOutcome::Skipped => summary.skipped_rows += 1,
            }
        }

        // 单次持久化调用
        settings.set_cost_entries(&entries)?;

        tracing::info!(
            path = %path.display(),
            imported = summary.imported_rows,
            skipped = summary.skipped_rows,
            "成本数据导入完成"
        );
        Ok(summary)
    }

    /// 表头检查: 旧版格式拒绝 + 货币一致性确认
    ///
    /// 货币代码缺失（表头过短或第 4 列不匹配模式）视为"未知"，
    /// 不做检查也不警告
    fn check_header(
        &self,
        header: &csv::StringRecord,
        settings: &dyn SettingsStore,
    ) -> ExchangeResult<()> {
        // 恰好三列是旧版布局 (guid,weight,cost)，明确拒绝
        if header.len() == 3 {
            return Err(ExchangeError::LegacyFormat(format!(
                "表头: {}",
                header.iter().collect::<Vec<_>>().join(",")
            )));
        }

        if let Some(file_currency) = Self::scan_header_currency(header) {
            let configured_currency = settings.currency()?;
            if file_currency != configured_currency {
                let request = ConfirmRequest::CurrencyMismatch {
                    file_currency,
                    configured_currency,
                };
                // 整个导入至多询问一次；拒绝则整体中止、无部分合并
                if !self.confirm.confirm(&request) {
                    tracing::info!("货币单位不一致，用户取消导入");
                    return Err(ExchangeError::ImportDeclined);
                }
            }
        }
        Ok(())
    }

    /// 从表头第 4 列（索引 3）提取货币代码
    ///
    /// 模式: `cost\s\((.*)\)`；不匹配返回 None
    pub fn scan_header_currency(header: &csv::StringRecord) -> Option<String> {
        static COST_HEADER_RE: OnceLock<Option<Regex>> = OnceLock::new();
        let re = COST_HEADER_RE
            .get_or_init(|| Regex::new(r"cost\s\((.*)\)").ok())
            .as_ref()?;

        let cell = header.get(3)?;
        re.captures(cell).map(|caps| caps[1].to_string())
    }

    /// 校验并合并单个数据行
    fn merge_row(line_number: i64, row: &csv::StringRecord, entries: &mut CostEntryMap) -> RowOutcome {
        // 至少 4 个有序字段: guid, name, weight, cost；多余尾字段忽略
        if row.len() < 4 {
            tracing::error!(line = line_number, fields = row.len(), "行字段不足，已跳过");
            return RowOutcome::Skipped;
        }

        let guid = row.get(0).unwrap_or("").trim();
        if Uuid::parse_str(guid).is_err() {
            tracing::error!(line = line_number, guid = %guid, "UUID 格式非法，已跳过");
            return RowOutcome::Skipped;
        }

        // 重量与价格各自独立解析；一行可以只贡献其中一个字段
        let weight = row.get(2).and_then(|v| v.trim().parse::<i32>().ok());
        let cost = row.get(3).and_then(|v| v.trim().parse::<f64>().ok());

        if weight.is_none() && cost.is_none() {
            tracing::error!(line = line_number, guid = %guid, "重量与价格均无法解析，已跳过");
            return RowOutcome::Skipped;
        }

        let entry = entries.entry(guid.to_string()).or_default();
        if let Some(w) = weight {
            entry.spool_weight = Some(w);
        }
        if let Some(c) = cost {
            entry.spool_cost = Some(c);
        }
        RowOutcome::Merged
    }
}
