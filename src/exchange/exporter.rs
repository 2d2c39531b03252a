// ==========================================
// 材料成本工具 - CSV 导出器
// ==========================================
// 职责: 把选中的材料与成本数据序列化为 CSV 文件
// 格式: guid,name,weight (g),cost (<货币代码>)
//       分隔符 ','，引号 '"'，最小引用，'\n' 行尾不做平台转换
// ==========================================

use crate::domain::material::{CostEntryMap, MaterialRecord};
use crate::domain::types::ExportSummary;
use crate::exchange::error::{ExchangeError, ExchangeResult};
use std::fs::File;
use std::path::Path;

// ==========================================
// CsvExporter - CSV 导出器
// ==========================================
pub struct CsvExporter;

impl CsvExporter {
    /// 品牌过滤谓词: 只有携带非空品牌属性的记录参与导出
    ///
    /// 说明: 这是对上游数据质量过滤的保留行为，非刻意策略；
    ///       作为显式命名谓词存在，便于单独测试（见 DESIGN.md 开放问题）
    pub fn has_exportable_brand(record: &MaterialRecord) -> bool {
        !record.brand.is_empty()
    }

    /// 导出选中材料到 CSV 文件
    ///
    /// # 参数
    /// - path: 目标文件路径（到达此步即写文件——零数据行也写出表头）
    /// - records: 选中的材料集合（本函数内部排序）
    /// - entries: 当前成本条目映射
    /// - currency: 当前货币代码（嵌入表头 cost 列，供导入侧做一致性检查）
    ///
    /// # 返回
    /// - Ok(ExportSummary): 成功写出的数据行数与跳过行数
    /// - Err: 文件创建/表头写入/落盘失败
    ///
    /// # 说明
    /// - 单行序列化失败只跳过该行并记录日志，不中止整个导出
    /// - 行序: (brand, material_type, name) 升序，区分大小写字典序，
    ///   保证输出确定、可 diff
    pub fn export_to_path(
        &self,
        path: &Path,
        records: &[MaterialRecord],
        entries: &CostEntryMap,
        currency: &str,
    ) -> ExchangeResult<ExportSummary> {
        let file = File::create(path)
            .map_err(|e| ExchangeError::FileWriteError(format!("{}: {}", path.display(), e)))?;

        let mut writer = csv::WriterBuilder::new()
            .delimiter(b',')
            .quote(b'"')
            .from_writer(file);

        // 表头写入失败属于文件级失败，中止导出
        let cost_header = format!("cost ({})", currency);
        writer
            .write_record(["guid", "name", "weight (g)", cost_header.as_str()])
            .map_err(|e| ExchangeError::FileWriteError(e.to_string()))?;

        let mut sorted: Vec<&MaterialRecord> = records
            .iter()
            .filter(|r| Self::has_exportable_brand(r))
            .collect();
        sorted.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

        let mut summary = ExportSummary::default();
        for record in sorted {
            let entry = entries.get(&record.guid);
            let weight = entry
                .and_then(|e| e.spool_weight)
                .map(|w| w.to_string())
                .unwrap_or_default();
            let cost = entry
                .and_then(|e| e.spool_cost)
                .map(|c| c.to_string())
                .unwrap_or_default();

            let label = record.export_label();
            match writer.write_record([
                record.guid.as_str(),
                label.as_str(),
                weight.as_str(),
                cost.as_str(),
            ]) {
                Ok(()) => summary.written_rows += 1,
                Err(e) => {
                    // 单行失败不中止整批
                    tracing::error!(guid = %record.guid, error = %e, "导出行序列化失败，已跳过");
                    summary.skipped_rows += 1;
                }
            }
        }

        writer
            .flush()
            .map_err(|e| ExchangeError::FileWriteError(e.to_string()))?;

        tracing::info!(
            path = %path.display(),
            written = summary.written_rows,
            skipped = summary.skipped_rows,
            "成本数据导出完成"
        );
        Ok(summary)
    }
}
