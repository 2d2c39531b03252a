// ==========================================
// 材料成本工具 - 成本数据交换API
// ==========================================
// 职责: 封装六个菜单命令（导入/四种导出/清除）
// 说明: 每个命令零参数触发；文件路径经注入的对话框接口获取；
//       同一时刻只有一个命令在宿主交互线程上运行（宿主负责串行化）
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::catalog::material_catalog::MaterialCatalog;
use crate::domain::types::SelectionMode;
use crate::exchange::clearer::CostDataClearer;
use crate::exchange::confirm::ConfirmationProvider;
use crate::exchange::error::ExchangeError;
use crate::exchange::exporter::CsvExporter;
use crate::exchange::importer::CsvImporter;
use crate::exchange::selector::ExportSelector;
use crate::host::dialog::FilePicker;
use crate::i18n::{t, t_with_args};
use crate::settings::settings_store::SettingsStore;

/// 交换命令响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeResponse {
    /// 成功处理的数据行数
    pub rows: usize,
    /// 实际读写的文件路径（清除命令为空）
    pub file_path: String,
    /// 用户可见的本地化结果消息
    pub message: String,
}

// ==========================================
// CostDataApi - 成本数据交换API
// ==========================================
pub struct CostDataApi {
    settings: Arc<dyn SettingsStore>,
    catalog: Arc<dyn MaterialCatalog>,
    picker: Arc<dyn FilePicker>,
    confirm: Arc<dyn ConfirmationProvider>,
}

impl CostDataApi {
    /// 创建新的 CostDataApi 实例
    ///
    /// # 参数
    /// - settings: 偏好存储
    /// - catalog: 材料目录
    /// - picker: 文件选择对话框（宿主注入）
    /// - confirm: 确认对话框（宿主注入）
    pub fn new(
        settings: Arc<dyn SettingsStore>,
        catalog: Arc<dyn MaterialCatalog>,
        picker: Arc<dyn FilePicker>,
        confirm: Arc<dyn ConfirmationProvider>,
    ) -> Self {
        Self {
            settings,
            catalog,
            picker,
            confirm,
        }
    }

    /// 菜单命令: 导入重量与价格
    ///
    /// # 返回
    /// - Ok(Some(ExchangeResponse)): 导入完成（零行也算完成）
    /// - Ok(None): 用户取消（未选文件，或货币不一致时拒绝继续）
    /// - Err(ApiError): 文件/存储级失败
    pub fn import_data(&self) -> ApiResult<Option<ExchangeResponse>> {
        let start_dir = self.settings.dialog_path()?;
        let path = match self.picker.pick_open_csv(&start_dir) {
            Some(p) => p,
            None => {
                tracing::debug!("{}", t("import.no_file_selected"));
                return Ok(None);
            }
        };
        self.remember_dialog_path(&path)?;

        let importer = CsvImporter::new(self.confirm.as_ref());
        match importer.import_from_path(&path, self.settings.as_ref()) {
            Ok(summary) => {
                let message = t_with_args(
                    "import.row_count",
                    &[("count", &summary.imported_rows.to_string())],
                );
                Ok(Some(ExchangeResponse {
                    rows: summary.imported_rows,
                    file_path: path.display().to_string(),
                    message,
                }))
            }
            // 用户主动中止: 不是错误，无部分合并
            Err(ExchangeError::ImportDeclined) => {
                tracing::info!("{}", t("import.declined"));
                Ok(None)
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "导入失败");
                Err(ApiError::from_import(e))
            }
        }
    }

    /// 菜单命令: 导出全部材料
    pub fn export_all(&self) -> ApiResult<Option<ExchangeResponse>> {
        self.export(SelectionMode::All)
    }

    /// 菜单命令: 导出收藏材料
    pub fn export_favorites(&self) -> ApiResult<Option<ExchangeResponse>> {
        self.export(SelectionMode::Favorites)
    }

    /// 菜单命令: 导出当前打印机兼容材料
    pub fn export_for_current_printer(&self) -> ApiResult<Option<ExchangeResponse>> {
        self.export(SelectionMode::PrinterCompatible)
    }

    /// 菜单命令: 仅导出已配置成本的材料
    pub fn export_configured(&self) -> ApiResult<Option<ExchangeResponse>> {
        self.export(SelectionMode::Configured)
    }

    /// 导出公共流程
    ///
    /// # 返回
    /// - Ok(Some(ExchangeResponse)): 文件已写出（零数据行时仅含表头）
    /// - Ok(None): 静默跳过（无可用打印机）或用户取消对话框——均不产生文件
    fn export(&self, mode: SelectionMode) -> ApiResult<Option<ExchangeResponse>> {
        let selector = ExportSelector::new(self.catalog.as_ref(), self.settings.as_ref());
        let records = match selector.select(mode).map_err(ApiError::from_export)? {
            Some(records) => records,
            None => {
                tracing::debug!(mode = %mode, "{}", t("export.no_printer"));
                return Ok(None);
            }
        };

        let start_dir = self.settings.dialog_path()?;
        let path = match self.picker.pick_save_csv(&start_dir) {
            Some(p) => p,
            None => {
                tracing::debug!(mode = %mode, "{}", t("export.no_file_selected"));
                return Ok(None);
            }
        };
        self.remember_dialog_path(&path)?;

        let entries = self.settings.cost_entries()?;
        let currency = self.settings.currency()?;

        let summary = CsvExporter
            .export_to_path(&path, &records, &entries, &currency)
            .map_err(|e| {
                tracing::error!(path = %path.display(), error = %e, "导出失败");
                ApiError::from_export(e)
            })?;

        let message = t_with_args(
            "export.row_count",
            &[("count", &summary.written_rows.to_string())],
        );
        Ok(Some(ExchangeResponse {
            rows: summary.written_rows,
            file_path: path.display().to_string(),
            message,
        }))
    }

    /// 菜单命令: 清除全部成本数据
    ///
    /// # 返回
    /// - Ok(Some(ExchangeResponse)): 用户确认，数据已重置
    /// - Ok(None): 用户拒绝，空操作
    pub fn clear_all(&self) -> ApiResult<Option<ExchangeResponse>> {
        let clearer = CostDataClearer::new(self.confirm.as_ref());
        let cleared = clearer.clear(self.settings.as_ref()).map_err(|e| match e {
            ExchangeError::Settings(se) => se.into(),
            other => ApiError::InternalError(other.to_string()),
        })?;

        if !cleared {
            tracing::debug!("{}", t("clear.cancelled"));
            return Ok(None);
        }

        Ok(Some(ExchangeResponse {
            rows: 0,
            file_path: String::new(),
            message: t("clear.done"),
        }))
    }

    /// 记录本次对话框目录，供下次对话框打开时使用
    fn remember_dialog_path(&self, path: &Path) -> ApiResult<()> {
        if let Some(parent) = path.parent() {
            self.settings.set_dialog_path(&parent.display().to_string())?;
        }
        Ok(())
    }
}
