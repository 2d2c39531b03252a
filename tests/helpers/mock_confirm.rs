// ==========================================
// Mock 确认实现 - 用于集成测试
// ==========================================

use material_cost_tools::exchange::{ConfirmRequest, ConfirmationProvider};
use std::sync::Mutex;

/// 记录确认请求并返回固定答复的桩实现
pub struct RecordingConfirm {
    accept: bool,
    requests: Mutex<Vec<ConfirmRequest>>,
}

impl RecordingConfirm {
    /// 创建始终同意的记录桩
    pub fn accepting() -> Self {
        Self {
            accept: true,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 创建始终拒绝的记录桩
    pub fn declining() -> Self {
        Self {
            accept: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 已收到的确认请求数
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// 已收到的确认请求副本
    pub fn requests(&self) -> Vec<ConfirmRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ConfirmationProvider for RecordingConfirm {
    fn confirm(&self, request: &ConfirmRequest) -> bool {
        self.requests.lock().unwrap().push(request.clone());
        self.accept
    }
}
