use alloc::vec::Vec;

use crate::error::CoreError;
use crate::peer::{CapabilityId, PeerId};

/// 对端能力集变更事件。
///
/// # 契约说明（What）
/// - `added` / `removed` 与增量消息中的集合一一对应，事件即变更快照；
/// - 事件在发布后视为不可变，订阅方不得修改内容。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerCapabilitiesUpdated {
    /// 发生变更的对端。
    pub peer: PeerId,
    /// 本次新增的能力。
    pub added: Vec<CapabilityId>,
    /// 本次移除的能力。
    pub removed: Vec<CapabilityId>,
}

/// 进程级事件通道的窄接口。
///
/// # 设计动机（Why）
/// - 增量交换组件只需要「发布一条变更通知」这一个动作，不关心总线的
///   扇出、背压或持久化策略；
/// - 发布失败对协议语义无影响，因此接口设计为不可失败，实现方自行
///   消化投递异常。
pub trait EventPublisher: Send + Sync {
    /// 发布一条能力变更事件。
    fn publish(&self, event: PeerCapabilitiesUpdated);
}

/// 对端能力记录存储的窄接口。
///
/// # 契约说明（What）
/// - **输入**：目标对端与一组能力标识；空集合为合法输入且应为无操作；
/// - **后置条件**：成功返回后，对端记录与传入集合合并/求差的结果一致；
/// - **失败语义**：以 [`CoreError`] 返回，由调用方记录诊断，本工作区
///   不重试。
pub trait CapabilityRegistry: Send + Sync {
    /// 为对端记录新增能力。
    fn add_capabilities(
        &self,
        peer: &PeerId,
        capabilities: &[CapabilityId],
    ) -> Result<(), CoreError>;

    /// 从对端记录移除能力。
    fn remove_capabilities(
        &self,
        peer: &PeerId,
        capabilities: &[CapabilityId],
    ) -> Result<(), CoreError>;
}
