use crate::error::CoreError;

/// 表示底层通道拆除的方式。
///
/// # 语义约定
/// - [`Graceful`](TeardownMode::Graceful)：双向均已协商关闭，已交付数据
///   不受影响；
/// - [`Abrupt`](TeardownMode::Abrupt)：由 reset 触发的双向中止，缓冲中
///   未交付的数据允许被丢弃。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TeardownMode {
    /// 双向协商关闭后的平滑释放。
    Graceful,
    /// reset 触发的立即中止。
    Abrupt,
}

impl TeardownMode {
    /// 是否为 reset 路径触发的中止式拆除。
    pub fn is_abrupt(self) -> bool {
        matches!(self, TeardownMode::Abrupt)
    }
}

/// 底层通道的一次性拆除契约。
///
/// # 设计动机（Why）
/// - 流生命周期状态机只关心「何时、以何种方式」释放底层通道，不关心
///   通道由哪种传输实现承载；
/// - 对象安全的窄接口让 WebRTC 数据通道、QUIC 流等实现自由替换，也让
///   测试可以注入记录型桩。
///
/// # 契约说明（What）
/// - **输入**：`mode` 区分平滑关闭与中止；
/// - **前置条件**：关闭协调器保证对同一条流至多调用一次；若外部还存在
///   其他拆除路径，幂等性由实现方自行保证；
/// - **后置条件**：失败以 [`CoreError`] 返回，由调用方记录诊断，不会
///   促使状态机离开终态。
pub trait ChannelTeardown: Send + Sync {
    /// 按指定方式拆除底层通道。
    fn teardown(&self, mode: TeardownMode) -> Result<(), CoreError>;
}
