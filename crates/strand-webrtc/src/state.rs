use std::sync::Weak;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use strand_core::{ChannelTeardown, TeardownMode};

use crate::signal::InboundFlag;

/// 逻辑流的生命周期相位。
///
/// 四个取值互斥；`Closed` 为吸收态，一经进入不再离开。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelPhase {
    /// 双向均可用。
    Open,
    /// 入站方向已关闭，写仍可用。
    ReadClosed,
    /// 出站方向已关闭，读仍可用。
    WriteClosed,
    /// 终态；双向不可用，底层拆除已（或正在）触发。
    Closed,
}

/// 单条逻辑流的半关闭状态机。
///
/// # 教案式注释
///
/// ## 意图（Why）
/// - 本地应用与远端控制信号会并发地请求关闭读、关闭写或 reset；每次
///   转移都必须无竞态、幂等，且恰好触发一次正确方式（平滑/中止）的
///   底层拆除；
/// - 读写两个方向若各持一把锁，「双向均已关闭」的判定将无法原子化；
///   因此收敛为单一受锁相位值，坍缩转移天然原子。
///
/// ## 逻辑（How）
/// - 所有公开操作先取锁，再按当前相位裁决转移；已处终态直接返回，
///   保证重复/迟到信号被吸收；
/// - 首次落入 [`ChannelPhase::Closed`] 的那次转移在同一临界区内通过
///   弱引用升级并调用 [`ChannelTeardown::teardown`]，后续调用方不可能
///   再次观察到非终态并重复触发；
/// - reset 路径传入 [`TeardownMode::Abrupt`]，其余坍缩均为
///   [`TeardownMode::Graceful`]。
///
/// ## 契约（What）
/// - 关闭族操作（`close_read` / `close_write` / `reset` /
///   `handle_inbound_flag`）对调用方不可失败：唯一可能的故障（拆除
///   失败）在内部记录诊断并累加 [`teardown_failures`](Self::teardown_failures)；
/// - **前置条件**：每条流恰有一个状态机实例，相位不得被外部改写；
/// - **后置条件**：任意信号序列最终收敛到单一终态，拆除至多一次。
///
/// ## 风险与注意（Trade-offs）
/// - 对通道仅持弱引用（状态机的生命周期严格受流约束，避免引用环）；
///   流对象已销毁时坍缩转移照常提交，拆除静默跳过；
/// - 拆除在持锁状态下同步调用，要求实现方的 `teardown` 不得阻塞等待
///   本状态机的其他操作，否则会自锁。
#[derive(Debug)]
pub struct StreamCloseState<C: ChannelTeardown> {
    channel: Weak<C>,
    phase: Mutex<ChannelPhase>,
    teardown_failures: AtomicU64,
}

impl<C: ChannelTeardown> StreamCloseState<C> {
    /// 为新建立的逻辑流创建状态机，初始相位为 [`ChannelPhase::Open`]。
    pub fn new(channel: Weak<C>) -> Self {
        Self {
            channel,
            phase: Mutex::new(ChannelPhase::Open),
            teardown_failures: AtomicU64::new(0),
        }
    }

    /// 返回当前相位快照，无副作用。
    pub fn phase(&self) -> ChannelPhase {
        *self.phase.lock()
    }

    /// 当前是否允许读取（`Open` 或 `WriteClosed`）。
    pub fn allow_read(&self) -> bool {
        matches!(
            *self.phase.lock(),
            ChannelPhase::Open | ChannelPhase::WriteClosed
        )
    }

    /// 当前是否允许写入（`Open` 或 `ReadClosed`）。
    pub fn allow_write(&self) -> bool {
        matches!(
            *self.phase.lock(),
            ChannelPhase::Open | ChannelPhase::ReadClosed
        )
    }

    /// 是否已处于终态。
    pub fn is_closed(&self) -> bool {
        *self.phase.lock() == ChannelPhase::Closed
    }

    /// 本地声明不再接收入站数据。
    ///
    /// `Open → ReadClosed`；`WriteClosed` 时坍缩为终态并触发平滑拆除；
    /// 其余相位为无操作。
    pub fn close_read(&self) {
        let mut phase = self.phase.lock();
        if *phase == ChannelPhase::Closed {
            return;
        }
        self.close_read_locked(&mut phase);
    }

    /// 本地声明不再发送出站数据，与 [`close_read`](Self::close_read) 对称。
    pub fn close_write(&self) {
        let mut phase = self.phase.lock();
        if *phase == ChannelPhase::Closed {
            return;
        }
        self.close_write_locked(&mut phase);
    }

    /// 无条件中止：任意非终态一步进入终态并触发中止式拆除。
    pub fn reset(&self) {
        let mut phase = self.phase.lock();
        self.collapse_locked(&mut phase, TeardownMode::Abrupt);
    }

    /// 远端控制信号的入口，`raw` 为线上标志值。
    ///
    /// 与本地关闭族共用同一套转移规则；底层帧传输在该层不保证恰好
    /// 一次投递，重复与迟到信号在终态检查处被吸收。未定义的取值按
    /// 契约静默忽略，绝不使流失败。
    pub fn handle_inbound_flag(&self, raw: u64) {
        let mut phase = self.phase.lock();
        if *phase == ChannelPhase::Closed {
            return;
        }
        match InboundFlag::from_wire(raw) {
            Some(InboundFlag::Fin) => self.close_read_locked(&mut phase),
            Some(InboundFlag::StopSending) => self.close_write_locked(&mut phase),
            Some(InboundFlag::Reset) => self.collapse_locked(&mut phase, TeardownMode::Abrupt),
            None => {
                tracing::debug!(flag = raw, "ignoring undefined inbound stream flag");
            }
        }
    }

    /// 底层拆除失败的累计次数，供运维观测重复失败。
    pub fn teardown_failures(&self) -> u64 {
        self.teardown_failures.load(Ordering::Relaxed)
    }

    fn close_read_locked(&self, phase: &mut ChannelPhase) {
        match *phase {
            ChannelPhase::Open => *phase = ChannelPhase::ReadClosed,
            ChannelPhase::WriteClosed => self.collapse_locked(phase, TeardownMode::Graceful),
            ChannelPhase::ReadClosed | ChannelPhase::Closed => {}
        }
    }

    fn close_write_locked(&self, phase: &mut ChannelPhase) {
        match *phase {
            ChannelPhase::Open => *phase = ChannelPhase::WriteClosed,
            ChannelPhase::ReadClosed => self.collapse_locked(phase, TeardownMode::Graceful),
            ChannelPhase::WriteClosed | ChannelPhase::Closed => {}
        }
    }

    /// 终态坍缩：相位提交与拆除调用处于同一临界区，保证至多一次。
    fn collapse_locked(&self, phase: &mut ChannelPhase, mode: TeardownMode) {
        if *phase == ChannelPhase::Closed {
            return;
        }
        *phase = ChannelPhase::Closed;
        let Some(channel) = self.channel.upgrade() else {
            // 流对象已被外围传输回收，无通道可拆。
            return;
        };
        if let Err(err) = channel.teardown(mode) {
            self.teardown_failures.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(
                abrupt = mode.is_abrupt(),
                error = %err,
                "failed to tear down underlying channel"
            );
        }
    }
}
