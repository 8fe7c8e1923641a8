#![deny(unsafe_code)]
#![doc = r#"
# strand-webrtc

## 设计动机（Why）
- **定位**：该 crate 为 WebRTC 数据通道承载的逻辑流提供 TCP/QUIC 式的
  半双工关闭语义：读写方向可独立关闭、支持显式 reset、终态幂等。
- **架构角色**：作为传输实现层的生命周期积木，对接 `strand-core` 的
  [`ChannelTeardown`](strand_core::ChannelTeardown) 契约；本 crate 不做
  分帧、流控或重传，只裁决「当前还能不能读/写」以及「何时拆通道」。
- **设计理念**：把读、写两个布尔方向收敛为单一受锁相位值，使「双向
  均已关闭 → 坍缩到终态」成为一次原子转移，从而在不引入第二个同步
  原语的情况下保证拆除至多触发一次。

## 核心契约（What）
- [`StreamCloseState`](state::StreamCloseState)：单条流的权威相位持有者；
- [`InboundFlag`](signal::InboundFlag)：远端内联控制信号词汇表；
- [`fingerprint`](fingerprint::fingerprint)：证书摘要工具（无状态）。

## 实现策略（How）
- 每条流一把 `parking_lot::Mutex`，所有转移在临界区内重新检查当前
  相位，并发冲突由锁序裁决；
- 首次进入终态的那次转移在同一临界区内调用底层拆除，后到的信号只会
  观察到终态并被吸收；
- 拆除失败仅记录 `tracing` 诊断并累加计数器，关闭路径对调用方不可失败。

## 风险与注意（Trade-offs）
- 状态机持有通道的弱引用；若流对象先于关闭信号销毁，拆除静默跳过，
  由外围传输负责通道资源回收；
- 锁为每实例独立，跨流之间不提供任何次序保证。
"#]

mod fingerprint;
mod signal;
mod state;

pub use fingerprint::{fingerprint, to_sdp_format};
pub use signal::InboundFlag;
pub use state::{ChannelPhase, StreamCloseState};
