#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![doc = r#"
# strand-core

## 设计动机（Why）
- **定位**：该 crate 承载 strand 工作区的跨层共享契约：稳定错误域、
  底层通道的拆除契约、对端与能力标识，以及能力变更事件的发布接口。
- **架构角色**：`strand-webrtc`（流生命周期状态机）与 `strand-identify`
  （能力增量交换）均只依赖本 crate 的抽象，互相之间不产生耦合。
- **设计理念**：契约保持对象安全与 `no_std + alloc` 兼容，使未来的
  传输实现（WebRTC 数据通道、QUIC 流等）可以在不同运行时环境复用。

## 核心契约（What）
- [`CoreError`](error::CoreError)：带稳定错误码的最终错误形态；
- [`ChannelTeardown`](transport::ChannelTeardown)：底层通道的一次性拆除操作；
- [`PeerId`](peer::PeerId) / [`CapabilityId`](peer::CapabilityId)：标识类型；
- [`CapabilityRegistry`](event::CapabilityRegistry) /
  [`EventPublisher`](event::EventPublisher)：能力存储与事件总线的窄接口。

## 实现策略（How）
- 错误域沿用「稳定错误码 + 可选底层原因」的分层方式，调用方通过
  [`error::codes`] 中的常量进行机读分类；
- 所有 trait 均为窄接口：实现方只需满足单一职责，便于在测试中以
  记录型桩替换。
"#]

extern crate alloc;

pub mod error;
pub mod event;
pub mod peer;
pub mod transport;

pub use error::CoreError;
pub use event::{CapabilityRegistry, EventPublisher, PeerCapabilitiesUpdated};
pub use peer::{CapabilityId, PeerId};
pub use transport::{ChannelTeardown, TeardownMode};
