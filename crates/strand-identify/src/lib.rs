#![deny(unsafe_code)]
#![doc = r#"
# strand-identify

## 设计动机（Why）
- **定位**：该 crate 实现对端能力增量交换协议的消费侧：从入站流读取
  一条长度定界的增量消息，更新对端的能力记录，并发布一条变更通知。
- **架构角色**：作为流生命周期组件的外部协作方，本 crate 只依赖
  `strand-core` 的注册表与事件总线窄接口，不触碰任何全局可变状态。
- **设计理念**：这是一个简单的请求消费者而非并发敏感的状态机；任何
  解码失败都以中止流收尾并仅记录诊断，绝不影响其他流。

## 核心契约（What）
- [`read_delta`](delta::read_delta)：按协议版本读取并解析一条增量消息；
- [`DeltaService`](service::DeltaService)：入站流处理器，串联解码、
  注册表更新与事件发布；
- [`DeltaStream`](service::DeltaStream)：对入站流的最小抽象（字节源 +
  协议标识 + 远端对端 + 中止）。

## 实现策略（How）
- 帧为 u32 大端长度前缀 + JSON 负载，负载上限 2 KiB，超限在读取负载
  之前即拒绝；
- 实现层错误（`DeltaWireError`）经 `thiserror` 派生，映射进
  [`CoreError`](strand_core::CoreError) 时保留底层原因链。
"#]

mod delta;
mod service;

pub use delta::{
    DELTA_MESSAGE_MAX, Delta, DeltaWireError, PROTOCOL_DELTA_CURRENT, PROTOCOL_DELTA_LEGACY,
    encode_delta, read_delta,
};
pub use service::{DeltaService, DeltaStream};
