/// 远端可随流数据内联发送的控制信号词汇表。
///
/// 判别值与线上帧协议的标志位枚举一致，不得改动：
/// `FIN = 0`、`STOP_SENDING = 1`、`RESET = 2`。后续协议修订新增的取值
/// （如 `FIN_ACK = 3`）不属于本词汇表，必须落入忽略分支而非新增转移。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InboundFlag {
    /// 远端声明不再发送数据；缓冲读尽后入站方向视为枯竭。
    Fin,
    /// 远端请求本地停止发送，等价于远端触发的写关闭。
    StopSending,
    /// 远端双向中止本条流，缓冲数据允许丢弃。
    Reset,
}

impl InboundFlag {
    /// 从线上标志值解码；未定义的取值返回 `None`，由调用方按契约忽略。
    pub const fn from_wire(raw: u64) -> Option<Self> {
        match raw {
            0 => Some(InboundFlag::Fin),
            1 => Some(InboundFlag::StopSending),
            2 => Some(InboundFlag::Reset),
            _ => None,
        }
    }

    /// 返回该信号的线上标志值。
    pub const fn wire_value(self) -> u64 {
        match self {
            InboundFlag::Fin => 0,
            InboundFlag::StopSending => 1,
            InboundFlag::Reset => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_match_frame_protocol() {
        assert_eq!(InboundFlag::from_wire(0), Some(InboundFlag::Fin));
        assert_eq!(InboundFlag::from_wire(1), Some(InboundFlag::StopSending));
        assert_eq!(InboundFlag::from_wire(2), Some(InboundFlag::Reset));
        for flag in [
            InboundFlag::Fin,
            InboundFlag::StopSending,
            InboundFlag::Reset,
        ] {
            assert_eq!(InboundFlag::from_wire(flag.wire_value()), Some(flag));
        }
    }

    /// FIN_ACK（3）属于后续协议修订，本词汇表必须拒绝解码。
    #[test]
    fn undefined_values_do_not_decode() {
        assert_eq!(InboundFlag::from_wire(3), None);
        assert_eq!(InboundFlag::from_wire(u64::MAX), None);
    }
}
