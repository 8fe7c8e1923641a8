use std::fmt::Write as _;

use sha2::{Digest, Sha256, Sha384, Sha512};
use strand_core::{CoreError, error::codes};

/// 计算证书的摘要指纹。
///
/// # 教案式说明
/// - **Why**：传输身份校验需要把远端证书与 SDP 中声明的指纹对比；
///   该工具保持无状态，独立于流生命周期组件；
/// - **How**：将完整 DER 编码流式喂入对应摘要器，返回定长摘要字节；
///   不做十六进制转换，调用方按需渲染（见 [`to_sdp_format`]）；
/// - **What**：`algorithm` 取 SDP 指纹属性登记名（`sha-256` / `sha-384`
///   / `sha-512`，大小写不敏感）；未编译进当前构建的算法返回
///   [`codes::FINGERPRINT_UNAVAILABLE`]，由调用方决定回退策略。
pub fn fingerprint(cert_der: &[u8], algorithm: &str) -> Result<Vec<u8>, CoreError> {
    match algorithm.to_ascii_lowercase().as_str() {
        "sha-256" => {
            let mut hasher = Sha256::new();
            hasher.update(cert_der);
            Ok(hasher.finalize().to_vec())
        }
        "sha-384" => {
            let mut hasher = Sha384::new();
            hasher.update(cert_der);
            Ok(hasher.finalize().to_vec())
        }
        "sha-512" => {
            let mut hasher = Sha512::new();
            hasher.update(cert_der);
            Ok(hasher.finalize().to_vec())
        }
        other => Err(CoreError::new(
            codes::FINGERPRINT_UNAVAILABLE,
            format!("digest algorithm {other:?} is not linked into this build"),
        )),
    }
}

/// 将摘要渲染为 SDP `a=fingerprint` 属性使用的大写冒号十六进制形式。
pub fn to_sdp_format(digest: &[u8]) -> String {
    let mut out = String::with_capacity(digest.len() * 3);
    for (index, byte) in digest.iter().enumerate() {
        if index > 0 {
            out.push(':');
        }
        // 写入 String 不会失败。
        let _ = write!(out, "{byte:02X}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const CERT_DER: &[u8] = b"strand-test-certificate-der";

    #[test]
    fn sha256_fingerprint_matches_known_vector() {
        let digest = fingerprint(CERT_DER, "sha-256").expect("sha-256 must be available");
        assert_eq!(
            hex::encode(&digest),
            "9ef6f706887c86716fe6b15380bde354b626695f510add2a95927ba3f4c9caca"
        );
        // 算法名大小写不敏感。
        let upper = fingerprint(CERT_DER, "SHA-256").expect("sha-256 must be available");
        assert_eq!(digest, upper);
    }

    #[test]
    fn digest_lengths_follow_algorithm() {
        assert_eq!(fingerprint(CERT_DER, "sha-384").unwrap().len(), 48);
        assert_eq!(fingerprint(CERT_DER, "sha-512").unwrap().len(), 64);
    }

    #[test]
    fn unknown_algorithm_is_a_typed_failure() {
        let err = fingerprint(CERT_DER, "md5").expect_err("md5 is not linked in");
        assert_eq!(err.code(), codes::FINGERPRINT_UNAVAILABLE);
    }

    #[test]
    fn sdp_format_is_uppercase_colon_separated() {
        let digest = fingerprint(CERT_DER, "sha-256").unwrap();
        let rendered = to_sdp_format(&digest);
        assert!(rendered.starts_with("9E:F6:F7:06:88:7C:86:71"));
        assert_eq!(rendered.len(), 32 * 3 - 1);
        assert!(to_sdp_format(&[]).is_empty());
    }
}
