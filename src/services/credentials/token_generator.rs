//! 계정 확인 토큰 생성기

use rand::RngCore;

/// 무작위 바이트를 hex로 인코딩한 불투명 토큰을 만듭니다.
///
/// 유일성은 엔트로피에 의존하며 저장소에서 따로 확인하지 않습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenGenerator {
    bytes: usize,
}

impl TokenGenerator {
    pub fn new(bytes: usize) -> Self {
        Self { bytes }
    }

    pub fn generate(&self) -> String {
        let mut random_bytes = vec![0u8; self.bytes];
        rand::thread_rng().fill_bytes(&mut random_bytes);

        hex::encode(random_bytes)
    }
}

impl Default for TokenGenerator {
    fn default() -> Self {
        Self::new(32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_fixed_length_hex() {
        let token = TokenGenerator::default().generate();

        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_tokens_differ() {
        let generator = TokenGenerator::default();

        assert_ne!(generator.generate(), generator.generate());
    }
}
