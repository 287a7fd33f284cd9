//! # 비밀번호 해셔
//!
//! bcrypt 기반의 솔트 생성과 해싱을 담당합니다.
//!
//! 솔트는 bcrypt 표준 접두 형식(`$2b$<cost>$<22자>`)의 문자열로 만들어
//! 사용자 레코드에 그대로 저장되며, 같은 (비밀번호, 솔트) 쌍은 항상 같은
//! 해시를 만듭니다. 해시 문자열은 솔트 문자열로 시작합니다.
//!
//! ```text
//! $2b$12$R9h/cIPz0gi.URNNX3kh2O PST9/PgBkqquzi.Ss7KIUgO2t0jWMUW
//! └─┬─┘└┬┘└────────┬─────────┘ └──────────────┬───────────────┘
//! 버전 cost     솔트(22)                    해시(31)
//! ```
//!
//! 검증(verify) 연산은 제공하지 않습니다. 해싱은 CPU를 오래 쓰므로 서비스는
//! 이 타입을 `web::block` 안에서 호출합니다.

use base64::{
    alphabet,
    engine::{general_purpose, GeneralPurpose},
    Engine,
};
use rand::RngCore;

use crate::config::PasswordConfig;
use crate::core::errors::{AppError, AppResult, ErrorContext};

/// bcrypt 전용 base64 알파벳 (패딩 없음)
const BCRYPT_BASE64: GeneralPurpose = GeneralPurpose::new(&alphabet::BCRYPT, general_purpose::NO_PAD);

const SALT_BYTES: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 환경별 bcrypt cost를 사용하는 해셔
    pub fn from_config() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    /// 새 무작위 솔트를 만듭니다.
    pub fn generate_salt(&self) -> String {
        let mut bytes = [0u8; SALT_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);

        format!("$2b${:02}${}", self.cost, BCRYPT_BASE64.encode(bytes))
    }

    /// 솔트 문자열로 비밀번호를 해싱합니다.
    pub fn hash(&self, plaintext: &str, salt: &str) -> AppResult<String> {
        let (cost, salt_bytes) = parse_salt(salt)?;

        let parts = bcrypt::hash_with_salt(plaintext, cost, salt_bytes)
            .context("비밀번호 해싱 실패")?;

        Ok(parts.format_for_version(bcrypt::Version::TwoB))
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::from_config()
    }
}

/// `$2b$<cost>$<22자>` 형식의 솔트를 cost와 원본 바이트로 분해합니다.
fn parse_salt(salt: &str) -> AppResult<(u32, [u8; SALT_BYTES])> {
    let malformed = || AppError::InternalError("잘못된 bcrypt 솔트 형식입니다".to_string());

    let mut parts = salt.strip_prefix('$').ok_or_else(malformed)?.splitn(3, '$');

    let version = parts.next().ok_or_else(malformed)?;
    if !matches!(version, "2a" | "2b" | "2y") {
        return Err(malformed());
    }

    let cost = parts
        .next()
        .and_then(|cost| cost.parse::<u32>().ok())
        .ok_or_else(malformed)?;

    let encoded = parts.next().filter(|s| s.len() == 22).ok_or_else(malformed)?;
    let decoded = BCRYPT_BASE64.decode(encoded).map_err(|_| malformed())?;
    let bytes: [u8; SALT_BYTES] = decoded.try_into().map_err(|_| malformed())?;

    Ok((cost, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salt_has_bcrypt_prefix_and_is_random() {
        let hasher = PasswordHasher::new(4);

        let first = hasher.generate_salt();
        let second = hasher.generate_salt();

        assert!(first.starts_with("$2b$04$"));
        assert_eq!(first.len(), 29);
        assert_ne!(first, second);
    }

    #[test]
    fn test_hash_is_deterministic_for_same_salt() {
        let hasher = PasswordHasher::new(4);
        let salt = hasher.generate_salt();

        let first = hasher.hash("mock123!", &salt).unwrap();
        let second = hasher.hash("mock123!", &salt).unwrap();

        assert_eq!(first, second);
        assert!(first.starts_with(&salt));
        assert_ne!(first, "mock123!");
    }

    #[test]
    fn test_different_salts_give_different_hashes() {
        let hasher = PasswordHasher::new(4);

        let first = hasher.hash("mock123!", &hasher.generate_salt()).unwrap();
        let second = hasher.hash("mock123!", &hasher.generate_salt()).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_hash_is_a_real_bcrypt_hash() {
        let hasher = PasswordHasher::new(4);
        let hashed = hasher.hash("mock123!", &hasher.generate_salt()).unwrap();

        assert!(bcrypt::verify("mock123!", &hashed).unwrap());
        assert!(!bcrypt::verify("mock1234", &hashed).unwrap());
    }

    #[test]
    fn test_malformed_salt_is_rejected() {
        let hasher = PasswordHasher::new(4);

        assert!(hasher.hash("mock123!", "not-a-salt").is_err());
        assert!(hasher.hash("mock123!", "$2b$04$short").is_err());
        assert!(hasher.hash("mock123!", "$3x$04$abcdefghijklmnopqrstuv").is_err());
    }
}
