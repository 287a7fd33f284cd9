//! 사용자 접근 프로필
//!
//! 닫힌 열거형이며, 문자열에서의 변환은 항상 `Result`를 돌려주는 전체 함수입니다.
//! 알 수 없는 값은 저장되지 않고 검증 오류로 거절됩니다.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserProfile {
    /// 관리자
    Admin,
    /// 일반 사용자
    Standard,
}

impl UserProfile {
    pub const ALL: [UserProfile; 2] = [UserProfile::Admin, UserProfile::Standard];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserProfile::Admin => "ADMIN",
            UserProfile::Standard => "STANDARD",
        }
    }
}

impl FromStr for UserProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ADMIN" => Ok(UserProfile::Admin),
            "STANDARD" => Ok(UserProfile::Standard),
            _ => Err(format!("지원하지 않는 사용자 프로필입니다: {}", s)),
        }
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_from_string() {
        assert_eq!("ADMIN".parse::<UserProfile>().unwrap(), UserProfile::Admin);
        assert_eq!("STANDARD".parse::<UserProfile>().unwrap(), UserProfile::Standard);

        // 대소문자 무관
        assert_eq!("admin".parse::<UserProfile>().unwrap(), UserProfile::Admin);

        assert!("ROOT".parse::<UserProfile>().is_err());
        assert!("".parse::<UserProfile>().is_err());
    }

    #[test]
    fn test_profile_serializes_as_upper_case() {
        let json = serde_json::to_string(&UserProfile::Standard).unwrap();

        assert_eq!(json, "\"STANDARD\"");
        for profile in UserProfile::ALL {
            assert_eq!(profile.as_str().parse::<UserProfile>().unwrap(), profile);
        }
    }
}
