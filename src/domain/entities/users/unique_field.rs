//! 유니크 제약이 걸린 사용자 필드

use std::fmt;

use serde::Serialize;

/// 저장소가 유니크 제약 위반을 보고할 때 사용하는 타입화된 식별자
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UniqueField {
    Cpf,
    Username,
    Email,
}

impl UniqueField {
    /// 여러 제약이 동시에 위반되었을 때 보고할 순서
    pub const PRECEDENCE: [UniqueField; 3] =
        [UniqueField::Cpf, UniqueField::Username, UniqueField::Email];

    pub fn as_str(&self) -> &'static str {
        match self {
            UniqueField::Cpf => "cpf",
            UniqueField::Username => "username",
            UniqueField::Email => "email",
        }
    }

    /// 저장소 인덱스 이름 (`cpf_unique` 등)
    pub fn index_name(&self) -> &'static str {
        match self {
            UniqueField::Cpf => "cpf_unique",
            UniqueField::Username => "username_unique",
            UniqueField::Email => "email_unique",
        }
    }

    pub fn conflict_message(&self) -> &'static str {
        match self {
            UniqueField::Cpf => "CPF가 이미 사용 중입니다",
            UniqueField::Username => "사용자명이 이미 사용 중입니다",
            UniqueField::Email => "이메일 주소가 이미 사용 중입니다",
        }
    }

    /// 위반된 필드 목록에서 우선순위가 가장 높은 필드를 고릅니다.
    pub fn most_significant(fields: &[UniqueField]) -> Option<UniqueField> {
        Self::PRECEDENCE
            .into_iter()
            .find(|candidate| fields.contains(candidate))
    }
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_is_cpf_username_email() {
        use UniqueField::*;

        assert_eq!(UniqueField::most_significant(&[Email, Username, Cpf]), Some(Cpf));
        assert_eq!(UniqueField::most_significant(&[Email, Username]), Some(Username));
        assert_eq!(UniqueField::most_significant(&[Email]), Some(Email));
        assert_eq!(UniqueField::most_significant(&[]), None);
    }
}
