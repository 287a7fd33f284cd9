//! CPF(브라질 납세자 번호) 검증 유틸리티
//!
//! `000.000.000-00` 마스크 또는 숫자 11자리 모두 받아 두 개의 검증 자리를
//! 다시 계산해 비교합니다. 모든 자리가 같은 번호(`111.111.111-11` 등)는
//! 계산상 통과하더라도 거절합니다.

/// 마스크를 포함한 CPF 문자열 길이
pub const CPF_MASKED_LEN: usize = 14;

const CPF_DIGITS: usize = 11;

/// CPF 검증 자리가 올바른지 확인합니다.
pub fn is_valid_cpf(value: &str) -> bool {
    if !value
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.' || c == '-')
    {
        return false;
    }

    let digits: Vec<u32> = value.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != CPF_DIGITS {
        return false;
    }

    if digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

/// 앞 자리들로 다음 검증 자리를 계산합니다.
fn check_digit(digits: &[u32]) -> u32 {
    let weight_start = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (weight_start - i as u32))
        .sum();

    match (sum * 10) % 11 {
        10 => 0,
        rest => rest,
    }
}
