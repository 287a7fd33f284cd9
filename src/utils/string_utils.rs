//! 문자열 처리 유틸리티
//!
//! 부분 업데이트에서 "빈 문자열은 변경 없음"을 표현하기 위한 헬퍼들입니다.

/// 공백만 있거나 비어 있는 문자열인지 확인합니다.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// 비어 있는 값을 `None`으로 정규화합니다.
///
/// 유지되는 값은 원문 그대로 돌려줍니다 (trim 하지 않음).
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !is_blank(s))
}
