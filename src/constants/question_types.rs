pub const FILL_IN_THE_BLANK: &str = "빈칸 채우기";

/// Question type labels and the description each one is prompted with.
pub const QUESTION_TYPE_DESCRIPTIONS: &[(&str, &str)] = &[
    ("기본 정보 확인", "정보 또는 정의를 묻는 정형화된 문제"),
    (FILL_IN_THE_BLANK, "내 핵심 개념을 빈칸으로 제시, 알맞은 단어나 개념 선택"),
    ("사례/시나리오", "상황을 간단히 설명하고, 올바른 대처법이나 판단을 묻는 문제"),
    ("일치 여부 판단", "설명이 주어진 뒤, 관련 정보 중 올바른 것을 선택하는 문제"),
    ("원인-결과 연결", "현상의 원인 또는 결과를 묻는 문제"),
    ("우선순위/절차", "단계가 있는 절차 중, 가장 먼저 혹은 올바른 순서를 묻는 문제"),
    ("틀린 것 고르기", "보기 중 틀린 정보를 선택하는 문제"),
    ("비교/구분", "개념이나 기술을 구별하거나 비교하는 문제"),
    ("적용 판단", "지침/보안 수칙 등을 특정 상황에 적용할 수 있는지 묻는 문제"),
];

pub fn question_type_description(label: &str) -> Option<&'static str> {
    QUESTION_TYPE_DESCRIPTIONS
        .iter()
        .find(|(name, _)| *name == label.trim())
        .map(|(_, description)| *description)
}

pub fn question_type_labels() -> Vec<&'static str> {
    QUESTION_TYPE_DESCRIPTIONS.iter().map(|(name, _)| *name).collect()
}
