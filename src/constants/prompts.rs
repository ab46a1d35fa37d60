pub const BATCH_SYSTEM_PROMPT: &str =
    "당신은 전문적인 금융보안 문제 출제자입니다. 문제와 해답을 명확히 구분하여 출제해주세요.";

/// Appended to the prompt for the fill-in-the-blank question type.
pub const FILL_IN_THE_BLANK_INSTRUCTION: &str = "문장 내 중요한 단어나 개념을 빈칸(______)으로 제시하고, 보기 중에서 그 빈칸에 들어갈 가장 적절한 선택지를 고르도록 해주세요.
단순 정의형 문제가 아니라 반드시 **빈칸 형태**로 표현해주세요.
";

pub const DELIMITED_BLOCK_FORMAT: &str = "각 문제는 5지선다로 아래 형식을 정확히 따라주세요. 모든 문제는 \"=== 문제 N ===\" 머리줄로 시작해야 합니다.

=== 문제 1 ===
출제 기준: [주요항목] > [세부항목] > [세세항목]
문제: (문제 내용)
보기:
1) (보기 1)
2) (보기 2)
3) (보기 3)
4) (보기 4)
5) (보기 5)
정답: (정답 보기 번호 하나)";

pub const DELIMITED_BLOCK_EXPLANATION_LINE: &str = "해설: (문제 유형의 특성에 맞춘 상세한 해설)";

pub const ANSWER_SECTION_FORMAT: &str = "각 문제는 5지선다로 다음 형식을 정확히 따라주세요:

[문제 형식]
- 출제 기준: [주요항목] > [세부항목] > [세세항목] 형식으로 표시
- 문제 번호와 내용 (반드시 위에서 설명한 문제 유형의 특성을 정확히 반영해야 함)
- 보기

[해답]
- 정답";

pub const ANSWER_SECTION_EXPLANATION_LINE: &str = "- 해설 (문제 유형의 특성에 맞춰 상세히 설명)";

pub const ANSWER_SECTION_SEPARATORS: &str =
    "문제와 해답은 \"[해답]\" 구분자로 구분하고, 각 문제는 \"---\" 구분자로 구분해주세요.";

pub const BATCH_CLOSING_RULES: &str = "문제들은 서로 중복되지 않아야 하며, 명확하고 정확한 내용을 담고 있어야 합니다.
각 문제마다 위의 출제 기준 중에서 하나를 선택하여 반드시 명시해주세요.
특히, 선택한 문제 유형의 특성을 정확히 반영하여 문제를 출제해주세요.";

pub const SINGLE_QUESTION_JSON_EXAMPLE: &str = r#"{
    "question": "문제 내용",
    "choices": ["보기1", "보기2", "보기3", "보기4"],
    "answer": 정답번호(1-4),
    "explanation": "해설"
}"#;

pub const SINGLE_QUESTION_REQUIREMENTS: &str = "요구사항:
1. 문제는 실무적이고 현실적인 상황을 반영해야 합니다.
2. 보기는 4개여야 하며, 모두 그럴듯해야 합니다.
3. 정답은 명확해야 합니다.
4. 해설은 왜 그 답이 정답인지 명확히 설명해야 합니다.";
