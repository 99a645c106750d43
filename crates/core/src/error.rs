//! 에러 타입 — 설정 로더의 도메인 에러 정의
//!
//! 각 위반은 고정된 메시지 템플릿을 가지며, 호출자와 테스트가 메시지
//! 문자열을 그대로 매칭합니다. 템플릿 문구를 바꾸면 호환성이 깨집니다.

/// Benchrig 최상위 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum BenchrigError {
    /// 환경 전제조건 위반 — 호출자의 셋업이 잘못됨
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// 설정 데이터 자체가 구조적/참조적으로 잘못됨
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// 경로 해석 중의 I/O 에러 (대상이 존재하지 않는 경우는 제외)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// 환경 전제조건 에러
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// 애플리케이션 베이스 디렉토리가 존재하지 않음
    #[error("Base directory '{dir}' does not exist")]
    BaseDirMissing { dir: String },
}

/// 설정 데이터 구조/참조 에러
///
/// 구성 단계에서 첫 위반을 만나는 즉시 반환되며, 여러 위반을 모으지
/// 않습니다.
#[derive(Debug, thiserror::Error)]
pub enum InvalidInputError {
    /// `scenario` 섹션이 배열이 아님
    #[error("'scenario' => 'scenarios' option must be an array")]
    ScenariosNotAnArray,

    /// 시나리오에 제목이 없거나 비어 있음
    #[error("Scenario must have a title")]
    MissingTitle,

    /// `users`/`loops` 인자가 양의 정수가 아님
    #[error("Scenario '{title}' must have a positive integer argument '{name}'.")]
    NonPositiveArgument { title: String, name: String },

    /// `fixtures` 블록이 배열이 아님
    #[error("'fixtures' for scenario '{title}' must be represented by an array")]
    FixturesNotAnArray { title: String },

    /// 시나리오에 `file`이 선언되지 않음
    #[error("File is not defined for scenario '{title}'")]
    FileNotDefined { title: String },

    /// 선언된 시나리오 스크립트가 존재하지 않음
    #[error("File {file} doesn't exist for scenario '{title}'")]
    FileMissing { file: String, title: String },

    /// 선언된 픽스처 파일이 존재하지 않음
    #[error("Fixture '{fixture}' doesn't exist")]
    FixtureMissing { fixture: String },
}
