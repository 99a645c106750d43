//! benchrig-core — 선언적 부하 테스트 설정의 검증과 정규화
//!
//! 이미 역직렬화된 중첩 설정 데이터와 두 파일시스템 루트(픽스처 루트,
//! 애플리케이션 베이스 디렉토리)를 받아 모든 구조/참조 제약을 검증하고,
//! 상대 경로를 존재가 확인된 절대 경로로 해석하고, 기본값 → 전역 →
//! 시나리오 순의 인자/설정 레이어를 병합하여 불변 [`Scenario`] 목록을
//! 가진 [`Configuration`]을 만듭니다.
//!
//! 잘못된 입력은 실행 중이 아니라 구성 시점에 정확한 메시지와 함께
//! 거부됩니다. 시나리오 실행, 리포트 생성, 설정 파일 파싱은 이
//! 크레이트의 범위가 아닙니다.

pub mod config;
pub mod error;
pub mod merge;
pub mod path;
pub mod scenario;

// --- 주요 타입 re-export ---

pub use config::Configuration;
pub use error::{BenchrigError, ConfigurationError, InvalidInputError};
pub use scenario::{ArgMap, Scenario};
