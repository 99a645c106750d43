//! 시나리오 — 불변 부하 테스트 시나리오 값 객체와 원시 항목 검증
//!
//! [`Scenario`]는 검증·경로 해석·병합이 모두 끝난 결과물이며, 생성 후에는
//! 읽기 전용입니다. [`RawScenario`]는 경로 해석 전에 한 항목의 구조적
//! 유효성만 확인한 뷰입니다.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::error::InvalidInputError;

/// 인자/설정 맵 — 값은 문자열 또는 숫자 등 원시 JSON 값
pub type ArgMap = BTreeMap<String, Value>;

/// 검증이 끝난 불변 부하 테스트 시나리오
///
/// 모든 경로는 존재가 확인된 정규 절대 경로이며, `arguments`에는 최소한
/// [`Scenario::ARG_USERS`]부터 [`Scenario::ARG_BASEDIR`]까지의 표준 키가
/// 들어 있습니다.
#[derive(Debug, Clone, Serialize)]
pub struct Scenario {
    title: String,
    file: PathBuf,
    arguments: ArgMap,
    settings: ArgMap,
    fixtures: Vec<PathBuf>,
}

impl Scenario {
    /// 가상 사용자 수 인자 키
    pub const ARG_USERS: &'static str = "users";
    /// 반복 횟수 인자 키
    pub const ARG_LOOPS: &'static str = "loops";
    /// 대상 호스트 인자 키
    pub const ARG_HOST: &'static str = "host";
    /// 대상 경로 인자 키
    pub const ARG_PATH: &'static str = "path";
    /// 관리자 프론트네임 인자 키
    pub const ARG_ADMIN_FRONTNAME: &'static str = "admin_frontname";
    /// 관리자 계정명 인자 키
    pub const ARG_ADMIN_USERNAME: &'static str = "admin_username";
    /// 관리자 비밀번호 인자 키
    pub const ARG_ADMIN_PASSWORD: &'static str = "admin_password";
    /// 애플리케이션 베이스 디렉토리 인자 키
    pub const ARG_BASEDIR: &'static str = "basedir";

    /// 업스트림에서 검증·해석·병합이 끝난 데이터로 시나리오를 조립합니다.
    ///
    /// 순수 조립 단계이며 여기서는 어떤 검증도 수행하지 않습니다.
    pub(crate) fn new(
        title: String,
        file: PathBuf,
        arguments: ArgMap,
        settings: ArgMap,
        fixtures: Vec<PathBuf>,
    ) -> Self {
        Self {
            title,
            file,
            arguments,
            settings,
            fixtures,
        }
    }

    /// 시나리오 제목
    pub fn title(&self) -> &str {
        &self.title
    }

    /// 시나리오 스크립트의 정규 절대 경로
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// 병합이 끝난 실행 인자
    pub fn arguments(&self) -> &ArgMap {
        &self.arguments
    }

    /// 병합이 끝난 실행 설정
    pub fn settings(&self) -> &ArgMap {
        &self.settings
    }

    /// 픽스처 파일의 정규 절대 경로 (선언 순서 유지)
    pub fn fixtures(&self) -> &[PathBuf] {
        &self.fixtures
    }
}

/// 구조 검증을 통과한 원시 시나리오 항목의 뷰
///
/// 경로 해석과 레이어 병합은 아직 수행되지 않은 상태입니다.
#[derive(Debug)]
pub(crate) struct RawScenario<'a> {
    pub title: &'a str,
    pub file: &'a str,
    pub users: Option<i64>,
    pub loops: Option<i64>,
    pub arguments: ArgMap,
    pub settings: ArgMap,
    pub fixtures: Vec<&'a str>,
}

impl<'a> RawScenario<'a> {
    /// 한 항목의 구조적 유효성을 검증합니다.
    ///
    /// 검증 순서: title → users/loops → fixtures 형태 → file 선언.
    /// 파일/픽스처의 실제 존재 여부는 호출 측에서 경로 해석 시 확인합니다.
    pub(crate) fn validate(entry: &'a Value) -> Result<Self, InvalidInputError> {
        let title = entry
            .get("title")
            .and_then(Value::as_str)
            .filter(|title| !title.is_empty())
            .ok_or(InvalidInputError::MissingTitle)?;

        let users = positive_integer(entry, title, Scenario::ARG_USERS)?;
        let loops = positive_integer(entry, title, Scenario::ARG_LOOPS)?;

        let fixtures = match entry.get("fixtures") {
            None => Vec::new(),
            Some(Value::Array(items)) => {
                let mut fixtures = Vec::with_capacity(items.len());
                for item in items {
                    // 문자열이 아닌 항목도 형태 위반으로 취급
                    let reference =
                        item.as_str()
                            .ok_or_else(|| InvalidInputError::FixturesNotAnArray {
                                title: title.to_owned(),
                            })?;
                    fixtures.push(reference);
                }
                fixtures
            }
            Some(_) => {
                return Err(InvalidInputError::FixturesNotAnArray {
                    title: title.to_owned(),
                });
            }
        };

        let file = entry
            .get("file")
            .and_then(Value::as_str)
            .ok_or_else(|| InvalidInputError::FileNotDefined {
                title: title.to_owned(),
            })?;

        Ok(Self {
            title,
            file,
            users,
            loops,
            arguments: object_map(entry, "arguments"),
            settings: object_map(entry, "settings"),
            fixtures,
        })
    }
}

/// 존재한다면 양의 정수여야 하는 인자를 읽습니다.
fn positive_integer(
    entry: &Value,
    title: &str,
    name: &str,
) -> Result<Option<i64>, InvalidInputError> {
    match entry.get(name) {
        None => Ok(None),
        Some(value) => value
            .as_i64()
            .filter(|n| *n > 0)
            .map(Some)
            .ok_or_else(|| InvalidInputError::NonPositiveArgument {
                title: title.to_owned(),
                name: name.to_owned(),
            }),
    }
}

/// 맵 형태의 하위 블록을 읽습니다.
///
/// 키가 없으면 빈 맵을 반환하고, 맵이 아닌 값이 선언되어 있으면 경고를
/// 남긴 뒤 빈 맵으로 취급합니다.
pub(crate) fn object_map(parent: &Value, key: &str) -> ArgMap {
    match parent.get(key) {
        None => ArgMap::new(),
        Some(Value::Object(entries)) => entries
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect(),
        Some(other) => {
            warn!(
                key,
                declared_type = json_type_name(other),
                "expected a map, treating as empty"
            );
            ArgMap::new()
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
