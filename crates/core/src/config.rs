//! 설정 — 원시 중첩 데이터의 검증·정규화와 시나리오 조립
//!
//! [`Configuration`]은 이미 역직렬화된 중첩 구조(`serde_json::Value`)와
//! 두 파일시스템 루트(픽스처 루트, 애플리케이션 베이스 디렉토리)를 받아
//! 모든 구조/참조 제약을 검증하고 불변 [`Scenario`] 목록을 만듭니다.
//! 설정 파일을 찾거나 파싱하는 일은 호출자의 몫입니다.
//!
//! # 검증 순서
//! 1. 베이스 디렉토리 존재
//! 2. `scenario` 섹션 형태
//! 3. 시나리오별: title → users/loops → fixtures 형태 → file 선언 →
//!    file 존재 → fixtures 존재
//!
//! 첫 위반에서 즉시 실패하며 부분적으로 구성된 객체는 노출되지 않습니다.
//!
//! # 사용 예시
//! ```
//! use benchrig_core::Configuration;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), benchrig_core::BenchrigError> {
//! let data = json!({ "url-host": "10.0.0.5" });
//! let config = Configuration::new(&data, "/tmp", "/tmp")?;
//! assert_eq!(config.url_host(), "10.0.0.5");
//! assert_eq!(config.url_path(), "/");
//! # Ok(())
//! # }
//! ```

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{BenchrigError, ConfigurationError, InvalidInputError};
use crate::merge::merge;
use crate::path;
use crate::scenario::{ArgMap, RawScenario, Scenario, object_map};

/// `url-host` 기본값
pub const DEFAULT_URL_HOST: &str = "127.0.0.1";
/// `url-path` 기본값
pub const DEFAULT_URL_PATH: &str = "/";
/// `report-dir` 기본값 (픽스처 루트 기준 상대 경로)
pub const DEFAULT_REPORT_DIR: &str = "report";

/// 관리자 옵션을 시나리오 인자로 주입할 때 붙는 접두사
const ADMIN_ARG_PREFIX: &str = "admin_";

/// 검증이 끝난 부하 테스트 전체 설정
///
/// 한 번 구성되면 읽기 전용이며, 여러 소비자가 동기화 없이 공유해도
/// 안전합니다.
#[derive(Debug, Clone, Serialize)]
pub struct Configuration {
    application_base_dir: PathBuf,
    url_host: String,
    url_path: String,
    admin_options: ArgMap,
    install_options: ArgMap,
    report_dir: PathBuf,
    scenarios: Vec<Scenario>,
}

impl Configuration {
    /// 원시 설정 데이터와 두 루트 디렉토리로 설정을 구성합니다.
    ///
    /// `fixture_dir`는 시나리오 스크립트와 픽스처 참조의 해석 기준이고,
    /// `application_base_dir`는 대상 애플리케이션의 베이스 디렉토리로
    /// 반드시 존재해야 합니다. 첫 위반에서 즉시 에러를 반환합니다.
    pub fn new(
        config_data: &Value,
        fixture_dir: impl AsRef<Path>,
        application_base_dir: impl AsRef<Path>,
    ) -> Result<Self, BenchrigError> {
        let fixture_dir = fixture_dir.as_ref();
        let application_base_dir = application_base_dir.as_ref();

        // 베이스 디렉토리 검사는 어떤 시나리오 검사보다도 먼저 수행됩니다.
        if !path::exists(application_base_dir) {
            return Err(ConfigurationError::BaseDirMissing {
                dir: application_base_dir.display().to_string(),
            }
            .into());
        }

        let url_host = string_key(config_data, "url-host")
            .unwrap_or(DEFAULT_URL_HOST)
            .to_owned();
        let url_path = string_key(config_data, "url-path")
            .unwrap_or(DEFAULT_URL_PATH)
            .to_owned();
        let admin_options = object_map(config_data, "admin-options");
        let install_options = object_map(config_data, "install-options");
        let report_dir = match string_key(config_data, "report-dir") {
            Some(declared) if Path::new(declared).is_absolute() => PathBuf::from(declared),
            Some(declared) => fixture_dir.join(declared),
            None => fixture_dir.join(DEFAULT_REPORT_DIR),
        };

        // 3-레이어 병합의 가운데 층을 이루는 전역 기본 블록
        let global_arguments = object_map(config_data, "arguments");
        let global_settings = object_map(config_data, "settings");
        let base_arguments =
            Self::base_arguments(&url_host, &url_path, &admin_options, application_base_dir);

        let scenarios = match config_data.get("scenario") {
            None => Vec::new(),
            Some(Value::Array(entries)) => {
                let mut scenarios = Vec::with_capacity(entries.len());
                for entry in entries {
                    scenarios.push(build_scenario(
                        entry,
                        fixture_dir,
                        &base_arguments,
                        &global_arguments,
                        &global_settings,
                    )?);
                }
                scenarios
            }
            Some(_) => return Err(InvalidInputError::ScenariosNotAnArray.into()),
        };

        debug!(
            scenarios = scenarios.len(),
            url_host = url_host.as_str(),
            "configuration constructed"
        );

        Ok(Self {
            application_base_dir: application_base_dir.to_path_buf(),
            url_host,
            url_path,
            admin_options,
            install_options,
            report_dir,
            scenarios,
        })
    }

    /// 모든 시나리오 인자 맵의 최하위(암묵 기본값) 레이어를 만듭니다.
    fn base_arguments(
        url_host: &str,
        url_path: &str,
        admin_options: &ArgMap,
        application_base_dir: &Path,
    ) -> ArgMap {
        let mut base = ArgMap::new();
        base.insert(Scenario::ARG_USERS.to_owned(), Value::from(1));
        base.insert(Scenario::ARG_LOOPS.to_owned(), Value::from(1));
        base.insert(Scenario::ARG_HOST.to_owned(), Value::from(url_host));
        base.insert(Scenario::ARG_PATH.to_owned(), Value::from(url_path));
        for (name, value) in admin_options {
            base.insert(format!("{ADMIN_ARG_PREFIX}{name}"), value.clone());
        }
        base.insert(
            Scenario::ARG_BASEDIR.to_owned(),
            Value::from(application_base_dir.display().to_string()),
        );
        base
    }

    /// 애플리케이션 베이스 디렉토리 (전달받은 값 그대로)
    pub fn application_base_dir(&self) -> &Path {
        &self.application_base_dir
    }

    /// 대상 애플리케이션 호스트
    pub fn url_host(&self) -> &str {
        &self.url_host
    }

    /// 대상 애플리케이션 경로
    pub fn url_path(&self) -> &str {
        &self.url_path
    }

    /// 백엔드 접근 옵션 (frontname/username/password)
    pub fn admin_options(&self) -> &ArgMap {
        &self.admin_options
    }

    /// 애플리케이션 프로비저닝 옵션
    pub fn install_options(&self) -> &ArgMap {
        &self.install_options
    }

    /// 시나리오 목록 (선언 순서 유지)
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// 결과 리포트 출력 디렉토리 (존재하지 않아도 됨)
    pub fn report_dir(&self) -> &Path {
        &self.report_dir
    }
}

/// 시나리오 한 건의 검증 → 경로 해석 → 병합 → 조립 파이프라인
fn build_scenario(
    entry: &Value,
    fixture_dir: &Path,
    base_arguments: &ArgMap,
    global_arguments: &ArgMap,
    global_settings: &ArgMap,
) -> Result<Scenario, BenchrigError> {
    let raw = RawScenario::validate(entry)?;

    // 존재하지 않는 경우만 도메인 에러로 번역하고, 그 외 I/O 실패는
    // 그대로 전파합니다.
    let file = path::resolve(raw.file, fixture_dir).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => BenchrigError::from(InvalidInputError::FileMissing {
            file: raw.file.to_owned(),
            title: raw.title.to_owned(),
        }),
        _ => BenchrigError::from(err),
    })?;

    let mut fixtures = Vec::with_capacity(raw.fixtures.len());
    for reference in &raw.fixtures {
        let fixture = path::resolve(reference, fixture_dir).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => BenchrigError::from(InvalidInputError::FixtureMissing {
                fixture: (*reference).to_owned(),
            }),
            _ => BenchrigError::from(err),
        })?;
        fixtures.push(fixture);
    }

    // 시나리오 자체 레이어: arguments 맵에 최상위 users/loops 선언을 겹침
    let mut own_arguments = raw.arguments;
    if let Some(users) = raw.users {
        own_arguments.insert(Scenario::ARG_USERS.to_owned(), Value::from(users));
    }
    if let Some(loops) = raw.loops {
        own_arguments.insert(Scenario::ARG_LOOPS.to_owned(), Value::from(loops));
    }

    let arguments = merge([base_arguments, global_arguments, &own_arguments]);
    let settings = merge([global_settings, &raw.settings]);

    Ok(Scenario::new(
        raw.title.to_owned(),
        file,
        arguments,
        settings,
        fixtures,
    ))
}

/// 문자열 키를 읽습니다 (없거나 문자열이 아니면 `None`).
fn string_key<'a>(parent: &'a Value, key: &str) -> Option<&'a str> {
    parent.get(key).and_then(Value::as_str)
}
