//! 경로 해석 — 상대 참조를 루트 기준의 정규 절대 경로로 변환

use std::io;
use std::path::{Path, PathBuf};

/// 참조를 `root` 기준으로 해석하여 정규 절대 경로를 반환합니다.
///
/// 상대 참조는 `root`에 이어 붙이고, 이미 절대 경로인 참조는 그대로
/// 사용합니다. 이후 정규화(`.`/`..` 제거, 심볼릭 링크 해석)를 수행하며,
/// 대상이 존재하지 않으면 에러를 반환합니다.
pub fn resolve(reference: &str, root: &Path) -> io::Result<PathBuf> {
    let candidate = if Path::new(reference).is_absolute() {
        PathBuf::from(reference)
    } else {
        root.join(reference)
    };
    candidate.canonicalize()
}

/// 경로 존재 여부
pub fn exists(path: &Path) -> bool {
    path.exists()
}
