//! 레이어 병합 — 기본값 → 전역 → 시나리오 순으로 키-값 레이어를 결합

use crate::scenario::ArgMap;

/// 우선순위가 낮은 레이어부터 차례로 겹쳐 하나의 맵으로 병합합니다.
///
/// 결과는 모든 레이어 키의 합집합이며, 같은 키가 여러 레이어에 있으면
/// 마지막(최고 우선순위) 레이어의 값이 남습니다. 낮은 레이어에만 있는
/// 키는 그 값을 유지합니다.
pub fn merge<'a, I>(layers: I) -> ArgMap
where
    I: IntoIterator<Item = &'a ArgMap>,
{
    let mut merged = ArgMap::new();
    for layer in layers {
        for (key, value) in layer {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}
