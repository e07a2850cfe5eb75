//! CLI 명령어 구현 모듈.

pub mod catalog;
pub mod classify;
pub mod evaluate;
pub mod ledger;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// JSON 파일을 읽어 역직렬화합니다.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
}
