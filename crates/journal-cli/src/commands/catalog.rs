//! 카탈로그 출력 기능.

use anyhow::Result;
use journal_core::{catalog, Catalog, CatalogKind};

/// 카탈로그 출력 설정.
#[derive(Debug)]
pub struct CatalogConfig {
    /// 카탈로그 종류
    pub kind: CatalogKind,
    /// JSON으로 출력
    pub json: bool,
}

/// 카탈로그를 사람이 읽을 수 있는 형태로 렌더링합니다.
pub fn render_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "=== {} checklist ({} items) ===\n",
        catalog.kind,
        catalog.item_count()
    ));

    for section in &catalog.sections {
        match section.core_step {
            Some(_) => out.push_str(&format!("\n{} (core step)\n", section.title)),
            None => out.push_str(&format!("\n{}\n", section.title)),
        }

        for item in &section.items {
            let mut tags: Vec<String> = item.bias.iter().map(|d| d.marker().to_string()).collect();
            if let Some(polarity) = item.polarity {
                tags.push(polarity.to_string());
            }

            if tags.is_empty() {
                out.push_str(&format!("  [ ] {}\n", item.label));
            } else {
                out.push_str(&format!("  [ ] {} ({})\n", item.label, tags.join(", ")));
            }
        }
    }

    out
}

/// 카탈로그를 stdout에 출력합니다.
pub fn print_catalog(config: CatalogConfig) -> Result<()> {
    let catalog = catalog(config.kind);
    tracing::debug!(kind = %config.kind, items = catalog.item_count(), "Printing catalog");

    if config.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
    } else {
        print!("{}", render_catalog(&catalog));
    }
    Ok(())
}
