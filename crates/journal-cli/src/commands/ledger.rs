//! 리스크 거래 원장 요약 기능.

use anyhow::{Context, Result};
use journal_core::CurrencyConfig;
use journal_risk::{format_usd, AccountKind, CurrencyConverter, RiskLedger, RiskTrade};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing::info;

/// 원장 요약 설정.
#[derive(Debug)]
pub struct LedgerConfig {
    /// 거래 목록 JSON 파일 경로
    pub trades_path: PathBuf,
    /// 계좌 종류
    pub account: AccountKind,
    /// 환율 재정의 (1 USD당 현지 통화)
    pub rate: Option<Decimal>,
    /// 현지 통화 코드 재정의
    pub currency: Option<String>,
}

/// 계좌 종류 문자열을 파싱합니다.
pub fn parse_account(s: &str) -> Result<AccountKind> {
    match s.to_lowercase().as_str() {
        "personal" | "risk" => Ok(AccountKind::Personal),
        "funded" | "prop" => Ok(AccountKind::Funded),
        _ => Err(anyhow::anyhow!(
            "Invalid account: {}. Use: personal, funded",
            s
        )),
    }
}

/// 설정 파일 값에 CLI 재정의를 적용해 환산기를 만듭니다.
pub fn build_converter(
    settings: &CurrencyConfig,
    rate: Option<Decimal>,
    currency: Option<&str>,
) -> Result<CurrencyConverter> {
    let converter = CurrencyConverter::new(
        currency.unwrap_or(settings.local_currency.as_str()),
        rate.unwrap_or(settings.usd_rate),
    )
    .context("Invalid currency settings")?;
    Ok(converter)
}

/// 원장을 표 형태로 렌더링합니다.
///
/// 합계나 환산이 Decimal 범위를 넘으면 에러입니다.
pub fn render_ledger(ledger: &RiskLedger, converter: &CurrencyConverter) -> Result<String> {
    let code = &converter.currency;
    let mut out = String::new();

    out.push_str(&format!("=== {} account ===\n", ledger.kind()));
    if ledger.is_empty() {
        out.push_str("No trades available.\n");
        return Ok(out);
    }

    out.push_str(&format!(
        "{:<12} {:<10} {:<8} {:<5} {:>10} {:>10} {:>14} {:>10} {:>10} {:>14}\n",
        "Date",
        "Day",
        "Pair",
        "Sig",
        "Risk pips",
        "Risk USD",
        format!("Risk {}", code),
        "Gain pips",
        "Gain USD",
        format!("Gain {}", code),
    ));

    for trade in ledger.trades() {
        let (date, day) = trade.date_and_day();
        out.push_str(&format!(
            "{:<12} {:<10} {:<8} {:<5} {:>10} {:>10} {:>14} {:>10} {:>10} {:>14}\n",
            date,
            day,
            trade.pair,
            trade.signal.marker(),
            trade.risk_pips.to_string(),
            format_usd(trade.risk_usd),
            converter.format_local(trade.risk_usd)?,
            trade.gain_pips.to_string(),
            format_usd(trade.gain_usd),
            converter.format_local(trade.gain_usd)?,
        ));
    }

    let totals = ledger.totals()?;
    out.push_str(&format!(
        "\nTotal: {} trades, risk {} ({}), gain {} ({})\n",
        totals.trade_count,
        format_usd(totals.risk_usd),
        converter.format_local(totals.risk_usd)?,
        format_usd(totals.gain_usd),
        converter.format_local(totals.gain_usd)?,
    ));

    out.push_str(&format!("\nTotal Risk ({}) per Date\n", code));
    for bar in ledger.risk_histogram(converter)? {
        out.push_str(&format!(
            "  {}  {} ({})\n",
            bar.label,
            converter.format_local(bar.usd_total)?,
            format_usd(bar.usd_total)
        ));
    }

    Ok(out)
}

/// 거래 파일을 읽어 원장 요약을 출력합니다.
pub fn run_ledger(config: LedgerConfig, settings: &CurrencyConfig) -> Result<RiskLedger> {
    let converter = build_converter(settings, config.rate, config.currency.as_deref())?;
    let trades: Vec<RiskTrade> = super::read_json(&config.trades_path)?;
    info!(
        path = %config.trades_path.display(),
        count = trades.len(),
        account = %config.account,
        "Trades loaded"
    );

    let ledger = RiskLedger::from_trades(config.account, trades);
    let text = render_ledger(&ledger, &converter)
        .with_context(|| format!("Cannot summarize {}", config.trades_path.display()))?;
    print!("{}", text);
    Ok(ledger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use journal_core::Direction;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_account() {
        assert_eq!(parse_account("Funded").unwrap(), AccountKind::Funded);
        assert_eq!(parse_account("personal").unwrap(), AccountKind::Personal);
        assert!(parse_account("demo").is_err());
    }

    #[test]
    fn test_overrides() {
        let settings = CurrencyConfig::default();
        let converter = build_converter(&settings, Some(dec!(129)), Some("KES")).unwrap();
        assert_eq!(converter.currency, "KES");
        assert_eq!(converter.usd_rate, dec!(129));

        assert!(build_converter(&settings, Some(Decimal::ZERO), None).is_err());
    }

    #[test]
    fn test_render_ledger() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut ledger = RiskLedger::new(AccountKind::Personal);
        ledger.add(
            RiskTrade::new(date, "EURUSD", Direction::Buy, dec!(15), dec!(25))
                .with_gain(dec!(30), dec!(50)),
        );

        let text = render_ledger(&ledger, &CurrencyConverter::default()).unwrap();
        assert!(text.contains("01/01/2024"));
        assert!(text.contains("Monday"));
        assert!(text.contains("$25.00"));
        assert!(text.contains("62500 TZS"));
        assert!(text.contains("Total: 1 trades"));
        assert!(text.contains("  01/01  62500 TZS ($25.00)"));
    }

    #[test]
    fn test_render_empty() {
        let text =
            render_ledger(&RiskLedger::new(AccountKind::Funded), &CurrencyConverter::default())
                .unwrap();
        assert!(text.contains("=== funded account ==="));
        assert!(text.contains("No trades available."));
    }

    #[test]
    fn test_render_huge_amount_is_error() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut ledger = RiskLedger::new(AccountKind::Personal);
        ledger.add(RiskTrade::new(date, "EURUSD", Direction::Buy, dec!(15), Decimal::MAX));

        let err = render_ledger(&ledger, &CurrencyConverter::default()).unwrap_err();
        let journal_err = err.downcast_ref::<journal_core::JournalError>();
        assert!(matches!(
            journal_err,
            Some(journal_core::JournalError::InvalidInput(_))
        ));
    }
}
