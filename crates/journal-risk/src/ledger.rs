//! 리스크 거래 원장.
//!
//! 개인 계좌와 펀디드 계좌는 같은 구조의 원장을 따로 가집니다. 금액은 USD로
//! 저장하고, 표시할 때만 `CurrencyConverter`로 현지 통화로 환산합니다.
//! 차트용 시리즈는 렌더링 없이 데이터만 만듭니다.

use chrono::NaiveDate;
use journal_core::{
    ConfigValidationError, CurrencyConfig, Direction, EntryId, JournalError, JournalResult,
};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// 계좌 종류.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// 개인 계좌
    #[default]
    Personal,
    /// 프랍 펌 펀디드 계좌
    Funded,
}

impl std::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Personal => write!(f, "personal"),
            Self::Funded => write!(f, "funded"),
        }
    }
}

/// 원장의 거래 한 건.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskTrade {
    /// 파일에서 읽을 때 없으면 새로 발급
    #[serde(default)]
    pub id: EntryId,
    pub date: NaiveDate,
    pub pair: String,
    pub signal: Direction,
    pub risk_pips: Decimal,
    pub risk_usd: Decimal,
    pub gain_pips: Decimal,
    pub gain_usd: Decimal,
}

impl RiskTrade {
    /// 새 거래를 생성합니다. 손익은 0으로 시작합니다.
    pub fn new(
        date: NaiveDate,
        pair: impl Into<String>,
        signal: Direction,
        risk_pips: Decimal,
        risk_usd: Decimal,
    ) -> Self {
        Self {
            id: EntryId::new(),
            date,
            pair: pair.into(),
            signal,
            risk_pips,
            risk_usd,
            gain_pips: Decimal::ZERO,
            gain_usd: Decimal::ZERO,
        }
    }

    /// 결과 손익을 기록합니다.
    pub fn with_gain(mut self, gain_pips: Decimal, gain_usd: Decimal) -> Self {
        self.gain_pips = gain_pips;
        self.gain_usd = gain_usd;
        self
    }

    /// 거래일의 ("mm/dd/yyyy", 요일).
    pub fn date_and_day(&self) -> (String, String) {
        format_date_and_day(self.date)
    }
}

/// 원장 합계.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerTotals {
    pub trade_count: usize,
    pub risk_pips: Decimal,
    pub risk_usd: Decimal,
    pub gain_pips: Decimal,
    pub gain_usd: Decimal,
}

/// 거래 원장.
///
/// 입력 순서를 유지합니다. 날짜순 정렬은 조회 시점에만 합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskLedger {
    kind: AccountKind,
    trades: Vec<RiskTrade>,
}

impl RiskLedger {
    pub fn new(kind: AccountKind) -> Self {
        Self {
            kind,
            trades: Vec::new(),
        }
    }

    /// 기존 거래 목록으로 원장을 만듭니다.
    pub fn from_trades(kind: AccountKind, trades: Vec<RiskTrade>) -> Self {
        Self { kind, trades }
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    /// 거래를 추가하고 ID를 반환합니다.
    pub fn add(&mut self, trade: RiskTrade) -> EntryId {
        let id = trade.id;
        debug!(account = %self.kind, trade_id = %id, pair = %trade.pair, "Trade added");
        self.trades.push(trade);
        id
    }

    /// 거래 내용을 교체합니다. ID는 유지됩니다.
    pub fn update(&mut self, id: EntryId, mut trade: RiskTrade) -> JournalResult<()> {
        let slot = self
            .trades
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| JournalError::NotFound(format!("trade {}", id)))?;
        trade.id = id;
        *slot = trade;
        debug!(account = %self.kind, trade_id = %id, "Trade updated");
        Ok(())
    }

    /// 거래를 삭제하고 삭제된 거래를 반환합니다.
    pub fn remove(&mut self, id: EntryId) -> JournalResult<RiskTrade> {
        let index = self
            .trades
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| JournalError::NotFound(format!("trade {}", id)))?;
        debug!(account = %self.kind, trade_id = %id, "Trade removed");
        Ok(self.trades.remove(index))
    }

    pub fn get(&self, id: EntryId) -> Option<&RiskTrade> {
        self.trades.iter().find(|t| t.id == id)
    }

    /// 입력 순서대로의 거래 목록.
    pub fn trades(&self) -> &[RiskTrade] {
        &self.trades
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    /// 날짜 오름차순 (같은 날짜는 입력 순서 유지).
    pub fn sorted_by_date(&self) -> Vec<&RiskTrade> {
        let mut sorted: Vec<&RiskTrade> = self.trades.iter().collect();
        sorted.sort_by_key(|t| t.date);
        sorted
    }

    /// 원장 합계. 합산 중 Decimal 범위를 넘으면 `InvalidInput`.
    pub fn totals(&self) -> JournalResult<LedgerTotals> {
        self.trades
            .iter()
            .try_fold(LedgerTotals::default(), |acc, t| {
                Ok(LedgerTotals {
                    trade_count: acc.trade_count + 1,
                    risk_pips: checked_sum(acc.risk_pips, t.risk_pips, "risk_pips")?,
                    risk_usd: checked_sum(acc.risk_usd, t.risk_usd, "risk_usd")?,
                    gain_pips: checked_sum(acc.gain_pips, t.gain_pips, "gain_pips")?,
                    gain_usd: checked_sum(acc.gain_usd, t.gain_usd, "gain_usd")?,
                })
            })
    }

    /// 날짜순 위험/수익 라인 시리즈.
    pub fn line_series(&self) -> Vec<LinePoint> {
        self.sorted_by_date()
            .into_iter()
            .map(|t| LinePoint {
                date: t.date,
                label: chart_label(t.date),
                risk_usd: t.risk_usd,
                gain_usd: t.gain_usd,
            })
            .collect()
    }

    /// 날짜별 위험 합계 히스토그램.
    ///
    /// 같은 달력 날짜의 거래를 하나의 막대로 합칩니다.
    pub fn risk_histogram(&self, converter: &CurrencyConverter) -> JournalResult<Vec<HistogramBar>> {
        let mut by_date: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
        for trade in &self.trades {
            let total = by_date.entry(trade.date).or_default();
            *total = checked_sum(*total, trade.risk_usd, "daily risk_usd")?;
        }

        by_date
            .into_iter()
            .map(|(date, usd_total)| {
                Ok(HistogramBar {
                    date,
                    label: chart_label(date),
                    risk_local: converter.to_local(usd_total)?,
                    usd_total,
                })
            })
            .collect()
    }
}

fn checked_sum(acc: Decimal, value: Decimal, field: &str) -> JournalResult<Decimal> {
    acc.checked_add(value)
        .ok_or_else(|| JournalError::InvalidInput(format!("{} total overflowed", field)))
}

/// 라인 차트 한 점.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinePoint {
    pub date: NaiveDate,
    /// "mm/dd"
    pub label: String,
    pub risk_usd: Decimal,
    pub gain_usd: Decimal,
}

/// 히스토그램 막대 한 개.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramBar {
    pub date: NaiveDate,
    /// "mm/dd"
    pub label: String,
    /// 현지 통화 위험 합계
    pub risk_local: Decimal,
    /// USD 위험 합계
    pub usd_total: Decimal,
}

/// USD → 현지 통화 환산기.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyConverter {
    /// 현지 통화 코드 (기본값: TZS)
    pub currency: String,
    /// 1 USD당 현지 통화 (기본값: 2500)
    pub usd_rate: Decimal,
}

impl Default for CurrencyConverter {
    fn default() -> Self {
        Self {
            currency: "TZS".to_string(),
            usd_rate: dec!(2500),
        }
    }
}

impl CurrencyConverter {
    /// 환율을 검증하고 환산기를 생성합니다.
    pub fn new(currency: impl Into<String>, usd_rate: Decimal) -> Result<Self, ConfigValidationError> {
        let currency = currency.into();
        if currency.trim().is_empty() {
            return Err(ConfigValidationError::MissingField("local_currency".into()));
        }
        if usd_rate <= Decimal::ZERO {
            return Err(ConfigValidationError::InvalidValue(
                "usd_rate must be greater than 0".into(),
            ));
        }
        Ok(Self { currency, usd_rate })
    }

    /// 애플리케이션 설정의 `[currency]` 섹션에서 생성합니다.
    pub fn from_settings(settings: &CurrencyConfig) -> Result<Self, ConfigValidationError> {
        Self::new(settings.local_currency.clone(), settings.usd_rate)
    }

    /// USD 금액을 현지 통화로 환산합니다.
    ///
    /// 결과가 Decimal 범위를 넘으면 `InvalidInput`을 반환합니다.
    pub fn to_local(&self, usd: Decimal) -> JournalResult<Decimal> {
        usd.checked_mul(self.usd_rate).ok_or_else(|| {
            JournalError::InvalidInput(format!(
                "{} USD at rate {} overflows {}",
                usd, self.usd_rate, self.currency
            ))
        })
    }

    /// "62500 TZS" (정수로 반올림).
    pub fn format_local(&self, usd: Decimal) -> JournalResult<String> {
        let local = self
            .to_local(usd)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        Ok(format!("{} {}", local.normalize(), self.currency))
    }
}

/// "$25.00" (소수점 2자리).
pub fn format_usd(usd: Decimal) -> String {
    let rounded = usd.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", rounded)
}

/// ("mm/dd/yyyy", 요일 영문 이름).
pub fn format_date_and_day(date: NaiveDate) -> (String, String) {
    (
        date.format("%m/%d/%Y").to_string(),
        date.format("%A").to_string(),
    )
}

/// 차트 축 라벨 "mm/dd".
pub fn chart_label(date: NaiveDate) -> String {
    date.format("%m/%d").to_string()
}
