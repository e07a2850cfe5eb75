//! 트레이딩 저널 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # NY 세션 기술적 체크리스트 보기
//! journal catalog --kind technical
//!
//! # 저장된 체크 상태 평가 (임계값 4로 완화)
//! journal evaluate --answers data/answers.json --min-core-steps 4
//!
//! # 셋업 분류 + 잔고 10,000 기준 리스크 금액
//! journal classify --trend --fib-zone --kill-zone-box --bos --order-block --balance 10000
//!
//! # 펀디드 계좌 원장 요약
//! journal ledger --trades data/funded.json --account funded
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use journal_cli::commands::catalog::{print_catalog, CatalogConfig};
use journal_cli::commands::classify::{run_classify, ClassifyConfig};
use journal_cli::commands::evaluate::{run_evaluate, EvaluateConfig};
use journal_cli::commands::ledger::{parse_account, run_ledger, LedgerConfig};
use journal_core::{init_logging, AppConfig, CatalogKind, LogConfig, SetupCondition};
use journal_risk::StrategySetup;
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "journal")]
#[command(about = "Trade journal CLI - 체크리스트 평가와 리스크 관리", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 경로
    #[arg(short, long, global = true, default_value = "config/default.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 내장 체크리스트 카탈로그 출력
    Catalog {
        /// 카탈로그 종류 (technical, amd, emotional, psychology, trade-setup)
        #[arg(short, long, default_value = "technical")]
        kind: String,

        /// JSON으로 출력
        #[arg(long)]
        json: bool,
    },

    /// 체크 상태(AnswerMap) 파일 평가
    Evaluate {
        /// AnswerMap JSON 파일 (라벨 → true/false)
        #[arg(short, long)]
        answers: PathBuf,

        /// 준비 임계값 (기본: 설정 파일 값)
        #[arg(long)]
        min_core_steps: Option<usize>,

        /// 감정 점수 방식 (signed-balance, good-ratio)
        #[arg(long)]
        scoring: Option<String>,

        /// JSON으로 출력
        #[arg(long)]
        json: bool,
    },

    /// 셋업 분류와 권장 리스크
    Classify {
        /// 4H 추세 일치
        #[arg(long)]
        trend: bool,

        /// Fib 할인/프리미엄 구간
        #[arg(long)]
        fib_zone: bool,

        /// ICT Kill Zone 또는 박스
        #[arg(long)]
        kill_zone_box: bool,

        /// 구조 돌파 (BoS)
        #[arg(long)]
        bos: bool,

        /// 유효한 오더 블록
        #[arg(long)]
        order_block: bool,

        /// 일간 움직임 방향 일치
        #[arg(long)]
        daily_movement: bool,

        /// AMD 패턴
        #[arg(long)]
        amd: bool,

        /// 장악형 캔들
        #[arg(long)]
        engulfing: bool,

        /// UT Alert 신호
        #[arg(long)]
        ut_alert: bool,

        /// 저널 카드 AnswerMap 파일 (질문 텍스트 → true/false)
        #[arg(short, long)]
        answers: Option<PathBuf>,

        /// 계좌 잔고 (리스크 금액 계산용)
        #[arg(short, long)]
        balance: Option<Decimal>,

        /// JSON으로 출력
        #[arg(long)]
        json: bool,
    },

    /// 리스크 거래 원장 요약
    Ledger {
        /// 거래 목록 JSON 파일
        #[arg(short, long)]
        trades: PathBuf,

        /// 계좌 종류 (personal, funded)
        #[arg(long, default_value = "personal")]
        account: String,

        /// 1 USD당 현지 통화 환율 (기본: 설정 파일 값)
        #[arg(long)]
        rate: Option<Decimal>,

        /// 현지 통화 코드 (기본: 설정 파일 값)
        #[arg(long)]
        currency: Option<String>,
    },
}

fn main() -> Result<()> {
    // .env 파일 로드 (없어도 무시)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let app_config = AppConfig::load(&cli.config)?;
    init_logging(LogConfig::from_settings(&app_config.logging).with_env_overrides())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
    info!(config = %cli.config.display(), "Configuration loaded");

    match cli.command {
        Commands::Catalog { kind, json } => {
            let kind = kind.parse::<CatalogKind>().map_err(|e| {
                anyhow::anyhow!(
                    "{}. Supported: technical, amd, emotional, psychology, trade-setup",
                    e
                )
            })?;
            print_catalog(CatalogConfig { kind, json })?;
        }

        Commands::Evaluate {
            answers,
            min_core_steps,
            scoring,
            json,
        } => {
            let config = EvaluateConfig {
                answers_path: answers,
                min_core_steps,
                scoring,
                json,
            };
            if let Err(e) = run_evaluate(config, &app_config.evaluation) {
                error!("Evaluation failed: {:#}", e);
                return Err(e);
            }
        }

        Commands::Classify {
            trend,
            fib_zone,
            kill_zone_box,
            bos,
            order_block,
            daily_movement,
            amd,
            engulfing,
            ut_alert,
            answers,
            balance,
            json,
        } => {
            let flags = [
                (SetupCondition::Trend, trend),
                (SetupCondition::FibZone, fib_zone),
                (SetupCondition::KillZoneBox, kill_zone_box),
                (SetupCondition::BreakOfStructure, bos),
                (SetupCondition::OrderBlock, order_block),
                (SetupCondition::DailyMovement, daily_movement),
                (SetupCondition::AmdPattern, amd),
                (SetupCondition::EngulfingCandle, engulfing),
                (SetupCondition::UtAlert, ut_alert),
            ];
            let setup: StrategySetup = flags
                .into_iter()
                .filter(|(_, checked)| *checked)
                .map(|(condition, _)| condition)
                .collect();

            let config = ClassifyConfig {
                setup,
                answers_path: answers,
                balance,
                json,
            };
            if let Err(e) = run_classify(config, &app_config.risk) {
                error!("Classification failed: {:#}", e);
                return Err(e);
            }
        }

        Commands::Ledger {
            trades,
            account,
            rate,
            currency,
        } => {
            let config = LedgerConfig {
                trades_path: trades,
                account: parse_account(&account)?,
                rate,
                currency,
            };
            if let Err(e) = run_ledger(config, &app_config.currency) {
                error!("Ledger summary failed: {:#}", e);
                return Err(e);
            }
        }
    }

    Ok(())
}
