//! 판매 대시보드 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 전체 기간 대시보드
//! sales dashboard
//!
//! # 2024년 노트북/모니터, 북부 지역만
//! sales dashboard -p Laptop -p Monitor -r North -d 2024-01-01 -d 2024-12-31
//!
//! # 필터링된 데이터를 CSV로 저장 (stdout은 -o -)
//! sales export -s Seller_3 -o seller3.csv
//!
//! # 원본 데이터 2페이지
//! sales table --page 2 --page-size 50
//!
//! # 선택 가능한 필터 값 보기
//! sales options
//! ```

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sales_cli::commands::dashboard::render_dashboard;
use sales_cli::commands::export::{export_filtered, ExportConfig, DEFAULT_EXPORT_FILE};
use sales_cli::commands::options::render_options;
use sales_cli::commands::table::render_page;
use sales_cli::{DashboardSession, FilterArgs, OutputFormat, ResolvedSelection};
use sales_core::{dashboard_span, init_logging, AppConfig, LogConfig, SalesError};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "sales")]
#[command(about = "Sales dashboard CLI - 합성 판매 데이터 필터링 및 집계", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 (TOML)
    #[arg(short, long, global = true, default_value = "config/default.toml")]
    config: String,

    /// 데이터 생성 시드 (설정값 대신 사용)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// KPI, 월별 추이, 상품/지역/판매자별 매출 출력
    Dashboard {
        #[command(flatten)]
        filters: FilterArgs,

        /// 출력 형식 (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// 필터링된 데이터를 CSV로 내보내기
    Export {
        #[command(flatten)]
        filters: FilterArgs,

        /// 출력 파일 경로 (-이면 stdout)
        #[arg(short, long, default_value = DEFAULT_EXPORT_FILE)]
        output: String,
    },

    /// 원본 데이터 테이블 조회
    Table {
        #[command(flatten)]
        filters: FilterArgs,

        /// 페이지 번호 (1부터)
        #[arg(long, default_value = "1")]
        page: usize,

        /// 페이지 크기 (기본: 설정값)
        #[arg(long)]
        page_size: Option<usize>,

        /// 출력 형식 (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// 선택 가능한 필터 값과 날짜 범위 보기
    Options {
        /// 출력 형식 (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

fn main() -> ExitCode {
    // .env 파일은 있으면 사용
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<SalesError>() {
                Some(SalesError::EmptySelection) => eprintln!("{}", SalesError::EmptySelection),
                _ => {
                    error!("Command failed: {:#}", e);
                    eprintln!("오류: {:#}", e);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = AppConfig::load(Some(&cli.config))
        .with_context(|| format!("Failed to load config: {}", cli.config))?;
    if let Some(seed) = cli.seed {
        config.generator = config.generator.with_seed(seed);
    }

    // 로깅은 stderr로만 출력되므로 stdout의 CSV/JSON과 섞이지 않음
    if let Err(e) = init_logging(LogConfig::from_settings(&config.logging)) {
        eprintln!("로깅 초기화 실패: {}", e);
    }

    let session = DashboardSession::new(config)?;
    let _span = dashboard_span!(
        "sales",
        session.config().generator.seed,
        session.dataset().len()
    )
    .entered();

    match cli.command {
        Commands::Dashboard { filters, format } => {
            let format = OutputFormat::parse(&format)?;
            let selection = resolve(&session, filters)?;
            let dashboard = session.dashboard(&selection.selection)?;
            println!("{}", render_dashboard(&dashboard, format)?);
        }

        Commands::Export { filters, output } => {
            let selection = resolve(&session, filters)?;
            let config = ExportConfig {
                output: output.clone(),
            };
            let bytes = export_filtered(&session, &selection.selection, &config)?;
            if output != "-" {
                info!("✅ Exported {} bytes", bytes);
                eprintln!("내보내기 완료: {}", output);
            }
        }

        Commands::Table {
            filters,
            page,
            page_size,
            format,
        } => {
            let format = OutputFormat::parse(&format)?;
            let selection = resolve(&session, filters)?;
            let page = session.page(&selection.selection, page, page_size)?;
            println!("{}", render_page(&page, format)?);
        }

        Commands::Options { format } => {
            let format = OutputFormat::parse(&format)?;
            println!("{}", render_options(&session.options(), format)?);
        }
    }

    Ok(())
}

/// 필터 인자를 해석하고 날짜 경고가 있으면 출력합니다.
fn resolve(session: &DashboardSession, filters: FilterArgs) -> Result<ResolvedSelection> {
    let resolved = session.resolve(&filters.into())?;
    if let Some(warning) = &resolved.warning {
        eprintln!("{}", warning);
    }
    Ok(resolved)
}
