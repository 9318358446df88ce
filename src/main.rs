use ali_travel::adapters::position::{FixedPosition, ReplayPositions};
use ali_travel::app::catalog::{self, MenuPanel};
use ali_travel::app::landing::LandingPage;
use ali_travel::app::location::{describe_estimate, describe_outcome, describe_position};
use ali_travel::app::order::{submit_order, OrderForm};
use ali_travel::config::cli::{Cli, Command};
use ali_travel::core::geo::{compute_distance_km, estimate_eta};
use ali_travel::domain::ports::MapRenderer;
use ali_travel::utils::error::ErrorSeverity;
use ali_travel::utils::logger;
use ali_travel::{
    AppConfig, DistanceEstimate, GeoJsonRenderer, PositionStream, Result, TrackingSession,
    TravelError,
};
use clap::Parser;
use std::time::Duration;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting ali CLI");

    // 驗證配置
    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            exit_with(&e);
        }
    };

    if let Err(e) = run(cli.command, &config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        exit_with(&e);
    }

    Ok(())
}

fn exit_with(e: &TravelError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

async fn run(command: Command, config: &AppConfig) -> Result<()> {
    let language = config.ui.language;

    match command {
        Command::Landing => {
            println!("{}", LandingPage::new(language, &config.ui.chat_url).render());
        }

        Command::Food { menu } => {
            let mut panel = MenuPanel::default();
            if let Some(id) = menu {
                catalog::find(id)?;
                panel.toggle(id);
            }
            println!("{}", catalog::render_food_page(language, &panel));
        }

        Command::Order {
            restaurant,
            name,
            item,
            notes,
        } => {
            let restaurant = catalog::find(restaurant)?;
            let form = OrderForm {
                customer_name: name,
                menu_item: item,
                notes,
            };
            let notification = submit_order(restaurant, form, language)?;
            println!("✅ {}", notification.message);
        }

        Command::Distance { from, to } => {
            let kilometers = compute_distance_km(from, to);
            let estimate = DistanceEstimate {
                kilometers,
                eta: estimate_eta(kilometers, config.estimate.assumed_speed_kmh),
            };
            println!("{}", describe_estimate(language, &estimate));
        }

        Command::Eta { km } => {
            if !km.is_finite() || km < 0.0 {
                return Err(TravelError::ValidationError {
                    message: format!("distance must be a non-negative number, got {}", km),
                });
            }
            println!("{}", estimate_eta(km, config.estimate.assumed_speed_kmh));
        }

        Command::Locate {
            at,
            positions,
            interval_ms,
            destinations,
            geojson,
        } => {
            let interval = interval_ms.map(Duration::from_millis);
            let stream = match (at, positions.as_deref()) {
                (Some(fix), _) => PositionStream::spawn(FixedPosition::new(fix)),
                (None, Some("-")) => {
                    let mut source = ReplayPositions::new(BufReader::new(tokio::io::stdin()));
                    if let Some(interval) = interval {
                        source = source.with_interval(interval);
                    }
                    PositionStream::spawn(source)
                }
                (None, Some(path)) => {
                    let mut source = ReplayPositions::open(path).await?;
                    if let Some(interval) = interval {
                        source = source.with_interval(interval);
                    }
                    PositionStream::spawn(source)
                }
                (None, None) => {
                    return Err(TravelError::MissingConfigError {
                        field: "--at or --positions".to_string(),
                    })
                }
            };

            let session = TrackingSession::new(config.build_estimator()?, stream);
            let observer = session.wait_for_fix().await;
            println!("{}", describe_position(language, observer));

            for destination in &destinations {
                let outcome = session.lookup(destination).await;
                if let Some(line) = describe_outcome(language, &outcome) {
                    println!("{}", line);
                }
            }

            if positions.is_some() {
                // 重播結束後，用最後的位置更新估算
                session.positions_finished().await;
                if let Some(estimate) = session.refresh().await {
                    println!("{}", describe_position(language, session.observer()));
                    println!("{}", describe_estimate(language, &estimate));
                }
            }

            if geojson {
                let view = session.snapshot().await;
                println!("{}", GeoJsonRenderer { pretty: true }.render(&view)?);
            }
        }
    }

    Ok(())
}
