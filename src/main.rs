use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rating_predictor::adapters::terminal::TerminalView;
use rating_predictor::domain::ports::RngSource;
use rating_predictor::utils::{logger, validation::Validate};
use rating_predictor::{CliConfig, Orchestrator, RemotePredictor};
use std::io::{self, IsTerminal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match cli.resolve().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let predictor = RemotePredictor::from_config(&settings);

    if cli.health {
        match predictor.health().await {
            Ok(health) => {
                println!(
                    "{} (status: {}, model loaded: {})",
                    health.message, health.status, health.model_loaded
                );
                return Ok(());
            }
            Err(e) => {
                eprintln!("❌ Prediction service unreachable: {}", e);
                std::process::exit(2);
            }
        }
    }

    let feedback = match cli.feedback.clone() {
        Some(text) => text,
        None => io::read_to_string(io::stdin()).context("reading feedback from stdin")?,
    };

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut orchestrator = Orchestrator::new(predictor, RngSource(rng));
    orchestrator.set_input(feedback);

    let outcome = orchestrator.predict().await;

    let mut notices = TerminalView::new(io::stderr(), false);
    if let Some(toast) = &orchestrator.view().toast {
        notices.toast(toast)?;
    }

    if let Err(e) = outcome {
        if e.is_validation() {
            std::process::exit(1);
        }
        return Err(e.into());
    }

    let Some(modal) = &orchestrator.view().modal else {
        return Ok(());
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&modal.result)?);
        return Ok(());
    }

    let stdout = io::stdout();
    let interactive = stdout.is_terminal();
    let mut view = TerminalView::new(stdout, settings.color && interactive);
    if settings.animate && interactive {
        view.play(modal, settings.frame_interval).await?;
    } else {
        view.show_final(modal)?;
    }

    Ok(())
}
