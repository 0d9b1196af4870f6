// SPDX-License-Identifier: MPL-2.0
use env_logger::{Builder, Target};
use log::LevelFilter;
use playback_overlay::app::{self, Flags, USAGE};
use playback_overlay::application::port::PlaybackEngine;
use playback_overlay::domain::overlay::DpadEvent;
use playback_overlay::infrastructure::{SimulatedEngine, TokioScheduler};
use playback_overlay::ui::overlay::OverlaySession;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

fn init_logger() {
    Builder::new()
        .target(Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .filter_module("playback_overlay", LevelFilter::Debug)
        .init();
}

fn main() -> ExitCode {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let flags = match Flags::from_env() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    if flags.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }
    let settings = match flags.settings() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Failed to start runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    let duration = flags.duration_secs();
    let mut engine = if duration > 0.0 {
        SimulatedEngine::new(duration)
    } else {
        SimulatedEngine::unprepared()
    };
    if let Err(err) = engine.play() {
        log::warn!("Starting paused: {}", err);
    }

    runtime.block_on(async move {
        let (scheduler, timers) = TokioScheduler::new();
        let session = OverlaySession::new(engine, scheduler, &settings);
        let (tx, inputs) = mpsc::channel(16);
        tokio::spawn(read_commands(tx));

        app::run(session, timers, inputs, |view| println!("{view}")).await;
    });
    ExitCode::SUCCESS
}

/// Forwards stdin lines as D-pad presses until `quit` or end of input.
async fn read_commands(tx: mpsc::Sender<DpadEvent>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                log::warn!("Failed to read stdin: {}", err);
                break;
            }
        };
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        if command.eq_ignore_ascii_case("quit") || command.eq_ignore_ascii_case("q") {
            break;
        }
        match command.parse::<DpadEvent>() {
            Ok(event) => {
                if tx.send(event).await.is_err() {
                    break;
                }
            }
            Err(err) => log::warn!("{}", err),
        }
    }
}
