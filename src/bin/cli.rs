//! Folio CLI
//!
//! Command-line access to the dashboard core:
//! - Format amounts and goal progress
//! - Dump chart configurations as JSON
//! - Print the frames of a counter animation
//! - Look up financial terms
//! - Generate a default config file

use clap::{Parser, Subcommand};
use folio::animation::{Animator, Easing, FrameScheduler, ManualFrameLoop};
use folio::charts::{dashboard_charts, ChartId};
use folio::config::generate_default_config;
use folio::format::{calculate_progress_percentage, format_currency, format_rupees};
use folio::page::terms_in;
use folio::LoggingConfig;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "folio-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Portfolio dashboard formatting and chart tools")]
#[command(long_about = "Folio renders a personal portfolio dashboard.\nThese commands expose its formatting, animation and chart data from the terminal.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Format a rupee amount (crore / lakh / grouped)
    Format {
        /// Amount in rupees
        amount: f64,
        /// Always print the full grouped figure
        #[arg(long)]
        grouped: bool,
    },

    /// Percentage of a goal reached, to one decimal place
    Progress {
        /// Amount saved so far
        current: f64,
        /// Goal amount
        target: f64,
    },

    /// Print chart configurations as JSON
    Charts {
        /// Chart to print (portfolio, allocation, growth); all when omitted
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Print the values a counter animation displays, frame by frame
    Animate {
        #[arg(long, default_value = "0")]
        from: f64,
        #[arg(long, default_value = "31896000")]
        to: f64,
        #[arg(long, default_value = "2500")]
        duration_ms: u64,
        /// Frame interval
        #[arg(long, default_value = "16")]
        frame_ms: u64,
        /// Use linear instead of quartic ease-out
        #[arg(long)]
        linear: bool,
    },

    /// Explain the financial terms found in some text
    Terms {
        text: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Values a counter shows, paired with the virtual time of each frame
fn counter_frames(
    from: f64,
    to: f64,
    duration: Duration,
    step: Duration,
    easing: Easing,
) -> Vec<(Duration, f64)> {
    let frames = Rc::new(ManualFrameLoop::new(step));
    let animator = Animator::new(frames.clone()).with_easing(easing);

    let shown = Rc::new(RefCell::new(Vec::new()));
    let sink = shown.clone();
    let clock = frames.clone();
    animator.animate(from, to, duration, move |value| {
        sink.borrow_mut().push((clock.now(), value));
    });
    frames.run_until_idle(usize::MAX);

    let values = shown.borrow().clone();
    values
}

/// Frame interval for `--frame-ms`; a zero interval would never advance
fn frame_step(frame_ms: u64) -> Duration {
    Duration::from_millis(frame_ms.max(1))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    LoggingConfig {
        level: cli.log_level.clone(),
        ..LoggingConfig::default()
    }
    .init_tracing();

    match cli.command {
        Commands::Format { amount, grouped } => {
            if grouped {
                println!("{}", format_rupees(amount));
            } else {
                println!("{}", format_currency(amount));
            }
        }

        Commands::Progress { current, target } => {
            let percent = calculate_progress_percentage(current, target)?;
            println!("{}%", percent);
        }

        Commands::Charts { name } => {
            let charts = match name {
                Some(name) => vec![name.parse::<ChartId>()?.config()],
                None => dashboard_charts(),
            };
            println!("{}", serde_json::to_string_pretty(&charts)?);
        }

        Commands::Animate {
            from,
            to,
            duration_ms,
            frame_ms,
            linear,
        } => {
            let easing = if linear {
                Easing::Linear
            } else {
                Easing::EaseOutQuart
            };

            let step = frame_step(frame_ms);
            let duration = Duration::from_millis(duration_ms);
            for (i, (at, value)) in counter_frames(from, to, duration, step, easing)
                .into_iter()
                .enumerate()
            {
                println!("{:>5}  {:>8}ms  {}", i, at.as_millis(), format_rupees(value));
            }
        }

        Commands::Terms { text } => {
            let found = terms_in(&text);
            if found.is_empty() {
                println!("No glossary terms found");
            }
            for (term, description) in found {
                println!("{:<10} {}", term, description);
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_frames_are_timed_by_clamped_step() {
        let frames = counter_frames(
            0.0,
            1_000.0,
            Duration::from_millis(5),
            frame_step(0),
            Easing::Linear,
        );

        let times: Vec<u128> = frames.iter().map(|(at, _)| at.as_millis()).collect();
        assert_eq!(times, vec![1, 2, 3, 4, 5]);
        assert_eq!(frames.last().map(|(_, v)| *v), Some(1_000.0));
    }

    #[test]
    fn test_counter_frames_equal_endpoints() {
        let frames = counter_frames(
            500.0,
            500.0,
            Duration::from_millis(100),
            Duration::from_millis(16),
            Easing::EaseOutQuart,
        );
        assert_eq!(frames, vec![(Duration::ZERO, 500.0)]);
    }
}
