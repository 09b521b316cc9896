// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(author = "Copyright (C) 2024 Laixer Equipment B.V.")]
#[command(version, propagate_version = true)]
#[command(about = "Planar two-link arm kinematics utility", long_about = None)]
struct Args {
    /// Configuration file.
    #[arg(short = 'c', long = "config", alias = "conf", value_name = "FILE")]
    config: Option<std::path::PathBuf>,
    /// Level of verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Commands.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Compute the arm pose from joint angles.
    Forward {
        /// Base joint angle in degrees.
        #[arg(allow_negative_numbers = true)]
        theta1: f32,
        /// Elbow joint angle in degrees.
        #[arg(allow_negative_numbers = true)]
        theta2: f32,
    },
    /// Compute the joint angles for a target.
    Inverse {
        /// Target X.
        #[arg(allow_negative_numbers = true)]
        x: f32,
        /// Target Y.
        #[arg(allow_negative_numbers = true)]
        y: f32,
    },
    /// Move the arm to a target and print every frame.
    Move {
        /// Target X.
        #[arg(allow_negative_numbers = true)]
        x: f32,
        /// Target Y.
        #[arg(allow_negative_numbers = true)]
        y: f32,
        /// Start configuration in degrees.
        #[arg(
            long,
            num_args = 2,
            value_names = ["THETA1", "THETA2"],
            allow_negative_numbers = true
        )]
        from: Option<Vec<f32>>,
        /// Number of interpolation steps.
        #[arg(long)]
        steps: Option<usize>,
    },
    /// Print the reachability map of the workspace.
    Reach {
        /// Number of samples per axis.
        #[arg(short, long)]
        resolution: Option<usize>,
    },
    /// Print the joint limits.
    Limits,
}

fn main() -> anyhow::Result<()> {
    use log::LevelFilter;

    let args = Args::parse();

    let mut log_config = simplelog::ConfigBuilder::new();
    log_config.set_time_level(LevelFilter::Off);
    log_config.set_thread_level(LevelFilter::Off);
    log_config.set_target_level(LevelFilter::Off);
    log_config.set_location_level(LevelFilter::Off);

    let log_level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    simplelog::TermLogger::init(
        log_level,
        log_config.build(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let config = match &args.config {
        Some(path) => armsim_core::config::from_file(path)?,
        None => armsim_core::config::Config::default(),
    };

    log::trace!("{:#?}", config);

    armsim_core::global::set_joint_limits(config.joint_limits()?)?;
    log::debug!("Joint limits: {}", armsim_core::global::joint_limits());

    match args.command {
        Command::Forward { theta1, theta2 } => commands::forward(&config, theta1, theta2),
        Command::Inverse { x, y } => commands::inverse(&config, x, y),
        Command::Move { x, y, from, steps } => {
            let from = from.map(|angles| (angles[0], angles[1]));
            commands::move_to(&config, x, y, from, steps)
        }
        Command::Reach { resolution } => commands::reach(&config, resolution),
        Command::Limits => commands::limits(),
    }
}
