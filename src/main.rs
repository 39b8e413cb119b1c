use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::fs;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use ws2812fx_firmata::config::{Config, ConnectionConfig};
use ws2812fx_firmata::{FxMode, NeopixelDriver, SerialTransport, SysexTransport, TcpTransport};

#[derive(Parser)]
#[command(name = "fxctl")]
#[command(about = "Control a WS2812FX LED strip behind a Firmata connection.", long_about = None)]
struct Cli {
    /// Path to configuration file (JSON)
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Re-send the strip configuration (pin and pixel count)
    Config,
    /// Start the animation
    On,
    /// Stop the animation and blank the strip
    Off,
    /// Set the global brightness
    Brightness {
        /// 0 (off) to 255
        level: u8,
    },
    /// Set the animation color
    Color {
        /// Hex RGB, e.g. 00FF00 or #00FF00
        color: String,
    },
    /// Color a single pixel
    Pixel {
        index: u16,
        /// Hex RGB, e.g. 00FF00 or #00FF00
        color: String,
    },
    /// Paint every pixel directly, bypassing the animation color
    Strip {
        /// Hex RGB, e.g. 00FF00 or #00FF00
        color: String,
    },
    /// Rotate the strip contents
    Shift { amount: u16 },
    /// Select an animation mode by name or firmware id
    Mode { mode: FxMode },
    /// Advance to a random catalog mode
    Cycle,
    /// List the animation mode catalog
    Modes,
    /// Configure the strip, then cycle modes until Ctrl-C
    Demo {
        /// Seconds between mode changes
        #[arg(long, default_value_t = 5)]
        interval: u64,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Command::Modes = cli.command {
        for mode in FxMode::ALL {
            println!("{:>2}  {}", mode.id(), mode);
        }
        return Ok(());
    }

    let config_data = fs::read_to_string(&cli.config)
        .with_context(|| format!("failed to read config file {}", cli.config))?;
    let config: Config = serde_json::from_str(&config_data)
        .with_context(|| format!("failed to parse config file {}", cli.config))?;

    let transport = connect(&config.connection)?;
    let mut strip = NeopixelDriver::new(transport, config.strip.pin, config.strip.pixel_count)?;

    match cli.command {
        Command::Config => strip.set_config()?,
        Command::On => strip.start()?,
        Command::Off => strip.stop()?,
        Command::Brightness { level } => strip.set_brightness(level)?,
        Command::Color { color } => strip.set_color(parse_color(&color)?)?,
        Command::Pixel { index, color } => strip.set_pixel(index, parse_color(&color)?)?,
        Command::Strip { color } => strip.set_strip(parse_color(&color)?)?,
        Command::Shift { amount } => strip.shift(amount)?,
        Command::Mode { mode } => strip.set_mode(mode)?,
        Command::Cycle => strip.mode_cycle()?,
        Command::Demo { interval } => run_demo(&mut strip, &config, interval)?,
        Command::Modes => unreachable!(),
    }

    Ok(())
}

/// Open the transport named by the configuration.
fn connect(config: &ConnectionConfig) -> Result<Box<dyn SysexTransport>> {
    match config.transport.as_str() {
        "serial" => {
            let port = config
                .port
                .as_deref()
                .context("serial transport requires a \"port\" entry")?;
            let transport = SerialTransport::open(port, config.baud_rate)
                .with_context(|| format!("failed to open serial port {}", port))?;
            info!("opened {} at {} baud", port, config.baud_rate);
            Ok(Box::new(transport))
        }
        "tcp" => {
            let address = config
                .address
                .as_deref()
                .context("tcp transport requires an \"address\" entry")?;
            let transport = TcpTransport::connect(address)
                .with_context(|| format!("failed to connect to {}", address))?;
            info!("connected to {}", address);
            Ok(Box::new(transport))
        }
        other => bail!("unknown transport: {}", other),
    }
}

/// Cycle through animation modes until interrupted, then blank the strip.
fn run_demo(
    strip: &mut NeopixelDriver<Box<dyn SysexTransport>>,
    config: &Config,
    interval: u64,
) -> Result<()> {
    // The firmware forgets its strip layout on reset, so always resync first.
    strip.set_config()?;
    strip.set_brightness(config.strip.brightness.unwrap_or(255))?;
    strip.start()?;

    let running = Arc::new(AtomicBool::new(true));
    let handler_flag = Arc::clone(&running);
    if let Err(e) = ctrlc::set_handler(move || handler_flag.store(false, Ordering::Relaxed)) {
        warn!("could not set Ctrl-C handler: {}", e);
    }

    info!("cycling modes every {}s, Ctrl-C to stop", interval);
    while running.load(Ordering::Relaxed) {
        strip.mode_cycle()?;

        // Sleep in short slices so Ctrl-C is picked up promptly.
        for _ in 0..interval * 10 {
            if !running.load(Ordering::Relaxed) {
                break;
            }
            thread::sleep(Duration::from_millis(100));
        }
    }

    info!("turning strip off");
    strip.stop()?;
    Ok(())
}

/// Parse a hex RGB color, with or without a `#` or `0x` prefix.
fn parse_color(s: &str) -> Result<u32> {
    let hex = s.trim_start_matches('#').trim_start_matches("0x");
    u32::from_str_radix(hex, 16).with_context(|| format!("invalid color: {}", s))
}
