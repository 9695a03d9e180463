//! Drives a receive ring the way a UART interrupt would: bytes arrive in bursts
//! from the "IRQ" side and a main loop drains them into lines.
//!
//! `RING_DEMO_MESSAGE`, `RING_DEMO_ROUNDS` and `RUST_LOG` tune the run.

use std::{env, fmt::Display, sync::OnceLock};

use anyhow::{bail, Context, Result};
use spsc_ring::{handler::Trace, RingBuffer};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

const RX_SIZE: usize = 32;

struct Config {
    message: String,
    rounds: usize,
    log_level: String,
}

impl Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "message={:?} rounds={} log_level={}", self.message, self.rounds, self.log_level)
    }
}

fn config() -> Result<&'static Config> {
    static CELL: OnceLock<Config> = OnceLock::new();

    let rounds = match env::var("RING_DEMO_ROUNDS") {
        Ok(v) => v.parse::<usize>().context("RING_DEMO_ROUNDS must be a positive integer")?,
        Err(_) => 3,
    };
    let config = Config {
        message: env::var("RING_DEMO_MESSAGE").unwrap_or_else(|_| "WIFI_CONNECT\r\n".to_owned()),
        rounds,
        log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned()),
    };

    Ok(CELL.get_or_init(|| {
        info!(%config, "initialized config");
        config
    }))
}

/// Stands in for the receive interrupt: pushes one burst of bytes.
fn on_rx_irq(rx: &mut RingBuffer<u8, RX_SIZE, Trace>, burst: &[u8]) {
    for &b in burst {
        rx.write_next(b);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config()?;
    if config.message.len() >= RX_SIZE {
        bail!("message of {} bytes cannot fit a {} slot ring", config.message.len(), RX_SIZE);
    }

    let mut rx = RingBuffer::<u8, RX_SIZE, _>::with_handler(Trace::new("uart-rx"));
    let mut line = Vec::with_capacity(RX_SIZE);

    for round in 0..config.rounds {
        for burst in config.message.as_bytes().chunks(4) {
            on_rx_irq(&mut rx, burst);
            debug!(round, pending = rx.len(), "irq burst");
        }

        loop {
            match rx.try_read() {
                Ok(b'\n') => {
                    let text = String::from_utf8_lossy(&line);
                    info!(round, line = %text.trim_end(), "received line");
                    line.clear();
                }
                Ok(b) => line.push(b),
                Err(_) => break,
            }
        }
    }

    // Flood the ring without a consumer to show the overrun path.
    let flood = config.message.repeat(3);
    on_rx_irq(&mut rx, flood.as_bytes());
    warn!(kept = rx.len(), sent = flood.len(), "flooded receive ring");

    let kept: Vec<u8> = rx.drain().collect();
    info!(kept = %String::from_utf8_lossy(&kept).escape_debug(), "drained after flood");

    Ok(())
}
