use clap::{ArgAction, Parser};

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "vibecheck-api")]
#[command(about = "Fortunes, jokes, moods and a rate-limited smash counter over JSON")]
pub struct Args {
    // Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    // Port to run the server on
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    // Minimum gap between two accepted smashes from one client
    #[arg(long, default_value_t = 1000)]
    pub cooldown_ms: u64,

    // Key clients by the first X-Forwarded-For entry when present.
    // The header is client-supplied, turn this off unless a proxy sets it.
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub trust_forwarded_for: bool,

    // Seconds between cooldown table sweeps, 0 disables sweeping
    #[arg(long, default_value_t = 60)]
    pub sweep_interval: u64,
}

impl Args {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
