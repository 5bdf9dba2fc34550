use clap::Parser;
use explorer_app::platform::{self, Args};

fn main() -> anyhow::Result<()> {
    platform::run_app(Args::parse())
}
