use std::io::{self, Write};

use anyhow::Context;
use design_patterns::{decorator, logger};

fn main() -> anyhow::Result<()> {
    logger::init(false);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    decorator::run_demo(&mut out).context("decorator demo failed")?;
    out.flush()?;
    Ok(())
}
