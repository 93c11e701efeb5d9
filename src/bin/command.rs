use std::io::{self, Write};

use anyhow::Context;
use design_patterns::{command, logger};

fn main() -> anyhow::Result<()> {
    logger::init(false);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    command::run_demo(&mut out, command::DEFAULT_SLOTS).context("command demo failed")?;
    out.flush()?;
    Ok(())
}
