use std::io::{self, Write};

use anyhow::Context;
use design_patterns::{logger, singleton};

fn main() -> anyhow::Result<()> {
    logger::init(false);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    singleton::run_demo(&mut out).context("singleton demo failed")?;
    out.flush()?;
    Ok(())
}
