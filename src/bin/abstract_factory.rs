use std::io::{self, Write};

use anyhow::Context;
use design_patterns::{abstract_factory, logger};

fn main() -> anyhow::Result<()> {
    logger::init(false);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    abstract_factory::run_demo(&mut out).context("abstract factory demo failed")?;
    out.flush()?;
    Ok(())
}
