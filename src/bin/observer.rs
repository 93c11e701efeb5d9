use std::io::{self, Write};

use anyhow::Context;
use design_patterns::{logger, observer};

fn main() -> anyhow::Result<()> {
    logger::init(false);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    observer::run_demo(&mut out).context("observer demo failed")?;
    out.flush()?;
    Ok(())
}
