use std::{
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use log::info;

use prom_htiming::{report::Format, Prom, Simulator};

#[argopt::cmd]
fn main(
    /// Print transitions as a JSON array
    #[opt(long)]
    json: bool,
    /// Timing PROM image
    #[opt(default_value = "tbp24s10_7a.ic52")]
    prom: PathBuf,
) -> Result<()> {
    env_logger::builder()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{:5} {}] {}",
                record.level(),
                record
                    .module_path()
                    .map_or("", |path| path.trim_start_matches("prom_htiming::")),
                record.args()
            )
        })
        .init();

    let data = std::fs::read(&prom).with_context(|| format!("reading {}", prom.display()))?;
    let image = Prom::from_bytes(&data).with_context(|| format!("loading {}", prom.display()))?;
    info!("{}: {} bytes", prom.display(), image.len());

    let format = if json { Format::Json } else { Format::Text };

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    format.write(&mut out, Simulator::new(&image))?;
    out.flush()?;

    Ok(())
}
