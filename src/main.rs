use clap::Parser;

use std::io;

use num_format::{Locale, ToFormattedString};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt, prelude::*};

mod prog_opts;
mod util;

use crate::prog_opts::Args;
use crate::util::index_function::SampleParams;
use crate::util::sweep_function::{SweepRow, demo_sweep};
use crate::util::write_function::write_output;

fn main() -> anyhow::Result<()> {
    // set up the logging.  Here we will take the
    // logging level from the environment variable if
    // it is set.  Otherwise, we'll set the default
    tracing_subscriber::registry()
        // log level to INFO.
        .with(fmt::layer().with_writer(io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let args = Args::parse();

    let (params, rows): (Option<SampleParams>, Vec<SweepRow>) = if args.sweep {
        info!("running the demonstration sweep.");
        (None, demo_sweep())
    } else {
        // the argument group guarantees both values are present here
        let (Some(len), Some(count)) = (args.len, args.count) else {
            anyhow::bail!("either --sweep or both --len and --count must be given");
        };
        let params = SampleParams::builder()
            .len(len)
            .count(count)
            .one_based(args.one_based)
            .build();
        info!(
            "computing {} equidistant indices over a range of length {}.",
            count.to_formatted_string(&Locale::en),
            len.to_formatted_string(&Locale::en)
        );
        let rows = vec![SweepRow {
            len,
            count,
            indices: params.indices(),
        }];
        (Some(params), rows)
    };

    let num_indices: usize = rows.iter().map(|row| row.indices.len()).sum();
    info!(
        "computed {} indices across {} result rows.",
        num_indices.to_formatted_string(&Locale::en),
        rows.len()
    );

    write_output(
        args.output.as_deref(),
        &args.output_format,
        params.as_ref(),
        &rows,
    )?;

    Ok(())
}
