mod log;
mod log_id;
mod log_source;
mod opts;
mod output;

use log_id::guess_match_id;
use log_source::LogSource;
use opts::Options;
use output::Output;

use std::io::prelude::*;

use anyhow::{bail, Context, Result};
use clap::Parser;
use paifu::{DerivedMatch, UNKNOWN_MATCH_ID};

fn main() -> Result<()> {
    let Options {
        inputs,
        data_dir,
        output_opts,
        no_fallback_id,
        verbose,
    } = Options::parse();
    log::set_verbose(verbose);

    let sources = LogSource::collect(&inputs, data_dir.as_deref())?;
    verbose!("{} paifu log(s) to read", sources.len());

    let pretty = output_opts.pretty && sources.len() == 1;

    let mut out = Output::new(output_opts.out_file);
    let mut failed = 0;
    for source in &sources {
        let derived = match derive(source, !no_fallback_id) {
            Ok(v) => v,
            Err(err) => {
                log!("skipping {source}: {err:#}");
                failed += 1;
                continue;
            }
        };

        let w = out.writer()?;
        if pretty {
            serde_json::to_writer_pretty(&mut *w, &derived)
        } else {
            serde_json::to_writer(&mut *w, &derived)
        }
        .with_context(|| format!("failed to write derived match of {source}"))?;
        writeln!(w).context("failed to write output")?;
    }
    out.finish()?;

    if failed > 0 {
        bail!("{failed} of {} paifu log(s) failed", sources.len());
    }
    verbose!("done");
    Ok(())
}

fn derive(source: &LogSource, fallback_id: bool) -> Result<DerivedMatch> {
    verbose!("reading {source}...");
    let reader = source.open()?;
    let mut derived =
        DerivedMatch::from_json_reader(reader).with_context(|| format!("failed to parse {source}"))?;

    if fallback_id && derived.match_id == UNKNOWN_MATCH_ID {
        if let Some(id) = source.path().and_then(guess_match_id) {
            verbose!("{source}: no match ID in log, guessed {id} from the file name");
            derived.match_id = id;
        }
    }

    verbose!(
        "{source}: {} round(s), final scores {}",
        derived.rounds.len(),
        if derived.final_scores.is_some() { "resolved" } else { "unknown" },
    );
    for note in &derived.parse_notes {
        verbose!("{source}: {note}");
    }

    Ok(derived)
}
