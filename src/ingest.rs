//! Ingestion driver: file in, JSON Lines out.
//!
//! Thin glue around the core pipeline. Reads the export line by line,
//! verifies the header once, streams every subsequent row through
//! [`rows::parse_row()`], and writes each record as one JSON object per
//! line. Rejected rows are counted and reported, never escalated.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result, anyhow, bail};
use log::{debug, info};

use crate::{
    cli::IngestArgs,
    mapping,
    rows,
    schema::{INTERNAL_HEADERS, WALLET_HEADERS, verify_header},
};

pub fn execute(args: &IngestArgs) -> Result<()> {
    // Startup configuration check: the two header constants must stay
    // positionally aligned. A mismatch is a defect in this crate, not in
    // the data, and stops the pipeline before the file is touched.
    let column_map = mapping::build_mapping(&WALLET_HEADERS, &INTERNAL_HEADERS)
        .context("Building column name mapping")?;
    debug!("Column mapping covers {} column(s)", column_map.len());

    let file = File::open(&args.input)
        .with_context(|| format!("Opening export file {:?}", args.input))?;
    let mut reader = BufReader::new(file);

    let mut header_line = String::new();
    let bytes_read = reader
        .read_line(&mut header_line)
        .with_context(|| format!("Reading header line from {:?}", args.input))?;
    if bytes_read == 0 {
        bail!("Export file {:?} is empty", args.input);
    }
    verify_header(&header_line, &WALLET_HEADERS)
        .map_err(|err| anyhow!("Header of {:?} does not match the expected schema: {err}", args.input))?;

    let mut writer = open_output(args.output.as_deref())?;
    let mut emitted = 0usize;
    let mut skipped = 0usize;

    for (line_idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Reading row {}", line_idx + 2))?;
        match rows::parse_row(&line) {
            Some(record) => {
                serde_json::to_writer(&mut writer, &record)
                    .with_context(|| format!("Serializing row {}", line_idx + 2))?;
                writer.write_all(b"\n")?;
                emitted += 1;
            }
            None => {
                debug!("Skipping malformed or blank row at line {}", line_idx + 2);
                skipped += 1;
            }
        }
        if args.limit.is_some_and(|limit| emitted >= limit) {
            debug!("Row limit reached after {emitted} record(s)");
            break;
        }
    }
    writer.flush()?;

    info!(
        "Ingested {:?}: {} record(s) emitted, {} row(s) skipped",
        args.input, emitted, skipped
    );
    Ok(())
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Creating output file {path:?}"))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(std::io::stdout().lock()))),
    }
}
