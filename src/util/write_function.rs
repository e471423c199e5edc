use std::{
    fs::OpenOptions,
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use itertools::Itertools;
use serde_json::json;

use crate::prog_opts::OutputFormat;
use crate::util::index_function::SampleParams;
use crate::util::sweep_function::SweepRow;

/// Text rendering of one sweep line, one row per generated pair.
pub fn render_row(row: &SweepRow) -> String {
    format!("for n: {}, m {}: {:?}", row.len, row.count, row.indices)
}

/// Writes the computed rows to `output`, or to stdout when no path
/// was given.
pub fn write_output(
    output: Option<&Path>,
    format: &OutputFormat,
    params: Option<&SampleParams>,
    rows: &[SweepRow],
) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)
                .with_context(|| format!("couldn't create output file {}", path.display()))?;
            write_rows(BufWriter::new(file), format, params, rows)
        }
        None => write_rows(io::stdout().lock(), format, params, rows),
    }
}

/// Renders `rows` into `writer`. A `params` value marks a single
/// computation; its absence marks the demonstration sweep, which uses
/// the per-line `for n: ..` text form.
fn write_rows<W: Write>(
    mut writer: W,
    format: &OutputFormat,
    params: Option<&SampleParams>,
    rows: &[SweepRow],
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            if params.is_some() {
                for row in rows {
                    writeln!(writer, "{:?}", row.indices)?;
                }
            } else {
                for row in rows {
                    writeln!(writer, "{}", render_row(row))?;
                }
            }
        }
        OutputFormat::Tsv => {
            let mut tsv = csv::WriterBuilder::new()
                .delimiter(b'\t')
                .from_writer(writer);
            tsv.write_record(["len", "count", "indices"])?;
            for row in rows {
                tsv.write_record([
                    row.len.to_string(),
                    row.count.to_string(),
                    row.indices.iter().join(","),
                ])?;
            }
            tsv.flush()?;
        }
        OutputFormat::Json => {
            let info = match params {
                Some(p) => json!({ "mode": "single", "params": p }),
                None => json!({ "mode": "sweep", "grid_points": rows.len() }),
            };
            let payload = json!({
                "info": info,
                "rows": rows,
            });
            serde_json::to_writer_pretty(&mut writer, &payload)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_row() -> SweepRow {
        SweepRow {
            len: 4,
            count: 4,
            indices: vec![0, 1, 2, 3],
        }
    }

    #[test]
    fn text_row_matches_driver_format() {
        assert_eq!(render_row(&demo_row()), "for n: 4, m 4: [0, 1, 2, 3]");
        let empty = SweepRow {
            len: 0,
            count: 0,
            indices: vec![],
        };
        assert_eq!(render_row(&empty), "for n: 0, m 0: []");
    }

    #[test]
    fn single_text_output_is_just_the_indices() {
        let params = SampleParams::builder().len(4).count(4).build();
        let mut buf: Vec<u8> = Vec::new();
        write_rows(&mut buf, &OutputFormat::Text, Some(&params), &[demo_row()]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[0, 1, 2, 3]\n");
    }

    #[test]
    fn tsv_output_joins_indices() {
        let mut buf: Vec<u8> = Vec::new();
        write_rows(&mut buf, &OutputFormat::Tsv, None, &[demo_row()]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("len\tcount\tindices"));
        assert_eq!(lines.next(), Some("4\t4\t0,1,2,3"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn json_output_carries_info_block() {
        let mut buf: Vec<u8> = Vec::new();
        write_rows(&mut buf, &OutputFormat::Json, None, &[demo_row()]).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["info"]["mode"], "sweep");
        assert_eq!(value["info"]["grid_points"], 1);
        assert_eq!(value["rows"][0]["len"], 4);
        assert_eq!(value["rows"][0]["indices"], json!([0, 1, 2, 3]));

        let params = SampleParams::builder()
            .len(4)
            .count(4)
            .one_based(true)
            .build();
        let mut buf: Vec<u8> = Vec::new();
        write_rows(&mut buf, &OutputFormat::Json, Some(&params), &[demo_row()]).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["info"]["mode"], "single");
        assert_eq!(value["info"]["params"]["one_based"], true);
    }
}
