use crate::libs::alignment::Alignment;
use crate::libs::score::parse_report;
use anyhow::Context;
use itertools::Itertools;
use std::io::{BufRead, BufReader, Write};

/// Opens a file for reading, transparently decompressing `.gz`. `stdin` reads from
/// standard input.
///
/// ```
/// use std::io::BufRead;
/// let reader = colsel::reader("tests/colsel/small.fa").unwrap();
/// assert_eq!(reader.lines().count(), 8);
/// ```
pub fn reader(input: &str) -> anyhow::Result<Box<dyn BufRead>> {
    let reader: Box<dyn BufRead> = if input == "stdin" {
        Box::new(BufReader::new(std::io::stdin()))
    } else {
        let path = std::path::Path::new(input);
        let file = std::fs::File::open(path)
            .with_context(|| format!("could not open {}", path.display()))?;

        if path.extension() == Some(std::ffi::OsStr::new("gz")) {
            Box::new(BufReader::new(flate2::read::MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        }
    };

    Ok(reader)
}

/// Reads a FASTA alignment. Ids are the first word of each header.
pub fn read_alignment(input: &str) -> anyhow::Result<Alignment> {
    let mut fa_in = noodles_fasta::io::Reader::new(reader(input)?);

    let mut aln = Alignment::new();
    for result in fa_in.records() {
        let record = result.with_context(|| format!("malformed FASTA in {}", input))?;
        let name = String::from_utf8(record.name().into())?;
        aln.push(&name, record.sequence().as_ref())
            .with_context(|| format!("reading {}", input))?;
        if let Some(desc) = record.description() {
            aln.set_description(&name, String::from_utf8_lossy(desc).trim())?;
        }
    }
    if aln.is_empty() {
        anyhow::bail!("no sequences in {}", input);
    }
    log::info!(
        "{}: {} sequences, {} columns",
        input,
        aln.num_seqs(),
        aln.len()
    );

    Ok(aln)
}

/// Writes the alignment as FASTA.
///
/// Sequences are wrapped every `line_width` symbols; `0` keeps each on one line.
/// With `keep_header`, descriptions follow the ids.
pub fn write_alignment(
    writer: &mut dyn Write,
    aln: &Alignment,
    line_width: usize,
    keep_header: bool,
) -> anyhow::Result<()> {
    for (name, seq) in aln.iter() {
        match aln.description(name) {
            Some(desc) if keep_header => writeln!(writer, ">{} {}", name, desc)?,
            _ => writeln!(writer, ">{}", name)?,
        }

        let seq = std::str::from_utf8(seq)?;
        if line_width == 0 {
            writeln!(writer, "{}", seq)?;
        } else {
            let mut idx = 0;
            while idx < seq.len() {
                let next_idx = (idx + line_width).min(seq.len());
                writeln!(writer, "{}", &seq[idx..next_idx])?;
                idx = next_idx;
            }
        }
    }
    Ok(())
}

/// Reads per-column scores from a report file, see [`parse_report`].
pub fn read_scores(input: &str, field: usize) -> anyhow::Result<Vec<f64>> {
    let scores =
        parse_report(reader(input)?, field).with_context(|| format!("reading {}", input))?;
    if scores.is_empty() {
        anyhow::bail!("no scores in {}", input);
    }
    log::info!("{}: {} column scores", input, scores.len());

    Ok(scores)
}

/// Parses a column list, either a `{ 1,2,3 }` directive or plain comma/space separated
/// numbers.
///
/// ```
/// let cols = colsel::parse_column_list("{ 7,1, 3 }").unwrap();
/// assert_eq!(cols, vec![1, 3, 7]);
/// assert!(colsel::parse_column_list("{ }").unwrap().is_empty());
/// ```
pub fn parse_column_list(text: &str) -> anyhow::Result<Vec<usize>> {
    let cols: Vec<usize> = text
        .split(|c: char| c == ',' || c == '{' || c == '}' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .with_context(|| format!("invalid column number '{}'", s))
        })
        .collect::<anyhow::Result<_>>()?;

    Ok(cols.into_iter().sorted().dedup().collect())
}

/// The `{ i,j,k }` form of a column list.
pub fn column_directive(cols: &[usize]) -> String {
    format!("{{ {} }}", cols.iter().join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn directive_round() {
        assert_eq!(column_directive(&[0, 3, 5]), "{ 0,3,5 }");
        assert_eq!(column_directive(&[]), "{  }");
        assert_eq!(parse_column_list("0 3\n5").unwrap(), vec![0, 3, 5]);
        assert!(parse_column_list("1,x").is_err());
    }

    #[test]
    fn alignment_from_gz() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("aln.fa.gz");
        {
            let file = std::fs::File::create(&path).unwrap();
            let mut encoder =
                flate2::write::GzEncoder::new(file, flate2::Compression::default());
            write!(encoder, ">a desc\nAC-T\n>b\nACGT\n").unwrap();
            encoder.finish().unwrap();
        }
        let aln = read_alignment(path.to_str().unwrap()).unwrap();
        assert_eq!(aln.names(), vec!["a", "b"]);
        assert_eq!(aln.seq("a").unwrap(), b"AC-T");

        let mut out: Vec<u8> = vec![];
        write_alignment(&mut out, &aln, 0, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), ">a\nAC-T\n>b\nACGT\n");

        let mut out: Vec<u8> = vec![];
        write_alignment(&mut out, &aln, 3, true).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            ">a desc\nAC-\nT\n>b\nACG\nT\n"
        );
    }

    #[test]
    fn unaligned_input_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.fa");
        std::fs::write(&path, ">a\nACGT\n>b\nACG\n").unwrap();
        assert!(read_alignment(path.to_str().unwrap()).is_err());
        assert!(read_alignment("tests/colsel/not_there.fa").is_err());
    }
}
