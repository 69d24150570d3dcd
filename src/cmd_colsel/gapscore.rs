use crate::cmd_colsel::utils;
use clap::*;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("gapscore")
        .about("Per-column gap scores of an alignment")
        .after_help(
            r###"
Writes one line per column: the 0-based column number, the percentage of gaps and the
gap score (1 - gaps / sequences). The output can be fed back to `select --gaps` and
`blocks`.

With --window, gap counts are averaged over 2 * window + 1 columns, mirrored at the
alignment ends. The half window may not exceed a quarter of the alignment length.

Notes:
* Supports both plain text and gzipped (.gz) files
* Reads from stdin if input file is 'stdin'

Examples:
1. Gap scores:
   colsel gapscore tests/colsel/small.fa

2. Smoothed over 3 columns:
   colsel gapscore tests/colsel/small.fa -w 1

"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .num_args(1)
                .index(1)
                .help("Input FASTA alignment"),
        )
        .arg(utils::window_arg())
        .arg(utils::gap_arg())
        .arg(
            Arg::new("outfile")
                .long("outfile")
                .short('o')
                .num_args(1)
                .default_value("stdout")
                .help("Output filename. [stdout] for screen"),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    //----------------------------
    // Args
    //----------------------------
    let mut writer = intspan::writer(args.get_one::<String>("outfile").unwrap());
    let infile = args.get_one::<String>("infile").unwrap();
    let window = *args.get_one::<usize>("window").unwrap();
    let gap = utils::symbol(args, "gap")?;

    //----------------------------
    // Operating
    //----------------------------
    let aln = colsel::read_alignment(infile)?;
    let nseq = aln.num_seqs() as f64;
    let gaps = aln.gaps_window(gap, window)?;

    //----------------------------
    // Output
    //----------------------------
    writer.write_all("#column\tgap_pct\tgap_score\n".as_ref())?;
    for (i, g) in gaps.iter().enumerate() {
        let ratio = *g as f64 / nseq;
        writer.write_all(
            format!("{}\t{:.4}\t{:.4}\n", i, ratio * 100.0, 1.0 - ratio).as_ref(),
        )?;
    }

    Ok(())
}
