use crate::cmd_colsel::utils;
use clap::*;
use colsel::libs::block::retained_by_score;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("blocks")
        .about("Reports contiguous blocks of columns passing a gap score")
        .after_help(
            r###"
Columns with a gap score of at least --min-gapscore are kept; runs of adjacent kept
columns form blocks. Reports the number of blocks and the boundaries of the largest
one (the earliest on ties):

    ## Blocks         3
    ## Left column    0
    ## Right column   2

Boundaries are -1 when no column passes. With --max-blocks, scanning stops early and
the block count is a lower bound.

Notes:
* The input is a gap score report; with --aln it is a FASTA alignment instead
* Columns are 0-based
* Supports both plain text and gzipped (.gz) files
* Reads from stdin if input file is 'stdin'

Examples:
1. Blocks of gap-free columns:
   colsel blocks tests/colsel/small.sgc

2. Tolerate up to 25% gaps, straight from the alignment:
   colsel blocks tests/colsel/small.fa --aln --min-gapscore 0.75

3. List every block:
   colsel blocks tests/colsel/small.sgc --list

"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .num_args(1)
                .index(1)
                .help("Gap score report to process"),
        )
        .arg(
            Arg::new("aln")
                .long("aln")
                .action(ArgAction::SetTrue)
                .help("The input is a FASTA alignment"),
        )
        .arg(
            Arg::new("field")
                .long("field")
                .num_args(1)
                .default_value("3")
                .value_parser(value_parser!(usize))
                .help("1-based field of the gap score"),
        )
        .arg(
            Arg::new("min_gapscore")
                .long("min-gapscore")
                .num_args(1)
                .default_value("1")
                .value_parser(value_parser!(f64))
                .help("Minimum gap score of a kept column"),
        )
        .arg(utils::max_blocks_arg())
        .arg(utils::window_arg())
        .arg(utils::gap_arg())
        .arg(
            Arg::new("list")
                .long("list")
                .action(ArgAction::SetTrue)
                .help("Also list each block as start, end and size"),
        )
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
    let min_gapscore = *args.get_one::<f64>("min_gapscore").unwrap();
    let max_blocks = *args.get_one::<usize>("max_blocks").unwrap();
    let is_list = args.get_flag("list");

    //----------------------------
    // Operating
    //----------------------------
    let scores = if args.get_flag("aln") {
        let aln = colsel::read_alignment(infile)?;
        aln.gap_scores(
            utils::symbol(args, "gap")?,
            *args.get_one::<usize>("window").unwrap(),
        )?
    } else {
        colsel::read_scores(infile, *args.get_one::<usize>("field").unwrap())?
    };

    let selection = retained_by_score(&scores, min_gapscore);
    let report = colsel::find_blocks(&selection, max_blocks);
    if report.truncated {
        log::warn!(
            "{}: more than {} blocks; the count is a lower bound",
            infile,
            max_blocks
        );
    }

    //----------------------------
    // Output
    //----------------------------
    writer.write_all(report.boundaries().as_ref())?;
    if is_list {
        for block in &report.blocks {
            writer.write_all(
                format!("{}\t{}\t{}\n", block.start, block.end, block.len()).as_ref(),
            )?;
        }
    }

    Ok(())
}
