use crate::cmd_colsel::utils;
use clap::*;
use colsel::libs::codon;
use itertools::Itertools;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("codon")
        .about("Removes codons made of indeterminate nucleotides")
        .after_help(
            r###"
Scans a codon alignment triplet by triplet. A codon is removed when each of its three
columns, ignoring gaps, holds only the indetermination symbol. A column of gaps only
does not count as indeterminate.

The alignment length must be a multiple of 3.

Notes:
* --complementary keeps only the indeterminate codons
* Sequences are wrapped every --line symbols, 0 for a single line
* Headers are cut at the first whitespace unless --keep-header is set
* The 0-based start columns of the codons found are logged with -v
* Supports both plain text and gzipped (.gz) files
* Reads from stdin if input file is 'stdin'

Examples:
1. Clean a back-translated alignment:
   colsel codon tests/colsel/codon.fa

2. Show what would be removed:
   colsel codon tests/colsel/codon.fa --complementary

"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .num_args(1)
                .index(1)
                .help("Input codon alignment"),
        )
        .arg(utils::gap_arg())
        .arg(utils::indet_arg())
        .arg(
            Arg::new("complementary")
                .long("complementary")
                .action(ArgAction::SetTrue)
                .help("Keep the indeterminate codons instead"),
        )
        .arg(
            Arg::new("line")
                .long("line")
                .short('l')
                .num_args(1)
                .value_parser(value_parser!(usize))
                .default_value("80")
                .help("Sequence line length"),
        )
        .arg(
            Arg::new("keep_header")
                .long("keep-header")
                .action(ArgAction::SetTrue)
                .help("Keep the full header line"),
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
    let gap = utils::symbol(args, "gap")?;
    let indet = utils::symbol(args, "indet")?;
    let is_complementary = args.get_flag("complementary");
    let line_width = *args.get_one::<usize>("line").unwrap();
    let is_keep_header = args.get_flag("keep_header");

    //----------------------------
    // Operating
    //----------------------------
    let aln = colsel::read_alignment(infile)?;
    let codons = codon::indet_codons(&aln, gap, indet)?;
    if !codons.is_empty() {
        log::info!("{}\t{}", infile, codons.iter().join(","));
    }

    let selection = codon::codon_selection(aln.len(), &codons, is_complementary);

    //----------------------------
    // Output
    //----------------------------
    let trimmed = aln.apply_selection(&selection)?;
    colsel::write_alignment(&mut writer, &trimmed, line_width, is_keep_header)?;

    Ok(())
}
