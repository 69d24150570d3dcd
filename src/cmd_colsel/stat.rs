use crate::cmd_colsel::utils;
use clap::*;
use colsel::libs::block::retained_by_score;
use rayon::prelude::*;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("stat")
        .about("Statistics of alignments")
        .after_help(
            r###"
Summarizes each alignment in one line:

* columns, sequences
* blocks, left, right   - blocks of columns with gap score >= --min-gapscore,
                          and the boundaries of the largest one
* avg_gaps              - gaps over all cells
* avg_identity          - mean pairwise identity
* all_gaps_indets       - some sequence holds only gaps and indeterminations

-1 marks a statistic that cannot be computed.

Notes:
* Supports both plain text and gzipped (.gz) files
* Input files are processed in parallel with --parallel; output keeps input order

Examples:
1. Statistics of alignments:
   colsel stat tests/colsel/small.fa tests/colsel/codon.fa

2. Amino acid alignments:
   colsel stat tests/colsel/small.fa --indet X

"###,
        )
        .arg(
            Arg::new("infiles")
                .required(true)
                .num_args(1..)
                .index(1)
                .help("Input FASTA alignment(s) to process"),
        )
        .arg(
            Arg::new("min_gapscore")
                .long("min-gapscore")
                .num_args(1)
                .default_value("1")
                .value_parser(value_parser!(f64))
                .help("Minimum gap score of a column inside a block"),
        )
        .arg(utils::max_blocks_arg())
        .arg(utils::gap_arg())
        .arg(utils::indet_arg())
        .arg(
            Arg::new("parallel")
                .long("parallel")
                .short('p')
                .num_args(1)
                .default_value("1")
                .value_parser(value_parser!(usize))
                .help("Number of threads"),
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
    let min_gapscore = *args.get_one::<f64>("min_gapscore").unwrap();
    let max_blocks = *args.get_one::<usize>("max_blocks").unwrap();
    let gap = utils::symbol(args, "gap")?;
    let indet = utils::symbol(args, "indet")?.to_ascii_uppercase();
    let parallel = *args.get_one::<usize>("parallel").unwrap();

    let infiles: Vec<&String> = args.get_many::<String>("infiles").unwrap().collect();

    // Set the number of threads for rayon
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(parallel)
        .build()?;

    //----------------------------
    // Operating
    //----------------------------
    let lines: Vec<anyhow::Result<String>> = pool.install(|| {
        infiles
            .par_iter()
            .map(|infile| stat_line(infile, min_gapscore, max_blocks, gap, indet))
            .collect()
    });

    //----------------------------
    // Output
    //----------------------------
    let field_names = vec![
        "file",
        "columns",
        "sequences",
        "blocks",
        "left",
        "right",
        "avg_gaps",
        "avg_identity",
        "all_gaps_indets",
    ];
    writer.write_all(format!("{}\n", field_names.join("\t")).as_ref())?;
    for line in lines {
        writer.write_all(format!("{}\n", line?).as_ref())?;
    }

    Ok(())
}

fn stat_line(
    infile: &str,
    min_gapscore: f64,
    max_blocks: usize,
    gap: u8,
    indet: u8,
) -> anyhow::Result<String> {
    let aln = colsel::read_alignment(infile)?;

    let report = if aln.len() > 0 {
        let scores = aln.gap_scores(gap, 0)?;
        colsel::find_blocks(&retained_by_score(&scores, min_gapscore), max_blocks)
    } else {
        colsel::BlockReport::default()
    };

    Ok(format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{:.4}\t{:.4}\t{}",
        infile,
        aln.len(),
        aln.num_seqs(),
        report.number_of_blocks(),
        report.left_column(),
        report.right_column(),
        aln.average_gaps(gap),
        aln.average_identity(gap, indet),
        aln.has_all_gaps_indets(gap, indet),
    ))
}
