use crate::cmd_colsel::utils;
use clap::*;
use colsel::libs::report::SelectionReport;
use colsel::libs::select::run_selection;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    let cmd = Command::new("select")
        .about("Chooses the columns to remove under a conservation budget")
        .after_help(
            r###"
Ranks alignment columns by score and removes the lowest-scoring ones until the budget is met.

Scores:
* gaps       - gap score per column, from --gaps or computed from --aln
* similarity - similarity score per column, from --similarity
* combined   - product of the two; both vectors must have the same length

Budget:
* keep floor(min-percentage * length) columns if that reaches --min-columns
* otherwise keep min(--min-columns, length) columns

Ties keep the original column order. Columns are 0-based.

Notes:
* Score reports may be per-column tables (column number first, comments with `#`)
  or bare lists with one score per line
* Supports both plain text and gzipped (.gz) files

Examples:
1. Gap-based selection from an alignment:
   colsel select --aln tests/colsel/small.fa --min-columns 4

2. Combined scores from precomputed reports:
   colsel select -m combined --gaps tests/colsel/small.sgc --similarity tests/colsel/small.ssc

3. Print the removed columns as a directive:
   colsel select --aln tests/colsel/small.fa --min-columns 4 --directive

"###,
        )
        .arg(
            Arg::new("aln")
                .long("aln")
                .num_args(1)
                .help("FASTA alignment to compute gap scores from"),
        )
        .arg(utils::max_blocks_arg())
        .arg(
            Arg::new("directive")
                .long("directive")
                .action(ArgAction::SetTrue)
                .help("Only print the removed columns as `{ i,j,k }`"),
        )
        .arg(
            Arg::new("outfile")
                .long("outfile")
                .short('o')
                .num_args(1)
                .default_value("stdout")
                .help("Output filename. [stdout] for screen"),
        );

    utils::selector_args(cmd)
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    //----------------------------
    // Args
    //----------------------------
    let mut writer = intspan::writer(args.get_one::<String>("outfile").unwrap());
    let is_directive = args.get_flag("directive");
    let max_blocks = *args.get_one::<usize>("max_blocks").unwrap();
    let budget = utils::budget(args);

    let aln = match args.get_one::<String>("aln") {
        Some(file) => Some(colsel::read_alignment(file)?),
        None => None,
    };

    //----------------------------
    // Operating
    //----------------------------
    let scores = utils::load_scores(args, aln.as_ref())?;
    if let Some(aln) = &aln {
        if aln.len() != scores.len() {
            anyhow::bail!(
                "{} scores for an alignment of {} columns",
                scores.len(),
                aln.len()
            );
        }
    }

    let (resolved, selection) = run_selection(&scores, &budget)?;
    let report = SelectionReport::new(resolved, &selection, max_blocks);
    log::info!(
        "Removed {} of {} columns, {} blocks left",
        report.columns_removed.len(),
        resolved.alignment_length,
        report.number_of_blocks()
    );

    //----------------------------
    // Output
    //----------------------------
    if is_directive {
        writer.write_all(format!("{}\n", report.directive()).as_ref())?;
    } else {
        writer.write_all(format!("{}\n", SelectionReport::header()).as_ref())?;
        writer.write_all(format!("{}\n", report.to_tsv()).as_ref())?;
    }

    Ok(())
}
