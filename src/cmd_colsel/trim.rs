use crate::cmd_colsel::utils;
use clap::*;
use colsel::libs::select::run_selection;
use colsel::ColumnSelection;
use std::io::Read;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    let cmd = Command::new("trim")
        .about("Writes the alignment with the selected columns only")
        .after_help(
            r###"
Removes columns from a FASTA alignment.

The columns to remove are taken from, in order of precedence:
* --cols, a `{ i,j,k }` directive or a comma separated list
* --cols-file, a file holding such a list, e.g. the output of `select --directive`
* the column selector itself, with the same options as `select`

--complementary keeps the removed columns and drops the rest.

Notes:
* Columns are 0-based
* Supports both plain text and gzipped (.gz) files
* Reads from stdin if input file is 'stdin'

Examples:
1. Remove explicit columns:
   colsel trim tests/colsel/small.fa --cols "{ 2,6,7 }"

2. Trim by gap score, keeping at least 4 columns:
   colsel trim tests/colsel/small.fa --min-columns 4

3. Keep only what the selector would remove:
   colsel trim tests/colsel/small.fa --min-columns 4 --complementary

"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .num_args(1)
                .index(1)
                .help("Input FASTA alignment"),
        )
        .arg(
            Arg::new("cols")
                .long("cols")
                .num_args(1)
                .help("Columns to remove"),
        )
        .arg(
            Arg::new("cols_file")
                .long("cols-file")
                .num_args(1)
                .conflicts_with("cols")
                .help("File with the columns to remove"),
        )
        .arg(
            Arg::new("complementary")
                .long("complementary")
                .action(ArgAction::SetTrue)
                .help("Keep the removed columns instead"),
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
    let infile = args.get_one::<String>("infile").unwrap();
    let is_complementary = args.get_flag("complementary");

    let aln = colsel::read_alignment(infile)?;

    //----------------------------
    // Operating
    //----------------------------
    let removed = if let Some(cols) = args.get_one::<String>("cols") {
        colsel::parse_column_list(cols)?
    } else if let Some(file) = args.get_one::<String>("cols_file") {
        let mut text = String::new();
        colsel::reader(file)?.read_to_string(&mut text)?;
        colsel::parse_column_list(&text)?
    } else {
        let scores = utils::load_scores(args, Some(&aln))?;
        if scores.len() != aln.len() {
            anyhow::bail!(
                "{} scores for an alignment of {} columns",
                scores.len(),
                aln.len()
            );
        }
        let (_, selection) = run_selection(&scores, &utils::budget(args))?;
        selection.removed()
    };

    if let Some(&last) = removed.last() {
        if last >= aln.len() {
            anyhow::bail!(
                "column {} is outside an alignment of {} columns",
                last,
                aln.len()
            );
        }
    }

    let mut selection = ColumnSelection::from_removed(aln.len(), &removed);
    if is_complementary {
        selection = selection.complement();
    }
    log::info!(
        "{}: keeping {} of {} columns",
        infile,
        selection.num_retained(),
        aln.len()
    );

    //----------------------------
    // Output
    //----------------------------
    let trimmed = aln.apply_selection(&selection)?;
    colsel::write_alignment(&mut writer, &trimmed, 0, false)?;

    Ok(())
}
