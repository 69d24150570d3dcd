extern crate clap;
use clap::*;

mod cmd_colsel;

fn main() -> anyhow::Result<()> {
    let app = Command::new("colsel")
        .version(crate_version!())
        .author(crate_authors!())
        .about("`colsel` - Column selection for multiple sequence alignments")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)"),
        )
        .subcommand(cmd_colsel::blocks::make_subcommand())
        .subcommand(cmd_colsel::codon::make_subcommand())
        .subcommand(cmd_colsel::gapscore::make_subcommand())
        .subcommand(cmd_colsel::select::make_subcommand())
        .subcommand(cmd_colsel::stat::make_subcommand())
        .subcommand(cmd_colsel::trim::make_subcommand())
        .after_help(
            r###"Subcommand groups:

* Scores:
    * gapscore - Per-column gap scores of an alignment
    * stat     - Alignment statistics: gaps, identity, blocks

* Selection:
    * select - Rank columns and choose which to remove under a budget
    * blocks - Contiguous blocks of columns passing a gap score

* Trimming:
    * trim  - Write the alignment with the selected columns only
    * codon - Remove codons of indeterminate nucleotides

"###,
        );

    let matches = app.get_matches();

    let level = match matches.get_count("verbose") {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    // Check which subcommand the user ran...
    match matches.subcommand() {
        Some(("blocks", sub_matches)) => cmd_colsel::blocks::execute(sub_matches),
        Some(("codon", sub_matches)) => cmd_colsel::codon::execute(sub_matches),
        Some(("gapscore", sub_matches)) => cmd_colsel::gapscore::execute(sub_matches),
        Some(("select", sub_matches)) => cmd_colsel::select::execute(sub_matches),
        Some(("stat", sub_matches)) => cmd_colsel::stat::execute(sub_matches),
        Some(("trim", sub_matches)) => cmd_colsel::trim::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}
