use clap::*;
use colsel::libs::score::{scores_for_mode, ScoreMode};
use colsel::{Alignment, Budget};

// A single ASCII symbol supplied on the command line
pub fn symbol(args: &ArgMatches, id: &str) -> anyhow::Result<u8> {
    let s = args.get_one::<String>(id).unwrap();
    match s.as_bytes() {
        [c] if c.is_ascii() => Ok(*c),
        _ => anyhow::bail!("--{} expects a single ASCII character, got '{}'", id, s),
    }
}

pub fn gap_arg() -> Arg {
    Arg::new("gap")
        .long("gap")
        .num_args(1)
        .default_value("-")
        .help("Gap symbol")
}

pub fn indet_arg() -> Arg {
    Arg::new("indet")
        .long("indet")
        .num_args(1)
        .default_value("N")
        .help("Indetermination symbol, N for nucleotides, X for amino acids")
}

pub fn max_blocks_arg() -> Arg {
    Arg::new("max_blocks")
        .long("max-blocks")
        .num_args(1)
        .default_value("10000")
        .value_parser(value_parser!(usize))
        .help("Stop scanning after this many blocks. 0 for no limit")
}

pub fn window_arg() -> Arg {
    Arg::new("window")
        .long("window")
        .short('w')
        .num_args(1)
        .default_value("0")
        .value_parser(value_parser!(usize))
        .help("Half window for averaging gap counts of neighbouring columns")
}

// Score sources and the retention budget
pub fn selector_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("mode")
            .long("mode")
            .short('m')
            .num_args(1)
            .default_value("gaps")
            .value_parser(["gaps", "similarity", "combined"])
            .help("Which score ranks the columns"),
    )
    .arg(
        Arg::new("gaps")
            .long("gaps")
            .num_args(1)
            .help("Gap score report"),
    )
    .arg(
        Arg::new("similarity")
            .long("similarity")
            .num_args(1)
            .help("Similarity score report"),
    )
    .arg(
        Arg::new("gap_field")
            .long("gap-field")
            .num_args(1)
            .default_value("3")
            .value_parser(value_parser!(usize))
            .help("1-based field of the gap score in --gaps"),
    )
    .arg(
        Arg::new("sim_field")
            .long("sim-field")
            .num_args(1)
            .default_value("2")
            .value_parser(value_parser!(usize))
            .help("1-based field of the similarity score in --similarity"),
    )
    .arg(
        Arg::new("min_columns")
            .long("min-columns")
            .num_args(1)
            .default_value("200")
            .value_parser(value_parser!(usize))
            .help("Minimum number of columns to keep"),
    )
    .arg(
        Arg::new("min_percentage")
            .long("min-percentage")
            .num_args(1)
            .default_value("0.4")
            .value_parser(value_parser!(f64))
            .help("Minimum fraction of columns to keep"),
    )
    .arg(window_arg())
    .arg(gap_arg())
}

pub fn budget(args: &ArgMatches) -> Budget {
    Budget::new(
        *args.get_one::<usize>("min_columns").unwrap(),
        *args.get_one::<f64>("min_percentage").unwrap(),
    )
}

pub fn mode(args: &ArgMatches) -> anyhow::Result<ScoreMode> {
    Ok(ScoreMode::from_name(args.get_one::<String>("mode").unwrap())?)
}

// Gap scores come from --gaps, or are computed from the alignment when there is one
pub fn load_scores(args: &ArgMatches, aln: Option<&Alignment>) -> anyhow::Result<Vec<f64>> {
    let mode = mode(args)?;

    let gaps = if mode.needs_gaps() {
        if let Some(file) = args.get_one::<String>("gaps") {
            Some(colsel::read_scores(
                file,
                *args.get_one::<usize>("gap_field").unwrap(),
            )?)
        } else if let Some(aln) = aln {
            let window = *args.get_one::<usize>("window").unwrap();
            Some(aln.gap_scores(symbol(args, "gap")?, window)?)
        } else {
            anyhow::bail!("mode {:?} needs gap scores: supply --gaps or an alignment", mode);
        }
    } else {
        None
    };

    let similarity = if mode.needs_similarity() {
        match args.get_one::<String>("similarity") {
            Some(file) => Some(colsel::read_scores(
                file,
                *args.get_one::<usize>("sim_field").unwrap(),
            )?),
            None => anyhow::bail!("mode {:?} needs --similarity", mode),
        }
    } else {
        None
    };

    Ok(scores_for_mode(
        mode,
        gaps.as_deref(),
        similarity.as_deref(),
    )?)
}
