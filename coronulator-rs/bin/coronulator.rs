use clap::Parser;
use coronulator::{batch, config::Config, prelude::*, utils::*};
use log::*;
use simple_logger::SimpleLogger;
use std::{fs::File, io, path::PathBuf, process};

const DEFAULT_CONFIG: &str = "conf.toml";

/// Guesstimates the chance coronavirus will kill you.
#[derive(Parser, Debug)]
#[command(name = "coronulator", version)]
struct Args {
    /// TOML file with the selected option of each dimension
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long, value_name = "INDEX")]
    age: Option<usize>,
    #[arg(long, value_name = "INDEX")]
    preconditions: Option<usize>,
    #[arg(long, value_name = "INDEX")]
    social_contact: Option<usize>,
    #[arg(long, value_name = "INDEX")]
    hygiene: Option<usize>,
    #[arg(long, value_name = "INDEX")]
    gender: Option<usize>,
    #[arg(long, value_name = "INDEX")]
    health_services: Option<usize>,
    #[arg(long, value_name = "INDEX")]
    climate: Option<usize>,
    #[arg(long, value_name = "INDEX")]
    population_ir: Option<usize>,
    #[arg(long, value_name = "INDEX")]
    ifr: Option<usize>,

    /// List the options of every dimension and exit
    #[arg(long)]
    list: bool,

    /// Explain what a dimension means and exit
    #[arg(long, value_name = "DIMENSION")]
    explain: Option<Dimension>,

    /// CSV file with one selection per row
    #[arg(long, conflicts_with = "random")]
    batch: Option<PathBuf>,

    /// Where to write batch results (default: stdout)
    #[arg(short, long, requires = "batch")]
    output: Option<PathBuf>,

    /// Evaluate N random selections and print a summary
    #[arg(long, value_name = "N")]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Debug output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Indexes given on the command line, which override the config file.
    fn overrides(&self) -> Vec<(Dimension, usize)> {
        let flags = [
            (Dimension::Age, self.age),
            (Dimension::Preconditions, self.preconditions),
            (Dimension::SocialContact, self.social_contact),
            (Dimension::Hygiene, self.hygiene),
            (Dimension::Gender, self.gender),
            (Dimension::HealthServices, self.health_services),
            (Dimension::Climate, self.climate),
            (Dimension::PopulationIr, self.population_ir),
            (Dimension::Ifr, self.ifr),
        ];
        flags
            .iter()
            .filter_map(|&(dim, idx)| idx.map(|i| (dim, i)))
            .collect()
    }

    fn load_config(&self) -> Result<Config, InputError> {
        let mut cfg = match &self.config {
            Some(path) => Config::from_path(path)?,
            None => Config::from_path_or_default(DEFAULT_CONFIG)?,
        };
        for (dim, idx) in self.overrides() {
            cfg.selection_mut().set(dim, idx);
        }
        Ok(cfg)
    }
}

pub fn main() {
    let args = Args::parse();
    if let Err(e) = SimpleLogger::new().with_level(LevelFilter::Debug).init() {
        eprintln!("could not initialize logger: {}", e);
    }
    log::set_max_level(if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    if let Err(e) = run(args) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), InputError> {
    if args.list {
        list_options();
        return Ok(());
    }
    if let Some(dim) = args.explain {
        println!("{}\n\n{}", dim.label(), dim.help());
        return Ok(());
    }

    let cfg = args.load_config()?;
    if cfg.verbose() {
        log::set_max_level(LevelFilter::Debug);
    }
    debug!("{:#?}", cfg);

    if let Some(path) = &args.batch {
        let selections = batch::read_selections(File::open(path)?)?;
        let rows = batch::evaluate(&selections)?;
        match &args.output {
            Some(out) => batch::write_rows(File::create(out)?, &rows)?,
            None => batch::write_rows(io::stdout(), &rows)?,
        }
        // stdout may carry the CSV rows
        eprintln!("{}: {}", path.display(), batch::summary_line(&rows));
        return Ok(());
    }

    if let Some(n) = args.random {
        let mut rng = match args.seed {
            Some(seed) => seeded_rng(seed),
            None => default_rng(),
        };
        let selections: Vec<_> = (0..n).map(|_| Selection::random(&mut rng)).collect();
        let rows = batch::evaluate(&selections)?;
        println!("{}", batch::summary_line(&rows));
        return Ok(());
    }

    show_selection(cfg.selection())
}

fn show_selection(sel: &Selection) -> Result<(), InputError> {
    let labels = sel.labels()?;
    let est = estimate(&sel.resolve()?)?;

    println!("Assuming you have not been tested and have no symptoms:\n");
    for dim in Dimension::ALL.iter().copied() {
        println!("{:>16}: {}", dim.label(), labels[dim.index()]);
    }
    debug!(
        "infection={}, fatality={}, death={}",
        est.infection(),
        est.fatality(),
        est.death()
    );
    println!("\n{}", format_probability(est.death()));
    Ok(())
}

fn list_options() {
    for dim in Dimension::ALL.iter().copied() {
        println!("{} ({}):", dim.label(), dim.key());
        for (i, opt) in dim.options().iter().enumerate() {
            let mark = if i == dim.default_index() { "*" } else { " " };
            println!("  {}[{}] {:<18} {}", mark, i, opt.label(), opt.value());
        }
    }
}
