use balanced_collections::avl::Avl;
use balanced_collections::bst::Unbalanced;
use balanced_collections::{Balance, TreeSet};
use log::{debug, error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::env;
use std::io::{self, Write};
use std::process;

const REFERENCE: [i64; 10] = [8, 6, 7, 5, 1, 3, 9, 4, 0, 2];
const REMOVED: [i64; 3] = [3, 7, 0];
const USAGE: &str = "usage: balanced-collections [-v|-vv] [--bst] [values...]";

struct Options {
    level: LevelFilter,
    unbalanced: bool,
    values: Vec<i64>,
}

fn parse_args<I>(args: I) -> std::result::Result<Options, String>
where
    I: Iterator<Item = String>,
{
    let mut options = Options {
        level: LevelFilter::Warn,
        unbalanced: false,
        values: Vec::new(),
    };
    for arg in args {
        match arg.as_str() {
            "-v" => options.level = LevelFilter::Debug,
            "-vv" => options.level = LevelFilter::Trace,
            "--bst" => options.unbalanced = true,
            value => {
                let value = value
                    .parse()
                    .map_err(|_| format!("invalid value `{}`", value))?;
                options.values.push(value);
            },
        }
    }
    if options.values.is_empty() {
        options.values.extend_from_slice(&REFERENCE);
    }
    Ok(options)
}

fn report<B, W>(set: &TreeSet<i64, B>, out: &mut W) -> io::Result<()>
where
    B: Balance,
    W: Write,
{
    writeln!(out, "values: {:?}", set.to_vec())?;
    match (set.find_min(), set.find_max()) {
        (Ok(min), Ok(max)) => writeln!(
            out,
            "len: {}, height: {}, min: {}, max: {}",
            set.len(),
            set.height(),
            min,
            max,
        ),
        (Err(err), _) | (_, Err(err)) => {
            debug!("{}", err);
            writeln!(out, "len: 0, height: 0, min: none, max: none")
        },
    }
}

fn run<B, W>(values: Vec<i64>, out: &mut W) -> io::Result<()>
where
    B: Balance,
    W: Write,
{
    let mut set = TreeSet::<i64, B>::with_capacity(values.len());
    if !set.insert_all(values) {
        info!("duplicate values were ignored");
    }
    report(&set, out)?;

    for value in REMOVED.iter() {
        if !set.remove(value) {
            info!("{} is not in the set", value);
        }
    }
    report(&set, out)
}

fn main() {
    let options = match parse_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}\n{}", message, USAGE);
            process::exit(2);
        },
    };

    if let Err(err) = TermLogger::init(
        options.level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("failed to install logger: {}", err);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = if options.unbalanced {
        run::<Unbalanced, _>(options.values, &mut out)
    } else {
        run::<Avl, _>(options.values, &mut out)
    };
    if let Err(err) = result {
        error!("{}", err);
        process::exit(1);
    }
}
