use aint::BigUint;
use anyhow::{Context, Result};
use clap::Parser;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// first number, as binary digits with the most significant bit first
    #[arg(requires = "b")]
    a: Option<BigUint>,

    /// second number, as binary digits with the most significant bit first
    b: Option<BigUint>,

    /// the file to read both numbers from, separated by whitespace
    ///
    /// the program will read from stdin if neither input-file or the numbers are set
    #[arg(long, conflicts_with = "a")]
    input_file: Option<PathBuf>,

    /// file to write the output to, -o=- => stdout
    #[arg(short, long, default_value_t = String::from("-"))]
    output: String,

    /// force writing to the output file, even if it already exists
    #[arg(short, long, default_value_t = false)]
    force: bool,
}

/// Euclid's algorithm by repeated remainder
fn gcd(mut a: BigUint, mut b: BigUint) -> BigUint {
    if a < b {
        a.swap(&mut b);
    }

    while !b.is_zero() {
        log::debug!("reducing a={a} b={b}");
        a %= &b;
        a.swap(&mut b);
    }

    a
}

/// Read two numbers one after the other from a stream of binary digits
fn read_operands(reader: &mut impl BufRead) -> Result<(BigUint, BigUint)> {
    let a = BigUint::read_bin(reader).context("Reading the first number.")?;
    let b = BigUint::read_bin(reader).context("Reading the second number.")?;
    Ok((a, b))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default())
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    let args: Args = Args::try_parse()?;

    // read in the two numbers
    let (a, b) = if let (Some(a), Some(b)) = (args.a, args.b) {
        (a, b)
    } else if let Some(ref input_file) = args.input_file {
        let file = File::open(input_file)
            .with_context(|| format!("Opening {input_file:?} to read the numbers."))?;
        read_operands(&mut BufReader::new(file))?
    } else {
        read_operands(&mut io::stdin().lock())?
    };
    log::info!("computing gcd of {} and {} bit numbers", a.bit_length(), b.bit_length());

    let result = gcd(a, b);

    // choose whether to write to stdout or to a file
    let mut out: Box<dyn Write> = match args.output.as_str() {
        "-" => Box::new(std::io::stdout()),
        fname => Box::new(
            OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .create_new(!args.force)
                .open(fname)
                .with_context(|| format!("Opening {fname:?} for writing output."))?,
        ),
    };

    result.write_bin(&mut out)?;
    out.write_all(b"\n")?;

    Ok(())
}
