use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use numutils::timing::next_bigger_timed;
use numutils::{filter_by_digit, next_bigger, nth_root_with, splice_bits, RootOptions};

/// numutils: bit splicing, digit permutations, digit filters and nth roots.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Copy the low bits of SOURCE into bits LOW..=HIGH of DESTINATION
    Splice {
        #[arg(allow_negative_numbers = true)]
        destination: i32,
        #[arg(allow_negative_numbers = true)]
        source: i32,
        #[arg(allow_negative_numbers = true)]
        high: i32,
        #[arg(allow_negative_numbers = true)]
        low: i32,
    },
    /// Smallest larger number made of the same digits
    NextBigger {
        #[arg(allow_negative_numbers = true)]
        number: i32,
        /// Report the computation time on stderr
        #[arg(long)]
        timed: bool,
    },
    /// Keep the values that contain DIGIT
    Filter {
        #[arg(allow_negative_numbers = true)]
        digit: i32,
        #[arg(allow_negative_numbers = true)]
        values: Vec<i32>,
    },
    /// Newton-Raphson approximation of the DEGREE-th root of NUMBER
    Root {
        #[arg(allow_negative_numbers = true)]
        number: f64,
        #[arg(allow_negative_numbers = true)]
        degree: i32,
        /// Stop once successive iterates differ by less than this
        #[arg(long, short, default_value_t = 1e-4, allow_negative_numbers = true)]
        precision: f64,
        /// Give up after this many iterations
        #[arg(long, default_value_t = numutils::DEFAULT_MAX_ITERATIONS)]
        max_iterations: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    println!("{}", run(&cli.command)?);
    Ok(())
}

/// Executes one subcommand and renders its result for stdout.
fn run(command: &Command) -> Result<String> {
    match *command {
        Command::Splice {
            destination,
            source,
            high,
            low,
        } => {
            let spliced = splice_bits(destination, source, high, low)
                .with_context(|| format!("cannot splice bits {high}..{low}"))?;
            Ok(spliced.to_string())
        }
        Command::NextBigger { number, timed } => {
            let result = if timed {
                let t = next_bigger_timed(number);
                eprintln!("numutils: next-bigger took {:?}", t.elapsed);
                t.value
            } else {
                next_bigger(number)
            };
            let found = result.with_context(|| format!("no next bigger number for {number}"))?;
            Ok(found.map_or_else(|| "none".to_string(), |n| n.to_string()))
        }
        Command::Filter { digit, ref values } => {
            eprintln!("numutils: filtering {} values by digit {digit}", values.len());
            let kept = filter_by_digit(Some(values.as_slice()), digit)
                .with_context(|| format!("cannot filter by digit {digit}"))?;
            Ok(kept
                .iter()
                .map(i32::to_string)
                .collect::<Vec<_>>()
                .join(" "))
        }
        Command::Root {
            number,
            degree,
            precision,
            max_iterations,
        } => {
            let options = RootOptions { max_iterations };
            let root = nth_root_with(number, degree, precision, &options)
                .with_context(|| format!("cannot take root {degree} of {number}"))?;
            Ok(root.to_string())
        }
    }
}
