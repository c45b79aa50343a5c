use clap::Parser;
use clinic_cli::evens::count_evens;

/// Count the even numbers in an inclusive range.
#[derive(Debug, Parser)]
#[command(name = "count-evens", version)]
struct Args {
    /// First number of the range
    #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
    from: i64,

    /// Last number of the range (inclusive)
    #[arg(long, default_value_t = 20, allow_hyphen_values = true)]
    to: i64,
}

fn main() {
    let args = Args::parse();
    let count = count_evens(args.from..=args.to);
    println!(
        "There are {} even numbers between {} and {}.",
        count, args.from, args.to
    );
}
