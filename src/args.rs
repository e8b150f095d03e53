use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(about = "Counts the third rows extending a two-row Latin rectangle")]
pub struct Args {
    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand, Clone)]
pub enum Mode {
    /// Count for the rectangle (id, p), with p given by its images p(1) .. p(n)
    Count {
        #[arg(required = true, num_args = 1..)]
        images: Vec<usize>,
        /// Also count by exhaustive search
        #[arg(long)]
        verify: bool,
    },
    /// Count straight from the cycle lengths of p
    Partition {
        #[arg(required = true, num_args = 1..)]
        lengths: Vec<usize>,
    },
    /// Count for a rectangle given by two explicit rows
    Rows {
        #[arg(long, required = true, num_args = 1.., value_delimiter = ',')]
        top: Vec<usize>,
        #[arg(long, required = true, num_args = 1.., value_delimiter = ',')]
        bottom: Vec<usize>,
    },
    /// Count for random derangements
    Random {
        #[arg(allow_negative_numbers = true)]
        n: i64,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1)]
        samples: usize,
    },
    /// Count for every cycle type of derangements of size n
    Table { n: usize },
    /// Walk through a few examples of size 8 and a random one of size 12
    Demo {
        #[arg(long)]
        seed: Option<u64>,
    },
}
