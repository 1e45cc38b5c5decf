use clap::{Args, Parser, Subcommand, ValueEnum};

/// max_weight — pick the heaviest set of foods that fits a calorie budget.
#[derive(Parser, Debug)]
#[command(name = "max_weight")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the caret-delimited food catalog file.
    #[arg(short, long, default_value = "foods.txt")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the catalog, optionally filtered by weight range and size.
    Show {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Run one solver against a calorie budget.
    Solve {
        /// Calorie budget the selection may not exceed.
        #[arg(short, long)]
        budget: f64,

        /// Which solver to run.
        #[arg(short, long, value_enum, default_value_t = Algorithm::Dynamic)]
        algorithm: Algorithm,

        #[command(flatten)]
        filter: FilterArgs,

        /// Emit the result as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Run both solvers on the same input and check that they agree.
    Compare {
        /// Calorie budget the selection may not exceed.
        #[arg(short, long)]
        budget: f64,

        #[command(flatten)]
        filter: FilterArgs,

        /// Emit the results as JSON instead of tables.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// O(n*C) dynamic programming over the integer calorie budget.
    Dynamic,
    /// O(n*2^n) subset enumeration; needs fewer than 64 items.
    Exhaustive,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Dynamic => "dynamic",
            Algorithm::Exhaustive => "exhaustive",
        }
    }
}

/// Weight-range / size filter applied to the catalog before solving.
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Minimum item weight to keep (inclusive).
    #[arg(long, default_value_t = 0.0)]
    pub min_weight: f64,

    /// Maximum item weight to keep (inclusive).
    #[arg(long, default_value_t = f64::INFINITY)]
    pub max_weight: f64,

    /// Keep at most this many matching items.
    #[arg(long)]
    pub limit: Option<usize>,
}
