//! # Unicorpora
//!
//! Unicorpora merges the argument-annotated essay datasets (raw essay
//! text, span annotations, bias labels, sufficiency labels) into one
//! unified JSON corpus, and extracts per-category discriminative
//! vocabulary from externally computed word counts.
//!
//! ## Getting started
//!
//! ```sh
//! unicorpora 0.1.0
//! essay corpus unification tool.
//!
//! USAGE:
//!     unicorpora <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     build    Build the unified JSON corpus
//!     help     Prints this message or the help of the given subcommand(s)
//!     words    Extract words specific to one argument category
//! ```
use itertools::Itertools;
use log::debug;
use structopt::StructOpt;

use unicorpora::error::Error;
use unicorpora::pipelines::{Pipeline, UnifiedCorpus};
use unicorpora::vocab::{self, CategoryTables};

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Unicorpora::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Unicorpora::Build(b) => {
            let pipeline = UnifiedCorpus::new(b.src, b.bias, b.sufficiency, b.dst, b.sample);
            pipeline.run()?;
        }
        cli::Unicorpora::Words(w) => {
            let tables = CategoryTables::from_path(&w.tables)?;
            let words = vocab::top_specific(w.focus, &tables, w.n)?;
            println!("{}", words.iter().sorted().join("\n"));
        }
    };
    Ok(())
}
