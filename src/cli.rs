//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use unicorpora::annotation::Category;

#[derive(Debug, StructOpt)]
#[structopt(name = "unicorpora", about = "essay corpus unification tool.")]
/// Holds every command that is callable by the `unicorpora` command.
pub enum Unicorpora {
    #[structopt(about = "Build the unified JSON corpus")]
    Build(Build),
    #[structopt(about = "Extract words specific to one argument category")]
    Words(Words),
}

#[derive(Debug, StructOpt)]
/// Build command and parameters.
///
/// ```sh
/// unicorpora-build 0.1.0
/// Build the unified JSON corpus
///
/// USAGE:
///     unicorpora build [OPTIONS] <src> <bias> <sufficiency> <dst>
///
/// FLAGS:
///     -h, --help       Prints help information
///     -V, --version    Prints version information
///
/// OPTIONS:
///         --sample <sample>    sample record to check the built corpus against
///
/// ARGS:
///     <src>            dataset root (walked for essay*.txt and essay*.ann)
///     <bias>           bias labels file (tsv)
///     <sufficiency>    sufficiency labels file (tsv, latin-1)
///     <dst>            corpus destination (json)
/// ```
pub struct Build {
    #[structopt(
        parse(from_os_str),
        help = "dataset root (walked for essay*.txt and essay*.ann)"
    )]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "bias labels file (tsv)")]
    pub bias: PathBuf,
    #[structopt(parse(from_os_str), help = "sufficiency labels file (tsv, latin-1)")]
    pub sufficiency: PathBuf,
    #[structopt(parse(from_os_str), help = "corpus destination (json)")]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "sample",
        help = "sample record to check the built corpus against"
    )]
    pub sample: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
/// Words command and parameters.
pub struct Words {
    #[structopt(
        parse(from_os_str),
        help = "frequency tables (json object keyed major_claim/claims/premises)"
    )]
    pub tables: PathBuf,
    #[structopt(help = "focus category (major_claim, claims or premises)")]
    pub focus: Category,
    #[structopt(short = "n", default_value = "10", help = "number of words to extract")]
    pub n: usize,
}
