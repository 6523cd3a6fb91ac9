use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[clap(version, about)]
pub struct Cli {
    #[clap(value_parser, help = "The NXDL schema file (nxdl.xsd)")]
    pub input: PathBuf,

    #[clap(
        short,
        long,
        value_parser,
        help = "Write the chapter to this file instead of stdout"
    )]
    pub output: Option<PathBuf>,

    #[clap(
        long,
        value_parser,
        help = "Documentation source root searched for img/nxdl/nxdl_<element>.png figures"
    )]
    pub source_root: Option<PathBuf>,

    #[clap(long, help = "Allow a XML Document Type Definition (DTD) to occur")]
    pub allow_dtd: bool,

    #[clap(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v, -vv, -vvv)")]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_all_options() {
        let cli = Cli::parse_from([
            "nxdl-docgen",
            "nxdl.xsd",
            "-o",
            "nxdl_desc.rst",
            "--source-root",
            "manual/source",
            "--allow-dtd",
            "-vv",
        ]);
        assert_eq!(cli.input, PathBuf::from("nxdl.xsd"));
        assert_eq!(cli.output, Some(PathBuf::from("nxdl_desc.rst")));
        assert_eq!(cli.source_root, Some(PathBuf::from("manual/source")));
        assert!(cli.allow_dtd);
        assert_eq!(cli.verbose, 2);
    }
}
