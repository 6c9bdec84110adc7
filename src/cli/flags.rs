use clap::Parser;

#[derive(Debug, Default, Parser)]
#[command(name = "kodeord")]
#[command(about = "Strong, secure passwords generated locally from the OS CSPRNG")]
#[command(version)]
pub struct CliFlags {
    /// Characters per password (6-64, default 16)
    #[arg(short, long, value_name = "N")]
    pub length: Option<usize>,

    /// How many passwords to print
    #[arg(short, long, value_name = "N")]
    pub number: Option<usize>,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Include Danish letters (æøåÆØÅ)
    #[arg(long)]
    pub danish: bool,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Score TEXT instead of generating
    #[arg(short, long, value_name = "TEXT")]
    pub analyze: Option<String>,

    /// Save these options as the new defaults
    #[arg(short, long)]
    pub save: bool,

    /// Ignore saved defaults for this run
    #[arg(short, long)]
    pub default: bool,

    /// Suppress everything except passwords
    #[arg(short, long)]
    pub quiet: bool,

    /// Open the interactive generator
    #[arg(short, long)]
    pub interactive: bool,
}

impl CliFlags {
    /// True when any option would change what a one-shot run does.
    pub fn has_explicit_args(&self) -> bool {
        self.length.is_some()
            || self.number.is_some()
            || self.no_lower
            || self.no_upper
            || self.no_digits
            || self.no_symbols
            || self.danish
            || self.clipboard
            || self.analyze.is_some()
            || self.save
            || self.default
            || self.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliFlags {
        CliFlags::try_parse_from(std::iter::once("kodeord").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_args_is_not_explicit() {
        assert!(!parse(&[]).has_explicit_args());
        assert!(!parse(&["-i"]).has_explicit_args());
    }

    #[test]
    fn short_and_long_forms() {
        let flags = parse(&["-l", "20", "-n", "3", "--no-symbols", "--danish", "-b"]);
        assert_eq!(flags.length, Some(20));
        assert_eq!(flags.number, Some(3));
        assert!(flags.no_symbols && flags.danish && flags.clipboard);
        assert!(flags.has_explicit_args());

        let flags = parse(&["--analyze", "hunter2", "--quiet"]);
        assert_eq!(flags.analyze.as_deref(), Some("hunter2"));
        assert!(flags.quiet);
    }

    #[test]
    fn rejects_unknown_and_bad_numbers() {
        assert!(CliFlags::try_parse_from(["kodeord", "--bogus"]).is_err());
        assert!(CliFlags::try_parse_from(["kodeord", "-l", "ten"]).is_err());
        assert!(CliFlags::try_parse_from(["kodeord", "-l", "-4"]).is_err());
    }
}
