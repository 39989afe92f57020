use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "creator_deals_cli",
    about = "Create brand deal and discount listings step by step",
    disable_version_flag = true
)]
pub struct Cli {
    /// Print version and build metadata.
    #[arg(short = 'V', long)]
    pub version: bool,
    /// Disable coloured output regardless of configuration.
    #[arg(long, global = true)]
    pub no_color: bool,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Walk through the six-step brand deal wizard.
    BrandDeal(WizardArgs),
    /// Walk through the discount listing form.
    Discount(WizardArgs),
    /// Inspect the active configuration.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args, Debug, Clone)]
pub struct WizardArgs {
    /// Pre-fill the form from a JSON patch and jump to review.
    #[arg(long, value_name = "FILE")]
    pub autofill: Option<PathBuf>,
    /// Submit the auto-filled listing without prompting.
    #[arg(long, short = 'y', requires = "autofill")]
    pub yes: bool,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigAction {
    /// Print the configuration as JSON.
    Show,
    /// Print the configuration file location.
    Path,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_autofill_flags() {
        let cli = Cli::try_parse_from([
            "creator_deals_cli",
            "brand-deal",
            "--autofill",
            "deal.json",
            "--yes",
        ])
        .unwrap();
        match cli.command {
            Some(Command::BrandDeal(args)) => {
                assert_eq!(args.autofill, Some(PathBuf::from("deal.json")));
                assert!(args.yes);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn yes_requires_autofill() {
        assert!(Cli::try_parse_from(["creator_deals_cli", "discount", "--yes"]).is_err());
    }
}
