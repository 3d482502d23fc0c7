use anyhow::{format_err, Context, Result};
use clap::{Parser, ValueEnum};
use clap_complete::Shell;
use indoc::indoc;
use std::{env, str::FromStr};

/// Which admin field's validation rules are applied to each input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Field {
    /// Page names: canonical sanitized form plus the EDS path limit
    Pagename,
    /// Form field names: letters, numbers and simple punctuation
    Formname,
    /// Page titles: always accepted; prints the derived page name
    Pagetitle,
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Sanitize and validate content page names against EDS naming rules",
    after_long_help = indoc! {"
        Examples:
            # Validate page names from standard input
            printf 'getting-started\\nHello World\\n' | sanename

            # Print the canonical form of each name instead of validating
            sanename --sanitize names.txt

            # Enforce the 900-character EDS limit beneath an existing page
            sanename --parent-path /content/site/docs/ names.txt

            # Derive page names from page titles
            sanename --field pagetitle titles.txt
    "}
)]
pub struct Cli {
    /// The admin field whose validation rules are applied
    #[arg(short, long, value_enum, default_value = "pagename")]
    pub field: Field,

    /// Print the sanitized form of each name instead of validating
    #[arg(short, long)]
    pub sanitize: bool,

    /// Parent page path prepended when checking the EDS path limit
    #[arg(short, long, default_value = "")]
    pub parent_path: String,

    /// Force line-buffered output even when stdout is not a terminal
    #[arg(short, long)]
    pub line_buffered: bool,

    /// Input files; reads from standard input when none are given
    pub files: Vec<String>,
}

impl Cli {
    /// Shell completions are requested through the SANENAME_COMPLETIONS
    /// environment variable rather than a subcommand, keeping the positional
    /// arguments free for input files.
    pub fn compute_shell_used_for_completions() -> Result<Option<Shell>> {
        match env::var("SANENAME_COMPLETIONS") {
            Err(_) => Ok(None),
            Ok(shell_name) => {
                let shell = <Shell as FromStr>::from_str(&shell_name.to_lowercase())
                    .map_err(|e| format_err!("{e}"))
                    .with_context(|| format!("unrecognized shell: {shell_name}"))?;
                Ok(Some(shell))
            }
        }
    }
}
