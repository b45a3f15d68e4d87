//! Command-line interface definitions for html2adoc.

use std::path::PathBuf;

use clap::Parser;
use html2adoc::FormatOptions;

/// html2adoc - Convert HTML documentation fragments to AsciiDoc
#[derive(Debug, Parser)]
#[command(
    name = "html2adoc",
    version,
    about = "Convert HTML documentation fragments to AsciiDoc",
    long_about = "Reads an HTML fragment (for example a Javadoc description) and prints the\n\
                  equivalent AsciiDoc. Input without markup is printed unchanged."
)]
pub struct Cli {
    /// HTML file to convert; reads stdin when omitted or `-`
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Write the result to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Formatting options
    #[command(flatten)]
    pub format: FormatArgs,

    /// Behavior options
    #[command(flatten)]
    pub behavior: BehaviorOptions,
}

#[derive(Debug, clap::Args)]
pub struct FormatArgs {
    /// Delimiter for <b> and <strong>
    #[arg(long, value_name = "DELIM", default_value = "*")]
    pub strong: String,

    /// Delimiter for <i> and <em>
    #[arg(long, value_name = "DELIM", default_value = "_")]
    pub emphasis: String,

    /// Delimiter for inline <code> and <tt>
    #[arg(long, value_name = "DELIM", default_value = "`")]
    pub monospace: String,

    /// Delimiter line around <pre> blocks
    #[arg(long, value_name = "DELIM", default_value = "----")]
    pub code_block: String,

    /// Text written for <br>; a trailing newline is added when missing
    #[arg(long, value_name = "TEXT", default_value = " +")]
    pub line_break: String,

    /// Collapse runs of blank lines in the output
    #[arg(long)]
    pub collapse_blank_lines: bool,
}

#[derive(Debug, clap::Args)]
pub struct BehaviorOptions {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Input path, `None` meaning stdin
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|path| path.as_os_str() != "-")
    }
}

impl From<&FormatArgs> for FormatOptions {
    fn from(args: &FormatArgs) -> Self {
        let mut line_break = args.line_break.clone();
        if !line_break.ends_with('\n') {
            line_break.push('\n');
        }

        FormatOptions {
            strong_delimiter: args.strong.clone(),
            emphasis_delimiter: args.emphasis.clone(),
            monospace_delimiter: args.monospace.clone(),
            code_block_delimiter: args.code_block.clone(),
            line_break,
            collapse_blank_lines: args.collapse_blank_lines,
        }
    }
}
