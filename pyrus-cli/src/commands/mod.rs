//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod list;
pub mod parse;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse text files into typed words
    Parse(parse::ParseArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List word types and their numeric codes
    Types,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Parse(args) => args.execute(),
            Commands::List { subcommand } => list::execute(*subcommand),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let parse_cmd = Commands::Parse(parse::ParseArgs {
            input: vec!["test.txt".to_string()],
            output: None,
            format: Some(parse::OutputFormat::Text),
            mwe: vec!["в общем".to_string()],
            mwe_file: Vec::new(),
            config: None,
            legacy_type_tags: false,
            strip_accents: false,
            quiet: false,
            verbose: 0,
        });

        let debug_str = format!("{:?}", parse_cmd);
        assert!(debug_str.contains("Parse"));
        assert!(debug_str.contains("test.txt"));

        let list_cmd = Commands::List {
            subcommand: ListCommands::Types,
        };
        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Types"));
    }
}
