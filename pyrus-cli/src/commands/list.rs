//! List command implementation

use super::parse::OutputFormat;
use super::ListCommands;
use anyhow::Result;
use clap::ValueEnum;
use pyrus_core::WordType;

/// Print the requested listing to stdout
pub fn execute(subcommand: ListCommands) -> Result<()> {
    for line in lines(subcommand) {
        println!("{line}");
    }
    Ok(())
}

fn lines(subcommand: ListCommands) -> Vec<String> {
    match subcommand {
        ListCommands::Formats => OutputFormat::value_variants()
            .iter()
            .filter_map(|format| format.to_possible_value())
            .map(|value| match value.get_help() {
                Some(help) => format!("{:<10} {}", value.get_name(), help),
                None => value.get_name().to_string(),
            })
            .collect(),
        ListCommands::Types => WordType::ALL
            .iter()
            .map(|t| format!("{}  {}", t.code(), t))
            .collect(),
    }
}
