// cff/src/cli/info.rs
use clap::Args;
use colored::Colorize;
use cff_core::ACTION;
use prettytable::{format, Cell, Row, Table};

use crate::cli::CliError;

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Print the description as JSON
    #[arg(long)]
    pub json: bool,
}

impl InfoArgs {
    pub fn run(&self) -> Result<(), CliError> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(&ACTION)?);
            return Ok(());
        }

        println!("{}", ACTION.name.bold());
        println!("{}", ACTION.description);
        println!();

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
        table.add_row(Row::new(vec![
            Cell::new("Key").style_spec("b"),
            Cell::new("Description").style_spec("b"),
            Cell::new("Type").style_spec("b"),
            Cell::new("Optional").style_spec("b"),
            Cell::new("Env").style_spec("b"),
        ]));
        for option in ACTION.options {
            table.add_row(Row::new(vec![
                Cell::new(option.key).style_spec("Fb"),
                Cell::new(option.description),
                Cell::new(option.value_type),
                Cell::new(if option.optional { "yes" } else { "no" }),
                Cell::new(option.env_fallback.unwrap_or("")),
            ]));
        }
        table.printstd();

        println!();
        println!("{} {}", "Returns:".bold(), ACTION.return_value);
        println!("{} {}", "Authors:".bold(), ACTION.authors.join(", "));
        Ok(())
    }
}
