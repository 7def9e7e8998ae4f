use std::io::{self, Write};

use url::Url;

use crate::config::{Config, DEFAULT_DEPARTMENT, DEFAULT_ENDPOINT};
use crate::error::{Result, RosterError};
use crate::output;
use crate::pager::DEFAULT_PAGE_SIZE;

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        let answer = prompt(&format!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        ))?;
        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("Roster Configuration");
    println!("====================\n");

    let endpoint = prompt(&format!("Seed endpoint [{DEFAULT_ENDPOINT}]: "))?;
    if !endpoint.is_empty() {
        Url::parse(&endpoint).map_err(|_| RosterError::InvalidUrl(endpoint.clone()))?;
    }

    let department = prompt(&format!("Default department [{DEFAULT_DEPARTMENT}]: "))?;
    let page_size = prompt(&format!("Page size [{DEFAULT_PAGE_SIZE}]: "))?;

    let mut config_content = String::new();
    if !endpoint.is_empty() {
        config_content.push_str(&format!("endpoint = \"{endpoint}\"\n"));
    }
    if !department.is_empty() {
        config_content.push_str(&format!("department = \"{department}\"\n"));
    }
    if !page_size.is_empty() {
        match page_size.parse::<usize>() {
            Ok(size) if size > 0 => {
                config_content.push_str(&format!("page_size = {size}\n"));
            }
            _ => println!("Ignoring invalid page size '{page_size}'"),
        }
    }

    // Create config directory if it doesn't exist
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| RosterError::ConfigRead {
            path: config_path.clone(),
            source: e,
        })?;
    }

    std::fs::write(&config_path, config_content).map_err(|e| RosterError::ConfigRead {
        path: config_path.clone(),
        source: e,
    })?;

    output::print_message(&format!("\nConfig saved to {}", config_path.display()));
    output::print_message("Unset keys fall back to their defaults.");

    Ok(())
}
