use anyhow::Result;
use clap::{Arg, Command};
use std::path::PathBuf;

// Library dependencies.
use extract_css::extract_css;
use refactor_dashboard::refactor_dashboard;

fn main() -> Result<()> {
    let matches = Command::new("css_refactor")
        .version("0.1.0")
        .about("Moves inline <style> blocks out of HTML files into external stylesheets")
        .subcommand_required(true)
        .subcommand(
            Command::new("extract")
                .about("Extract the first <style> block of an HTML file into a CSS file")
                .arg(
                    Arg::new("html")
                        .long("html")
                        .num_args(1)
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .help("Source HTML file"),
                )
                .arg(
                    Arg::new("css")
                        .long("css")
                        .num_args(1)
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .help("Destination CSS file (parent directories are created)"),
                ),
        )
        .subcommand(
            Command::new("refactor")
                .about("Strip the inline <style> block from the dashboard HTML in place")
                .arg(
                    Arg::new("html")
                        .long("html")
                        .num_args(1)
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .help("Dashboard HTML file (rewritten in place)"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("extract", sub)) => {
            let html = sub.get_one::<PathBuf>("html").unwrap();
            let css = sub.get_one::<PathBuf>("css").unwrap();
            println!("--- Extracting CSS ---");
            // Absence of a style block is reported, not an error.
            extract_css(html, css);
        }
        Some(("refactor", sub)) => {
            let html = sub.get_one::<PathBuf>("html").unwrap();
            refactor_dashboard(html)?;
        }
        _ => unreachable!("subcommand is required"),
    }

    Ok(())
}
