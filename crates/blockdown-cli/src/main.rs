use anyhow::{Context, Result};
use blockdown_config::Config;
use blockdown_engine::{Document, render, segment};
use std::{env, path::Path, path::PathBuf, process};

mod io;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("render") if args.len() == 3 => cmd_render(Path::new(&args[2])),
        Some("import") if args.len() == 3 => cmd_import(Path::new(&args[2])),
        Some("import-dir") if args.len() <= 3 => cmd_import_dir(args.get(2).map(PathBuf::from)),
        _ => {
            eprintln!("Usage: {} <command>", args[0]);
            eprintln!();
            eprintln!("Commands:");
            eprintln!("  render <article.json>   render stored block JSON to HTML on stdout");
            eprintln!("  import <page.md>        segment one markdown page to block JSON on stdout");
            eprintln!("  import-dir [dir]        segment every .md under dir (default: configured");
            eprintln!("                          content root), writing a .json next to each");
            process::exit(2);
        }
    }
}

fn cmd_render(path: &Path) -> Result<()> {
    let text = io::read_file(path).with_context(|| format!("reading {}", path.display()))?;
    let document =
        Document::from_json(&text).with_context(|| format!("parsing {}", path.display()))?;
    println!("{}", render(&document));
    Ok(())
}

fn cmd_import(path: &Path) -> Result<()> {
    let markdown = io::read_file(path).with_context(|| format!("reading {}", path.display()))?;
    let document = segment(&markdown);
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}

fn cmd_import_dir(dir: Option<PathBuf>) -> Result<()> {
    let content_root = match dir {
        Some(dir) => dir,
        None => match Config::load()? {
            Some(config) => config.content_root,
            None => {
                eprintln!(
                    "Error: No directory given and no config file at {}",
                    Config::config_path().display()
                );
                process::exit(1);
            }
        },
    };

    if let Err(e) = io::validate_content_dir(&content_root) {
        eprintln!("Error: Content path '{}' is invalid: {e}", content_root.display());
        process::exit(1);
    }

    let files = io::scan_markdown_files(&content_root)?;
    let mut imported = 0usize;

    for file in &files {
        // One bad page must not abort the whole import.
        match import_one(file) {
            Ok(target) => {
                println!("{} -> {}", file.display(), target.display());
                imported += 1;
            }
            Err(e) => eprintln!("Skipping {}: {e}", file.display()),
        }
    }

    println!("Imported {imported} of {} markdown files", files.len());
    Ok(())
}

fn import_one(file: &Path) -> Result<PathBuf> {
    let markdown = io::read_file(file)?;
    let document = segment(&markdown);
    let json = serde_json::to_string_pretty(&document)?;
    Ok(io::write_sibling_json(file, &json)?)
}
