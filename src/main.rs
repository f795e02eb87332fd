// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! htmltree CLI - inspect and audit HTML files

use std::env;
use std::process::ExitCode;

use anyhow::Context;
use htmltree::{
    collect_attribute_names, filter_whitespace, find_all, get_body_children, is_nested,
    list_html_files, print_outline, read_html_file, serialize, Error, OutlineOptions, ParseConfig,
};

fn main() -> ExitCode {
    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("htmltree=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "outline" => match args.get(2) {
            Some(file) => outline(file, &args[3..]),
            None => return usage_error("htmltree outline <file> [--exclude tags] [--keep attrs]"),
        },
        "attrs" => match args.get(2) {
            Some(file) => attrs(file),
            None => return usage_error("htmltree attrs <file>"),
        },
        "find" => match (args.get(2), args.get(3)) {
            (Some(file), Some(tag)) => find(file, tag),
            _ => return usage_error("htmltree find <file> <tag>"),
        },
        "body" => match args.get(2) {
            Some(file) => body(file),
            None => return usage_error("htmltree body <file>"),
        },
        "nested" => {
            if args.len() < 4 {
                return usage_error("htmltree nested <tag> <file>...");
            }
            nested(&args[2], &args[3..])
        }
        "ls" => match args.get(2) {
            Some(dir) => ls(dir),
            None => return usage_error("htmltree ls <dir>"),
        },
        "fmt" => match args.get(2) {
            Some(file) => fmt(file),
            None => return usage_error("htmltree fmt <file>"),
        },
        "json" => match args.get(2) {
            Some(file) => json(file),
            None => return usage_error("htmltree json <file>"),
        },
        "--help" | "-h" | "help" => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        "--version" | "-v" | "version" => {
            println!("htmltree {}", htmltree::VERSION);
            return ExitCode::SUCCESS;
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            return ExitCode::from(1);
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            // A missing or duplicated <body> is fatal for audit scripts
            match e.downcast_ref::<Error>() {
                Some(Error::MissingElement { .. }) => ExitCode::from(2),
                _ => ExitCode::from(1),
            }
        }
    }
}

fn print_usage() {
    println!(
        r#"htmltree - HTML document tree utilities

USAGE:
    htmltree <COMMAND> [OPTIONS]

COMMANDS:
    outline <file> [--exclude tags] [--keep attrs]
                        Print an indented element outline
    attrs <file>        List distinct attribute names
    find <file> <tag>   Print the top-most <tag> elements
    body <file>         Print the children of the single <body>
    nested <tag> <file>...
                        List files where <tag> contains another <tag>
    ls <dir>            List .html files in a directory
    fmt <file>          Drop whitespace-only text and re-serialize
    json <file>         Dump the tree as JSON
    help                Show this help message
    version             Show version information

EXAMPLES:
    htmltree outline index.html --exclude script,style --keep id,class
    htmltree nested div site/*.html
    RUST_LOG=htmltree=debug htmltree body page.html
"#
    );
}

fn usage_error(usage: &str) -> ExitCode {
    eprintln!("Usage: {}", usage);
    ExitCode::from(1)
}

fn load(file: &str) -> anyhow::Result<htmltree::Document> {
    read_html_file(file, &ParseConfig::default()).with_context(|| format!("failed to load {}", file))
}

fn split_list(value: Option<&String>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

fn outline(file: &str, flags: &[String]) -> anyhow::Result<()> {
    let mut options = OutlineOptions::new();
    let mut iter = flags.iter();
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--exclude" => options.exclude.extend(split_list(iter.next())),
            "--keep" => options.keep_attrs.extend(split_list(iter.next())),
            other => anyhow::bail!("unknown option: {}", other),
        }
    }

    let doc = load(file)?;
    print_outline(&doc, &options)?;
    Ok(())
}

fn attrs(file: &str) -> anyhow::Result<()> {
    let doc = load(file)?;
    for name in collect_attribute_names(&doc) {
        println!("{}", name);
    }
    Ok(())
}

fn find(file: &str, tag: &str) -> anyhow::Result<()> {
    let doc = load(file)?;
    let matches = find_all(&doc, tag);
    tracing::info!(file, tag, count = matches.len(), "search complete");
    for el in matches {
        println!("{}", el.to_html()?);
    }
    Ok(())
}

fn body(file: &str) -> anyhow::Result<()> {
    let doc = load(file)?;
    let children = get_body_children(&doc, Some(file))?;
    println!("{}", serialize(children)?);
    Ok(())
}

fn nested(tag: &str, files: &[String]) -> anyhow::Result<()> {
    for file in files {
        let doc = load(file)?;
        if is_nested(tag, &doc) {
            println!("{}", file);
        }
    }
    Ok(())
}

fn ls(dir: &str) -> anyhow::Result<()> {
    for path in list_html_files(dir).with_context(|| format!("failed to list {}", dir))? {
        println!("{}", path.display());
    }
    Ok(())
}

fn fmt(file: &str) -> anyhow::Result<()> {
    let doc = load(file)?;
    println!("{}", serialize(&filter_whitespace(&doc))?);
    Ok(())
}

fn json(file: &str) -> anyhow::Result<()> {
    let doc = load(file)?;
    println!("{}", doc.to_json()?);
    Ok(())
}
