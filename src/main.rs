//! # whatstat CLI
//!
//! Command-line interface for the whatstat library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use whatstat::WhatstatError;
use whatstat::cli::{Args, init_tracing};
use whatstat::core::labels::localize;
use whatstat::core::pivot::PivotRequest;
use whatstat::format::{OutputFormat, pivot_to_format_string, write_to_format};
use whatstat::pipeline::TranscriptParser;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), WhatstatError> {
    let total_start = Instant::now();
    let format: OutputFormat = args.format.into();
    let request = PivotRequest {
        x: args.x,
        y: args.y,
        hue: args.hue,
    };

    // status lines only when stdout is free for them
    let verbose_stdout = args.output.is_some();
    if verbose_stdout {
        println!("📊 whatstat v{}", env!("CARGO_PKG_VERSION"));
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("📂 Input:   {}", args.input.display());
        println!("📐 Pivot:   {} by {}", request.y, request.x);
        if let Some(hue) = request.hue {
            println!("🎨 Hue:     {hue}");
        }
        println!("🌐 Locale:  {}", args.locale);
        println!();
    }

    let parser = TranscriptParser::with_config(args.analyzer_config()?);
    let parse_start = Instant::now();
    let collection = parser.parse(&args.input)?;
    tracing::info!(
        records = collection.len(),
        authors = collection.authors().len(),
        format = %collection.date_format(),
        elapsed_ms = parse_start.elapsed().as_millis(),
        "transcript parsed"
    );

    if let Some(records_path) = &args.records {
        let records_format = OutputFormat::from_path(records_path)?;
        write_to_format(&collection, records_path, records_format)?;
        if verbose_stdout {
            println!("🗂️  Records: {} rows → {records_path}", collection.len());
        }
    }

    let table = localize(&request.run(collection.records()), args.locale);
    let rendered = pivot_to_format_string(&table, format)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            println!("✅ Done! {} written to {path}", format);
            println!();
            println!("📈 Summary:");
            println!("   Messages:  {}", collection.len());
            println!("   Authors:   {}", collection.authors().len());
            println!("   Dates:     {}", collection.date_format());
            println!("   Columns:   {}", table.columns.len());
            println!("   Time:      {:.2}s", total_start.elapsed().as_secs_f64());
        }
        None if rendered.ends_with('\n') => print!("{rendered}"),
        None => println!("{rendered}"),
    }

    Ok(())
}
