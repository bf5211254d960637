use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use catalog_seed::config::Config;
use catalog_seed::db::verify;
use catalog_seed::encode::Encoding;
use catalog_seed::generator::{generate_document, prepare_images, OutputDocument};
use catalog_seed::logger::{error, info, init};

const RULE: &str = "============================================================";

/// Generate the catalog seed script with product images embedded as BLOBs.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Folder holding product<N>.<jpg|jpeg|png|gif>
    #[arg(long)]
    images: Option<PathBuf>,

    /// Script to write (overwritten)
    #[arg(long)]
    output: Option<PathBuf>,

    #[arg(long, value_enum)]
    encoding: Option<Encoding>,

    /// Do not create placeholder images when none exist
    #[arg(long)]
    no_fabricate: bool,

    /// Load the generated script into an in-memory SQLite database and report image sizes
    #[arg(long)]
    verify: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Ok(dir) = Config::app_config_dir() {
        let _ = init(dir.join("catalog-seed.log"));
    }

    let result = run(&cli);
    if let Err(err) = &result {
        error(&format!("fatal error: {:?}", err));
    }
    result
}

fn run(cli: &Cli) -> Result<()> {
    let overrides = Config {
        images_folder: cli.images.clone(),
        output_file: cli.output.clone(),
        encoding: cli.encoding,
    };
    let settings = Config::load_or_default()?.merge(overrides).settings()?;
    info(&format!("settings: {:?}", settings));

    println!("{RULE}");
    println!("SQL Generator with Real Image Data");
    println!("{RULE}");
    println!();

    let folder = &settings.images_folder;
    prepare_images(folder, !cli.no_fabricate);
    let document = generate_document(folder, &settings.output_file, settings.encoding)?;

    if cli.verify {
        report_sqlite_check(&document)?;
    }

    print_instructions(folder);
    Ok(())
}

fn report_sqlite_check(document: &OutputDocument) -> Result<()> {
    let rows = verify(document)?;
    println!("\nSQLite check:");
    for row in rows {
        let size = row
            .image_size_bytes
            .map_or("NULL".to_string(), |n| format!("{n} bytes"));
        println!("  {:>2}  {:<28} {}", row.product_id, row.product_name, size);
    }
    Ok(())
}

fn print_instructions(folder: &Path) {
    println!("\n{RULE}");
    println!("USAGE INSTRUCTIONS:");
    println!("{RULE}");
    println!("1. Run this tool to generate the SQL file");
    println!("2. Execute the generated SQL file in your MySQL database");
    println!("3. Start the shopping web application");
    println!("4. Navigate to /products/list and search for products");
    println!("5. Images should display correctly in the table");
    println!();
    println!("To use your own images:");
    println!("- Place JPEG/PNG images in '{}' folder", folder.display());
    println!("- Name them: product1.jpg, product2.jpg, etc.");
    println!("- Re-run this tool");
}
