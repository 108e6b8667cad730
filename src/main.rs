use anyhow::Result;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use biodata_extract::{
    build_record, export_raw_text_csv, export_record_csv, export_record_json, load_text,
    DocumentParser, SchemaRegistry,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: biodata-extract <input.txt> [output-dir]");
        eprintln!("   Reads linearized document text and writes the structured sheets.");
        std::process::exit(1);
    }

    let input = Path::new(&args[1]);
    let output_dir = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    run_convert(input, &output_dir)
}

fn run_convert(input: &Path, output_dir: &Path) -> Result<()> {
    println!("📄 Document Structuring: {}", input.display());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Load document text
    println!("\n📂 Loading document text...");
    let raw_text = load_text(input)?;
    println!("✓ Loaded {} characters", raw_text.len());

    // 2. Run extraction rules
    println!("\n🔍 Extracting fields...");
    let parser = DocumentParser::new()?;
    let fields = parser.parse(&raw_text);
    println!(
        "✓ {} raw fields extracted by {} rules",
        fields.len(),
        parser.rule_count()
    );

    // 3. Assemble the canonical record
    println!("\n🧾 Building canonical record...");
    let registry = SchemaRegistry::new();
    let record = build_record(&fields, &registry);
    let populated = record.iter().filter(|row| !row.value.is_empty()).count();
    println!(
        "✓ Record has {} rows ({} populated)",
        record.len(),
        populated
    );

    for row in record.iter().filter(|row| !row.value.is_empty()) {
        println!("   {:>2}. {}: {}", row.index, row.key, row.value);
    }

    // 4. Export sheets
    println!("\n💾 Writing output...");
    fs::create_dir_all(output_dir)?;

    let record_path = output_dir.join("Output.csv");
    let raw_path = output_dir.join("RawText.csv");
    let json_path = output_dir.join("Output.json");

    export_record_csv(&record, &record_path)?;
    export_raw_text_csv(&raw_text, &raw_path)?;
    export_record_json(&record, &json_path)?;

    println!("✓ {}", record_path.display());
    println!("✓ {}", raw_path.display());
    println!("✓ {}", json_path.display());

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("🎉 Done: {} of {} rows populated", populated, record.len());

    Ok(())
}
