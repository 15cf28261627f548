use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use svgtidy::{clean_with_options, Options, Precision};

#[derive(Parser)]
#[command(name = "svgtidy")]
#[command(about = "Tidy up an SVG file", long_about = None)]
struct Cli {
    /// Input file (use - for stdin)
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Output file (use - for stdout)
    #[arg(short, long, default_value = "-")]
    output: PathBuf,

    /// Decimal places for coordinates; negative leaves numbers as written
    #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
    precision: i32,

    /// Attribute to strip from every element (repeatable)
    #[arg(long = "strip-attr", value_name = "NAME", default_values_t = vec!["id".to_string()])]
    strip_attrs: Vec<String>,

    /// Namespace prefix whose elements and attributes are removed (repeatable)
    #[arg(
        long = "strip-namespace",
        value_name = "PREFIX",
        default_values_t = vec!["sodipodi".to_string(), "inkscape".to_string()]
    )]
    strip_namespaces: Vec<String>,

    /// Keep attribute-free groups instead of flattening them
    #[arg(long)]
    keep_groups: bool,

    /// Leave inline style attributes in place
    #[arg(long)]
    keep_styles: bool,

    /// Leave translate transforms in place
    #[arg(long)]
    keep_transforms: bool,

    /// Print size comparison
    #[arg(short, long)]
    stats: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Read input
    let input = if cli.input.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(&cli.input)?
    };

    let input_len = input.len();

    let options = Options {
        precision: Precision::from_arg(cli.precision),
        strip_attributes: cli.strip_attrs,
        strip_namespaces: cli.strip_namespaces,
        flatten_groups: !cli.keep_groups,
        extract_styles: !cli.keep_styles,
        apply_transforms: !cli.keep_transforms,
        ..Options::default()
    };

    let output = clean_with_options(&input, &options)?;
    let output_len = output.len();

    // Write output
    if cli.output.as_os_str() == "-" {
        io::stdout().write_all(output.as_bytes())?;
    } else {
        fs::write(&cli.output, &output)?;
    }

    if cli.stats {
        let saved = input_len.saturating_sub(output_len);
        let percent = if input_len > 0 {
            (saved as f64 / input_len as f64) * 100.0
        } else {
            0.0
        };
        eprintln!(
            "{} -> {} bytes ({:.1}% smaller)",
            input_len, output_len, percent
        );
    }

    Ok(())
}
