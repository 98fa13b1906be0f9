use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use xentity::{
    error::{ArgumentError, ErrorKind, Result, XmlError},
    sample::{create_plan_document, sample_fuc_plan},
    translate_to_document, Document, FormatConfig,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Build the sample plan through the record translator
    #[arg(short, long)]
    translate: bool,

    /// Print the entities matching a path such as fuc/avaliacao/componente
    #[arg(short = 'x', long)]
    xpath: Option<String>,

    /// Rename entities globally, as OLD=NEW
    #[arg(short, long)]
    rename: Option<String>,

    /// Remove every entity with this name
    #[arg(short = 'd', long)]
    remove: Option<String>,

    /// Spaces per indentation level
    #[arg(short, long, default_value_t = 4)]
    indent: usize,

    /// XML version written in the declaration
    #[arg(long, default_value = "1.0")]
    version_string: String,

    /// Encoding written in the declaration
    #[arg(long, default_value = "UTF-8")]
    encoding: String,

    /// Output file path
    #[arg(short, long)]
    output: Option<String>,
}

fn main() {
    // Initialize the default subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let config = FormatConfig::with_indent(args.indent)?;

    let doc = if args.translate {
        info!("Building sample plan through the translator");
        translate_to_document(&sample_fuc_plan(), &args.version_string, &args.encoding)?
    } else {
        info!("Building sample plan");
        create_plan_document("plano", &args.version_string, &args.encoding)?
    };
    let root = doc.root_entity();

    if let Some(rename) = &args.rename {
        let (old, new) = rename.split_once('=').ok_or_else(|| {
            XmlError::new(ErrorKind::InvalidArgument(ArgumentError::Mapping(
                rename.clone(),
            )))
            .with_context("--rename expects OLD=NEW")
        })?;
        root.global_rename_entity(old, new)?;
    }

    if let Some(name) = &args.remove {
        root.global_remove_entity(name);
    }

    let output = match &args.xpath {
        Some(path) => root
            .global_xpath(path)
            .iter()
            .map(|entity| entity.pretty_print_with(0, &config))
            .collect::<Result<Vec<_>>>()?
            .join("\n"),
        None => render(&doc, &config)?,
    };

    // Write to file or print to stdout
    if let Some(output_path) = args.output {
        xentity::utils::write_file(&output_path, &output)?;
        info!("Wrote {}", output_path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn render(doc: &Document, config: &FormatConfig) -> Result<String> {
    Ok(format!(
        "{}\n{}",
        doc.declaration(),
        doc.root_entity().pretty_print_with(0, config)?
    ))
}

