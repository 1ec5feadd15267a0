//! Dump a parsed label document to stdout.
//!
//! Usage: labeldump <file.labels> [more files...]

use labelrust::io::XmlLabelParser;
use labelrust::model::ObjectType;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let files: Vec<String> = std::env::args().skip(1).collect();
    if files.is_empty() {
        eprintln!("usage: labeldump <file.labels> [more files...]");
        std::process::exit(2);
    }

    for file in &files {
        dump(file)?;
    }
    Ok(())
}

fn dump(file: &str) -> anyhow::Result<()> {
    let model = XmlLabelParser::read_file(file)?;

    println!("== {} ==", file);
    match model.template() {
        Some(template) => println!(
            "template: {} ({} frame(s), page {} x {})",
            template.name(),
            template.frames().len(),
            template.page_width,
            template.page_height
        ),
        None => println!("template: none"),
    }
    println!("rotate:   {}", model.rotate());
    println!("label:    {} x {}", model.w(), model.h());

    println!("objects:  {}", model.object_count());
    for object in model.objects() {
        let detail = match object {
            ObjectType::Text(o) => format!(" {:?}", o.text),
            ObjectType::Image(o) => format!(" src={:?}", o.filename.data()),
            ObjectType::Barcode(o) => format!(" style={} data={:?}", o.style_id, o.bc_data.data()),
            _ => String::new(),
        };
        println!(
            "  {:8} at ({}, {}) size {} x {}{}",
            object.type_name(),
            object.common().x0,
            object.common().y0,
            object.common().w,
            object.common().h,
            detail
        );
    }

    println!(
        "merge:    {} (src {:?})",
        model.merge().id(),
        model.merge().source()
    );
    println!("variables: {}", model.variables().len());
    for variable in model.variables().iter() {
        println!(
            "  {} ({}) = {:?}",
            variable.name(),
            variable.var_type().name(),
            variable.initial_value()
        );
    }

    if !model.diagnostics.is_empty() {
        println!("diagnostics:");
        for issue in &model.diagnostics {
            println!("  [{}] {}", issue.severity(), issue);
        }
    }
    println!();
    Ok(())
}
