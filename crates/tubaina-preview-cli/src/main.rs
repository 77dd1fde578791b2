use anyhow::Result;
use std::io::Write;
use std::{env, path::PathBuf, process};
use tubaina_preview_engine::{io, render_document};

/// Stylesheet baked into the preview so authors get a readable page without
/// installing anything else. The engine accepts any style string.
const DEFAULT_STYLE: &str = "<style>\n\
body { font-family: Georgia, serif; max-width: 46em; margin: 2em auto; padding: 0 1em; }\n\
div.chapter > h1 { border-bottom: 2px solid #444; }\n\
div.section > h2 { border-bottom: 1px solid #999; }\n\
div.title > h3 { font-style: italic; }\n\
pre.code { background: #f4f4f4; border-left: 3px solid #999; padding: 0.75em; overflow-x: auto; }\n\
p.caption { font-size: smaller; font-style: italic; text-align: center; }\n\
</style>";

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <book.afc>", args[0]);
        process::exit(1);
    }

    let path = PathBuf::from(&args[1]);
    let text = match io::read_document(&path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: cannot read '{}': {e}", path.display());
            process::exit(1);
        }
    };

    let output = render_document(&text, DEFAULT_STYLE);
    for warning in &output.warnings {
        eprintln!("warning: {warning}");
    }
    std::io::stdout().write_all(output.html.as_bytes())?;
    Ok(())
}
