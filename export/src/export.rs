use crate::cli::ExportArgs;
use crate::error::Error;
use log::info;
use openapi_om_schema::construct::{from_json, from_yaml};
use openapi_om_schema::{Any, Canonicalizer, FieldNaming, Format, OpenApi, Validator};
use serde::de::DeserializeOwned;
use std::fs::{self, File};
use std::io::{self, prelude::*};
use std::path::Path;

pub fn export(args: &ExportArgs) -> Result<(), Error> {
    let naming = if args.strip_underscores {
        FieldNaming::StripTrailingUnderscores
    } else {
        FieldNaming::Explicit
    };
    let canonicalizer = Canonicalizer::with_naming(naming).pretty(args.pretty);
    let format = output_format(args);

    let text = if args.raw {
        let value: Any = read_document(&args.input)?;
        canonicalizer.emit(&canonicalizer.canonicalize_raw(value), format)?
    } else {
        let doc: OpenApi = read_document(&args.input)?;
        if args.validate {
            Validator::new().validate(&doc)?;
        }
        canonicalizer.emit(&doc, format)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, terminated(text))?;
            info!("wrote {format} document to {}", path.display());
        }
        None => io::stdout().lock().write_all(terminated(text).as_bytes())?,
    }

    Ok(())
}

fn output_format(args: &ExportArgs) -> Format {
    args.format
        .or_else(|| args.output.as_deref().and_then(Format::from_path))
        .unwrap_or_default()
}

fn read_document<T>(file: &Path) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let mut content = String::new();

    if file == Path::new("-") {
        io::stdin().lock().read_to_string(&mut content)?;
        return Ok(from_yaml(&content)?);
    }

    File::open(file)?.read_to_string(&mut content)?;

    let extension = file
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(Error::arg("Input file needs a .json, .yaml or .yml extension."))?;

    match extension {
        "json" => Ok(from_json(&content)?),
        "yaml" | "yml" => Ok(from_yaml(&content)?),
        _ => Err(Error::Arg(format!("Unsupported input extension `{extension}`."))),
    }
}

fn terminated(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
