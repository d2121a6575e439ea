use clap::{App, Arg, SubCommand};
use std::fs;
use std::path::PathBuf;
use std::process;

//===========================================================================//

fn main() {
    let matches = App::new("icotool")
        .version("0.1")
        .about("Inspects ICO files and converts BMP files to ICO")
        .subcommand(
            SubCommand::with_name("convert")
                .about("Creates an ICO file from a 24-bit BMP file")
                .arg(
                    Arg::with_name("output")
                        .takes_value(true)
                        .value_name("PATH")
                        .short("o")
                        .long("output")
                        .help("Sets output path"),
                )
                .arg(Arg::with_name("bmp").required(true)),
        )
        .subcommand(
            SubCommand::with_name("list")
                .about("Lists images in an ICO file")
                .arg(Arg::with_name("ico").required(true)),
        )
        .subcommand(
            SubCommand::with_name("resheader")
                .about("Prints the icon group resource for an ICO file")
                .arg(Arg::with_name("ico").required(true)),
        )
        .get_matches();
    let result = if let Some(submatches) =
        matches.subcommand_matches("convert")
    {
        let path = submatches.value_of("bmp").unwrap();
        let out_path = if let Some(path) = submatches.value_of("output") {
            PathBuf::from(path)
        } else {
            PathBuf::from(path).with_extension("ico")
        };
        convert(path, out_path)
    } else if let Some(submatches) = matches.subcommand_matches("list") {
        list(submatches.value_of("ico").unwrap())
    } else if let Some(submatches) = matches.subcommand_matches("resheader")
    {
        resheader(submatches.value_of("ico").unwrap())
    } else {
        Ok(())
    };
    if let Err(error) = result {
        eprintln!("error: {}", error);
        process::exit(1);
    }
}

fn convert(path: &str, out_path: PathBuf) -> icores::Result<()> {
    let bitmap = icores::Bitmap::open(path)?;
    println!(
        "Converting {:?} ({}x{}, {} bpp)",
        path,
        bitmap.width(),
        bitmap.height(),
        bitmap.bit_depth()
    );
    let icon = icores::Icon::from_bitmap(&bitmap)?;
    let out_file = match fs::File::create(&out_path) {
        Ok(file) => file,
        Err(source) => {
            return Err(icores::Error::DestinationUnavailable {
                path: out_path,
                source,
            })
        }
    };
    icon.write(out_file)?;
    println!("Wrote {:?}", out_path);
    Ok(())
}

fn list(path: &str) -> icores::Result<()> {
    let icon = icores::Icon::open(path)?;
    for (entry, data) in icon.entries().iter().zip(icon.images()) {
        let kind = if data.starts_with(b"\x89PNG") { "PNG" } else { "BMP" };
        println!(
            "{:5}: {}x{} {}, {} bpp, {} bytes",
            entry.icon_id(),
            entry.width(),
            entry.height(),
            kind,
            entry.bit_count(),
            entry.resource_size()
        );
    }
    Ok(())
}

fn resheader(path: &str) -> icores::Result<()> {
    let icon = icores::Icon::open(path)?;
    for line in icon.resource_header().chunks(16) {
        let hex: Vec<String> =
            line.iter().map(|byte| format!("{:02x}", byte)).collect();
        println!("{}", hex.join(" "));
    }
    Ok(())
}

//===========================================================================//
