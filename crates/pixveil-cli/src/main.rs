use clap::{crate_description, crate_version, Arg, ArgAction, ArgMatches, Command};

use std::path::{Path, PathBuf};

use pixveil_core::commands::reveal_raw;
use pixveil_core::{api, CodecOptions, Result};

fn main() -> Result<()> {
    env_logger::init();

    let matches = Command::new("Pixveil CLI")
        .version(crate_version!())
        .about(crate_description!())
        .arg_required_else_help(true)
        .subcommand(
            Command::new("hide")
                .about("Hides a message or a file in a PNG image")
                .arg(
                    Arg::new("media")
                        .short('i')
                        .long("in")
                        .value_name("media file")
                        .required(true)
                        .help("PNG image used as carrier, read only."),
                )
                .arg(
                    Arg::new("write_to_file")
                        .short('o')
                        .long("out")
                        .value_name("output image file")
                        .required(true)
                        .help("Final image will be stored as file"),
                )
                .arg(
                    Arg::new("data_file")
                        .short('d')
                        .long("data")
                        .value_name("data file")
                        .required_unless_present("message")
                        .conflicts_with("message")
                        .help("File to hide in the image"),
                )
                .arg(
                    Arg::new("message")
                        .short('m')
                        .long("message")
                        .value_name("text message")
                        .required(false)
                        .help("A text message that will be hidden"),
                )
                .arg(
                    Arg::new("no_compress")
                        .long("no-compress")
                        .action(ArgAction::SetTrue)
                        .help("Embed the payload without compressing it first"),
                ),
        )
        .subcommand(
            Command::new("reveal")
                .about("Reveals data hidden in a PNG image")
                .arg(
                    Arg::new("input_image")
                        .short('i')
                        .long("in")
                        .value_name("image source file")
                        .required(true)
                        .help("Source image that contains secret data"),
                )
                .arg(
                    Arg::new("output_folder")
                        .short('o')
                        .long("out")
                        .value_name("output folder")
                        .required(true)
                        .help("Recovered data will be stored in that folder"),
                ),
        )
        .subcommand(
            Command::new("reveal-raw")
                .about("Reveals the raw embedded stream of a PNG image")
                .arg(
                    Arg::new("input_image")
                        .short('i')
                        .long("in")
                        .value_name("image source file")
                        .required(true)
                        .help("Source image that contains secret data"),
                )
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("out")
                        .value_name("output file")
                        .required(true)
                        .help("Raw data will be stored as binary file"),
                ),
        )
        .arg(
            Arg::new("bits_per_channel")
                .long("x-bits-per-channel")
                .value_name("bits per color channel")
                .default_value("1")
                .required(false)
                .help("Experimental: low bits used per color channel, 1 to 8"),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("hide", m)) => {
            let mut api = api::hide::prepare()
                .with_image(m.get_one::<String>("media").unwrap())
                .with_output(m.get_one::<String>("write_to_file").unwrap())
                .use_message(m.get_one::<String>("message"))
                .use_file(m.get_one::<String>("data_file").map(PathBuf::from))
                .with_options(get_options(&matches));

            if m.get_flag("no_compress") {
                api = api.without_compression();
            }

            api.execute()?;
        }
        Some(("reveal", m)) => {
            let written = api::reveal::prepare()
                .from_secret_image(m.get_one::<String>("input_image").unwrap())
                .into_output_folder(m.get_one::<String>("output_folder").unwrap())
                .with_options(get_options(&matches))
                .execute()?;

            println!("Recovered data was written to {}", written.display());
        }
        Some(("reveal-raw", m)) => {
            reveal_raw(
                Path::new(m.get_one::<String>("input_image").unwrap()),
                Path::new(m.get_one::<String>("output_file").unwrap()),
                &get_options(&matches),
            )?;
        }
        _ => {}
    }

    Ok(())
}

fn get_options(args: &ArgMatches) -> CodecOptions {
    let mut c = CodecOptions::default();
    if args.contains_id("bits_per_channel") {
        c.bits_per_channel = args
            .get_one::<String>("bits_per_channel")
            .unwrap()
            .parse()
            .expect("bits per channel must be a number");
    }
    c
}
