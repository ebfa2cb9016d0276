use clap::Parser;
use frrid_cat::FrameParser;
use frrid_frame::{DecoderConfig, Oui};

/// `cat` for French Remote ID beacons.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The 802.11 frame to parse, hex encoded.
    #[clap(value_parser(clap::builder::NonEmptyStringValueParser::new()))]
    input: String,

    /// The OUI of the vendor specific element carrying Remote ID records.
    #[clap(long, value_parser = parse_oui, default_value = "6a:5c:35")]
    oui: Oui,

    /// The frame ends with its Frame Check Sequence.
    #[clap(long)]
    fcs: bool,

    /// The input is an Information Element list instead of a frame.
    #[clap(long)]
    elements: bool,
}

fn parse_oui(s: &str) -> Result<Oui, String> {
    s.parse()
        .map_err(|_| format!("`{s}` is not an OUI, expected 3 hex octets"))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let parser = FrameParser::new(DecoderConfig {
        authority_oui: args.oui,
    })
    .with_fcs(args.fcs);

    let output = if args.elements {
        parser.parse_elements(&args.input)
    } else {
        parser.parse_hex(&args.input)
    };

    match output {
        Ok(output) => print!("{output}"),
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    }
}
