use crate::cli::{
    args::EncodeArgs,
    commands::{read_input, write_output},
    global::GlobalArgs,
};
use base85::Settings;

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(args.file.as_ref(), global, settings)?;

    let mut encoded = base85::encode(&data);
    log::debug!("encoded {} bytes into {} symbols", data.len(), encoded.len());

    // Files get the bare text; the newline is a terminal convenience
    if args.output.is_none() && settings.trailing_newline && !args.no_newline {
        encoded.push('\n');
    }

    write_output(args.output.as_ref(), encoded.as_bytes())
}
