use crate::cli::{
    args::DecodeArgs,
    commands::{read_input, write_output},
    global::GlobalArgs,
};
use base85::Settings;

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args.file.as_ref(), global, settings)?;

    // Surrounding whitespace (a trailing newline from `encode`, say) is not
    // part of the encoded text
    let text = input.trim_ascii();
    let data = base85::decode(text).inspect_err(|e| {
        if let Some(offset) = e.position() {
            log::debug!("decoding stopped at offset {} of the trimmed input", offset);
        }
    })?;
    log::debug!("decoded {} symbols into {} bytes", text.len(), data.len());

    if args.hex {
        let mut hex = hex::encode(&data);
        hex.push('\n');
        write_output(args.output.as_ref(), hex.as_bytes())
    } else {
        write_output(args.output.as_ref(), &data)
    }
}
