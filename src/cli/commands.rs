use base85::Settings;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use super::global::GlobalArgs;

/// Reads the whole input from `file` or stdin, enforcing `max_size`.
///
/// Files are checked before reading; stdin can only be measured after.
pub fn read_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let max_size = settings.max_size;

    if let Some(file_path) = file {
        if max_size > 0 {
            let metadata = fs::metadata(file_path)
                .map_err(|e| format!("Cannot open '{}': {}", file_path.display(), e))?;
            let file_size = metadata.len() as usize;

            if file_size > max_size {
                if global.force {
                    if !global.quiet {
                        eprintln!(
                            "Warning: Processing large file ({} bytes, limit: {} bytes)",
                            file_size, max_size
                        );
                    }
                } else {
                    return Err(format!(
                        "File size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
                        file_size, max_size
                    )
                    .into());
                }
            }
        }

        log::debug!("reading input from {}", file_path.display());
        return Ok(fs::read(file_path)
            .map_err(|e| format!("Cannot read '{}': {}", file_path.display(), e))?);
    }

    let mut buffer = Vec::new();
    io::stdin().read_to_end(&mut buffer)?;

    if max_size > 0 && buffer.len() > max_size {
        if !global.force {
            return Err(format!(
                "Input size ({} bytes) exceeds maximum ({} bytes). Use --force to process anyway.",
                buffer.len(),
                max_size
            )
            .into());
        }
        if !global.quiet {
            eprintln!(
                "Warning: Processing large input ({} bytes, limit: {} bytes)",
                buffer.len(),
                max_size
            );
        }
    }

    log::debug!("read {} bytes from stdin", buffer.len());
    Ok(buffer)
}

/// Writes `data` to `output`, or to stdout when no path is given.
pub fn write_output(
    output: Option<&PathBuf>,
    data: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            fs::write(path, data)
                .map_err(|e| format!("Cannot write '{}': {}", path.display(), e))?;
            log::debug!("wrote {} bytes to {}", data.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
