//! Diagnostic output
//!
//! The extension listing is informational only. It is never compared with
//! the extensions actually enabled on the instance.

use crate::backend::ExtensionDescriptor;
use std::io::{self, Write};

/// Write the platform extension listing, one tab-prefixed name per line, in the given order
pub fn write_extension_listing<W: Write>(
    out: &mut W,
    extensions: &[ExtensionDescriptor],
) -> io::Result<()> {
    writeln!(out, "available extensions:")?;
    for extension in extensions {
        writeln!(out, "\t{}", extension.name)?;
    }
    out.flush()
}

/// Print the extension listing to stdout
pub fn print_extension_listing(extensions: &[ExtensionDescriptor]) {
    let stdout = io::stdout();
    if let Err(e) = write_extension_listing(&mut stdout.lock(), extensions) {
        log::warn!("Failed to print extension listing: {}", e);
    }
}
