pub mod caesar;
pub mod score;
pub mod substitution;

use cipherforge::error::CfResult;
use std::io::Read;

/// Text given on the command line, or all of stdin when it was left out.
pub fn resolve_text(arg: Option<String>) -> CfResult<String> {
    match arg {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
